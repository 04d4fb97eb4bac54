use crate::domain::{AppConfig, AppError, Page, RawParameters, ResolvedParameters};
use crate::ports::{PageContext, SutDirectory, TextProvider};
use crate::services::ParameterResolver;

/// Application context holding the collaborators of one resolution run.
pub struct AppContext<S: SutDirectory + PageContext, T: TextProvider> {
    service: S,
    texts: T,
    config: AppConfig,
}

impl<S: SutDirectory + PageContext, T: TextProvider> AppContext<S, T> {
    /// Create a new application context.
    pub fn new(service: S, texts: T, config: AppConfig) -> Self {
        Self { service, texts, config }
    }

    /// Get a reference to the localized text provider.
    pub fn texts(&self) -> &T {
        &self.texts
    }

    /// Resolve one macro invocation with the configured defaults.
    pub fn resolve(
        &self,
        raw: &RawParameters,
        space_key: &str,
        page: &Page,
        execution_id: &str,
    ) -> Result<ResolvedParameters, AppError> {
        ParameterResolver::new(&self.service, &self.service)
            .with_defaults(self.config.defaults)
            .resolve(raw, space_key, page, execution_id)
    }
}
