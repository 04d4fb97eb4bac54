//! historic-params: resolve historic report macro parameters into a typed, validated view.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{ResolveFailure, ResolveOutcome, ResolveRequest};
pub use domain::{
    AppConfig, AppError, Children, Page, ParameterDefaults, ParameterKey, RawParameters,
    ReportHeading, Repository, ResolvedParameters, SystemUnderTest,
};
pub use ports::{PageContext, SutDirectory, TextProvider};
pub use services::adapters::CatalogFile;
pub use services::{MessageBundle, ParameterResolver};

/// Resolve one macro invocation with the declared defaults.
///
/// `service` answers both directory and page-context queries. Use
/// [`ParameterResolver`] directly when the two live in separate objects or
/// when defaults come from configuration.
pub fn resolve<S: SutDirectory + PageContext>(
    service: &S,
    raw: &RawParameters,
    space_key: &str,
    page: &Page,
    execution_id: &str,
) -> Result<ResolvedParameters, AppError> {
    ParameterResolver::new(service, service).resolve(raw, space_key, page, execution_id)
}
