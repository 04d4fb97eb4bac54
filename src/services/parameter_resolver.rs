//! Turns raw macro parameters into [`ResolvedParameters`].

use tracing::{debug, warn};

use crate::domain::parameters::coerce;
use crate::domain::{
    AppError, Children, Page, ParameterDefaults, ParameterKey, RawParameters, ResolvedParameters,
    SystemUnderTest,
};
use crate::ports::{PageContext, SutDirectory};

/// Resolves macro parameters against a system-under-test directory.
///
/// Holds only borrowed collaborators and copied defaults, so one resolver can
/// serve any number of invocations.
pub struct ParameterResolver<'a, D: SutDirectory + ?Sized, P: PageContext + ?Sized> {
    directory: &'a D,
    pages: &'a P,
    defaults: ParameterDefaults,
}

impl<'a, D: SutDirectory + ?Sized, P: PageContext + ?Sized> ParameterResolver<'a, D, P> {
    pub fn new(directory: &'a D, pages: &'a P) -> Self {
        Self { directory, pages, defaults: ParameterDefaults::default() }
    }

    pub fn with_defaults(mut self, defaults: ParameterDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Resolve one macro invocation.
    ///
    /// Fails with [`AppError::InvalidParameterFormat`] on a malformed number and
    /// with [`AppError::SutNotFound`] when no system under test matches.
    /// Collaborator errors are returned unchanged.
    pub fn resolve(
        &self,
        raw: &RawParameters,
        space_key: &str,
        page: &Page,
        execution_id: &str,
    ) -> Result<ResolvedParameters, AppError> {
        let defaults = &self.defaults;

        let width = coerce::int_or(raw, ParameterKey::Width, defaults.width)?;
        let height = coerce::int_or(raw, ParameterKey::Height, defaults.height)?;
        let border = coerce::bool_or(raw, ParameterKey::Border, false);
        let children = coerce::children_or(raw, ParameterKey::Children, Children::None);
        let max_result = coerce::int_or(raw, ParameterKey::MaxResult, defaults.max_result)?;
        let target_system = self.resolve_target_system(raw, space_key, page)?;
        let show_ignored = coerce::bool_or(raw, ParameterKey::ShowIgnored, false);

        let title = coerce::string(raw, ParameterKey::Title);
        let sub_title = coerce::string(raw, ParameterKey::SubTitle);
        let sub_title2 = coerce::string(raw, ParameterKey::SubTitle2);
        let labels = coerce::string(raw, ParameterKey::Labels);

        // Popup size follows the chart size once children are included.
        let (popup_width_default, popup_height_default) = match children {
            Children::None => (defaults.popup_width, defaults.popup_height),
            Children::First | Children::All => (width, height),
        };
        let popup_width = coerce::int_or(raw, ParameterKey::PopupWidth, popup_width_default)?;
        let popup_height = coerce::int_or(raw, ParameterKey::PopupHeight, popup_height_default)?;

        Ok(ResolvedParameters {
            space_key: space_key.to_string(),
            page: page.clone(),
            execution_id: execution_id.to_string(),
            width,
            height,
            border,
            children,
            max_result,
            target_system,
            show_ignored,
            title,
            sub_title,
            sub_title2,
            labels,
            popup_width,
            popup_height,
        })
    }

    fn resolve_target_system(
        &self,
        raw: &RawParameters,
        space_key: &str,
        page: &Page,
    ) -> Result<SystemUnderTest, AppError> {
        let key = match coerce::string(raw, ParameterKey::Sut) {
            Some(explicit) => {
                debug!(sut = %explicit, "using explicit system under test");
                Some(explicit)
            }
            None if self.pages.is_executable(page) => {
                let selection = self.pages.selected_sut_info(page)?;
                let name = sut_name_from_selection(&selection);
                debug!(%selection, sut = %name, "using system under test selected on page");
                Some(name.to_string())
            }
            None => {
                let repository = self.directory.home_repository(space_key)?;
                let project_suts = self.directory.suts_of_associated_project(&repository.uid)?;
                if let Some(default) = project_suts.into_iter().find(|sut| sut.is_default) {
                    debug!(
                        sut = %default.name,
                        repository = %repository.uid,
                        "using project default system under test"
                    );
                    return Ok(default);
                }
                debug!(repository = %repository.uid, "project has no default system under test");
                None
            }
        };

        self.find_in_space(key, space_key)
    }

    fn find_in_space(
        &self,
        key: Option<String>,
        space_key: &str,
    ) -> Result<SystemUnderTest, AppError> {
        let suts = self.directory.suts_of_space(space_key)?;
        let found = suts.into_iter().find(|sut| key.as_deref() == Some(sut.name.as_str()));
        match found {
            Some(sut) => Ok(sut),
            None => {
                warn!(sut = ?key, space = space_key, "system under test not in space selection");
                Err(AppError::SutNotFound { key })
            }
        }
    }
}

/// Everything after the first `@`; the whole string when there is none.
fn sut_name_from_selection(selection: &str) -> &str {
    selection.split_once('@').map_or(selection, |(_, name)| name)
}
