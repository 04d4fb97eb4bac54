//! File-driven entry points used by the CLI.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::AppContext;
use crate::domain::configuration::parse_config_content;
use crate::domain::parameters::text_keys;
use crate::domain::{
    AppConfig, AppError, Page, ParameterKey, RawParameters, ReportHeading, ResolvedParameters,
};
use crate::ports::TextProvider;
use crate::services::MessageBundle;
use crate::services::adapters::CatalogFile;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "HISTORIC_PARAMS_CONFIG";

/// Inputs of one `resolve` run.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub catalog: PathBuf,
    pub space_key: String,
    pub page_title: String,
    pub execution_id: String,
    /// `key=value` assignments as typed on the command line.
    pub parameters: Vec<String>,
    pub locale: Option<String>,
    pub messages: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Resolved parameters together with their computed headings.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveOutcome {
    pub parameters: ResolvedParameters,
    pub heading: ReportHeading,
}

/// A failed run: the error plus its message in the selected locale.
#[derive(Debug)]
pub struct ResolveFailure {
    pub error: AppError,
    pub message: String,
}

impl From<AppError> for ResolveFailure {
    fn from(error: AppError) -> Self {
        let message = error.to_string();
        Self { error, message }
    }
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Resolve parameters against a catalog file.
pub fn resolve(request: &ResolveRequest) -> Result<ResolveOutcome, ResolveFailure> {
    let config = load_config(request.config.as_deref())?;
    let locale = request.locale.clone().unwrap_or_else(|| config.locale.clone());
    let texts = load_messages(&locale, request.messages.as_deref())?;

    let raw = parse_assignments(&request.parameters)?;
    let catalog = CatalogFile::load(&request.catalog)?;
    let page = Page::new(request.page_title.clone());

    let ctx = AppContext::new(catalog, texts, config);
    match ctx.resolve(&raw, &request.space_key, &page, &request.execution_id) {
        Ok(parameters) => {
            let heading = parameters.heading(ctx.texts());
            Ok(ResolveOutcome { parameters, heading })
        }
        Err(error) => {
            let message = describe_error(&error, ctx.texts());
            Err(ResolveFailure { error, message })
        }
    }
}

/// Load configuration from `path`, then `$HISTORIC_PARAMS_CONFIG`, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => env::var_os(CONFIG_ENV).map(PathBuf::from),
    };
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let content = fs::read_to_string(&path).map_err(|err| {
        AppError::config_error(format!("Failed to read config {}: {err}", path.display()))
    })?;
    parse_config_content(&content)
}

/// Embedded catalog for `locale`, overlaid with a user message file when given.
pub fn load_messages(locale: &str, overrides: Option<&Path>) -> Result<MessageBundle, AppError> {
    let bundle = MessageBundle::for_locale(locale)?;
    let Some(path) = overrides else {
        return Ok(bundle);
    };

    let content = fs::read_to_string(path).map_err(|err| {
        AppError::config_error(format!("Failed to read messages {}: {err}", path.display()))
    })?;
    bundle.with_overrides(&content)
}

/// Parse `key=value` assignments, rejecting names outside the recognized set.
pub fn parse_assignments(assignments: &[String]) -> Result<RawParameters, AppError> {
    let mut raw = RawParameters::new();
    for assignment in assignments {
        let (name, value) = assignment.split_once('=').ok_or_else(|| AppError::ParseError {
            what: "parameter assignment".to_string(),
            details: format!("'{assignment}' is not of the form key=value"),
        })?;
        let key: ParameterKey = name.parse()?;
        raw.insert(key.as_str().to_string(), value.to_string());
    }
    Ok(raw)
}

/// User-facing message for an error, localized where a catalog entry exists.
pub fn describe_error(err: &AppError, texts: &impl TextProvider) -> String {
    match err {
        AppError::SutNotFound { key } => texts.format(
            text_keys::SUT_NOT_IN_SELECTION,
            &[key.clone().unwrap_or_default()],
        ),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::EchoTextProvider;

    fn assignments(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn assignments_keep_everything_after_first_equals() {
        let raw = parse_assignments(&assignments(&["title=a=b", "width=10"])).unwrap();
        assert_eq!(raw.get("title").map(String::as_str), Some("a=b"));
        assert_eq!(raw.get("width").map(String::as_str), Some("10"));
    }

    #[test]
    fn assignment_without_equals_is_rejected() {
        let err = parse_assignments(&assignments(&["border"])).unwrap_err();
        assert!(matches!(err, AppError::ParseError { .. }));
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let err = parse_assignments(&assignments(&["colour=red"])).unwrap_err();
        assert!(matches!(err, AppError::UnknownParameter { ref name, .. } if name == "colour"));
    }

    #[test]
    fn sut_not_found_is_localized() {
        let err = AppError::SutNotFound { key: Some("java".to_string()) };
        let message = describe_error(&err, &EchoTextProvider::new());
        assert_eq!(message, "<historic.sut_not_in_selection>[java]");
    }

    #[test]
    fn other_errors_use_display() {
        let err = AppError::SpaceNotFound("DEMO".to_string());
        assert_eq!(describe_error(&err, &EchoTextProvider::new()), "Space 'DEMO' not found");
    }

    #[test]
    fn explicit_config_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "locale = \"fr\"\n[defaults]\nheight = 420\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.locale, "fr");
        assert_eq!(config.defaults.height, 420);
    }

    #[test]
    fn missing_config_file_is_a_configuration_error() {
        let err = load_config(Some(Path::new("/nonexistent/historic.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn missing_messages_file_names_the_path() {
        let err = load_messages("en", Some(Path::new("/nonexistent/messages.toml"))).unwrap_err();
        assert!(matches!(
            err,
            AppError::Configuration(ref message)
                if message.starts_with("Failed to read messages /nonexistent/messages.toml")
        ));
    }

    #[test]
    fn uppercase_locale_loads_the_embedded_catalog() {
        let bundle = load_messages("FR", None).unwrap();
        assert_eq!(bundle.locale(), "fr");
    }
}
