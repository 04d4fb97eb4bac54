use std::collections::HashMap;
use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};
use tracing::warn;

use crate::domain::AppError;
use crate::ports::TextProvider;

static I18N_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/i18n");

const FALLBACK_LOCALE: &str = "en";

/// Message catalog backed by flat TOML tables.
///
/// Lookups fall back to English, then to the key itself.
#[derive(Debug, Clone)]
pub struct MessageBundle {
    locale: String,
    messages: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl MessageBundle {
    /// Embedded catalog for `tag`, trying the language part (`fr` for `fr-CA`) second.
    ///
    /// Tags are matched case-insensitively.
    pub fn for_locale(tag: &str) -> Result<Self, AppError> {
        let normalized = tag.to_ascii_lowercase();
        let language = normalized.split(['-', '_']).next().unwrap_or(&normalized);
        let locale = [normalized.as_str(), language]
            .into_iter()
            .find(|candidate| embedded_catalog(candidate).is_some())
            .ok_or_else(|| AppError::UnknownLocale(tag.to_string()))?;

        let messages = parse_embedded(locale)?;
        let fallback = parse_embedded(FALLBACK_LOCALE)?;
        Ok(Self { locale: locale.to_string(), messages, fallback })
    }

    /// English catalog.
    pub fn english() -> Result<Self, AppError> {
        Self::for_locale(FALLBACK_LOCALE)
    }

    /// Catalog built from user TOML, still falling back to English.
    pub fn from_toml_str(locale: &str, content: &str) -> Result<Self, AppError> {
        Ok(Self {
            locale: locale.to_string(),
            messages: parse_catalog(content)?,
            fallback: parse_embedded(FALLBACK_LOCALE)?,
        })
    }

    /// Overlay entries from user TOML onto this catalog.
    pub fn with_overrides(mut self, content: &str) -> Result<Self, AppError> {
        self.messages.extend(parse_catalog(content)?);
        Ok(self)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Locales shipped with the binary, sorted.
    pub fn available_locales() -> Vec<String> {
        let mut locales: Vec<String> = I18N_DIR
            .files()
            .filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|file| file.path().file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect();
        locales.sort();
        locales
    }

    fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).or_else(|| self.fallback.get(key)).map(String::as_str).unwrap_or(key)
    }
}

impl TextProvider for MessageBundle {
    fn text(&self, key: &str) -> String {
        self.lookup(key).to_string()
    }

    fn format(&self, key: &str, args: &[String]) -> String {
        render_message(self.lookup(key), args)
    }
}

fn embedded_catalog(locale: &str) -> Option<&'static str> {
    I18N_DIR.get_file(format!("{locale}.toml")).and_then(|file| file.contents_utf8())
}

fn parse_embedded(locale: &str) -> Result<HashMap<String, String>, AppError> {
    let content =
        embedded_catalog(locale).ok_or_else(|| AppError::UnknownLocale(locale.to_string()))?;
    parse_catalog(content)
}

fn parse_catalog(content: &str) -> Result<HashMap<String, String>, AppError> {
    Ok(toml::from_str(content)?)
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render a catalog entry with `{{ args[N] }}` placeholders.
///
/// A template that fails to render (bad syntax, index out of range) is
/// returned verbatim.
fn render_message(template: &str, args: &[String]) -> String {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    match env.render_str(template, context! { args => args }) {
        Ok(rendered) => rendered,
        Err(err) => {
            warn!(%template, error = %err, "message template left unrendered");
            template.to_string()
        }
    }
}
