use std::collections::HashMap;

use crate::ports::TextProvider;

/// Renders every key as `<key>` unless an override is registered.
#[derive(Debug, Default, Clone)]
pub struct EchoTextProvider {
    overrides: HashMap<String, String>,
}

impl EchoTextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, text: &str) -> Self {
        self.overrides.insert(key.to_string(), text.to_string());
        self
    }
}

impl TextProvider for EchoTextProvider {
    fn text(&self, key: &str) -> String {
        self.overrides.get(key).cloned().unwrap_or_else(|| format!("<{key}>"))
    }

    fn format(&self, key: &str, args: &[String]) -> String {
        format!("{}[{}]", self.text(key), args.join("|"))
    }
}
