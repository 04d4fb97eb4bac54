//! Localized text port definition.

/// Port for localized, user-facing strings.
pub trait TextProvider {
    /// Text for `key` with no substitution.
    fn text(&self, key: &str) -> String;

    /// Text for `key` with its positional placeholders filled from `args` in order.
    fn format(&self, key: &str, args: &[String]) -> String;
}

impl<T: TextProvider + ?Sized> TextProvider for &T {
    fn text(&self, key: &str) -> String {
        (**self).text(key)
    }

    fn format(&self, key: &str, args: &[String]) -> String {
        (**self).format(key, args)
    }
}
