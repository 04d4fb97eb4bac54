//! Page capability and selection port definition.

use crate::domain::{AppError, Page};

/// Port answering questions about the page a macro is rendered on.
pub trait PageContext {
    /// Whether the page can be executed against a system under test.
    fn is_executable(&self, page: &Page) -> bool;

    /// Current system-under-test selection for the page, formatted `<prefix>@<sut name>`.
    fn selected_sut_info(&self, page: &Page) -> Result<String, AppError>;
}
