mod page_context;
mod sut_directory;
mod text_provider;

pub use page_context::PageContext;
pub use sut_directory::SutDirectory;
pub use text_provider::TextProvider;
