mod echo_text;
mod fake_directory;

pub use echo_text::EchoTextProvider;
pub use fake_directory::{FakePageContext, FakeSutDirectory};
