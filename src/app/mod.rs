pub mod api;
pub mod cli;
mod context;

pub use context::AppContext;
