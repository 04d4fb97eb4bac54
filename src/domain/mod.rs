pub mod configuration;
pub mod directory;
pub mod error;
pub mod parameters;

pub use configuration::{AppConfig, ParameterDefaults};
pub use directory::{Page, Repository, SystemUnderTest};
pub use error::AppError;
pub use parameters::{
    Children, ParameterKey, RawParameters, ReportHeading, ResolvedParameters, text_keys,
};
