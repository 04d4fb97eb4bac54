mod children;
pub(crate) mod coerce;
mod key;
mod resolved;
pub mod text_keys;

pub use children::Children;
pub use coerce::RawParameters;
pub use key::ParameterKey;
pub use resolved::{ReportHeading, ResolvedParameters};
