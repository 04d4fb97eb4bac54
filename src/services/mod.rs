pub mod adapters;
mod message_bundle;
mod parameter_resolver;

pub use message_bundle::MessageBundle;
pub use parameter_resolver::ParameterResolver;
