pub mod config;
pub mod registry;
pub mod rule;

pub use config::RegistryConfig;
pub use registry::{ConvertError, ConverterRegistry};
pub use rule::{ConversionRule, Priority, RegionInterface};
