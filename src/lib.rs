pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{settings::Settings, toml_config::TomlConfig};
pub use crate::core::comparator::NumberComparator;
pub use crate::domain::model::{Comparison, Operand};
pub use crate::utils::error::{CompareError, Result};
