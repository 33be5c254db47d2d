pub mod comparator;
pub mod input;

pub use crate::domain::model::{Comparison, Operand};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
