pub mod cipher;
pub mod transformer;

pub use crate::domain::model::{Choice, LineEnding, TransformSummary};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
