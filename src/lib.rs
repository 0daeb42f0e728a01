pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use app::Menu;
pub use crate::core::{cipher::shift, transformer::FileTransformer};
pub use domain::model::{Choice, LineEnding, TransformSummary};
pub use utils::error::{CipherError, Result};
