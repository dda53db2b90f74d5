//! Driver plumbing: errors and persisted settings

pub mod error;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use settings::{load_settings, read_settings, save_settings, settings_path, Settings};
