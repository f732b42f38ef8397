mod catalog;
mod config;

pub use self::catalog::{Category, Folder, ServerStatus};
pub use self::config::{AppConfig, RemoteConfig, config_path, load_config, save_config};
