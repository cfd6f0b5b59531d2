#![warn(clippy::pedantic)]

mod service;
mod settings;

pub mod log;
pub mod unload;

pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService, Theme};
