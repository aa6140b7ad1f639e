//! Domain layer - resolution, formatting and store orchestration

pub mod events;
pub mod formatter;
pub mod merge;
pub mod repository;
pub mod service;

pub use events::{ChangeNotifier, NoOpChangeNotifier, SettingEvent};
pub use repository::SettingsRepository;
pub use service::Service;
