//! Storage implementations for the settings store

pub mod memory;

pub use memory::InMemorySettingsRepository;
