//! Configuration loaded from `.keyforge.toml`.

pub mod settings;

pub use settings::Settings;
