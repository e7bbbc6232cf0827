// Adapters - External system implementations

pub mod rand_picker;
pub mod text_catalog;
pub mod toml_config;

// Re-export adapters
pub use rand_picker::RandomPicker;
pub use text_catalog::TextCatalogLoader;
pub use toml_config::{ConfigLayer, SessionConfig, TomlConfigAdapter};
