//! vidcat Library
//!
//! Session core for an interactive video catalog: playback state machine,
//! playlists, search and moderation, behind a line-oriented command surface.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::SessionController;
pub use domain::errors::{SessionError, SessionResult};
pub use domain::model::{PlaybackState, Video, VideoCatalog};
pub use error::{VidcatError, VidcatResult};
pub use ports::{CatalogSource, VideoPicker};
