// Application layer - Session state and the controller that composes it

pub mod moderation;
pub mod playback;
pub mod playlist_store;
pub mod session;

// Re-export the stores and controller
pub use moderation::ModerationRegistry;
pub use playback::PlaybackSession;
pub use playlist_store::{Playlist, PlaylistStore};
pub use session::SessionController;
