// Domain rules - Matching, normalization and ordering policies

use std::cmp::Ordering;

use crate::domain::model::Video;

/// Normalize a tag to catalog form: trimmed, lower-cased, `#`-prefixed.
///
/// Returns `None` for a blank tag.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "#" {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if lowered.starts_with('#') {
        Some(lowered)
    } else {
        Some(format!("#{}", lowered))
    }
}

/// Case-folded key under which a playlist name is stored and looked up
pub fn playlist_key(name: &str) -> String {
    name.to_lowercase()
}

/// Search policy for title and tag queries
pub struct SearchPolicy;

impl SearchPolicy {
    /// Case-insensitive substring match on the title
    pub fn title_matches(video: &Video, term: &str) -> bool {
        video.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Exact match on a normalized tag; a blank query matches nothing
    pub fn tag_matches(video: &Video, raw_tag: &str) -> bool {
        normalize_tag(raw_tag).is_some_and(|tag| video.has_tag(&tag))
    }

    /// Display order for listings and search results: title, then id
    pub fn display_order(a: &Video, b: &Video) -> Ordering {
        a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id))
    }
}
