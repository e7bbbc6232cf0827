// Text catalog adapter - Loads videos from a pipe/comma delimited file

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::model::Video;
use crate::domain::rules::normalize_tag;
use crate::error::{VidcatError, VidcatResult};
use crate::ports::CatalogSource;

/// Catalog loader for files of `title | id | tag1, tag2, ...` lines
pub struct TextCatalogLoader {
    path: PathBuf,
}

impl TextCatalogLoader {
    /// Create a loader for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for TextCatalogLoader {
    fn load_videos(&self) -> VidcatResult<Vec<Video>> {
        let shown = self.path.display().to_string();
        if !self.path.exists() {
            return Err(VidcatError::CatalogNotFound { path: shown });
        }

        let bytes = std::fs::read(&self.path).map_err(|source| VidcatError::CatalogRead {
            path: shown.clone(),
            source,
        })?;
        // invalid UTF-8 is replaced, so one bad byte only spoils its own line
        let content = String::from_utf8_lossy(&bytes);

        let videos = parse_catalog(&content);
        info!("Loaded {} videos from {}", videos.len(), shown);
        Ok(videos)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse catalog text. Malformed lines and repeated ids are skipped with a warning.
pub fn parse_catalog(content: &str) -> Vec<Video> {
    let mut videos = Vec::new();
    let mut seen = HashSet::new();

    for (number, line) in content.lines().enumerate() {
        let line_number = number + 1;
        if line.trim().is_empty() {
            continue;
        }

        let Some(video) = parse_line(line) else {
            warn!("Skipping malformed catalog line {}: {:?}", line_number, line);
            continue;
        };

        if !seen.insert(video.id.clone()) {
            warn!("Skipping duplicate video id {} on line {}", video.id, line_number);
            continue;
        }

        debug!("Catalog line {}: {}", line_number, video);
        videos.push(video);
    }

    videos
}

fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.splitn(3, '|');
    let title = fields.next()?.trim();
    let id = fields.next()?.trim();
    if id.is_empty() {
        return None;
    }
    let tags: Vec<String> = fields
        .next()
        .map(|raw| raw.split(',').filter_map(normalize_tag).collect())
        .unwrap_or_default();
    Some(Video::new(id, title, tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_trims_and_normalizes() {
        let videos = parse_catalog(" Amazing Cats | amazing_cats_video_id |  #cat , #Animal \n");
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Amazing Cats");
        assert_eq!(videos[0].id, "amazing_cats_video_id");
        assert_eq!(videos[0].tags, vec!["#cat", "#animal"]);
    }

    #[test]
    fn test_parse_without_tags() {
        let videos = parse_catalog("Video about nothing | nothing_video_id |\nBare | bare_id");
        assert_eq!(videos.len(), 2);
        assert!(videos[0].tags.is_empty());
        assert!(videos[1].tags.is_empty());
    }

    #[test]
    fn test_parse_skips_malformed_and_duplicates() {
        let content = "no separators here\n\nT1 | id1 | #a\nNo id |  | #b\nT1 again | id1 | #c\n";
        let videos = parse_catalog(content);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "T1");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "T1 | id1 | #a").unwrap();
        writeln!(file, "T2 | id2 | #b").unwrap();

        let loader = TextCatalogLoader::new(file.path());
        let videos = loader.load_videos().unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[1].id, "id2");
    }

    #[test]
    fn test_load_tolerates_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Caf\xe9 Tour | cafe_id | #travel\nT2 | id2 | #b\n").unwrap();

        let videos = TextCatalogLoader::new(file.path()).load_videos().unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "cafe_id");
        assert_eq!(videos[0].title, "Caf\u{FFFD} Tour");
        assert_eq!(videos[1].id, "id2");
    }

    #[test]
    fn test_missing_file() {
        let loader = TextCatalogLoader::new("/definitely/not/here/videos.txt");
        assert!(matches!(
            loader.load_videos(),
            Err(VidcatError::CatalogNotFound { .. })
        ));
    }
}
