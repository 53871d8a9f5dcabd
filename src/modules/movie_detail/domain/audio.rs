//! Narrated-story audio and its download path.
//!
//! Audio payloads arrive base64 encoded. They are decoded into an
//! [`AudioClip`] and parked in an [`ObjectUrlRegistry`] under a temporary
//! `blob:` URL until downloaded; downloading always revokes that URL.

use crate::shared::errors::{AppError, AppResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

pub const AUDIO_MIME_TYPE: &str = "audio/mp3";
const OBJECT_URL_PREFIX: &str = "blob:cinestory/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    bytes: Vec<u8>,
    mime_type: String,
}

impl AudioClip {
    pub fn from_base64(encoded: &str) -> AppResult<Self> {
        let bytes = STANDARD.decode(encoded.trim())?;
        if bytes.is_empty() {
            return Err(AppError::InvalidInput("Audio payload is empty".to_string()));
        }
        Ok(Self {
            bytes,
            mime_type: AUDIO_MIME_TYPE.to_string(),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// In-memory table of temporary object URLs
#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    entries: DashMap<String, Arc<AudioClip>>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_object_url(&self, clip: AudioClip) -> String {
        let url = format!("{}{}", OBJECT_URL_PREFIX, Uuid::new_v4());
        self.entries.insert(url.clone(), Arc::new(clip));
        url
    }

    pub fn resolve(&self, url: &str) -> Option<Arc<AudioClip>> {
        self.entries.get(url).map(|entry| Arc::clone(entry.value()))
    }

    /// Returns whether the URL was still live
    pub fn revoke(&self, url: &str) -> bool {
        self.entries.remove(url).is_some()
    }

    pub fn live_urls(&self) -> usize {
        self.entries.len()
    }
}

/// Revokes an object URL when dropped
pub struct ObjectUrlGuard<'a> {
    registry: &'a ObjectUrlRegistry,
    url: String,
}

impl<'a> ObjectUrlGuard<'a> {
    pub fn new(registry: &'a ObjectUrlRegistry, url: String) -> Self {
        Self { registry, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrlGuard<'_> {
    fn drop(&mut self) {
        if self.registry.revoke(&self.url) {
            log::debug!("Revoked object URL {}", self.url);
        }
    }
}

/// The transient "anchor" handed to a sink: where the data lives and what to
/// call the saved file
#[derive(Debug, Clone)]
pub struct DownloadTrigger {
    pub href: String,
    pub filename: String,
    pub clip: Arc<AudioClip>,
}

/// Whatever actually saves a triggered download
pub trait DownloadSink: Send + Sync {
    fn download(&self, trigger: &DownloadTrigger) -> AppResult<()>;
}

/// Saves downloads as `<title>.mp3` inside a directory
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.dir.join(format!("{}.mp3", sanitize_filename(filename)))
    }
}

impl DownloadSink for FileDownloadSink {
    fn download(&self, trigger: &DownloadTrigger) -> AppResult<()> {
        let path = self.target_path(&trigger.filename);
        std::fs::write(&path, trigger.clip.bytes())?;
        log::info!("Saved audio to {}", path.display());
        Ok(())
    }
}

fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "story".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_base64_audio() {
        let clip = AudioClip::from_base64("SUQzBAAAAAAA").unwrap();
        assert_eq!(&clip.bytes()[..3], b"ID3");
        assert_eq!(clip.mime_type(), "audio/mp3");
    }

    #[test]
    fn rejects_bad_payloads() {
        assert!(matches!(
            AudioClip::from_base64("not base64!!"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(AudioClip::from_base64(""), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn guard_revokes_on_drop() {
        let registry = ObjectUrlRegistry::new();
        let url = registry.create_object_url(AudioClip::from_base64("AAEC").unwrap());
        assert!(url.starts_with("blob:cinestory/"));
        assert_eq!(registry.live_urls(), 1);

        {
            let guard = ObjectUrlGuard::new(&registry, url.clone());
            assert!(registry.resolve(guard.url()).is_some());
        }

        assert_eq!(registry.live_urls(), 0);
        assert!(registry.resolve(&url).is_none());
        assert!(!registry.revoke(&url));
    }

    #[test]
    fn filenames_are_sanitized() {
        assert_eq!(sanitize_filename("Face/Off"), "Face_Off");
        assert_eq!(sanitize_filename("  "), "story");
        let sink = FileDownloadSink::new("/tmp/out");
        assert_eq!(sink.target_path("Alien: Romulus"), PathBuf::from("/tmp/out/Alien_ Romulus.mp3"));
    }
}
