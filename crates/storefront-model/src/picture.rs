//! Local picture handles and release-tracked previews
//!
//! A [`FileHandle`] owns binary content plus its MIME type. A
//! [`PreviewUri`] is the derived, displayable reference for a handle; it has
//! no independent lifetime and must be released once the picture leaves the
//! screen. Releases are counted through a shared [`PreviewLedger`] so tests
//! can assert nothing leaks.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// MIME types accepted for product pictures
pub const ALLOWED_PICTURE_MIMES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Maximum accepted picture payload (1 MiB)
pub const MAX_PICTURE_BYTES: usize = 1024 * 1024;

/// Owned binary content with a declared name and MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// Declared file name
    pub name: String,
    /// MIME type as reported by the source
    pub mime: String,
    /// Binary payload
    pub bytes: Vec<u8>,
}

impl FileHandle {
    /// Create a handle with an explicit name
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Create a handle for freshly downloaded content
    ///
    /// Names follow the `fileName{unix_millis}` convention of the
    /// storefront, so re-downloaded pictures resubmit cleanly.
    #[inline]
    #[must_use]
    pub fn generated(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(
            format!("fileName{}", Utc::now().timestamp_millis()),
            mime,
            bytes,
        )
    }

    /// Payload size in bytes
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the MIME type is on the picture allow-list
    #[inline]
    #[must_use]
    pub fn is_allowed_picture_type(&self) -> bool {
        ALLOWED_PICTURE_MIMES.contains(&self.mime.as_str())
    }
}

/// Shared counter of live (unreleased) previews
///
/// Cloned into every preview it tracks; `live()` reaching zero after
/// teardown is the no-leak condition.
#[derive(Debug, Clone, Default)]
pub struct PreviewLedger(Arc<AtomicUsize>);

impl PreviewLedger {
    /// Create a ledger with no live previews
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of previews allocated and not yet released
    #[inline]
    #[must_use]
    pub fn live(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn allocate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn release(&self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// String-encoded display reference for a [`FileHandle`]
///
/// Encoded as a `data:` URI. Dropping the value releases it; [`release`]
/// may be called earlier and is idempotent.
///
/// [`release`]: PreviewUri::release
#[derive(Debug)]
pub struct PreviewUri {
    uri: String,
    ledger: Option<PreviewLedger>,
    released: bool,
}

impl PreviewUri {
    /// Encode an untracked preview
    #[must_use]
    pub fn encode(handle: &FileHandle) -> Self {
        Self {
            uri: format!(
                "data:{};base64,{}",
                handle.mime,
                STANDARD.encode(&handle.bytes)
            ),
            ledger: None,
            released: false,
        }
    }

    /// Encode a preview whose lifetime is counted in `ledger`
    #[must_use]
    pub fn encode_tracked(handle: &FileHandle, ledger: &PreviewLedger) -> Self {
        ledger.allocate();
        let mut preview = Self::encode(handle);
        preview.ledger = Some(ledger.clone());
        preview
    }

    /// The encoded URI
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Whether the preview has been released
    #[inline]
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Release the display resource
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            if let Some(ledger) = &self.ledger {
                ledger.release();
            }
        }
    }
}

impl Drop for PreviewUri {
    fn drop(&mut self) {
        self.release();
    }
}

/// A locally held picture: owned content plus its live preview
#[derive(Debug)]
pub struct LocalPicture {
    /// Stable local identity, used for display keying
    pub id: Uuid,
    /// Owned file content
    pub handle: FileHandle,
    /// Derived display reference
    pub preview: PreviewUri,
}

impl LocalPicture {
    /// Build a picture with an untracked preview
    #[must_use]
    pub fn new(handle: FileHandle) -> Self {
        let preview = PreviewUri::encode(&handle);
        Self {
            id: Uuid::new_v4(),
            handle,
            preview,
        }
    }

    /// Build a picture whose preview is counted in `ledger`
    #[must_use]
    pub fn tracked(handle: FileHandle, ledger: &PreviewLedger) -> Self {
        let preview = PreviewUri::encode_tracked(&handle, ledger);
        Self {
            id: Uuid::new_v4(),
            handle,
            preview,
        }
    }

    /// Split into the owned handle, releasing the preview
    #[must_use]
    pub fn into_parts(self) -> FileHandle {
        let Self {
            handle,
            mut preview,
            ..
        } = self;
        preview.release();
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(bytes: usize) -> FileHandle {
        FileHandle::new("a.png", "image/png", vec![0u8; bytes])
    }

    #[test]
    fn generated_handle_uses_filename_convention() {
        let handle = FileHandle::generated("image/png", vec![1, 2, 3]);
        assert!(handle.name.starts_with("fileName"));
        assert_eq!(handle.mime, "image/png");
        assert_eq!(handle.size(), 3);
    }

    #[test]
    fn allow_list_covers_jpeg_variants_and_png() {
        for mime in ALLOWED_PICTURE_MIMES {
            assert!(FileHandle::new("f", mime, vec![]).is_allowed_picture_type());
        }
        assert!(!FileHandle::new("f", "image/gif", vec![]).is_allowed_picture_type());
    }

    #[test]
    fn preview_encodes_data_uri() {
        let preview = PreviewUri::encode(&png(3));
        assert!(preview.as_str().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn tracked_preview_counts_and_releases() {
        let ledger = PreviewLedger::new();
        let mut preview = PreviewUri::encode_tracked(&png(1), &ledger);
        assert_eq!(ledger.live(), 1);

        preview.release();
        assert_eq!(ledger.live(), 0);

        // Idempotent: a second release (and the drop) must not underflow
        preview.release();
        drop(preview);
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn dropping_picture_releases_preview() {
        let ledger = PreviewLedger::new();
        {
            let _pic = LocalPicture::tracked(png(1), &ledger);
            assert_eq!(ledger.live(), 1);
        }
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn into_parts_releases_and_keeps_content() {
        let ledger = PreviewLedger::new();
        let pic = LocalPicture::tracked(png(4), &ledger);
        let handle = pic.into_parts();
        assert_eq!(ledger.live(), 0);
        assert_eq!(handle.size(), 4);
        assert_eq!(handle.name, "a.png");
    }
}
