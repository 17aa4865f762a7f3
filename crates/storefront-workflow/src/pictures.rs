//! Picture-set editor
//!
//! Ordered collection of local pictures under the storefront's rules:
//! between 4 and 8 pictures at submit time, JPEG/PNG only, 1 MiB per file,
//! one picture per upload action. The editor keeps a single standing
//! message (the last rejection, or the too-few advisory) exactly as the
//! form displays it.

use crate::error::PictureError;
use storefront_model::{FileHandle, LocalPicture, PreviewLedger, MAX_PICTURE_BYTES};

/// Count and size rules for the picture set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureRules {
    /// Minimum pictures required at submit
    pub min: usize,
    /// Maximum pictures ever held
    pub max: usize,
    /// Per-file size cap in bytes
    pub max_bytes: usize,
}

impl Default for PictureRules {
    fn default() -> Self {
        Self {
            min: 4,
            max: 8,
            max_bytes: MAX_PICTURE_BYTES,
        }
    }
}

/// Ordered, bounded picture collection backing the form's picture grid
#[derive(Debug)]
pub struct PictureSetEditor {
    rules: PictureRules,
    pictures: Vec<LocalPicture>,
    message: Option<PictureError>,
    ledger: PreviewLedger,
}

impl PictureSetEditor {
    /// Create an empty editor
    #[must_use]
    pub fn new(rules: PictureRules, ledger: PreviewLedger) -> Self {
        let mut editor = Self {
            rules,
            pictures: Vec::new(),
            message: None,
            ledger,
        };
        editor.refresh_advisory();
        editor
    }

    /// Seed from rehydrated pictures, replacing any current set
    pub fn seed(&mut self, pictures: Vec<LocalPicture>) {
        self.pictures = pictures;
        self.refresh_advisory();
    }

    /// Handle a user upload action
    ///
    /// Exactly one file per action is a deliberate UX rule, not a technical
    /// limit.
    ///
    /// # Errors
    /// `SingleFileOnly` for zero or multiple files, otherwise whatever
    /// [`add`](Self::add) returns for the single file.
    pub fn add_upload(&mut self, mut files: Vec<FileHandle>) -> Result<(), PictureError> {
        if files.len() != 1 {
            return self.reject(PictureError::SingleFileOnly { got: files.len() });
        }
        self.add(files.remove(0))
    }

    /// Append one picture
    ///
    /// # Errors
    /// `CountExceeded` at the cap, `UnsupportedType` off the allow-list,
    /// `TooLarge` over the size cap. The set is unchanged on any rejection.
    pub fn add(&mut self, file: FileHandle) -> Result<(), PictureError> {
        if self.pictures.len() + 1 > self.rules.max {
            return self.reject(PictureError::CountExceeded {
                max: self.rules.max,
            });
        }
        if !file.is_allowed_picture_type() {
            return self.reject(PictureError::UnsupportedType { mime: file.mime });
        }
        if file.size() > self.rules.max_bytes {
            return self.reject(PictureError::TooLarge { size: file.size() });
        }

        self.pictures
            .push(LocalPicture::tracked(file, &self.ledger));
        tracing::debug!(count = self.pictures.len(), "picture added");
        self.refresh_advisory();
        Ok(())
    }

    /// Remove the picture at `index`, preserving the order of the rest
    ///
    /// # Errors
    /// `IndexOutOfRange` leaves the set unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<(), PictureError> {
        if index >= self.pictures.len() {
            return Err(PictureError::IndexOutOfRange {
                index,
                len: self.pictures.len(),
            });
        }
        // Dropping the picture releases its preview
        drop(self.pictures.remove(index));
        tracing::debug!(count = self.pictures.len(), "picture removed");
        self.refresh_advisory();
        Ok(())
    }

    /// Check the count invariant before submission
    ///
    /// # Errors
    /// `TooFew` below the minimum; `TooMany` above the maximum (only
    /// reachable for directly seeded sets).
    pub fn validate_for_submit(&self) -> Result<(), PictureError> {
        if self.pictures.len() < self.rules.min {
            return Err(PictureError::TooFew {
                min: self.rules.min,
            });
        }
        if self.pictures.len() > self.rules.max {
            return Err(PictureError::TooMany {
                max: self.rules.max,
            });
        }
        Ok(())
    }

    /// Pictures in display/submission order
    #[inline]
    #[must_use]
    pub fn pictures(&self) -> &[LocalPicture] {
        &self.pictures
    }

    /// File handles in submission order
    pub fn handles(&self) -> impl Iterator<Item = &FileHandle> {
        self.pictures.iter().map(|p| &p.handle)
    }

    /// Current set size
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }

    /// The standing inline message, if any
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.message.as_ref().map(ToString::to_string)
    }

    /// The rules this editor enforces
    #[inline]
    #[must_use]
    pub fn rules(&self) -> PictureRules {
        self.rules
    }

    /// Drop every picture, releasing all previews
    pub fn clear(&mut self) {
        self.pictures.clear();
        self.refresh_advisory();
    }

    fn reject(&mut self, err: PictureError) -> Result<(), PictureError> {
        self.message = Some(err.clone());
        Err(err)
    }

    fn refresh_advisory(&mut self) {
        self.message = if self.pictures.len() < self.rules.min {
            Some(PictureError::TooFew {
                min: self.rules.min,
            })
        } else {
            None
        };
    }
}

impl Drop for PictureSetEditor {
    fn drop(&mut self) {
        // Previews release via each picture's own Drop; nothing extra here,
        // the impl exists to document teardown as a release point.
        self.pictures.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn editor() -> PictureSetEditor {
        PictureSetEditor::new(PictureRules::default(), PreviewLedger::new())
    }

    fn png(bytes: usize) -> FileHandle {
        FileHandle::new("pic.png", "image/png", vec![0u8; bytes])
    }

    fn filled(n: usize) -> PictureSetEditor {
        let mut e = editor();
        for _ in 0..n {
            e.add(png(16)).unwrap();
        }
        e
    }

    #[test]
    fn accepts_allowed_types_under_cap() {
        let mut e = editor();
        for mime in ["image/jpeg", "image/jpg", "image/png"] {
            e.add(FileHandle::new("f", mime, vec![0u8; 64])).unwrap();
        }
        assert_eq!(e.len(), 3);
    }

    #[test]
    fn rejects_ninth_picture_and_leaves_set_unchanged() {
        let mut e = filled(8);
        let err = e.add(png(16)).unwrap_err();
        assert_eq!(err, PictureError::CountExceeded { max: 8 });
        assert_eq!(e.len(), 8);
        assert_eq!(
            e.message().as_deref(),
            Some("You can upload a maximum of 8 pictures.")
        );
    }

    #[test]
    fn rejects_unsupported_type_and_oversized_file() {
        let mut e = editor();
        let err = e
            .add(FileHandle::new("f.gif", "image/gif", vec![0u8; 4]))
            .unwrap_err();
        assert!(matches!(err, PictureError::UnsupportedType { .. }));

        let err = e.add(png(MAX_PICTURE_BYTES + 1)).unwrap_err();
        assert!(matches!(err, PictureError::TooLarge { .. }));

        // boundary: exactly 1 MiB is accepted
        e.add(png(MAX_PICTURE_BYTES)).unwrap();
        assert_eq!(e.len(), 1);
    }

    #[test]
    fn upload_action_takes_exactly_one_file() {
        let mut e = editor();
        assert_eq!(
            e.add_upload(vec![]).unwrap_err(),
            PictureError::SingleFileOnly { got: 0 }
        );
        assert_eq!(
            e.add_upload(vec![png(1), png(1)]).unwrap_err(),
            PictureError::SingleFileOnly { got: 2 }
        );
        e.add_upload(vec![png(1)]).unwrap();
        assert_eq!(e.len(), 1);
    }

    #[test]
    fn advisory_tracks_minimum() {
        let mut e = editor();
        assert_eq!(
            e.message().as_deref(),
            Some("You must upload at least 4 pictures.")
        );

        for _ in 0..4 {
            e.add(png(1)).unwrap();
        }
        assert_eq!(e.message(), None);

        e.remove_at(0).unwrap();
        assert_eq!(
            e.message().as_deref(),
            Some("You must upload at least 4 pictures.")
        );
    }

    #[test]
    fn remove_preserves_order_and_releases_preview() {
        let ledger = PreviewLedger::new();
        let mut e = PictureSetEditor::new(PictureRules::default(), ledger.clone());
        for i in 1..=4 {
            e.add(FileHandle::new(format!("p{i}.png"), "image/png", vec![0u8; i]))
                .unwrap();
        }
        assert_eq!(ledger.live(), 4);

        e.remove_at(1).unwrap();
        let names: Vec<_> = e.pictures().iter().map(|p| p.handle.name.as_str()).collect();
        assert_eq!(names, ["p1.png", "p3.png", "p4.png"]);
        assert_eq!(ledger.live(), 3);
    }

    #[test]
    fn out_of_range_removal_changes_nothing() {
        let mut e = filled(2);
        let err = e.remove_at(2).unwrap_err();
        assert_eq!(err, PictureError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(e.len(), 2);
    }

    #[test]
    fn validate_for_submit_table() {
        for n in 0..=3 {
            assert_eq!(
                filled(n).validate_for_submit().unwrap_err(),
                PictureError::TooFew { min: 4 }
            );
        }
        for n in 4..=8 {
            assert!(filled(n).validate_for_submit().is_ok());
        }
        // TooMany is unreachable through add(); the cap rejects first
    }

    #[test]
    fn teardown_releases_every_preview() {
        let ledger = PreviewLedger::new();
        {
            let mut e = PictureSetEditor::new(PictureRules::default(), ledger.clone());
            for _ in 0..5 {
                e.add(png(8)).unwrap();
            }
            assert_eq!(ledger.live(), 5);
        }
        assert_eq!(ledger.live(), 0);
    }

    proptest! {
        // Bounds hold under arbitrary add/remove interleavings, and the
        // ledger never leaks previews relative to the held set.
        #[test]
        fn bounds_hold_under_arbitrary_ops(ops in proptest::collection::vec(
            prop_oneof![
                (1usize..=2_000_000).prop_map(EditorOp::Add),
                (0usize..10).prop_map(EditorOp::Remove),
            ],
            0..64,
        )) {
            let ledger = PreviewLedger::new();
            let mut e = PictureSetEditor::new(PictureRules::default(), ledger.clone());

            for op in ops {
                match op {
                    EditorOp::Add(size) => {
                        let before = e.len();
                        let result = e.add(FileHandle::new("p.png", "image/png", vec![0u8; size]));
                        if result.is_err() {
                            prop_assert_eq!(e.len(), before);
                        }
                    }
                    EditorOp::Remove(index) => {
                        let before = e.len();
                        let result = e.remove_at(index);
                        if result.is_err() {
                            prop_assert_eq!(e.len(), before);
                        }
                    }
                }
                prop_assert!(e.len() <= 8);
                prop_assert_eq!(ledger.live(), e.len());
                match e.validate_for_submit() {
                    Ok(()) => prop_assert!((4..=8).contains(&e.len())),
                    Err(PictureError::TooFew { .. }) => prop_assert!(e.len() < 4),
                    Err(other) => prop_assert!(false, "unexpected {:?}", other),
                }
            }
        }
    }

    #[derive(Debug, Clone)]
    enum EditorOp {
        Add(usize),
        Remove(usize),
    }
}
