//! Multipart form assembly
//!
//! [`MultipartForm`] is an ordered list of parts; part order is submission
//! order and repeated names are legal (picture files all post under the
//! same field name). [`ProfilePatch`] is the flat profile-update input: an
//! insertion-ordered map that encodes to a form while excluding the fields
//! that are never updatable through this path.

use indexmap::IndexMap;
use storefront_model::FileHandle;

/// Field names a profile patch never encodes
pub const PROTECTED_PATCH_FIELDS: [&str; 2] = ["email", "password"];

/// Value of a single form part
#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    /// Scalar field, posted as text
    Text(String),
    /// Binary field, posted under the handle's declared file name
    File(FileHandle),
}

/// One named part of a multipart payload
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Field name on the wire
    pub name: String,
    /// Part payload
    pub value: PartValue,
}

/// Ordered multipart payload
///
/// Iteration order equals insertion order; the transport must preserve it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

impl MultipartForm {
    /// Create an empty form
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text part
    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parts.push(Part {
            name: name.into(),
            value: PartValue::Text(value.into()),
        });
        self
    }

    /// Append a file part
    pub fn file(&mut self, name: impl Into<String>, handle: FileHandle) -> &mut Self {
        self.parts.push(Part {
            name: name.into(),
            value: PartValue::File(handle),
        });
        self
    }

    /// All parts in insertion order
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of parts
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the form has no parts
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Whether any part posts under `name`
    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.parts.iter().any(|p| p.name == name)
    }

    /// First text value posted under `name`
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match (&p.name, &p.value) {
            (n, PartValue::Text(v)) if n == name => Some(v.as_str()),
            _ => None,
        })
    }

    /// File handles posted under `name`, in order
    #[must_use]
    pub fn files(&self, name: &str) -> Vec<&FileHandle> {
        self.parts
            .iter()
            .filter_map(|p| match (&p.name, &p.value) {
                (n, PartValue::File(h)) if n == name => Some(h),
                _ => None,
            })
            .collect()
    }
}

/// Flat profile-update input, field order preserved
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfilePatch {
    fields: IndexMap<String, PartValue>,
}

impl ProfilePatch {
    /// Create an empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a scalar field
    pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields
            .insert(name.into(), PartValue::Text(value.into()));
        self
    }

    /// Set a file field (encodes with the handle's declared name)
    pub fn set_file(&mut self, name: impl Into<String>, handle: FileHandle) -> &mut Self {
        self.fields.insert(name.into(), PartValue::File(handle));
        self
    }

    /// Number of fields currently in the patch
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the patch is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encode the patch as a multipart form
    ///
    /// `email` and `password` are never updatable through this path and are
    /// dropped even if present.
    #[must_use]
    pub fn encode(self) -> MultipartForm {
        let mut form = MultipartForm::new();
        for (name, value) in self.fields {
            if PROTECTED_PATCH_FIELDS.contains(&name.as_str()) {
                continue;
            }
            match value {
                PartValue::Text(text) => {
                    form.text(name, text);
                }
                PartValue::File(handle) => {
                    form.file(name, handle);
                }
            }
        }
        form
    }
}
