//! Store-generated document identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of hexadecimal digits in a store identifier.
pub const DOCUMENT_ID_LEN: usize = 24;

/// Validation errors returned by [`DocumentId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentIdValidationError {
    /// The identifier was blank.
    #[error("id must not be empty")]
    Empty,
    /// The identifier is not 24 hexadecimal digits.
    #[error("id must be a 24 character hexadecimal string")]
    Malformed,
}

/// Opaque identifier naming a document within a collection.
///
/// The document store issues 12-byte identifiers rendered as 24 hexadecimal
/// digits. The canonical form is lowercase.
///
/// # Examples
/// ```
/// use backend::domain::DocumentId;
///
/// let id = DocumentId::new("65A1F0C2E4B0A1B2C3D4E5F6").expect("valid id");
/// assert_eq!(id.as_ref(), "65a1f0c2e4b0a1b2c3d4e5f6");
/// assert!(DocumentId::new("123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    /// Validate and construct a [`DocumentId`].
    pub fn new(id: impl AsRef<str>) -> Result<Self, DocumentIdValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(DocumentIdValidationError::Empty);
        }
        if id.len() != DOCUMENT_ID_LEN || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DocumentIdValidationError::Malformed);
        }
        Ok(Self(id.to_ascii_lowercase()))
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DocumentIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
