use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two image sources is meant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Thumb,
    Full,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thumb => write!(f, "Thumbnail"),
            Self::Full => write!(f, "Full resolution"),
        }
    }
}

/// Identity of the image being inspected: a thumbnail and an optional
/// full-resolution variant of the same picture.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSet {
    pub thumb: String,
    #[serde(default)]
    pub full: Option<String>,
}

impl SourceSet {
    pub fn new(thumb: impl Into<String>, full: Option<String>) -> Self {
        Self {
            thumb: thumb.into(),
            full,
        }
    }

    pub fn uri(&self, kind: SourceKind) -> Option<&str> {
        match kind {
            SourceKind::Thumb => Some(self.thumb.as_str()),
            SourceKind::Full => self.full.as_deref(),
        }
    }

    pub fn has_full(&self) -> bool {
        self.full.is_some()
    }
}

/// Handle for one requested image load.
///
/// A ticket is redeemed at most once; tickets issued for an older source
/// set carry a stale generation and are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket {
    pub generation: u64,
    pub kind: SourceKind,
}

/// A load the rendering layer must perform. Completion is reported back
/// with the ticket and the decoded natural size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub uri: String,
}
