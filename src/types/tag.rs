//! Discriminant tags for the two outcome types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The discriminant of an outcome: which arm of a `Result` or `Option` is populated.
///
/// Serializes as the lowercase tag string (`"ok"`, `"err"`, `"some"`, `"none"`).
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Tag};
///
/// let found: Option<u8> = Some(3);
/// let failed: Result<u8, &str> = Err("nope");
///
/// assert_eq!(found.tag(), Tag::Some);
/// assert_eq!(failed.tag().as_str(), "err");
/// assert!(!failed.tag().is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Success arm of a `Result`.
    Ok,
    /// Failure arm of a `Result`.
    Err,
    /// Presence arm of an `Option`.
    Some,
    /// Absence arm of an `Option`.
    None,
}

impl Tag {
    /// Returns the wire name of the tag.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Err => "err",
            Self::Some => "some",
            Self::None => "none",
        }
    }

    /// Returns `true` for the arms that carry a payload (`Ok` and `Some`).
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::Some)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
