//! Zone.Identifier name matching.
//!
//! Two independent rules, evaluated in order:
//! 1. stream form: the name ends with `:Zone.Identifier` (`photo.jpg:Zone.Identifier`).
//! 2. dotted form: the name contains `.Zone.Identifier` anywhere
//!    (`document.pdf.Zone.Identifier`, `a.Zone.IdentifierX`).
//!
//! The rules are complementary: in the stream form the marker is preceded by
//! `:`, so the dotted rule alone would miss it. A name satisfying both reports
//! the stream rule. Matching is case-sensitive and runs on the raw encoded
//! bytes of the OS filename, so names that are not valid UTF-8 are still
//! classified.
//!
//! A bare `Zone.Identifier` satisfies neither rule as written. It is accepted
//! as a deliberate extension of the stream form, read as the stream with an
//! empty host name, and reported as [`MatchRule::StreamSuffix`].

use std::ffi::OsStr;

use memchr::memmem;

/// Stream name Windows attaches to downloaded files.
pub const STREAM_NAME: &str = "Zone.Identifier";

/// Suffix of the alternate-data-stream form.
pub const STREAM_SUFFIX: &str = ":Zone.Identifier";

/// Marker of the dotted form.
pub const DOTTED_MARKER: &str = ".Zone.Identifier";

/// Which rule classified a filename as a Zone.Identifier artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// `name.ext:Zone.Identifier`, or a bare `Zone.Identifier`.
    StreamSuffix,
    /// `name.ext.Zone.Identifier` and other names containing `.Zone.Identifier`.
    DottedMarker,
}

/// Classify a bare filename (no directory component).
#[must_use]
pub fn classify(name: &OsStr) -> Option<MatchRule> {
    classify_bytes(name.as_encoded_bytes())
}

/// Classify raw filename bytes.
#[must_use]
pub fn classify_bytes(name: &[u8]) -> Option<MatchRule> {
    if name.ends_with(STREAM_SUFFIX.as_bytes()) || name == STREAM_NAME.as_bytes() {
        return Some(MatchRule::StreamSuffix);
    }
    if memmem::find(name, DOTTED_MARKER.as_bytes()).is_some() {
        return Some(MatchRule::DottedMarker);
    }
    None
}

/// True if the filename is a Zone.Identifier artifact that should be deleted.
#[must_use]
pub fn is_zone_identifier(name: &OsStr) -> bool {
    classify(name).is_some()
}
