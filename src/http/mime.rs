//! MIME type detection and `Accept` negotiation.

use std::collections::HashSet;
use std::fmt;

/// A `type/subtype` pair, stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType {
    pub kind: String,
    pub subtype: String,
}

impl MimeType {
    pub fn new(kind: &str, subtype: &str) -> Self {
        Self {
            kind: kind.trim().to_ascii_lowercase(),
            subtype: subtype.trim().to_ascii_lowercase(),
        }
    }

    /// The `*/*` wildcard.
    pub fn any() -> Self {
        Self::new("*", "*")
    }

    /// Parses `type/subtype`, discarding any `;` parameters.
    ///
    /// Returns `None` when either half is missing.
    pub fn parse(s: &str) -> Option<Self> {
        let essence = s.split(';').next().unwrap_or_default().trim();
        let (kind, subtype) = essence.split_once('/')?;

        if kind.trim().is_empty() || subtype.trim().is_empty() {
            return None;
        }

        Some(Self::new(kind, subtype))
    }

    pub fn is_wildcard(&self) -> bool {
        self.kind == "*" && self.subtype == "*"
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.subtype)
    }
}

/// Maps a resource name to its MIME type by file extension.
///
/// Unknown or missing extensions map to `application/octet-stream`.
///
/// # Example
///
/// ```
/// # use lantern::http::mime::classify;
/// assert_eq!(classify("index.html").to_string(), "text/html");
/// assert_eq!(classify("blob").to_string(), "application/octet-stream");
/// ```
pub fn classify(resource_name: &str) -> MimeType {
    let guess = mime_guess::from_path(resource_name).first_or_octet_stream();
    MimeType::new(guess.type_().as_str(), guess.subtype().as_str())
}

/// Parses an `Accept` header value into the set of accepted types.
///
/// Entries that are not `type/subtype` are skipped.
pub fn parse_accept_list(header_value: &str) -> HashSet<MimeType> {
    header_value
        .split(',')
        .filter_map(MimeType::parse)
        .collect()
}

/// Whether `candidate` is acceptable under `accepted`.
///
/// Only exact matches and the `*/*` wildcard count; partial wildcards such as
/// `text/*` do not match.
pub fn is_accepted(candidate: &MimeType, accepted: &HashSet<MimeType>) -> bool {
    accepted.contains(candidate) || accepted.iter().any(MimeType::is_wildcard)
}
