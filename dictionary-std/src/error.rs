//! Errors raised while building a dictionary registry.

use dicom_dictionary_core::dictionary::{TagPattern, UidType};
use dicom_dictionary_core::Tag;
use snafu::Snafu;

/// An integrity violation in the tables given to a registry.
///
/// These errors are only raised at construction time.
/// Once a registry is built, no query on it can fail.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum BuildError {
    /// Two exact entries share the same tag.
    #[snafu(display("duplicate entry for tag {}: `{}` and `{}`", tag, first, second))]
    DuplicateTag {
        tag: Tag,
        first: &'static str,
        second: &'static str,
    },
    /// Two wildcard entries declare the very same pattern.
    #[snafu(display("duplicate entry for pattern {}: `{}` and `{}`", pattern, first, second))]
    DuplicatePattern {
        pattern: TagPattern,
        first: &'static str,
        second: &'static str,
    },
    /// A pattern without any fixed digit would shadow every other entry.
    #[snafu(display("entry `{}` has a fully wildcard tag pattern", alias))]
    OpenPattern { alias: &'static str },
    /// Two entries share the same UID value.
    #[snafu(display("duplicate entry for UID {}: `{}` and `{}`", uid, first, second))]
    DuplicateUid {
        uid: &'static str,
        first: &'static str,
        second: &'static str,
    },
    /// Only transfer syntaxes may be classified as compressed.
    #[snafu(display("UID {} is a {} and cannot be flagged as compressed", uid, uid_type))]
    CompressedNonTransferSyntax {
        uid: &'static str,
        uid_type: UidType,
    },
}

/// Type alias for a result from building a registry.
pub type Result<T, E = BuildError> = std::result::Result<T, E>;
