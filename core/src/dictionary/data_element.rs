//! Core data element dictionary types

use std::fmt;
use std::str::FromStr;

use snafu::{ensure, ResultExt, Snafu};

use crate::header::{parse_tag_notation, ParseTagError, Tag, VR};

/// A pattern of tags covered by a single attribute.
///
/// Very often, the dictionary of attributes indicates a unique
/// group part and element part `(gggg,eeee)`,
/// but some attributes cover a range of groups or elements instead.
/// _Overlay Data_ `(60xx,3000)` has more than one possible tag,
/// since it is part of a repeating group,
/// and the retired _Escape Triplet_ `(1000,xxx0)`
/// repeats across elements.
///
/// The pattern keeps a value and a mask over the packed 32-bit tag,
/// at the granularity of hexadecimal digits (nibbles).
/// Each digit is either fixed or open (`x`, matching anything).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct TagPattern {
    value: u32,
    mask: u32,
}

impl TagPattern {
    /// A pattern matching exactly one tag.
    pub const fn single(tag: Tag) -> Self {
        TagPattern {
            value: tag.to_u32(),
            mask: 0xFFFF_FFFF,
        }
    }

    /// A pattern with open digits wherever the given masks are zero.
    ///
    /// Any digit of a mask which is not zero is taken as fixed,
    /// so `0xFF00` and `0x1F00` are equivalent masks.
    pub const fn masked(tag: Tag, group_mask: u16, element_mask: u16) -> Self {
        let raw = (group_mask as u32) << 16 | element_mask as u32;
        let mut mask = 0u32;
        let mut i = 0;
        while i < 8 {
            if raw & (0xF << (i * 4)) != 0 {
                mask |= 0xF << (i * 4);
            }
            i += 1;
        }
        TagPattern {
            value: tag.to_u32() & mask,
            mask,
        }
    }

    /// Create a pattern from its notation in the standard,
    /// such as `"(0010,0010)"`, `"60xx,0011"` or `"(1000,xxx0)"`.
    ///
    /// This function is meant for building static tables.
    /// # Panics
    ///
    /// Panics if the notation is invalid or if all digits are open.
    /// In a constant context, this becomes a compile time error.
    pub const fn from_notation(text: &str) -> Self {
        match parse_tag_notation(text.as_bytes(), true) {
            Ok((_, 0)) => panic!("tag pattern must have at least one fixed digit"),
            Ok((value, mask)) => TagPattern { value, mask },
            Err(_) => panic!("invalid tag pattern notation"),
        }
    }

    /// The packed value of the fixed digits.
    #[inline]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// The mask of fixed digits over the packed tag.
    #[inline]
    pub const fn mask(self) -> u32 {
        self.mask
    }

    /// Retrieve a tag covered by this pattern,
    /// with all open digits set to zero.
    #[inline]
    pub const fn tag(self) -> Tag {
        Tag((self.value >> 16) as u16, self.value as u16)
    }

    /// Check whether the given tag is covered by this pattern.
    #[inline]
    pub const fn matches(self, tag: Tag) -> bool {
        tag.to_u32() & self.mask == self.value
    }

    /// The number of fixed digits in the pattern, from 0 to 8.
    /// A higher number means a more specific pattern.
    #[inline]
    pub const fn specificity(self) -> u32 {
        self.mask.count_ones() / 4
    }

    /// Whether the pattern matches a single tag.
    #[inline]
    pub const fn is_single(self) -> bool {
        self.mask == 0xFFFF_FFFF
    }

    /// Whether all digits of the pattern are open.
    #[inline]
    pub const fn is_open(self) -> bool {
        self.mask == 0
    }

    /// Whether there is at least one tag matched by both patterns.
    #[inline]
    pub const fn overlaps(self, other: TagPattern) -> bool {
        (self.value ^ other.value) & self.mask & other.mask == 0
    }
}

impl From<Tag> for TagPattern {
    fn from(tag: Tag) -> Self {
        TagPattern::single(tag)
    }
}

impl fmt::Display for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
        let mut out = [0u8; 11];
        out[0] = b'(';
        out[5] = b',';
        out[10] = b')';
        for i in 0..8 {
            let shift = (7 - i) * 4;
            let position = if i < 4 { 1 + i } else { 2 + i };
            out[position] = if (self.mask >> shift) & 0xF == 0 {
                b'x'
            } else {
                DIGITS[((self.value >> shift) & 0xF) as usize]
            };
        }
        // only ASCII was written
        f.write_str(std::str::from_utf8(&out).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TagPattern{}", self)
    }
}

/// An error returned when parsing an invalid tag pattern.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[non_exhaustive]
pub enum ParsePatternError {
    /// The text is not in the `gggg,eeee` notation.
    #[snafu(display("invalid tag pattern notation"))]
    Notation {
        /// The underlying tag notation error.
        source: ParseTagError,
    },
    /// All digits are open, which would match any tag.
    #[snafu(display("tag pattern must have at least one fixed digit"))]
    Open,
}

impl FromStr for TagPattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, mask) = parse_tag_notation(s.as_bytes(), true).context(NotationSnafu)?;
        ensure!(mask != 0, OpenSnafu);
        Ok(TagPattern { value, mask })
    }
}

/// A "virtual" value representation (VR) descriptor
/// which extends the standard enumeration with context-dependent VRs.
///
/// It is used by element dictionary entries to describe circumstances
/// in which the real VR may depend on context.
/// As an example, the _Pixel Data_ attribute
/// can have a value representation of either [`OB`](VR::OB) or [`OW`](VR::OW).
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum VirtualVr {
    /// The value representation is exactly known
    /// and does not depend on context.
    Exact(VR),
    /// Represents a pixel data sample value
    /// with a short magnitude.
    ///
    /// Values with this virtual VR are signed 16 bit integers
    /// ([`SS`](VR::SS)) if the _Pixel Representation_ is `1`,
    /// or unsigned 16 bit integers ([`US`](VR::US)) otherwise.
    Xs,
    /// Represents overlay data sample values.
    ///
    /// It can be either [`OB`](VR::OB) or [`OW`](VR::OW).
    Ox,
    /// Represents pixel data sample value.
    ///
    /// It can be either [`OB`](VR::OB) or [`OW`](VR::OW).
    Px,
    /// Represents LUT data, which can be [`US`](VR::US) or [`OW`](VR::OW)
    Lt,
    /// No value representation is defined.
    ///
    /// This is the case of the item and delimitation markers
    /// `(FFFE,E000)`, `(FFFE,E00D)` and `(FFFE,E0DD)`.
    Undefined,
}

impl From<VR> for VirtualVr {
    fn from(value: VR) -> Self {
        VirtualVr::Exact(value)
    }
}

impl VirtualVr {
    /// The two-character code shown for a VR which is not defined.
    /// It is distinct from `UN`.
    pub const UNDEFINED_CODE: &'static str = "  ";

    /// Return the underlying value representation
    /// in the case that it can be unambiguously defined without context.
    pub fn exact(self) -> Option<VR> {
        match self {
            VirtualVr::Exact(vr) => Some(vr),
            _ => None,
        }
    }

    /// Return the underlying value representation,
    /// making a relaxed conversion if it cannot be
    /// accurately resolved without context.
    ///
    /// - [`Xs`](VirtualVr::Xs) is relaxed to [`US`](VR::US)
    /// - [`Ox`](VirtualVr::Ox) is relaxed to [`OW`](VR::OW)
    /// - [`Px`](VirtualVr::Px) is relaxed to [`OW`](VR::OW)
    /// - [`Lt`](VirtualVr::Lt) is relaxed to [`OW`](VR::OW)
    ///
    /// Returns `None` for [`Undefined`](VirtualVr::Undefined).
    pub fn relaxed(self) -> Option<VR> {
        match self {
            VirtualVr::Exact(vr) => Some(vr),
            VirtualVr::Xs => Some(VR::US),
            VirtualVr::Ox => Some(VR::OW),
            VirtualVr::Px => Some(VR::OW),
            VirtualVr::Lt => Some(VR::OW),
            VirtualVr::Undefined => None,
        }
    }

    /// The two-character code of this VR,
    /// relaxed as in [`relaxed`](VirtualVr::relaxed),
    /// or [`UNDEFINED_CODE`](VirtualVr::UNDEFINED_CODE)
    /// if no VR is defined.
    pub fn code(self) -> &'static str {
        match self.relaxed() {
            Some(vr) => vr.as_str(),
            None => Self::UNDEFINED_CODE,
        }
    }
}

impl fmt::Display for VirtualVr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Type trait for a dictionary of DICOM attributes.
///
/// The main purpose of an attribute dictionary is
/// to retrieve a record containing additional information about a data element,
/// in one of the following ways:
///
/// - By DICOM tag, via [`by_tag`][1];
/// - By its keyword (also known as alias) via [`by_name`][2];
/// - By an expression which may either be a keyword
///   or a tag printed in one of its standard forms,
///   using [`by_expr`][3].
///
/// These methods will return `None`
/// when the tag or name is not recognized by the dictionary.
///
/// [1]: DataDictionary::by_tag
/// [2]: DataDictionary::by_name
/// [3]: DataDictionary::by_expr
pub trait DataDictionary {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch a data element entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its usual alias
    /// (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases (or keyword)
    /// are usually in UpperCamelCase,
    /// not separated by spaces,
    /// and are case sensitive.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its alias or by DICOM tag expression.
    ///
    /// This method accepts a tag descriptor in any of the following formats:
    ///
    /// - `(gggg,eeee)`:
    ///   a 4-digit hexadecimal group part
    ///   and a 4-digit hexadecimal element part
    ///   surrounded by parentheses
    /// - `gggg,eeee`:
    ///   a 4-digit hexadecimal group part
    ///   and a 4-digit hexadecimal element part
    ///   not surrounded by parentheses
    /// - _`KeywordName`_:
    ///   an exact match (case sensitive) by DICOM tag keyword
    ///
    /// When failing to identify the intended syntax or the tag keyword,
    /// `None` is returned.
    fn by_expr(&self, tag: &str) -> Option<&Self::Entry> {
        match tag.parse() {
            Ok(tag) => self.by_tag(tag),
            Err(_) => self.by_name(tag),
        }
    }

    /// Use this data element dictionary to interpret a DICOM tag.
    ///
    /// This method accepts the same formats as [`by_expr`](DataDictionary::by_expr).
    /// A tag in textual form is returned even if
    /// it is not in the dictionary.
    fn parse_tag(&self, tag: &str) -> Option<Tag> {
        tag.parse().ok().or_else(|| {
            // look for tag in the dictionary
            self.by_name(tag).map(|e| e.tag())
        })
    }
}

/// The data element dictionary entry type,
/// representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The full tag pattern of the attribute,
    /// which this dictionary entry can represent.
    fn tag_pattern(&self) -> TagPattern;

    /// Fetch a single tag applicable to this attribute.
    ///
    /// Note that this is not necessarily
    /// the original tag used as key for this entry.
    fn tag(&self) -> Tag {
        self.tag_pattern().tag()
    }

    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The human-readable name of the attribute.
    fn name(&self) -> &str;

    /// The extended value representation descriptor of the attribute.
    fn vr(&self) -> VirtualVr;

    /// Whether the attribute is retired from the standard.
    fn is_retired(&self) -> bool;
}

/// A data type for a dictionary entry with string slices for its text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag or tag pattern
    pub tag: TagPattern,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The human-readable name of the attribute
    pub name: &'a str,
    /// The extended value representation descriptor of the attribute
    pub vr: VirtualVr,
    /// Whether the attribute is retired
    pub retired: bool,
}

impl<'a> DataDictionaryEntryRef<'a> {
    /// Create a new dictionary entry.
    pub const fn new(
        tag: TagPattern,
        alias: &'a str,
        name: &'a str,
        vr: VirtualVr,
        retired: bool,
    ) -> Self {
        DataDictionaryEntryRef {
            tag,
            alias,
            name,
            vr,
            retired,
        }
    }
}

impl<'a> DataDictionaryEntry for DataDictionaryEntryRef<'a> {
    fn tag_pattern(&self) -> TagPattern {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn name(&self) -> &str {
        self.name
    }
    fn vr(&self) -> VirtualVr {
        self.vr
    }
    fn is_retired(&self) -> bool {
        self.retired
    }
}

#[cfg(test)]
mod tests {
    use super::{ParsePatternError, TagPattern, VirtualVr};
    use crate::header::{ParseTagError, Tag, VR};

    #[test]
    fn test_parse_tag_pattern() {
        let p: TagPattern = "(1234,5678)".parse().unwrap();
        assert_eq!(p, TagPattern::single(Tag(0x1234, 0x5678)));
        assert!(p.is_single());

        let p: TagPattern = "1234,5678".parse().unwrap();
        assert_eq!(p, TagPattern::single(Tag(0x1234, 0x5678)));

        let p: TagPattern = "12xx,5678".parse().unwrap();
        assert_eq!(p, TagPattern::masked(Tag(0x1200, 0x5678), 0xFF00, 0xFFFF));
        assert_eq!(p.tag(), Tag(0x1200, 0x5678));

        let p: TagPattern = "(0028,04x3)".parse().unwrap();
        assert_eq!(p, TagPattern::masked(Tag(0x0028, 0x0403), 0xFFFF, 0xFF0F));

        let p: TagPattern = "1010,XXXX".parse().unwrap();
        assert_eq!(p, TagPattern::masked(Tag(0x1010, 0x0000), 0xFFFF, 0x0000));
    }

    #[test]
    fn reject_bad_patterns() {
        assert_eq!(
            "xxxx,xxxx".parse::<TagPattern>(),
            Err(ParsePatternError::Open)
        );
        assert_eq!(
            "60xx;0011".parse::<TagPattern>(),
            Err(ParsePatternError::Notation {
                source: ParseTagError::MissingSeparator
            })
        );
        assert!(matches!(
            "60yy,0011".parse::<TagPattern>(),
            Err(ParsePatternError::Notation { .. })
        ));
    }

    #[test]
    fn pattern_notation_is_const() {
        const OVERLAY_COLUMNS: TagPattern = TagPattern::from_notation("(60xx,0011)");
        assert_eq!(OVERLAY_COLUMNS.value(), 0x6000_0011);
        assert_eq!(OVERLAY_COLUMNS.mask(), 0xFF00_FFFF);
    }

    #[test]
    #[should_panic]
    fn open_notation_panics() {
        TagPattern::from_notation("xxxx,xxxx");
    }

    #[test]
    fn pattern_matching() {
        let p = TagPattern::from_notation("(60xx,0011)");
        assert!(p.matches(Tag(0x6000, 0x0011)));
        assert!(p.matches(Tag(0x60CC, 0x0011)));
        assert!(!p.matches(Tag(0x6100, 0x0011)));
        assert!(!p.matches(Tag(0x60CC, 0x0010)));

        let p = TagPattern::from_notation("(1000,xxx5)");
        assert!(p.matches(Tag(0x1000, 0xDEF5)));
        assert!(!p.matches(Tag(0x1000, 0xDEF0)));
    }

    #[test]
    fn pattern_specificity() {
        assert_eq!(TagPattern::from_notation("0010,0010").specificity(), 8);
        assert_eq!(TagPattern::from_notation("0028,04x3").specificity(), 7);
        assert_eq!(TagPattern::from_notation("50xx,2600").specificity(), 6);
        assert_eq!(TagPattern::from_notation("1010,xxxx").specificity(), 4);
        assert!(TagPattern::masked(Tag(0, 0), 0, 0).is_open());
    }

    #[test]
    fn masks_are_widened_to_whole_digits() {
        assert_eq!(
            TagPattern::masked(Tag(0x60FF, 0x0011), 0x1F00, 0xFFFF),
            TagPattern::from_notation("60xx,0011")
        );
    }

    #[test]
    fn pattern_overlap() {
        let a = TagPattern::from_notation("60xx,0011");
        let b = TagPattern::from_notation("6012,xx11");
        let c = TagPattern::from_notation("6012,xx12");
        assert!(a.overlaps(b));
        assert!(b.overlaps(a));
        assert!(!a.overlaps(c));
        assert!(a.overlaps(a));
    }

    #[test]
    fn pattern_display() {
        assert_eq!(
            TagPattern::from_notation("60xx,0011").to_string(),
            "(60xx,0011)"
        );
        assert_eq!(
            TagPattern::from_notation("(7fe0,0010)").to_string(),
            "(7FE0,0010)"
        );
        assert_eq!(
            TagPattern::from_notation("1000,xxx0").to_string(),
            "(1000,xxx0)"
        );
    }

    #[test]
    fn virtual_vr_codes() {
        assert_eq!(VirtualVr::Exact(VR::AT).code(), "AT");
        assert_eq!(VirtualVr::Px.code(), "OW");
        assert_eq!(VirtualVr::Xs.code(), "US");
        assert_eq!(VirtualVr::Undefined.code(), "  ");
        assert_eq!(VirtualVr::Undefined.relaxed(), None);
        assert_eq!(VirtualVr::Ox.exact(), None);
        assert_eq!(VirtualVr::from(VR::UL).exact(), Some(VR::UL));
    }
}
