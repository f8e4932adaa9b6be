//! Basic DICOM element header concepts:
//! data element tags and value representations.
//!
//! This module also hosts the tag codec,
//! which turns the textual forms of a tag
//! (such as `0010,0010` or `(7FE0,0010)`)
//! into a [`Tag`] value and back.

use snafu::Snafu;
use std::fmt;
use std::str::FromStr;

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Retrieve the two-letter code of this VR.
    pub const fn as_str(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }
}

/// An error returned when a string is not a known value representation.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("no such value representation `{}`", code))]
pub struct ParseVrError {
    code: String,
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = ParseVrError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err(ParseVrError {
                code: string.to_owned(),
            }),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// A tag is a (group, element) pair of 16-bit numbers.
/// It converts to and from the packed 32-bit form `0xGGGG_EEEE`.
///
/// Tags are parsed from text in the form `GGGG,EEEE`,
/// optionally surrounded by parentheses:
///
/// ```
/// # use dicom_dictionary_core::Tag;
/// let tag: Tag = "7fe0,0010".parse()?;
/// assert_eq!(tag, Tag(0x7FE0, 0x0010));
/// assert_eq!(tag.canonical(), "7FE0,0010");
/// assert_eq!(tag.to_string(), "(7FE0,0010)");
/// # Ok::<_, dicom_dictionary_core::header::ParseTagError>(())
/// ```
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub const fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub const fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether the tag belongs to a private group
    /// (the group number is odd).
    #[inline]
    pub const fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Whether this is a group length tag, of the form `(GGGG,0000)`.
    #[inline]
    pub const fn is_group_length(self) -> bool {
        self.1 == 0
    }

    /// The packed 32-bit form of the tag,
    /// with the group number in the upper half.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        (self.0 as u32) << 16 | self.1 as u32
    }

    /// Print the tag in the canonical `GGGG,EEEE` form,
    /// with upper case hexadecimal digits and no parentheses.
    pub fn canonical(self) -> String {
        format!("{:04X},{:04X}", self.0, self.1)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl From<u32> for Tag {
    #[inline]
    fn from(value: u32) -> Tag {
        Tag((value >> 16) as u16, value as u16)
    }
}

/// An error returned when a tag (or tag pattern) text
/// is not in the `GGGG,EEEE` format.
///
/// Any of these variants means that the input has an invalid format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    /// The text does not have the length of a tag.
    #[snafu(display("tag text has {} characters, expected 9 (or 11 with parentheses)", got))]
    InvalidLength {
        /// Number of bytes in the text.
        got: usize,
    },
    /// The group and element parts are not separated by a comma.
    #[snafu(display("missing `,` separator between group and element"))]
    MissingSeparator,
    /// A digit is not hexadecimal.
    #[snafu(display("invalid character at position {}, expected a hexadecimal digit", position))]
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
    },
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag_notation(s.as_bytes(), false).map(|(value, _)| Tag::from(value))
    }
}

/// Parse a tag in the `GGGG,EEEE` or `(GGGG,EEEE)` notation.
///
/// Returns the packed tag value and the nibble mask of fixed digits.
/// When `wildcards` is true, `x` or `X` stands for an open digit
/// (contributing zero to both value and mask).
pub(crate) const fn parse_tag_notation(
    text: &[u8],
    wildcards: bool,
) -> Result<(u32, u32), ParseTagError> {
    let offset = match text.len() {
        9 => 0,
        11 if text[0] == b'(' && text[10] == b')' => 1,
        got => return Err(ParseTagError::InvalidLength { got }),
    };
    if text[offset + 4] != b',' {
        return Err(ParseTagError::MissingSeparator);
    }

    let mut value = 0u32;
    let mut mask = 0u32;
    let mut i = 0;
    while i < 8 {
        let position = if i < 4 { offset + i } else { offset + i + 1 };
        let (digit, fixed) = match text[position] {
            c @ b'0'..=b'9' => (c - b'0', 0xF),
            c @ b'a'..=b'f' => (c - b'a' + 10, 0xF),
            c @ b'A'..=b'F' => (c - b'A' + 10, 0xF),
            b'x' | b'X' if wildcards => (0, 0),
            _ => return Err(ParseTagError::InvalidDigit { position }),
        };
        value = value << 4 | digit as u32;
        mask = mask << 4 | fixed;
        i += 1;
    }

    Ok((value, mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_packed_form() {
        assert_eq!(Tag(0x7FE0, 0x0010).to_u32(), 0x7FE0_0010);
        assert_eq!(Tag::from(0x0028_0453), Tag(0x0028, 0x0453));
    }

    #[test]
    fn tag_classification() {
        assert!(Tag(0x0011, 0xABCD).is_private());
        assert!(!Tag(0x0010, 0x0010).is_private());
        assert!(Tag(0x0011, 0x0000).is_group_length());
        assert!(!Tag(0xFFFE, 0xE000).is_group_length());
    }

    #[test]
    fn parse_tags() {
        assert_eq!("0010,0010".parse(), Ok(Tag(0x0010, 0x0010)));
        assert_eq!("(7FE0,0010)".parse(), Ok(Tag(0x7FE0, 0x0010)));
        assert_eq!("fffe,e0dd".parse(), Ok(Tag(0xFFFE, 0xE0DD)));
        assert_eq!("60cC,0011".parse(), Ok(Tag(0x60CC, 0x0011)));
    }

    #[test]
    fn reject_malformed_tags() {
        assert_eq!(
            "".parse::<Tag>(),
            Err(ParseTagError::InvalidLength { got: 0 })
        );
        assert_eq!(
            "0010,00100".parse::<Tag>(),
            Err(ParseTagError::InvalidLength { got: 10 })
        );
        assert_eq!(
            "0010.0010".parse::<Tag>(),
            Err(ParseTagError::MissingSeparator)
        );
        assert_eq!(
            "00G0,0010".parse::<Tag>(),
            Err(ParseTagError::InvalidDigit { position: 2 })
        );
        // signs are accepted by `u16::from_str_radix`, but not here
        assert_eq!(
            "+010,0010".parse::<Tag>(),
            Err(ParseTagError::InvalidDigit { position: 0 })
        );
        // wildcards are only valid in tag patterns
        assert_eq!(
            "60xx,0011".parse::<Tag>(),
            Err(ParseTagError::InvalidDigit { position: 2 })
        );
        assert_eq!(
            "(0010,0010".parse::<Tag>(),
            Err(ParseTagError::InvalidLength { got: 10 })
        );
        assert_eq!(
            "[0010,0010]".parse::<Tag>(),
            Err(ParseTagError::InvalidLength { got: 11 })
        );
    }

    #[test]
    fn tag_printing() {
        let tag = Tag(0x0002, 0x0010);
        assert_eq!(tag.canonical(), "0002,0010");
        assert_eq!(tag.to_string(), "(0002,0010)");
        assert_eq!(format!("{:?}", tag), "Tag(0x0002, 0x0010)");
        assert_eq!(Tag(0xfffe, 0xe00d).canonical(), "FFFE,E00D");
    }

    #[test]
    fn vr_codes() {
        assert_eq!("UL".parse::<VR>(), Ok(VR::UL));
        assert!("ul".parse::<VR>().is_err());
        assert_eq!("SQ".parse::<VR>(), Ok(VR::SQ));
        assert!("XX".parse::<VR>().is_err());
        assert_eq!(VR::SV.as_str(), "SV");
        assert_eq!(VR::OW.to_string(), "OW");
    }
}
