//! The postcode value type and its parsing entry points.

use std::fmt;
use std::str::FromStr;

use crate::matcher;
use crate::normalize::normalize;
use crate::options::ParseOptions;


/// A United Kingdom postcode, decomposed into its outward and inward codes.
///
/// Values are created only by a successful parse and never change afterwards.
/// The outward code is always present; the inward code is absent when the
/// input carried none and the options allowed that.
///
/// ```rust
/// use postcode::{ParseOptions, Postcode};
///
/// let postcode = Postcode::parse("ls25-6lg", ParseOptions::NONE)?;
/// assert_eq!(postcode.out_code(), "LS25");
/// assert_eq!(postcode.in_code(), Some("6LG"));
/// assert_eq!(postcode.to_string(), "LS25 6LG");
/// # Ok::<(), postcode::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Postcode {
    out_code: String,
    in_code: Option<String>,
}

impl Postcode {
    /// Parse `input` as a postcode under the given options.
    ///
    /// Case, separators and surrounding junk are tolerated; the grammars
    /// themselves are strict and must consume everything that remains.
    pub fn parse(input: &str, options: ParseOptions) -> Result<Postcode, ParseError> {
        Self::try_parse(input, options).ok_or(ParseError)
    }

    /// Parse `input` as a postcode, reporting failure as `None`.
    pub fn try_parse(input: &str, options: ParseOptions) -> Option<Postcode> {
        let canonical = normalize(input)?;
        matcher::match_canonical(&canonical, options)
    }

    /// The outward (area and district) portion.
    pub fn out_code(&self) -> &str {
        &self.out_code
    }

    /// The inward (sector and unit) portion, when present.
    pub fn in_code(&self) -> Option<&str> {
        self.in_code.as_deref()
    }

    pub(crate) fn new(out_code: String, in_code: Option<String>) -> Postcode {
        Postcode { out_code, in_code }
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.in_code {
            Some(in_code) => write!(f, "{} {}", self.out_code, in_code),
            None => write!(f, "{}", self.out_code),
        }
    }
}

impl FromStr for Postcode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Postcode, ParseError> {
        Postcode::parse(s, ParseOptions::NONE)
    }
}

/// The input does not match any recognized postcode grammar under the
/// supplied options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid UK postcode")
    }
}

impl std::error::Error for ParseError {}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Postcode;
    use crate::options::ParseOptions;

    impl Serialize for Postcode {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Postcode {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Postcode, D::Error> {
            let raw = String::deserialize(deserializer)?;
            // Every matcher enabled: a serialized BFPO or reserved code must
            // deserialize back to the same value.
            Postcode::parse(&raw, ParseOptions::ALL).map_err(D::Error::custom)
        }
    }
}
