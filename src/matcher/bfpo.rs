//! Matcher for British Forces Post Office codes.

use std::ops::RangeInclusive;

use crate::options::{ParseOption, ParseOptions};
use crate::postcode::Postcode;

/// The outward token shared by every BFPO code.
const OUTWARD: &str = "BFPO";

/// Permitted digit counts for a BFPO inward code.
const DIGIT_RANGE: RangeInclusive<usize> = 1..=4;

/// Match `canonical` against the BFPO grammar: `BFPO` followed by one to
/// four digits, or bare `BFPO` under [`ParseOption::IncodeOptional`].
pub(crate) fn match_bfpo(canonical: &str, options: ParseOptions) -> Option<Postcode> {
    let digits = canonical.strip_prefix(OUTWARD)?;

    if DIGIT_RANGE.contains(&digits.len()) && digits.chars().all(|ch| ch.is_ascii_digit()) {
        return Some(Postcode::new(OUTWARD.to_string(), Some(digits.to_string())));
    }
    if digits.is_empty() && options.contains(ParseOption::IncodeOptional) {
        return Some(Postcode::new(OUTWARD.to_string(), None));
    }
    None
}
