//! Matchers for the reserved codes outside the standard grammar: the
//! overseas territories, Girobank and Santa Claus.

use phf::{Map, phf_map};

use crate::options::{ParseOption, ParseOptions};
use crate::postcode::Postcode;

/// Overseas territory outward codes, keyed to the single inward code valid
/// for each.
const OVERSEAS_TERRITORIES: Map<&'static str, &'static str> = phf_map! {
    "ASCN" => "1ZZ",    // Ascension Island
    "BIQQ" => "1ZZ",    // British Antarctic Territory
    "BBND" => "1ZZ",    // British Indian Ocean Territory
    "FIQQ" => "1ZZ",    // Falkland Islands
    "PCRN" => "1ZZ",    // Pitcairn Islands
    "STHL" => "1ZZ",    // Saint Helena
    "SIQQ" => "1ZZ",    // South Georgia and the Sandwich Islands
    "TDCU" => "1ZZ",    // Tristan da Cunha
    "TKCA" => "1ZZ",    // Turks and Caicos Islands
};

/// Every territory outward code is four letters.
const TERRITORY_OUTWARD_LEN: usize = 4;

/// The reserved Girobank code.
const GIROBANK: (&str, &str) = ("GIR", "0AA");

/// The novelty Santa Claus code.
const SANTA: (&str, &str) = ("SAN", "TA1");

/// Match `canonical` against the overseas territory table.
pub(crate) fn match_overseas(canonical: &str, options: ParseOptions) -> Option<Postcode> {
    let outward = canonical.get(..TERRITORY_OUTWARD_LEN)?;
    let inward = *OVERSEAS_TERRITORIES.get(outward)?;

    let rest = &canonical[TERRITORY_OUTWARD_LEN..];
    if rest == inward {
        return Some(Postcode::new(outward.to_string(), Some(inward.to_string())));
    }
    if rest.is_empty() && options.contains(ParseOption::IncodeOptional) {
        return Some(Postcode::new(outward.to_string(), None));
    }
    None
}

/// Match `canonical` against the Girobank code.
pub(crate) fn match_girobank(canonical: &str, options: ParseOptions) -> Option<Postcode> {
    match_reserved(canonical, options, GIROBANK)
}

/// Match `canonical` against the Santa Claus code.
pub(crate) fn match_santa(canonical: &str, options: ParseOptions) -> Option<Postcode> {
    match_reserved(canonical, options, SANTA)
}

/// Match a single reserved outward/inward pair, with the usual outward-only
/// fallback.
fn match_reserved(
    canonical: &str,
    options: ParseOptions,
    (outward, inward): (&str, &str),
) -> Option<Postcode> {
    let rest = canonical.strip_prefix(outward)?;
    if rest == inward {
        return Some(Postcode::new(outward.to_string(), Some(inward.to_string())));
    }
    if rest.is_empty() && options.contains(ParseOption::IncodeOptional) {
        return Some(Postcode::new(outward.to_string(), None));
    }
    None
}
