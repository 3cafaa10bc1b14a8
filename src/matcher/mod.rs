//! Postcode grammar matchers.
//!
//! A canonical candidate is tried against each grammar in a fixed priority
//! order, stopping at the first success:
//!
//! | Matcher              | Shape                  | Gate                       |
//! |----------------------|------------------------|----------------------------|
//! | standard (BS 7666)   | `A9 9AA` … `AA9A 9AA`  | always active              |
//! | BFPO                 | `BFPO` + 1–4 digits    | `MatchBfpo`                |
//! | overseas territories | 4 letters + `1ZZ`      | `MatchOverseasTerritories` |
//! | Girobank             | `GIR 0AA`              | `MatchGirobank`            |
//! | Santa Claus          | `SAN TA1`              | `MatchSanta`               |
//!
//! Every grammar must consume the whole candidate, and each accepts an
//! outward-only form when [`ParseOption::IncodeOptional`] is set.

mod bfpo;
mod char_class;
mod special;
mod standard;

use crate::options::{ParseOption, ParseOptions};
use crate::postcode::Postcode;

/// Run the matchers over a canonical candidate string.
pub(crate) fn match_canonical(canonical: &str, options: ParseOptions) -> Option<Postcode> {
    if let Some(postcode) = standard::match_standard(canonical, options) {
        return Some(postcode);
    }
    if options.contains(ParseOption::MatchBfpo)
        && let Some(postcode) = bfpo::match_bfpo(canonical, options)
    {
        return Some(postcode);
    }
    if options.contains(ParseOption::MatchOverseasTerritories)
        && let Some(postcode) = special::match_overseas(canonical, options)
    {
        return Some(postcode);
    }
    if options.contains(ParseOption::MatchGirobank)
        && let Some(postcode) = special::match_girobank(canonical, options)
    {
        return Some(postcode);
    }
    if options.contains(ParseOption::MatchSanta)
        && let Some(postcode) = special::match_santa(canonical, options)
    {
        return Some(postcode);
    }
    None
}
