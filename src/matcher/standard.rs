//! Matcher for the standard BS 7666 postcode grammar.
//!
//! Outward codes take one of six shapes (`A9`, `A99`, `A9A`, `AA9`, `AA99`,
//! `AA9A`); an inward code is always one digit followed by two unit letters.
//! A match must consume the entire canonical string.

use super::char_class::*;
use crate::options::{ParseOption, ParseOptions};
use crate::postcode::Postcode;

/// An inward code is always exactly three characters.
const INWARD_LEN: usize = 3;

/// Match `canonical` against the standard grammar.
///
/// The full outward+inward form is tried first; the bare outward form is
/// accepted only under [`ParseOption::IncodeOptional`].
pub(crate) fn match_standard(canonical: &str, options: ParseOptions) -> Option<Postcode> {
    let chars: Vec<char> = canonical.chars().collect();

    if chars.len() > INWARD_LEN {
        let (outward, inward) = chars.split_at(chars.len() - INWARD_LEN);
        if is_outward(outward) && is_inward(inward) {
            return Some(Postcode::new(
                outward.iter().collect(),
                Some(inward.iter().collect()),
            ));
        }
    }

    if options.contains(ParseOption::IncodeOptional) && is_outward(&chars) {
        return Some(Postcode::new(chars.iter().collect(), None));
    }

    None
}

/// Test whether `chars` forms a complete outward code.
fn is_outward(chars: &[char]) -> bool {
    let [first, rest @ ..] = chars else {
        return false;
    };
    if !is_first_area_letter(*first) {
        return false;
    }
    match rest {
        // A9
        [d] => d.is_ascii_digit(),
        // A99 | A9A
        [d, t] if d.is_ascii_digit() => {
            t.is_ascii_digit() || is_single_area_district_letter(*t)
        }
        // AA9
        [l, d] => is_second_area_letter(*l) && d.is_ascii_digit(),
        // AA99 | AA9A
        [l, d, t] => {
            is_second_area_letter(*l)
                && d.is_ascii_digit()
                && (t.is_ascii_digit() || is_double_area_district_letter(*t))
        }
        _ => false,
    }
}

/// Test whether `chars` forms an inward code: one digit, two unit letters.
fn is_inward(chars: &[char]) -> bool {
    matches!(chars, [d, a, b]
        if d.is_ascii_digit() && is_unit_letter(*a) && is_unit_letter(*b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(canonical: &str) -> Option<String> {
        match_standard(canonical, ParseOptions::NONE).map(|p| p.to_string())
    }

    fn partial(canonical: &str) -> Option<String> {
        match_standard(canonical, ParseOption::IncodeOptional.into()).map(|p| p.to_string())
    }

    // --- Outward shapes ---

    #[test]
    fn a9_form() {
        assert_eq!(full("M11AA").as_deref(), Some("M1 1AA"));
    }

    #[test]
    fn a99_form() {
        assert_eq!(full("M601NW").as_deref(), Some("M60 1NW"));
    }

    #[test]
    fn a9a_form() {
        assert_eq!(full("W1A1HQ").as_deref(), Some("W1A 1HQ"));
    }

    #[test]
    fn aa9_form() {
        assert_eq!(full("CR26XH").as_deref(), Some("CR2 6XH"));
    }

    #[test]
    fn aa99_form() {
        assert_eq!(full("DN551PT").as_deref(), Some("DN55 1PT"));
    }

    #[test]
    fn aa9a_form() {
        assert_eq!(full("EC1A1BB").as_deref(), Some("EC1A 1BB"));
    }

    // --- Letter restrictions ---

    #[test]
    fn q_v_x_never_lead() {
        for canonical in ["QO75PQ", "VO75PQ", "XO75PQ"] {
            assert_eq!(full(canonical), None, "canonical: {canonical}");
        }
    }

    #[test]
    fn i_j_z_never_second() {
        for canonical in ["PI75PQ", "PJ75PQ", "PZ75PQ"] {
            assert_eq!(full(canonical), None, "canonical: {canonical}");
        }
    }

    #[test]
    fn a9a_trailing_letter_set_is_restricted() {
        // I, L and Z are outside the A9A trailing set.
        for canonical in ["W1I1AA", "W1L1AA", "W1Z1AA"] {
            assert_eq!(full(canonical), None, "canonical: {canonical}");
        }
    }

    #[test]
    fn aa9a_trailing_letter_set_is_restricted() {
        // C, D and Z are outside the AA9A trailing set.
        for canonical in ["EC1C1BB", "EC1D1BB", "EC1Z1BB"] {
            assert_eq!(full(canonical), None, "canonical: {canonical}");
        }
    }

    #[test]
    fn unit_letters_exclude_c_i_k_m_o_v() {
        for excluded in ['C', 'I', 'K', 'M', 'O', 'V'] {
            let canonical = format!("M11A{excluded}");
            assert_eq!(full(&canonical), None, "canonical: {canonical}");
        }
    }

    #[test]
    fn inward_must_lead_with_a_digit() {
        assert_eq!(full("M1AAA"), None);
    }

    // --- Anchoring ---

    #[test]
    fn trailing_character_rejected() {
        assert_eq!(full("M11AAA"), None);
        assert_eq!(partial("M11AAA"), None);
    }

    #[test]
    fn leading_character_rejected() {
        // S818SH alone is valid; a leading Q must sink the whole candidate.
        assert_eq!(full("S818SH").as_deref(), Some("S81 8SH"));
        assert_eq!(full("QS818SH"), None);
    }

    // --- Outward-only matches ---

    #[test]
    fn outward_alone_needs_the_flag() {
        assert_eq!(full("LS25"), None);
        assert_eq!(partial("LS25").as_deref(), Some("LS25"));
    }

    #[test]
    fn outward_alone_accepts_every_shape() {
        for canonical in ["M1", "M60", "W1A", "CR2", "DN55", "EC1A"] {
            assert_eq!(
                partial(canonical).as_deref(),
                Some(canonical),
                "canonical: {canonical}"
            );
        }
    }

    #[test]
    fn invalid_outward_fails_even_with_the_flag() {
        assert_eq!(partial("PZ7"), None);
        assert_eq!(partial("Q1"), None);
    }

    #[test]
    fn flag_does_not_suppress_the_full_match() {
        let p = match_standard("LS256LG", ParseOption::IncodeOptional.into()).unwrap();
        assert_eq!(p.out_code(), "LS25");
        assert_eq!(p.in_code(), Some("6LG"));
    }

    // --- Degenerate input ---

    #[test]
    fn too_short_candidates_fail() {
        assert_eq!(full("M"), None);
        assert_eq!(full("M1"), None);
        assert_eq!(partial("M"), None);
    }
}
