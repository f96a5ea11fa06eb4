//! Singapore mobile number check.
//!
//! Two surface forms are accepted: a bare 8-digit number starting with 6, 8 or 9,
//! or the same number after a `+65` prefix with at most one space or tab between
//! them. The match is anchored at both ends.

use once_cell::sync::Lazy;
use regex::Regex;

pub const SG_PHONE_PATTERN: &str = r"^(?:\+65[ \t]?)?[689][0-9]{7}$";

pub const SG_PHONE_MESSAGE: &str = "Enter a valid Singapore number";

static SG_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(SG_PHONE_PATTERN).expect("SG phone pattern must compile"));

pub fn is_valid_sg_phone(value: &str) -> bool {
    SG_PHONE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bare_and_prefixed_forms() {
        for lead in ['6', '8', '9'] {
            let bare = format!("{lead}1234567");
            assert!(is_valid_sg_phone(&bare), "{bare}");
            assert!(is_valid_sg_phone(&format!("+65{bare}")));
            assert!(is_valid_sg_phone(&format!("+65 {bare}")));
            assert!(is_valid_sg_phone(&format!("+65\t{bare}")));
        }
    }

    #[test]
    fn test_rejects_other_leading_digits() {
        for lead in ['0', '1', '2', '3', '4', '5', '7'] {
            let bare = format!("{lead}1234567");
            assert!(!is_valid_sg_phone(&bare), "{bare}");
            assert!(!is_valid_sg_phone(&format!("+65 {bare}")));
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_sg_phone("9123456"));
        assert!(!is_valid_sg_phone("912345678"));
        assert!(!is_valid_sg_phone("+65 9123456"));
        assert!(!is_valid_sg_phone("+65 912345678"));
        assert!(!is_valid_sg_phone(""));
    }

    #[test]
    fn test_rejects_bad_separators_and_prefixes() {
        for value in [
            "6591234567",
            "65 91234567",
            "+65  91234567",
            "+65-91234567",
            "(+65) 91234567",
            "9123-4567",
            "9a234567",
            "91234567 ",
            " 91234567",
            "+65\n91234567",
            "91234567\n",
        ] {
            assert!(!is_valid_sg_phone(value), "{value:?}");
        }
    }

    #[test]
    fn test_rejects_embedded_numbers() {
        assert!(!is_valid_sg_phone("xx91234567yy"));
        assert!(!is_valid_sg_phone("foo 91234567 bar"));
        assert!(!is_valid_sg_phone("call +65 91234567"));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode decimal digits but not valid input
        assert!(!is_valid_sg_phone("9١٢٣٤٥٦٧"));
    }
}
