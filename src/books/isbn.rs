//! ISBN-13 validation.
//!
//! Only the hyphenated form is accepted, e.g. `978-0-306-40615-7`. The hyphens are
//! stripped before the checksum is computed, the remaining thirteen characters must be
//! ASCII digits.

const ISBN13_LEN: usize = 13;
const MOD: u32 = 10;
const EVEN_POSITION_WEIGHT: u32 = 3;
const ODD_POSITION_WEIGHT: u32 = 1;

/// Returns true when `value` is a hyphenated ISBN-13 with a matching check digit.
///
/// Malformed input (no hyphen, wrong length, non-digit characters) is reported as
/// invalid, never as an error.
pub fn is_valid_isbn13(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    let stripped: String = value.chars().filter(|c| *c != '-').collect();
    if stripped.chars().count() < ISBN13_LEN {
        return false;
    }
    if !value.contains('-') {
        return false;
    }
    let digits: Option<Vec<u32>> = stripped.chars().map(|c| c.to_digit(10)).collect();
    let digits = match digits {
        Some(digits) if digits.len() == ISBN13_LEN => digits,
        _ => return false,
    };

    // 1-based position: even positions weigh 3, odd positions weigh 1
    let sum: u32 = digits[..ISBN13_LEN - 1].iter().enumerate()
        .map(|(i, d)| if (i + 1) % 2 == 0 { d * EVEN_POSITION_WEIGHT } else { d * ODD_POSITION_WEIGHT })
        .sum();
    let check_digit = (MOD - sum % MOD) % MOD;
    check_digit == digits[ISBN13_LEN - 1]
}

/// Store key of an ISBN: the digits without hyphens, so every hyphenation of the same
/// number names the same book.
pub fn isbn_key(value: &str) -> String {
    value.chars().filter(|c| *c != '-').collect()
}
