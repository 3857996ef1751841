//! Roman-numeral-to-integer conversion.
//!
//! Standalone pure function, unrelated to the table; the demo driver
//! consumes it. Deliberately lenient: the scan applies the subtraction
//! rule right-to-left and never validates numeral grammar, so malformed
//! inputs like "IIX" evaluate under the rule (to 10: the second I sits
//! next to an equal I, so it adds) instead of being rejected.

use thiserror::Error;

/// Failure for characters outside the recognized symbol set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomanError {
    #[error("invalid roman symbol {0:?}")]
    InvalidSymbol(char),
}

/// Value of a single Roman symbol, `None` for anything else.
fn symbol_value(symbol: char) -> Option<u64> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Evaluates `text` as a Roman numeral.
///
/// Scans from the last character to the first, keeping a running total:
/// a symbol strictly smaller than the previously examined (more
/// significant) one is subtracted, otherwise added. Arithmetic wraps on
/// the unsigned total, matching the original accumulator. The empty
/// string evaluates to 0.
pub fn roman_to_int(text: &str) -> Result<u64, RomanError> {
    let mut total: u64 = 0;
    let mut prev: u64 = 0;
    for symbol in text.chars().rev() {
        let cur = symbol_value(symbol).ok_or(RomanError::InvalidSymbol(symbol))?;
        if cur < prev {
            total = total.wrapping_sub(cur);
        } else {
            total = total.wrapping_add(cur);
        }
        prev = cur;
    }
    Ok(total)
}
