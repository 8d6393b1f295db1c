//! Data parsing helpers.
//!
//! Dates travel between the core and its embedding application as ISO 8601
//! strings (`YYYY-MM-DD`).  The parser here only splits and range-checks the
//! fields; calendar validity (days per month, leap years) is the job of the
//! `Date` constructor.

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.  Surrounding whitespace is
/// ignored; the year must have four digits and month and day two each.
///
/// # Example
/// ```
/// use lb_core::utilities::data_parsers::parse_iso_date;
/// assert_eq!(parse_iso_date("2024-02-10").unwrap(), (2024, 2, 10));
/// assert!(parse_iso_date("2024-2-10").is_err());
/// ```
pub fn parse_iso_date(s: &str) -> Result<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        return Err(Error::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
    };
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return Err(Error::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
    }
    let year = parse_digits::<u16>(y, s)?;
    let month = parse_digits::<u8>(m, s)?;
    let day = parse_digits::<u8>(d, s)?;
    Ok((year, month, day))
}

fn parse_digits<T: std::str::FromStr>(field: &str, whole: &str) -> Result<T> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse(format!("non-digit field {field:?} in {whole:?}")));
    }
    field
        .parse()
        .map_err(|_| Error::Parse(format!("field {field:?} out of range in {whole:?}")))
}
