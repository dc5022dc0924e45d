//! Validation and parsing for a strict subset of the ISO 8601 date and date-time formats.
//!
//! This library answers two questions about a string: is it a well-formed ISO 8601 date or
//! date and time, and what are its numeric parts. It does so without pulling in a
//! general-purpose date library or doing any calendar arithmetic. A successful parse yields
//! plain value structs ([`Date`], [`DateTime`]) that the caller can convert into whatever
//! richer type is needed.
//!
//! The accepted subset is deliberately narrow:
//!
//! - Years run 1583 through 9999. ISO 8601 permits earlier years by mutual agreement; this
//!   library rejects them so that every accepted string means the same thing everywhere.
//! - Dates require their `-` separators. Date-times accept the extended form, the basic form,
//!   and any mix: each `-` and `:` is optional on its own, while the `T` divider is not.
//! - Seconds run through 60 to allow leap seconds.
//! - Timezone offsets are `Z` or signed hours with optional quarter-hour minutes, from
//!   `-12:00` to `+14:00`; the two extreme hours take no minutes beyond `:00`.
//! - The day of the month is checked only lexically (01-31), never against the month:
//!   `2022-02-31` parses. Rejecting it would take the calendar arithmetic this library exists
//!   to avoid.

mod error;
mod models;
mod parser;

use std::str::FromStr;

pub use error::ErrorKind;
pub use error::ParseError;
pub use models::Date;
pub use models::DateTime;
pub use models::Time;

/// A result returned from date and time parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Report whether `text` is a calendar date of the form `YYYY-MM-DD`.
///
/// Total over any input: never panics, never allocates. Partial matches do not count.
pub fn is_valid_date(text: &str) -> bool {
  parser::scan_date(text).is_ok()
}

/// Report whether `text` is a full ISO 8601 date and time, in extended, basic, or mixed form,
/// with optional fractional seconds and an optional timezone designator.
///
/// Total over any input: never panics, never allocates. Partial matches do not count.
pub fn is_valid_date_time(text: &str) -> bool {
  parser::scan_date_time(text).is_ok()
}

/// Parse a calendar date of the form `YYYY-MM-DD`.
///
/// Anything that does not fully match the date grammar is an [`ErrorKind::InvalidDate`] error;
/// there are no partial results.
pub fn parse_date(text: &str) -> ParseResult<Date> {
  parser::scan_date(text).map_err(|ix| ParseError::new(text, ErrorKind::InvalidDate).at_index(ix))
}

/// Parse a full ISO 8601 date and time.
///
/// Anything that does not fully match the date-time grammar is an
/// [`ErrorKind::InvalidDateTime`] error; there are no partial results.
///
/// ## Example
///
/// ```
/// use iso8601_strict::parse_date_time;
/// let parsed = parse_date_time("2022-02-03T17:07:44+04:00")?;
/// assert_eq!(parsed.year(), 2022);
/// assert_eq!(parsed.minute(), 7);
/// assert_eq!(parsed.offset(), Some("+04:00"));
/// let local = parse_date_time("20220203T170744.5")?;
/// assert_eq!(local.millisecond(), 5);
/// assert_eq!(local.offset(), None);
/// # Ok::<(), iso8601_strict::ParseError>(())
/// ```
pub fn parse_date_time(text: &str) -> ParseResult<DateTime> {
  match parser::scan_date_time(text) {
    Ok(parts) => Ok(parts.into_date_time()),
    Err(ix) => Err(ParseError::new(text, ErrorKind::InvalidDateTime).at_index(ix)),
  }
}

impl FromStr for Date {
  type Err = ParseError;

  fn from_str(text: &str) -> ParseResult<Self> {
    parse_date(text)
  }
}

impl FromStr for DateTime {
  type Err = ParseError;

  fn from_str(text: &str) -> ParseResult<Self> {
    parse_date_time(text)
  }
}
