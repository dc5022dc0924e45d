/// A parsed calendar date.
///
/// Every field is lexically valid on its own, but the day is never checked against the month:
/// `2022-02-31` parses. Rejecting it takes calendar arithmetic, which is out of scope here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Date {
  pub(crate) year: u16,
  pub(crate) month: u8,
  pub(crate) day: u8,
}

impl Date {
  /// The calendar year; between 1583 and 9999, inclusive.
  #[inline]
  pub const fn year(&self) -> u16 {
    self.year
  }

  /// The calendar month, between 1 and 12, inclusive.
  #[inline]
  pub const fn month(&self) -> u8 {
    self.month
  }

  /// The day of the month; between 1 and 31, inclusive.
  #[inline]
  pub const fn day(&self) -> u8 {
    self.day
  }
}

/// A parsed time of day, along with whatever fractional seconds and timezone designator the
/// input carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Time {
  pub(crate) hour: u8,
  pub(crate) minute: u8,
  pub(crate) second: u8,
  pub(crate) millisecond: u64,
  pub(crate) offset: Option<String>,
}

impl Time {
  /// The hour; between 0 and 23, inclusive.
  #[inline]
  pub const fn hour(&self) -> u8 {
    self.hour
  }

  /// The minute; between 0 and 59, inclusive.
  #[inline]
  pub const fn minute(&self) -> u8 {
    self.minute
  }

  /// The second; between 0 and 60, inclusive. A value of 60 only ever means a leap second.
  #[inline]
  pub const fn second(&self) -> u8 {
    self.second
  }

  /// The fractional-seconds digit run, read as a plain integer: `.5` yields 5 and `.500`
  /// yields 500. An absent fractional group yields 0.
  #[inline]
  pub const fn millisecond(&self) -> u64 {
    self.millisecond
  }

  /// The timezone designator exactly as it appeared (`"Z"`, `"+04:00"`, `"-12"`, ...), or
  /// `None` for a local (unqualified) time.
  #[inline]
  pub fn offset(&self) -> Option<&str> {
    self.offset.as_deref()
  }
}

/// A parsed date and time.
///
/// All date and time fields are also reachable directly on this type, so callers that do not
/// care about the halves never have to take them apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTime {
  pub(crate) date: Date,
  pub(crate) time: Time,
}

impl DateTime {
  /// The calendar date.
  #[inline]
  pub const fn date(&self) -> Date {
    self.date
  }

  /// The time of day.
  #[inline]
  pub const fn time(&self) -> &Time {
    &self.time
  }

  /// The calendar year; between 1583 and 9999, inclusive.
  #[inline]
  pub const fn year(&self) -> u16 {
    self.date.year
  }

  /// The calendar month, between 1 and 12, inclusive.
  #[inline]
  pub const fn month(&self) -> u8 {
    self.date.month
  }

  /// The day of the month; between 1 and 31, inclusive.
  #[inline]
  pub const fn day(&self) -> u8 {
    self.date.day
  }

  /// The hour; between 0 and 23, inclusive.
  #[inline]
  pub const fn hour(&self) -> u8 {
    self.time.hour
  }

  /// The minute; between 0 and 59, inclusive.
  #[inline]
  pub const fn minute(&self) -> u8 {
    self.time.minute
  }

  /// The second; between 0 and 60, inclusive. A value of 60 only ever means a leap second.
  #[inline]
  pub const fn second(&self) -> u8 {
    self.time.second
  }

  /// The fractional-seconds digit run, read as a plain integer; 0 when absent.
  #[inline]
  pub const fn millisecond(&self) -> u64 {
    self.time.millisecond
  }

  /// The timezone designator exactly as it appeared, or `None` for a local time.
  #[inline]
  pub fn offset(&self) -> Option<&str> {
    self.time.offset()
  }
}
