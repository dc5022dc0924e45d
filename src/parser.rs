use crate::models::Date;
use crate::models::DateTime;
use crate::models::Time;

// The accepted grammar, anchored at both ends:
//
//   date      = year "-" month "-" day
//   date-time = year ["-"] month ["-"] day "T" hour [":"] minute [":"] second
//               [fraction] [offset]
//   year      = 4DIGIT        ; 1583-9999
//   month     = 2DIGIT        ; 01-12
//   day       = 2DIGIT        ; 01-31, never cross-checked against the month
//   hour      = 2DIGIT        ; 00-23
//   minute    = 2DIGIT        ; 00-59
//   second    = 2DIGIT        ; 00-60, 60 for leap seconds
//   fraction  = "." 1*DIGIT
//   offset    = "Z" / ("+" / "-") 2DIGIT [":" 2DIGIT]
//               ; "+00".."+13" and "-00".."-11" take minutes 00, 15, 30, or 45;
//               ; the extremes "+14" and "-12" take ":00" or nothing
//
// Every field is a fixed-width digit run, so a single greedy left-to-right pass is
// unambiguous even when the separators are omitted.

/// Scanner results carry the byte index of the first mismatch as their error.
type Scan<T> = Result<T, usize>;

/// Match a complete calendar date: `year "-" month "-" day`, separators required.
pub(crate) fn scan_date(text: &str) -> Scan<Date> {
  let mut input = Input::new(text);
  let year = input.year()?;
  input.expect(b'-')?;
  let month = input.month()?;
  input.expect(b'-')?;
  let day = input.day()?;
  input.assert_consumed()?;
  Ok(Date { year, month, day })
}

/// Match a complete date and time. The date's `-` and the time's `:` separators are each
/// optional on their own, so the extended, basic, and mixed ISO forms all land here; the `T`
/// divider never is.
pub(crate) fn scan_date_time(text: &str) -> Scan<DateTimeParts<'_>> {
  let mut input = Input::new(text);
  let year = input.year()?;
  input.eat(b'-');
  let month = input.month()?;
  input.eat(b'-');
  let day = input.day()?;
  input.expect(b'T')?;
  let hour = input.hour()?;
  input.eat(b':');
  let minute = input.minute()?;
  input.eat(b':');
  let second = input.second()?;
  let millisecond = input.fraction()?;
  let offset = input.offset()?;
  input.assert_consumed()?;
  Ok(DateTimeParts { date: Date { year, month, day }, hour, minute, second, millisecond, offset })
}

/// Everything a date-time scan extracts, with the offset text still borrowed from the input so
/// that validation alone never allocates.
pub(crate) struct DateTimeParts<'a> {
  date: Date,
  hour: u8,
  minute: u8,
  second: u8,
  millisecond: u64,
  offset: Option<&'a str>,
}

impl DateTimeParts<'_> {
  /// Convert into the owning result type.
  pub(crate) fn into_date_time(self) -> DateTime {
    let Self { date, hour, minute, second, millisecond, offset } = self;
    let time = Time { hour, minute, second, millisecond, offset: offset.map(str::to_owned) };
    DateTime { date, time }
  }
}

/// A cursor over the input, consuming one grammar field at a time.
struct Input<'a> {
  src: &'a str,
  pos: usize,
}

impl<'a> Input<'a> {
  fn new(src: &'a str) -> Self {
    Self { src, pos: 0 }
  }

  #[inline]
  fn peek(&self) -> Option<u8> {
    self.src.as_bytes().get(self.pos).copied()
  }

  /// Consume `ch` if it comes next, and report whether it did.
  fn eat(&mut self, ch: u8) -> bool {
    let hit = self.peek() == Some(ch);
    if hit {
      self.pos += 1;
    }
    hit
  }

  /// Consume `ch`, or fail where it should have been.
  fn expect(&mut self, ch: u8) -> Scan<()> {
    match self.eat(ch) {
      true => Ok(()),
      false => Err(self.pos),
    }
  }

  /// Consume exactly `width` ASCII digits and return their numeric value.
  fn digits(&mut self, width: usize) -> Scan<u32> {
    let mut value = 0;
    for _ in 0..width {
      match self.peek() {
        Some(ch @ b'0'..=b'9') => {
          value = value * 10 + u32::from(ch - b'0');
          self.pos += 1;
        },
        _ => return Err(self.pos),
      }
    }
    Ok(value)
  }

  /// Consume a two-digit field and check it against the field's inclusive range. A value out
  /// of range fails at the start of the field, not past its end.
  fn two_digits(&mut self, min: u8, max: u8) -> Scan<u8> {
    let start = self.pos;
    let value = self.digits(2)? as u8;
    match value >= min && value <= max {
      true => Ok(value),
      false => Err(start),
    }
  }

  /// The calendar year: four digits, 1583 through 9999. Earlier years predate the Gregorian
  /// cutover and are only valid ISO 8601 by mutual agreement, so they are rejected outright.
  fn year(&mut self) -> Scan<u16> {
    let start = self.pos;
    let year = self.digits(4)?;
    match year >= 1583 {
      true => Ok(year as u16),
      false => Err(start),
    }
  }

  /// The calendar month: `01` through `12`, one-based.
  fn month(&mut self) -> Scan<u8> {
    self.two_digits(1, 12)
  }

  /// The day of the month: `01` through `31`, with no awareness of which month it sits in.
  fn day(&mut self) -> Scan<u8> {
    self.two_digits(1, 31)
  }

  /// The hour on a 24-hour clock: `00` through `23`.
  fn hour(&mut self) -> Scan<u8> {
    self.two_digits(0, 23)
  }

  /// The minute: `00` through `59`.
  fn minute(&mut self) -> Scan<u8> {
    self.two_digits(0, 59)
  }

  /// The second: `00` through `60`, where `60` is a leap second.
  fn second(&mut self) -> Scan<u8> {
    self.two_digits(0, 60)
  }

  /// The optional fractional seconds: a dot followed by one or more digits. The run is read as
  /// a plain integer however long it is (`.5` is five, not five hundred), saturating on
  /// overflow; an absent group reads as zero.
  fn fraction(&mut self) -> Scan<u64> {
    if !self.eat(b'.') {
      return Ok(0);
    }
    let start = self.pos;
    let mut value: u64 = 0;
    while let Some(ch @ b'0'..=b'9') = self.peek() {
      value = value.saturating_mul(10).saturating_add(u64::from(ch - b'0'));
      self.pos += 1;
    }
    match self.pos > start {
      true => Ok(value),
      false => Err(start),
    }
  }

  /// The optional timezone designator: nothing, `Z` for UTC, or a signed hour with an optional
  /// colon-separated minute. Returns the designator text exactly as matched.
  fn offset(&mut self) -> Scan<Option<&'a str>> {
    let start = self.pos;
    match self.peek() {
      Some(b'Z') => self.pos += 1,
      Some(b'+') => {
        self.pos += 1;
        self.offset_tail(14)?;
      },
      Some(b'-') => {
        self.pos += 1;
        self.offset_tail(12)?;
      },
      _ => return Ok(None),
    }
    Ok(Some(&self.src[start..self.pos]))
  }

  /// The hour and optional minute of a signed offset. Real-world offsets only come in
  /// quarter-hour steps, and the extreme hour in each direction (+14, -12) never pairs with a
  /// nonzero minute.
  fn offset_tail(&mut self, extreme: u8) -> Scan<()> {
    let start = self.pos;
    let hours = self.digits(2)? as u8;
    if hours > extreme {
      return Err(start);
    }
    if self.eat(b':') {
      let minutes_at = self.pos;
      let minutes = self.digits(2)? as u8;
      let allowed = match hours == extreme {
        true => minutes == 0,
        false => matches!(minutes, 0 | 15 | 30 | 45),
      };
      if !allowed {
        return Err(minutes_at);
      }
    }
    Ok(())
  }

  /// Fail unless the whole input was consumed; partial matches never count.
  fn assert_consumed(&self) -> Scan<()> {
    match self.pos == self.src.len() {
      true => Ok(()),
      false => Err(self.pos),
    }
  }
}
