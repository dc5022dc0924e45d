#![no_main]
use libfuzzer_sys::fuzz_target;

use iso8601_strict::is_valid_date;
use iso8601_strict::is_valid_date_time;
use iso8601_strict::parse_date;
use iso8601_strict::parse_date_time;

fuzz_target!(|data: &[u8]| {
  if let Ok(text) = std::str::from_utf8(data) {
    // The validators and the parsers must agree on every input, and none of them may panic.
    assert_eq!(is_valid_date(text), parse_date(text).is_ok());
    assert_eq!(is_valid_date_time(text), parse_date_time(text).is_ok());
  }
});
