use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Errors occurring during parsing.
#[derive(Debug)]
pub struct ParseError {
  /// An owned copy of the input string.
  pub src: String,
  /// The byte index in the input string where it first stopped matching the grammar.
  pub index: Option<usize>,
  /// A machine-readable explanation of the error.
  pub kind: ErrorKind,
}

impl ParseError {
  pub(crate) fn new(src: &str, kind: ErrorKind) -> Self {
    Self { src: src.into(), index: None, kind }
  }

  pub(crate) fn at_index(mut self, ix: usize) -> Self {
    self.index = Some(ix);
    self
  }
}

impl Display for ParseError {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(
      f,
      "{}\n{}\n{}",
      self.src,
      match self.index {
        Some(ix) => format!("{}^-----", " ".repeat(ix)),
        None => String::new(),
      },
      self.kind
    )
  }
}

impl Error for ParseError {}

/// The ways an input can fail to parse, one per grammar.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
  /// The input did not fully match the calendar date grammar.
  InvalidDate,
  /// The input did not fully match the date and time grammar.
  InvalidDateTime,
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}", match self {
      Self::InvalidDate => "Invalid date string given to parse",
      Self::InvalidDateTime => "Invalid date and time string given to parse",
    })
  }
}
