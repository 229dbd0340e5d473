use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum NumeralError {
  Empty,
  AmbiguousLeadingZero,
  MisplacedUnderscore,
  InvalidDigit { digit: char, radix: u32 },
  Negative,
  OutOfRange,
}

impl std::error::Error for NumeralError {}

impl Display for NumeralError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      NumeralError::Empty => write!(f, "no digits"),
      NumeralError::AmbiguousLeadingZero => write!(
        f,
        "a nonzero number may not start with the digit 0 unless prefixed with 0x, 0b or 0o"
      ),
      NumeralError::MisplacedUnderscore => write!(f, "underscores may only separate digits"),
      NumeralError::InvalidDigit { digit, radix } => write!(f, "'{}' is not a base {} digit", digit, radix),
      NumeralError::Negative => write!(f, "value may not be negative"),
      NumeralError::OutOfRange => write!(f, "value is out of range"),
    }
  }
}

fn split_radix(digits: &str) -> (u32, &str) {
  let prefix = digits.get(..2).map(|p| p.to_ascii_lowercase());
  match prefix.as_deref() {
    Some("0x") => (16, &digits[2..]),
    Some("0o") => (8, &digits[2..]),
    Some("0b") => (2, &digits[2..]),
    _ => (10, digits),
  }
}

/// Parses an integer written in decimal, or in hex, octal or binary when
/// prefixed with `0x`, `0o` or `0b`.
///
/// Surrounding whitespace, a leading sign and single underscores between
/// digits are accepted. An unprefixed number that starts with `0` must be
/// all zeros, so `010` is rejected.
pub fn parse_integer(text: &str) -> Result<i64, NumeralError> {
  let text = text.trim();
  let (negative, unsigned) = match text.as_bytes().first() {
    Some(b'-') => (true, &text[1..]),
    Some(b'+') => (false, &text[1..]),
    _ => (false, text),
  };

  let (radix, mut body) = split_radix(unsigned);
  if radix != 10 {
    // a single underscore may follow the prefix: 0x_ff
    body = body.strip_prefix('_').unwrap_or(body);
  }
  if body.is_empty() {
    return Err(NumeralError::Empty);
  }
  if body.starts_with('_') || body.ends_with('_') || body.contains("__") {
    return Err(NumeralError::MisplacedUnderscore);
  }

  let digits: String = body.chars().filter(|c| *c != '_').collect();
  if let Some(digit) = digits.chars().find(|c| !c.is_digit(radix)) {
    return Err(NumeralError::InvalidDigit { digit, radix });
  }
  if radix == 10 && digits.starts_with('0') && digits.chars().any(|c| c != '0') {
    return Err(NumeralError::AmbiguousLeadingZero);
  }

  let magnitude = u64::from_str_radix(&digits, radix).map_err(|_| NumeralError::OutOfRange)?;
  if negative {
    0i64.checked_sub_unsigned(magnitude).ok_or(NumeralError::OutOfRange)
  } else {
    i64::try_from(magnitude).map_err(|_| NumeralError::OutOfRange)
  }
}

/// clap value parser for byte offsets.
pub fn parse_offset(text: &str) -> Result<u64, NumeralError> {
  let value = parse_integer(text)?;
  u64::try_from(value).map_err(|_| NumeralError::Negative)
}

/// clap value parser for lengths; any negative value means "to end of file".
pub fn parse_length(text: &str) -> Result<i64, NumeralError> {
  parse_integer(text)
}
