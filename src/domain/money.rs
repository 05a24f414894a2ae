use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a plain decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Format the magnitude of `cents` with thousands separators.
/// Example: 123456789 -> "1,234,567.89". The sign is dropped.
pub fn format_grouped(cents: Cents) -> String {
    let abs_cents = cents.unsigned_abs();
    let units = (abs_cents / 100).to_string();

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}.{:02}", grouped, abs_cents % 100)
}

/// Format cents with an explicit leading sign, as shown in budget totals.
/// Example: 100000 -> "+ 1,000.00", -5000 -> "- 50.00", 0 -> "0.00"
pub fn format_signed(cents: Cents) -> String {
    match cents.signum() {
        1 => format!("+ {}", format_grouped(cents)),
        -1 => format!("- {}", format_grouped(cents)),
        _ => format_grouped(cents),
    }
}

/// Parse a decimal string into cents, rounding to two fractional digits
/// (half away from zero).
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000, "0.125" -> 13
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseCentsError::Empty);
    }

    let (negative, digits) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    let (units_str, fraction_str) = match digits.split_once('.') {
        Some((units, fraction)) => (units, fraction),
        None => (digits, ""),
    };

    if units_str.is_empty() && fraction_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(units_str) || !all_digits(fraction_str) {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::OutOfRange)?
    };

    // First two fractional digits are cents, the third decides rounding
    let mut fraction = fraction_str.bytes().map(|b| i64::from(b - b'0'));
    let tenths = fraction.next().unwrap_or(0);
    let hundredths = fraction.next().unwrap_or(0);
    let round_up = fraction.next().is_some_and(|d| d >= 5);

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
        .ok_or(ParseCentsError::OutOfRange)?;

    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    Empty,
    InvalidFormat,
    OutOfRange,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::Empty => write!(f, "amount is empty"),
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::OutOfRange => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
