/// Separator inserted between groups of three integer digits.
pub const GROUP_SEPARATOR: char = ' ';
/// Separator between the integer and fractional part of a displayed price.
pub const DECIMAL_SEPARATOR: char = ',';

/// Normalize a raw price attribute. Missing or blank prices become `"0"`.
pub fn normalize_price(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(price) if !price.is_empty() => price.to_string(),
        _ => "0".to_string(),
    }
}

/// A plain decimal number split into its digit runs. Leading integer zeros
/// and trailing fractional zeros are stripped.
struct Decimal<'a> {
    negative: bool,
    int_part: &'a str,
    frac_part: &'a str,
}

impl Decimal<'_> {
    fn is_zero(&self) -> bool {
        self.int_part == "0" && self.frac_part.is_empty()
    }
}

/// Parse `[-]digits[(.|,)digits]`. Either `.` or `,` separates the fraction.
fn parse_decimal(price: &str) -> Option<Decimal<'_>> {
    let trimmed = price.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (int_part, frac_part) = unsigned
        .split_once(|c: char| c == '.' || c == ',')
        .unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() || !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };
    Some(Decimal {
        negative,
        int_part,
        frac_part: frac_part.trim_end_matches('0'),
    })
}

/// True when the price is the zero sentinel: any decimal text with the
/// value zero (`"0"`, `"0.00"`, `"0,00"`, `"000"`).
pub fn is_zero_price(price: &str) -> bool {
    parse_decimal(price).is_some_and(|d| d.is_zero())
}

/// Format a decimal price for display with thousands grouping.
///
/// `"15000"` becomes `"15 000"` and `"1234.50"` becomes `"1 234,5"`.
/// Anything that is not a plain decimal number is returned verbatim.
pub fn format_price(price: &str) -> String {
    let Some(decimal) = parse_decimal(price) else {
        return price.to_string();
    };
    let decimal_is_zero = decimal.is_zero();
    let Decimal {
        negative,
        int_part,
        frac_part,
    } = decimal;

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    if negative && !decimal_is_zero {
        out.push('-');
    }
    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}
