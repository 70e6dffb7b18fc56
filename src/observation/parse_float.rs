/// Parses the longest leading float literal of `value`, browser-style.
///
/// Leading whitespace is skipped and trailing garbage is ignored:
/// `" 1.5abc"` is `1.5`. `Infinity` is accepted with an optional sign.
/// Anything without a numeric prefix, including an empty string, is `NaN`.
pub fn parse_float(value: &str) -> f64 {
    let value = value.trim_start_matches(is_js_whitespace);
    let (sign, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (-1.0, &value[1..]),
        Some(b'+') => (1.0, &value[1..]),
        _ => (1.0, value),
    };
    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }
    match decimal_prefix(unsigned) {
        Some(literal) => literal.parse::<f64>().map_or(f64::NAN, |value| sign * value),
        None => f64::NAN,
    }
}

/// White space and line terminators as browsers define them: `Zs`, the ASCII
/// controls, the line and paragraph separators and the byte order mark.
/// Unlike [`char::is_whitespace`], `U+0085` and `U+001C..=U+001F` are not included.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Returns the longest prefix matching `digits [. digits] [e [sign] digits]`,
/// normalised so that the standard parser accepts it.
fn decimal_prefix(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let n_integer_digits = count_digits(0);
    let mut end = n_integer_digits;
    let mut n_fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        n_fraction_digits = count_digits(end + 1);
        end += 1 + n_fraction_digits;
    }
    if n_integer_digits == 0 && n_fraction_digits == 0 {
        return None;
    }
    let mantissa_end = end;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let n_exponent_digits = count_digits(exponent_start);
        if n_exponent_digits != 0 {
            end = exponent_start + n_exponent_digits;
        }
    }

    // `1.` and `.5` are valid here but not for every parser.
    let mantissa = value[..mantissa_end].trim_end_matches('.');
    let mut literal = String::with_capacity(end + 1);
    if mantissa.starts_with('.') {
        literal.push('0');
    }
    literal.push_str(mantissa);
    literal.push_str(&value[mantissa_end..end]);
    Some(literal)
}
