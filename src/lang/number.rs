//! Decimal real-number literals.

const NAMED: [&str; 3] = ["infinity", "inf", "nan"];

/// Scans the longest numeric literal at the start of `s`.
///
/// Returns the value and the number of bytes consumed, or `None` when
/// `s` does not begin with a literal.
pub fn scan(s: &str) -> Option<(f64, usize)> {
    let len = scan_len(s)?;
    let val = s[..len].parse::<f64>().ok()?;
    Some((val, len))
}

/// Parses `s` only when the whole string is one literal.
pub fn parse(s: &str) -> Option<f64> {
    match scan(s) {
        Some((val, len)) if len == s.len() => Some(val),
        _ => None,
    }
}

fn scan_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    if let Some(b'+') | Some(b'-') = bytes.first() {
        pos += 1;
    }

    let tail = &s[pos..];
    for name in NAMED.iter() {
        if let Some(head) = tail.get(..name.len()) {
            if head.eq_ignore_ascii_case(name) {
                return Some(pos + name.len());
            }
        }
    }

    let digits = count_digits(&bytes[pos..]);
    pos += digits;
    let mut fraction = 0;
    if bytes.get(pos) == Some(&b'.') {
        fraction = count_digits(&bytes[pos + 1..]);
        if digits == 0 && fraction == 0 {
            return None;
        }
        pos += 1 + fraction;
    }
    if digits == 0 && fraction == 0 {
        return None;
    }

    if let Some(b'e') | Some(b'E') = bytes.get(pos) {
        let mut exp = pos + 1;
        if let Some(b'+') | Some(b'-') = bytes.get(exp) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }
    Some(pos)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
