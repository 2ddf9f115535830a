/// Splits a string that opens with `open` at its matching `close`.
///
/// Nested pairs of the same delimiters are skipped over. On success returns
/// the text strictly inside the outermost pair and the text following the
/// matching `close`. Returns `None` when `s` does not start with `open` or
/// the delimiters never balance.
pub fn parenthetical(s: &str, open: char, close: char) -> Option<(&str, &str)> {
    if !s.starts_with(open) {
        return None;
    }
    let mut depth = 0usize;
    for (index, ch) in s.char_indices() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                let inner = &s[open.len_utf8()..index];
                let rest = &s[index + close.len_utf8()..];
                return Some((inner, rest));
            }
        }
    }
    None
}
