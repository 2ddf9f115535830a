pub const ESCAPE: char = '\\';
pub const COMMENT: char = '#';
pub const CONTINUATION: char = '\\';
pub const SEPARATOR: char = ';';

/// A submitted line after preprocessing.
#[derive(Debug, PartialEq)]
pub enum Line {
    Empty,
    Incomplete,
    Complete(String),
}

/// Carries an unterminated line over to the next submission.
#[derive(Debug, Default)]
pub struct Continuation {
    pending: Option<String>,
}

impl Continuation {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Normalizes `raw` and joins it onto any pending fragment.
    ///
    /// A pending fragment is consumed exactly once. When the joined text
    /// ends in the continuation marker, the marker is dropped and the rest
    /// becomes the new pending fragment.
    pub fn join(&mut self, raw: &str) -> Line {
        let mut s = self.pending.take().unwrap_or_default();
        s.push_str(&normalize(raw));
        if s.is_empty() {
            return Line::Empty;
        }
        if s.ends_with(CONTINUATION) {
            s.pop();
            self.pending = Some(s);
            return Line::Incomplete;
        }
        Line::Complete(s)
    }
}

/// Strips a trailing comment and deletes every whitespace character.
///
/// `\#` stands for a literal `#` and does not begin a comment.
pub fn normalize(raw: &str) -> String {
    let mut s = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE && chars.peek() == Some(&COMMENT) {
            chars.next();
            s.push(COMMENT);
            continue;
        }
        if ch == COMMENT {
            break;
        }
        if !ch.is_whitespace() {
            s.push(ch);
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_removed() {
        assert_eq!(normalize(" 3 ;\t4 ; + \r\n"), "3;4;+");
        assert_eq!(normalize("1 2"), "12");
    }

    #[test]
    fn test_comment() {
        assert_eq!(normalize("3;4 # the answer"), "3;4");
        assert_eq!(normalize("# only a comment"), "");
        assert_eq!(normalize("a=(\\#)#x"), "a=(#)");
    }

    #[test]
    fn test_empty_line() {
        let mut c = Continuation::default();
        assert_eq!(c.join("   # nothing"), Line::Empty);
        assert!(!c.is_pending());
    }

    #[test]
    fn test_continuation_joins_once() {
        let mut c = Continuation::default();
        assert_eq!(c.join("1; \\  # more below"), Line::Incomplete);
        assert!(c.is_pending());
        assert_eq!(c.join("2"), Line::Complete("1;2".to_string()));
        assert!(!c.is_pending());
        assert_eq!(c.join("3"), Line::Complete("3".to_string()));
    }

    #[test]
    fn test_continuation_chain() {
        let mut c = Continuation::default();
        assert_eq!(c.join("1;\\"), Line::Incomplete);
        assert_eq!(c.join("2;\\"), Line::Incomplete);
        assert_eq!(c.join(""), Line::Complete("1;2;".to_string()));
    }

    #[test]
    fn test_clear() {
        let mut c = Continuation::default();
        assert_eq!(c.join("1;\\"), Line::Incomplete);
        c.clear();
        assert_eq!(c.join("2"), Line::Complete("2".to_string()));
    }
}
