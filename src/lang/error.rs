#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error { code, message: "" }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            message,
        }
    }

    /// Errors that may be answered by retrying the line as an escaped command.
    pub fn is_retryable(&self) -> bool {
        self.code != ErrorCode::RecursionLimit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    UnknownToken,
    Underflow,
    IndexOutOfRange,
    RecursionLimit,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::SyntaxError => "SYNTAX ERROR",
            ErrorCode::UnknownToken => "UNKNOWN TOKEN",
            ErrorCode::Underflow => "NOT ENOUGH ARGUMENTS",
            ErrorCode::IndexOutOfRange => "INDEX OUT OF RANGE",
            ErrorCode::RecursionLimit => "RECURSION LIMIT",
        };
        if self.message.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{}; {}", code_str, self.message)
        }
    }
}

impl std::error::Error for Error {}
