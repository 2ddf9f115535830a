/// One normalized line, classified.
#[derive(Debug, PartialEq)]
pub enum Statement<'a> {
    /// `first;rest`
    Sequence(&'a str, &'a str),
    /// `name=value`
    Assign(&'a str, Assignment<'a>),
    /// `2+3` pushes both numbers then runs the operator.
    Arithmetic(f64, &'a str, f64),
    /// `[expr]`
    Index(&'a str),
    Number(f64),
    /// Anything else, resolved against the command table.
    Word(&'a str),
}

/// Right-hand side of an alias assignment.
#[derive(Debug, PartialEq)]
pub enum Assignment<'a> {
    Delete,
    /// Stored verbatim.
    Literal(&'a str),
    /// `(body)` stored verbatim, optionally followed by `;rest`.
    Grouped(&'a str, Option<&'a str>),
    /// `{body}` evaluated now; the popped result is stored.
    Constant(&'a str, Option<&'a str>),
}
