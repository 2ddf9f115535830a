use super::ast::*;
use super::line::SEPARATOR;
use super::paren::parenthetical;
use super::{number, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

const ASSIGN: char = '=';
const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Classifies a normalized, non-empty line.
///
/// Alias references are not recognized here since they depend on the
/// alias table.
pub fn parse(s: &str) -> Result<Statement<'_>> {
    let sep = s.find(SEPARATOR);
    let eq = s.find(ASSIGN);
    match (sep, eq) {
        (Some(sep), Some(eq)) if eq < sep => return assignment(&s[..eq], &s[eq + 1..]),
        (Some(sep), _) => return Ok(Statement::Sequence(&s[..sep], &s[sep + 1..])),
        (None, Some(eq)) => return assignment(&s[..eq], &s[eq + 1..]),
        (None, None) => {}
    }
    if let Some(statement) = arithmetic(s) {
        return Ok(statement);
    }
    if s.len() >= 2 && s.starts_with('[') && s.ends_with(']') {
        return Ok(Statement::Index(&s[1..s.len() - 1]));
    }
    if let Some(val) = number::parse(s) {
        return Ok(Statement::Number(val));
    }
    Ok(Statement::Word(s))
}

fn assignment<'a>(name: &'a str, value: &'a str) -> Result<Statement<'a>> {
    if name.is_empty() {
        return Err(error!(SyntaxError; "MISSING ALIAS NAME"));
    }
    let assignment = if value.is_empty() {
        Assignment::Delete
    } else if value.starts_with('(') {
        let (body, rest) = grouping(value, '(', ')')?;
        if body.is_empty() {
            Assignment::Delete
        } else {
            Assignment::Grouped(body, rest)
        }
    } else if value.starts_with('{') {
        let (body, rest) = grouping(value, '{', '}')?;
        Assignment::Constant(body, rest)
    } else {
        Assignment::Literal(value)
    };
    Ok(Statement::Assign(name, assignment))
}

fn grouping(value: &str, open: char, close: char) -> Result<(&str, Option<&str>)> {
    let (body, rest) = match parenthetical(value, open, close) {
        Some(split) => split,
        None => return Err(error!(SyntaxError; "UNBALANCED GROUPING")),
    };
    if rest.is_empty() {
        Ok((body, None))
    } else if let Some(rest) = rest.strip_prefix(SEPARATOR) {
        Ok((body, Some(rest)))
    } else {
        Err(error!(SyntaxError; "EXPECTED SEPARATOR AFTER GROUPING"))
    }
}

fn arithmetic(s: &str) -> Option<Statement<'_>> {
    let (lhs, len) = number::scan(s)?;
    if len + 2 > s.len() {
        return None;
    }
    let op = s[len..].chars().next()?;
    if !OPERATORS.contains(&op) {
        return None;
    }
    let rhs = number::parse(&s[len + 1..])?;
    Some(Statement::Arithmetic(lhs, &s[len..len + 1], rhs))
}
