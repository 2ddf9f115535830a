use super::{Aliases, Command, Operation, Stack};
use crate::error;
use crate::lang::ast::{Assignment, Statement};
use crate::lang::{parse, Continuation, Error, ErrorCode, Line, ESCAPE};
use log::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Nesting allowed for alias expansion and sub-expressions. Statements
/// joined by `;` run at the depth of their line.
pub const MAX_DEPTH: usize = 256;

/// ## Result of entering one line

#[derive(Debug, PartialEq)]
pub enum Event {
    Ready,
    Incomplete,
    Exit,
    Error(Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// Errors raised by the line being evaluated are `Here` and may be retried
/// as an escaped command. Errors passed up from a sub-evaluation are not.
enum Fault {
    Here(Error),
    Nested(Error),
}

/// A statement either finishes the line or leaves the rest of it to run
/// at the same depth.
enum Next<'a> {
    Done(Flow),
    Rest(&'a str),
}

impl<'a> Next<'a> {
    fn remainder(rest: Option<&'a str>) -> Next<'a> {
        match rest {
            Some(rest) => Next::Rest(rest),
            None => Next::Done(Flow::Continue),
        }
    }
}

type Step<'a> = std::result::Result<Next<'a>, Fault>;

/// ## Calculator session
///
/// Owns the operand stack, the alias table and the continuation slot.

#[derive(Debug, Default)]
pub struct Runtime {
    stack: Stack<f64>,
    aliases: Aliases,
    continuation: Continuation,
    output: String,
}

impl Runtime {
    /// Enters one line of user input.
    pub fn enter(&mut self, line: &str) -> Event {
        let line = match self.continuation.join(line) {
            Line::Empty => return Event::Ready,
            Line::Incomplete => return Event::Incomplete,
            Line::Complete(line) => line,
        };
        trace!("enter {:?}", line);
        match self.eval(&line, 0) {
            Ok(Flow::Continue) => Event::Ready,
            Ok(Flow::Exit) => Event::Exit,
            Err(error) => {
                debug!("{:?} failed: {}", line, error);
                Event::Error(error)
            }
        }
    }

    /// Discards a pending continuation.
    pub fn interrupt(&mut self) {
        self.continuation.clear();
    }

    pub fn is_incomplete(&self) -> bool {
        self.continuation.is_pending()
    }

    pub fn stack(&self) -> &Stack<f64> {
        &self.stack
    }

    pub fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name)
    }

    /// Takes the text printed by commands since the last call.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    fn eval(&mut self, s: &str, depth: usize) -> Result<Flow> {
        if depth > MAX_DEPTH {
            return Err(error!(RecursionLimit));
        }
        let mut line = s;
        loop {
            if line.is_empty() {
                return Ok(Flow::Continue);
            }
            match self.statement(line, depth) {
                Ok(Next::Rest(rest)) => line = rest,
                Ok(Next::Done(flow)) => return Ok(flow),
                Err(Fault::Nested(error)) => return Err(error),
                Err(Fault::Here(error)) => return self.retry(line, error, depth),
            }
        }
    }

    /// Tries `s` once more as an escaped command.
    ///
    /// When the escaped form is not a command either, the first error stands.
    fn retry(&mut self, s: &str, error: Error, depth: usize) -> Result<Flow> {
        if !error.is_retryable() || s.starts_with(ESCAPE) {
            return Err(error);
        }
        debug!("{:?} failed: {}; retrying as a command", s, error);
        match self.eval(&format!("{}{}", ESCAPE, s), depth) {
            Err(retried) if retried.code() == ErrorCode::UnknownToken => Err(error),
            other => other,
        }
    }

    fn nested(&mut self, s: &str, depth: usize) -> std::result::Result<Flow, Fault> {
        self.eval(s, depth + 1).map_err(Fault::Nested)
    }

    fn statement<'a>(&mut self, s: &'a str, depth: usize) -> Step<'a> {
        if let Some(body) = self.aliases.get(s) {
            let body = body.to_string();
            trace!("alias {} -> {:?}", s, body);
            return self.nested(&body, depth).map(Next::Done);
        }
        match parse(s).map_err(Fault::Here)? {
            Statement::Sequence(first, rest) => {
                if self.eval(first, depth).map_err(Fault::Nested)? == Flow::Exit {
                    return Ok(Next::Done(Flow::Exit));
                }
                Ok(Next::Rest(rest))
            }
            Statement::Assign(name, assignment) => self.assign(name, assignment, depth),
            Statement::Arithmetic(lhs, op, rhs) => {
                self.stack.push(lhs);
                self.stack.push(rhs);
                self.nested(op, depth).map(Next::Done)
            }
            Statement::Index(expr) => {
                if self.nested(expr, depth)? == Flow::Exit {
                    return Ok(Next::Done(Flow::Exit));
                }
                self.index().map_err(Fault::Here)?;
                Ok(Next::Done(Flow::Continue))
            }
            Statement::Number(val) => {
                self.stack.push(val);
                Ok(Next::Done(Flow::Continue))
            }
            Statement::Word(word) => match Command::from_word(word) {
                Some(command) => self.command(command).map(Next::Done).map_err(Fault::Here),
                None => Err(Fault::Here(error!(UnknownToken))),
            },
        }
    }

    fn assign<'a>(&mut self, name: &str, assignment: Assignment<'a>, depth: usize) -> Step<'a> {
        match assignment {
            Assignment::Delete => {
                self.aliases.remove(name);
                Ok(Next::Done(Flow::Continue))
            }
            Assignment::Literal(body) => {
                self.aliases.insert(name, body);
                Ok(Next::Done(Flow::Continue))
            }
            Assignment::Grouped(body, rest) => {
                self.aliases.insert(name, body);
                Ok(Next::remainder(rest))
            }
            Assignment::Constant(body, rest) => {
                if self.nested(body, depth)? == Flow::Exit {
                    return Ok(Next::Done(Flow::Exit));
                }
                let val = self.stack.pop().map_err(Fault::Here)?;
                debug!("alias {} frozen at {}", name, val);
                self.aliases.insert(name, &val.to_string());
                Ok(Next::remainder(rest))
            }
        }
    }

    fn index(&mut self) -> Result<()> {
        let index = self.stack.pop()?;
        if !index.is_finite() {
            return Err(error!(IndexOutOfRange));
        }
        self.stack.pick(index.round() as i64)
    }

    fn command(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Binary(op) => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(op.apply(lhs, rhs));
            }
            Command::Reciprocal => {
                let val = self.stack.pop()?;
                self.stack.push(Operation::reciprocal(val));
            }
            Command::Clear => self.stack.clear(),
            Command::Swap => self.stack.swap()?,
            Command::Roll => self.stack.roll()?,
            Command::Drop => {
                self.stack.pop()?;
            }
            Command::Duplicate => self.stack.duplicate()?,
            Command::Aliases => {
                let listing = self.aliases.listing();
                self.output.push_str(&listing);
            }
            Command::Unary(function) => {
                let val = self.stack.pop()?;
                self.stack.push(function.call(val));
            }
        }
        Ok(Flow::Continue)
    }
}
