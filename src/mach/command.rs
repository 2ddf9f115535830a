use super::{Function, Operation};
use crate::lang::ESCAPE;
use std::collections::HashMap;

thread_local!(
    static WORD_TO_COMMAND: HashMap<String, Command> = Command::table()
        .drain(..)
        .collect();
);

/// Named stack commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Exit,
    Binary(Operation),
    Reciprocal,
    Clear,
    Swap,
    Roll,
    Drop,
    Duplicate,
    Aliases,
    Unary(Function),
}

impl Command {
    pub fn from_word(word: &str) -> Option<Command> {
        WORD_TO_COMMAND.with(|wtc| wtc.get(word).copied())
    }

    /// Every command word, sorted.
    pub fn words() -> Vec<String> {
        let mut words: Vec<String> = Command::table().drain(..).map(|(w, _)| w).collect();
        words.sort();
        words
    }

    fn table() -> Vec<(String, Command)> {
        let escaped = |name: &str| format!("{}{}", ESCAPE, name);
        let mut table = vec![
            (escaped("exit"), Command::Exit),
            ("+".to_string(), Command::Binary(Operation::Sum)),
            ("-".to_string(), Command::Binary(Operation::Subtract)),
            ("*".to_string(), Command::Binary(Operation::Multiply)),
            ("/".to_string(), Command::Binary(Operation::Divide)),
            (escaped("pow"), Command::Binary(Operation::Power)),
            ("1/".to_string(), Command::Reciprocal),
            (escaped("clear"), Command::Clear),
            (escaped("swap"), Command::Swap),
            (escaped("roll"), Command::Roll),
            (escaped("drop"), Command::Drop),
            ("!!".to_string(), Command::Duplicate),
            (escaped("aliases"), Command::Aliases),
        ];
        table.extend(
            Function::CATALOGUE
                .iter()
                .map(|f| (escaped(f.name()), Command::Unary(*f))),
        );
        table
    }
}
