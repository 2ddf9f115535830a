extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::ESCAPE;
use crate::mach::{Command, Event, Runtime};
use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod config;

pub use config::{config_dir, feed, load, Startup, CONFIG_FILE_NAME};

const PROMPT: &str = "> ";
const CONTINUATION_PROMPT: &str = ". ";

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("Error setting Ctrl-C handler: {}", error);
    }
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let interface = Interface::new("calc")?;
    interface.set_report_signal(Signal::Interrupt, true);

    match config_dir() {
        Some(dir) => {
            let startup = load(&mut runtime, &dir.join(CONFIG_FILE_NAME), &interrupted);
            interface.write_fmt(format_args!("{}", runtime.take_output()))?;
            match startup {
                Startup::Done | Startup::Interrupted => {}
                Startup::Aborted(line, error) => {
                    debug!("config line {}: {}", line, error);
                    interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new()
                            .bold()
                            .paint("Error in config file! File execution aborted!")
                    ))?;
                }
                Startup::Exit => {
                    interface.write_fmt(format_args!("Config file requested exit.\n"))?;
                    return Ok(());
                }
            }
        }
        None => eprintln!("Could not find config directory! Config file will not be loaded!"),
    }

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        if runtime.is_incomplete() {
            interface.set_prompt(CONTINUATION_PROMPT)?;
        } else {
            if !runtime.stack().is_empty() {
                interface.write_fmt(format_args!("{}\n", runtime.stack()))?;
            }
            interface.set_prompt(PROMPT)?;
        }
        interface.set_completer(Arc::new(WordCompleter::new(&runtime)));
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                runtime.interrupt();
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if !line.trim().is_empty() {
            interface.add_history_unique(line.clone());
        }
        let event = runtime.enter(&line);
        interface.write_fmt(format_args!("{}", runtime.take_output()))?;
        match event {
            Event::Ready | Event::Incomplete => {}
            Event::Exit => break,
            Event::Error(error) => {
                debug!("{}", error);
                interface.write_fmt(format_args!("{}\n", Style::new().bold().paint("ERR!")))?;
            }
        }
    }
    Ok(())
}

/// Completes command names and alias names.
struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    fn new(runtime: &Runtime) -> WordCompleter {
        let mut words: Vec<String> = Command::words()
            .drain(..)
            .map(|w| w.trim_start_matches(ESCAPE).to_string())
            .filter(|w| w.chars().all(char::is_alphanumeric))
            .collect();
        words.extend(runtime.aliases().iter().map(|(name, _)| name.clone()));
        WordCompleter { words }
    }
}

impl<Term: Terminal> Completer<Term> for WordCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if word.is_empty() {
            return None;
        }
        let comp_list: Vec<Completion> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Completion::simple(w.clone()))
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}
