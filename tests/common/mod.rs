#![allow(dead_code)]
use calc::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime, line: &str) -> Event {
    runtime.enter(line)
}

pub fn exec_all(runtime: &mut Runtime, lines: &[&str]) -> Vec<Event> {
    lines.iter().map(|line| runtime.enter(line)).collect()
}

pub fn stack(runtime: &Runtime) -> Vec<f64> {
    runtime.stack().iter().cloned().collect()
}

pub fn is_error(event: &Event) -> bool {
    matches!(event, Event::Error(_))
}
