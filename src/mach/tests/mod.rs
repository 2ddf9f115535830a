use crate::mach::{Event, Runtime, MAX_DEPTH};


fn run(runtime: &mut Runtime, lines: &[&str]) -> Event {
    let mut event = Event::Ready;
    for line in lines {
        event = runtime.enter(line);
    }
    event
}

fn stack(runtime: &Runtime) -> Vec<f64> {
    runtime.stack().iter().cloned().collect()
}
