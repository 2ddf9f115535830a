use crate::lang::Error;
use crate::mach::{Event, Runtime};
use directories::BaseDirs;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

pub const CONFIG_FILE_NAME: &str = ".calcrc";
const CONFIG_HEADER: &str = "# calc config\n";

/// How feeding the config file ended.
#[derive(Debug, PartialEq)]
pub enum Startup {
    Done,
    Aborted(usize, Error),
    Interrupted,
    Exit,
}

/// `$XDG_CONFIG_HOME`, or else the home directory.
pub fn config_dir() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()),
    }
}

/// Runs the config file, creating an empty one when missing.
pub fn load(runtime: &mut Runtime, path: &Path, interrupted: &AtomicBool) -> Startup {
    match File::open(path) {
        Ok(file) => {
            debug!("loading {}", path.display());
            feed(runtime, BufReader::new(file), interrupted)
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            if let Err(error) = create(path) {
                warn!("could not create {}: {}", path.display(), error);
            }
            Startup::Done
        }
        Err(error) => {
            warn!("could not read {}: {}", path.display(), error);
            Startup::Done
        }
    }
}

/// Enters every line of `reader` until an error or exit request.
pub fn feed<R: BufRead>(runtime: &mut Runtime, reader: R, interrupted: &AtomicBool) -> Startup {
    let mut startup = Startup::Done;
    for (index, line) in reader.lines().enumerate() {
        if interrupted.swap(false, Ordering::SeqCst) {
            startup = Startup::Interrupted;
            break;
        }
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                warn!("config line {} unreadable: {}", index + 1, error);
                break;
            }
        };
        match runtime.enter(&line) {
            Event::Error(error) => {
                startup = Startup::Aborted(index + 1, error);
                break;
            }
            Event::Exit => {
                startup = Startup::Exit;
                break;
            }
            Event::Ready | Event::Incomplete => {}
        }
    }
    runtime.interrupt();
    startup
}

fn create(path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(CONFIG_HEADER.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn feed_str(runtime: &mut Runtime, s: &str) -> Startup {
        feed(runtime, s.as_bytes(), &AtomicBool::new(false))
    }

    #[test]
    fn test_defines_aliases() {
        let mut r = Runtime::default();
        let startup = feed_str(&mut r, "# calc config\npi = 3.14159\nsq = (!! ; *)\n");
        assert_eq!(startup, Startup::Done);
        assert_eq!(r.alias("pi"), Some("3.14159"));
        assert_eq!(r.alias("sq"), Some("!!;*"));
        assert!(r.stack().is_empty());
    }

    #[test]
    fn test_error_aborts() {
        let mut r = Runtime::default();
        match feed_str(&mut r, "1\nbogus\n2\n") {
            Startup::Aborted(line, error) => {
                assert_eq!(line, 2);
                assert_eq!(error.code(), ErrorCode::UnknownToken);
            }
            other => panic!("{:?}", other),
        }
        assert_eq!(r.stack().len(), 1);
    }

    #[test]
    fn test_exit_request() {
        let mut r = Runtime::default();
        assert_eq!(feed_str(&mut r, "1\n\\exit\n2\n"), Startup::Exit);
        assert_eq!(r.stack().len(), 1);
    }

    #[test]
    fn test_continuation_across_lines() {
        let mut r = Runtime::default();
        assert_eq!(feed_str(&mut r, "1;\\\n2;+\n"), Startup::Done);
        assert_eq!(r.stack().iter().cloned().collect::<Vec<_>>(), [3.0]);
    }

    #[test]
    fn test_trailing_continuation_discarded() {
        let mut r = Runtime::default();
        assert_eq!(feed_str(&mut r, "1;\\\n"), Startup::Done);
        assert!(!r.is_incomplete());
        assert_eq!(r.enter("5"), Event::Ready);
        assert_eq!(r.stack().len(), 1);
    }

    #[test]
    fn test_interrupted() {
        let mut r = Runtime::default();
        let interrupted = AtomicBool::new(true);
        assert_eq!(feed(&mut r, "1\n".as_bytes(), &interrupted), Startup::Interrupted);
        assert!(r.stack().is_empty());
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = std::env::temp_dir().join(format!("calc-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        let _ = std::fs::remove_file(&path);
        let mut r = Runtime::default();
        assert_eq!(load(&mut r, &path, &AtomicBool::new(false)), Startup::Done);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CONFIG_HEADER);
        assert_eq!(load(&mut r, &path, &AtomicBool::new(false)), Startup::Done);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
