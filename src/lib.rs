//! # calc
//!
//! An interactive reverse Polish notation calculator with user aliases.
//!
//! Install with `cargo install calc-rpn`, then run `calc` in a terminal.
//! ```text
//! > 3;4;+
//! 7
//! > █
//! ```
//!
//! The library exposes the same interpreter for embedding.
//! ```
//! use calc::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! assert_eq!(runtime.enter("sq=(!!;*)"), Event::Ready);
//! assert_eq!(runtime.enter("12;sq"), Event::Ready);
//! assert_eq!(runtime.stack().to_string(), "144");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
pub mod term;
