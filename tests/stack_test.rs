mod common;
use calc::mach::{Event, Runtime};
use common::*;

#[test]
fn test_sum_of_two() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "3;4;+"), Event::Ready);
    assert_eq!(stack(&r), [7.0]);
}

#[test]
fn test_index_from_both_ends() {
    let mut r = Runtime::default();
    exec(&mut r, "10;20;30");
    exec(&mut r, "[-1]");
    assert_eq!(stack(&r), [10.0, 20.0, 30.0, 30.0]);
    exec(&mut r, "[0]");
    assert_eq!(stack(&r), [10.0, 20.0, 30.0, 30.0, 10.0]);
}

#[test]
fn test_roll_and_swap() {
    let mut r = Runtime::default();
    exec(&mut r, "1;2;3;\\roll");
    assert_eq!(stack(&r), [2.0, 3.0, 1.0]);
    let mut r = Runtime::default();
    exec(&mut r, "1;2;3;\\swap");
    assert_eq!(stack(&r), [1.0, 3.0, 2.0]);
}

#[test]
fn test_drop_duplicate_clear() {
    let mut r = Runtime::default();
    exec(&mut r, "1;2;\\drop;!!");
    assert_eq!(stack(&r), [1.0, 1.0]);
    exec(&mut r, "clear");
    assert!(stack(&r).is_empty());
    assert_eq!(exec(&mut r, "\\clear"), Event::Ready);
}

#[test]
fn test_reciprocal() {
    let mut r = Runtime::default();
    exec(&mut r, "4;1/");
    assert_eq!(stack(&r), [0.25]);
}

#[test]
fn test_whitespace_is_deleted() {
    let mut r = Runtime::default();
    exec(&mut r, " 1 2 ; 3 ");
    assert_eq!(stack(&r), [12.0, 3.0]);
}

#[test]
fn test_display() {
    let mut r = Runtime::default();
    exec(&mut r, "1;2.5;-3;1e21");
    assert_eq!(r.stack().to_string(), "1 2.5 -3 1000000000000000000000");
}

#[test]
fn test_underflow_leaves_stack() {
    let mut r = Runtime::default();
    assert!(is_error(&exec(&mut r, "+")));
    assert!(stack(&r).is_empty());
    assert!(r.aliases().is_empty());
    exec(&mut r, "5");
    for cmd in &["-", "\\pow", "\\swap", "\\roll"] {
        assert!(is_error(&exec(&mut r, cmd)), "{}", cmd);
        assert_eq!(stack(&r), [5.0]);
    }
}
