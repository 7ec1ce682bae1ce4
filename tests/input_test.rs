mod common;
use common::*;

#[test]
fn test_snoop_pushes_input() {
    let mut e = load("SNOOP YELL polo");
    assert_eq!(exec(&mut e), "");
    e.enter("42");
    assert_eq!(exec(&mut e), "polo\n");
    assert_eq!(e.stack(), [42]);
}

#[test]
fn test_snoop_accepts_negative() {
    let mut e = load("SNOOP");
    exec(&mut e);
    e.enter("-7");
    assert_eq!(exec(&mut e), "");
    assert_eq!(e.stack(), [-7]);
}

#[test]
fn test_snoop_ignores_line_terminator() {
    let mut e = load("SNOOP");
    exec(&mut e);
    e.enter("42\n");
    assert_eq!(exec(&mut e), "");
    assert_eq!(e.stack(), [42]);

    let mut e = load("SNOOP");
    exec(&mut e);
    e.enter("7\r\n");
    exec(&mut e);
    assert_eq!(e.stack(), [7]);
}

#[test]
fn test_snoop_rejects_padded_input() {
    let mut e = load("SNOOP");
    exec(&mut e);
    e.enter(" 12");
    assert_eq!(exec(&mut e), "INVALID INPUT AT 1;  12\n");
    assert!(e.stack().is_empty());
}

#[test]
fn test_snoop_rejects_non_integer() {
    let mut e = load("SNOOP YELL never");
    exec(&mut e);
    e.enter("seven");
    assert_eq!(exec(&mut e), "INVALID INPUT AT 1; seven\n");
}

#[test]
fn test_snoop_rejects_empty_line() {
    let mut e = load("SNOOP");
    exec(&mut e);
    e.enter("");
    assert_eq!(exec(&mut e), "INVALID INPUT AT 1\n");
}

#[test]
fn test_snoop_twice() {
    let mut e = load("SNOOP SNOOP GLUE");
    exec(&mut e);
    e.enter("2");
    exec(&mut e);
    e.enter("3");
    assert_eq!(exec(&mut e), "");
    assert_eq!(e.stack(), [5]);
}

#[test]
fn test_snoop_feeds_arithmetic() {
    let mut e = load("SNOOP YEET 1 YELL ok");
    exec(&mut e);
    e.enter("10");
    assert_eq!(exec(&mut e), "ok\n");
    assert_eq!(e.stack(), [9]);
}
