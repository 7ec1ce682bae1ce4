mod common;
use common::*;

#[test]
fn test_empty_program() {
    let mut e = load("");
    assert_eq!(exec(&mut e), "EMPTY PROGRAM\n");
    let mut e = load("   \n\t  \n");
    assert_eq!(exec(&mut e), "EMPTY PROGRAM\n");
}

#[test]
fn test_unsupported_instruction() {
    let mut e = load("HOP");
    assert_eq!(exec(&mut e), "UNSUPPORTED INSTRUCTION AT 1; HOP\n");

    let mut e = load("SHOVE 1 HOP");
    assert_eq!(exec(&mut e), "UNSUPPORTED INSTRUCTION AT 3; HOP\n");
}

#[test]
fn test_unrecognized_token() {
    let mut e = load("SHOVE 1 bogus");
    assert_eq!(exec(&mut e), "UNRECOGNIZED TOKEN AT 3; bogus\n");
}

#[test]
fn test_stray_literal_is_unrecognized() {
    let mut e = load("SHOVE 1 2 GLUE");
    assert_eq!(exec(&mut e), "UNRECOGNIZED TOKEN AT 3; 2\n");
}

#[test]
fn test_missing_operand() {
    let mut e = load("SHOVE");
    assert_eq!(exec(&mut e), "MISSING OPERAND AT 1; SHOVE\n");

    let mut e = load("SHOVE 1 YELL");
    assert_eq!(exec(&mut e), "MISSING OPERAND AT 3; YELL\n");
}

#[test]
fn test_type_mismatch() {
    let mut e = load("SHOVE abc");
    assert_eq!(exec(&mut e), "TYPE MISMATCH AT 2; abc\n");

    let mut e = load("SHOVE #x");
    assert_eq!(exec(&mut e), "TYPE MISMATCH AT 2; #x\n");
}

#[test]
fn test_type_mismatch_on_overflow_digits() {
    let mut e = load("SHOVE 99999999999999999999");
    assert_eq!(exec(&mut e), "TYPE MISMATCH AT 2; 99999999999999999999\n");
}

#[test]
fn test_stack_underflow() {
    let mut e = load("YEET");
    assert_eq!(exec(&mut e), "STACK UNDERFLOW AT 1; YEET\n");

    let mut e = load("YEET 1");
    assert_eq!(exec(&mut e), "STACK UNDERFLOW AT 1; YEET\n");
}

#[test]
fn test_underflow_consumes_remaining_operand() {
    let mut e = load("SHOVE 1 YEET");
    assert_eq!(exec(&mut e), "STACK UNDERFLOW AT 3; YEET\n");
    assert!(e.stack().is_empty());
}

#[test]
fn test_divide_by_zero() {
    let mut e = load("SHOVE 0 SHOVE 10 SNIP");
    assert_eq!(exec(&mut e), "DIVIDE BY ZERO AT 5; SNIP\n");
}

#[test]
fn test_yell_prints_any_token() {
    let mut e = load("YELL ^aaaf");
    assert_eq!(exec(&mut e), "^aaaf\n");

    let mut e = load("YELL 3");
    assert_eq!(exec(&mut e), "3\n");

    let mut e = load("YELL #x");
    assert_eq!(exec(&mut e), "#x\n");
}

#[test]
fn test_yell_strips_quotes() {
    let mut e = load("YELL \"two words\"");
    assert_eq!(exec(&mut e), "two words\n");
}

#[test]
fn test_yell_keeps_interior_quotes() {
    let mut e = load("YELL \"say \"hi\" now\"");
    assert_eq!(exec(&mut e), "say \"hi\" now\n");

    let mut e = load("YELL a\"b");
    assert_eq!(exec(&mut e), "a\"b\n");
}

#[test]
fn test_freeze_stops_before_trouble() {
    let mut e = load("SHOVE 2 FREEZE HOP ???");
    assert_eq!(exec(&mut e), "");
    assert_eq!(e.stack(), [2]);
}

#[test]
fn test_error_is_terminal() {
    let mut e = load("HOP YELL never");
    assert_eq!(exec(&mut e), "UNSUPPORTED INSTRUCTION AT 1; HOP\n");
    assert_eq!(exec(&mut e), "");
}
