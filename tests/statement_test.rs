mod common;
use common::*;
use tinybasic::mach::Runtime;

#[test]
fn test_print_expressions() {
    let mut r = Runtime::default();
    r.enter("10 LET A = 0\n20 PRINT A+1,A+2,A+3\nRUN");
    assert_eq!(exec(&mut r), "1 2 3\n");
}

#[test]
fn test_end_stops_before_later_lines() {
    let mut r = Runtime::default();
    r.enter(
        r#"
        10 PRINT "HELLO"
        20 END
        30 PRINT "UNREACHABLE"
        RUN
        "#,
    );
    assert_eq!(exec(&mut r), "HELLO\n");
}

#[test]
fn test_input_then_print() {
    let mut r = Runtime::default();
    r.enter("10 INPUT A\n20 PRINT \"Hello \", A\nRUN");
    assert_eq!(exec(&mut r), "? ");
    r.enter("World");
    assert_eq!(exec(&mut r), "Hello World\n");
}

#[test]
fn test_lines_entered_one_at_a_time() {
    let mut r = Runtime::default();
    r.enter("20 PRINT 2");
    assert_eq!(exec(&mut r), "");
    r.enter("10 PRINT 1");
    assert_eq!(exec(&mut r), "");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "1\n2\n");
}

#[test]
fn test_list_in_line_order() {
    let mut r = Runtime::default();
    r.enter("20 PRINT 'X'\n10 let a = 5\nLIST");
    assert_eq!(exec(&mut r), "10 LET A = 5\n20 PRINT \"X\"\n");
}

#[test]
fn test_redefined_line() {
    assert_eq!(exec_str("10 PRINT 1\n10 PRINT 2\nRUN"), "2\n");
}

#[test]
fn test_rem() {
    assert_eq!(exec_str("10 REM PRINT 5\n20 PRINT 1\nRUN"), "1\n");
}

#[test]
fn test_bare_print() {
    assert_eq!(exec_str("PRINT\nPRINT 1"), "\n1\n");
}

#[test]
fn test_clear_forgets_program() {
    let mut r = Runtime::default();
    r.enter("10 PRINT 1\nCLEAR\nRUN\nLIST");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_runaway_program_keeps_running() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 10\nRUN");
    assert_eq!(exec_n(&mut r, 10), "\n10 Execution cycles exceeded.\n");
    r.interrupt();
    assert_eq!(exec(&mut r), "?BREAK IN 10\n");
}

#[test]
fn test_errors_are_not_fatal() {
    let mut r = Runtime::default();
    r.enter("GOSUB 10");
    assert_eq!(exec(&mut r), "?UNKNOWN STATEMENT IN (0..5); GOSUB\n");
    r.enter("PRINT 1");
    assert_eq!(exec(&mut r), "1\n");
}
