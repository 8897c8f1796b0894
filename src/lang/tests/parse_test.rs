use super::*;

fn parse_str(s: &str) -> Option<Statement> {
    let (_, tokens) = lex(s);
    parse(None, &tokens).ok()
}

fn var(ch: char) -> Variable {
    Variable::new(ch).unwrap()
}

fn int(n: i64) -> Box<Expression> {
    Box::new(Expression::Integer(n))
}

#[test]
fn test_let() {
    let answer = Statement::Let(var('A'), Item::Expression(Expression::Var(var('B'))));
    assert_eq!(parse_str("LET A = B"), Some(answer));
    let answer = Statement::Let(var('Z'), Item::String("food".into()));
    assert_eq!(parse_str("let z='food'"), Some(answer));
    assert_eq!(parse_str("A = 1"), None);
    assert_eq!(parse_str("LET AB = 1"), None);
}

#[test]
fn test_precedence_and_paren() {
    let answer = Statement::Print(vec![Item::Expression(Expression::Multiply(
        Box::new(Expression::Subtract(int(2), Box::new(Expression::Var(var('C'))))),
        int(4),
    ))]);
    assert_eq!(parse_str("PRINT (2-C)*4"), Some(answer));
    let answer = Statement::Print(vec![Item::Expression(Expression::Add(
        int(1),
        Box::new(Expression::Multiply(int(2), int(3))),
    ))]);
    assert_eq!(parse_str("PRINT 1+2*3"), Some(answer));
}

#[test]
fn test_relational_synonyms() {
    let answer = Statement::If(
        Expression::NotEqual(Box::new(Expression::Var(var('A'))), int(1)),
        Box::new(Statement::End),
    );
    assert_eq!(parse_str("IF A <> 1 THEN END"), Some(answer.clone()));
    assert_eq!(parse_str("IF A >< 1 THEN END"), Some(answer));
    let answer = Statement::If(
        Expression::GreaterEqual(Box::new(Expression::Var(var('A'))), int(1)),
        Box::new(Statement::Goto(Expression::Integer(60))),
    );
    assert_eq!(parse_str("IF A>=1 THEN GOTO 60"), Some(answer));
}

#[test]
fn test_printer_list() {
    assert_eq!(
        parse_str(r#"PRINT "Hello ", A, 'it\'s'"#),
        Some(Statement::Print(vec![
            Item::String("Hello ".into()),
            Item::Expression(Expression::Var(var('A'))),
            Item::String("it's".into()),
        ]))
    );
    assert_eq!(parse_str("PRINT"), Some(Statement::Print(vec![])));
    assert_eq!(parse_str("PRINT 1,"), None);
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        parse_str(r#"PRINT "a\/b\\c\"d\n""#),
        Some(Statement::Print(vec![Item::String("a/b\\c\"d\n".into())]))
    );
    assert_eq!(
        parse_str(r#"PRINT 'x\by\fz\r'"#),
        Some(Statement::Print(vec![Item::String("x\u{8}y\u{c}z\r".into())]))
    );
    assert_eq!(parse_str(r#"PRINT "bad\q""#), None);
    assert_eq!(parse_str(r#"PRINT "unterminated"#), None);
}

#[test]
fn test_input_list() {
    assert_eq!(
        parse_str("INPUT A, B,C"),
        Some(Statement::Input(vec![var('A'), var('B'), var('C')]))
    );
    assert_eq!(parse_str("INPUT"), None);
}

#[test]
fn test_rem() {
    assert_eq!(
        parse_str("REM   hello, world  "),
        Some(Statement::Rem("hello, world".into()))
    );
    assert_eq!(parse_str("REM"), Some(Statement::Rem("".into())));
}

#[test]
fn test_word_boundary() {
    assert_eq!(parse_str("PRINTA"), None);
    assert_eq!(parse_str("GOTO20"), None);
}

#[test]
fn test_unsupported_statement() {
    let (_, tokens) = lex("GOSUB 100");
    let e = parse(Some(10), &tokens).unwrap_err();
    assert!(e.is(ErrorCode::UnknownStatement));
    assert_eq!(e.line_number(), Some(10));
}

#[test]
fn test_literal_overflow() {
    let (_, tokens) = lex("PRINT 99999999999999999999");
    assert!(parse(None, &tokens).unwrap_err().is(ErrorCode::Overflow));
    assert_eq!(
        parse_str("PRINT -9223372036854775808"),
        Some(Statement::Print(vec![Item::Expression(Expression::Integer(
            i64::MIN
        ))]))
    );
}

#[test]
fn test_program_is_atomic() {
    let e = parse_program("10 PRINT 1\n20 PRINT (\n30 END").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR IN 20 SOURCE LINE 2 (8..8); EXPECTED EXPRESSION");
}

#[test]
fn test_program_skips_blank_lines() {
    let lines = parse_program("\n  10 LET A = 0\n\n  RUN\n").unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].number(), Some(10));
    assert!(lines[1].is_direct());
}
