use super::*;
use crate::lang::parse_program;

fn compile(text: &str) -> String {
    emit(&parse_program(text).unwrap())
}

#[test]
fn test_counting_program() {
    let c = compile(
        "10 LET A = 1\n\
         20 PRINT \"A IS\", A\n\
         30 IF A < 3 THEN GOTO 45\n\
         40 END\n\
         50 LET A = A + 1",
    );
    assert_eq!(
        c,
        r#"#include <stdio.h>
#include <stdlib.h>
#include <string.h>

#define INPUT_SIZE 256

int main(void)
{
line_10: ;
    long A = 1L;
line_20: ;
    printf("%s %ld\n", "A IS", A);
line_30: ;
    if (A < 3L) {
        goto line_50;
    }
line_40: ;
    return 0;
line_50: ;
    A = A + 1L;
    goto done;
done:
    return 0;
}
"#
    );
}

#[test]
fn test_computed_goto_and_input() {
    let c = compile("10 INPUT N\n20 GOTO N\n30 PRINT N");
    assert_eq!(
        c,
        r#"#include <stdio.h>
#include <stdlib.h>
#include <string.h>

#define INPUT_SIZE 256

int main(void)
{
    char *N = NULL;
    long target = 0;

line_10: ;
    if (N == NULL && (N = malloc(INPUT_SIZE)) == NULL) goto done;
    fputs("? ", stdout);
    fflush(stdout);
    if (fgets(N, INPUT_SIZE, stdin) == NULL) N[0] = '\0';
    N[strcspn(N, "\n")] = '\0';
line_20: ;
    target = atol(N);
    goto dispatch;
line_30: ;
    printf("%s\n", N);
    goto done;
dispatch:
    if (target < 0) goto done;
    if (target <= 10) goto line_10;
    if (target <= 20) goto line_20;
    if (target <= 30) goto line_30;
    goto done;
done:
    free(N);
    return 0;
}
"#
    );
}

#[test]
fn test_print_literals_are_escaped() {
    let c = compile("10 PRINT \"say \\\"hi\\\"\", 'tab\\there', \"50%\"");
    assert!(c.contains(r#"printf("%s %s %s\n", "say \"hi\"", "tab\there", "50%");"#));
}

#[test]
fn test_relational_prints_truth_token() {
    let c = compile("10 PRINT 1 <> 2");
    assert!(c.contains(r#"printf("%s\n", (1L != 2L) ? "True" : "False");"#));
}

#[test]
fn test_constant_goto_resolution() {
    let c = compile("10 GOTO 99\n20 GOTO -1\n30 GOTO 15");
    assert!(c.contains("line_10: ;\n    goto done;\n"));
    assert!(c.contains("line_20: ;\n    goto done;\n"));
    assert!(c.contains("line_30: ;\n    goto line_20;\n"));
    assert!(!c.contains("dispatch"));
}

#[test]
fn test_direct_lines_not_compiled() {
    let c = compile("PRINT 1\n10 PRINT 2");
    assert!(!c.contains("1L"));
    assert!(c.contains(r#"printf("%ld\n", 2L);"#));
}

#[test]
fn test_text_variables() {
    let c = compile("10 LET S = \"HI\"\n20 LET S = \"BYE\"\n30 PRINT S\n40 PRINT S = 1");
    assert!(c.contains("    const char *S = \"HI\";\n"));
    assert!(c.contains("    S = \"BYE\";\n"));
    assert!(c.contains(r#"printf("%s\n", S);"#));
    assert!(c.contains("(atol(S) == 1L)"));
}

#[test]
fn test_end_in_if_releases_buffers() {
    let c = compile("10 INPUT A\n20 IF A = 0 THEN END\n30 REM done */ here");
    assert!(c.contains("    if (atol(A) == 0L) {\n        free(A);\n        return 0;\n    }\n"));
    assert!(c.contains("/* REM done * / here */"));
}

#[test]
fn test_hoisted_when_used_before_assignment() {
    let c = compile("10 PRINT B\n20 LET B = 2\n30 PRINT");
    assert!(c.contains("{\n    long B = 0;\n\nline_10: ;\n"));
    assert!(c.contains("line_20: ;\n    B = 2L;\n"));
    assert!(c.contains("line_30: ;\n    putchar('\\n');\n"));
}

#[test]
fn test_let_skipped_by_goto_is_hoisted() {
    let c = compile("10 GOTO 30\n20 LET A = 1\n30 PRINT A");
    assert!(c.contains("{\n    long A = 0;\n\nline_10: ;\n    goto line_30;\n"));
    assert!(c.contains("line_20: ;\n    A = 1L;\n"));
}

#[test]
fn test_print_after_trailing_space() {
    let c = compile("10 LET A = 1\n20 PRINT \"Hello \", A\n30 PRINT \"Hello\", A");
    assert!(c.contains(r#"printf("%s%ld\n", "Hello ", A);"#));
    assert!(c.contains(r#"printf("%s %ld\n", "Hello", A);"#));
}
