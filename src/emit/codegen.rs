use super::symbols::{Kind, Symbols};
use crate::lang::ast::{Expression, Item, Statement, Variable};
use crate::lang::LineNumber;
use crate::mach::{Program, FALSE, TRUE};
use log::trace;
use std::collections::BTreeSet;
use std::convert::TryFrom;

const INDENT: &str = "    ";

const PRELUDE: &str = "\
#include <stdio.h>
#include <stdlib.h>
#include <string.h>

#define INPUT_SIZE 256

int main(void)
{
";

pub fn codegen(program: &Program) -> String {
    let symbols = Symbols::scan(program);
    let mut gen = Generator {
        program,
        symbols: &symbols,
        declared: BTreeSet::new(),
        out: String::from(PRELUDE),
    };
    gen.declarations();
    for line in program.lines() {
        if let Some(number) = line.number() {
            gen.out.push_str(&format!("line_{}: ;\n", number));
            gen.statement(line.statement(), 1, true);
        }
    }
    gen.push(1, "goto done;");
    if symbols.has_dispatch() {
        gen.dispatch();
    }
    gen.out.push_str("done:\n");
    gen.release(1);
    gen.push(1, "return 0;");
    gen.out.push_str("}\n");
    gen.out
}

struct Generator<'a> {
    program: &'a Program,
    symbols: &'a Symbols,
    declared: BTreeSet<Variable>,
    out: String,
}

impl<'a> Generator<'a> {
    fn push(&mut self, depth: usize, s: &str) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(s);
        self.out.push('\n');
    }

    fn declarations(&mut self) {
        let hoisted: Vec<(Variable, Kind)> = self.symbols.hoisted().collect();
        for (var, kind) in &hoisted {
            let decl = match kind {
                Kind::Number => format!("long {} = 0;", var),
                Kind::Text => format!("const char *{} = \"\";", var),
                Kind::Buffer => format!("char *{} = NULL;", var),
            };
            self.push(1, &decl);
        }
        if self.symbols.has_dispatch() {
            self.push(1, "long target = 0;");
        }
        if !hoisted.is_empty() || self.symbols.has_dispatch() {
            self.out.push('\n');
        }
    }

    /// Frees every input buffer. `free(NULL)` is a no-op.
    fn release(&mut self, depth: usize) {
        let buffers: Vec<Variable> = self.symbols.buffers().collect();
        for var in buffers {
            self.push(depth, &format!("free({});", var));
        }
    }

    fn statement(&mut self, statement: &Statement, depth: usize, top: bool) {
        use Statement::*;
        match statement {
            Clear => self.push(depth, "/* CLEAR */"),
            End => self.r#end(depth),
            Goto(expr) => self.r#goto(expr, depth),
            If(predicate, then) => {
                let cond = self.expression(predicate);
                self.push(depth, &format!("if ({}) {{", strip_parens(&cond)));
                self.statement(then, depth + 1, false);
                self.push(depth, "}");
            }
            Input(vars) => {
                for var in vars {
                    self.r#input(*var, depth);
                }
            }
            Let(var, item) => self.r#let(*var, item, depth, top),
            List => self.push(depth, "/* LIST */"),
            Print(items) => self.r#print(items, depth),
            Rem(text) => self.push(depth, &format!("/* REM {} */", comment_text(text))),
            Run => self.push(depth, "/* RUN */"),
        }
    }

    fn r#end(&mut self, depth: usize) {
        self.release(depth);
        self.push(depth, "return 0;");
    }

    fn r#goto(&mut self, expr: &Expression, depth: usize) {
        match expr.constant() {
            Some(n) => {
                let label = self.resolve(n);
                trace!("GOTO {} resolved to {}", n, label);
                self.push(depth, &format!("goto {};", label));
            }
            None => {
                let target = self.expression(expr);
                self.push(depth, &format!("target = {};", strip_parens(&target)));
                self.push(depth, "goto dispatch;");
            }
        }
    }

    /// The label of the first stored line numbered `n` or higher.
    fn resolve(&self, n: i64) -> String {
        let next = match LineNumber::try_from(n) {
            Ok(n) => self.program.at_or_after(n),
            Err(_) => None,
        };
        match next {
            Some((number, _)) => format!("line_{}", number),
            None => "done".to_string(),
        }
    }

    fn dispatch(&mut self) {
        self.out.push_str("dispatch:\n");
        self.push(1, "if (target < 0) goto done;");
        let numbers: Vec<LineNumber> = self.program.from(0).map(|(n, _)| n).collect();
        for number in numbers {
            self.push(
                1,
                &format!("if (target <= {}) goto line_{};", number, number),
            );
        }
        self.push(1, "goto done;");
    }

    fn r#input(&mut self, var: Variable, depth: usize) {
        self.push(
            depth,
            &format!(
                "if ({} == NULL && ({} = malloc(INPUT_SIZE)) == NULL) goto done;",
                var, var
            ),
        );
        self.push(depth, "fputs(\"? \", stdout);");
        self.push(depth, "fflush(stdout);");
        self.push(
            depth,
            &format!("if (fgets({}, INPUT_SIZE, stdin) == NULL) {}[0] = '\\0';", var, var),
        );
        self.push(depth, &format!("{}[strcspn({}, \"\\n\")] = '\\0';", var, var));
    }

    fn r#let(&mut self, var: Variable, item: &Item, depth: usize, top: bool) {
        let kind = self.symbols.kind(var);
        let declare = top && self.symbols.is_inline(var) && self.declared.insert(var);
        match (kind, item) {
            (Kind::Buffer, _) => {
                let (format, arg) = self.field(item);
                self.push(
                    depth,
                    &format!(
                        "if ({} == NULL && ({} = malloc(INPUT_SIZE)) == NULL) goto done;",
                        var, var
                    ),
                );
                self.push(
                    depth,
                    &format!("snprintf({}, INPUT_SIZE, \"{}\", {});", var, format, arg),
                );
            }
            (Kind::Text, Item::String(s)) if declare => {
                self.push(depth, &format!("const char *{} = {};", var, c_string(s)))
            }
            (Kind::Text, Item::String(s)) => {
                self.push(depth, &format!("{} = {};", var, c_string(s)))
            }
            (_, Item::Expression(expr)) => {
                let value = strip_parens(&self.expression(expr)).to_string();
                if declare {
                    self.push(depth, &format!("long {} = {};", var, value));
                } else {
                    self.push(depth, &format!("{} = {};", var, value));
                }
            }
            (Kind::Number, Item::String(s)) => {
                self.push(depth, &format!("{} = atol({});", var, c_string(s)))
            }
        }
    }

    fn r#print(&mut self, items: &[Item], depth: usize) {
        if items.is_empty() {
            self.push(depth, "putchar('\\n');");
            return;
        }
        let mut format = String::new();
        let mut args: Vec<String> = vec![];
        let mut spaced = true;
        for item in items {
            if !spaced {
                format.push(' ');
            }
            let (conversion, arg) = self.field(item);
            format.push_str(conversion);
            args.push(arg);
            // Only literals are known to end in whitespace here.
            spaced = matches!(item, Item::String(s) if s.ends_with(char::is_whitespace));
        }
        self.push(
            depth,
            &format!("printf(\"{}\\n\", {});", format, args.join(", ")),
        );
    }

    /// The `printf` conversion and argument for one value.
    fn field(&self, item: &Item) -> (&'static str, String) {
        match item {
            Item::String(s) => ("%s", c_string(s)),
            Item::Expression(Expression::Var(var)) if self.symbols.kind(*var) != Kind::Number => {
                ("%s", var.to_string())
            }
            Item::Expression(expr) if expr.is_relational() => (
                "%s",
                format!(
                    "{} ? {} : {}",
                    self.expression(expr),
                    c_string(TRUE),
                    c_string(FALSE)
                ),
            ),
            Item::Expression(expr) => ("%ld", strip_parens(&self.expression(expr)).to_string()),
        }
    }

    /// C text for an expression. Compound expressions come back
    /// parenthesized.
    fn expression(&self, expr: &Expression) -> String {
        use Expression::*;
        let (lhs, op, rhs) = match expr {
            Integer(n) if *n == i64::min_value() => return format!("({}L - 1)", n + 1),
            Integer(n) => return format!("{}L", n),
            Var(var) => {
                return match self.symbols.kind(*var) {
                    Kind::Number => var.to_string(),
                    Kind::Text | Kind::Buffer => format!("atol({})", var),
                }
            }
            Multiply(l, r) => (l, "*", r),
            Divide(l, r) => (l, "/", r),
            Add(l, r) => (l, "+", r),
            Subtract(l, r) => (l, "-", r),
            Equal(l, r) => (l, "==", r),
            NotEqual(l, r) => (l, "!=", r),
            Less(l, r) => (l, "<", r),
            LessEqual(l, r) => (l, "<=", r),
            Greater(l, r) => (l, ">", r),
            GreaterEqual(l, r) => (l, ">=", r),
        };
        format!("({} {} {})", self.expression(lhs), op, self.expression(rhs))
    }
}

/// Drops the outer parentheses `expression` puts around a compound.
fn strip_parens(s: &str) -> &str {
    if s.starts_with('(') && s.ends_with(')') && balanced(&s[1..s.len() - 1]) {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn balanced(s: &str) -> bool {
    let mut depth = 0i32;
    for ch in s.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// A C string literal. Non-printable bytes use octal escapes so a
/// following digit is never absorbed.
pub fn c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            ch if (ch as u32) < 0x20 || ch as u32 == 0x7f => {
                out.push_str(&format!("\\{:03o}", ch as u32))
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}

fn comment_text(s: &str) -> String {
    s.replace("*/", "* /")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_string() {
        assert_eq!(c_string("HI"), "\"HI\"");
        assert_eq!(c_string("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(c_string("a\\b"), "\"a\\\\b\"");
        assert_eq!(c_string("\u{1}2"), "\"\\0012\"");
    }

    #[test]
    fn test_strip_parens() {
        assert_eq!(strip_parens("(A + 1L)"), "A + 1L");
        assert_eq!(strip_parens("(A + 1L) * (B - 2L)"), "(A + 1L) * (B - 2L)");
        assert_eq!(strip_parens("A"), "A");
    }
}
