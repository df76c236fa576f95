use std::fmt::Display;

use compiler::{Declaration, Expr, Token, WithTokenMetadata};

/// Node counts reported after a file has been parsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProgramStats {
    pub tokens: usize,
    pub declarations: usize,
    pub lambdas: usize,
    pub applications: usize,
    pub string_literals: usize,
}

impl ProgramStats {
    pub fn collect(
        tokens: &[WithTokenMetadata<Token>],
        declarations: &[Declaration],
    ) -> ProgramStats {
        let mut stats = ProgramStats {
            tokens: tokens.len(),
            declarations: declarations.len(),
            ..Default::default()
        };

        for decl in declarations {
            stats.visit(&decl.value);
        }

        stats
    }

    fn visit(&mut self, expr: &Expr) {
        let mut pending = vec![expr];

        while let Some(expr) = pending.pop() {
            match expr {
                Expr::Variable(_) => {}
                Expr::StringLiteral(_) => self.string_literals += 1,
                Expr::Lambda(l) => {
                    self.lambdas += 1;
                    pending.push(&l.body);
                }
                Expr::Application(a) => {
                    self.applications += 1;
                    pending.push(&a.function);
                    pending.push(&a.argument);
                }
            }
        }
    }
}

impl Display for ProgramStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Token count:          {}", self.tokens)?;
        writeln!(f, "Declaration count:    {}", self.declarations)?;
        writeln!(f, "Lambda count:         {}", self.lambdas)?;
        writeln!(f, "Application count:    {}", self.applications)?;
        writeln!(f, "String literal count: {}", self.string_literals)
    }
}

#[cfg(test)]
mod tests {
    use super::ProgramStats;

    fn collect(source: &str) -> ProgramStats {
        let tokens = compiler::lex(source).expect("expected source to lex");
        let decls = compiler::parse_tokens(&tokens).expect("expected source to parse");
        ProgramStats::collect(&tokens, &decls)
    }

    #[test]
    fn test_collect() {
        let stats = collect(
            "let f := fun x => g x \"a\";
             let s := \"hi\";
             let k := (fun a => fun b => a) s;",
        );

        assert_eq!(
            stats,
            ProgramStats {
                tokens: 29,
                declarations: 3,
                lambdas: 3,
                applications: 3,
                string_literals: 2,
            }
        );
    }

    #[test]
    fn test_collect_long_chain() {
        let source = format!("let x := {};", vec!["a"; 100_000].join(" "));
        let stats = collect(&source);

        assert_eq!(stats.tokens, 100_004);
        assert_eq!(stats.applications, 99_999);
    }

    #[test]
    fn test_collect_empty() {
        assert_eq!(collect("// nothing"), ProgramStats::default());
    }

    #[test]
    fn test_display() {
        let stats = ProgramStats {
            tokens: 14,
            declarations: 2,
            lambdas: 1,
            applications: 1,
            string_literals: 1,
        };

        assert_eq!(
            stats.to_string(),
            "Token count:          14\n\
             Declaration count:    2\n\
             Lambda count:         1\n\
             Application count:    1\n\
             String literal count: 1\n"
        );
    }
}
