use std::fmt::Display;
use std::mem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Variable(Variable),
    StringLiteral(StringLiteral),
    Lambda(Lambda),
    Application(Application),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
}

/// Literal bytes exactly as written between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lambda {
    pub parameter: String,
    pub body: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub function: Box<Expr>,
    pub argument: Box<Expr>,
}

impl Expr {
    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::Variable(Variable { name: name.into() })
    }

    pub fn string(value: impl Into<Vec<u8>>) -> Expr {
        Expr::StringLiteral(StringLiteral {
            value: value.into(),
        })
    }

    pub fn lambda(parameter: impl Into<String>, body: Expr) -> Expr {
        Expr::Lambda(Lambda {
            parameter: parameter.into(),
            body: Box::new(body),
        })
    }

    pub fn application(function: Expr, argument: Expr) -> Expr {
        Expr::Application(Application {
            function: Box::new(function),
            argument: Box::new(argument),
        })
    }
}

/// Tears the tree down with an explicit work stack so that long application
/// chains and deeply nested lambdas never exhaust the call stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(self, &mut pending);

        while let Some(mut expr) = pending.pop() {
            take_children(&mut expr, &mut pending);
        }
    }
}

/// Moves boxed children out of `expr`, leaving childless placeholders behind.
fn take_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    match expr {
        Expr::Lambda(l) => pending.push(mem::replace(l.body.as_mut(), placeholder())),
        Expr::Application(a) => {
            pending.push(mem::replace(a.function.as_mut(), placeholder()));
            pending.push(mem::replace(a.argument.as_mut(), placeholder()));
        }
        Expr::Variable(_) | Expr::StringLiteral(_) => {}
    }
}

fn placeholder() -> Expr {
    Expr::Variable(Variable {
        name: String::new(),
    })
}

/// Writes source text that parses back into the same tree.
///
/// Lambdas are parenthesized unless nothing follows them, since a lambda body
/// extends as far right as it can. Application arguments that are themselves
/// applications are parenthesized to keep the chain left-nested.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Variable(v) => f.write_str(&v.name),
            Expr::StringLiteral(s) => write!(f, "\"{}\"", String::from_utf8_lossy(&s.value)),
            Expr::Lambda(l) => write!(f, "fun {} => {}", l.parameter, l.body),
            Expr::Application(a) => {
                match a.function.as_ref() {
                    Expr::Lambda(_) => write!(f, "({})", a.function)?,
                    function => write!(f, "{}", function)?,
                }

                match a.argument.as_ref() {
                    Expr::Lambda(_) | Expr::Application(_) => write!(f, " ({})", a.argument),
                    argument => write!(f, " {}", argument),
                }
            }
        }
    }
}
