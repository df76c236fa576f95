use std::fmt::Display;

use crate::expr::Expr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: Expr,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: Expr) -> Declaration {
        Declaration {
            name: name.into(),
            value,
        }
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "let {} := {};", self.name, self.value)
    }
}
