//! Structural placeholders for method bodies.
//!
//! Only the shapes accessors need are modeled; this is not an expression AST.

/// An expression inside a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The current instance (`$this`).
    This,
    /// A local variable or parameter (`$name`).
    Variable(String),
    /// A property of the current instance (`$this->name`).
    PropertyFetch(String),
}

impl Expr {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn property(name: impl Into<String>) -> Self {
        Self::PropertyFetch(name.into())
    }
}

/// A statement in a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `return <expr>;`
    Return(Expr),
    /// `<target> = <value>;`
    Assign { target: Expr, value: Expr },
}

impl Statement {
    /// `return $this->{property};`
    pub fn return_property(property: impl Into<String>) -> Self {
        Self::Return(Expr::property(property))
    }

    /// `$this->{property} = ${variable};`
    pub fn assign_property(property: impl Into<String>, variable: impl Into<String>) -> Self {
        Self::Assign {
            target: Expr::property(property),
            value: Expr::variable(variable),
        }
    }
}
