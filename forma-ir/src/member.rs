//! Class members: properties and methods.

use crate::{DocBlock, Statement, TypeHint, Visibility};

/// A property declared on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    /// Property name, without any sigil.
    pub name: String,
    /// Declared type.
    pub ty: TypeHint,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Attached documentation.
    pub doc: Option<DocBlock>,
}

impl PropertyNode {
    /// Create a public, untyped, undocumented property.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: TypeHint::Unspecified,
            visibility: Visibility::Public,
            doc: None,
        }
    }

    /// Set the declared type.
    pub fn typed(mut self, ty: impl Into<TypeHint>) -> Self {
        self.ty = ty.into();
        self
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    /// Attach documentation, replacing any previous block.
    pub fn set_doc(&mut self, doc: DocBlock) {
        self.doc = Some(doc);
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name, without any sigil.
    pub name: String,
    /// Declared type.
    pub ty: TypeHint,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeHint>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Create a parameter without a declared type.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, TypeHint::Unspecified)
    }
}

/// The parameter shape of a method.
///
/// Accessors carry their shape in the type: a getter has no parameters and a
/// setter has exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    /// Zero parameters, returns the accessed property.
    Getter,
    /// Exactly one parameter, named after the accessed property.
    Setter { param: Param },
    /// Any other method.
    Method { params: Vec<Param> },
}

impl Signature {
    /// Parameters in declaration order.
    pub fn params(&self) -> &[Param] {
        match self {
            Self::Getter => &[],
            Self::Setter { param } => std::slice::from_ref(param),
            Self::Method { params } => params,
        }
    }
}

/// A method declared on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNode {
    /// Method name.
    pub name: String,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Parameter shape.
    pub signature: Signature,
    /// Attached documentation.
    pub doc: Option<DocBlock>,
    /// Body statements.
    pub body: Vec<Statement>,
}

impl MethodNode {
    /// Create a public method with no parameters and an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            signature: Signature::Method { params: Vec::new() },
            doc: None,
            body: Vec::new(),
        }
    }

    /// Create a getter.
    pub fn getter(name: impl Into<String>) -> Self {
        Self {
            signature: Signature::Getter,
            ..Self::new(name)
        }
    }

    /// Create a setter taking `param`.
    pub fn setter(name: impl Into<String>, param: Param) -> Self {
        Self {
            signature: Signature::Setter { param },
            ..Self::new(name)
        }
    }

    /// Add a parameter to a plain method.
    ///
    /// Accessor signatures have a fixed shape; calling this on one turns it
    /// into a plain method carrying the existing parameters plus `param`.
    pub fn param(mut self, param: Param) -> Self {
        let mut params = self.signature.params().to_vec();
        params.push(param);
        self.signature = Signature::Method { params };
        self
    }

    /// Append a body statement.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    /// Parameters in declaration order.
    pub fn params(&self) -> &[Param] {
        self.signature.params()
    }

    /// The setter parameter, if this method is a setter.
    pub fn setter_param(&self) -> Option<&Param> {
        match &self.signature {
            Signature::Setter { param } => Some(param),
            _ => None,
        }
    }

    /// Returns true if this method is a getter.
    pub fn is_getter(&self) -> bool {
        matches!(self.signature, Signature::Getter)
    }

    /// Attach documentation, replacing any previous block.
    pub fn set_doc(&mut self, doc: DocBlock) {
        self.doc = Some(doc);
    }
}
