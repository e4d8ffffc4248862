//! Class nodes.

use crate::{MethodNode, PropertyNode};

/// A member of a class, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Property(PropertyNode),
    Method(MethodNode),
}

impl From<PropertyNode> for Member {
    fn from(node: PropertyNode) -> Self {
        Self::Property(node)
    }
}

impl From<MethodNode> for Member {
    fn from(node: MethodNode) -> Self {
        Self::Method(node)
    }
}

/// A class definition.
///
/// The name may be namespace-qualified with `\` separators
/// (e.g., `Entities\User`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    /// Fully qualified class name.
    pub name: String,
    /// Members in declaration order.
    pub members: Vec<Member>,
}

impl ClassNode {
    /// Create an empty class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Append a member and return a mutable reference to it.
    pub fn push(&mut self, member: impl Into<Member>) -> &mut Member {
        let index = self.members.len();
        self.members.push(member.into());
        &mut self.members[index]
    }

    /// The unqualified class name (`User` for `Entities\User`).
    pub fn short_name(&self) -> &str {
        self.name.rsplit('\\').next().unwrap_or(&self.name)
    }

    /// The namespace part of the name, if any (`Entities` for `Entities\User`).
    pub fn namespace(&self) -> Option<&str> {
        self.name.rsplit_once('\\').map(|(ns, _)| ns)
    }

    /// Iterate over property members.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyNode> {
        self.members.iter().filter_map(|m| match m {
            Member::Property(p) => Some(p),
            Member::Method(_) => None,
        })
    }

    /// Iterate over method members.
    pub fn methods(&self) -> impl Iterator<Item = &MethodNode> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(method) => Some(method),
            Member::Property(_) => None,
        })
    }

    /// Find the first property with the given name.
    pub fn property(&self, name: &str) -> Option<&PropertyNode> {
        self.properties().find(|p| p.name == name)
    }

    /// Find the first method with the given name.
    pub fn method(&self, name: &str) -> Option<&MethodNode> {
        self.methods().find(|m| m.name == name)
    }

    /// Returns true if the class has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
