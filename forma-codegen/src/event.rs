//! Generation phases and events.

use std::fmt;

use forma_ir::{MethodNode, PropertyNode};

/// A point in class generation at which listeners are notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Phase {
    /// A property node was appended.
    PropertyDeclared,
    /// A getter method was synthesized for a property.
    GetterGenerated,
    /// A setter method was synthesized for a property.
    SetterGenerated,
}

impl Phase {
    /// Every phase, in the order the builder emits them for one property.
    pub const ALL: &'static [Phase] = &[
        Phase::PropertyDeclared,
        Phase::GetterGenerated,
        Phase::SetterGenerated,
    ];

    /// Short name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PropertyDeclared => "property",
            Self::GetterGenerated => "getter",
            Self::SetterGenerated => "setter",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exclusive access to the node an event carries.
#[derive(Debug)]
pub enum NodeMut<'a> {
    Property(&'a mut PropertyNode),
    Method(&'a mut MethodNode),
}

impl NodeMut<'_> {
    /// Name of the wrapped node.
    pub fn name(&self) -> &str {
        match self {
            Self::Property(p) => &p.name,
            Self::Method(m) => &m.name,
        }
    }
}

impl<'a> From<&'a mut PropertyNode> for NodeMut<'a> {
    fn from(node: &'a mut PropertyNode) -> Self {
        Self::Property(node)
    }
}

impl<'a> From<&'a mut MethodNode> for NodeMut<'a> {
    fn from(node: &'a mut MethodNode) -> Self {
        Self::Method(node)
    }
}

/// An event wrapping one freshly built node for the duration of a dispatch.
///
/// The event performs no validation; it only carries the node and the phase
/// that produced it. Listeners mutate the node through [`node_mut`],
/// [`property_mut`] or [`method_mut`].
///
/// [`node_mut`]: GenerationEvent::node_mut
/// [`property_mut`]: GenerationEvent::property_mut
/// [`method_mut`]: GenerationEvent::method_mut
#[derive(Debug)]
pub struct GenerationEvent<'a> {
    phase: Phase,
    node: NodeMut<'a>,
}

impl<'a> GenerationEvent<'a> {
    /// Wrap `node` for `phase`.
    pub fn new(phase: Phase, node: impl Into<NodeMut<'a>>) -> Self {
        Self {
            phase,
            node: node.into(),
        }
    }

    /// The phase that produced this event.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read access to the wrapped node.
    pub fn node(&self) -> &NodeMut<'a> {
        &self.node
    }

    /// Write access to the wrapped node.
    pub fn node_mut(&mut self) -> &mut NodeMut<'a> {
        &mut self.node
    }

    /// The wrapped property, if the node is one.
    pub fn property_mut(&mut self) -> Option<&mut PropertyNode> {
        match &mut self.node {
            NodeMut::Property(p) => Some(&mut **p),
            NodeMut::Method(_) => None,
        }
    }

    /// The wrapped method, if the node is one.
    pub fn method_mut(&mut self) -> Option<&mut MethodNode> {
        match &mut self.node {
            NodeMut::Method(m) => Some(&mut **m),
            NodeMut::Property(_) => None,
        }
    }

    /// Name of the wrapped node.
    pub fn node_name(&self) -> &str {
        self.node.name()
    }
}
