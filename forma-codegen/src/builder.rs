//! Class builder.
//!
//! [`ClassBuilder`] accumulates one [`ClassNode`]. Each appended property
//! yields three members (property, getter, setter) and three listener
//! dispatches, always in that order. Every node is fully constructed and
//! appended before its event fires.

use forma_core::{ucfirst, validate_class_name, validate_property_name};
use forma_ir::{
    ClassNode, Member, MethodNode, Param, PropertyNode, Statement, TypeHint, Visibility,
};
use tracing::debug;

use crate::{Error, GenerationEvent, Listeners, Phase, Result};

/// Getter name for a property (`email` → `getEmail`).
pub fn getter_name(property: &str) -> String {
    format!("get{}", ucfirst(property))
}

/// Setter name for a property (`email` → `setEmail`).
pub fn setter_name(property: &str) -> String {
    format!("set{}", ucfirst(property))
}

/// Builds a class node and notifies listeners about each generated member.
///
/// # Example
///
/// ```
/// use forma_codegen::{ClassBuilder, DocListener, Listeners};
///
/// let listeners = Listeners::new().with(DocListener);
/// let mut builder = ClassBuilder::new_class("User", &listeners)?;
/// builder.append_property("email", "string")?.append_property("age", "int")?;
///
/// let class = builder.node();
/// assert_eq!(class.members.len(), 6);
/// assert!(class.method("setAge").is_some());
/// # Ok::<(), forma_codegen::Error>(())
/// ```
#[derive(Debug)]
pub struct ClassBuilder<'l> {
    node: ClassNode,
    listeners: &'l Listeners,
}

impl<'l> ClassBuilder<'l> {
    /// Start a builder for an empty class named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `name` is empty or not a valid,
    /// optionally namespace-qualified, class name.
    pub fn new_class(name: impl Into<String>, listeners: &'l Listeners) -> Result<Self> {
        let name = name.into();
        if let Some(reason) = validate_class_name(&name) {
            return Err(Error::InvalidName {
                kind: "class",
                name,
                reason,
            });
        }

        Ok(Self {
            node: ClassNode::new(name),
            listeners,
        })
    }

    /// Append a property together with its getter and setter.
    ///
    /// The setter parameter carries `ty`. Duplicate names are not detected
    /// here and produce duplicate members.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] for an invalid property name, or the
    /// first error raised by a listener. Members appended before a listener
    /// error stay in the class.
    pub fn append_property(&mut self, name: &str, ty: impl Into<TypeHint>) -> Result<&mut Self> {
        if let Some(reason) = validate_property_name(name) {
            return Err(Error::InvalidName {
                kind: "property",
                name: name.to_string(),
                reason,
            });
        }

        let ty = ty.into();
        debug!(class = %self.node.name, property = name, ty = %ty, "appending property");

        let property = PropertyNode::new(name)
            .typed(ty.clone())
            .visibility(Visibility::Protected);
        self.append(property, Phase::PropertyDeclared)?;

        let getter = MethodNode::getter(getter_name(name)).statement(Statement::return_property(name));
        self.append(getter, Phase::GetterGenerated)?;

        let setter = MethodNode::setter(setter_name(name), Param::new(name, ty))
            .statement(Statement::assign_property(name, name));
        self.append(setter, Phase::SetterGenerated)?;

        Ok(self)
    }

    /// The class built so far.
    pub fn node(&self) -> &ClassNode {
        &self.node
    }

    /// Finish building and take the class.
    pub fn into_node(self) -> ClassNode {
        self.node
    }

    fn append(&mut self, member: impl Into<Member>, phase: Phase) -> Result<()> {
        let member = self.node.push(member);
        let mut event = match member {
            Member::Property(property) => GenerationEvent::new(phase, property),
            Member::Method(method) => GenerationEvent::new(phase, method),
        };
        self.listeners.dispatch(&mut event)
    }
}
