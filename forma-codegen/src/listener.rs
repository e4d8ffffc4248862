//! Listener contract and registry.

use std::fmt;

use tracing::trace;

use crate::{GenerationEvent, Phase, Result};

/// A component notified at generation phases.
///
/// Each hook receives the event for one freshly built node and may mutate
/// that node in place. Hooks a listener does not override are no-ops.
/// [`phases`](Listener::phases) declares which phases the listener handles;
/// the registry skips the others entirely.
///
/// # Example
///
/// ```
/// use forma_codegen::{GenerationEvent, Listener, Phase, Result};
///
/// struct Protect;
///
/// impl Listener for Protect {
///     fn name(&self) -> &'static str {
///         "protect"
///     }
///
///     fn phases(&self) -> &'static [Phase] {
///         &[Phase::PropertyDeclared]
///     }
///
///     fn on_generate_property(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
///         if let Some(prop) = event.property_mut() {
///             prop.visibility = forma_ir::Visibility::Private;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Listener: Send + Sync {
    /// The name of this listener (for logs and error messages).
    fn name(&self) -> &'static str;

    /// Phases this listener handles.
    fn phases(&self) -> &'static [Phase] {
        Phase::ALL
    }

    /// Check whether this listener handles `phase`.
    fn handles(&self, phase: Phase) -> bool {
        self.phases().contains(&phase)
    }

    /// Called after a property node is appended.
    ///
    /// # Errors
    ///
    /// Return an error to abort generation.
    #[allow(unused_variables)]
    fn on_generate_property(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
        Ok(())
    }

    /// Called after a getter method is appended.
    ///
    /// # Errors
    ///
    /// Return an error to abort generation.
    #[allow(unused_variables)]
    fn on_generate_getter(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
        Ok(())
    }

    /// Called after a setter method is appended.
    ///
    /// # Errors
    ///
    /// Return an error to abort generation.
    #[allow(unused_variables)]
    fn on_generate_setter(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
        Ok(())
    }
}

/// An ordered set of listeners.
///
/// Listeners run in registration order. The first error stops the dispatch
/// and is returned to the caller.
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<Box<dyn Listener>>,
}

static EMPTY: Listeners = Listeners {
    listeners: Vec::new(),
};

impl Listeners {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared registry with no listeners.
    pub fn empty() -> &'static Listeners {
        &EMPTY
    }

    /// Add a listener and return the registry.
    pub fn with(mut self, listener: impl Listener + 'static) -> Self {
        self.register(listener);
        self
    }

    /// Add a listener.
    pub fn register(&mut self, listener: impl Listener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Names of the registered listeners, in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.listeners.iter().map(|l| l.name())
    }

    /// Deliver `event` to every listener that handles its phase.
    pub fn dispatch(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
        let phase = event.phase();

        for listener in self.listeners.iter().filter(|l| l.handles(phase)) {
            trace!(
                listener = listener.name(),
                %phase,
                node = event.node_name(),
                "dispatching"
            );

            match phase {
                Phase::PropertyDeclared => listener.on_generate_property(event)?,
                Phase::GetterGenerated => listener.on_generate_getter(event)?,
                Phase::SetterGenerated => listener.on_generate_setter(event)?,
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use forma_ir::{DocBlock, MethodNode, PropertyNode};

    use super::*;
    use crate::Error;

    type Log = Arc<Mutex<Vec<String>>>;

    struct Recording {
        label: &'static str,
        phases: &'static [Phase],
        log: Log,
    }

    impl Listener for Recording {
        fn name(&self) -> &'static str {
            self.label
        }

        fn phases(&self) -> &'static [Phase] {
            self.phases
        }

        fn on_generate_property(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:property:{}", self.label, event.node_name()));
            Ok(())
        }

        fn on_generate_getter(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:getter:{}", self.label, event.node_name()));
            Ok(())
        }
    }

    struct Failing;

    impl Listener for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn on_generate_property(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
            Err(Error::invariant(self.name(), event.phase(), "always fails"))
        }
    }

    struct Documenting;

    impl Listener for Documenting {
        fn name(&self) -> &'static str {
            "documenting"
        }

        fn on_generate_property(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
            if let Some(prop) = event.property_mut() {
                prop.set_doc(DocBlock::new().summary("documented"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let log = Log::default();
        let listeners = Listeners::new()
            .with(Recording {
                label: "first",
                phases: Phase::ALL,
                log: log.clone(),
            })
            .with(Recording {
                label: "second",
                phases: Phase::ALL,
                log: log.clone(),
            });

        let mut prop = PropertyNode::new("email");
        listeners
            .dispatch(&mut GenerationEvent::new(Phase::PropertyDeclared, &mut prop))
            .unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            ["first:property:email", "second:property:email"]
        );
    }

    #[test]
    fn test_dispatch_skips_unhandled_phases() {
        let log = Log::default();
        let listeners = Listeners::new().with(Recording {
            label: "getters",
            phases: &[Phase::GetterGenerated],
            log: log.clone(),
        });

        let mut prop = PropertyNode::new("email");
        let mut getter = MethodNode::getter("getEmail");
        listeners
            .dispatch(&mut GenerationEvent::new(Phase::PropertyDeclared, &mut prop))
            .unwrap();
        listeners
            .dispatch(&mut GenerationEvent::new(Phase::GetterGenerated, &mut getter))
            .unwrap();

        assert_eq!(*log.lock().unwrap(), ["getters:getter:getEmail"]);
    }

    #[test]
    fn test_unimplemented_hook_is_noop() {
        let log = Log::default();
        let listeners = Listeners::new().with(Recording {
            label: "partial",
            phases: Phase::ALL,
            log: log.clone(),
        });

        let mut setter = MethodNode::setter("setEmail", forma_ir::Param::untyped("email"));
        listeners
            .dispatch(&mut GenerationEvent::new(Phase::SetterGenerated, &mut setter))
            .unwrap();

        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_first_error_stops_dispatch() {
        let listeners = Listeners::new().with(Failing).with(Documenting);

        let mut prop = PropertyNode::new("email");
        let err = listeners
            .dispatch(&mut GenerationEvent::new(Phase::PropertyDeclared, &mut prop))
            .unwrap_err();

        assert!(err.is_invariant_violation());
        assert!(prop.doc.is_none());
    }

    #[test]
    fn test_listener_mutates_node() {
        let listeners = Listeners::new().with(Documenting);
        let mut prop = PropertyNode::new("email");

        listeners
            .dispatch(&mut GenerationEvent::new(Phase::PropertyDeclared, &mut prop))
            .unwrap();

        assert_eq!(prop.doc.unwrap().summary.as_deref(), Some("documented"));
    }

    #[test]
    fn test_registry_introspection() {
        let listeners = Listeners::new().with(Documenting).with(Failing);
        assert_eq!(listeners.len(), 2);
        assert_eq!(listeners.names().collect::<Vec<_>>(), ["documenting", "failing"]);
        assert_eq!(format!("{listeners:?}"), r#"["documenting", "failing"]"#);
        assert!(Listeners::empty().is_empty());
    }
}
