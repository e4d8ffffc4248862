//! End-to-end tests for schema-driven class generation.

use std::sync::{Arc, Mutex};

use forma_codegen::{
    ConfigSource, DocListener, Error, GenerationEvent, GenerationProject, Listener, Phase,
    Result, Source, listeners::accessed_property_name,
};
use forma_ir::{ClassNode, TypeHint};
use forma_manifest::{ClassDef, PropertyDef, Schema};

/// Records every event it receives as `phase:node`.
#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, event: &GenerationEvent<'_>) {
        self.0
            .lock()
            .unwrap()
            .push(format!("{}:{}", event.phase(), event.node_name()));
    }
}

impl Listener for EventLog {
    fn name(&self) -> &'static str {
        "event-log"
    }

    fn on_generate_property(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
        self.push(event);
        Ok(())
    }

    fn on_generate_getter(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
        self.push(event);
        Ok(())
    }

    fn on_generate_setter(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
        self.push(event);
        Ok(())
    }
}

fn generate(schema_toml: &str, source: impl FnOnce(ConfigSource) -> ConfigSource) -> GenerationProject {
    let source = source(schema_toml.parse().expect("Failed to parse schema"));
    let mut project = GenerationProject::new();
    source.generate(&mut project).expect("Generation failed");
    project
}

fn class<'a>(project: &'a GenerationProject, name: &str) -> &'a ClassNode {
    let file = project.file(name).expect("Class file not found");
    assert_eq!(file.nodes().len(), 1);
    &file.nodes()[0]
}

#[test]
fn test_user_email_round_trip() {
    let project = generate(
        r#"
        [classes.User.properties]
        email = {}
        "#,
        |s| s.listener(DocListener),
    );

    assert_eq!(project.len(), 1);
    let user = class(&project, "User");
    assert_eq!(user.name, "User");

    let email = user.property("email").expect("property");
    assert_eq!(email.doc.as_ref().unwrap().to_string(), "/**\n * @var mixed\n */");

    let getter = user.method("getEmail").expect("getter");
    assert_eq!(
        getter.doc.as_ref().unwrap().to_string(),
        "/**\n * Return email\n *\n * @return mixed\n */"
    );

    let setter = user.method("setEmail").expect("setter");
    assert_eq!(
        setter.doc.as_ref().unwrap().to_string(),
        "/**\n * Set email\n *\n * @param mixed $email\n */"
    );
}

#[test]
fn test_dispatch_order_across_classes() {
    let log = EventLog::default();
    let listener = log.clone();
    generate(
        r#"
        [classes.User.properties]
        email = {}
        name = {}

        [classes.Post.properties]
        title = {}
        "#,
        move |s| s.listener(listener),
    );

    assert_eq!(
        log.entries(),
        [
            "property:email",
            "getter:getEmail",
            "setter:setEmail",
            "property:name",
            "getter:getName",
            "setter:setName",
            "property:title",
            "getter:getTitle",
            "setter:setTitle",
        ]
    );
}

#[test]
fn test_every_property_has_one_getter_and_one_setter() {
    let project = generate(
        r#"
        [classes.Customer.properties]
        firstName = {}
        lastName = { type = "string" }
        _internal = {}
        vatId = { type = "?string" }
        "#,
        |s| s,
    );
    let customer = class(&project, "Customer");

    for property in customer.properties() {
        let getters: Vec<_> = customer
            .methods()
            .filter(|m| m.is_getter() && accessed_property_name(&m.name) == property.name)
            .collect();
        let setters: Vec<_> = customer
            .methods()
            .filter(|m| m.setter_param().is_some_and(|p| p.name == property.name))
            .collect();

        assert_eq!(getters.len(), 1, "getter for {}", property.name);
        assert_eq!(setters.len(), 1, "setter for {}", property.name);
    }
    assert_eq!(customer.properties().count(), 4);
    assert_eq!(customer.methods().count(), 8);
}

#[test]
fn test_empty_properties_produce_bare_class() {
    let log = EventLog::default();
    let listener = log.clone();
    let project = generate("[classes.Marker.properties]\n", move |s| s.listener(listener));

    assert!(class(&project, "Marker").is_empty());
    assert!(log.entries().is_empty());
}

#[test]
fn test_declared_type_reaches_setter_doc() {
    let project = generate(
        r#"
        [classes.Order.properties]
        total = { type = "float" }
        customer = { type = "Entities\\Customer" }
        "#,
        |s| s.listener(DocListener),
    );
    let order = class(&project, "Order");

    let total = order.method("setTotal").unwrap();
    assert_eq!(total.setter_param().unwrap().ty, TypeHint::named("float"));
    assert_eq!(
        total.doc.as_ref().unwrap().find_tag("param").unwrap().value,
        "float $total"
    );

    let customer = order.method("setCustomer").unwrap();
    assert_eq!(
        customer.doc.as_ref().unwrap().find_tag("param").unwrap().value,
        "\\Entities\\Customer $customer"
    );
    assert_eq!(
        order.property("total").unwrap().doc.as_ref().unwrap().find_tag("var").unwrap().value,
        "mixed"
    );
}

#[test]
fn test_namespaced_class_slot() {
    let project = generate(
        r#"
        [classes."Entities\\User".properties]
        email = {}
        "#,
        |s| s,
    );

    let user = class(&project, "Entities\\User");
    assert_eq!(user.short_name(), "User");
    assert_eq!(user.namespace(), Some("Entities"));
}

#[test]
fn test_malformed_schema_text_is_rejected() {
    for schema in [
        "[classes.User]\nname = 1\n",
        "[classes.User.properties]\n\"first-name\" = {}\n",
        "[classes.class.properties]\nemail = {}\n",
        "[classes.User.properties]\nemail = { type = \"not a type\" }\n",
        "[classes.User.properties]\nemail = { kind = \"string\" }\n",
    ] {
        let err = schema.parse::<ConfigSource>().unwrap_err();
        assert!(matches!(err, Error::Schema(_)), "{schema:?} should be rejected");
    }
}

#[test]
fn test_malformed_built_schema_fails_before_any_event() {
    let log = EventLog::default();
    let schema = Schema::new()
        .class(
            "User",
            ClassDef::new()
                .property("email", PropertyDef::untyped())
                .property("name", PropertyDef::typed("string")),
        )
        .class("Post", ClassDef::new().property("title", PropertyDef::typed("int|bad")));
    let source = ConfigSource::new(schema).listener(log.clone());

    let mut project = GenerationProject::new();
    let err = source.generate(&mut project).unwrap_err();

    assert!(matches!(err, Error::Schema(_)));
    assert!(log.entries().is_empty());
    assert!(project.is_empty());
}

#[test]
fn test_listener_failure_aborts_generation() {
    struct RejectGetters;

    impl Listener for RejectGetters {
        fn name(&self) -> &'static str {
            "reject-getters"
        }

        fn phases(&self) -> &'static [Phase] {
            &[Phase::GetterGenerated]
        }

        fn on_generate_getter(&self, event: &mut GenerationEvent<'_>) -> Result<()> {
            Err(Error::invariant(self.name(), event.phase(), "getters are not allowed"))
        }
    }

    let source: ConfigSource = "[classes.User.properties]\nemail = {}\n".parse().unwrap();
    let source = source.listener(RejectGetters);
    let mut project = GenerationProject::new();

    let err = source.generate(&mut project).unwrap_err();

    assert!(matches!(
        err,
        Error::InvariantViolation { listener: "reject-getters", phase: Phase::GetterGenerated, .. }
    ));
    assert!(project.is_empty());
}

#[test]
fn test_docs_are_deterministic() {
    let schema = "[classes.User.properties]\nemail = {}\nage = { type = \"int\" }\n";
    let first = generate(schema, |s| s.listener(DocListener));
    let second = generate(schema, |s| s.listener(DocListener));

    assert_eq!(class(&first, "User"), class(&second, "User"));
}
