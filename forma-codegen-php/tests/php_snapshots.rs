//! Snapshot tests for PHP code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use forma_codegen::{ConfigSource, DocListener, GenerationProject, Source};
use forma_codegen_php::{Generator, LanguageCodegen};

/// Generate PHP from a schema and return `(path, content)` pairs in slot order.
fn generate_files(schema_toml: &str, docs: bool) -> Vec<(String, String)> {
    let source: ConfigSource = schema_toml.parse().expect("Failed to parse schema");
    let source = if docs { source.listener(DocListener) } else { source };

    let mut project = GenerationProject::new();
    source.generate(&mut project).expect("Generation failed");

    Generator::new(&project)
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_entity_with_docs() {
    let files = generate_files(
        r#"
        [classes."Entities\\User".properties]
        email = {}
        age = { type = "?int" }
        "#,
        true,
    );

    let user = get_file(&files, "Entities/User.php").expect("User file not found");
    insta::assert_snapshot!("entity_with_docs", user);
}

#[test]
fn test_class_without_docs() {
    let files = generate_files(
        r#"
        [classes.Order.properties]
        customer = { type = "Entities\\Customer" }
        "#,
        false,
    );

    let order = get_file(&files, "Order.php").expect("Order file not found");
    insta::assert_snapshot!("class_without_docs", order);
}

#[test]
fn test_class_without_properties() {
    let files = generate_files("[classes.Marker.properties]\n", true);

    assert_eq!(
        get_file(&files, "Marker.php"),
        Some("<?php\n\nclass Marker\n{\n}\n")
    );
}

#[test]
fn test_one_file_per_class_in_schema_order() {
    let files = generate_files(
        r#"
        [classes.Zebra.properties]
        name = {}

        [classes."Entities\\Apple".properties]
        color = {}
        "#,
        true,
    );

    let paths: Vec<_> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths, ["Zebra.php", "Entities/Apple.php"]);
}

#[test]
fn test_qualified_type_is_absolute_in_signature_and_doc() {
    let files = generate_files(
        r#"
        [classes."Entities\\Order".properties]
        customer = { type = "Entities\\Customer" }
        "#,
        true,
    );

    let order = get_file(&files, "Entities/Order.php").expect("Order file not found");
    assert!(order.contains("     * @param \\Entities\\Customer $customer\n"));
    assert!(order.contains("    public function setCustomer(\\Entities\\Customer $customer)\n"));
}
