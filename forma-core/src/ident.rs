//! Identifier rules for generated PHP code.

/// Words that cannot name a class.
///
/// Source: https://www.php.net/manual/en/reserved.php
pub const RESERVED_WORDS: &[&str] = &[
    // Keywords
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "final", "finally", "fn", "for", "foreach", "function", "global", "goto",
    "if", "implements", "include", "include_once", "instanceof", "insteadof", "interface",
    "isset", "list", "match", "namespace", "new", "or", "print", "private", "protected",
    "public", "readonly", "require", "require_once", "return", "static", "switch", "throw",
    "trait", "try", "unset", "use", "var", "while", "xor", "yield",
    // Reserved class names
    "bool", "false", "float", "int", "iterable", "mixed", "never", "null", "object", "parent",
    "self", "string", "true", "void",
];

/// Check if a word is reserved (case-insensitive, as PHP treats them)
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}

/// Validate a plain identifier: `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Returns `None` if valid, `Some(reason)` if not.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Validate a property name.
pub fn validate_property_name(name: &str) -> Option<&'static str> {
    if let Some(reason) = validate_identifier(name) {
        return Some(reason);
    }
    if name == "this" {
        return Some("'$this' cannot be redeclared");
    }
    None
}

/// Validate a class name, optionally namespace-qualified (`Entities\User`).
///
/// Reserved words are reported separately by [`is_reserved_word`] on
/// [`class_short_name`]; this only checks the shape.
pub fn validate_class_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if name.starts_with('\\') || name.ends_with('\\') {
        return Some("name cannot start or end with a namespace separator");
    }
    name.split('\\').find_map(|segment| {
        if segment.is_empty() {
            Some("name cannot contain consecutive namespace separators")
        } else {
            validate_identifier(segment)
        }
    })
}

/// The last segment of a namespace-qualified class name.
pub fn class_short_name(name: &str) -> &str {
    name.rsplit('\\').next().unwrap_or(name)
}

/// Validate a declared type: `[?][\]Segment(\Segment)*`.
pub fn validate_type_name(ty: &str) -> Option<&'static str> {
    let unqualified = ty.strip_prefix('?').unwrap_or(ty);
    let unqualified = unqualified.strip_prefix('\\').unwrap_or(unqualified);
    if unqualified.is_empty() {
        return Some("type cannot be empty");
    }
    validate_class_name(unqualified)
}
