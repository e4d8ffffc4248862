//! Documentation blocks attached to nodes.

use std::fmt;

/// A tag line inside a doc block, e.g. `@param string $email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTag {
    /// Tag name without the `@`.
    pub name: String,
    /// Everything after the tag name.
    pub value: String,
}

impl DocTag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for DocTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "@{}", self.name)
        } else {
            write!(f, "@{} {}", self.name, self.value)
        }
    }
}

/// A documentation comment: an optional summary followed by tags.
///
/// Renders as a `/** ... */` block. A blank ` *` line separates the summary
/// from the tags when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocBlock {
    /// First line of the comment.
    pub summary: Option<String>,
    /// Tags in declaration order.
    pub tags: Vec<DocTag>,
}

impl DocBlock {
    /// Create an empty doc block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the summary line.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Append a tag.
    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(DocTag::new(name, value));
        self
    }

    /// Find the first tag with the given name.
    pub fn find_tag(&self, name: &str) -> Option<&DocTag> {
        self.tags.iter().find(|t| t.name == name)
    }

    /// Returns true if there is neither a summary nor any tag.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.tags.is_empty()
    }

    /// The comment body, one entry per line, without the `/**`, ` * ` and `*/` decoration.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(summary) = &self.summary {
            lines.push(summary.clone());
            if !self.tags.is_empty() {
                lines.push(String::new());
            }
        }
        lines.extend(self.tags.iter().map(ToString::to_string));
        lines
    }
}

impl fmt::Display for DocBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/**")?;
        for line in self.lines() {
            if line.is_empty() {
                writeln!(f, " *")?;
            } else {
                writeln!(f, " * {line}")?;
            }
        }
        write!(f, " */")
    }
}
