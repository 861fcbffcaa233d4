//! Class allocation and stylesheet emission.
//!
//! Every visited node maps to exactly one sanitized class name. Rules are
//! emitted in first-insertion order; classes that resolved to no
//! declarations are skipped rather than emitted as empty blocks.

/// A single `property: value` pair.
pub type Declaration = (String, String);

pub(crate) fn decl(property: &str, value: impl Into<String>) -> Declaration {
    (property.to_string(), value.into())
}

/// Sanitize a node name into a stable CSS class name.
///
/// Lowercases, collapses runs of non-alphanumerics into a single `-`, trims
/// leading/trailing dashes, truncates to 50 characters, and falls back to
/// `element` for names with no usable characters. Idempotent.
pub fn sanitize(name: &str) -> String {
    let mut class = String::new();
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            class.push(ch);
        } else if !class.is_empty() && !class.ends_with('-') {
            class.push('-');
        }
    }
    class.truncate(50);
    while class.ends_with('-') {
        class.pop();
    }
    if class.is_empty() {
        class.push_str("element");
    }
    class
}

/// Ordered class → declarations map.
///
/// Two nodes sharing a sanitized name overwrite one another's declarations;
/// the class keeps its original position in the emission order.
#[derive(Debug, Default)]
pub struct StyleSheet {
    rules: Vec<(String, Vec<Declaration>)>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the declarations for a class.
    pub fn set(&mut self, class: &str, declarations: Vec<Declaration>) {
        if let Some(rule) = self.rules.iter_mut().find(|(name, _)| name == class) {
            rule.1 = declarations;
        } else {
            self.rules.push((class.to_string(), declarations));
        }
    }

    /// Render the stylesheet, one rule block per class with declarations.
    pub fn render(&self) -> String {
        let mut css = String::new();
        for (class, declarations) in &self.rules {
            if declarations.is_empty() {
                continue;
            }
            css.push('.');
            css.push_str(class);
            css.push_str(" {\n");
            for (property, value) in declarations {
                css.push_str(&format!("  {property}: {value};\n"));
            }
            css.push_str("}\n\n");
        }
        // Single trailing newline
        if css.ends_with("\n\n") {
            css.pop();
        }
        css
    }
}
