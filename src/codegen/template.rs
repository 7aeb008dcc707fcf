//! Boundary trait for the concrete code-formatting of generated test files.

use std::fmt::Write as _;

use serde_json::Value;

use crate::store::action::ProducerId;
use crate::store::registry::ProducerCapture;

/// Placeholder the developer replaces with the module that defines their
/// hooks. The store only knows producer identities, not where the host
/// declares them.
pub const IMPORT_PATH_PLACEHOLDER: &str = "<HOOK MODULE PATH>";

/// Renders the boilerplate of a generated test file.
///
/// The serializer owns document structure (one suite, one import reference
/// and one test case per producer); a template owns the surrounding text.
/// Shells can substitute a template targeting another test framework.
pub trait TestTemplate: Send + Sync {
    /// Opening lines of the document, naming the suite.
    fn preamble(&self, suite_name: &str) -> String;

    /// Import-reference line naming one producer's hook.
    fn import_reference(&self, id: &ProducerId) -> String;

    /// One test-case body for one captured producer.
    fn test_case(&self, capture: &ProducerCapture) -> String;

    /// Closing lines of the document.
    fn postamble(&self) -> String {
        String::new()
    }
}

/// Renders a Rust test source file: one `#[test]` function per producer,
/// asserting the seed value and then each recorded transition in order.
pub struct RustHookTemplate;

impl TestTemplate for RustHookTemplate {
    fn preamble(&self, suite_name: &str) -> String {
        format!(
            "// Suite: {suite_name}\n\
             // Captured from a live session. Replace `{IMPORT_PATH_PLACEHOLDER}` with the\n\
             // module that defines your hooks before running.\n\
             \n\
             use serde_json::json;\n"
        )
    }

    fn import_reference(&self, id: &ProducerId) -> String {
        format!(
            "\nuse crate::{IMPORT_PATH_PLACEHOLDER}::{};\n",
            hook_ident(id)
        )
    }

    fn test_case(&self, capture: &ProducerCapture) -> String {
        let ident = hook_ident(&capture.id);
        let mut body = String::new();
        let _ = writeln!(body, "\n#[test]");
        let _ = writeln!(body, "fn {ident}_state_transitions() {{");
        let _ = writeln!(body, "    let mut hook = {ident}();");
        let _ = writeln!(
            body,
            "    assert_eq!(hook.value(), json!({}));",
            value_literal(&capture.seed)
        );
        for transition in &capture.transitions {
            let _ = writeln!(
                body,
                "    hook.apply(json!({}));",
                value_literal(&transition.payload)
            );
            let _ = writeln!(
                body,
                "    assert_eq!(hook.value(), json!({}));",
                value_literal(&transition.value)
            );
        }
        let _ = writeln!(body, "}}");
        body
    }
}

/// Map a producer id to a usable Rust identifier for the generated code.
fn hook_ident(id: &ProducerId) -> String {
    let mut ident: String = id
        .as_str()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

// Compact JSON text is valid inside the json! macro.
fn value_literal(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
