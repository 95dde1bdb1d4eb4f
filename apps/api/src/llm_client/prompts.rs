// Cross-cutting prompt fragments. Feature modules keep their own prompts.rs.

/// Appended to every system prompt that expects a machine-readable answer.
pub const JSON_ONLY_INSTRUCTION: &str = "Always respond in valid JSON format.";

/// Shared reading-level instruction for anything shown to students and parents.
pub const PLAIN_LANGUAGE_INSTRUCTION: &str = "Keep language simple - parents should understand easily. \
    Be practical and honest about Indian education system.";

/// Fills `{key}` placeholders in one left-to-right pass. Substituted values
/// are never scanned again, so user text that looks like a placeholder stays
/// literal. Braces that do not name a known key are kept as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let known = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (close, *value))
        });
        match known {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
