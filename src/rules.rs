use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One endpoint replacement: every validated string table entry equal to
/// `old` is rewritten to `new`.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub old: String,
    pub new: String,
}

/// Load replacement rules from a JSON file: an array of
/// `{"old": "track.example.com", "new": "localhost"}` objects.
pub fn load_rules(path: &Path) -> Result<Vec<Rule>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    let rules: Vec<Rule> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse rules file: {}", path.display()))?;

    for rule in &rules {
        if rule.old.is_empty() {
            bail!("Rule with empty old string in {}", path.display());
        }
        if rule.new.len() > rule.old.len() {
            bail!(
                "Rule \"{}\" -> \"{}\" grows the string from {} to {} bytes; in-place patching cannot grow entries",
                rule.old,
                rule.new,
                rule.old.len(),
                rule.new.len()
            );
        }
    }

    Ok(rules)
}
