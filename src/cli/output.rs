use crate::cli::options::OutputFormat;
use crate::error::OutputError;
use std::collections::BTreeMap;

/// Render resolved facts for stdout.
///
/// Text output prints a lone fact as its bare value and several facts as
/// `name => value` lines. Unset facts are absent from `facts` and print
/// nothing.
pub fn render_facts(
    facts: &BTreeMap<String, String>,
    format: OutputFormat,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => {
            if facts.len() == 1 {
                Ok(facts.values().next().cloned().unwrap_or_default())
            } else {
                Ok(facts
                    .iter()
                    .map(|(name, value)| format!("{name} => {value}"))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(facts)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(facts)?),
    }
}
