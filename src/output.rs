use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

/// Serialize a value as JSON with 4-space indentation.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);

    value
        .serialize(&mut serializer)
        .context("Failed to serialize output as JSON")?;

    String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")
}
