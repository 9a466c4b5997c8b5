use anyhow::Result;
use serde_json::Value;

use crate::scraper::IconRecord;

/// Split a dotted --merge-path argument into its key sequence. An omitted or
/// empty path means the document's top level.
pub fn merge_path_keys(merge_path: Option<&str>) -> Vec<&str> {
    match merge_path {
        Some(path) if !path.is_empty() => path.split('.').collect(),
        _ => Vec::new(),
    }
}

/// Descend into a JSON document along a sequence of object keys and return
/// the list found there. An empty key sequence resolves the document itself.
pub fn resolve_merge_path<'a>(data: &'a mut Value, keys: &[&str]) -> Result<&'a mut Vec<Value>> {
    let mut current = data;

    for key in keys {
        current = match current {
            Value::Object(map) => map.get_mut(*key).ok_or_else(|| {
                anyhow::anyhow!("Merge path key '{}' not found in document", key)
            })?,
            _ => {
                return Err(anyhow::anyhow!(
                    "Merge path key '{}' does not point into an object",
                    key
                ))
            }
        };
    }

    match current {
        Value::Array(list) => Ok(list),
        _ => Err(anyhow::anyhow!("Merge path does not resolve to a list")),
    }
}

/// Update the first list entry sharing each record's name in place, setting
/// its name and icon fields. Records with no match are skipped, not inserted.
pub fn merge_icons(existing: &mut [Value], records: &[IconRecord]) -> Result<()> {
    for record in records {
        let mut merged = false;

        for entry in existing.iter_mut() {
            let entry = entry.as_object_mut().ok_or_else(|| {
                anyhow::anyhow!("Merge target list contains a non-object entry")
            })?;

            if entry.get("name").and_then(Value::as_str) == Some(record.name.as_str()) {
                eprintln!("> Merging {}", record.name);
                entry.insert("name".to_string(), Value::String(record.name.clone()));
                entry.insert("icon".to_string(), Value::String(record.icon.clone()));
                merged = true;
                break;
            }
        }

        if !merged {
            eprintln!("> Skipping {}", record.name);
        }
    }

    Ok(())
}
