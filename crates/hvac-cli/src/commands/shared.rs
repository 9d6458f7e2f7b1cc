use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Read a JSON document from `path`, or from stdin when no path is given.
pub fn read_json<T>(path: Option<&Path>, what: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {what} from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| format!("failed to read {what} from stdin"))?;
            buf
        }
    };
    parse_json(&text, what)
}

pub fn parse_json<T>(text: &str, what: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text).with_context(|| format!("invalid {what} JSON"))
}
