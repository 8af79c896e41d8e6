//! YAML front matter decoding.

use std::collections::HashMap;

use crate::error::Result;

/// Decoded front matter: top-level keys to YAML values.
pub type FrontMatter = HashMap<String, serde_yaml::Value>;

/// Decode the text captured between the markers.
///
/// Blank or null regions give an empty mapping. Anything the YAML
/// decoder rejects, including a non-mapping document, comes back as
/// its own error.
pub fn decode(region: &str) -> Result<FrontMatter> {
    if region.trim().is_empty() {
        return Ok(FrontMatter::new());
    }

    let parsed: Option<FrontMatter> = serde_yaml::from_str(region)?;

    Ok(parsed.unwrap_or_default())
}
