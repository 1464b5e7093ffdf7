//! Font descriptor loading and packing
//!
//! Format is picked from the file extension:
//! - `.json` / `.toml`: authored descriptors
//! - `.bin`: bitcode-packed descriptor

use std::path::Path;

use anyhow::{Context, Result, bail};
use nether_font::FontDescriptor;

pub fn load_descriptor(path: &Path) -> Result<FontDescriptor> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    let descriptor = match ext.as_str() {
        "json" => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse font JSON {}", path.display()))?
        }
        "toml" => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse font TOML {}", path.display()))?
        }
        "bin" => {
            let bytes =
                std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            bitcode::decode(&bytes)
                .with_context(|| format!("Failed to decode packed font {}", path.display()))?
        }
        _ => bail!(
            "Unsupported font format: {} (use .json, .toml, or .bin)",
            path.display()
        ),
    };

    Ok(descriptor)
}

/// Validate a descriptor and write it in packed form
pub fn pack_descriptor(input: &Path, output: &Path) -> Result<usize> {
    let descriptor = load_descriptor(input)?;
    let font = descriptor
        .build()
        .with_context(|| format!("Invalid font {}", input.display()))?;

    let bytes = bitcode::encode(&descriptor);
    std::fs::write(output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "Packed {} glyphs ({} slots) into {} bytes",
        font.symbols().len(),
        font.symbols().capacity(),
        bytes.len()
    );
    Ok(bytes.len())
}
