use anyhow::{Context, Result};
use std::path::Path;

use super::build::{generate_page, require_dir};

/// Regenerate a single page, leaving index.html untouched
pub fn run(file: &Path, output_dir: &Path) -> Result<()> {
    if !file.is_file() {
        anyhow::bail!("Markdown file does not exist: {}", file.display());
    }
    if file.extension().is_none_or(|ext| ext != "md") {
        anyhow::bail!("Expected a .md file, got {}", file.display());
    }
    require_dir(output_dir)?;

    println!("Processing: {}", file.display());
    let page = generate_page(file, output_dir)
        .with_context(|| format!("Failed to generate page for {}", file.display()))?;
    println!("✅ Generated: {}", output_dir.join(&page.filename).display());

    Ok(())
}
