use anyhow::{Context, Result, bail};
use std::path::Path;

use ohmydoc::SAMPLE_DOCUMENT;

pub fn init_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    std::fs::write(path, SAMPLE_DOCUMENT)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✓ Created {}", path.display());
    println!("  Edit it, then run: ohmydoc render {}", path.display());
    Ok(())
}
