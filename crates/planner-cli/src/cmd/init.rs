use anyhow::Context;
use planner_core::Presets;
use std::path::Path;

/// Scaffold the presets file. Idempotent: an existing file is left alone.
pub fn run(presets_path: &Path) -> anyhow::Result<()> {
    println!("Initializing planner presets");
    if presets_path.exists() {
        println!("  exists:  {}", presets_path.display());
    } else {
        Presets::default()
            .save(presets_path)
            .with_context(|| format!("failed to write {}", presets_path.display()))?;
        println!("  created: {}", presets_path.display());
    }
    Ok(())
}
