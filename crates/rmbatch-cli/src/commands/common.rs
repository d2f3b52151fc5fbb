//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};

use rmbatch_tmpl::TemplateStore;

/// Open the template store: builtins plus an optional overlay directory.
pub fn open_store(templates_dir: Option<&str>) -> Result<TemplateStore> {
    let mut store = TemplateStore::builtin();
    if let Some(dir) = templates_dir {
        let path = Path::new(dir);
        if !path.is_dir() {
            anyhow::bail!("Template directory not found: {dir}");
        }
        let loaded = store
            .load_dir(path)
            .with_context(|| format!("Failed to load templates from {dir}"))?;
        tracing::info!(dir, loaded, "loaded template overlay directory");
    }
    Ok(store)
}
