//! Template store: builtin templates plus optional directory overlays.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{TmplError, TmplResult};
use crate::template::{Scheduler, Template};

/// Extension recognized when loading templates from a directory.
const TEMPLATE_EXT: &str = "tpl";

/// Builtin template bodies shipped with the crate.
const BUILTIN: &[(&str, &str)] = &[
    (
        "pbs-phase3",
        include_str!("../../../templates/pbs-phase3.tpl"),
    ),
    ("pbs-a64fx", include_str!("../../../templates/pbs-a64fx.tpl")),
    (
        "slurm-phase3",
        include_str!("../../../templates/slurm-phase3.tpl"),
    ),
];

/// An immutable collection of templates, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: BTreeMap<String, Template>,
}

impl TemplateStore {
    /// An empty store.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The store of templates embedded in the crate.
    pub fn builtin() -> Self {
        let mut store = Self::empty();
        for (name, body) in BUILTIN {
            store.insert(Template::new(*name, *body));
        }
        store
    }

    /// Insert a template, replacing any existing one of the same name.
    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.name().to_string(), template);
    }

    /// Overlay every `*.tpl` file from a directory (file stem becomes the
    /// template name, overriding builtins on collision). Returns the
    /// number of templates loaded.
    pub fn load_dir(&mut self, dir: &Path) -> TmplResult<usize> {
        let mut loaded = 0;
        let mut entries: Vec<_> = fs::read_dir(dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|e| e.path())
            .collect();
        entries.sort();

        for path in entries {
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXT) {
                continue;
            }
            let template = Template::from_file(&path)?;
            tracing::debug!(name = template.name(), path = %path.display(), "loaded template");
            self.insert(template);
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> TmplResult<&Template> {
        self.templates
            .get(name)
            .ok_or_else(|| TmplError::MissingTemplate(name.to_string()))
    }

    /// Templates in name order.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    /// Template names in order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// Templates targeting the given scheduler.
    pub fn for_scheduler(&self, scheduler: Scheduler) -> Vec<&Template> {
        self.templates()
            .filter(|t| t.scheduler() == Some(scheduler))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_contents() {
        let store = TemplateStore::builtin();
        assert_eq!(
            store.names(),
            vec!["pbs-a64fx", "pbs-phase3", "slurm-phase3"]
        );
        assert_eq!(store.for_scheduler(Scheduler::Pbs).len(), 2);
        assert_eq!(store.for_scheduler(Scheduler::Slurm).len(), 1);
    }

    #[test]
    fn test_builtin_templates_follow_script_conventions() {
        let store = TemplateStore::builtin();
        for template in store.templates() {
            let body = template.body();
            assert!(body.starts_with("#!/bin/bash"), "{}", template.name());
            assert!(
                body.contains("cd \"{experiment_run_dir}\""),
                "{}",
                template.name()
            );
            assert!(body.trim_end().ends_with("{command}"), "{}", template.name());
        }
    }

    #[test]
    fn test_get_missing_template() {
        let store = TemplateStore::builtin();
        let err = store.get("pbs-phase4").unwrap_err();
        assert_eq!(err.to_string(), "Template not found: pbs-phase4");
    }

    #[test]
    fn test_load_dir_overlays_builtins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("pbs-phase3.tpl"),
            "#!/bin/bash\n#PBS -q override\n\ncd \"{experiment_run_dir}\"\n\n{command}\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("site-local.tpl"),
            "#!/bin/bash\n#SBATCH -q debug\n\ncd \"{experiment_run_dir}\"\n\n{command}\n",
        )
        .unwrap();
        // Non-template files are ignored.
        std::fs::write(dir.path().join("notes.txt"), "not a template\n").unwrap();

        let mut store = TemplateStore::builtin();
        let loaded = store.load_dir(dir.path()).unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get("pbs-phase3").unwrap().queue(), Some("override"));
        assert_eq!(
            store.get("site-local").unwrap().scheduler(),
            Some(Scheduler::Slurm)
        );
    }
}
