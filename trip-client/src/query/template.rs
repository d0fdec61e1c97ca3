//! Named query templates loaded from a directory.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use super::error::TemplateError;

/// A named query body containing `{token}` placeholders.
///
/// The body is stored verbatim; placeholders are not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    body: String,
}

impl Template {
    /// Create a template from its name and raw body.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Logical name, e.g. "trip".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw body text.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// All query templates, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, Template>,
}

impl TemplateStore {
    /// Load every file in `dir` as a template.
    ///
    /// The template name is the file name without its extension. Files are
    /// read in path order, so if two files share a stem the later path wins.
    /// Subdirectories are skipped.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(TemplateError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut paths = std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        paths.sort();

        let mut store = Self::default();
        for path in paths {
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!(path = %path.display(), "skipping template with non UTF-8 name");
                continue;
            };

            let body = std::fs::read_to_string(&path)?;
            debug!(name, path = %path.display(), "loaded query template");
            if let Some(previous) = store.insert(Template::new(name, body)) {
                warn!(name = previous.name(), "template replaced by later file");
            }
        }

        info!(dir = %dir.display(), templates = store.len(), "loaded query templates");
        Ok(store)
    }

    /// Add a template, returning any template it replaced.
    pub fn insert(&mut self, template: Template) -> Option<Template> {
        self.templates.insert(template.name.clone(), template)
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of loaded templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if no templates are loaded.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<Template> for TemplateStore {
    fn from_iter<I: IntoIterator<Item = Template>>(iter: I) -> Self {
        let mut store = Self::default();
        for template in iter {
            store.insert(template);
        }
        store
    }
}
