use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::libs::error::{Error, Result};

pub const TEMPLATE_SUFFIX: &str = ".jinja";

/// Body written by [`TemplateStore::create`].
pub const SKELETON: &str = "<h2>{{ table }}</h2>

{% for col in columns %}
{{ col.name }}
{% endfor %}
";

/// A flat directory of template files, one per identifier.
///
/// No locking: concurrent writes to the same file are last-writer-wins.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Open the store, creating `dir` if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Trim and append the template suffix when missing.
    pub fn normalize_name(name: &str) -> String {
        let name = name.trim();
        if name.ends_with(TEMPLATE_SUFFIX) {
            name.to_string()
        } else {
            format!("{}{}", name, TEMPLATE_SUFFIX)
        }
    }

    fn path_of(&self, name: &str) -> Result<PathBuf> {
        let bare = name.trim_end_matches(TEMPLATE_SUFFIX);
        // a single path component, never the directory itself or its parent
        if bare.trim().is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(Error::InvalidTemplateName(name.to_string()));
        }
        Ok(self.dir.join(name))
    }

    /// File names in the store, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path_of(name)?;
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::TemplateNotFound(name.to_string()),
            _ => Error::Io(e),
        })
    }

    /// Overwrite `name` with `content` verbatim.
    pub fn write(&self, name: &str, content: &str) -> Result<()> {
        let path = self.path_of(name)?;
        fs::write(&path, content)?;
        tracing::info!(template = name, bytes = content.len(), "template saved");
        Ok(())
    }

    /// Create a template with the skeleton body. Returns the stored identifier.
    pub fn create(&self, name: &str) -> Result<String> {
        let name = Self::normalize_name(name);
        let path = self.path_of(&name)?;

        // create_new makes the existence check and the write one step
        let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::TemplateExists(name));
            }
            Err(e) => return Err(Error::Io(e)),
        };
        if let Err(e) = file.write_all(SKELETON.as_bytes()) {
            // an empty leftover would block every later create of this name
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(Error::Io(e));
        }

        tracing::info!(template = %name, "template created");
        Ok(name)
    }
}
