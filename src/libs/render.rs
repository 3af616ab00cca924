use std::path::Path;
use std::sync::Arc;

use minijinja::{Environment, ErrorKind, context, path_loader};
use parking_lot::RwLock;

use crate::libs::classify::map_type;
use crate::libs::error::{Error, Result};
use crate::libs::schema::TableMetadata;

/// Process-wide template environment over the template directory.
///
/// Built once at startup. Compiled templates are cached; call
/// [`Renderer::invalidate`] after a template file changes.
#[derive(Clone)]
pub struct Renderer {
    env: Arc<RwLock<Environment<'static>>>,
}

impl Renderer {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir.as_ref().to_path_buf()));
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_function("map_type", |declared_type: String| map_type(&declared_type));
        Self {
            env: Arc::new(RwLock::new(env)),
        }
    }

    /// Render template `name` with `table`, `columns`, `columns_no_pk` and
    /// the `map_type` function in scope.
    pub fn render(&self, name: &str, table: &TableMetadata) -> Result<String> {
        let env = self.env.read();
        let tmpl = env.get_template(name).map_err(|e| engine_error(name, e))?;
        tmpl.render(context! {
            table => &table.name,
            columns => &table.columns,
            columns_no_pk => table.without_primary_key(),
        })
        .map_err(|e| engine_error(name, e))
    }

    /// Drop cached templates so the next render reloads from disk.
    pub fn invalidate(&self) {
        self.env.write().clear_templates();
    }
}

fn engine_error(name: &str, e: minijinja::Error) -> Error {
    match e.kind() {
        ErrorKind::TemplateNotFound => Error::TemplateNotFound(name.to_string()),
        _ => Error::Render(e.to_string()),
    }
}
