use minijinja::{Environment, Value};

use crate::libs::error::{Error, Result};

const PAGES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../assets/layout.html")),
    ("index.html", include_str!("../../assets/index.html")),
    ("templates_list.html", include_str!("../../assets/templates_list.html")),
    ("template_new.html", include_str!("../../assets/template_new.html")),
    ("template_edit.html", include_str!("../../assets/template_edit.html")),
];

/// HTML pages of the web UI, compiled into the binary.
///
/// Separate from [`crate::Renderer`]: these are auto-escaped `.html`
/// templates, never user-editable.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in PAGES {
            env.add_template(name, source)
                .map_err(|e| Error::Render(e.to_string()))?;
        }
        Ok(Self { env })
    }

    pub fn render(&self, name: &str, ctx: Value) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|t| t.render(ctx))
            .map_err(|e| Error::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn all_pages_compile() {
        let pages = Pages::new().unwrap();
        for &(name, _) in PAGES {
            pages.render(name, context! {}).unwrap();
        }
    }

    #[test]
    fn index_escapes_generated_output() {
        let pages = Pages::new().unwrap();
        let html = pages
            .render(
                "index.html",
                context! {
                    templates => vec!["form.jinja"],
                    selected => "form.jinja",
                    sql => "",
                    generated => Some("<input type=\"text\">"),
                },
            )
            .unwrap();
        assert!(html.contains("&lt;input type=&quot;text&quot;&gt;"));
        assert!(html.contains("<option value=\"form.jinja\" selected>"));
    }

    #[test]
    fn index_hides_output_section_without_generated() {
        let pages = Pages::new().unwrap();
        let html = pages
            .render(
                "index.html",
                context! { templates => Vec::<String>::new(), generated => None::<String> },
            )
            .unwrap();
        assert!(!html.contains("<h2>Output</h2>"));
    }
}
