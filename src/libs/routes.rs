//! HTTP routes for the generator page and template CRUD.
//!
//! - GET/POST /                  - pick a template, paste SQL, see output
//! - GET /templates              - list stored templates
//! - GET/POST /templates/new     - create a template from the skeleton
//! - GET/POST /templates/edit/{name} - view and overwrite a template

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, post, web};
use minijinja::context;
use serde::Deserialize;

use crate::libs::error::Result;
use crate::libs::introspect::introspect;
use crate::libs::pages::Pages;
use crate::libs::render::Renderer;
use crate::libs::store::TemplateStore;

/// Form bodies above the actix default of 16 KiB are normal for templates.
const FORM_LIMIT: usize = 1 << 20;

/// Shared state handed to every handler.
pub struct AppState {
    pub store: TemplateStore,
    pub renderer: Renderer,
    pub pages: Pages,
}

impl AppState {
    /// Build the process-wide renderer over the store's directory.
    pub fn new(store: TemplateStore) -> Result<Self> {
        let renderer = Renderer::new(store.dir());
        Ok(Self {
            store,
            renderer,
            pages: Pages::new()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub sql: String,
    pub template: String,
}

#[derive(Debug, Deserialize)]
pub struct NewTemplateForm {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct EditTemplateForm {
    pub content: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(FORM_LIMIT))
        .service(index)
        .service(generate)
        .service(templates_list)
        .service(new_template_form)
        .service(new_template)
        .service(edit_template_form)
        .service(edit_template);
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

fn redirect(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse> {
    let templates = state.store.list()?;
    let page = state.pages.render(
        "index.html",
        context! {
            templates,
            sql => "",
            selected => None::<String>,
            generated => None::<String>,
        },
    )?;
    Ok(html(page))
}

#[post("/")]
pub async fn generate(
    state: web::Data<AppState>,
    form: web::Form<GenerateForm>,
) -> Result<HttpResponse> {
    let GenerateForm { sql, template } = form.into_inner();

    let table = introspect(&sql).await?;
    let generated = state.renderer.render(&template, &table)?;
    tracing::debug!(template = %template, table = %table.name, "generated output");

    let templates = state.store.list()?;
    let page = state.pages.render(
        "index.html",
        context! {
            templates,
            sql,
            selected => template,
            generated => Some(generated),
        },
    )?;
    Ok(html(page))
}

#[get("/templates")]
pub async fn templates_list(state: web::Data<AppState>) -> Result<HttpResponse> {
    let files = state.store.list()?;
    let page = state.pages.render("templates_list.html", context! { files })?;
    Ok(html(page))
}

#[get("/templates/new")]
pub async fn new_template_form(state: web::Data<AppState>) -> Result<HttpResponse> {
    let page = state.pages.render("template_new.html", context! {})?;
    Ok(html(page))
}

#[post("/templates/new")]
pub async fn new_template(
    state: web::Data<AppState>,
    form: web::Form<NewTemplateForm>,
) -> Result<HttpResponse> {
    let name = state.store.create(&form.name)?;
    Ok(redirect(format!("/templates/edit/{}", urlencoding::encode(&name))))
}

#[get("/templates/edit/{name}")]
pub async fn edit_template_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let name = path.into_inner();
    let content = state.store.read(&name)?;
    let page = state
        .pages
        .render("template_edit.html", context! { name, content })?;
    Ok(html(page))
}

#[post("/templates/edit/{name}")]
pub async fn edit_template(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<EditTemplateForm>,
) -> Result<HttpResponse> {
    let name = path.into_inner();
    state.store.write(&name, &form.content)?;
    state.renderer.invalidate();
    Ok(redirect("/templates".to_string()))
}
