use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no CREATE TABLE statement found")]
    NoCreateTable,

    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template already exists")]
    TemplateExists(String),

    #[error("invalid template name: {0:?}")]
    InvalidTemplateName(String),

    /// Rendering failure, carried verbatim from the template engine.
    #[error("{0}")]
    Render(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NoCreateTable
            | Error::InvalidSchema(_)
            | Error::TemplateExists(_)
            | Error::InvalidTemplateName(_) => StatusCode::BAD_REQUEST,
            Error::TemplateNotFound(_) => StatusCode::NOT_FOUND,
            Error::Render(_) | Error::Database(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }
        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_template_is_a_client_error() {
        let err = Error::TemplateExists("widget.jinja".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Template already exists");
    }

    #[test]
    fn missing_template_maps_to_not_found() {
        let err = Error::TemplateNotFound("nope.jinja".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn render_message_is_verbatim() {
        let err = Error::Render("syntax error: unexpected end of input".into());
        assert_eq!(err.to_string(), "syntax error: unexpected end of input");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
