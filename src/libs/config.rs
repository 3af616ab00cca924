use std::path::PathBuf;

use serde::Serialize;

use crate::libs::logging::LogFormat;

/// Server configuration, from command-line flags or the environment.
#[derive(Debug, Clone, Serialize, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "SQLFORGE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SQLFORGE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory holding the template files, created if absent
    #[arg(short, long, env = "SQLFORGE_TEMPLATES", default_value = "template_storage")]
    pub templates: PathBuf,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
