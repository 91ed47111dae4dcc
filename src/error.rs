use std::{net::SocketAddr, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't load site configuration: {0}")]
    Config(String),
    #[error("Couldn't bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Exported page missing for route {route}: expected {}", path.display())]
    MissingPage { route: String, path: PathBuf },
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| SiteError::Io { path, source }
    }
}
