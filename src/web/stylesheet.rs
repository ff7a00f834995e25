use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The optional external stylesheet, read once at startup.
#[derive(Debug, Clone)]
pub enum Stylesheet {
    Loaded(String),
    Missing(PathBuf),
    Unreadable(PathBuf),
}

impl Stylesheet {
    /// Reads the stylesheet. Failure is never fatal; the page falls back to
    /// the built-in styles and shows a warning instead.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(css) => {
                info!(path = %path.display(), "loaded stylesheet");
                Self::Loaded(css)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "stylesheet not found, using inline defaults");
                Self::Missing(path.to_path_buf())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read stylesheet, using inline defaults");
                Self::Unreadable(path.to_path_buf())
            }
        }
    }

    pub fn css(&self) -> Option<&str> {
        match self {
            Self::Loaded(css) => Some(css),
            Self::Missing(_) | Self::Unreadable(_) => None,
        }
    }

    /// The banner shown on the page when the stylesheet could not be used.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Loaded(_) => None,
            Self::Missing(path) => Some(format!(
                "{} not found; using inline defaults.",
                display_name(path)
            )),
            Self::Unreadable(path) => Some(format!(
                "{} could not be read; using inline defaults.",
                display_name(path)
            )),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
