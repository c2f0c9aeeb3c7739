use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced around the rendering engine.
///
/// Rendering itself never fails; these cover reading input, strict decoding
/// and loading [`RenderOptions`](crate::RenderOptions).
#[derive(Debug, Error)]
pub enum CvmarkError {
    /// IO error while reading a document or writing rendered output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// IO error tied to a specific file.
    #[error("IO error on {}: {source}", path.display())]
    File {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// Document bytes were not valid UTF-8 and strict decoding was requested.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    /// Two inputs would be written to the same output file.
    #[error("{} and {} both render to {}", first.display(), second.display(), target.display())]
    OutputCollision {
        /// Output file both inputs map to
        target: PathBuf,
        /// Input that claimed the output first
        first: PathBuf,
        /// Input that collided with it
        second: PathBuf,
    },
    /// Options could not be parsed.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl CvmarkError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap an IO error with the path it happened on
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_message() {
        let err = CvmarkError::config("unknown field `colour`");
        assert_eq!(err.to_string(), "Invalid configuration: unknown field `colour`");
    }

    #[test]
    fn file_error_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CvmarkError::file("posts/hello.md", source);
        assert_eq!(err.to_string(), "IO error on posts/hello.md: missing");
    }

    #[test]
    fn collision_names_both_inputs() {
        let err = CvmarkError::OutputCollision {
            target: "site/post.html".into(),
            first: "a/post.md".into(),
            second: "b/post.md".into(),
        };
        assert_eq!(
            err.to_string(),
            "a/post.md and b/post.md both render to site/post.html"
        );
    }

    #[test]
    fn encoding_error_converts() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: CvmarkError = bad.into();
        assert!(matches!(err, CvmarkError::Encoding(_)));
    }
}
