use std::path::PathBuf;
use thiserror::Error;

/// Fatal: nothing can be ingested. Row-level problems are `RowError`s and
/// never surface here.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open expense source {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read expense source: {detail}")]
    Read { detail: String },
}
