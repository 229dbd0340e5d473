use std::fmt::Display;
use std::path::PathBuf;



impl std::error::Error for IoError {}
impl std::error::Error for CopyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CopyError::SourceRead { cause, .. } => Some(cause),
            CopyError::DestinationWrite { cause, .. } => Some(cause),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum IoStage {
    Open,
    Metadata,
    Seek,
    Read,
    Write,
    Flush,
}

/// A failed file operation together with the stage it failed in.
#[derive(Debug)]
pub struct IoError {
    pub stage: IoStage,
    pub error: std::io::Error,
}

impl IoError {
    pub fn at(stage: IoStage) -> impl FnOnce(std::io::Error) -> IoError {
        move |error| IoError { stage, error }
    }
}

impl Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the stage is only interesting in logs, users get the os message
        write!(f, "{}", self.error)
    }
}



#[derive(Debug)]
pub enum CopyError {
    SourceRead { path: PathBuf, cause: IoError },
    DestinationWrite { path: PathBuf, cause: IoError },
}

impl CopyError {
    pub fn stage(&self) -> IoStage {
        match self {
            CopyError::SourceRead { cause, .. } => cause.stage,
            CopyError::DestinationWrite { cause, .. } => cause.stage,
        }
    }
}

impl Display for CopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyError::SourceRead { path, cause } => write!(f, "Error reading {}: {}", path.display(), cause),
            CopyError::DestinationWrite { path, cause } => write!(f, "Error writing {}: {}", path.display(), cause),
        }
    }
}
