use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file '{}'", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config")]
    InvalidToml(#[from] toml::de::Error),
    #[error("bound {bound} exceeds the configured limit of {limit}")]
    BoundTooLarge { bound: usize, limit: usize },
}
