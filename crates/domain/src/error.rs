/// Shared error type used by the configuration layer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("parsing {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
