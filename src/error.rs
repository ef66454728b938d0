use thiserror::Error;

/// Run-level errors: anything that invalidates the whole call to `Check`.
///
/// Per-URL failures (transport errors, bad status codes, malformed HTML)
/// are never represented here -- they are recorded on a `CheckResult`
/// instead (see `work::CheckResult`) and never abort the crawl.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no seed URLs given")]
    NoSeeds,

    #[error("seed URL {0:?} is empty")]
    EmptySeed(String),

    #[error("seed URL {0:?} could not be parsed: {1}")]
    InvalidSeed(String, url::ParseError),

    #[error("seed URL {0:?} has no host")]
    MissingHost(String),

    #[error("HTTP client could not be built: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
