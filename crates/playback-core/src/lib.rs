mod discovery;
pub use discovery::*;

mod fallback;
pub use fallback::*;

mod sources;
pub use sources::*;

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::str::FromStr;

// TmdbId
#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct TmdbId(pub(crate) u64);

impl TmdbId {
    pub fn new(id: u64) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }
}

impl Deref for TmdbId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for TmdbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// MediaKind
#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug, Serialize, Deserialize)]
pub enum MediaKind {
    #[serde(rename = "movie")]
    Movie,
    #[serde(rename = "tv", alias = "series")]
    Series,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "tv",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown media kind: {0}")]
pub struct UnknownMediaKind(String);

impl FromStr for MediaKind {
    type Err = UnknownMediaKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(MediaKind::Movie),
            "tv" | "series" => Ok(MediaKind::Series),
            _ => Err(UnknownMediaKind(s.to_string())),
        }
    }
}
