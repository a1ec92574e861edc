mod tmdb;

use std::ops::Deref;

pub use tmdb::*;

#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug)]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_path(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct SearchResult {
    pub item_id: ItemId,
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub media_type: MediaType,
}

pub type SearchResults = Vec<SearchResult>;

#[derive(Debug, PartialEq, Clone)]
pub struct Details {
    pub item_id: ItemId,
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub runtime: Option<u32>,
    pub number_of_seasons: Option<u32>,
    pub vote_average: Option<f32>,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Images {
    pub posters: Vec<String>,
    pub backdrops: Vec<String>,
}

#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug)]
pub struct ItemId(pub(crate) u64);

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId(value)
    }
}

impl Deref for ItemId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
