use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// A monitored artist as the backend knows it.
///
/// The wire form is `{artist_id, artist_name}`, which is both what the
/// backend lists and what the add/remove operations expect as request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artist {
    #[serde(rename = "artist_id")]
    id: String,
    #[serde(rename = "artist_name")]
    name: String,
}

impl Artist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One entry of a search result, in the backend's relevance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

impl Candidate {
    pub fn to_artist(&self) -> Artist {
        Artist::new(self.id.clone(), self.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListArtistsResponse {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub payload: Option<ListArtistsPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListArtistsPayload {
    #[serde(default)]
    pub artists: Option<ArtistsContainer>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistsContainer {
    #[serde(default)]
    pub current_artists_names: Vec<String>,
    #[serde(default)]
    pub current_artists_with_id: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchArtistRequest<'a> {
    pub artist_name: &'a str,
    pub access_token: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchArtistResponse {
    #[serde(default)]
    pub payload: Option<SearchArtistPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchArtistPayload {
    #[serde(rename = "artistSearchResultsList", default)]
    pub results: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WriteResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatestMusicRequest<'a> {
    pub artist_id: &'a str,
    pub artist_name: &'a str,
    pub access_token: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatestMusicResponse {
    #[serde(default)]
    pub payload: Option<LatestMusicPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestMusicPayload {
    #[serde(default)]
    pub last_album_details: Option<LastAlbumDetails>,
    #[serde(default)]
    pub last_single_details: Option<LastSingleDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LastAlbumDetails {
    #[serde(default)]
    pub last_album_name: Option<String>,
    #[serde(default)]
    pub last_album_release_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LastSingleDetails {
    #[serde(default)]
    pub last_single_name: Option<String>,
    #[serde(default)]
    pub last_single_release_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    pub release_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestMusic {
    pub album: Option<Release>,
    pub single: Option<Release>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub name: String,
}

#[derive(Tabled)]
pub struct CandidateTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub artist: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct LatestMusicTableRow {
    pub artist: String,
    pub album: String,
    pub single: String,
}
