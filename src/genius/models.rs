use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongResult {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistResult {
    pub name: String,
    pub id: u64,
}

/// Every Genius payload is wrapped in `{ "response": ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub response: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Hit {
    pub result: Song,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistSongsResponse {
    pub songs: Vec<Song>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Song {
    pub title: String,
    pub primary_artist: PrimaryArtist,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PrimaryArtist {
    pub name: String,
    pub id: u64,
}

impl From<Song> for SongResult {
    fn from(song: Song) -> Self {
        Self {
            title: song.title,
            artist: song.primary_artist.name,
        }
    }
}

impl From<PrimaryArtist> for ArtistResult {
    fn from(artist: PrimaryArtist) -> Self {
        Self {
            name: artist.name,
            id: artist.id,
        }
    }
}
