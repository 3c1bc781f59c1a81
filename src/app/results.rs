//! Turns query results into the line-oriented text shown in a result area.

use super::state::Tab;
use crate::genius::{ArtistResult, GeniusClient, GeniusError, SongResult};

pub const SONG_LIST_HEADER: &str = "노래 목록:";

pub fn song_line(song: &SongResult) -> String {
    format!("제목: {}, 아티스트: {}", song.title, song.artist)
}

/// Artist name followed by its indented song list (omitted when empty).
pub fn artist_block(artist: &ArtistResult, songs: &[SongResult]) -> Vec<String> {
    let mut lines = vec![format!("이름: {}", artist.name)];
    if !songs.is_empty() {
        lines.push(SONG_LIST_HEADER.to_string());
        lines.extend(songs.iter().map(|s| format!("  - {}", song_line(s))));
    }
    lines
}

pub fn error_message(err: &GeniusError) -> String {
    match err {
        GeniusError::Request(e) => format!("API 요청 중 오류가 발생했습니다: {e}"),
        GeniusError::Response(e) => format!("응답을 처리하는 중 오류가 발생했습니다: {e}"),
    }
}

/// Run the tab's search and render it.
///
/// Failures are handed to `report` and render as the tab's not-found message;
/// a failed per-artist song listing only drops that artist's song block.
pub async fn search_lines(
    genius: &GeniusClient,
    tab: Tab,
    query: &str,
    mut report: impl FnMut(&GeniusError),
) -> Vec<String> {
    let not_found = || vec![tab.not_found().to_string()];

    let songs = match tab {
        Tab::Lyrics => genius.search_by_lyrics(query).await,
        Tab::Title => genius.search_by_title(query).await,
        Tab::Artist => {
            let artists = match genius.search_artists(query).await {
                Ok(artists) => artists,
                Err(e) => {
                    report(&e);
                    return not_found();
                }
            };
            if artists.is_empty() {
                return not_found();
            }

            let mut lines = Vec::new();
            for artist in &artists {
                let songs = match genius.list_songs_by_artist(artist.id).await {
                    Ok(songs) => songs,
                    Err(e) => {
                        report(&e);
                        Vec::new()
                    }
                };
                lines.extend(artist_block(artist, &songs));
            }
            return lines;
        }
    };

    match songs {
        Ok(songs) if !songs.is_empty() => songs.iter().map(song_line).collect(),
        Ok(_) => not_found(),
        Err(e) => {
            report(&e);
            not_found()
        }
    }
}
