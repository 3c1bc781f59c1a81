//! Genius API client
//!
//! Every lookup goes through two endpoints:
//! - `GET /search?q=...` for lyrics, title and artist searches
//! - `GET /artists/{id}/songs` for an artist's first page of songs
//!
//! API Documentation: https://docs.genius.com

pub mod error;
pub mod models;

pub use error::GeniusError;
pub use models::{ArtistResult, SongResult};

use anyhow::Context;
use models::{ArtistSongsResponse, Envelope, SearchResponse};
use std::time::Duration;

/// Songs requested per artist listing; only the first page is ever fetched.
pub const ARTIST_SONGS_PER_PAGE: usize = 10;

#[derive(Debug, Clone)]
pub struct GeniusClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GeniusClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.genius.com";
    const USER_AGENT: &'static str = concat!("songseek/", env!("CARGO_PKG_VERSION"));

    pub fn new(
        base_url: &str,
        token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(Self::USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("build reqwest client")?;
        Ok(Self::with_http(http, base_url, token))
    }

    pub fn with_http(http: reqwest::Client, base_url: &str, token: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub async fn search_by_lyrics(&self, text: &str) -> Result<Vec<SongResult>, GeniusError> {
        let body = self.search_raw(text).await?;
        parse_search_songs(&body)
    }

    /// Search, keeping only hits whose title contains `text` (case-insensitive).
    pub async fn search_by_title(&self, text: &str) -> Result<Vec<SongResult>, GeniusError> {
        let body = self.search_raw(text).await?;
        Ok(filter_by_title(parse_search_songs(&body)?, text))
    }

    /// Primary artist of every hit, duplicates included.
    pub async fn search_artists(&self, name: &str) -> Result<Vec<ArtistResult>, GeniusError> {
        let body = self.search_raw(name).await?;
        parse_search_artists(&body)
    }

    pub async fn list_songs_by_artist(&self, id: u64) -> Result<Vec<SongResult>, GeniusError> {
        let url = format!("{}/artists/{}/songs", self.base_url, id);
        let per_page = ARTIST_SONGS_PER_PAGE.to_string();
        let body = self
            .get(&url, &[("per_page", per_page.as_str()), ("page", "1")])
            .await?;
        parse_artist_songs(&body)
    }

    async fn search_raw(&self, query: &str) -> Result<String, GeniusError> {
        let url = format!("{}/search", self.base_url);
        self.get(&url, &[("q", query)]).await
    }

    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<String, GeniusError> {
        tracing::debug!(url, ?params, "genius request");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(params)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(url, error = %e, "genius request failed");
                return Err(e.into());
            }
        };

        Ok(response.text().await?)
    }
}

pub fn parse_search_songs(body: &str) -> Result<Vec<SongResult>, GeniusError> {
    let envelope: Envelope<SearchResponse> = serde_json::from_str(body)?;
    Ok(envelope
        .response
        .hits
        .into_iter()
        .map(|hit| SongResult::from(hit.result))
        .collect())
}

pub fn parse_search_artists(body: &str) -> Result<Vec<ArtistResult>, GeniusError> {
    let envelope: Envelope<SearchResponse> = serde_json::from_str(body)?;
    Ok(envelope
        .response
        .hits
        .into_iter()
        .map(|hit| ArtistResult::from(hit.result.primary_artist))
        .collect())
}

/// Parse an artist's song page, capped at [`ARTIST_SONGS_PER_PAGE`].
pub fn parse_artist_songs(body: &str) -> Result<Vec<SongResult>, GeniusError> {
    let envelope: Envelope<ArtistSongsResponse> = serde_json::from_str(body)?;
    Ok(envelope
        .response
        .songs
        .into_iter()
        .take(ARTIST_SONGS_PER_PAGE)
        .map(SongResult::from)
        .collect())
}

/// The API ranks by lyrics as well as titles, so title search narrows client-side.
pub fn filter_by_title(songs: Vec<SongResult>, text: &str) -> Vec<SongResult> {
    let needle = text.to_lowercase();
    songs
        .into_iter()
        .filter(|s| s.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn hit(title: &str, artist: &str, id: u64) -> serde_json::Value {
        serde_json::json!({
            "type": "song",
            "index": "song",
            "result": {
                "id": 1,
                "title": title,
                "full_title": format!("{title} by {artist}"),
                "primary_artist": { "id": id, "name": artist, "url": "https://genius.com" }
            }
        })
    }

    fn search_body(hits: Vec<serde_json::Value>) -> String {
        serde_json::json!({ "meta": { "status": 200 }, "response": { "hits": hits } }).to_string()
    }

    fn songs_body(count: usize) -> String {
        let songs: Vec<_> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "title": format!("Song {i}"),
                    "primary_artist": { "id": 7, "name": "Pink Floyd" }
                })
            })
            .collect();
        serde_json::json!({ "response": { "songs": songs, "next_page": 2 } }).to_string()
    }

    /// Accept one connection, answer with a canned response, return the raw request.
    async fn serve_once(status: &'static str, body: String) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{addr}"), handle)
    }

    fn client(base_url: &str) -> GeniusClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        GeniusClient::with_http(http, base_url, "test-token")
    }

    #[test]
    fn test_parse_search_songs() {
        let body = search_body(vec![hit("Shine On You Crazy Diamond", "Pink Floyd", 7)]);
        let songs = parse_search_songs(&body).unwrap();
        assert_eq!(
            songs,
            vec![SongResult {
                title: "Shine On You Crazy Diamond".into(),
                artist: "Pink Floyd".into(),
            }]
        );
    }

    #[test]
    fn test_zero_hits_is_empty() {
        let body = search_body(vec![]);
        assert!(parse_search_songs(&body).unwrap().is_empty());
        assert!(parse_search_artists(&body).unwrap().is_empty());
        assert!(parse_artist_songs(&songs_body(0)).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_body_is_response_error() {
        assert!(matches!(
            parse_search_songs("<html>nope</html>"),
            Err(GeniusError::Response(_))
        ));
        // hit without primary_artist
        let body = r#"{"response":{"hits":[{"result":{"title":"x"}}]}}"#;
        assert!(matches!(parse_search_songs(body), Err(GeniusError::Response(_))));
        assert!(matches!(
            parse_artist_songs(r#"{"response":{}}"#),
            Err(GeniusError::Response(_))
        ));
    }

    #[test]
    fn test_filter_by_title_case_insensitive() {
        let songs = parse_search_songs(&search_body(vec![
            hit("Shine On You Crazy Diamond", "Pink Floyd", 7),
            hit("Wish You Were Here", "Pink Floyd", 7),
            hit("SHINE", "Take That", 9),
        ]))
        .unwrap();
        let filtered = filter_by_title(songs, "shine");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.title.to_lowercase().contains("shine")));
    }

    #[test]
    fn test_filter_by_title_non_ascii() {
        let songs = vec![
            SongResult { title: "밤편지".into(), artist: "아이유".into() },
            SongResult { title: "좋은 날".into(), artist: "아이유".into() },
        ];
        let filtered = filter_by_title(songs, "편지");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "밤편지");
    }

    #[test]
    fn test_search_artists_keeps_duplicates() {
        let body = search_body(vec![
            hit("Time", "Pink Floyd", 7),
            hit("Money", "Pink Floyd", 7),
            hit("Time", "Hans Zimmer", 11),
        ]);
        let artists = parse_search_artists(&body).unwrap();
        assert_eq!(artists.len(), 3);
        assert_eq!(artists[0], ArtistResult { name: "Pink Floyd".into(), id: 7 });
        assert_eq!(artists[1], artists[0]);
        assert_eq!(artists[2].id, 11);
    }

    #[test]
    fn test_artist_songs_capped() {
        assert_eq!(parse_artist_songs(&songs_body(25)).unwrap().len(), ARTIST_SONGS_PER_PAGE);
        assert_eq!(parse_artist_songs(&songs_body(3)).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_sends_bearer_and_query() {
        let body = search_body(vec![hit("Shine On You Crazy Diamond", "Pink Floyd", 7)]);
        let (base, server) = serve_once("200 OK", body).await;

        let songs = client(&base).search_by_lyrics("shine on").await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].artist, "Pink Floyd");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /search?q=shine+on "), "{request}");
        assert!(request.to_lowercase().contains("authorization: bearer test-token"));
    }

    #[tokio::test]
    async fn test_artist_songs_request_shape() {
        let (base, server) = serve_once("200 OK", songs_body(10)).await;

        let songs = client(&base).list_songs_by_artist(1421).await.unwrap();
        assert_eq!(songs.len(), 10);

        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /artists/1421/songs?per_page=10&page=1 "),
            "{request}"
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_request_error() {
        let (base, _server) = serve_once("401 Unauthorized", r#"{"meta":{"status":401}}"#.into()).await;
        let err = client(&base).search_by_title("anything").await.unwrap_err();
        assert!(matches!(err, GeniusError::Request(_)));
    }

    #[tokio::test]
    async fn test_unparseable_success_is_response_error() {
        let (base, _server) = serve_once("200 OK", "not json".into()).await;
        let err = client(&base).search_artists("anyone").await.unwrap_err();
        assert!(matches!(err, GeniusError::Response(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_request_error() {
        // Nothing listens on port 1.
        let c = client("http://127.0.0.1:1");
        assert!(matches!(c.search_by_lyrics("x").await, Err(GeniusError::Request(_))));
        assert!(matches!(c.search_by_title("x").await, Err(GeniusError::Request(_))));
        assert!(matches!(c.search_artists("x").await, Err(GeniusError::Request(_))));
        assert!(matches!(c.list_songs_by_artist(1).await, Err(GeniusError::Request(_))));
    }
}
