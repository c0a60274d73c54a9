//! Remote data provider collaborators: collection reads, remote search and
//! the add hook

use std::time::Duration;

use anyhow::{Context, Result};
use futures::future::{BoxFuture, FutureExt};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::entities::{Club, League, Player, ResultSet};
use super::error::FetchFailure;
use super::presenter::AddRequest;
use super::types::EntityKind;
use crate::{log_api_request, log_api_result};

/// Source of entity collections and remote search results
pub trait DataProvider: Send + Sync {
    /// Read the full collection of `kind`
    fn fetch_all(&self, kind: EntityKind) -> BoxFuture<'_, Result<ResultSet, FetchFailure>>;

    /// Search `kind` server-side for `term`
    fn search<'a>(
        &'a self,
        kind: EntityKind,
        term: &'a str,
    ) -> BoxFuture<'a, Result<ResultSet, FetchFailure>>;
}

/// Receiver of "add" actions from the search modal
pub trait AddHook: Send + Sync {
    fn request_add(&self, request: &AddRequest);
}

/// Add hook that only records the request in the log
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingAddHook;

impl AddHook for LoggingAddHook {
    fn request_add(&self, request: &AddRequest) {
        tracing::info!(
            kind = %request.kind,
            id = %request.record.id(),
            name = request.record.display_name(),
            "Add requested"
        );
    }
}

#[derive(Deserialize)]
struct SearchEnvelope<T> {
    results: Vec<T>,
}

/// HTTP/JSON data provider
#[derive(Clone)]
pub struct HttpProvider {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_body(&self, path: &str, query: &[(&str, &str)]) -> Result<String, FetchFailure> {
        let url = self.endpoint(path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchFailure::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }
        Ok(body)
    }

    async fn get_collection<T: DeserializeOwned>(&self, kind: EntityKind) -> Result<Vec<T>, FetchFailure> {
        log_api_request!("fetch_all", kind = %kind);
        let result = self
            .get_body(kind.collection_path(), &[])
            .await
            .and_then(|body| decode_collection(&body));
        log_api_result!("fetch_all", result);
        result
    }

    async fn get_search<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        term: &str,
    ) -> Result<Vec<T>, FetchFailure> {
        log_api_request!("search", kind = %kind, term);
        let path = format!("{}/search", kind.collection_path());
        let result = self
            .get_body(&path, &[("term", term)])
            .await
            .and_then(|body| decode_search(&body));
        log_api_result!("search", result);
        result
    }

    pub async fn fetch_all_players(&self) -> Result<Vec<Player>, FetchFailure> {
        self.get_collection(EntityKind::Player).await
    }

    pub async fn fetch_all_leagues(&self) -> Result<Vec<League>, FetchFailure> {
        self.get_collection(EntityKind::League).await
    }

    pub async fn fetch_all_clubs(&self) -> Result<Vec<Club>, FetchFailure> {
        self.get_collection(EntityKind::Club).await
    }

    pub async fn search_players(&self, term: &str) -> Result<Vec<Player>, FetchFailure> {
        self.get_search(EntityKind::Player, term).await
    }

    pub async fn search_leagues(&self, term: &str) -> Result<Vec<League>, FetchFailure> {
        self.get_search(EntityKind::League, term).await
    }

    pub async fn search_clubs(&self, term: &str) -> Result<Vec<Club>, FetchFailure> {
        self.get_search(EntityKind::Club, term).await
    }
}

impl DataProvider for HttpProvider {
    fn fetch_all(&self, kind: EntityKind) -> BoxFuture<'_, Result<ResultSet, FetchFailure>> {
        async move {
            match kind {
                EntityKind::Player => self.fetch_all_players().await.map(ResultSet::Players),
                EntityKind::League => self.fetch_all_leagues().await.map(ResultSet::Leagues),
                EntityKind::Club => self.fetch_all_clubs().await.map(ResultSet::Clubs),
            }
        }
        .boxed()
    }

    fn search<'a>(
        &'a self,
        kind: EntityKind,
        term: &'a str,
    ) -> BoxFuture<'a, Result<ResultSet, FetchFailure>> {
        async move {
            match kind {
                EntityKind::Player => self.search_players(term).await.map(ResultSet::Players),
                EntityKind::League => self.search_leagues(term).await.map(ResultSet::Leagues),
                EntityKind::Club => self.search_clubs(term).await.map(ResultSet::Clubs),
            }
        }
        .boxed()
    }
}

/// Collection endpoints answer with a bare JSON array
fn decode_collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchFailure> {
    serde_json::from_str(body).map_err(|e| FetchFailure::Decode(e.to_string()))
}

/// Search endpoints wrap their matches in `{"results": [...]}`
fn decode_search<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchFailure> {
    serde_json::from_str::<SearchEnvelope<T>>(body)
        .map(|envelope| envelope.results)
        .map_err(|e| FetchFailure::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entities::RecordId;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let provider = HttpProvider::new("http://localhost:8080/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(provider.endpoint("players"), "http://localhost:8080/api/players");
        assert_eq!(provider.endpoint("clubs/search"), "http://localhost:8080/api/clubs/search");
    }

    #[test]
    fn decodes_bare_collection() {
        let players: Vec<Player> = decode_collection(
            r#"[{"id": 1, "name": "Léo", "position": "GK"}, {"id": 2, "name": "Ana"}]"#,
        )
        .unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[1].id, RecordId::Number(2));
        assert!(players[1].position.is_none());
    }

    #[test]
    fn decodes_search_envelope() {
        let leagues: Vec<League> =
            decode_search(r#"{"results": [{"id": "GB1", "name": "Premier League"}]}"#).unwrap();
        assert_eq!(leagues[0].id, RecordId::Text("GB1".to_string()));
    }

    #[test]
    fn malformed_bodies_are_decode_failures() {
        let result: Result<Vec<Club>, _> = decode_search(r#"[{"id": 1}]"#);
        assert!(matches!(result, Err(FetchFailure::Decode(_))));
        let result: Result<Vec<Club>, _> = decode_collection("<html>");
        assert!(matches!(result, Err(FetchFailure::Decode(_))));
    }
}
