use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::api::{errors::ApiError, payload, ActorSource};
use crate::config::Config;
use crate::models::Actor;

/// Root endpoint response, used as a reachability probe
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    pub message: Option<String>,
    pub docs: Option<String>,
}

/// HTTP client for the Actor Showcase API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|_| ApiError::InvalidUrl(config.api_base_url.clone()))?;

        let client = Client::builder()
            .user_agent(config.http.user_agent.clone())
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET /actors
    pub async fn fetch_actors(&self) -> Result<Vec<Actor>, ApiError> {
        let url = self.endpoint("actors")?;
        let body = self.get_body(url).await?;
        let actors = payload::decode_actor_list(&body).map_err(|e| {
            warn!("Failed to decode actor listing: {:?}", e);
            e
        })?;
        info!("Fetched {} actors", actors.len());
        Ok(actors)
    }

    /// GET /actors/{id}
    pub async fn fetch_actor(&self, id: i64) -> Result<Actor, ApiError> {
        let url = self.endpoint(&format!("actors/{}", id))?;
        match self.get_body(url).await {
            Ok(body) => payload::decode_actor(&body),
            Err(ApiError::Status { status_code, .. }) if status_code == StatusCode::NOT_FOUND.as_u16() => {
                Err(ApiError::NotFound(id))
            }
            Err(e) => Err(e),
        }
    }

    /// GET / - succeeds when the API answers with a success status
    pub async fn check_status(&self) -> Result<ApiStatus, ApiError> {
        let body = self.get_body(self.base_url.clone()).await?;
        // The root document is informational, an unexpected shape still counts as reachable
        Ok(serde_json::from_slice(&body).unwrap_or(ApiStatus {
            message: None,
            docs: None,
        }))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        // Ensure a trailing slash so join() appends instead of replacing the last segment
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path)
            .map_err(|_| ApiError::InvalidUrl(format!("{}{}", base, path)))
    }

    async fn get_body(&self, url: Url) -> Result<Vec<u8>, ApiError> {
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(ApiError::Status {
                status_code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!("Reading response body from {} failed: {}", url, e);
            ApiError::Transport(e)
        })?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ActorSource for ApiClient {
    async fn list_actors(&self) -> Result<Vec<Actor>, ApiError> {
        self.fetch_actors().await
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    //! Minimal one-connection-per-response HTTP server for exercising the client

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve the given `(status line, body)` responses in order, one per connection.
    /// Returns the base URL.
    pub async fn serve(responses: Vec<(&'static str, String)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}", addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_server::serve;

    fn client_for(base_url: &str) -> ApiClient {
        let config = Config::default().with_overrides(Some(base_url), None);
        ApiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_actors_success() {
        let body = r#"[{"id":1,"name":"A","birth_year":1990,"country":"SE","oscars":0},
                       {"id":2,"name":"B","birth_year":1980,"country":"USA","oscars":2}]"#;
        let base = serve(vec![("200 OK", body.to_string())]).await;

        let actors = client_for(&base).fetch_actors().await.unwrap();
        assert_eq!(actors.len(), 2);
        assert_eq!(actors[1].oscars, 2);
    }

    #[tokio::test]
    async fn test_fetch_actors_status_error() {
        let base = serve(vec![("500 Internal Server Error", "{}".to_string())]).await;

        let err = client_for(&base).fetch_actors().await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_actors_decode_error() {
        let base = serve(vec![("200 OK", "<html>oops</html>".to_string())]).await;

        let err = client_for(&base).fetch_actors().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_actors_transport_error() {
        // Bind and drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{}", addr)).fetch_actors().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.to_string(), "Could not reach the actors API");
    }

    #[tokio::test]
    async fn test_fetch_actor_not_found() {
        let base = serve(vec![("404 Not Found", r#"{"detail":"Actor not found"}"#.to_string())]).await;

        let err = client_for(&base).fetch_actor(42).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_fetch_single_actor() {
        let body = r#"{"id":5,"name":"Katharine Hepburn","birth_year":1907,"country":"USA","oscars":4}"#;
        let base = serve(vec![("200 OK", body.to_string())]).await;

        let actor = client_for(&base).fetch_actor(5).await.unwrap();
        assert_eq!(actor.name, "Katharine Hepburn");
    }

    #[tokio::test]
    async fn test_check_status() {
        let body = r#"{"message":"Actor Showcase API","docs":"/docs"}"#;
        let base = serve(vec![("200 OK", body.to_string())]).await;

        let status = client_for(&base).check_status().await.unwrap();
        assert_eq!(status.message.as_deref(), Some("Actor Showcase API"));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client_for("http://example.com/api");
        assert_eq!(client.endpoint("actors").unwrap().as_str(), "http://example.com/api/actors");

        let client = client_for("http://example.com");
        assert_eq!(client.endpoint("actors/3").unwrap().as_str(), "http://example.com/actors/3");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = Config::default().with_overrides(Some("::nope::"), None);
        assert!(matches!(ApiClient::new(&config), Err(ApiError::InvalidUrl(_))));
    }
}
