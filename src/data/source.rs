use crate::data::geojson::Shape;
use crate::{MapError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

const USER_AGENT: &str = concat!("mapshift/", env!("CARGO_PKG_VERSION"));

/// Where the GeoJSON outline comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` are fetched over the network, anything else is a path
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }

    fn fetch_error(&self, reason: impl fmt::Display) -> MapError {
        MapError::Fetch {
            location: self.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Reads the raw document. One attempt, no timeout.
    pub async fn fetch_text(&self) -> Result<String> {
        match self {
            DataSource::File(path) => read_file(path)
                .await
                .map_err(|e| self.fetch_error(e)),
            DataSource::Url(url) => {
                let client = reqwest::Client::builder()
                    .user_agent(USER_AGENT)
                    .build()
                    .map_err(|e| self.fetch_error(e))?;
                let response = client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| self.fetch_error(e))?;
                if !response.status().is_success() {
                    return Err(self.fetch_error(format!("HTTP {}", response.status())));
                }
                response.text().await.map_err(|e| self.fetch_error(e))
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(feature = "tokio-runtime")]
async fn read_file(path: &Path) -> std::io::Result<String> {
    tokio::fs::read_to_string(path).await
}

#[cfg(not(feature = "tokio-runtime"))]
async fn read_file(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

/// Fetches and parses the outline. Nothing else in the viewer runs until this
/// resolves.
pub async fn load_shape(source: &DataSource) -> Result<Shape> {
    log::info!("loading shape from {}", source);
    let text = source.fetch_text().await?;
    let shape: Shape = text.parse()?;
    log::info!(
        "loaded {} with {} positions",
        shape.geometry.type_name(),
        shape.geometry.positions().len()
    );
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response on a local port
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/brazil.geojson", addr)
    }

    #[test]
    fn test_parse_source_kind() {
        assert_eq!(
            DataSource::parse("https://example.org/brazil.geojson"),
            DataSource::Url("https://example.org/brazil.geojson".to_string())
        );
        assert_eq!(
            DataSource::parse("HTTP://example.org/a.json"),
            DataSource::Url("HTTP://example.org/a.json".to_string())
        );
        assert_eq!(
            DataSource::parse(" data/brazil.geojson "),
            DataSource::File(PathBuf::from("data/brazil.geojson"))
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let source = DataSource::parse("no/such/file.geojson");
        match load_shape(&source).await {
            Err(MapError::Fetch { location, .. }) => assert_eq!(location, "no/such/file.geojson"),
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_error_status_is_fetch_error() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let source = DataSource::parse(&url);
        match load_shape(&source).await {
            Err(MapError::Fetch { location, reason }) => {
                assert_eq!(location, url);
                assert!(reason.contains("HTTP 404"), "reason was {}", reason);
            }
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_refused_connection_is_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = DataSource::parse(&format!("http://{}/brazil.geojson", addr));
        assert!(matches!(
            load_shape(&source).await,
            Err(MapError::Fetch { .. })
        ));
    }

    #[tokio::test]
    async fn test_url_document_is_parsed() {
        let url = serve_once(concat!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/geo+json\r\n",
            "Content-Length: 56\r\nConnection: close\r\n\r\n",
            r#"{"type":"Point","coordinates":[-47.9,-15.8,1100],"x":1}"#,
            "\n",
        ))
        .await;
        let shape = load_shape(&DataSource::parse(&url)).await.unwrap();
        assert_eq!(shape.geometry.positions(), vec![[-47.9, -15.8]]);
    }
}
