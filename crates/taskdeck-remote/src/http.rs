//! HTTP implementation of the item store
//!
//! Wire contract (JSON bodies, `userId` naming on the wire):
//! - `GET    {base}/todos?userId={owner}` → `[Item]`
//! - `POST   {base}/todos`                → `Item`
//! - `PATCH  {base}/todos/{id}`           → ack
//! - `DELETE {base}/todos/{id}`           → ack
//!
//! Bodies are (de)serialized with serde_json directly so the charset-qualified
//! content type is sent and decode failures surface as [`Error::Json`].

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use taskdeck_core::prelude::*;
use taskdeck_core::{Item, ItemId, ItemPatch, NewItem, OwnerId};

use crate::store::ItemStore;

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";
const COLLECTION: &str = "todos";

/// Item store backed by the remote JSON/HTTP service
#[derive(Debug, Clone)]
pub struct HttpItemStore {
    client: Client,
    base_url: Url,
    owner_id: OwnerId,
}

impl HttpItemStore {
    /// Build a client for `base_url` scoped to `owner_id`.
    ///
    /// Fails if the URL cannot be parsed or cannot carry a path.
    pub fn new(base_url: &str, owner_id: OwnerId, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::invalid_url(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::invalid_url(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            owner_id,
        })
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/todos` or `{base}/todos/{id}`
    fn endpoint(&self, id: Option<ItemId>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::invalid_url(self.base_url.to_string()))?;
            segments.pop_if_empty().push(COLLECTION);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    fn with_json_body<T: serde::Serialize>(
        builder: RequestBuilder,
        body: &T,
    ) -> Result<RequestBuilder> {
        let bytes = serde_json::to_vec(body)?;
        Ok(builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(bytes))
    }

    /// Send a request, turning transport failures and non-2xx codes into errors
    async fn send(builder: RequestBuilder) -> Result<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::status(status.as_u16()))
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl ItemStore for HttpItemStore {
    async fn list(&self) -> Result<Vec<Item>> {
        let mut url = self.endpoint(None)?;
        url.query_pairs_mut()
            .append_pair("userId", &self.owner_id.to_string());
        debug!("GET {}", url);

        let response = Self::send(self.request(Method::GET, url)).await?;
        Self::decode(response).await
    }

    async fn create(&self, item: NewItem) -> Result<Item> {
        let url = self.endpoint(None)?;
        debug!("POST {} title={:?}", url, item.title);

        let builder = Self::with_json_body(self.request(Method::POST, url), &item)?;
        let response = Self::send(builder).await?;
        Self::decode(response).await
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<()> {
        let url = self.endpoint(Some(id))?;
        debug!("PATCH {} {:?}", url, patch);

        let builder = Self::with_json_body(self.request(Method::PATCH, url), &patch)?;
        Self::send(builder).await?;
        Ok(())
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        let url = self.endpoint(Some(id))?;
        debug!("DELETE {}", url);

        Self::send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one canned HTTP response on a loopback port.
    /// The join handle yields the raw request that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                    let content_length = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .map(|v| v.trim().parse::<usize>().unwrap())
                        .unwrap_or(0);
                    if buf.len() >= end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&buf).into_owned()
        });

        (format!("http://{}/students-api", addr), handle)
    }

    fn store(base: &str) -> HttpItemStore {
        HttpItemStore::new(base, 7, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_rejects_unparseable_url() {
        let err = HttpItemStore::new("not a url", 7, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_cannot_be_a_base_url() {
        let err = HttpItemStore::new("mailto:me@example.com", 7, Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let with = store("https://example.com/api/");
        let without = store("https://example.com/api");
        assert_eq!(
            with.endpoint(Some(3)).unwrap().as_str(),
            "https://example.com/api/todos/3"
        );
        assert_eq!(
            without.endpoint(None).unwrap().as_str(),
            "https://example.com/api/todos"
        );
    }

    #[tokio::test]
    async fn test_list_requests_owner_scope() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"id":1,"userId":7,"title":"a","completed":false},{"id":2,"userId":7,"title":"b","completed":true}]"#,
        )
        .await;

        let items = store(&base).list().await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /students-api/todos?userId=7 HTTP/1.1"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "b");
        assert!(items[1].completed);
    }

    #[tokio::test]
    async fn test_create_sends_body_and_returns_item() {
        let (base, server) = serve_once(
            "201 Created",
            r#"{"id":42,"userId":7,"title":"Buy milk","completed":false}"#,
        )
        .await;

        let created = store(&base)
            .create(NewItem::new("Buy milk", 7))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /students-api/todos HTTP/1.1"));
        assert!(request
            .to_lowercase()
            .contains("content-type: application/json; charset=utf-8"));
        assert!(request.contains(r#""title":"Buy milk""#));
        assert!(request.contains(r#""userId":7"#));
        assert!(request.contains(r#""completed":false"#));
        assert_eq!(created.id, 42);
    }

    #[tokio::test]
    async fn test_update_patches_single_field() {
        let (base, server) = serve_once("200 OK", r#"{"id":5,"completed":true}"#).await;

        store(&base)
            .update(5, ItemPatch::Completed(true))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("PATCH /students-api/todos/5 HTTP/1.1"));
        assert!(request
            .to_lowercase()
            .contains("content-type: application/json; charset=utf-8"));
        assert!(request.ends_with(r#"{"completed":true}"#));
    }

    #[tokio::test]
    async fn test_delete_targets_item() {
        let (base, server) = serve_once("200 OK", "1").await;

        store(&base).delete(9).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("DELETE /students-api/todos/9 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = store(&base).delete(9).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, Error::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_json_error() {
        let (base, server) = serve_once("200 OK", "<html>oops</html>").await;

        let err = store(&base).list().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = store(&format!("http://{}", addr)).list().await.unwrap_err();
        assert!(matches!(err, Error::Http { .. }));
        assert!(err.is_recoverable());
    }
}
