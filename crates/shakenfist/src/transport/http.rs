//! reqwest-backed transport.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, instrument, trace};

use crate::auth::AccessToken;
use crate::config::ClientConfig;
use crate::error::{Error, InvalidInputError};
use crate::types::BaseUrl;

use super::{ApiRequest, ResponseBody, Transport};

/// HTTP transport for API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpTransport {
    /// Build a transport from client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
        })
    }

    /// Use a caller-supplied reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: BaseUrl) -> Self {
        Self { client, base_url }
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    fn headers(&self, credential: Option<&AccessToken>) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = credential {
            let mut value =
                HeaderValue::from_str(&token.bearer()).map_err(|e| InvalidInputError::Header {
                    reason: e.to_string(),
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(
        skip(self, request, credential),
        fields(method = %request.method, path = %request.path)
    )]
    async fn send(
        &self,
        request: &ApiRequest,
        credential: Option<&AccessToken>,
    ) -> Result<ResponseBody, Error> {
        let url = self.base_url.join(&request.path);
        debug!(%url, "API request");

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .headers(self.headers(credential)?);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            return Ok(ResponseBody::from_response(response));
        }

        // Keep the status even when the body is cut short
        let body = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                debug!(error = %err, "unable to read error response body");
                String::new()
            }
        };

        Err(Error::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::transport::Method;

    fn transport() -> HttpTransport {
        let config =
            ClientConfig::from_url("http://server:13000", Credentials::new("testspace", "testkey"))
                .unwrap();
        HttpTransport::new(&config).unwrap()
    }

    #[test]
    fn headers_without_credential() {
        let headers = transport().headers(None).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn headers_with_credential() {
        let token = AccessToken::new("ABC123");
        let headers = transport().headers(Some(&token)).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer ABC123");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn rejects_token_with_newline() {
        let token = AccessToken::new("ABC\n123");
        let err = transport().headers(Some(&token)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    /// Serve one response whose body stops short of its Content-Length.
    async fn truncated_response_server(status_line: &'static str) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let head = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: 64\r\n\r\ntoken exp"
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        addr
    }

    #[tokio::test]
    async fn truncated_401_body_keeps_status() {
        let addr = truncated_response_server("401 Unauthorized").await;
        let base_url = BaseUrl::new(format!("http://{addr}")).unwrap();
        let transport = HttpTransport::with_client(reqwest::Client::new(), base_url);
        assert_eq!(transport.base_url().to_string(), format!("http://{addr}"));

        let token = AccessToken::new("ABC123");
        let err = transport
            .send(&ApiRequest::new(Method::Get, "instances"), Some(&token))
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert!(matches!(err, Error::UnexpectedStatus { status: 401, .. }));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let config = ClientConfig::from_url(
            &format!("http://{addr}"),
            Credentials::new("testspace", "testkey"),
        )
        .unwrap();
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport
            .send(&ApiRequest::new(Method::Get, "nodes"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
        assert_eq!(err.status(), None);
    }
}
