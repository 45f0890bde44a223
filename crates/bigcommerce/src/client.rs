use crate::domain::response::ApiResponse;
use reqwest::{
    Client, Method, RequestBuilder, StatusCode, Url,
    header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
};
use serde::de::DeserializeOwned;
use shared::{
    config::BigCommerceConfig,
    errors::{ApiError, ClientError},
};
use tracing::debug;

const AUTH_TOKEN_HEADER: &str = "x-auth-token";
const AUTH_CLIENT_HEADER: &str = "x-auth-client";

/// Outcome of one round trip that produced a response.
///
/// Exactly one of `data` and `api_error` carries information: on a non-success
/// status `data` stays at its default and `api_error` holds the payload.
#[derive(Debug)]
pub struct Exchange<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: T,
    pub api_error: ApiError,
}

/// Shared HTTP plumbing for every resource service.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(config: &BigCommerceConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url())
            .map_err(|e| ClientError::Config(format!("invalid API url: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(AUTH_TOKEN_HEADER),
            header_value(&config.auth_token, "auth token")?,
        );
        if let Some(client_id) = &config.client_id {
            headers.insert(
                HeaderName::from_static(AUTH_CLIENT_HEADER),
                header_value(client_id, "client id")?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `path` against the store's v2 root.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("invalid path {path:?}: {e}")))
    }

    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.endpoint(path)?;
        debug!("{method} {url}");
        Ok(self.client.request(method, url))
    }

    pub fn json_request<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<RequestBuilder, ClientError>
    where
        B: serde::Serialize + ?Sized,
    {
        Ok(self.request(method, path)?.json(body))
    }

    /// Sends `request` and sorts the reply into a success value or an API
    /// error payload. `Err` is reserved for transport-level failures: the
    /// request never completed, a success body could not be decoded, or a
    /// failure status came without a structured error body.
    pub async fn perform_request<T>(
        &self,
        request: RequestBuilder,
    ) -> Result<Exchange<T>, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        if status.is_success() {
            let data = if status == StatusCode::NO_CONTENT || body.is_empty() {
                T::default()
            } else {
                serde_json::from_slice(&body)
                    .map_err(|source| ClientError::Decode { status, source })?
            };

            return Ok(Exchange {
                status,
                headers,
                data,
                api_error: ApiError::default(),
            });
        }

        match ApiError::from_body(status, &body) {
            Some(api_error) => Ok(Exchange {
                status,
                headers,
                data: T::default(),
                api_error,
            }),
            None => Err(ClientError::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            }),
        }
    }
}

/// Picks the single error worth surfacing: a transport failure first, then a
/// non-empty API error, otherwise the decoded payload.
pub fn relevant_error<T>(
    outcome: Result<Exchange<T>, ClientError>,
) -> Result<ApiResponse<T>, ClientError> {
    let exchange = outcome?;

    if !exchange.api_error.is_empty() {
        return Err(ClientError::Api(exchange.api_error));
    }

    Ok(ApiResponse {
        status: exchange.status,
        headers: exchange.headers,
        data: exchange.data,
    })
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue, ClientError> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|_| ClientError::Config(format!("{what} is not a valid header value")))?;
    header.set_sensitive(true);
    Ok(header)
}
