use std::time::Duration;

use docboard_logging::{board_debug, board_warn};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, Url};

use crate::types::{DocumentsPayload, ErrorBody};
use crate::{ApiError, DocumentRecord, FailureKind, ProcessItem};

const DOCUMENTS_PATH: &str = "documents";
const PROCESS_PATH: &str = "process-documents";
const PROPERTY_TYPE_PARAM: &str = "property_name_id";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 16 * 1024 * 1024,
        }
    }
}

/// Where the document rows come from.
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_documents(
        &self,
        property_type_id: Option<u64>,
    ) -> Result<Vec<DocumentRecord>, ApiError>;
}

/// Backend that accepts a batch of documents for processing. The call is
/// atomic from the caller's point of view.
#[async_trait::async_trait]
pub trait ProcessingService: Send + Sync {
    async fn submit(&self, batch: &[ProcessItem]) -> Result<(), ApiError>;
}

/// Both collaborators over one HTTP client.
#[derive(Debug, Clone)]
pub struct DocumentApi {
    settings: ClientSettings,
    base: Url,
    client: reqwest::Client,
}

impl DocumentApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let base = parse_base_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            base,
            client,
        })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    /// Reads the body, refusing anything over `max_bytes`.
    async fn read_body(&self, response: Response) -> Result<Vec<u8>, ApiError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ApiError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ApiError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    /// Non-2xx responses become errors carrying the backend's `message` when it sent one.
    async fn check_status(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let kind = FailureKind::HttpStatus(status.as_u16());
        let message = match self.read_body(response).await {
            Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.message)
                .filter(|message| !message.trim().is_empty()),
            Err(err) => {
                board_warn!("could not read error body: {}", err);
                None
            }
        };
        Err(ApiError::new(
            kind,
            message.unwrap_or_else(|| status.to_string()),
        ))
    }
}

#[async_trait::async_trait]
impl DocumentSource for DocumentApi {
    async fn fetch_documents(
        &self,
        property_type_id: Option<u64>,
    ) -> Result<Vec<DocumentRecord>, ApiError> {
        let mut url = self.endpoint(DOCUMENTS_PATH)?;
        if let Some(id) = property_type_id {
            url.query_pairs_mut()
                .append_pair(PROPERTY_TYPE_PARAM, &id.to_string());
        }
        board_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = self.check_status(response).await?;
        let body = self.read_body(response).await?;

        let payload: DocumentsPayload = serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        Ok(payload.into_records())
    }
}

#[async_trait::async_trait]
impl ProcessingService for DocumentApi {
    async fn submit(&self, batch: &[ProcessItem]) -> Result<(), ApiError> {
        let url = self.endpoint(PROCESS_PATH)?;
        let body = serde_json::to_vec(batch)
            .map_err(|err| ApiError::new(FailureKind::Encode, err.to_string()))?;
        board_debug!("POST {} ({} items)", url, batch.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        self.check_status(response).await?;
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    // Without a trailing slash `join` would replace the last path segment.
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized)
        .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::new(
            FailureKind::InvalidUrl,
            format!("unsupported scheme {other}"),
        )),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
