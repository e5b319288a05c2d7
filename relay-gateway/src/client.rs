//! Plain-TCP HTTP client for the backend analysis service.
//!
//! Built on the hyper-util legacy client with idle pooling disabled, so
//! every relayed request opens its own connection.

use async_trait::async_trait;
use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method, Request, Uri,
};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use relay_core::{BackendUrl, JobId};

use crate::{
    backend::{BackendError, BackendReply, ResultBackend},
    credential::Credential,
};

/// [`ResultBackend`] that issues `GET <base>/analysis/jobs/<id>/result`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: BackendUrl,
    client: Client<HttpConnector, Empty<Bytes>>,
}

impl HttpBackend {
    /// Create a client for the backend at `base`.
    #[must_use]
    pub fn new(base: BackendUrl) -> Self {
        let client = Client::builder(TokioExecutor::new())
            .pool_max_idle_per_host(0)
            .build_http();
        Self { base, client }
    }

    fn result_uri(&self, job_id: &JobId) -> Result<Uri, BackendError> {
        let url = self.base.result_url(job_id);
        url.as_str().parse().map_err(|e: axum::http::uri::InvalidUri| BackendError::InvalidUri {
            uri: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ResultBackend for HttpBackend {
    async fn fetch_result(
        &self,
        job_id: &JobId,
        credential: &Credential,
    ) -> Result<BackendReply, BackendError> {
        let uri = self.result_uri(job_id)?;

        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(AUTHORIZATION, credential.header_value().clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(Empty::<Bytes>::new())
            .map_err(|e| BackendError::Request(format!("build request: {e}")))?;

        let resp = self
            .client
            .request(req)
            .await
            .map_err(|e| BackendError::Request(format!("send request: {e}")))?;

        let status = resp.status();
        let body = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| BackendError::Body(e.to_string()))?
            .to_bytes();

        tracing::debug!(job_id = %job_id, status = %status, bytes = body.len(), "backend replied");

        Ok(BackendReply { status, body })
    }
}
