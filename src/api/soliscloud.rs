//! [SolisCloud](https://www.soliscloud.com/) monitoring platform client.
//!
//! All endpoints are POST and authenticated with the platform's shared-secret
//! scheme: an HMAC-SHA1 signature over the method, the body digest, the
//! content type, the date, and the resource path. See [`signing`].

mod error;
mod models;
mod signing;
#[cfg(test)]
pub mod testing;

use std::time::Duration;

use chrono::Utc;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, DATE},
};
use serde::Serialize;
use serde_json::Value;

pub use self::{
    error::ApiError,
    models::{InverterDayRequest, InverterListRequest, InverterSelector},
};
use crate::prelude::*;

pub const DEFAULT_BASE_URL: &str = "https://www.soliscloud.com:13333";

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_JSON_CHARSET: &str = "application/json;charset=UTF-8";

/// SolisCloud API client.
///
/// Owns the credential and a long-lived connection pool, and holds no other
/// state, so one instance can be shared across tasks. Each call performs
/// exactly one round trip with a freshly computed date and signature.
pub struct Api {
    client: Client,
    api_id: String,
    secret: Vec<u8>,
    base_url: String,
    content_type: &'static str,
}

impl Api {
    /// Build a client for the given credential.
    ///
    /// `use_json_charset` appends `;charset=UTF-8` to the content type, both
    /// in the header and inside the canonical signing string. The signing
    /// examples in the vendor documentation use the bare content type, but
    /// some deployments expect the charset suffix.
    pub fn try_new(
        api_id: &str,
        api_secret: &str,
        base_url: &str,
        use_json_charset: bool,
        timeout: Duration,
    ) -> Result<Self> {
        ensure!(!api_id.is_empty(), "the API identifier must not be empty");
        ensure!(!api_secret.is_empty(), "the API secret must not be empty");
        let client = Client::builder().user_agent("solwatch").timeout(timeout).build()?;
        Ok(Self {
            client,
            api_id: api_id.to_string(),
            secret: api_secret.as_bytes().to_vec(),
            base_url: base_url.trim_end_matches('/').to_string(),
            content_type: if use_json_charset {
                CONTENT_TYPE_JSON_CHARSET
            } else {
                CONTENT_TYPE_JSON
            },
        })
    }

    /// `/v1/api/inverterList`: page through the account's inverters.
    #[instrument(skip_all, fields(page_no = request.page_no, page_size = request.page_size))]
    pub async fn inverter_list(&self, request: &InverterListRequest) -> Result<Value, ApiError> {
        if request.page_no == 0 || request.page_size == 0 {
            return Err(ApiError::InvalidArgument("paging starts at page 1 with size 1"));
        }
        self.post("/v1/api/inverterList", request).await
    }

    /// `/v1/api/inverterDetail`: details of one inverter.
    #[instrument(skip_all)]
    pub async fn inverter_detail(&self, inverter: &InverterSelector) -> Result<Value, ApiError> {
        if inverter.is_empty() {
            return Err(ApiError::InvalidArgument("either an id or a serial number is required"));
        }
        self.post("/v1/api/inverterDetail", inverter).await
    }

    /// `/v1/api/inverterDay`: one day of five-minute telemetry.
    #[instrument(skip_all, fields(date = %request.date))]
    pub async fn inverter_day(&self, request: &InverterDayRequest) -> Result<Value, ApiError> {
        if request.inverter.is_empty() {
            return Err(ApiError::InvalidArgument("either an id or a serial number is required"));
        }
        self.post("/v1/api/inverterDay", request).await
    }

    /// Sign and send one POST, returning the decoded document unmodified.
    ///
    /// The payload is serialized exactly once: the same bytes feed the
    /// `Content-MD5` header, the canonical signing string, and the request
    /// body. Application-level `success` flags and error codes inside the
    /// document are the caller's business.
    #[instrument(skip_all, level = Level::DEBUG, fields(path = path))]
    async fn post<P: Serialize>(&self, path: &str, payload: &P) -> Result<Value, ApiError> {
        let body = serde_json::to_vec(payload).map_err(ApiError::Serialize)?;
        let content_md5 = signing::content_md5(&body);
        let date = signing::http_date(Utc::now());
        let canonical =
            signing::canonical_string("POST", &content_md5, self.content_type, &date, path);
        let signature = signing::sign(&self.secret, &canonical);

        let response = self
            .client
            .post(format!("{base_url}{path}", base_url = self.base_url))
            .header("Content-MD5", &content_md5)
            .header(CONTENT_TYPE, self.content_type)
            .header(DATE, &date)
            .header(AUTHORIZATION, format!("API {api_id}:{signature}", api_id = self.api_id))
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        let document: Value = serde_json::from_slice(&body).map_err(ApiError::Decode)?;
        debug!(?document, "call succeeded");
        Ok(document)
    }
}
