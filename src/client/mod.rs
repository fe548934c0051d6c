//! Client layer: validates requests, drives the HTTP transport and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::domain::{
    ApiError, AppKey, CidList, CidType, MasterSecret, MsgId, PushPayload, PushResult,
    ReceivedReport, Schedule, ScheduleId, ScheduleResult, SmsPayload, SmsResult, ValidationError,
};

const DEFAULT_PUSH_ENDPOINT: &str = "https://api.jpush.cn/v3/push";
const DEFAULT_SCHEDULE_ENDPOINT: &str = "https://api.jpush.cn/v3/schedules";
const DEFAULT_REPORT_ENDPOINT: &str = "https://report.jpush.cn/v3/received";
const DEFAULT_CID_ENDPOINT: &str = "https://api.jpush.cn/v3/push/cid";
const DEFAULT_SMS_ENDPOINT: &str = "https://api.sms.jpush.cn/v1/messages";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_USER_AGENT: &str = concat!("jpush-rs/", env!("CARGO_PKG_VERSION"));

const APP_KEY_ENV: &str = "JPUSH_APP_KEY";
const MASTER_SECRET_ENV: &str = "JPUSH_MASTER_SECRET";

const CHARSET: &str = "UTF-8";
const CONTENT_TYPE_JSON: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
                HttpMethod::Delete => self.client.delete(&request.url),
            };
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Application credentials sent as HTTP Basic auth (`app_key:master_secret`).
pub struct Auth {
    app_key: AppKey,
    master_secret: MasterSecret,
}

impl Auth {
    /// Create credentials, validating that both parts are non-empty.
    pub fn new(
        app_key: impl Into<String>,
        master_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            app_key: AppKey::new(app_key)?,
            master_secret: MasterSecret::new(master_secret)?,
        })
    }

    /// Read credentials from `JPUSH_APP_KEY` and `JPUSH_MASTER_SECRET`.
    pub fn from_env() -> Result<Self, ValidationError> {
        let app_key = std::env::var(APP_KEY_ENV)
            .map_err(|_| ValidationError::Missing { field: APP_KEY_ENV })?;
        let master_secret = std::env::var(MASTER_SECRET_ENV).map_err(|_| {
            ValidationError::Missing {
                field: MASTER_SECRET_ENV,
            }
        })?;
        Self::new(app_key, master_secret)
    }

    pub fn app_key(&self) -> &AppKey {
        &self.app_key
    }

    fn authorization_header(&self) -> String {
        let credentials = format!(
            "{}:{}",
            self.app_key.as_str(),
            self.master_secret.as_str()
        );
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`JPushClient`].
///
/// Validation failures never reach the network. Nothing is retried.
pub enum JPushError {
    /// A request failed local checks before it was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JPush answered with a non-2xx status.
    #[error(transparent)]
    Api(ApiError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// A successful response body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// The request document could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A configured endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[source] url::ParseError),
}

impl JPushError {
    /// The service error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Endpoints {
    push: String,
    schedule: String,
    report: String,
    cid: String,
    sms: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            push: DEFAULT_PUSH_ENDPOINT.to_owned(),
            schedule: DEFAULT_SCHEDULE_ENDPOINT.to_owned(),
            report: DEFAULT_REPORT_ENDPOINT.to_owned(),
            cid: DEFAULT_CID_ENDPOINT.to_owned(),
            sms: DEFAULT_SMS_ENDPOINT.to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`JPushClient`].
///
/// Use this when you need to customize endpoints, the timeout, the user-agent,
/// or bring your own `reqwest::Client`.
pub struct JPushClientBuilder {
    auth: Auth,
    endpoints: Endpoints,
    timeout: Duration,
    user_agent: String,
    http_client: Option<reqwest::Client>,
}

impl JPushClientBuilder {
    /// Create a builder with the default endpoints, a 60 second timeout and the crate user-agent.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            endpoints: Endpoints::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            http_client: None,
        }
    }

    /// Override the `v3/push` endpoint URL.
    pub fn push_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.push = endpoint.into();
        self
    }

    /// Override the `v3/schedules` endpoint URL.
    pub fn schedule_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.schedule = endpoint.into();
        self
    }

    /// Override the `v3/received` endpoint URL.
    pub fn report_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.report = endpoint.into();
        self
    }

    /// Override the `v3/push/cid` endpoint URL.
    pub fn cid_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.cid = endpoint.into();
        self
    }

    /// Override the SMS `v1/messages` endpoint URL.
    pub fn sms_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoints.sms = endpoint.into();
        self
    }

    /// Set the timeout applied to each whole request.
    ///
    /// Ignored when a client is supplied through [`JPushClientBuilder::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS, pool settings).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build a [`JPushClient`].
    pub fn build(self) -> Result<JPushClient, JPushError> {
        let client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|err| JPushError::Transport(Box::new(err)))?,
        };

        Ok(JPushClient {
            auth: self.auth,
            endpoints: self.endpoints,
            user_agent: self.user_agent,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level JPush client.
///
/// Every call validates its input locally, serializes it to JSON and sends one
/// authenticated request. Non-2xx answers become [`JPushError::Api`].
/// The client holds no mutable state and can be shared between tasks.
pub struct JPushClient {
    auth: Auth,
    endpoints: Endpoints,
    user_agent: String,
    http: Arc<dyn HttpTransport>,
}

impl JPushClient {
    /// Create a client with the default endpoints and a 60 second timeout.
    pub fn new(auth: Auth) -> Result<Self, JPushError> {
        JPushClientBuilder::new(auth).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> JPushClientBuilder {
        JPushClientBuilder::new(auth)
    }

    /// Send a push (`POST /v3/push`).
    ///
    /// Errors:
    /// - [`JPushError::Validation`] when platform or audience is missing or empty,
    /// - [`JPushError::Api`] for non-2xx responses,
    /// - [`JPushError::Decode`] when the body lacks a `msg_id`.
    pub async fn push(&self, payload: &PushPayload) -> Result<PushResult, JPushError> {
        crate::domain::validate_push(payload)?;
        let body = crate::transport::encode_push_json(payload).map_err(JPushError::Encode)?;

        let response = self
            .execute(HttpMethod::Post, self.endpoints.push.clone(), Some(body))
            .await?;
        crate::transport::decode_push_json_response(&response)
            .map_err(|err| JPushError::Decode(Box::new(err)))
    }

    /// Create a scheduled push (`POST /v3/schedules`).
    pub async fn schedule_create(&self, schedule: &Schedule) -> Result<ScheduleResult, JPushError> {
        crate::domain::validate_schedule(schedule)?;
        let body = crate::transport::encode_schedule_json(schedule).map_err(JPushError::Encode)?;

        let response = self
            .execute(HttpMethod::Post, self.endpoints.schedule.clone(), Some(body))
            .await?;
        crate::transport::decode_schedule_json_response(&response)
            .map_err(|err| JPushError::Decode(Box::new(err)))
    }

    /// Fetch a schedule (`GET /v3/schedules?schedule_id=`).
    pub async fn schedule_get(&self, id: &str) -> Result<ScheduleResult, JPushError> {
        let id = ScheduleId::new(id)?;
        let url = with_query(
            &self.endpoints.schedule,
            &[(ScheduleId::FIELD, id.as_str())],
        )?;

        let response = self.execute(HttpMethod::Get, url, None).await?;
        crate::transport::decode_schedule_json_response(&response)
            .map_err(|err| JPushError::Decode(Box::new(err)))
    }

    /// Delete a schedule (`DELETE /v3/schedules?schedule_id=`). The response body is ignored.
    pub async fn schedule_delete(&self, id: &str) -> Result<(), JPushError> {
        let id = ScheduleId::new(id)?;
        let url = with_query(
            &self.endpoints.schedule,
            &[(ScheduleId::FIELD, id.as_str())],
        )?;

        self.execute(HttpMethod::Delete, url, None).await?;
        Ok(())
    }

    /// Pre-allocate client ids for idempotent pushes (`GET /v3/push/cid`).
    ///
    /// `count` must be within `1..=1000`.
    pub async fn cid_allocate(&self, count: u32, kind: CidType) -> Result<CidList, JPushError> {
        crate::domain::validate_cid_count(count)?;
        let count = count.to_string();
        let url = with_query(
            &self.endpoints.cid,
            &[("count", count.as_str()), (CidType::FIELD, kind.as_str())],
        )?;

        let response = self.execute(HttpMethod::Get, url, None).await?;
        crate::transport::decode_cid_json_response(&response)
            .map_err(|err| JPushError::Decode(Box::new(err)))
    }

    /// Fetch delivery counters for up to 100 pushes (`GET /v3/received`).
    pub async fn received_report(
        &self,
        msg_ids: &[MsgId],
    ) -> Result<Vec<ReceivedReport>, JPushError> {
        crate::domain::validate_msg_ids(msg_ids)?;
        let ids = crate::transport::encode_msg_ids(msg_ids);
        let url = with_query(&self.endpoints.report, &[(MsgId::FIELD, ids.as_str())])?;

        let response = self.execute(HttpMethod::Get, url, None).await?;
        crate::transport::decode_received_json_response(&response)
            .map_err(|err| JPushError::Decode(Box::new(err)))
    }

    /// Send a template SMS (`POST /v1/messages` on the SMS host).
    pub async fn send_sms(&self, payload: &SmsPayload) -> Result<SmsResult, JPushError> {
        crate::domain::validate_sms(payload)?;
        let body = crate::transport::encode_sms_json(payload).map_err(JPushError::Encode)?;

        let response = self
            .execute(HttpMethod::Post, self.endpoints.sms.clone(), Some(body))
            .await?;
        crate::transport::decode_sms_json_response(&response)
            .map_err(|err| JPushError::Decode(Box::new(err)))
    }

    async fn execute(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<String>,
    ) -> Result<String, JPushError> {
        let mut headers = vec![
            ("Authorization", self.auth.authorization_header()),
            ("Charset", CHARSET.to_owned()),
            ("User-Agent", self.user_agent.clone()),
        ];
        if body.is_some() {
            headers.push(("Content-Type", CONTENT_TYPE_JSON.to_owned()));
        }

        tracing::debug!(method = ?method, url = %url, "sending JPush request");
        let response = self
            .http
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await
            .map_err(JPushError::Transport)?;
        tracing::debug!(status = response.status, "received JPush response");

        if !(200..=299).contains(&response.status) {
            return Err(JPushError::Api(crate::transport::decode_api_error(
                response.status,
                &response.body,
            )));
        }

        Ok(response.body)
    }
}

fn with_query(endpoint: &str, params: &[(&str, &str)]) -> Result<String, JPushError> {
    url::Url::parse_with_params(endpoint, params)
        .map(String::from)
        .map_err(JPushError::InvalidEndpoint)
}
