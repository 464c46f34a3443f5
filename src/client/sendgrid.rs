//! SendGrid API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{SubuserApi, TeammateApi};
use super::models::{
    InviteTeammateRequest, ListBody, PendingInvitation, ResultEnvelope, Subuser, SubuserCreate,
    Teammate, TeammateScope, TeammateSubuser, TeammateSubuserAccess, UpdateTeammatePermissions,
    WebsiteAccessRequest,
};
use super::pagination::{Cursor, CursorStyle, PAGE_SIZE, Page};
use crate::config::parse_base_url;
use crate::error::{ApiError, ConfigError, ErrorPayload, FieldErrors, Result};

/// Client-side pacing: 10 requests per second
const RATE_LIMIT_PER_SECOND: u32 = 10;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// SendGrid API client
pub struct SendGridClient {
    http: HttpClient,
    base_url: Url,
    api_key: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl SendGridClient {
    /// Create a new client for `base_url` authenticating with `api_key`.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }

        let base_url = parse_base_url(base_url)?;

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let quota = Quota::per_second(
            NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        );

        Ok(Self {
            http,
            base_url,
            api_key,
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Endpoint URL with `limit` (and `offset` when given) query parameters.
    fn list_endpoint(&self, segments: &[&str], offset: Option<u64>) -> Result<Url> {
        let mut url = self.endpoint(segments)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &PAGE_SIZE.to_string());
            if let Some(offset) = offset {
                query.append_pair("offset", &offset.to_string());
            }
        }
        Ok(url)
    }

    /// Issue one authenticated request and map non-2xx statuses to errors.
    async fn send<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        debug!("{} {}", method, url.path());

        let mut request = self.http.request(method, url).bearer_auth(&self.api_key);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        check_status(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.send::<()>(Method::GET, url, None).await?;
        let data = response.json::<T>().await.map_err(|e| {
            ApiError::Transport(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    /// Issue a write request; the response body is not needed.
    async fn execute<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<()> {
        self.send(method, url, body).await?;
        Ok(())
    }
}

/// Translate a response status into the connector's error taxonomy.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
        StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
            let body = response.text().await.map_err(ApiError::from)?;
            Err(decode_field_errors(status, &body).into())
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Transport(format!("Unexpected status code {}: {}", status, body)).into())
        }
    }
}

/// Decode the `{errors: [{field, message}]}` payload of a 400/404.
pub(crate) fn decode_field_errors(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorPayload>(body) {
        Ok(payload) if !payload.errors.is_empty() => {
            ApiError::UpstreamValidation(FieldErrors(payload.errors))
        }
        Ok(_) => ApiError::Transport(format!("{} with an empty error payload", status)),
        Err(e) => ApiError::Transport(format!(
            "Failed to decode error payload for {}: {}",
            status, e
        )),
    }
}

#[async_trait]
impl TeammateApi for SendGridClient {
    // https://www.twilio.com/docs/sendgrid/api-reference/teammates/retrieve-all-teammates
    async fn list_teammates(&self, token: &str) -> Result<Page<Teammate>> {
        let offset = Cursor::decode(CursorStyle::Offset, token)?
            .offset()
            .unwrap_or(0);

        let url = self.list_endpoint(&["v3", "teammates"], Some(offset))?;
        let body: ResultEnvelope<Teammate> = self.get_json(url).await?;

        Page::from_offset(body.result, offset)
    }

    async fn get_teammate(&self, username: &str) -> Result<TeammateScope> {
        let url = self.endpoint(&["v3", "teammates", username])?;
        self.get_json(url).await
    }

    // https://www.twilio.com/docs/sendgrid/api-reference/teammates/retrieve-all-pending-teammates
    async fn list_pending_invitations(&self, token: &str) -> Result<Page<PendingInvitation>> {
        let offset = Cursor::decode(CursorStyle::Offset, token)?
            .offset()
            .unwrap_or(0);

        let url = self.list_endpoint(&["v3", "teammates", "pending"], Some(offset))?;
        let body: ListBody<PendingInvitation> = self.get_json(url).await?;

        let items = body.into_items();
        let next = Cursor::next_page(offset, items.len())?;
        Ok(Page::new(items, next))
    }

    async fn list_teammate_subuser_access(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Page<TeammateSubuser>> {
        let after = Cursor::decode(CursorStyle::AfterId, token)?.after();

        let mut url = self.list_endpoint(&["v3", "teammates", username, "subuser_access"], None)?;
        if let Some(after) = after {
            url.query_pairs_mut()
                .append_pair("after_subuser_id", &after.to_string());
        }

        let body: TeammateSubuserAccess = self.get_json(url).await?;
        let next = Cursor::after_id(body.metadata.next_params.after_subuser_id);

        Ok(Page::new(body.subuser_access, next))
    }

    // https://www.twilio.com/docs/sendgrid/api-reference/teammates/invite-teammate
    async fn invite_teammate(&self, request: &InviteTeammateRequest) -> Result<()> {
        let url = self.endpoint(&["v3", "teammates"])?;
        self.execute(Method::POST, url, Some(request)).await
    }

    // https://www.twilio.com/docs/sendgrid/api-reference/teammates/delete-teammate
    async fn delete_teammate(&self, username: &str) -> Result<()> {
        let url = self.endpoint(&["v3", "teammates", username])?;
        self.execute::<()>(Method::DELETE, url, None).await
    }

    // https://www.twilio.com/docs/sendgrid/api-reference/teammates/update-teammates-permissions
    async fn update_teammate_permissions(
        &self,
        username: &str,
        request: &UpdateTeammatePermissions,
    ) -> Result<()> {
        let url = self.endpoint(&["v3", "teammates", username])?;
        self.execute(Method::PATCH, url, Some(request)).await
    }
}

#[async_trait]
impl SubuserApi for SendGridClient {
    // https://www.twilio.com/docs/sendgrid/api-reference/subusers-api/list-all-subusers
    async fn list_subusers(&self, token: &str) -> Result<Page<Subuser>> {
        let offset = Cursor::decode(CursorStyle::Offset, token)?
            .offset()
            .unwrap_or(0);

        let url = self.list_endpoint(&["v3", "subusers"], Some(offset))?;
        let subusers: Vec<Subuser> = self.get_json(url).await?;

        Page::from_offset(subusers, offset)
    }

    // https://www.twilio.com/docs/sendgrid/api-reference/subusers-api/create-subuser
    async fn create_subuser(&self, request: &SubuserCreate) -> Result<()> {
        let url = self.endpoint(&["v3", "subusers"])?;
        self.execute(Method::POST, url, Some(request)).await
    }

    // https://www.twilio.com/docs/sendgrid/api-reference/subusers-api/delete-a-subuser
    async fn delete_subuser(&self, username: &str) -> Result<()> {
        let url = self.endpoint(&["v3", "subusers", username])?;
        self.execute::<()>(Method::DELETE, url, None).await
    }

    // https://www.twilio.com/docs/sendgrid/api-reference/subusers-api/enabledisable-website-access-to-a-subuser
    async fn set_subuser_disabled(&self, username: &str, disabled: bool) -> Result<()> {
        let url = self.endpoint(&["v3", "subusers", username, "website_access"])?;
        let body = WebsiteAccessRequest { disabled };
        self.execute(Method::PATCH, url, Some(&body)).await
    }
}
