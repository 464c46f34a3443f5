//! Mock SendGrid API client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! without making real API calls. Writes mutate the stored state, so
//! read-modify-write flows can be asserted end to end.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{SubuserApi, TeammateApi};
use super::models::{
    InviteTeammateRequest, PendingInvitation, Subuser, SubuserCreate, Teammate, TeammateScope,
    TeammateSubuser, UpdateTeammatePermissions,
};
use super::pagination::{Cursor, CursorStyle, PAGE_SIZE, Page};
use crate::error::{ApiError, FieldError, FieldErrors, Result};

/// Mock API client for testing.
///
/// Configure state via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockSendGridClient::new()
///     .with_teammates(vec![TeammateBuilder::new("alice").scope("mail.send").build()])
///     .await;
///
/// let page = mock.list_teammates("").await?;
/// assert_eq!(page.items.len(), 1);
/// ```
pub struct MockSendGridClient {
    /// Teammates with their scope lists
    teammates: Arc<Mutex<Vec<TeammateScope>>>,
    /// Outstanding invitations
    pending: Arc<Mutex<Vec<PendingInvitation>>>,
    /// Subusers to return from list_subusers
    subusers: Arc<Mutex<Vec<Subuser>>>,
    /// Per-teammate subuser access lists
    subuser_access: Arc<Mutex<HashMap<String, Vec<TeammateSubuser>>>>,
    /// Rows per page for every list operation
    page_size: Arc<Mutex<usize>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Errors returned by get_teammate for specific usernames - consumed on use
    detail_errors: Arc<Mutex<HashMap<String, ApiError>>>,
    /// Fail every call once this many calls have been made
    fail_after: Arc<Mutex<Option<usize>>>,
    /// Artificial latency for get_teammate
    detail_delay: Arc<Mutex<Option<Duration>>>,
    /// Detail requests currently in flight
    in_flight: Arc<AtomicUsize>,
    /// Highest observed number of concurrent detail requests
    max_in_flight: Arc<AtomicUsize>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockSendGridClient {
    fn default() -> Self {
        Self {
            teammates: Arc::new(Mutex::new(Vec::new())),
            pending: Arc::new(Mutex::new(Vec::new())),
            subusers: Arc::new(Mutex::new(Vec::new())),
            subuser_access: Arc::new(Mutex::new(HashMap::new())),
            page_size: Arc::new(Mutex::new(PAGE_SIZE)),
            error: Arc::new(Mutex::new(None)),
            detail_errors: Arc::new(Mutex::new(HashMap::new())),
            fail_after: Arc::new(Mutex::new(None)),
            detail_delay: Arc::new(Mutex::new(None)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_teammates: usize,
    pub get_teammate: usize,
    pub list_pending_invitations: usize,
    pub list_teammate_subuser_access: usize,
    pub invite_teammate: usize,
    pub delete_teammate: usize,
    pub update_teammate_permissions: usize,
    pub list_subusers: usize,
    pub create_subuser: usize,
    pub delete_subuser: usize,
    pub set_subuser_disabled: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_teammates
            + self.get_teammate
            + self.list_pending_invitations
            + self.list_teammate_subuser_access
            + self.invite_teammate
            + self.delete_teammate
            + self.update_teammate_permissions
            + self.list_subusers
            + self.create_subuser
            + self.delete_subuser
            + self.set_subuser_disabled
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "list_teammates", "update_teammate_permissions")
    pub method: String,
    /// Username path parameter, if any
    pub username: Option<String>,
    /// Continuation token for list calls
    pub token: Option<String>,
    /// Scope list sent by writes that carry one
    pub scopes: Option<Vec<String>>,
}

impl CapturedRequest {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            username: None,
            token: None,
            scopes: None,
        }
    }

    fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn scopes(mut self, scopes: &[String]) -> Self {
        self.scopes = Some(scopes.to_vec());
        self
    }
}

/// The 404 payload upstream returns for an unknown username.
pub fn not_found(field: &str, value: &str) -> ApiError {
    ApiError::UpstreamValidation(FieldErrors(vec![FieldError {
        field: Some(field.to_string()),
        message: format!("{} not found", value),
    }]))
}

impl MockSendGridClient {
    /// Create a new mock client with default (empty) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure teammates and their scope lists.
    pub async fn with_teammates(self, teammates: Vec<TeammateScope>) -> Self {
        *self.teammates.lock().await = teammates;
        self
    }

    /// Configure outstanding invitations.
    pub async fn with_pending(self, pending: Vec<PendingInvitation>) -> Self {
        *self.pending.lock().await = pending;
        self
    }

    /// Configure subusers to return from list_subusers.
    pub async fn with_subusers(self, subusers: Vec<Subuser>) -> Self {
        *self.subusers.lock().await = subusers;
        self
    }

    /// Configure the subusers a teammate may act on.
    pub async fn with_subuser_access(self, username: &str, access: Vec<TeammateSubuser>) -> Self {
        self.subuser_access
            .lock()
            .await
            .insert(username.to_string(), access);
        self
    }

    /// Configure how many rows each list page holds.
    pub async fn with_page_size(self, page_size: usize) -> Self {
        *self.page_size.lock().await = page_size.max(1);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure get_teammate to fail once for `username`.
    pub async fn with_detail_error(self, username: &str, error: ApiError) -> Self {
        self.detail_errors
            .lock()
            .await
            .insert(username.to_string(), error);
        self
    }

    /// Fail every call with a transport error once `calls` calls have been made.
    pub async fn fail_after(self, calls: usize) -> Self {
        *self.fail_after.lock().await = Some(calls);
        self
    }

    /// Delay each get_teammate response.
    pub async fn with_detail_delay(self, delay: Duration) -> Self {
        *self.detail_delay.lock().await = Some(delay);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Captured requests for a single method.
    pub async fn captured(&self, method: &str) -> Vec<CapturedRequest> {
        self.captured_requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    /// Current stored scopes of a teammate.
    pub async fn scopes_of(&self, username: &str) -> Option<Vec<String>> {
        self.teammates
            .lock()
            .await
            .iter()
            .find(|t| t.username() == username)
            .map(|t| t.scopes.clone())
    }

    pub async fn subuser(&self, username: &str) -> Option<Subuser> {
        self.subusers
            .lock()
            .await
            .iter()
            .find(|s| s.username == username)
            .cloned()
    }

    pub async fn pending_invitations(&self) -> Vec<PendingInvitation> {
        self.pending.lock().await.clone()
    }

    /// Highest number of concurrent get_teammate calls observed.
    pub fn max_concurrent_details(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Record the call, then return a pending or threshold error if one applies.
    async fn begin(&self, request: CapturedRequest, count: impl FnOnce(&mut CallCounts)) -> Result<()> {
        self.captured_requests.lock().await.push(request);

        // Check one-shot error first
        {
            let mut error = self.error.lock().await;
            if let Some(e) = error.take() {
                return Err(e.into());
            }
        }

        let total = {
            let mut counts = self.call_count.lock().await;
            count(&mut counts);
            counts.total()
        };

        if let Some(threshold) = *self.fail_after.lock().await {
            if total > threshold {
                return Err(ApiError::Transport("simulated outage".to_string()).into());
            }
        }

        Ok(())
    }

    async fn page_size(&self) -> usize {
        *self.page_size.lock().await
    }
}

/// Slice `rows` at the offset encoded in `token`.
///
/// Like the live API, only a short page ends the walk: a collection that is an
/// exact multiple of `page_size` costs one trailing empty page.
fn offset_page<T: Clone>(rows: &[T], token: &str, page_size: usize) -> Result<Page<T>> {
    let offset = Cursor::decode(CursorStyle::Offset, token)?
        .offset()
        .unwrap_or(0);

    let items: Vec<T> = rows
        .iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(page_size)
        .cloned()
        .collect();
    let next = if items.len() < page_size {
        Cursor::None
    } else {
        Cursor::Offset(offset + items.len() as u64)
    };

    Ok(Page::new(items, next))
}

// ============================================================================
// TeammateApi Implementation
// ============================================================================

#[async_trait]
impl TeammateApi for MockSendGridClient {
    async fn list_teammates(&self, token: &str) -> Result<Page<Teammate>> {
        self.begin(CapturedRequest::new("list_teammates").token(token), |c| {
            c.list_teammates += 1
        })
        .await?;

        let page_size = self.page_size().await;
        let rows: Vec<Teammate> = self
            .teammates
            .lock()
            .await
            .iter()
            .map(|t| t.teammate.clone())
            .collect();

        offset_page(&rows, token, page_size)
    }

    async fn get_teammate(&self, username: &str) -> Result<TeammateScope> {
        self.begin(CapturedRequest::new("get_teammate").username(username), |c| {
            c.get_teammate += 1
        })
        .await?;

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        let delay = *self.detail_delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let injected = self.detail_errors.lock().await.remove(username);
        let result: Result<TeammateScope> = match injected {
            Some(error) => Err(error.into()),
            None => self
                .teammates
                .lock()
                .await
                .iter()
                .find(|t| t.username() == username)
                .cloned()
                .ok_or_else(|| not_found("username", username).into()),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn list_pending_invitations(&self, token: &str) -> Result<Page<PendingInvitation>> {
        self.begin(
            CapturedRequest::new("list_pending_invitations").token(token),
            |c| c.list_pending_invitations += 1,
        )
        .await?;

        let page_size = self.page_size().await;
        let rows = self.pending.lock().await.clone();
        offset_page(&rows, token, page_size)
    }

    async fn list_teammate_subuser_access(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Page<TeammateSubuser>> {
        self.begin(
            CapturedRequest::new("list_teammate_subuser_access")
                .username(username)
                .token(token),
            |c| c.list_teammate_subuser_access += 1,
        )
        .await?;

        let after = Cursor::decode(CursorStyle::AfterId, token)?
            .after()
            .unwrap_or(0);
        let page_size = self.page_size().await;

        let mut rows = self
            .subuser_access
            .lock()
            .await
            .get(username)
            .cloned()
            .unwrap_or_default();
        rows.sort_by_key(|s| s.id);

        let remaining: Vec<TeammateSubuser> = rows.into_iter().filter(|s| s.id > after).collect();
        let has_more = remaining.len() > page_size;
        let items: Vec<TeammateSubuser> = remaining.into_iter().take(page_size).collect();

        let next = if has_more {
            Cursor::after_id(items.last().map(|s| s.id))
        } else {
            Cursor::None
        };

        Ok(Page::new(items, next))
    }

    async fn invite_teammate(&self, request: &InviteTeammateRequest) -> Result<()> {
        self.begin(
            CapturedRequest::new("invite_teammate").scopes(&request.scopes),
            |c| c.invite_teammate += 1,
        )
        .await?;

        let mut pending = self.pending.lock().await;
        let token = format!("invite-{}", pending.len() + 1);
        pending.push(PendingInvitation {
            token,
            email: request.email.clone(),
            scopes: request.scopes.clone(),
            is_admin: request.is_admin,
            ..Default::default()
        });

        Ok(())
    }

    async fn delete_teammate(&self, username: &str) -> Result<()> {
        self.begin(
            CapturedRequest::new("delete_teammate").username(username),
            |c| c.delete_teammate += 1,
        )
        .await?;

        let mut teammates = self.teammates.lock().await;
        let initial_len = teammates.len();
        teammates.retain(|t| t.username() != username);

        if teammates.len() == initial_len {
            return Err(not_found("username", username).into());
        }

        Ok(())
    }

    async fn update_teammate_permissions(
        &self,
        username: &str,
        request: &UpdateTeammatePermissions,
    ) -> Result<()> {
        self.begin(
            CapturedRequest::new("update_teammate_permissions")
                .username(username)
                .scopes(&request.scopes),
            |c| c.update_teammate_permissions += 1,
        )
        .await?;

        let mut teammates = self.teammates.lock().await;
        let teammate = teammates
            .iter_mut()
            .find(|t| t.username() == username)
            .ok_or_else(|| not_found("username", username))?;

        teammate.scopes = request.scopes.clone();
        teammate.teammate.is_admin = request.is_admin;

        Ok(())
    }
}

// ============================================================================
// SubuserApi Implementation
// ============================================================================

#[async_trait]
impl SubuserApi for MockSendGridClient {
    async fn list_subusers(&self, token: &str) -> Result<Page<Subuser>> {
        self.begin(CapturedRequest::new("list_subusers").token(token), |c| {
            c.list_subusers += 1
        })
        .await?;

        let page_size = self.page_size().await;
        let rows = self.subusers.lock().await.clone();
        offset_page(&rows, token, page_size)
    }

    async fn create_subuser(&self, request: &SubuserCreate) -> Result<()> {
        self.begin(
            CapturedRequest::new("create_subuser").username(&request.username),
            |c| c.create_subuser += 1,
        )
        .await?;

        let mut subusers = self.subusers.lock().await;
        if subusers.iter().any(|s| s.username == request.username) {
            return Err(ApiError::UpstreamValidation(FieldErrors(vec![FieldError {
                field: Some("username".to_string()),
                message: "username exists".to_string(),
            }]))
            .into());
        }

        let id = subusers.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        subusers.push(Subuser {
            id,
            username: request.username.clone(),
            email: request.email.clone(),
            disabled: false,
        });

        Ok(())
    }

    async fn delete_subuser(&self, username: &str) -> Result<()> {
        self.begin(
            CapturedRequest::new("delete_subuser").username(username),
            |c| c.delete_subuser += 1,
        )
        .await?;

        let mut subusers = self.subusers.lock().await;
        let initial_len = subusers.len();
        subusers.retain(|s| s.username != username);

        if subusers.len() == initial_len {
            return Err(not_found("username", username).into());
        }

        Ok(())
    }

    async fn set_subuser_disabled(&self, username: &str, disabled: bool) -> Result<()> {
        self.begin(
            CapturedRequest::new("set_subuser_disabled").username(username),
            |c| c.set_subuser_disabled += 1,
        )
        .await?;

        let mut subusers = self.subusers.lock().await;
        let subuser = subusers
            .iter_mut()
            .find(|s| s.username == username)
            .ok_or_else(|| not_found("username", username))?;
        subuser.disabled = disabled;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{SubuserBuilder, TeammateBuilder, access_entry};
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockSendGridClient::new();

        let page = mock.list_teammates("").await.unwrap();
        assert!(page.items.is_empty());
        assert!(page.is_last());

        let page = mock.list_subusers("").await.unwrap();
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_paginates_by_offset() {
        let mock = MockSendGridClient::new()
            .with_teammates(
                (0..5)
                    .map(|i| TeammateBuilder::new(format!("user{}", i)).build())
                    .collect(),
            )
            .await
            .with_page_size(2)
            .await;

        let first = mock.list_teammates("").await.unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.next_token, "2");

        let last = mock.list_teammates("4").await.unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(last.is_last());
    }

    #[tokio::test]
    async fn test_mock_client_full_last_page_needs_one_more_request() {
        let mock = MockSendGridClient::new()
            .with_teammates(
                (0..4)
                    .map(|i| TeammateBuilder::new(format!("user{}", i)).build())
                    .collect(),
            )
            .await
            .with_page_size(2)
            .await;

        let second = mock.list_teammates("2").await.unwrap();
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.next_token, "4");

        let trailing = mock.list_teammates("4").await.unwrap();
        assert!(trailing.items.is_empty());
        assert!(trailing.is_last());
    }

    #[tokio::test]
    async fn test_mock_client_rejects_bad_token() {
        let mock = MockSendGridClient::new();
        assert!(matches!(
            mock.list_subusers("xyz").await,
            Err(Error::InvalidCursor(_))
        ));
    }

    #[tokio::test]
    async fn test_mock_client_subuser_access_after_id() {
        let mock = MockSendGridClient::new()
            .with_subuser_access(
                "alice",
                vec![access_entry(3, "c"), access_entry(1, "a"), access_entry(2, "b")],
            )
            .await
            .with_page_size(2)
            .await;

        let first = mock.list_teammate_subuser_access("alice", "").await.unwrap();
        assert_eq!(first.items.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(first.next_token, "2");

        let second = mock
            .list_teammate_subuser_access("alice", &first.next_token)
            .await
            .unwrap();
        assert_eq!(second.items[0].id, 3);
        assert!(second.is_last());
    }

    #[tokio::test]
    async fn test_mock_client_with_error_is_one_shot() {
        let mock = MockSendGridClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(matches!(
            mock.list_teammates("").await,
            Err(Error::Api(ApiError::Unauthorized))
        ));
        assert!(mock.list_teammates("").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_fail_after() {
        let mock = MockSendGridClient::new().fail_after(1).await;

        assert!(mock.list_teammates("").await.is_ok());
        assert!(matches!(
            mock.list_subusers("").await,
            Err(Error::Api(ApiError::Transport(_)))
        ));
    }

    #[tokio::test]
    async fn test_mock_update_replaces_scopes() {
        let mock = MockSendGridClient::new()
            .with_teammates(vec![TeammateBuilder::new("alice").scope("mail.send").build()])
            .await;

        mock.update_teammate_permissions(
            "alice",
            &UpdateTeammatePermissions {
                scopes: vec!["billing.read".to_string()],
                is_admin: false,
            },
        )
        .await
        .unwrap();

        assert_eq!(
            mock.scopes_of("alice").await,
            Some(vec!["billing.read".to_string()])
        );
        let captured = mock.captured("update_teammate_permissions").await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].username.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_mock_unknown_teammate_is_upstream_validation() {
        let mock = MockSendGridClient::new();

        match mock.get_teammate("ghost").await {
            Err(Error::Api(ApiError::UpstreamValidation(errors))) => {
                assert_eq!(errors.0[0].field.as_deref(), Some("username"));
            }
            other => panic!("Expected UpstreamValidation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_subuser_lifecycle() {
        let mock = MockSendGridClient::new()
            .with_subusers(vec![SubuserBuilder::new(7, "existing").build()])
            .await;

        mock.create_subuser(&SubuserCreate {
            username: "fresh".to_string(),
            email: "fresh@example.com".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
        assert_eq!(mock.subuser("fresh").await.map(|s| s.id), Some(8));

        mock.set_subuser_disabled("fresh", true).await.unwrap();
        assert_eq!(mock.subuser("fresh").await.map(|s| s.disabled), Some(true));

        mock.delete_subuser("fresh").await.unwrap();
        assert!(mock.subuser("fresh").await.is_none());
        assert!(mock.delete_subuser("fresh").await.is_err());

        let counts = mock.call_counts().await;
        assert_eq!(counts.create_subuser, 1);
        assert_eq!(counts.delete_subuser, 2);
        assert_eq!(counts.total(), 4);
    }
}
