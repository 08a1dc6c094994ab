use crate::collaborator::InventoryService;
use crate::deadline::with_deadline;
use crate::ClientResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Profile returned by `get-current-profile`, as a tagged union. The wire
/// payload carries a `role` discriminator; role-specific fields are never
/// probed optionally, every consumer matches exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ProfilePayload {
    Passenger { buyer_id: Uuid, name: String },
    Staff { staff_id: Uuid, name: String },
}

/// A resolved session, constructed once and passed explicitly into each
/// workflow instead of being looked up from ambient global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub profile: ProfilePayload,
    pub resolved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(profile: ProfilePayload) -> Self {
        Self { profile, resolved_at: Utc::now() }
    }

    /// Buyer id when the session belongs to a passenger account.
    pub fn buyer_id(&self) -> Option<Uuid> {
        match &self.profile {
            ProfilePayload::Passenger { buyer_id, .. } => Some(*buyer_id),
            ProfilePayload::Staff { .. } => None,
        }
    }
}

/// Resolves and caches the current profile.
///
/// `resolve` is the blocking path used before submission: a failure there is
/// a hard error. `refresh_silent` backs non-critical view refreshes and
/// falls back to the cached session rather than surfacing the failure.
pub struct SessionResolver {
    inventory: Arc<dyn InventoryService>,
    request_timeout: Duration,
    cached: RwLock<Option<Session>>,
}

impl SessionResolver {
    pub fn new(inventory: Arc<dyn InventoryService>, request_timeout: Duration) -> Self {
        Self {
            inventory,
            request_timeout,
            cached: RwLock::new(None),
        }
    }

    pub async fn resolve(&self) -> ClientResult<Session> {
        let profile =
            with_deadline(self.request_timeout, self.inventory.current_profile()).await?;
        let session = Session::new(profile);
        *self.cached.write().await = Some(session.clone());
        Ok(session)
    }

    pub async fn refresh_silent(&self) -> Option<Session> {
        match with_deadline(self.request_timeout, self.inventory.current_profile()).await {
            Ok(profile) => {
                let session = Session::new(profile);
                *self.cached.write().await = Some(session.clone());
                Some(session)
            }
            Err(err) => {
                tracing::warn!("Profile refresh failed, using cached session: {}", err);
                self.cached.read().await.clone()
            }
        }
    }

    pub async fn cached(&self) -> Option<Session> {
        self.cached.read().await.clone()
    }
}
