//! Notification service
//!
//! Listens to store events and files notifications into bounded,
//! per-profile inboxes. Routes only read from the inboxes.

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::domain::notifications::{Notification, NotificationType};
use crate::domain::{SwapRequest, SwapStatus};
use crate::store::{Store, StoreEvent};

/// In-memory notification inboxes keyed by profile id
#[derive(Clone)]
pub struct NotificationCenter {
    inboxes: Arc<RwLock<HashMap<Uuid, VecDeque<Notification>>>>,
    limit: usize,
}

impl NotificationCenter {
    /// `limit` caps each inbox; the oldest notification is dropped first
    pub fn new(limit: usize) -> Self {
        Self {
            inboxes: Arc::new(RwLock::new(HashMap::new())),
            limit: limit.max(1),
        }
    }

    /// Subscribe to `store` now and process its events on a background task
    pub fn spawn_listener(&self, store: Store) -> JoinHandle<()> {
        let mut events = store.subscribe();
        let center = self.clone();

        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => center.handle(&event, &store),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Notification listener lagged behind store events");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            tracing::debug!("Notification listener stopped");
        })
    }

    /// Turn one store event into notifications
    pub fn handle(&self, event: &StoreEvent, store: &Store) {
        tracing::trace!(event = event.kind(), "Store event received");

        let name_of = |profile_id: Uuid| {
            store
                .profile(profile_id)
                .map(|p| p.name)
                .unwrap_or_else(|| "Someone".to_string())
        };

        match event {
            StoreEvent::SwapRequested { request } => {
                let requester = name_of(request.requester_profile_id);
                self.push(
                    request.recipient_profile_id,
                    NotificationType::SwapRequestReceived,
                    format!("New swap request from {}", requester),
                    Some(format!(
                        "{} offers {} in exchange for {}",
                        requester, request.skill_offered, request.skill_wanted
                    )),
                    request,
                );
            }
            StoreEvent::SwapStatusChanged { request, previous } => {
                tracing::debug!(
                    swap_request_id = %request.id,
                    from = %previous,
                    to = %request.status,
                    "Notifying requester of answer"
                );
                let recipient = name_of(request.recipient_profile_id);
                let (kind, title) = match request.status {
                    SwapStatus::Accepted => (
                        NotificationType::SwapRequestAccepted,
                        format!("{} accepted your swap request!", recipient),
                    ),
                    SwapStatus::Rejected => (
                        NotificationType::SwapRequestRejected,
                        format!("{} declined your swap request", recipient),
                    ),
                    SwapStatus::Pending => return,
                };
                self.push(request.requester_profile_id, kind, title, None, request);
            }
            StoreEvent::SwapDeleted { request } if request.status.is_pending() => {
                let requester = name_of(request.requester_profile_id);
                self.push(
                    request.recipient_profile_id,
                    NotificationType::SwapRequestWithdrawn,
                    format!("{} withdrew a swap request", requester),
                    None,
                    request,
                );
            }
            StoreEvent::SwapFeedbackLeft { request } => {
                // Only the requester rates a swap
                let requester = name_of(request.requester_profile_id);
                self.push(
                    request.recipient_profile_id,
                    NotificationType::FeedbackReceived,
                    format!("{} left feedback on your swap", requester),
                    request.feedback.clone(),
                    request,
                );
            }
            StoreEvent::ProfileCreated { profile } | StoreEvent::ProfileUpdated { profile } => {
                tracing::trace!(profile_id = %profile.id, "Profile change needs no notification");
            }
            StoreEvent::SwapDeleted { .. } => {}
        }
    }

    fn push(
        &self,
        profile_id: Uuid,
        notification_type: NotificationType,
        title: String,
        message: Option<String>,
        request: &SwapRequest,
    ) {
        let notification = Notification {
            id: Uuid::new_v4(),
            profile_id,
            notification_type,
            title,
            message,
            swap_request_id: request.id,
            is_read: false,
            created_at: Utc::now(),
        };

        let mut inboxes = self.inboxes.write();
        let inbox = inboxes.entry(profile_id).or_default();
        if inbox.len() == self.limit {
            inbox.pop_front();
        }
        inbox.push_back(notification);

        tracing::info!(
            profile_id = %profile_id,
            notification_type = %notification_type,
            "Notification created"
        );
    }

    /// Newest first
    pub fn list(&self, profile_id: Uuid, unread_only: bool) -> Vec<Notification> {
        self.inboxes
            .read()
            .get(&profile_id)
            .map(|inbox| {
                inbox
                    .iter()
                    .rev()
                    .filter(|n| !unread_only || !n.is_read)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn unread_count(&self, profile_id: Uuid) -> usize {
        self.inboxes
            .read()
            .get(&profile_id)
            .map(|inbox| inbox.iter().filter(|n| !n.is_read).count())
            .unwrap_or(0)
    }

    /// Returns how many notifications changed
    pub fn mark_all_read(&self, profile_id: Uuid) -> usize {
        let mut inboxes = self.inboxes.write();
        let Some(inbox) = inboxes.get_mut(&profile_id) else {
            return 0;
        };

        let mut changed = 0;
        for n in inbox.iter_mut().filter(|n| !n.is_read) {
            n.is_read = true;
            changed += 1;
        }
        changed
    }
}
