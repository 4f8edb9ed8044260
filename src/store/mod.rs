//! In-memory marketplace store
//!
//! Holds the skill catalog, profiles and swap requests for the lifetime of
//! the process. Every mutation is applied under a single write lock and
//! broadcast to subscribers as a [`StoreEvent`] while that lock is held, so
//! subscribers observe mutations in the order they were applied.

pub mod catalog;
pub mod events;
pub mod query;
pub mod seed;

use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    NewProfile, NewSwapRequest, Profile, ProfileChanges, Skill, SwapRequest, SwapRequestChanges,
    SwapStatus, FALLBACK_SKILL_ICON,
};

pub use events::StoreEvent;
pub use query::SwapPartition;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("User {user_id} already has a profile")]
    ProfileExists { user_id: Uuid },

    #[error("Profile {0} does not exist")]
    UnknownProfile(Uuid),

    #[error("A swap request needs two different profiles")]
    SelfSwap,

    #[error("Cannot move a swap request from {from} to {to}")]
    InvalidTransition { from: SwapStatus, to: SwapStatus },

    #[error("Feedback was already left on this swap")]
    AlreadyRated,

    #[error("Only pending swap requests can be withdrawn, this one is {0}")]
    NotPending(SwapStatus),
}

/// Shared handle to the store; clones see the same data
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
    events: broadcast::Sender<StoreEvent>,
}

struct StoreInner {
    skills: Vec<Skill>,
    profiles: Vec<Profile>,
    swap_requests: Vec<SwapRequest>,
}

impl Store {
    /// Create an empty store with the default skill catalog
    pub fn new(event_capacity: usize) -> Self {
        let (events, _) = broadcast::channel(event_capacity.max(1));

        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                skills: catalog::default_skills(),
                profiles: Vec::new(),
                swap_requests: Vec::new(),
            })),
            events,
        }
    }

    /// Receive every mutation applied after this call
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    fn emit(&self, event: StoreEvent) {
        // No receivers is fine
        if self.events.send(event).is_err() {
            debug!("Store event dropped, no subscribers");
        }
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    pub fn skills(&self) -> Vec<Skill> {
        self.inner.read().skills.clone()
    }

    /// Catalog glyph for `name`, or the fallback glyph for free-text skills
    pub fn skill_icon(&self, name: &str) -> String {
        self.inner
            .read()
            .skills
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.icon.clone())
            .unwrap_or_else(|| FALLBACK_SKILL_ICON.to_string())
    }

    // ------------------------------------------------------------------
    // Profiles
    // ------------------------------------------------------------------

    pub fn profiles(&self) -> Vec<Profile> {
        self.inner.read().profiles.clone()
    }

    pub fn profile(&self, id: Uuid) -> Option<Profile> {
        self.inner.read().profiles.iter().find(|p| p.id == id).cloned()
    }

    /// First profile owned by `user_id`
    pub fn profile_by_user_id(&self, user_id: Uuid) -> Option<Profile> {
        self.inner
            .read()
            .profiles
            .iter()
            .find(|p| p.owner_user_id == user_id)
            .cloned()
    }

    pub fn create_profile(&self, new: NewProfile) -> Result<Profile, StoreError> {
        let mut inner = self.inner.write();

        if inner
            .profiles
            .iter()
            .any(|p| p.owner_user_id == new.owner_user_id)
        {
            return Err(StoreError::ProfileExists {
                user_id: new.owner_user_id,
            });
        }

        let profile = new.into_profile(Uuid::new_v4());
        inner.profiles.push(profile.clone());

        info!(
            profile_id = %profile.id,
            owner_user_id = %profile.owner_user_id,
            "Profile created"
        );
        self.emit(StoreEvent::ProfileCreated {
            profile: profile.clone(),
        });

        Ok(profile)
    }

    /// Merge `changes` into the profile; `None` when no profile has `id`
    pub fn update_profile(&self, id: Uuid, changes: ProfileChanges) -> Option<Profile> {
        let mut inner = self.inner.write();
        let profile = inner.profiles.iter_mut().find(|p| p.id == id)?;

        changes.apply(profile);
        let updated = profile.clone();

        debug!(profile_id = %id, "Profile updated");
        self.emit(StoreEvent::ProfileUpdated {
            profile: updated.clone(),
        });

        Some(updated)
    }

    /// Public profiles not owned by `current_user_id`, narrowed by `search`
    pub fn browse(&self, search: &str, current_user_id: Uuid) -> Vec<Profile> {
        let inner = self.inner.read();
        query::filter_profiles(&inner.profiles, search, current_user_id)
            .into_iter()
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Swap requests
    // ------------------------------------------------------------------

    pub fn swap_requests(&self) -> Vec<SwapRequest> {
        self.inner.read().swap_requests.clone()
    }

    pub fn swap_request(&self, id: Uuid) -> Option<SwapRequest> {
        self.inner
            .read()
            .swap_requests
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Append a new Pending request between two existing, distinct profiles
    pub fn create_swap_request(&self, new: NewSwapRequest) -> Result<SwapRequest, StoreError> {
        if new.requester_profile_id == new.recipient_profile_id {
            return Err(StoreError::SelfSwap);
        }

        let mut inner = self.inner.write();

        for profile_id in [new.requester_profile_id, new.recipient_profile_id] {
            if !inner.profiles.iter().any(|p| p.id == profile_id) {
                return Err(StoreError::UnknownProfile(profile_id));
            }
        }

        let request = SwapRequest {
            id: Uuid::new_v4(),
            requester_profile_id: new.requester_profile_id,
            recipient_profile_id: new.recipient_profile_id,
            skill_offered: new.skill_offered,
            skill_wanted: new.skill_wanted,
            message: new.message,
            status: SwapStatus::Pending,
            feedback: None,
            rating: None,
            created_at: Utc::now(),
        };
        inner.swap_requests.push(request.clone());

        info!(
            swap_request_id = %request.id,
            requester = %request.requester_profile_id,
            recipient = %request.recipient_profile_id,
            "Swap request created"
        );
        self.emit(StoreEvent::SwapRequested {
            request: request.clone(),
        });

        Ok(request)
    }

    /// Merge `changes` into the request; `Ok(None)` when no request has `id`
    pub fn update_swap_request(
        &self,
        id: Uuid,
        changes: SwapRequestChanges,
    ) -> Result<Option<SwapRequest>, StoreError> {
        let mut inner = self.inner.write();
        let Some(request) = inner.swap_requests.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        // Every check runs before anything is mutated
        let previous = request.status;
        if let Some(next) = changes.status {
            if !previous.can_transition_to(next) {
                return Err(StoreError::InvalidTransition {
                    from: previous,
                    to: next,
                });
            }
        }
        if changes.rating.is_some() && request.rating.is_some() {
            return Err(StoreError::AlreadyRated);
        }

        if let Some(next) = changes.status {
            request.status = next;
        }

        let left_feedback = changes.feedback.is_some() || changes.rating.is_some();
        if let Some(feedback) = changes.feedback {
            request.feedback = Some(feedback);
        }
        if let Some(rating) = changes.rating {
            request.rating = Some(rating);
        }

        let updated = request.clone();

        if updated.status != previous {
            info!(
                swap_request_id = %id,
                from = %previous,
                to = %updated.status,
                "Swap request status changed"
            );
            self.emit(StoreEvent::SwapStatusChanged {
                request: updated.clone(),
                previous,
            });
        }
        if left_feedback {
            debug!(swap_request_id = %id, "Swap feedback recorded");
            self.emit(StoreEvent::SwapFeedbackLeft {
                request: updated.clone(),
            });
        }

        Ok(Some(updated))
    }

    /// Remove the request; returns it when it existed
    pub fn delete_swap_request(&self, id: Uuid) -> Option<SwapRequest> {
        let mut inner = self.inner.write();
        let index = inner.swap_requests.iter().position(|r| r.id == id)?;
        Some(self.remove_swap_request(&mut inner, index))
    }

    /// Remove the request only while it is still Pending; `Ok(None)` when no request has `id`
    pub fn delete_pending_swap_request(&self, id: Uuid) -> Result<Option<SwapRequest>, StoreError> {
        let mut inner = self.inner.write();
        let Some(index) = inner.swap_requests.iter().position(|r| r.id == id) else {
            return Ok(None);
        };

        let status = inner.swap_requests[index].status;
        if !status.is_pending() {
            return Err(StoreError::NotPending(status));
        }

        Ok(Some(self.remove_swap_request(&mut inner, index)))
    }

    fn remove_swap_request(&self, inner: &mut StoreInner, index: usize) -> SwapRequest {
        let removed = inner.swap_requests.remove(index);

        info!(swap_request_id = %removed.id, "Swap request deleted");
        self.emit(StoreEvent::SwapDeleted {
            request: removed.clone(),
        });

        removed
    }

    /// Requests sent and received by `profile_id`
    pub fn partition_for(&self, profile_id: Uuid) -> SwapPartition {
        let inner = self.inner.read();
        query::partition_swaps(&inner.swap_requests, profile_id)
    }

    /// Profile and swap request counts
    pub fn counts(&self) -> (usize, usize) {
        let inner = self.inner.read();
        (inner.profiles.len(), inner.swap_requests.len())
    }
}
