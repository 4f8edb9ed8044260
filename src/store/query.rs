//! Pure queries over store snapshots
//!
//! Nothing here is cached; callers recompute from the current collections.

use uuid::Uuid;

use crate::domain::{Profile, SwapAction, SwapRequest, SwapStatus, SwapSummary};

/// Case-insensitive substring match against name, location and both skill lists.
/// `needle` must already be lowercased.
fn matches_search(profile: &Profile, needle: &str) -> bool {
    let hit = |text: &str| text.to_lowercase().contains(needle);

    profile.skills_offered.iter().any(|s| hit(s.as_str()))
        || profile.skills_wanted.iter().any(|s| hit(s.as_str()))
        || hit(profile.name.as_str())
        || hit(profile.location.as_str())
}

/// Profiles a user can browse: public, not their own, and matching `search`
/// (an empty search matches everything). The term is used as typed, so
/// surrounding whitespace takes part in the match. Source order is preserved.
pub fn filter_profiles<'a>(
    profiles: &'a [Profile],
    search: &str,
    current_user_id: Uuid,
) -> Vec<&'a Profile> {
    let needle = search.to_lowercase();

    profiles
        .iter()
        .filter(|p| p.is_public && !p.is_owned_by(current_user_id))
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .collect()
}

/// Swap requests split by the viewer's role in them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapPartition {
    pub sent: Vec<SwapRequest>,
    pub received: Vec<SwapRequest>,
}

impl SwapPartition {
    /// Received requests still waiting for an answer
    pub fn pending_received(&self) -> impl Iterator<Item = &SwapRequest> {
        self.received.iter().filter(|r| r.status.is_pending())
    }

    pub fn summary(&self) -> SwapSummary {
        let all = || self.sent.iter().chain(self.received.iter());

        SwapSummary {
            sent: self.sent.len(),
            received: self.received.len(),
            accepted: all()
                .filter(|r| r.status == SwapStatus::Accepted)
                .count(),
            pending: all().filter(|r| r.status.is_pending()).count(),
        }
    }
}

/// Requests sent by and received by `profile_id`, in source order
pub fn partition_swaps(requests: &[SwapRequest], profile_id: Uuid) -> SwapPartition {
    let mut partition = SwapPartition::default();

    for request in requests {
        if request.requester_profile_id == profile_id {
            partition.sent.push(request.clone());
        } else if request.recipient_profile_id == profile_id {
            partition.received.push(request.clone());
        }
    }

    partition
}

/// Actions `viewer_profile_id` may take on `request`. Terminal requests are view-only.
pub fn available_actions(request: &SwapRequest, viewer_profile_id: Uuid) -> Vec<SwapAction> {
    if !request.status.is_pending() {
        return Vec::new();
    }

    if request.recipient_profile_id == viewer_profile_id {
        vec![SwapAction::Accept, SwapAction::Reject]
    } else if request.requester_profile_id == viewer_profile_id {
        vec![SwapAction::Delete]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Availability;
    use chrono::Utc;

    fn profile(name: &str, location: &str, offered: &[&str], wanted: &[&str]) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            location: location.to_string(),
            photo_url: String::new(),
            skills_offered: offered.iter().map(|s| s.to_string()).collect(),
            skills_wanted: wanted.iter().map(|s| s.to_string()).collect(),
            availability: Availability::Weekends,
            is_public: true,
            owner_user_id: Uuid::new_v4(),
            bio: None,
            projects: Vec::new(),
            events: Vec::new(),
            rating: 4.5,
        }
    }

    fn request(from: Uuid, to: Uuid, status: SwapStatus) -> SwapRequest {
        SwapRequest {
            id: Uuid::new_v4(),
            requester_profile_id: from,
            recipient_profile_id: to,
            skill_offered: "React".to_string(),
            skill_wanted: "Design".to_string(),
            message: "hi".to_string(),
            status,
            feedback: None,
            rating: None,
            created_at: Utc::now(),
        }
    }

    fn names(found: &[&Profile]) -> Vec<String> {
        found.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn empty_search_returns_all_public_foreign_profiles_in_order() {
        let me = profile("Me", "Austin, TX", &["Cooking"], &[]);
        let mut hidden = profile("Hidden", "Austin, TX", &["Music"], &[]);
        hidden.is_public = false;
        let profiles = vec![
            profile("Zed", "Oslo", &["Python"], &[]),
            me.clone(),
            hidden,
            profile("Amy", "Rome", &["Design"], &[]),
        ];

        let found = filter_profiles(&profiles, "", me.owner_user_id);

        assert_eq!(names(&found), vec!["Zed", "Amy"]);
    }

    #[test]
    fn search_term_is_not_trimmed() {
        let profiles = vec![
            profile("Alex", "San Francisco, CA", &["React"], &[]),
            profile("Sarah Chen", "New York, NY", &["Design"], &[]),
        ];
        let viewer = Uuid::new_v4();

        assert!(filter_profiles(&profiles, "   ", viewer).is_empty());
        assert!(filter_profiles(&profiles, " react", viewer).is_empty());
        assert_eq!(names(&filter_profiles(&profiles, " york", viewer)), vec!["Sarah Chen"]);
    }

    #[test]
    fn search_matches_name_location_and_skills_case_insensitively() {
        let profiles = vec![
            profile("Sarah Chen", "New York, NY", &["Design"], &["Marketing"]),
            profile("Mike", "Austin, TX", &["Data Science"], &["Writing"]),
            profile("Alex", "San Francisco, CA", &["React"], &["Python"]),
        ];
        let viewer = Uuid::new_v4();

        assert_eq!(names(&filter_profiles(&profiles, "sarah", viewer)), vec!["Sarah Chen"]);
        assert_eq!(names(&filter_profiles(&profiles, "austin", viewer)), vec!["Mike"]);
        assert_eq!(names(&filter_profiles(&profiles, "SCIENCE", viewer)), vec!["Mike"]);
        assert_eq!(names(&filter_profiles(&profiles, "pyth", viewer)), vec!["Alex"]);
        assert!(filter_profiles(&profiles, "knitting", viewer).is_empty());
    }

    #[test]
    fn private_and_own_profiles_never_match() {
        let mut private = profile("Private Pat", "Berlin", &["Music"], &[]);
        private.is_public = false;
        let mine = profile("Music Me", "Berlin", &["Music"], &[]);
        let profiles = vec![private, mine.clone()];

        for term in ["", "music", "berlin", "pat"] {
            assert!(filter_profiles(&profiles, term, mine.owner_user_id).is_empty());
        }
    }

    #[test]
    fn every_request_lands_in_exactly_one_partition() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        let third = Uuid::new_v4();
        let requests = vec![
            request(me, other, SwapStatus::Pending),
            request(other, me, SwapStatus::Accepted),
            request(other, third, SwapStatus::Pending),
            request(third, me, SwapStatus::Rejected),
        ];

        let partition = partition_swaps(&requests, me);

        assert_eq!(partition.sent.len(), 1);
        assert_eq!(partition.received.len(), 2);
        for r in requests.iter().filter(|r| r.involves(me)) {
            let in_sent = partition.sent.iter().any(|s| s.id == r.id);
            let in_received = partition.received.iter().any(|s| s.id == r.id);
            assert!(in_sent ^ in_received);
        }
    }

    #[test]
    fn summary_counts_across_both_lists() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        let requests = vec![
            request(me, other, SwapStatus::Pending),
            request(me, other, SwapStatus::Accepted),
            request(other, me, SwapStatus::Accepted),
            request(other, me, SwapStatus::Pending),
            request(other, me, SwapStatus::Rejected),
        ];

        let partition = partition_swaps(&requests, me);

        assert_eq!(
            partition.summary(),
            SwapSummary {
                sent: 2,
                received: 3,
                accepted: 2,
                pending: 2,
            }
        );
        assert_eq!(partition.pending_received().count(), 1);
    }

    #[test]
    fn actions_depend_on_role_and_status() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();

        let received = request(other, me, SwapStatus::Pending);
        assert_eq!(
            available_actions(&received, me),
            vec![SwapAction::Accept, SwapAction::Reject]
        );

        let sent = request(me, other, SwapStatus::Pending);
        assert_eq!(available_actions(&sent, me), vec![SwapAction::Delete]);

        let done = request(other, me, SwapStatus::Accepted);
        assert!(available_actions(&done, me).is_empty());

        assert!(available_actions(&received, Uuid::new_v4()).is_empty());
    }
}
