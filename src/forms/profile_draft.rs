//! Profile edit form
//!
//! A [`ProfileDraft`] is the working copy behind the profile editor. Skill
//! lists behave as toggle sets and the free-text lists only ever hold
//! trimmed, non-empty entries. Saving creates the owner's profile the first
//! time and updates it afterwards.

use uuid::Uuid;

use crate::domain::{
    Availability, NewProfile, Profile, ProfileChanges, SaveProfileRequest, SkillSide,
    UpdateProfileRequest,
};
use crate::store::{Store, StoreError};

/// Rating a brand new profile starts with
pub const DEFAULT_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub location: String,
    pub photo_url: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub availability: Availability,
    pub is_public: bool,
    pub bio: String,
    pub projects: Vec<String>,
    pub events: Vec<String>,
    pub rating: f64,
}

impl ProfileDraft {
    /// Empty draft, prefilled with the account's display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: String::new(),
            photo_url: String::new(),
            skills_offered: Vec::new(),
            skills_wanted: Vec::new(),
            availability: Availability::default(),
            is_public: true,
            bio: String::new(),
            projects: Vec::new(),
            events: Vec::new(),
            rating: DEFAULT_RATING,
        }
    }

    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            location: profile.location.clone(),
            photo_url: profile.photo_url.clone(),
            skills_offered: profile.skills_offered.clone(),
            skills_wanted: profile.skills_wanted.clone(),
            availability: profile.availability,
            is_public: profile.is_public,
            bio: profile.bio.clone().unwrap_or_default(),
            projects: profile.projects.clone(),
            events: profile.events.clone(),
            rating: profile.rating,
        }
    }

    /// Fill a draft from a submitted form. The rating is never client-controlled,
    /// so it is carried over from `existing` when there is one.
    pub fn from_request(req: SaveProfileRequest, existing: Option<&Profile>) -> Self {
        let mut draft = Self::new(req.name.trim());
        draft.location = req.location.trim().to_string();
        draft.photo_url = req.photo_url.trim().to_string();
        draft.availability = req.availability;
        draft.is_public = req.is_public;
        draft.bio = req.bio.unwrap_or_default().trim().to_string();
        if let Some(profile) = existing {
            draft.rating = profile.rating;
        }

        for skill in &req.skills_offered {
            draft.select_skill(SkillSide::Offered, skill);
        }
        for skill in &req.skills_wanted {
            draft.select_skill(SkillSide::Wanted, skill);
        }
        for project in &req.projects {
            draft.add_project(project);
        }
        for event in &req.events {
            draft.add_event(event);
        }

        draft
    }

    fn skills_mut(&mut self, side: SkillSide) -> &mut Vec<String> {
        match side {
            SkillSide::Offered => &mut self.skills_offered,
            SkillSide::Wanted => &mut self.skills_wanted,
        }
    }

    /// Deselect `name` if selected, select it otherwise. Returns whether it is now selected.
    pub fn toggle_skill(&mut self, side: SkillSide, name: &str) -> bool {
        let name = name.trim();
        let skills = self.skills_mut(side);

        if let Some(pos) = skills.iter().position(|s| s == name) {
            skills.remove(pos);
            false
        } else if name.is_empty() {
            false
        } else {
            skills.push(name.to_string());
            true
        }
    }

    /// Select `name` unless it already is. Returns whether it was added.
    pub fn select_skill(&mut self, side: SkillSide, name: &str) -> bool {
        let name = name.trim();
        let skills = self.skills_mut(side);

        if name.is_empty() || skills.iter().any(|s| s == name) {
            return false;
        }
        skills.push(name.to_string());
        true
    }

    pub fn add_project(&mut self, text: &str) -> bool {
        push_entry(&mut self.projects, text)
    }

    pub fn remove_project(&mut self, index: usize) -> Option<String> {
        remove_entry(&mut self.projects, index)
    }

    pub fn add_event(&mut self, text: &str) -> bool {
        push_entry(&mut self.events, text)
    }

    pub fn remove_event(&mut self, index: usize) -> Option<String> {
        remove_entry(&mut self.events, index)
    }

    fn into_new_profile(self, owner_user_id: Uuid) -> NewProfile {
        NewProfile {
            name: self.name,
            location: self.location,
            photo_url: self.photo_url,
            skills_offered: self.skills_offered,
            skills_wanted: self.skills_wanted,
            availability: self.availability,
            is_public: self.is_public,
            owner_user_id,
            bio: Some(self.bio).filter(|b| !b.is_empty()),
            projects: self.projects,
            events: self.events,
            rating: self.rating,
        }
    }

    fn into_changes(self) -> ProfileChanges {
        ProfileChanges {
            name: Some(self.name),
            location: Some(self.location),
            photo_url: Some(self.photo_url),
            skills_offered: Some(self.skills_offered),
            skills_wanted: Some(self.skills_wanted),
            availability: Some(self.availability),
            is_public: Some(self.is_public),
            bio: Some(self.bio),
            projects: Some(self.projects),
            events: Some(self.events),
            rating: Some(self.rating),
        }
    }

    /// Create the owner's profile, or update it when one already exists
    pub fn save(self, store: &Store, owner_user_id: Uuid) -> Result<Profile, StoreError> {
        match store.profile_by_user_id(owner_user_id) {
            Some(existing) => store
                .update_profile(existing.id, self.into_changes())
                .ok_or(StoreError::UnknownProfile(existing.id)),
            None => store.create_profile(self.into_new_profile(owner_user_id)),
        }
    }
}

fn push_entry(list: &mut Vec<String>, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    list.push(text.to_string());
    true
}

fn remove_entry(list: &mut Vec<String>, index: usize) -> Option<String> {
    (index < list.len()).then(|| list.remove(index))
}

/// Skill names trimmed, blanks dropped, first occurrence kept
fn dedupe_skills(skills: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if !skill.is_empty() && !out.iter().any(|s| s == skill) {
            out.push(skill.to_string());
        }
    }
    out
}

fn clean_entries(entries: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in &entries {
        push_entry(&mut out, entry);
    }
    out
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name.map(|s| s.trim().to_string()),
            location: req.location.map(|s| s.trim().to_string()),
            photo_url: req.photo_url.map(|s| s.trim().to_string()),
            skills_offered: req.skills_offered.map(dedupe_skills),
            skills_wanted: req.skills_wanted.map(dedupe_skills),
            availability: req.availability,
            is_public: req.is_public,
            bio: req.bio.map(|s| s.trim().to_string()),
            projects: req.projects.map(clean_entries),
            events: req.events.map(clean_entries),
            rating: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SaveProfileRequest {
        SaveProfileRequest {
            name: "  Dana  ".to_string(),
            location: "Lyon, FR".to_string(),
            photo_url: String::new(),
            skills_offered: vec!["Cooking".into(), "Cooking".into(), " ".into()],
            skills_wanted: vec!["Music".into()],
            availability: Availability::Evenings,
            is_public: true,
            bio: Some("  ".to_string()),
            projects: vec!["  Supper club ".into(), "".into()],
            events: vec![],
        }
    }

    #[test]
    fn new_draft_uses_form_defaults() {
        let draft = ProfileDraft::new("Dana");
        assert_eq!(draft.availability, Availability::Weekdays);
        assert!(draft.is_public);
        assert_eq!(draft.rating, DEFAULT_RATING);
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut draft = ProfileDraft::new("Dana");

        assert!(draft.toggle_skill(SkillSide::Offered, "React"));
        assert!(draft.toggle_skill(SkillSide::Offered, "Design"));
        assert_eq!(draft.skills_offered, vec!["React", "Design"]);

        assert!(!draft.toggle_skill(SkillSide::Offered, "React"));
        assert_eq!(draft.skills_offered, vec!["Design"]);
        assert!(draft.skills_wanted.is_empty());
    }

    #[test]
    fn select_never_duplicates() {
        let mut draft = ProfileDraft::new("Dana");
        assert!(draft.select_skill(SkillSide::Wanted, "Python"));
        assert!(!draft.select_skill(SkillSide::Wanted, " Python "));
        assert!(!draft.select_skill(SkillSide::Wanted, ""));
        assert_eq!(draft.skills_wanted, vec!["Python"]);
    }

    #[test]
    fn list_entries_are_trimmed_and_removed_by_position() {
        let mut draft = ProfileDraft::new("Dana");

        assert!(draft.add_project("  Food blog "));
        assert!(!draft.add_project("   "));
        assert!(draft.add_project("Pop-up kitchen"));
        assert!(draft.add_event("Street food fest"));

        assert_eq!(draft.projects, vec!["Food blog", "Pop-up kitchen"]);
        assert_eq!(draft.remove_project(0), Some("Food blog".to_string()));
        assert_eq!(draft.remove_project(5), None);
        assert_eq!(draft.projects, vec!["Pop-up kitchen"]);
        assert_eq!(draft.remove_event(0), Some("Street food fest".to_string()));
        assert!(draft.events.is_empty());
    }

    #[test]
    fn submitted_form_is_normalized() {
        let draft = ProfileDraft::from_request(request(), None);

        assert_eq!(draft.name, "Dana");
        assert_eq!(draft.skills_offered, vec!["Cooking"]);
        assert_eq!(draft.projects, vec!["Supper club"]);
        assert_eq!(draft.bio, "");
        assert_eq!(draft.rating, DEFAULT_RATING);
    }

    #[test]
    fn first_save_creates_then_updates() {
        let store = Store::new(16);
        let owner = Uuid::new_v4();

        let created = ProfileDraft::from_request(request(), None)
            .save(&store, owner)
            .unwrap();
        assert_eq!(created.owner_user_id, owner);
        assert!(created.bio.is_none());

        let mut draft = ProfileDraft::from_profile(&created);
        draft.location = "Paris, FR".to_string();
        draft.toggle_skill(SkillSide::Offered, "Writing");
        let updated = draft.save(&store, owner).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.location, "Paris, FR");
        assert_eq!(updated.skills_offered, vec!["Cooking", "Writing"]);
        assert_eq!(store.profiles().len(), 1);
    }

    #[test]
    fn partial_update_request_is_normalized_and_cannot_set_rating() {
        let changes = ProfileChanges::from(UpdateProfileRequest {
            name: None,
            location: Some(" Rome ".to_string()),
            photo_url: None,
            skills_offered: Some(vec!["Music".into(), "Music".into()]),
            skills_wanted: None,
            availability: None,
            is_public: None,
            bio: None,
            projects: Some(vec!["".into(), " Band ".into()]),
            events: None,
        });

        assert_eq!(changes.location.as_deref(), Some("Rome"));
        assert_eq!(changes.skills_offered, Some(vec!["Music".to_string()]));
        assert_eq!(changes.projects, Some(vec!["Band".to_string()]));
        assert!(changes.rating.is_none());
        assert!(changes.name.is_none());
    }
}
