//! Profile domain types
//!
//! A profile is a user's public-facing skill-exchange listing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::skills::SkillTag;

/// When a profile owner is available to swap
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Weekdays,
    Weekends,
    Evenings,
    Anytime,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekdays => write!(f, "Weekdays"),
            Self::Weekends => write!(f, "Weekends"),
            Self::Evenings => write!(f, "Evenings"),
            Self::Anytime => write!(f, "Anytime"),
        }
    }
}

/// Profile entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub photo_url: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub availability: Availability,
    pub is_public: bool,
    pub owner_user_id: Uuid,
    pub bio: Option<String>,
    pub projects: Vec<String>,
    pub events: Vec<String>,
    pub rating: f64,
}

impl Profile {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_user_id == user_id
    }

    /// Visible to `viewer` when public or owned by them
    pub fn is_visible_to(&self, viewer: Uuid) -> bool {
        self.is_public || self.is_owned_by(viewer)
    }

    pub fn offers(&self, skill: &str) -> bool {
        self.skills_offered.iter().any(|s| s == skill)
    }
}

/// Everything needed to create a profile; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub name: String,
    pub location: String,
    pub photo_url: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub availability: Availability,
    pub is_public: bool,
    pub owner_user_id: Uuid,
    pub bio: Option<String>,
    pub projects: Vec<String>,
    pub events: Vec<String>,
    pub rating: f64,
}

impl NewProfile {
    pub fn into_profile(self, id: Uuid) -> Profile {
        Profile {
            id,
            name: self.name,
            location: self.location,
            photo_url: self.photo_url,
            skills_offered: self.skills_offered,
            skills_wanted: self.skills_wanted,
            availability: self.availability,
            is_public: self.is_public,
            owner_user_id: self.owner_user_id,
            bio: self.bio,
            projects: self.projects,
            events: self.events,
            rating: self.rating,
        }
    }
}

/// Partial profile changes; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
    pub skills_offered: Option<Vec<String>>,
    pub skills_wanted: Option<Vec<String>>,
    pub availability: Option<Availability>,
    pub is_public: Option<bool>,
    pub bio: Option<String>,
    pub projects: Option<Vec<String>>,
    pub events: Option<Vec<String>>,
    pub rating: Option<f64>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the present fields into `profile`
    pub fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(location) = self.location {
            profile.location = location;
        }
        if let Some(photo_url) = self.photo_url {
            profile.photo_url = photo_url;
        }
        if let Some(skills) = self.skills_offered {
            profile.skills_offered = skills;
        }
        if let Some(skills) = self.skills_wanted {
            profile.skills_wanted = skills;
        }
        if let Some(availability) = self.availability {
            profile.availability = availability;
        }
        if let Some(is_public) = self.is_public {
            profile.is_public = is_public;
        }
        if let Some(bio) = self.bio {
            // A blank bio clears it
            profile.bio = Some(bio).filter(|b| !b.trim().is_empty());
        }
        if let Some(projects) = self.projects {
            profile.projects = projects;
        }
        if let Some(events) = self.events {
            profile.events = events;
        }
        if let Some(rating) = self.rating {
            profile.rating = rating;
        }
    }
}

/// Request DTO for saving the whole edit form
#[derive(Debug, Clone, Deserialize)]
pub struct SaveProfileRequest {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub skills_offered: Vec<String>,
    #[serde(default)]
    pub skills_wanted: Vec<String>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub events: Vec<String>,
}

/// Request DTO for a partial profile update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub skills_offered: Option<Vec<String>>,
    #[serde(default)]
    pub skills_wanted: Option<Vec<String>>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub projects: Option<Vec<String>>,
    #[serde(default)]
    pub events: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

/// Which of the two skill lists an edit targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillSide {
    Offered,
    Wanted,
}

/// Request DTO for selecting/deselecting a skill
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleSkillRequest {
    pub side: SkillSide,
    pub name: String,
}

/// Request DTO for appending to a free-text list (projects, events)
#[derive(Debug, Clone, Deserialize)]
pub struct ListEntryRequest {
    pub text: String,
}

/// Query params for browsing profiles
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BrowseQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Response DTO for profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub photo_url: String,
    pub skills_offered: Vec<SkillTag>,
    pub skills_wanted: Vec<SkillTag>,
    pub availability: Availability,
    pub is_public: bool,
    pub owner_user_id: Uuid,
    pub bio: Option<String>,
    pub projects: Vec<String>,
    pub events: Vec<String>,
    pub rating: f64,
}

impl ProfileResponse {
    /// Build the response, resolving each skill's display glyph with `icon_for`
    pub fn with_icons(p: Profile, icon_for: impl Fn(&str) -> String) -> Self {
        let tag = |name: String| SkillTag {
            icon: icon_for(&name),
            name,
        };

        Self {
            id: p.id,
            name: p.name,
            location: p.location,
            photo_url: p.photo_url,
            skills_offered: p.skills_offered.into_iter().map(tag).collect(),
            skills_wanted: p.skills_wanted.into_iter().map(tag).collect(),
            availability: p.availability,
            is_public: p.is_public,
            owner_user_id: p.owner_user_id,
            bio: p.bio,
            projects: p.projects,
            events: p.events,
            rating: p.rating,
        }
    }
}

/// Compact profile info embedded in swap request views
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub id: Uuid,
    pub name: String,
    pub photo_url: String,
    pub location: String,
}

impl From<&Profile> for ProfileSummary {
    fn from(p: &Profile) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            photo_url: p.photo_url.clone(),
            location: p.location.clone(),
        }
    }
}
