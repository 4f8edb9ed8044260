//! Skill catalog types

use serde::{Deserialize, Serialize};

/// Glyph shown for skill names that are not part of the catalog
pub const FALLBACK_SKILL_ICON: &str = "🔧";

/// Catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// A skill name paired with the glyph to display next to it
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkillTag {
    pub name: String,
    pub icon: String,
}
