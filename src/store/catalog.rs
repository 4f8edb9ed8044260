//! Built-in skill catalog

use crate::domain::Skill;

const DEFAULT_SKILLS: &[(&str, &str)] = &[
    ("JavaScript", "💻"),
    ("React", "⚛️"),
    ("Python", "🐍"),
    ("Design", "🎨"),
    ("Photography", "📸"),
    ("Writing", "✍️"),
    ("Marketing", "📈"),
    ("Music", "🎵"),
    ("Cooking", "👨‍🍳"),
    ("Languages", "🗣️"),
    ("Data Science", "📊"),
    ("Mobile Development", "📱"),
];

/// The catalog every store starts with; ids are 1-based positions
pub fn default_skills() -> Vec<Skill> {
    DEFAULT_SKILLS
        .iter()
        .enumerate()
        .map(|(i, (name, icon))| Skill {
            id: (i + 1).to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_unique_names_and_ids() {
        let skills = default_skills();
        assert_eq!(skills.len(), 12);

        let names: HashSet<_> = skills.iter().map(|s| s.name.as_str()).collect();
        let ids: HashSet<_> = skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(names.len(), skills.len());
        assert_eq!(ids.len(), skills.len());
        assert_eq!(skills[0].id, "1");
        assert_eq!(skills[11].name, "Mobile Development");
    }
}
