//! Demo marketplace data
//!
//! Three public profiles with matching demo accounts so a fresh process has
//! something to browse.

use uuid::Uuid;

use super::{Store, StoreError};
use crate::domain::{Availability, NewProfile};

/// Login identity that owns a seeded profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: String,
    pub name: String,
    pub user_id: Uuid,
}

struct DemoProfile {
    email: &'static str,
    name: &'static str,
    location: &'static str,
    photo_url: &'static str,
    offered: &'static [&'static str],
    wanted: &'static [&'static str],
    availability: Availability,
    bio: &'static str,
    projects: &'static [&'static str],
    events: &'static [&'static str],
    rating: f64,
}

const DEMO_PROFILES: &[DemoProfile] = &[
    DemoProfile {
        email: "alex@example.com",
        name: "Alex Johnson",
        location: "San Francisco, CA",
        photo_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
        offered: &["JavaScript", "React"],
        wanted: &["Python", "Design"],
        availability: Availability::Weekdays,
        bio: "Full-stack developer passionate about creating amazing user experiences.",
        projects: &["E-commerce Platform", "Social Media App", "Portfolio Website"],
        events: &["React Conference 2023", "TechCrunch Disrupt", "Local Dev Meetup"],
        rating: 4.8,
    },
    DemoProfile {
        email: "sarah@example.com",
        name: "Sarah Chen",
        location: "New York, NY",
        photo_url: "https://images.unsplash.com/photo-1494790108755-2616b612b47c?w=150&h=150&fit=crop&crop=face",
        offered: &["Design", "Photography"],
        wanted: &["JavaScript", "Marketing"],
        availability: Availability::Evenings,
        bio: "Creative designer with 5+ years experience in digital design and photography.",
        projects: &["Brand Identity Design", "Wedding Photography", "Mobile App UI"],
        events: &["Design Week 2023", "Photography Workshop", "Creative Summit"],
        rating: 4.9,
    },
    DemoProfile {
        email: "mike@example.com",
        name: "Mike Rodriguez",
        location: "Austin, TX",
        photo_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
        offered: &["Python", "Data Science"],
        wanted: &["Music", "Writing"],
        availability: Availability::Weekends,
        bio: "Data scientist and machine learning enthusiast. Love exploring new technologies.",
        projects: &["Predictive Analytics Tool", "ML Research Project", "Data Visualization Dashboard"],
        events: &["Data Science Conference", "AI Workshop", "Python Meetup"],
        rating: 4.7,
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Create the demo profiles and return the accounts that own them
pub fn load_demo_data(store: &Store) -> Result<Vec<DemoAccount>, StoreError> {
    let mut accounts = Vec::with_capacity(DEMO_PROFILES.len());

    for demo in DEMO_PROFILES {
        let user_id = Uuid::new_v4();

        store.create_profile(NewProfile {
            name: demo.name.to_string(),
            location: demo.location.to_string(),
            photo_url: demo.photo_url.to_string(),
            skills_offered: owned(demo.offered),
            skills_wanted: owned(demo.wanted),
            availability: demo.availability,
            is_public: true,
            owner_user_id: user_id,
            bio: Some(demo.bio.to_string()),
            projects: owned(demo.projects),
            events: owned(demo.events),
            rating: demo.rating,
        })?;

        accounts.push(DemoAccount {
            email: demo.email.to_string(),
            name: demo.name.to_string(),
            user_id,
        });
    }

    tracing::info!(profiles = accounts.len(), "Demo data loaded");
    Ok(accounts)
}
