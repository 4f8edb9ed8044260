//! Swap request form validation

use thiserror::Error;

use crate::domain::{CreateSwapRequest, NewSwapRequest, Profile};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwapFormError {
    #[error("Please create your profile before sending swap requests")]
    ProfileRequired,

    #[error("The profile you're trying to connect with was not found")]
    RecipientNotFound,

    #[error("This profile is private")]
    RecipientPrivate,

    #[error("You cannot send a swap request to yourself")]
    OwnProfile,

    #[error("Please fill in all fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{owner} does not offer {skill}")]
    SkillNotOffered { owner: String, skill: String },
}

/// The fields a requester fills in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapRequestForm {
    pub skill_offered: String,
    pub skill_wanted: String,
    pub message: String,
}

impl From<CreateSwapRequest> for SwapRequestForm {
    fn from(req: CreateSwapRequest) -> Self {
        Self {
            skill_offered: req.skill_offered,
            skill_wanted: req.skill_wanted,
            message: req.message,
        }
    }
}

impl SwapRequestForm {
    /// Check the form against both parties and produce the request to store.
    ///
    /// The offered skill must come from the requester's own offered skills and
    /// the wanted skill from the recipient's offered skills.
    pub fn validate(
        &self,
        requester: Option<&Profile>,
        recipient: Option<&Profile>,
    ) -> Result<NewSwapRequest, SwapFormError> {
        let requester = requester.ok_or(SwapFormError::ProfileRequired)?;
        let recipient = recipient.ok_or(SwapFormError::RecipientNotFound)?;

        if recipient.id == requester.id {
            return Err(SwapFormError::OwnProfile);
        }
        if !recipient.is_visible_to(requester.owner_user_id) {
            return Err(SwapFormError::RecipientPrivate);
        }

        let skill_offered = self.skill_offered.trim();
        let skill_wanted = self.skill_wanted.trim();
        let message = self.message.trim();

        let missing: Vec<&'static str> = [
            ("skill_offered", skill_offered),
            ("skill_wanted", skill_wanted),
            ("message", message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(SwapFormError::MissingFields(missing));
        }

        for (owner, skill) in [(requester, skill_offered), (recipient, skill_wanted)] {
            if !owner.offers(skill) {
                return Err(SwapFormError::SkillNotOffered {
                    owner: owner.name.clone(),
                    skill: skill.to_string(),
                });
            }
        }

        Ok(NewSwapRequest {
            requester_profile_id: requester.id,
            recipient_profile_id: recipient.id,
            skill_offered: skill_offered.to_string(),
            skill_wanted: skill_wanted.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{tests::new_profile, Store};
    use uuid::Uuid;

    fn pair() -> (Profile, Profile) {
        let store = Store::new(16);
        let a = store
            .create_profile(new_profile(Uuid::new_v4(), "Alex", &["React"]))
            .unwrap();
        let b = store
            .create_profile(new_profile(Uuid::new_v4(), "Sarah", &["Design"]))
            .unwrap();
        (a, b)
    }

    fn form(offered: &str, wanted: &str, message: &str) -> SwapRequestForm {
        SwapRequestForm {
            skill_offered: offered.to_string(),
            skill_wanted: wanted.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_form_produces_request() {
        let (a, b) = pair();

        let new = form("React", "Design", "  Happy to pair!  ")
            .validate(Some(&a), Some(&b))
            .unwrap();

        assert_eq!(new.requester_profile_id, a.id);
        assert_eq!(new.recipient_profile_id, b.id);
        assert_eq!(new.skill_offered, "React");
        assert_eq!(new.skill_wanted, "Design");
        assert_eq!(new.message, "Happy to pair!");
    }

    #[test]
    fn requester_needs_a_profile_and_recipient_must_exist() {
        let (a, b) = pair();
        let f = form("React", "Design", "hi");

        assert_eq!(f.validate(None, Some(&b)), Err(SwapFormError::ProfileRequired));
        assert_eq!(f.validate(Some(&a), None), Err(SwapFormError::RecipientNotFound));
        assert_eq!(f.validate(Some(&a), Some(&a)), Err(SwapFormError::OwnProfile));
    }

    #[test]
    fn private_recipient_is_refused() {
        let (a, mut b) = pair();
        b.is_public = false;

        let err = form("React", "Design", "hi").validate(Some(&a), Some(&b));

        assert_eq!(err, Err(SwapFormError::RecipientPrivate));
    }

    #[test]
    fn blank_fields_are_reported_together() {
        let (a, b) = pair();

        let err = form(" ", "Design", "\n").validate(Some(&a), Some(&b)).unwrap_err();

        assert_eq!(err, SwapFormError::MissingFields(vec!["skill_offered", "message"]));
        assert_eq!(
            err.to_string(),
            "Please fill in all fields: skill_offered, message"
        );
    }

    #[test]
    fn skills_must_come_from_the_right_profile() {
        let (a, b) = pair();

        let wrong_offer = form("Design", "Design", "hi").validate(Some(&a), Some(&b));
        assert_eq!(
            wrong_offer,
            Err(SwapFormError::SkillNotOffered {
                owner: "Alex".to_string(),
                skill: "Design".to_string(),
            })
        );

        let wrong_want = form("React", "Python", "hi").validate(Some(&a), Some(&b));
        assert!(matches!(
            wrong_want,
            Err(SwapFormError::SkillNotOffered { ref owner, .. }) if owner == "Sarah"
        ));
    }
}
