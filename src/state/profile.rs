//! Profile edit buffer: transient form state held until a save round
//! trip commits it wholesale.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{LearningProfile, ProfileUpdate, User};

/// Toggle membership of `value` in a chip-style selection list,
/// preserving the order in which items were picked.
pub fn toggle_selection(selected: &mut Vec<String>, value: &str) {
    if let Some(position) = selected.iter().position(|item| item == value) {
        selected.remove(position);
    } else {
        selected.push(value.to_owned());
    }
}

/// The profile form as edited on the profile page. Seeded from the
/// committed session user; the session is only touched by a successful
/// save, so cancel simply re-seeds.
#[derive(Clone, Debug, Default)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub learning_profile: LearningProfile,
}

impl ProfileForm {
    /// Seed the buffer from the last committed user.
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            learning_profile: user.learning_profile.clone(),
        }
    }

    /// The full payload a save sends.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            username: self.username.clone(),
            email: self.email.clone(),
            learning_profile: self.learning_profile.clone(),
        }
    }

    pub fn toggle_subject(&mut self, subject: &str) {
        toggle_selection(&mut self.learning_profile.subjects, subject);
    }

    pub fn toggle_goal(&mut self, goal: &str) {
        toggle_selection(&mut self.learning_profile.learning_goals, goal);
    }

    pub fn toggle_strength(&mut self, strength: &str) {
        toggle_selection(&mut self.learning_profile.strengths, strength);
    }

    pub fn toggle_weakness(&mut self, weakness: &str) {
        toggle_selection(&mut self.learning_profile.weaknesses, weakness);
    }
}
