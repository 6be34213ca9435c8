use serde::{Deserialize, Serialize};

// One row of the activity directory. The name is the directory key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // Advisory only: signup does not check it.
    pub max_participants: u32,
    pub participants: Roster,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().copied().collect(),
        }
    }
}

/// Signup-ordered list of contact strings, each present at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn contains(&self, email: &str) -> bool {
        self.0.iter().any(|p| p == email)
    }

    /// Appends `email` unless it is already on the roster. Returns whether it was added.
    pub fn insert(&mut self, email: &str) -> bool {
        if self.contains(email) {
            return false;
        }
        self.0.push(email.to_string());
        true
    }

    /// Removes `email`, keeping the order of everyone else. Returns whether it was present.
    pub fn remove(&mut self, email: &str) -> bool {
        match self.0.iter().position(|p| p == email) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> FromIterator<&'a str> for Roster {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut roster = Roster::default();
        for email in iter {
            roster.insert(email);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_signup_order_and_rejects_duplicates() {
        let mut roster: Roster = ["a@x.edu", "b@x.edu"].into_iter().collect();
        assert!(roster.insert("c@x.edu"));
        assert!(!roster.insert("a@x.edu"));
        assert_eq!(roster.as_slice(), ["a@x.edu", "b@x.edu", "c@x.edu"]);
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let mut roster: Roster = ["a@x.edu", "b@x.edu", "c@x.edu"].into_iter().collect();
        assert!(roster.remove("b@x.edu"));
        assert!(!roster.remove("b@x.edu"));
        assert_eq!(roster.as_slice(), ["a@x.edu", "c@x.edu"]);
    }

    #[test]
    fn collecting_drops_repeated_contacts() {
        let roster: Roster = ["a@x.edu", "a@x.edu", "b@x.edu"].into_iter().collect();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn activity_serializes_to_record_shape() {
        let activity = Activity::new("Chess", "Fridays", 12, &["michael@mergington.edu"]);
        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "description": "Chess",
                "schedule": "Fridays",
                "max_participants": 12,
                "participants": ["michael@mergington.edu"],
            })
        );
    }
}
