mod seed;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::Activity;

/// Errors surfaced by directory operations.
///
/// The messages are the exact strings clients see in the `detail` field of
/// error responses, so changing them is a breaking API change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

/// Owns the mapping from activity name to [`Activity`] record.
///
/// Constructed once at startup and handed to the router as shared state.
/// Cloning hands out another handle to the same underlying map. Every
/// operation takes the lock exactly once, so the check-then-mutate
/// sequences in [`signup`](Self::signup) and
/// [`unregister`](Self::unregister) cannot interleave across requests.
#[derive(Clone)]
pub struct ActivityDirectory {
    activities: Arc<Mutex<BTreeMap<String, Activity>>>,
}

impl ActivityDirectory {
    /// Create a directory seeded with the school's activity table.
    pub fn with_seed() -> Self {
        Self::from_activities(seed::activities())
    }

    /// Create a directory holding an explicit activity set.
    pub fn from_activities(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: Arc::new(Mutex::new(activities)),
        }
    }

    /// Return the full name-to-record mapping.
    pub fn list(&self) -> BTreeMap<String, Activity> {
        self.activities
            .lock()
            .expect("directory lock poisoned")
            .clone()
    }

    /// Register `email` for the named activity.
    ///
    /// Appends to the end of the roster, so participant order is signup
    /// order. Capacity is not checked: a roster may grow past
    /// `max_participants`.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activities = self.activities.lock().expect("directory lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Remove `email` from the named activity's roster.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activities = self.activities.lock().expect("directory lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotRegistered)?;

        activity.participants.remove(position);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}
