use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use crate::models::Activity;

/// Why an enroll or withdraw request was rejected. The display strings are
/// the `detail` texts clients pattern-match on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Handle to the in-memory activity directory.
///
/// Cheap to clone; every clone shares the same map behind a directory-wide
/// lock, so a handle can be passed around as router state the way a
/// connection pool would be. Enroll and withdraw do their check-then-mutate
/// inside a single write-lock acquisition, which keeps the "at most once on
/// a roster" and "must be enrolled before removal" invariants intact under
/// concurrent requests.
#[derive(Clone)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityDirectory {
    /// Directory populated with the fixed startup dataset. Activities are
    /// never created or deleted after this; only rosters change.
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed())),
        }
    }

    /// Full name → activity mapping, cloned out so the lock is released
    /// before the response is serialized.
    pub fn list(&self) -> BTreeMap<String, Activity> {
        self.read().clone()
    }

    /// Adds `email` to the activity's roster. Capacity is advisory and
    /// deliberately not checked here.
    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's roster.
    pub fn withdraw(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotSignedUp)?;
        activity.participants.remove(position);
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, Activity>> {
        // A poisoned lock only means a panicking request was caught mid-write;
        // the map itself is still usable.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<String, Activity>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn activity(
    description: &str,
    schedule: &str,
    instructor: Option<&str>,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        instructor: instructor.map(str::to_string),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn seed() -> BTreeMap<String, Activity> {
    BTreeMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                Some("Mr. Chen"),
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            activity(
                "Competitive basketball team and practice sessions",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                Some("Coach Martinez"),
                15,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Tennis Club".to_string(),
            activity(
                "Learn tennis skills and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                Some("Coach Williams"),
                10,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Perform in plays and theatrical productions",
                "Wednesdays, 3:30 PM - 5:00 PM",
                Some("Ms. Rodriguez"),
                25,
                &["sophie@mergington.edu", "lucas@mergington.edu"],
            ),
        ),
        (
            "Art Studio".to_string(),
            activity(
                "Explore painting, sculpture, and digital art",
                "Mondays and Fridays, 3:30 PM - 4:30 PM",
                Some("Mr. Thompson"),
                16,
                &["isabella@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Develop argumentation and public speaking skills",
                "Tuesdays, 4:00 PM - 5:30 PM",
                Some("Ms. Garcia"),
                14,
                &["noah@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Science Club".to_string(),
            activity(
                "Conduct experiments and explore STEM topics",
                "Thursdays, 3:30 PM - 5:00 PM",
                Some("Dr. Patel"),
                18,
                &["olivia@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                None,
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                None,
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ])
}
