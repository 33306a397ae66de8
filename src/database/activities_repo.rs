use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::database::activities_seed;
use crate::models::Activity;

pub type ActivitiesSnapshot = BTreeMap<String, Activity>;

/// In-memory activity directory.
///
/// The set of names is fixed at construction. Each activity has its own lock,
/// so roster updates on one activity never block another. Cloning is cheap and
/// every clone sees the same rosters.
#[derive(Clone, Debug)]
pub struct ActivitiesStore {
    activities: Arc<BTreeMap<String, Mutex<Activity>>>,
}

impl ActivitiesStore {
    pub fn new(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let activities = activities
            .into_iter()
            .map(|(name, mut activity)| {
                dedup_in_order(&mut activity.participants);
                (name, Mutex::new(activity))
            })
            .collect();
        Self {
            activities: Arc::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(activities_seed::seed_activities())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.activities.contains_key(name)
    }

    /// Locks one activity for a read-modify-write. `None` if the name is unknown.
    pub async fn lock(&self, name: &str) -> Option<MutexGuard<'_, Activity>> {
        match self.activities.get(name) {
            Some(slot) => Some(slot.lock().await),
            None => None,
        }
    }

    /// Copies every activity, locking them one at a time.
    pub async fn snapshot(&self) -> ActivitiesSnapshot {
        let mut out = BTreeMap::new();
        for (name, slot) in self.activities.iter() {
            let activity = slot.lock().await.clone();
            out.insert(name.clone(), activity);
        }
        out
    }
}

fn dedup_in_order(participants: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    participants.retain(|email| seen.insert(email.clone()));
}
