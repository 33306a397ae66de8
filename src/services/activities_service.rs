use thiserror::Error;
use tracing::info;

use crate::database::activities_repo::{ActivitiesSnapshot, ActivitiesStore};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

pub async fn list_activities(store: &ActivitiesStore) -> ActivitiesSnapshot {
    store.snapshot().await
}

/// Appends `email` to the roster. Capacity is not checked.
pub async fn signup(
    store: &ActivitiesStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let mut activity = store
        .lock(activity_name)
        .await
        .ok_or(ActivityError::NotFound)?;

    if activity.has_participant(email) {
        return Err(ActivityError::AlreadyRegistered);
    }
    activity.participants.push(email.to_string());

    info!(
        activity = %activity_name,
        email = %email,
        participants = activity.participants.len(),
        "signup"
    );
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn unregister(
    store: &ActivitiesStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let mut activity = store
        .lock(activity_name)
        .await
        .ok_or(ActivityError::NotFound)?;

    let Some(pos) = activity.participants.iter().position(|p| p == email) else {
        return Err(ActivityError::NotRegistered);
    };
    activity.participants.remove(pos);

    info!(
        activity = %activity_name,
        email = %email,
        participants = activity.participants.len(),
        "unregister"
    );
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
