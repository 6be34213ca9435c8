use thiserror::Error;
use tracing::info;

use crate::database::ActivityStore;

/// Why a signup or unregister request was rejected. All of these are client-correctable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Adds `email` to the end of the activity's roster.
///
/// Checks run in order: the activity must exist, then the contact must not already be on
/// the roster. `max_participants` is not consulted, so a full activity still accepts signups.
pub async fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let mut directory = store.write().await;
    let activity = directory
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    if !activity.participants.insert(email) {
        return Err(SignupError::AlreadySignedUp);
    }

    info!(
        activity = activity_name,
        email,
        participants = activity.participants.len(),
        "participant signed up"
    );
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Removes `email` from the activity's roster, leaving everyone else in signup order.
pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let mut directory = store.write().await;
    let activity = directory
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    if !activity.participants.remove(email) {
        return Err(SignupError::NotSignedUp);
    }

    info!(
        activity = activity_name,
        email,
        participants = activity.participants.len(),
        "participant unregistered"
    );
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
