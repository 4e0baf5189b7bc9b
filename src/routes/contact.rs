use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use lubricants_contact::{ContactInput, Inquiry, SUCCESS_MESSAGE};

use crate::{
    error::{AppError, MessageBody},
    routes::AppState,
};

/// POST /api/contact
///
/// Checks run in order: fields, then mail configuration, then the two sends.
pub async fn post_contact(
    State(app_state): State<AppState>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<MessageBody>, AppError> {
    // An unreadable body has no fields
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable contact payload");
            ContactInput::default()
        }
    };

    let inquiry = Inquiry::try_from(input)?;

    let Some(notifier) = app_state.notifier.as_ref() else {
        return Err(AppError::NotConfigured);
    };

    notifier.notify(&inquiry).await.map_err(AppError::Delivery)?;

    Ok(Json(MessageBody::new(SUCCESS_MESSAGE)))
}

/// Any method other than POST on /api/contact
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
