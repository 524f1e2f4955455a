use crate::auth::Caller;
use crate::error::{ApiError, Result};
use crate::model::SaveProfileResponse;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::Method;
use axum::Json;
use baseline_core::{ProfileDraft, ProfileRecord};

pub async fn get_profile_handler(
    State(state): State<AppState>,
    Caller(identity): Caller,
) -> Result<Json<ProfileRecord>> {
    match state.profiles().get_profile(&identity.user_id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound("Profile not found")),
    }
}

pub async fn put_profile_handler(
    State(state): State<AppState>,
    Caller(identity): Caller,
    payload: std::result::Result<Json<ProfileDraft>, JsonRejection>,
) -> Result<Json<SaveProfileResponse>> {
    let Json(draft) = payload.map_err(payload_rejection)?;

    let saved = state.profiles().put_profile(&identity, draft).await?;

    Ok(Json(SaveProfileResponse {
        message: "Profile saved",
        user_id: saved.user_id,
        email: saved.email,
    }))
}

pub async fn method_not_allowed_handler(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method.to_string())
}

fn payload_rejection(rejection: JsonRejection) -> ApiError {
    let message = match &rejection {
        JsonRejection::MissingJsonContentType(_) => "Request body is required",
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            "Invalid JSON in request body"
        }
        _ => "Invalid request body",
    };
    ApiError::InvalidPayload(message)
}
