use baseline_core::UserId;
use serde::Serialize;

/// Acknowledgement returned by the profile write endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileResponse {
    pub message: &'static str,
    pub user_id: UserId,
    pub email: String,
}
