use jiff::Timestamp;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: Timestamp,
    pub version: &'static str,
}
