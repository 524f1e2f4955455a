mod health;
mod profile;

pub use health::health_handler;
pub use profile::{get_profile_handler, method_not_allowed_handler, put_profile_handler};
