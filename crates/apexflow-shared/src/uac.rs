//! Shared items related to user account control

mod permissions;
mod responses;
mod role;
mod user;

pub use permissions::{Permission, Permissions};
pub use responses::LoginResponse;
pub use role::{
    role_text, ROLE_TEXT_GUEST, ROLE_TEXT_SEPARATOR, ROLE_TEXT_STANDARD, ROLE_TEXT_UNKNOWN,
};
pub use user::{UserInfo, DISPLAY_NAME_FALLBACK, DISPLAY_NAME_NOT_LOGGED_IN};
