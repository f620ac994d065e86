use super::{Permission, Permissions, UserInfo};

pub const ROLE_TEXT_GUEST: &str = "Guest";
pub const ROLE_TEXT_UNKNOWN: &str = "Unknown Role";
pub const ROLE_TEXT_STANDARD: &str = "Standard User";
pub const ROLE_TEXT_SEPARATOR: &str = " · ";

/// Summarizes a user's role for display.
///
/// Precedence is guest, then admin, then the labels of every held module
/// permission, then standard user. A guest is shown as a guest even if the
/// admin flag is also set.
pub fn role_text(user: Option<&UserInfo>, permissions: Option<&Permissions>) -> String {
    if user.is_some_and(|x| x.is_guest) {
        return ROLE_TEXT_GUEST.to_string();
    }
    let Some(permissions) = permissions else {
        return ROLE_TEXT_UNKNOWN.to_string();
    };
    if permissions.contains(Permission::Admin) {
        return Permission::Admin.role_label().to_string();
    }
    let labels: Vec<&str> = permissions
        .granted()
        .filter(|p| p.is_module())
        .map(Permission::role_label)
        .collect();
    if labels.is_empty() {
        ROLE_TEXT_STANDARD.to_string()
    } else {
        labels.join(ROLE_TEXT_SEPARATOR)
    }
}
