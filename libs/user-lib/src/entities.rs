use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raised when a wire string does not name a known enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue(pub String);

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: {}", self.0)
    }
}

impl std::error::Error for UnknownValue {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_MODERATOR")]
    Moderator,
    #[serde(rename = "ROLE_EMPLOYEE")]
    Employee,
    #[serde(rename = "ROLE_UBS_EMPLOYEE")]
    UbsEmployee,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::User,
        Role::Admin,
        Role::Moderator,
        Role::Employee,
        Role::UbsEmployee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
            Role::Moderator => "ROLE_MODERATOR",
            Role::Employee => "ROLE_EMPLOYEE",
            Role::UbsEmployee => "ROLE_UBS_EMPLOYEE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_USER" => Ok(Role::User),
            "ROLE_ADMIN" => Ok(Role::Admin),
            "ROLE_MODERATOR" => Ok(Role::Moderator),
            "ROLE_EMPLOYEE" => Ok(Role::Employee),
            "ROLE_UBS_EMPLOYEE" => Ok(Role::UbsEmployee),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Created,
    Activated,
    Blocked,
    Deactivated,
}

impl UserStatus {
    pub const ALL: [UserStatus; 4] = [
        UserStatus::Created,
        UserStatus::Activated,
        UserStatus::Blocked,
        UserStatus::Deactivated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Created => "CREATED",
            UserStatus::Activated => "ACTIVATED",
            UserStatus::Blocked => "BLOCKED",
            UserStatus::Deactivated => "DEACTIVATED",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(UserStatus::Created),
            "ACTIVATED" => Ok(UserStatus::Activated),
            "BLOCKED" => Ok(UserStatus::Blocked),
            "DEACTIVATED" => Ok(UserStatus::Deactivated),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

/// How often a user wants activity digests mailed to them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailNotification {
    Disabled,
    Immediately,
    Daily,
    Weekly,
    Monthly,
}

impl EmailNotification {
    pub const ALL: [EmailNotification; 5] = [
        EmailNotification::Disabled,
        EmailNotification::Immediately,
        EmailNotification::Daily,
        EmailNotification::Weekly,
        EmailNotification::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailNotification::Disabled => "DISABLED",
            EmailNotification::Immediately => "IMMEDIATELY",
            EmailNotification::Daily => "DAILY",
            EmailNotification::Weekly => "WEEKLY",
            EmailNotification::Monthly => "MONTHLY",
        }
    }
}

impl fmt::Display for EmailNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmailNotification {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DISABLED" => Ok(EmailNotification::Disabled),
            "IMMEDIATELY" => Ok(EmailNotification::Immediately),
            "DAILY" => Ok(EmailNotification::Daily),
            "WEEKLY" => Ok(EmailNotification::Weekly),
            "MONTHLY" => Ok(EmailNotification::Monthly),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub email_notification: EmailNotification,
    pub language_code: String,
    pub city: Option<String>,
    pub user_credo: Option<String>,
    pub profile_picture_path: Option<String>,
    pub show_location: bool,
    pub show_contacts: bool,
    pub show_activity: bool,
    pub deactivation_reasons: Vec<String>,
    pub last_activity_time: NaiveDateTime,
    pub date_of_registration: NaiveDateTime,
}

/// The slice of a user's own record they may edit directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email_notification: EmailNotification,
}

/// Full profile payload saved from the profile page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub city: Option<String>,
    pub user_credo: Option<String>,
    pub show_location: bool,
    pub show_contacts: bool,
    pub show_activity: bool,
}

/// Fields an administrator may rewrite on any account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagementUpdate {
    pub name: String,
    pub email: String,
    pub user_credo: Option<String>,
    pub role: Role,
    pub status: UserStatus,
}

/// Per-column criteria for the management search. Every field is a
/// substring match; empty criteria match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagementCriteria {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub user_credo: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

/// Free-text filter over the user listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserFilter {
    pub search_text: Option<String>,
}

/// Profile picture upload. The base64 payload is mandatory, the raw
/// image part is optional and wins when both are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PictureUpload {
    pub base64: String,
    pub image: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn role_rejects_unknown_wire_name() {
        let err = "ROLE_SUPERUSER".parse::<Role>().unwrap_err();
        assert_eq!(err.0, "ROLE_SUPERUSER");
    }

    #[test]
    fn status_serializes_screaming_snake() {
        let json = serde_json::to_string(&UserStatus::Deactivated).unwrap();
        assert_eq!(json, "\"DEACTIVATED\"");
    }

    #[test]
    fn email_notification_parses_wire_name() {
        assert_eq!(
            "IMMEDIATELY".parse::<EmailNotification>(),
            Ok(EmailNotification::Immediately)
        );
    }
}
