use user_lib::entities::Role;

use crate::auth::Principal;
use crate::error::ApiError;

/// Every operation the API exposes, one variant per route handler.
/// The policy table below is the single place that says who may call
/// what; handlers never hardcode role checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // Self-service
    ViewOwnProfile,
    UpdateOwnProfile,
    SaveOwnProfile,
    OwnLanguage,
    UpdateLanguage,
    UpdateProfilePicture,
    DeleteProfilePicture,
    EmailNotificationOptions,
    RoleOptions,
    DeactivationReasons,
    // Management
    UpdateStatus,
    UpdateRole,
    ManagementUpdate,
    ForceLastActivity,
    ListUsers,
    FilterUsers,
    ManagementList,
    ManagementSearch,
    SearchBy,
    DeactivateAll,
    ScheduleDeleteDeactivated,
    IsOnline,
    FindByEmail,
    FindById,
    FindAll,
    FindAllByEmailNotification,
    ActivatedUsersAmount,
}

/// What a caller must present to run an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any authenticated caller, regardless of role.
    Authenticated,
    /// An authenticated caller holding at least one of these roles.
    AnyOf(&'static [Role]),
}

const ADMIN_ONLY: &[Role] = &[Role::Admin];

pub fn access(operation: Operation) -> Access {
    use Operation::*;

    match operation {
        ViewOwnProfile | UpdateOwnProfile | SaveOwnProfile | OwnLanguage | UpdateLanguage
        | UpdateProfilePicture | DeleteProfilePicture | EmailNotificationOptions | RoleOptions
        | DeactivationReasons => Access::Authenticated,

        UpdateStatus | UpdateRole | ManagementUpdate | ForceLastActivity | ListUsers
        | FilterUsers | ManagementList | ManagementSearch | SearchBy | DeactivateAll
        | ScheduleDeleteDeactivated | IsOnline | FindByEmail | FindById | FindAll
        | FindAllByEmailNotification | ActivatedUsersAmount => Access::AnyOf(ADMIN_ONLY),
    }
}

/// Admits or refuses a caller for an operation. Authentication is
/// judged before roles, so an anonymous caller always sees 401 even
/// on role-gated routes, and this must run before any body or
/// parameter parsing.
pub fn authorize(
    operation: Operation,
    principal: Option<&Principal>,
) -> Result<&Principal, ApiError> {
    let Some(principal) = principal else {
        tracing::debug!(operation = ?operation, "anonymous caller refused");
        return Err(ApiError::unauthenticated());
    };

    match access(operation) {
        Access::Authenticated => Ok(principal),
        Access::AnyOf(allowed) => {
            if principal.has_any_role(allowed) {
                Ok(principal)
            } else {
                tracing::debug!(
                    operation = ?operation,
                    caller = %principal.email,
                    roles = ?principal.roles,
                    "caller lacks required role"
                );
                Err(ApiError::forbidden())
            }
        }
    }
}
