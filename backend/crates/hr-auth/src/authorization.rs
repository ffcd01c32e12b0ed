use crate::{AuthError, IdentityContext, Result as AuthErrorResult, RoleAllowList};

/// Deny unless an identity is present and its role is on the allow-list
#[track_caller]
pub fn authorize(
    identity: Option<&IdentityContext>,
    allowed: &RoleAllowList,
) -> AuthErrorResult<()> {
    let Some(identity) = identity else {
        return Err(AuthError::forbidden("User role not found in context"));
    };

    if identity.role.is_empty() {
        return Err(AuthError::forbidden("User role is empty"));
    }

    if !allowed.contains(&identity.role) {
        return Err(AuthError::forbidden(
            "You do not have permission to access this resource",
        ));
    }

    Ok(())
}
