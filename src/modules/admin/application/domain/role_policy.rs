use crate::auth::application::domain::entities::{User, UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolicyViolation {
    #[error("You cannot change your own role")]
    SelfRoleChange,

    #[error("You cannot deactivate your own account")]
    SelfDeactivation,

    #[error("Only a super admin can manage admin accounts")]
    InsufficientPrivileges,
}

/// Admins move users between student and instructor. Granting or revoking
/// admin rights is reserved to super admins.
pub fn authorize_role_change(
    actor: &User,
    target: &User,
    new_role: UserRole,
) -> Result<(), PolicyViolation> {
    if actor.id == target.id {
        return Err(PolicyViolation::SelfRoleChange);
    }
    if !actor.role.is_admin() {
        return Err(PolicyViolation::InsufficientPrivileges);
    }
    let touches_admin = new_role.is_admin() || target.role.is_admin();
    if touches_admin && actor.role != UserRole::SuperAdmin {
        return Err(PolicyViolation::InsufficientPrivileges);
    }
    Ok(())
}

/// Any admin may toggle any other account, admins included. Only
/// self-deactivation is refused.
pub fn authorize_status_change(
    actor: &User,
    target: &User,
    is_active: bool,
) -> Result<(), PolicyViolation> {
    if actor.id == target.id && !is_active {
        return Err(PolicyViolation::SelfDeactivation);
    }
    if !actor.role.is_admin() {
        return Err(PolicyViolation::InsufficientPrivileges);
    }
    Ok(())
}
