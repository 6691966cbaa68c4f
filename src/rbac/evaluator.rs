//! Permission evaluator
//!
//! Pure, side-effect-free predicates consumed by every gated operation.
//! These are the fail-closed building blocks: a missing or inactive profile
//! answers `false` to everything. The caller-resolving forms live on
//! [`crate::rbac::profiles::ProfileService`].

use crate::rbac::catalog::Permission;
use crate::rbac::types::UserProfile;

/// Whether the profile holds `permission`.
///
/// False when the profile is absent, inactive, or does not contain the
/// permission in its materialized list.
pub fn has_permission(profile: Option<&UserProfile>, permission: Permission) -> bool {
    match profile {
        Some(p) if p.is_active => p.permissions.contains(&permission),
        _ => false,
    }
}

/// Whether the profile holds at least one of `permissions`
pub fn has_any_permission(profile: Option<&UserProfile>, permissions: &[Permission]) -> bool {
    permissions.iter().any(|&p| has_permission(profile, p))
}

/// Whether the profile holds every one of `permissions`
pub fn has_all_permissions(profile: Option<&UserProfile>, permissions: &[Permission]) -> bool {
    permissions.iter().all(|&p| has_permission(profile, p))
}

/// Whether the profile may see `zone`.
///
/// Unconditionally true for holders of `access_all_zones` (the zone
/// assignment is ignored entirely, including an empty one); otherwise true
/// iff the zone is among the profile's assigned zones.
pub fn can_access_zone(profile: Option<&UserProfile>, zone: &str) -> bool {
    if has_permission(profile, Permission::AccessAllZones) {
        return true;
    }
    profile
        .map(|p| p.assigned_zones.iter().any(|z| z == zone))
        .unwrap_or(false)
}
