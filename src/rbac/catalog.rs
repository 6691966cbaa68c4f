//! Permission catalog
//!
//! Single source of truth for the permission taxonomy and the role→permission
//! mapping. The mapping is versioned code: changing it requires a redeploy
//! plus a [`crate::rbac::store::RolePermissionStore::reinitialize`] call to
//! refresh the persisted mirror, and an explicit profile resync if already
//! materialized permission snapshots must pick up the change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Atomic capability identifier.
///
/// Identifiers never change meaning once shipped; the wire/storage form is
/// the snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // Administration
    ManageUsers,
    ManageRoles,
    ViewAuditLogs,
    SystemSettings,
    // Security events
    ManageSecurityEvents,
    ViewAllEvents,
    ResolveEvents,
    CreateEvents,
    // Guard dogs
    ManageGuardDogs,
    ViewGuardDogs,
    UpdateDogStatus,
    // Bodyguards
    ManageBodyguards,
    ViewBodyguards,
    UpdateGuardStatus,
    // CCTV
    ManageCameras,
    ViewCameras,
    ControlCameras,
    // Dashboard and reports
    ViewDashboard,
    ViewReports,
    GenerateReports,
    // AI features
    UseAiChat,
    // Zone access
    AccessAllZones,
    // SIEM
    ViewSiem,
    ManageSiem,
    ViewNetworkLogs,
    ManageNetworkSecurity,
}

impl Permission {
    /// Every permission in the taxonomy
    pub const ALL: [Permission; 26] = [
        Permission::ManageUsers,
        Permission::ManageRoles,
        Permission::ViewAuditLogs,
        Permission::SystemSettings,
        Permission::ManageSecurityEvents,
        Permission::ViewAllEvents,
        Permission::ResolveEvents,
        Permission::CreateEvents,
        Permission::ManageGuardDogs,
        Permission::ViewGuardDogs,
        Permission::UpdateDogStatus,
        Permission::ManageBodyguards,
        Permission::ViewBodyguards,
        Permission::UpdateGuardStatus,
        Permission::ManageCameras,
        Permission::ViewCameras,
        Permission::ControlCameras,
        Permission::ViewDashboard,
        Permission::ViewReports,
        Permission::GenerateReports,
        Permission::UseAiChat,
        Permission::AccessAllZones,
        Permission::ViewSiem,
        Permission::ManageSiem,
        Permission::ViewNetworkLogs,
        Permission::ManageNetworkSecurity,
    ];

    /// The snake_case identifier used at the storage/wire edge
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ManageUsers => "manage_users",
            Permission::ManageRoles => "manage_roles",
            Permission::ViewAuditLogs => "view_audit_logs",
            Permission::SystemSettings => "system_settings",
            Permission::ManageSecurityEvents => "manage_security_events",
            Permission::ViewAllEvents => "view_all_events",
            Permission::ResolveEvents => "resolve_events",
            Permission::CreateEvents => "create_events",
            Permission::ManageGuardDogs => "manage_guard_dogs",
            Permission::ViewGuardDogs => "view_guard_dogs",
            Permission::UpdateDogStatus => "update_dog_status",
            Permission::ManageBodyguards => "manage_bodyguards",
            Permission::ViewBodyguards => "view_bodyguards",
            Permission::UpdateGuardStatus => "update_guard_status",
            Permission::ManageCameras => "manage_cameras",
            Permission::ViewCameras => "view_cameras",
            Permission::ControlCameras => "control_cameras",
            Permission::ViewDashboard => "view_dashboard",
            Permission::ViewReports => "view_reports",
            Permission::GenerateReports => "generate_reports",
            Permission::UseAiChat => "use_ai_chat",
            Permission::AccessAllZones => "access_all_zones",
            Permission::ViewSiem => "view_siem",
            Permission::ManageSiem => "manage_siem",
            Permission::ViewNetworkLogs => "view_network_logs",
            Permission::ManageNetworkSecurity => "manage_network_security",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid permission: {}", s))
    }
}

/// Named role bundling a fixed set of permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full system access
    Admin,
    /// Manages security operations and personnel
    SecurityManager,
    /// Field security personnel
    Bodyguard,
    /// Guard dog management
    DogHandler,
    /// Surveillance systems operator
    CctvOperator,
    /// Read-only access
    Viewer,
}

impl Role {
    /// Every role, in catalog order
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::SecurityManager,
        Role::Bodyguard,
        Role::DogHandler,
        Role::CctvOperator,
        Role::Viewer,
    ];

    /// The snake_case identifier used at the storage/wire edge
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SecurityManager => "security_manager",
            Role::Bodyguard => "bodyguard",
            Role::DogHandler => "dog_handler",
            Role::CctvOperator => "cctv_operator",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .find(|r| r.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid role: {}", s))
    }
}

/// Ordered, deduplicated permission set for a role.
///
/// Total over the closed `Role` set; adding a role means adding both a
/// variant and an arm here (the completeness test below catches drift).
pub fn permissions_for_role(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => &Permission::ALL,
        Role::SecurityManager => &[
            Permission::ManageSecurityEvents,
            Permission::ViewAllEvents,
            Permission::ResolveEvents,
            Permission::CreateEvents,
            Permission::ViewGuardDogs,
            Permission::UpdateDogStatus,
            Permission::ViewBodyguards,
            Permission::UpdateGuardStatus,
            Permission::ViewCameras,
            Permission::ControlCameras,
            Permission::ViewDashboard,
            Permission::ViewReports,
            Permission::GenerateReports,
            Permission::UseAiChat,
            Permission::AccessAllZones,
            Permission::ViewSiem,
            Permission::ViewNetworkLogs,
        ],
        Role::Bodyguard => &[
            Permission::ViewAllEvents,
            Permission::ResolveEvents,
            Permission::CreateEvents,
            Permission::ViewGuardDogs,
            Permission::ViewBodyguards,
            Permission::UpdateGuardStatus,
            Permission::ViewCameras,
            Permission::ViewDashboard,
            Permission::UseAiChat,
        ],
        Role::DogHandler => &[
            Permission::ViewAllEvents,
            Permission::CreateEvents,
            Permission::ManageGuardDogs,
            Permission::ViewGuardDogs,
            Permission::UpdateDogStatus,
            Permission::ViewBodyguards,
            Permission::ViewCameras,
            Permission::ViewDashboard,
            Permission::UseAiChat,
        ],
        Role::CctvOperator => &[
            Permission::ViewAllEvents,
            Permission::CreateEvents,
            Permission::ResolveEvents,
            Permission::ViewGuardDogs,
            Permission::ViewBodyguards,
            Permission::ManageCameras,
            Permission::ViewCameras,
            Permission::ControlCameras,
            Permission::ViewDashboard,
            Permission::UseAiChat,
            Permission::ViewSiem,
            Permission::ViewNetworkLogs,
        ],
        Role::Viewer => &[
            Permission::ViewAllEvents,
            Permission::ViewGuardDogs,
            Permission::ViewBodyguards,
            Permission::ViewCameras,
            Permission::ViewDashboard,
        ],
    }
}

/// Human-readable description of a role, used to seed the persisted mirror
pub fn role_description(role: Role) -> &'static str {
    match role {
        Role::Admin => "Full system access with all administrative privileges",
        Role::SecurityManager => "Manages security operations and personnel",
        Role::Bodyguard => "Field security personnel with operational access",
        Role::DogHandler => "Specialized in guard dog management and operations",
        Role::CctvOperator => "Monitors and controls surveillance systems",
        Role::Viewer => "Read-only access to security information",
    }
}
