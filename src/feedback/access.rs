use serde::{Deserialize, Serialize};

/// Who is asking to see aggregate dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// System administrator.
    Admin,
    /// Hospital staff member.
    Staff,
    /// Patient or visitor.
    Patient,
}

/// Capability check for viewing aggregate dashboards.
///
/// Pluggable so a deployment can swap in its own policy; no credentials
/// live anywhere near this crate.
pub trait DashboardPolicy {
    /// Whether `role` may view aggregate dashboards.
    fn can_view_dashboard(&self, role: Role) -> bool;
}

/// Default policy: administrative and staff roles see dashboards,
/// patients see only their own submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleDashboardPolicy;

impl DashboardPolicy for RoleDashboardPolicy {
    fn can_view_dashboard(&self, role: Role) -> bool {
        matches!(role, Role::Admin | Role::Staff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_and_admin_see_dashboards_patients_do_not() {
        let policy = RoleDashboardPolicy;
        assert!(policy.can_view_dashboard(Role::Admin));
        assert!(policy.can_view_dashboard(Role::Staff));
        assert!(!policy.can_view_dashboard(Role::Patient));
    }
}
