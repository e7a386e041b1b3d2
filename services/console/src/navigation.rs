//! Role-filtered navigation menu
//!
//! The menu is a convenience, not an authorization boundary: it hides staff
//! management from non-managers and nothing else.

use auth::Role;
use serde::Serialize;

/// One entry of the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    #[serde(skip)]
    pub manager_only: bool,
}

const fn item(label: &'static str, path: &'static str) -> MenuItem {
    MenuItem {
        label,
        path,
        manager_only: false,
    }
}

/// Full menu in display order
pub const MENU: [MenuItem; 6] = [
    item("Dashboard", "/dashboard"),
    item("Rooms", "/rooms"),
    item("Guests", "/guests"),
    item("Bookings", "/bookings"),
    item("Feedbacks", "/feedbacks"),
    MenuItem {
        label: "Staff Management",
        path: "/staff",
        manager_only: true,
    },
];

/// Menu entries visible to `role`, in display order
pub fn visible_menu(role: Role) -> Vec<MenuItem> {
    MENU.iter()
        .filter(|item| !item.manager_only || role.is_manager())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Role) -> Vec<&'static str> {
        visible_menu(role).iter().map(|item| item.label).collect()
    }

    #[test]
    fn test_manager_sees_everything() {
        assert_eq!(visible_menu(Role::Manager), MENU.to_vec());
    }

    #[test]
    fn test_other_roles_lose_only_staff_management() {
        for role in [Role::User, Role::Receptionist] {
            assert_eq!(
                labels(role),
                ["Dashboard", "Rooms", "Guests", "Bookings", "Feedbacks"]
            );
        }
    }

    #[test]
    fn test_serializes_label_and_path() {
        assert_eq!(
            serde_json::to_value(MENU[5]).unwrap(),
            serde_json::json!({"label": "Staff Management", "path": "/staff"})
        );
    }
}
