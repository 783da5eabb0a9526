use serde::Serialize;

use crate::domain::UserRole;
use crate::session::routes::Route;

/// Sidebar entry, visible to the listed roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub roles: &'static [UserRole],
}

impl NavItem {
    pub fn path(&self) -> &'static str {
        self.route.path()
    }

    pub fn visible_to(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }
}

const EVERYONE: &[UserRole] = &[UserRole::Client, UserRole::Admin, UserRole::Talent];

pub const NAVIGATION: [NavItem; 7] = [
    NavItem {
        label: "Dashboard",
        route: Route::Dashboard,
        roles: EVERYONE,
    },
    NavItem {
        label: "Job Offers",
        route: Route::Jobs,
        roles: EVERYONE,
    },
    NavItem {
        label: "Talent Requests",
        route: Route::Requests,
        roles: &[UserRole::Client, UserRole::Admin],
    },
    NavItem {
        label: "Talent Profiles",
        route: Route::Talents,
        roles: &[UserRole::Client, UserRole::Admin],
    },
    NavItem {
        label: "My Profile",
        route: Route::Profile,
        roles: &[UserRole::Talent],
    },
    NavItem {
        label: "Assessments",
        route: Route::Assessments,
        roles: &[UserRole::Admin, UserRole::Talent],
    },
    NavItem {
        label: "Pipeline",
        route: Route::Pipeline,
        roles: &[UserRole::Admin, UserRole::Talent],
    },
];

/// Sidebar rows for `role`, in table order.
pub fn navigation_for(role: UserRole) -> Vec<&'static NavItem> {
    NAVIGATION.iter().filter(|item| item.visible_to(role)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: UserRole) -> Vec<&'static str> {
        navigation_for(role).iter().map(|item| item.label).collect()
    }

    #[test]
    fn each_role_sees_its_declared_rows() {
        assert_eq!(
            labels(UserRole::Client),
            vec!["Dashboard", "Job Offers", "Talent Requests", "Talent Profiles"]
        );
        assert_eq!(
            labels(UserRole::Admin),
            vec![
                "Dashboard",
                "Job Offers",
                "Talent Requests",
                "Talent Profiles",
                "Assessments",
                "Pipeline"
            ]
        );
        assert_eq!(
            labels(UserRole::Talent),
            vec!["Dashboard", "Job Offers", "My Profile", "Assessments", "Pipeline"]
        );
    }

    #[test]
    fn talent_never_sees_talent_requests() {
        assert!(navigation_for(UserRole::Talent)
            .iter()
            .all(|item| item.route != Route::Requests));
    }
}
