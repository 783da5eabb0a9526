use serde::Serialize;

/// Dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Login,
    Dashboard,
    Jobs,
    Talents,
    Requests,
    Assessments,
    Pipeline,
    Profile,
}

impl Route {
    pub const ALL: [Self; 8] = [
        Self::Login,
        Self::Dashboard,
        Self::Jobs,
        Self::Talents,
        Self::Requests,
        Self::Assessments,
        Self::Pipeline,
        Self::Profile,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Jobs => "/jobs",
            Self::Talents => "/talents",
            Self::Requests => "/requests",
            Self::Assessments => "/assessments",
            Self::Pipeline => "/pipeline",
            Self::Profile => "/profile",
        }
    }
}

/// What a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Resolution {
    Page { route: Route },
    Redirect { to: Route },
    NotFound,
}

/// Exact-match lookup; the root redirects to the login page.
pub fn resolve(path: &str) -> Resolution {
    if path == "/" {
        return Resolution::Redirect { to: Route::Login };
    }
    Route::ALL
        .into_iter()
        .find(|route| route.path() == path)
        .map_or(Resolution::NotFound, |route| Resolution::Page { route })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_login() {
        assert_eq!(resolve("/"), Resolution::Redirect { to: Route::Login });
    }

    #[test]
    fn known_paths_resolve_to_their_page() {
        for route in Route::ALL {
            assert_eq!(resolve(route.path()), Resolution::Page { route });
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(resolve("/settings"), Resolution::NotFound);
        assert_eq!(resolve("/jobs/"), Resolution::NotFound);
        assert_eq!(resolve(""), Resolution::NotFound);
    }
}
