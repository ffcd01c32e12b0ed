use hr_core::RoleName;

/// Role names permitted on one route group.
///
/// No hierarchy is implied: every permitted role is listed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAllowList {
    roles: Vec<String>,
}

impl RoleAllowList {
    /// Keeps first-seen order and drops duplicates
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for role in roles {
            let role = role.into();
            if !deduped.contains(&role) {
                deduped.push(role);
            }
        }
        Self { roles: deduped }
    }

    pub fn of(roles: &[RoleName]) -> Self {
        Self::new(roles.iter().map(RoleName::as_str))
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}
