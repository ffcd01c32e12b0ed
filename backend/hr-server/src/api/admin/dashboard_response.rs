use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub viewer: String,
    pub total_users: usize,
    pub active_users: usize,
    /// Account count per role name
    pub users_by_role: BTreeMap<String, usize>,
}
