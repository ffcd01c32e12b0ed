use hr_core::User;

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub access_token: String,
    /// Reserved; never issued
    pub refresh_token: Option<String>,
}
