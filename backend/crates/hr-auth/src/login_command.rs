use std::net::IpAddr;

/// `identifier` matches either a username or an email
#[derive(Clone)]
pub struct LoginCommand {
    pub identifier: String,
    pub password: String,
    /// Caller's address, when the transport knows it
    pub client: Option<IpAddr>,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .field("client", &self.client)
            .finish()
    }
}
