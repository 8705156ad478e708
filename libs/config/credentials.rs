/// Environment key holding the backend service URL.
pub const URL_KEY: &str = "NEXT_PUBLIC_SUPABASE_URL";

/// Environment key holding the anonymous (publishable) access key.
pub const ANON_KEY: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";

/// Environment key holding the privileged service-role key. Optional;
/// only administrative operations (bucket creation) want it.
pub const SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Connection credentials for the hosted backend, resolved from the
/// deployed web app's env file or from process environment variables.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub url: String,
    pub anon_key: String,
    pub service_role_key: Option<String>,
}

impl Credentials {
    /// Key to use for administrative calls: the service-role key when
    /// configured, otherwise the anonymous key.
    pub fn admin_key(&self) -> &str {
        self.service_role_key.as_deref().unwrap_or(&self.anon_key)
    }
}
