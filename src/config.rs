use anyhow::anyhow;
use shuttle_runtime::SecretStore;

pub const DEFAULT_JWT_AUDIENCE: &str = "authenticated";
pub const DEFAULT_COMPLETION_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "llama-3.1-70b-versatile";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_audience: String,
    pub completion_api_key: String,
    pub completion_api_base: String,
    pub completion_model: String,
}

impl AppConfig {
    pub fn new(secret_store: &SecretStore) -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| secret_store.get(key))
    }

    /// Builds the config from any key lookup, so the same rules apply to
    /// Shuttle secrets and plain maps.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| anyhow!("{} not found", key));

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let completion_api_key = required("GROQ_API_KEY")?;

        let jwt_audience =
            lookup("JWT_AUDIENCE").unwrap_or_else(|| DEFAULT_JWT_AUDIENCE.to_string());
        let completion_api_base = lookup("COMPLETION_API_BASE")
            .unwrap_or_else(|| DEFAULT_COMPLETION_API_BASE.to_string());
        let completion_model =
            lookup("COMPLETION_MODEL").unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string());

        Ok(AppConfig {
            database_url,
            jwt_secret,
            jwt_audience,
            completion_api_key,
            completion_api_base,
            completion_model,
        })
    }
}
