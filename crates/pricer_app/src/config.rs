use pricer_engine::{normalize_api_base, ClientSettings, DEFAULT_API_BASE};
use serde::Deserialize;

/// Environment configuration, read with the `ANTIQUE_PRICER_` prefix.
#[derive(Debug, Deserialize, Default)]
pub struct EnvConfig {
    /// ANTIQUE_PRICER_API_URL: estimate service base URL.
    pub api_url: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        envy::prefixed("ANTIQUE_PRICER_")
            .from_env()
            .unwrap_or_default()
    }
}

/// Resolves the API base: CLI flag, then environment, then the local
/// development default. Trailing slashes are stripped in every case.
pub fn client_settings(cli_api_base: Option<&str>) -> ClientSettings {
    let env = EnvConfig::from_env();
    let api_base = cli_api_base
        .map(ToOwned::to_owned)
        .or(env.api_url)
        .map(|raw| normalize_api_base(&raw))
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    ClientSettings {
        api_base,
        ..ClientSettings::default()
    }
}
