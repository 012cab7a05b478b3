use serde::Deserialize;

/// Config document shipped with the app
const BUNDLED_CONFIG: &str = include_str!("../../assets/config.json");

pub const DEFAULT_MAX_VISIBLE_SKILLS: usize = 6;
pub const DEFAULT_BANNER_URL: &str = "/banner.png";
pub const DEFAULT_AVATAR_PLACEHOLDER_BASE: &str = "https://ui-avatars.com/api/";

/// Display settings for profile pages
///
/// Missing keys fall back to their defaults, so a partial document is fine.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Skill chips shown before collapsing the rest into "+N more"
    pub max_visible_skills: usize,
    pub banner_url: String,
    /// Base URL of the initials avatar service used when an avatar fails
    pub avatar_placeholder_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_visible_skills: DEFAULT_MAX_VISIBLE_SKILLS,
            banner_url: DEFAULT_BANNER_URL.to_string(),
            avatar_placeholder_base: DEFAULT_AVATAR_PLACEHOLDER_BASE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Load the bundled config, using defaults if it cannot be parsed
pub fn load_bundled_config() -> AppConfig {
    match AppConfig::from_json(BUNDLED_CONFIG) {
        Ok(config) => {
            log::info!("Loaded app config: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Invalid app config, using defaults: {}", e);
            AppConfig::default()
        }
    }
}
