//! Build-time Configuration
//!
//! The remote collection location is baked in when the WASM bundle is built:
//! `TODO_API_URL` and `TODO_USER_ID`.

/// How long an error message stays on screen
pub const ERROR_DISPLAY_MS: u32 = 3_000;

const DEFAULT_API_URL: &str = "https://mate.academy/students-api";
const DEFAULT_USER_ID: u32 = 1;

/// Remote todo collection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Owner key scoping the collection
    pub user_id: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_id: DEFAULT_USER_ID,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TODO_API_URL"), option_env!("TODO_USER_ID"))
    }

    fn from_values(url: Option<&str>, user_id: Option<&str>) -> Self {
        let base_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let user_id = match user_id.map(str::trim) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("[CONFIG] Invalid TODO_USER_ID {:?}, using {}", raw, DEFAULT_USER_ID);
                DEFAULT_USER_ID
            }),
            None => DEFAULT_USER_ID,
        };

        Self { base_url, user_id }
    }

    /// Collection endpoint scoped to the owner
    pub fn list_url(&self) -> String {
        format!("{}/todos?userId={}", self.base_url, self.user_id)
    }

    pub fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}
