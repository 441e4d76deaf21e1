use std::{collections::HashMap, fs, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub data_file: PathBuf,
    pub static_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            data_file: PathBuf::from("docs/data.json"),
            static_dir: None,
        }
    }
}

pub fn load_settings() -> Settings {
    let raw = fs::read_to_string("server.toml").ok();
    resolve_settings(raw.as_deref(), |name| std::env::var(name).ok())
}

/// Layers defaults, then `server.toml` contents, then environment overrides.
pub(crate) fn resolve_settings(
    raw_toml: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = raw_toml {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("bind_addr") {
                    settings.server_bind = v.clone();
                }
                if let Some(v) = file_cfg.get("data_file") {
                    settings.data_file = PathBuf::from(v);
                }
                if let Some(v) = file_cfg.get("static_dir") {
                    settings.static_dir = Some(PathBuf::from(v));
                }
            }
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable server.toml");
            }
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("APP__DATA_FILE") {
        settings.data_file = PathBuf::from(v);
    }

    if let Some(v) = env("APP__STATIC_DIR") {
        settings.static_dir = non_empty_path(&v);
    }

    settings
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
