use super::{resolve_settings, Settings};

use std::{collections::HashMap, path::PathBuf};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    assert_eq!(resolve_settings(None, env_from(&[])), Settings::default());
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
bind_addr = "0.0.0.0:9000"
data_file = "site/data.json"
static_dir = "site"
"#;
    let settings = resolve_settings(Some(raw), env_from(&[]));
    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.data_file, PathBuf::from("site/data.json"));
    assert_eq!(settings.static_dir, Some(PathBuf::from("site")));
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let raw = r#"bind_addr = "0.0.0.0:9000""#;
    let settings = resolve_settings(
        Some(raw),
        env_from(&[
            ("SERVER_BIND", "127.0.0.1:1111"),
            ("APP__BIND_ADDR", "127.0.0.1:2222"),
            ("APP__DATA_FILE", "/srv/bench/data.json"),
        ]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:2222");
    assert_eq!(settings.data_file, PathBuf::from("/srv/bench/data.json"));
}

#[test]
fn blank_static_dir_env_disables_static_serving() {
    let raw = r#"static_dir = "site""#;
    let settings = resolve_settings(Some(raw), env_from(&[("APP__STATIC_DIR", "  ")]));
    assert_eq!(settings.static_dir, None);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let settings = resolve_settings(Some("bind_addr = ["), env_from(&[]));
    assert_eq!(settings, Settings::default());
}
