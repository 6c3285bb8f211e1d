use super::*;

fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn defaults_apply_without_any_file() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = DeskConfig::resolve(&ConfigSources {
        search_dir: Some(tmp.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(cfg, DeskConfig::default());
}

#[test]
fn search_dir_file_is_picked_up() {
    let tmp = tempfile::tempdir().unwrap();
    write_config(
        tmp.path(),
        DEFAULT_CONFIG_FILE,
        r#"{"api": {"base_url": "https://api.example.test/"}, "mock_series_id": "s2"}"#,
    );
    let cfg = DeskConfig::resolve(&ConfigSources {
        search_dir: Some(tmp.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(cfg.api.base_url, "https://api.example.test");
    assert_eq!(cfg.mock_series_id, "s2");
    assert_eq!(cfg.log.level, "info");
}

#[test]
fn env_and_cli_override_file_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_config(
        tmp.path(),
        "custom.json",
        r#"{"api": {"base_url": "https://file.test", "token": "from-file"}}"#,
    );

    let cfg = DeskConfig::resolve(&ConfigSources {
        explicit_path: Some(path.clone()),
        env_api_url: Some("https://env.test".to_string()),
        env_token: Some("from-env".to_string()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(cfg.api.base_url, "https://env.test");
    assert_eq!(cfg.api.token.as_deref(), Some("from-env"));

    let cfg = DeskConfig::resolve(&ConfigSources {
        explicit_path: Some(path),
        env_api_url: Some("https://env.test".to_string()),
        cli_api_url: Some("https://cli.test/".to_string()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(cfg.api.base_url, "https://cli.test");
    assert_eq!(cfg.api.token.as_deref(), Some("from-file"));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = DeskConfig::resolve(&ConfigSources {
        explicit_path: Some(tmp.path().join("nope.json")),
        ..Default::default()
    })
    .unwrap_err();
    assert!(format!("{:#}", err).contains("read config"));
}

#[test]
fn malformed_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_config(tmp.path(), "bad.json", "{not json");
    let err = DeskConfig::resolve(&ConfigSources {
        explicit_path: Some(path),
        ..Default::default()
    })
    .unwrap_err();
    assert!(format!("{:#}", err).contains("parse config"));
}

#[test]
fn config_path_prefers_explicit_then_env_then_existing_default() {
    let tmp = tempfile::tempdir().unwrap();
    let mut sources = ConfigSources {
        search_dir: Some(tmp.path().to_path_buf()),
        ..Default::default()
    };
    assert_eq!(sources.config_path(), None);

    let default = write_config(tmp.path(), DEFAULT_CONFIG_FILE, "{}");
    assert_eq!(sources.config_path(), Some(default));

    sources.env_config = Some("/etc/prepdesk/env.json".to_string());
    assert_eq!(
        sources.config_path(),
        Some(PathBuf::from("/etc/prepdesk/env.json"))
    );

    sources.explicit_path = Some(PathBuf::from("/tmp/explicit.json"));
    assert_eq!(
        sources.config_path(),
        Some(PathBuf::from("/tmp/explicit.json"))
    );
}
