use super::*;

pub(super) fn handle_config_show_command(config: &DeskConfig, json: bool) -> Result<()> {
    if json {
        let mut shown = config.clone();
        if shown.api.token.is_some() {
            shown.api.token = Some("(set)".to_string());
        }
        return print_json(&shown, "config");
    }
    println!("api.base_url: {}", config.api.base_url);
    println!(
        "api.token: {}",
        if config.api.token.is_some() { "(set)" } else { "(none)" }
    );
    println!("mock_series_id: {}", config.mock_series_id);
    println!("log.level: {}", config.log.level);
    println!("log.dir: {}", config.log_dir().display());
    Ok(())
}

pub(super) fn handle_config_path_command(sources: &ConfigSources) -> Result<()> {
    match sources.config_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("(defaults; no config file)"),
    }
    Ok(())
}
