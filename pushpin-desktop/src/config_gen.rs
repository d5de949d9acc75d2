use std::fs;
use std::path::Path;
use serde::Serialize;
use pushpin_shared::SystemConfig;
use pushpin_skia::config::WindowConfig;

#[derive(Serialize, Default)]
struct FullConfig {
    system: SystemConfig,
    window: WindowConfig,
}

pub fn default_toml() -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(&FullConfig::default())?)
}

pub fn ensure_config_exists(path: &str) {
    if Path::new(path).exists() {
        return;
    }

    // logger 还没初始化，这里只能直接打印
    println!("Creating default configuration at '{}'...", path);

    let toml_str = match default_toml() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize default config: {}", e);
            return;
        }
    };

    if let Err(e) = fs::write(path, toml_str) {
        eprintln!("Failed to write config file: {}", e);
    } else {
        println!("Config file created successfully.");
    }
}
