use configparser::ini::Ini;
use log::{info, warn};
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

const SETTINGS_DIR: &str = "save";
const SETTINGS_INI_PATH: &str = "save/donsync.ini";

// Default timing windows, widest gates validity.
pub const GREAT_WINDOW_MS: f32 = 50.0;
pub const GOOD_WINDOW_MS: f32 = 110.0;
pub const MISS_WINDOW_MS: f32 = 135.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub global_offset_ms: f32,
    pub great_window_ms: f32,
    pub good_window_ms: f32,
    pub miss_window_ms: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global_offset_ms: 0.0,
            great_window_ms: GREAT_WINDOW_MS,
            good_window_ms: GOOD_WINDOW_MS,
            miss_window_ms: MISS_WINDOW_MS,
        }
    }
}

// Global static for the loaded settings.
static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::default()));

/// Creates the default settings file if it doesn't exist.
fn create_default_file() -> Result<(), std::io::Error> {
    info!("Settings file not found, creating defaults in '{}'.", SETTINGS_DIR);
    fs::create_dir_all(SETTINGS_DIR)?;

    let mut conf = Ini::new();
    conf.set("timing", "GlobalOffsetMs", Some("0".to_string()));
    conf.set("timing", "GreatWindowMs", Some(GREAT_WINDOW_MS.to_string()));
    conf.set("timing", "GoodWindowMs", Some(GOOD_WINDOW_MS.to_string()));
    conf.set("timing", "MissWindowMs", Some(MISS_WINDOW_MS.to_string()));
    conf.write(SETTINGS_INI_PATH)?;

    Ok(())
}

pub fn load() {
    if !Path::new(SETTINGS_INI_PATH).exists() {
        if let Err(e) = create_default_file() {
            warn!("Failed to create default settings file: {}", e);
            // Proceed with default struct values.
            return;
        }
    }

    let mut config = CONFIG.lock().unwrap();
    let defaults = Config::default();

    let mut conf = Ini::new();
    if conf.load(SETTINGS_INI_PATH).is_ok() {
        let field = |key: &str, fallback: f32| {
            conf.get("timing", key)
                .and_then(|v| v.parse::<f32>().ok())
                .unwrap_or(fallback)
        };
        config.global_offset_ms = field("GlobalOffsetMs", defaults.global_offset_ms);
        config.great_window_ms = field("GreatWindowMs", defaults.great_window_ms);
        config.good_window_ms = field("GoodWindowMs", defaults.good_window_ms);
        config.miss_window_ms = field("MissWindowMs", defaults.miss_window_ms);
    } else {
        warn!("Failed to load '{}', using default timing settings.", SETTINGS_INI_PATH);
    }
}

/// Returns a copy of the currently loaded settings.
pub fn get() -> Config {
    CONFIG.lock().unwrap().clone()
}
