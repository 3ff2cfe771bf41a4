use std::path::PathBuf;
use std::str::FromStr;

use crate::app::infrastructure::platform::env_var;

pub const APP_NAME: &str = "SimplePad";

pub const ENV_WIDTH: &str = "SIMPLEPAD_WIDTH";
pub const ENV_HEIGHT: &str = "SIMPLEPAD_HEIGHT";
pub const ENV_FONT_SIZE: &str = "SIMPLEPAD_FONT_SIZE";
pub const ENV_MATCH_CASE: &str = "SIMPLEPAD_MATCH_CASE";
pub const ENV_INITIAL_DIR: &str = "SIMPLEPAD_INITIAL_DIR";

const MIN_WINDOW_SIDE: i32 = 200;
const FONT_SIZE_RANGE: std::ops::RangeInclusive<i32> = 8..=72;

/// Runtime settings. Nothing here is persisted; overrides come from the
/// environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub app_name: String,
    pub window_width: i32,
    pub window_height: i32,
    pub font_size: i32,
    pub match_case: bool,
    pub initial_dir: Option<PathBuf>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            window_width: 500,
            window_height: 300,
            font_size: 12,
            match_case: false,
            initial_dir: None,
        }
    }
}

impl EditorSettings {
    /// Defaults overridden by `SIMPLEPAD_*` environment variables.
    pub fn load() -> Self {
        Self::from_lookup(env_var)
    }

    /// Build settings from an arbitrary key lookup. Values that fail to parse
    /// or are out of range are logged and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let window_width = parse_or(&lookup, ENV_WIDTH, defaults.window_width, |v| {
            *v >= MIN_WINDOW_SIDE
        });
        let window_height = parse_or(&lookup, ENV_HEIGHT, defaults.window_height, |v| {
            *v >= MIN_WINDOW_SIDE
        });
        let font_size = parse_or(&lookup, ENV_FONT_SIZE, defaults.font_size, |v| {
            FONT_SIZE_RANGE.contains(v)
        });
        let match_case = match lookup(ENV_MATCH_CASE) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                log::warn!(
                    "Ignoring {}={:?}: expected a boolean. Using default.",
                    ENV_MATCH_CASE,
                    raw
                );
                defaults.match_case
            }),
            None => defaults.match_case,
        };
        let initial_dir = lookup(ENV_INITIAL_DIR).map(PathBuf::from).filter(|dir| {
            let ok = dir.is_dir();
            if !ok {
                log::warn!(
                    "Ignoring {}={}: not a directory.",
                    ENV_INITIAL_DIR,
                    dir.display()
                );
            }
            ok
        });

        Self {
            window_width,
            window_height,
            font_size,
            match_case,
            initial_dir,
            ..defaults
        }
    }
}

fn parse_or<T, F, V>(lookup: &F, key: &str, default: T, valid: V) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
    F: Fn(&str) -> Option<String>,
    V: Fn(&T) -> bool,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            log::warn!("Ignoring {}={:?}. Using default {:?}.", key, raw, default);
            default
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = EditorSettings::default();
        assert_eq!(settings.app_name, "SimplePad");
        assert_eq!(settings.window_width, 500);
        assert_eq!(settings.window_height, 300);
        assert_eq!(settings.font_size, 12);
        assert!(!settings.match_case);
        assert!(settings.initial_dir.is_none());
    }

    #[test]
    fn test_empty_lookup_gives_defaults() {
        let settings = EditorSettings::from_lookup(|_| None);
        assert_eq!(settings, EditorSettings::default());
    }

    #[test]
    fn test_overrides_applied() {
        let dir = std::env::temp_dir();
        let dir_str = dir.to_string_lossy().to_string();
        let settings = EditorSettings::from_lookup(lookup_from(&[
            (ENV_WIDTH, "800"),
            (ENV_HEIGHT, " 600 "),
            (ENV_FONT_SIZE, "16"),
            (ENV_MATCH_CASE, "yes"),
            (ENV_INITIAL_DIR, &dir_str),
        ]));
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 600);
        assert_eq!(settings.font_size, 16);
        assert!(settings.match_case);
        assert_eq!(settings.initial_dir, Some(dir));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let settings = EditorSettings::from_lookup(lookup_from(&[
            (ENV_WIDTH, "wide"),
            (ENV_HEIGHT, "10"),
            (ENV_FONT_SIZE, "500"),
            (ENV_MATCH_CASE, "maybe"),
            (ENV_INITIAL_DIR, "/definitely/not/a/real/dir"),
        ]));
        assert_eq!(settings, EditorSettings::default());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(""), None);
    }
}
