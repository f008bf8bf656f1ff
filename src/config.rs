use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "TimingConfig::default_fixed_dt")]
    pub fixed_dt: f32,
    #[serde(default = "TimingConfig::default_max_backlog")]
    pub max_backlog: f32,
    #[serde(default = "TimingConfig::default_target_frame_rate")]
    pub target_frame_rate: f32,
}

impl TimingConfig {
    fn default_fixed_dt() -> f32 {
        1.0 / 60.0
    }

    const fn default_max_backlog() -> f32 {
        0.25
    }

    const fn default_target_frame_rate() -> f32 {
        60.0
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fixed_dt: Self::default_fixed_dt(),
            max_backlog: Self::default_max_backlog(),
            target_frame_rate: Self::default_target_frame_rate(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WaitConfig {
    #[serde(default = "WaitConfig::default_cache_capacity")]
    pub cache_capacity: usize,
}

impl WaitConfig {
    const fn default_cache_capacity() -> usize {
        100
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self { cache_capacity: Self::default_cache_capacity() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdraftConfig {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub wait: WaitConfig,
}

impl UpdraftConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("[config] Load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let mut temp = NamedTempFile::new().expect("temp config");
        write!(temp, r#"{{"timing":{{"fixed_dt":0.02}}}}"#).expect("write config");

        let cfg = UpdraftConfig::load(temp.path()).expect("load config");
        assert!((cfg.timing.fixed_dt - 0.02).abs() < 1e-6);
        assert!((cfg.timing.max_backlog - 0.25).abs() < 1e-6, "unset field keeps default");
        assert_eq!(cfg.wait.cache_capacity, 100, "unset section keeps defaults");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = UpdraftConfig::load_or_default("does/not/exist.json");
        assert!((cfg.timing.target_frame_rate - 60.0).abs() < 1e-6);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut temp = NamedTempFile::new().expect("temp config");
        write!(temp, "not json").expect("write config");
        assert!(UpdraftConfig::load(temp.path()).is_err());
    }
}
