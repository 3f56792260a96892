//! Analyzer profile persistence
//!
//! Save/load/list/delete `AnalyzerConfig` profiles as `<name>.json` files
//! in one directory.

use std::path::{Path, PathBuf};

use crate::domain::{AnalyzerConfig, SpectrumError, SpectrumResult};

/// Directory-backed store of analyzer profiles
pub struct ProfileStore {
    dir: PathBuf,
}

/// Reject names that could escape the store directory
fn sanitize_name(name: &str) -> SpectrumResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SpectrumError::Config("Profile name cannot be empty".to_string()));
    }
    if trimmed.contains("..") || trimmed.contains('/') || trimmed.contains('\\') {
        return Err(SpectrumError::Config(format!("Invalid profile name: {trimmed}")));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_')
    {
        return Err(SpectrumError::Config(format!(
            "Profile name contains invalid characters: {trimmed}"
        )));
    }
    Ok(trimmed.to_string())
}

impl ProfileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> SpectrumResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            SpectrumError::Config(format!("Failed to create {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> SpectrumResult<PathBuf> {
        let name = sanitize_name(name)?;
        Ok(self.dir.join(format!("{name}.json")))
    }

    /// Write `config` as pretty JSON under its own name
    pub fn save(&self, config: &AnalyzerConfig) -> SpectrumResult<()> {
        config.validate()?;
        let path = self.path_for(&config.name)?;
        let json = config.to_json()?;
        std::fs::write(&path, json).map_err(|e| {
            SpectrumError::Config(format!("Failed to write {}: {e}", path.display()))
        })?;
        log::debug!("Saved analyzer profile '{}' to {}", config.name, path.display());
        Ok(())
    }

    pub fn load(&self, name: &str) -> SpectrumResult<AnalyzerConfig> {
        let path = self.path_for(name)?;
        let json = std::fs::read_to_string(&path).map_err(|e| {
            SpectrumError::Config(format!("Failed to read profile '{}': {e}", name.trim()))
        })?;
        let config = AnalyzerConfig::from_json(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Names of all stored profiles, sorted
    pub fn list(&self) -> SpectrumResult<Vec<String>> {
        let mut names: Vec<String> = std::fs::read_dir(&self.dir)
            .map_err(|e| {
                SpectrumError::Config(format!("Failed to read {}: {e}", self.dir.display()))
            })?
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension()?.to_str()? == "json" {
                    path.file_stem()?.to_str().map(String::from)
                } else {
                    None
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }

    pub fn delete(&self, name: &str) -> SpectrumResult<()> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(SpectrumError::Config(format!(
                "Profile '{}' not found",
                name.trim()
            )));
        }
        std::fs::remove_file(&path).map_err(|e| {
            SpectrumError::Config(format!("Failed to delete profile '{}': {e}", name.trim()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::window::{KaiserParams, Window};

    fn kaiser_profile() -> AnalyzerConfig {
        AnalyzerConfig {
            name: "Kaiser 48k".to_string(),
            fft_size: 4096,
            window: Window::Kaiser(KaiserParams {
                time_scale: 0.9,
                alpha: 6.0,
            }),
            sample_rate: Some(48000.0),
        }
    }

    #[test]
    fn save_and_load_round_trip_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(tmp.path().join("profiles")).unwrap();

        let config = kaiser_profile();
        store.save(&config).unwrap();
        assert!(store.dir().join("Kaiser 48k.json").exists());
        assert_eq!(store.load("Kaiser 48k").unwrap(), config);
    }

    #[test]
    fn list_and_delete_profiles() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(tmp.path()).unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        store.save(&AnalyzerConfig::default()).unwrap();
        store.save(&kaiser_profile()).unwrap();
        assert_eq!(store.list().unwrap(), vec!["Default", "Kaiser 48k"]);

        store.delete("Kaiser 48k").unwrap();
        assert_eq!(store.list().unwrap(), vec!["Default"]);
        assert!(matches!(
            store.delete("Kaiser 48k"),
            Err(SpectrumError::Config(_))
        ));
    }

    #[test]
    fn load_missing_profile_names_it() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(tmp.path()).unwrap();

        match store.load("absent") {
            Err(SpectrumError::Config(msg)) => assert!(msg.contains("absent"), "{msg}"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_profiles_are_not_written() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(tmp.path()).unwrap();

        let bad = AnalyzerConfig {
            fft_size: 1000,
            ..AnalyzerConfig::default()
        };
        assert_eq!(store.save(&bad), Err(SpectrumError::InvalidSize(1000)));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn sanitize_name_rejects_path_traversal() {
        assert!(sanitize_name("../evil").is_err());
        assert!(sanitize_name("foo/bar").is_err());
        assert!(sanitize_name("foo\\bar").is_err());
        assert!(sanitize_name("  ").is_err());
        assert!(sanitize_name("config;drop").is_err());
        assert_eq!(sanitize_name(" Speech 48k ").unwrap(), "Speech 48k");
    }
}
