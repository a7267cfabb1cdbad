use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::list::EmptyList;

pub const DEFAULT_DROP_ZONE_ID: &str = "DropZone";
pub const DEFAULT_INPUT_ID: &str = "FileInput";

/// Demo settings, read from a camelCase JSON file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoConfig {
    /// Id put on the drop zone element; `dragleave` only counts for it.
    pub drop_zone_id: String,
    pub input_id: String,
    /// MIME allow-list for the native picker.
    pub accept: Vec<String>,
    pub multiple: bool,
    pub empty_list: EmptyList,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            drop_zone_id: DEFAULT_DROP_ZONE_ID.to_string(),
            input_id: DEFAULT_INPUT_ID.to_string(),
            accept: Vec::new(),
            multiple: true,
            empty_list: EmptyList::Reject,
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: DemoConfig = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.drop_zone_id.trim().is_empty() {
            return Err("dropZoneId must not be empty".to_string());
        }
        if self.input_id.trim().is_empty() {
            return Err("inputId must not be empty".to_string());
        }
        if self.drop_zone_id == self.input_id {
            return Err(format!(
                "dropZoneId and inputId must differ (both are {:?})",
                self.input_id
            ));
        }
        if let Some(bad) = self.accept.iter().find(|m| m.trim().is_empty() || m.contains(',')) {
            return Err(format!("Invalid accept entry: {:?}", bad));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let file = write_config(r#"{ "accept": ["image/png", ".jpg"], "emptyList": "sentinel" }"#);
        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.accept, vec!["image/png", ".jpg"]);
        assert_eq!(config.empty_list, EmptyList::Sentinel);
        assert_eq!(config.drop_zone_id, DEFAULT_DROP_ZONE_ID);
        assert_eq!(config.input_id, DEFAULT_INPUT_ID);
        assert!(config.multiple);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let file = write_config("{ not json");
        let err = DemoConfig::load(file.path()).unwrap_err();
        assert!(err.starts_with("Failed to parse config"), "{}", err);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DemoConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.starts_with("Failed to read config"), "{}", err);
    }

    #[test]
    fn test_validate() {
        assert!(DemoConfig::default().validate().is_ok());

        let same_ids = DemoConfig {
            input_id: DEFAULT_DROP_ZONE_ID.to_string(),
            ..DemoConfig::default()
        };
        assert!(same_ids.validate().is_err());

        let bad_accept = DemoConfig {
            accept: vec!["image/png,image/jpeg".to_string()],
            ..DemoConfig::default()
        };
        assert!(bad_accept.validate().is_err());

        let blank_zone = DemoConfig {
            drop_zone_id: "  ".to_string(),
            ..DemoConfig::default()
        };
        assert!(blank_zone.validate().is_err());
    }
}
