//! Resolved plugin metadata
//!
//! Value types produced when the configuration store is finalized. The host
//! feeds these into its own descriptor-generation and packaging steps.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maven coordinates of the plugin artifact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gav {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl fmt::Display for Gav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// Finalized plugin configuration snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    #[serde(flatten)]
    pub gav: Gav,
    pub name: String,
    /// Empty string when the project has no description
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_prefix: Option<String>,
    pub generate_help_mojo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_mojo_package: Option<String>,
}

impl PluginDescriptor {
    /// Render the snapshot as pretty-printed JSON for the host
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_descriptor() -> PluginDescriptor {
        PluginDescriptor {
            gav: Gav {
                group: "org.example".to_string(),
                artifact: "my-plugin".to_string(),
                version: "1.0.0".to_string(),
            },
            name: "my-plugin".to_string(),
            description: String::new(),
            goal_prefix: None,
            generate_help_mojo: false,
            help_mojo_package: None,
        }
    }

    #[test]
    fn test_gav_display() {
        let descriptor = sample_descriptor();
        assert_eq!(descriptor.gav.to_string(), "org.example:my-plugin:1.0.0");
    }

    #[test]
    fn test_json_omits_unset_optionals() {
        let json = sample_descriptor().to_json().unwrap();
        assert!(json.contains("\"artifact\": \"my-plugin\""));
        assert!(!json.contains("goalPrefix"));
        assert!(!json.contains("helpMojoPackage"));
    }

    #[test]
    fn test_json_round_trips() {
        let mut descriptor = sample_descriptor();
        descriptor.goal_prefix = Some("example".to_string());

        let json = descriptor.to_json().unwrap();
        let parsed: PluginDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, descriptor);
    }
}
