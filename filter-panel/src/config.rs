use serde::{Deserialize, Serialize};

use crate::{Result, env};

/// A sub-community the visitor can scope the listing to.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Community {
    pub id: String,
    pub name: String,
    pub group_ids: Vec<String>,
}

/// Everything the host tells the panel up front.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelConfig {
    /// Set when the listing is embedded in a community page; enables the
    /// community dropdown.
    pub challenge_group_id: Option<String>,
    pub community_name: Option<String>,
    pub default_community_id: String,
    pub valid_keywords: Vec<String>,
    pub valid_subtracks: Vec<String>,
    pub communities: Vec<Community>,
    pub visitor_group_ids: Vec<String>,
    pub hidden: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            challenge_group_id: None,
            community_name: None,
            default_community_id: env::default_community_id(),
            valid_keywords: Vec::new(),
            valid_subtracks: Vec::new(),
            communities: Vec::new(),
            visitor_group_ids: Vec::new(),
            hidden: false,
        }
    }
}

impl PanelConfig {
    /// # Errors
    ///
    /// Returns [`crate::PanelError::Config`] for malformed JSON.
    pub fn from_json(value: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(value)?;

        tracing::debug!(
            keywords = config.valid_keywords.len(),
            subtracks = config.valid_subtracks.len(),
            communities = config.communities.len(),
            "panel config loaded"
        );

        Ok(config)
    }

    #[must_use]
    pub fn community(&self, id: &str) -> Option<&Community> {
        self.communities.iter().find(|c| c.id == id)
    }
}
