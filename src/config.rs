//! Control configuration

use serde::{Deserialize, Serialize};

use crate::error::{PaginationError, Result};
use crate::state::PaginationState;

/// Configurable properties of the pagination control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationConfig {
    /// Items shown per page
    pub items_per_page: usize,
    /// Maximum number of page buttons shown at once
    pub range: usize,
    pub hidden_first_page_button: bool,
    pub hidden_previous_page_button: bool,
    pub hidden_next_page_button: bool,
    pub hidden_last_page_button: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: 10,
            range: 5,
            hidden_first_page_button: false,
            hidden_previous_page_button: false,
            hidden_next_page_button: false,
            hidden_last_page_button: false,
        }
    }
}

impl PaginationConfig {
    /// Parse and validate a JSON configuration; missing keys take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PaginationError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            return Err(PaginationError::Config(
                "itemsPerPage must be at least 1".into(),
            ));
        }
        if self.range == 0 {
            return Err(PaginationError::Config("range must be at least 1".into()));
        }
        Ok(())
    }

    /// Fresh state for `total_items` using this configuration
    pub fn state_for(&self, total_items: usize) -> Result<PaginationState> {
        self.validate()?;
        PaginationState::new(total_items, self.items_per_page, self.range)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PaginationError::Serialization(e.to_string()))
    }
}
