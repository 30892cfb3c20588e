use mealplanner_shared::{Error, Result};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Kind of opener field a popup result is appended to.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    #[default]
    Option,
    Checkbox,
}

/// Record created in a popup window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupResult {
    pub new_id: u64,
    pub new_repr: String,
    /// Selector of the opener field, `#id_author` or `id_author`.
    pub target: String,
    #[serde(default)]
    pub kind: TargetKind,
}

impl PopupResult {
    pub fn target_id(&self) -> &str {
        self.target.trim().trim_start_matches('#')
    }
}

/// Message a popup posts to its opener before closing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PopupMessage {
    Created(PopupResult),
    PrintClosed,
}

impl PopupMessage {
    pub fn parse(value: &str) -> Result<Self> {
        serde_json::from_str(value)
            .map_err(|err| Error::Validate(format!("malformed popup message: {err}")))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
