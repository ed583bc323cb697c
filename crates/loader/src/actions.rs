use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Actions this loader knows how to run on a publish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportAction {
    ImportImageSeq,
}

impl ImportAction {
    pub const ALL: &'static [ImportAction] = &[ImportAction::ImportImageSeq];

    pub fn name(self) -> &'static str {
        match self {
            Self::ImportImageSeq => "import_image_seq",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Self::ImportImageSeq => "Import Sequence",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ImportImageSeq => {
                "Import image sequence and attach to selected sequence camera(s)."
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|action| action.name() == name)
    }
}

/// Where the loader UI shows the publish the actions are generated for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiArea {
    #[default]
    Main,
    Details,
    History,
}

impl UiArea {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Details => "details",
            Self::History => "history",
        }
    }
}

impl fmt::Display for UiArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiArea {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(Self::Main),
            "details" => Ok(Self::Details),
            "history" => Ok(Self::History),
            other => Err(format!(
                "unknown ui area '{other}' (expected main, details or history)"
            )),
        }
    }
}

/// One entry of the action menu shown for a publish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionInstance {
    pub name: String,
    pub params: serde_json::Value,
    pub caption: String,
    pub description: String,
}

impl From<ImportAction> for ActionInstance {
    fn from(action: ImportAction) -> Self {
        Self {
            name: action.name().to_string(),
            params: serde_json::Value::Object(Default::default()),
            caption: action.caption().to_string(),
            description: action.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishPath {
    pub local_path: String,
}

/// Subset of a publish record the loader reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub code: Option<String>,
    pub path: PublishPath,
}

impl PublishRecord {
    pub fn local_path(&self) -> &str {
        &self.path.local_path
    }
}

/// Action selected by the user, paired with its publish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub name: String,
    pub publish: PublishRecord,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Action instances for the configured action names this loader supports.
///
/// Names the loader does not know are skipped.
pub fn generate_actions<S: AsRef<str>>(actions: &[S], ui_area: UiArea) -> Vec<ActionInstance> {
    let names: Vec<&str> = actions.iter().map(AsRef::as_ref).collect();
    log::debug!("Generate actions for UI area {ui_area}: {names:?}");

    ImportAction::ALL
        .iter()
        .copied()
        .filter(|action| names.contains(&action.name()))
        .map(ActionInstance::from)
        .collect()
}
