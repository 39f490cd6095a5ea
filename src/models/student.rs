use serde::{Deserialize, Serialize};

/// A roster entry. Roll numbers are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub roll_no: String,
    pub name: String,
    #[serde(default)]
    pub batch: String,
}
