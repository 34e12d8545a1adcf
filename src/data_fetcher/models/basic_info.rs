use serde::{Deserialize, Serialize};

/// A team entry as it appears in the league endpoints.
///
/// Every field is optional on the wire; ingestion decides which absences are errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Newer seasons send a single combined name instead of location/nickname.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbrev: Option<String>,
}

/// Response of the unparameterized league endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicInfoResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "seasonId", default)]
    pub season_id: Option<i32>,
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
}
