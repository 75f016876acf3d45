use serde::{Deserialize, Serialize};

// レスポンスDTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPeerDto {
    pub employee_id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterWindowDto {
    pub start_time: String,
    pub end_time: String,
    pub peers: Vec<RosterPeerDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRosterDto {
    pub shift_name: String,
    pub windows: Vec<RosterWindowDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SameDayRosterResponse {
    pub work_date: String,
    pub shifts: Vec<ShiftRosterDto>,
}
