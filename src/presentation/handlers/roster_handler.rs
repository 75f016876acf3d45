use crate::{
    application::services::RosterService,
    presentation::dto::roster_dto::{
        RosterPeerDto, RosterWindowDto, SameDayRosterResponse, ShiftRosterDto,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct RosterHandler {
    roster_service: Arc<RosterService>,
}

impl RosterHandler {
    pub fn new(roster_service: Arc<RosterService>) -> Self {
        Self { roster_service }
    }

    /// 同日・同セクションの同僚一覧を取得する
    pub async fn same_day_peers(
        &self,
        schedule_id: &str,
    ) -> Result<SameDayRosterResponse, AppError> {
        let roster = self.roster_service.same_day_peers(schedule_id).await?;

        Ok(SameDayRosterResponse {
            work_date: roster.work_date.to_string(),
            shifts: roster
                .shifts
                .into_iter()
                .map(|shift| ShiftRosterDto {
                    shift_name: shift.shift_name,
                    windows: shift
                        .windows
                        .into_iter()
                        .map(|window| RosterWindowDto {
                            start_time: window.start_time.format("%H:%M").to_string(),
                            end_time: window.end_time.format("%H:%M").to_string(),
                            peers: window
                                .peers
                                .into_iter()
                                .map(|peer| RosterPeerDto {
                                    employee_id: peer.employee_id,
                                    display_name: peer.display_name,
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        })
    }
}
