use crate::application::ports::cache::OpenRequestCache;
use crate::application::ports::clock::Clock;
use crate::application::ports::refresh_notifier::RefreshNotifier;
use crate::application::ports::repositories::{ChangeRequestRepository, ScheduleRepository};
use crate::domain::entities::{ChangeRequest, ResponseStatus, Schedule, ScheduleStatus};
use crate::domain::projection::{DisplayState, effective_status};
use crate::shared::error::AppError;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of a successful submission: a first response is applied to the
/// schedule directly, any later response only submits a change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Applied,
    Submitted,
}

#[derive(Debug, Clone)]
pub struct ChangeRequestStatus {
    pub has_open_request: bool,
    pub open_request: Option<ChangeRequest>,
}

#[derive(Debug, Clone)]
pub struct ProjectedSchedule {
    pub schedule: Schedule,
    pub display_state: DisplayState,
}

pub struct ScheduleResponseService {
    schedules: Arc<dyn ScheduleRepository>,
    change_requests: Arc<dyn ChangeRequestRepository>,
    cache: Arc<dyn OpenRequestCache>,
    notifier: Arc<dyn RefreshNotifier>,
    clock: Arc<dyn Clock>,
}

impl ScheduleResponseService {
    pub fn new(
        schedules: Arc<dyn ScheduleRepository>,
        change_requests: Arc<dyn ChangeRequestRepository>,
        cache: Arc<dyn OpenRequestCache>,
        notifier: Arc<dyn RefreshNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            schedules,
            change_requests,
            cache,
            notifier,
            clock,
        }
    }

    /// Submit an accept/reject response for a schedule.
    ///
    /// A schedule that still needs a first response is mutated directly; any
    /// other submission opens a change request and leaves the stored status
    /// untouched until a supervisor resolves it.
    pub async fn submit_response(
        &self,
        schedule_id: &str,
        status: ResponseStatus,
        reason: Option<&str>,
    ) -> Result<SubmitOutcome, AppError> {
        let schedule = self
            .schedules
            .get_schedule(schedule_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("schedule {schedule_id}")))?;

        let today = self.clock.today();
        if schedule.is_elapsed(today) {
            return Err(AppError::ScheduleClosed(format!(
                "shift on {} has already elapsed",
                schedule.work_date
            )));
        }

        // The duplicate check must see the live row, not a cached answer.
        let open_request = self
            .change_requests
            .find_open_for_schedule(schedule_id)
            .await?;

        let reason = normalize_reason(reason);

        match effective_status(&schedule, open_request.as_ref(), today) {
            DisplayState::NeedsFirstResponse => {
                self.apply_first_response(&schedule, status, reason).await
            }
            DisplayState::AwaitingApproval { .. } => Err(AppError::DuplicatePending(format!(
                "schedule {schedule_id} already has an open change request"
            ))),
            DisplayState::Accepted | DisplayState::Rejected => {
                self.submit_change_request(&schedule, status, reason).await
            }
            DisplayState::Completed => Err(AppError::ScheduleClosed(format!(
                "shift on {} has already elapsed",
                schedule.work_date
            ))),
            DisplayState::Unknown => Err(AppError::Internal(format!(
                "schedule {schedule_id} is in an unclassifiable state"
            ))),
        }
    }

    async fn apply_first_response(
        &self,
        schedule: &Schedule,
        status: ResponseStatus,
        reason: Option<String>,
    ) -> Result<SubmitOutcome, AppError> {
        if status == ResponseStatus::Rejected && reason.is_none() {
            return Err(AppError::ReasonRequired(
                "a reason is required when rejecting a shift".to_string(),
            ));
        }

        if schedule.status == ScheduleStatus::Pending {
            // Stored pending with no open request: reachable through an
            // external write path, treated as a first response.
            warn!(
                schedule_id = %schedule.id,
                "schedule stored as pending without an open change request"
            );
        }

        let rejection_reason = match status {
            ResponseStatus::Rejected => reason.clone(),
            ResponseStatus::Accepted => None,
        };
        let applied = self
            .schedules
            .apply_response(&schedule.id, status, rejection_reason.as_deref())
            .await?;
        if !applied {
            // Another submission committed a first response between our
            // classification and the guarded write. Re-classify against the
            // fresh row; this submission now goes the change-request way.
            return self.reclassify_lost_first_response(&schedule.id, status, reason).await;
        }
        self.cache.invalidate(&schedule.id).await;
        self.notify(&schedule.id).await;

        info!(
            schedule_id = %schedule.id,
            status = status.as_str(),
            "first response applied"
        );
        Ok(SubmitOutcome::Applied)
    }

    async fn reclassify_lost_first_response(
        &self,
        schedule_id: &str,
        status: ResponseStatus,
        reason: Option<String>,
    ) -> Result<SubmitOutcome, AppError> {
        let schedule = self
            .schedules
            .get_schedule(schedule_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("schedule {schedule_id}")))?;
        let open_request = self
            .change_requests
            .find_open_for_schedule(schedule_id)
            .await?;

        match effective_status(&schedule, open_request.as_ref(), self.clock.today()) {
            DisplayState::Accepted | DisplayState::Rejected => {
                self.submit_change_request(&schedule, status, reason).await
            }
            DisplayState::AwaitingApproval { .. } => Err(AppError::DuplicatePending(format!(
                "schedule {schedule_id} already has an open change request"
            ))),
            DisplayState::Completed => Err(AppError::ScheduleClosed(format!(
                "shift on {} has already elapsed",
                schedule.work_date
            ))),
            DisplayState::NeedsFirstResponse | DisplayState::Unknown => {
                Err(AppError::Internal(format!(
                    "schedule {schedule_id} rejected a first response while still awaiting one"
                )))
            }
        }
    }

    async fn submit_change_request(
        &self,
        schedule: &Schedule,
        status: ResponseStatus,
        reason: Option<String>,
    ) -> Result<SubmitOutcome, AppError> {
        // Every change request needs a reason: it overrides a committed
        // decision, accept and reject alike.
        let reason = reason.ok_or_else(|| {
            AppError::ReasonRequired(
                "a reason is required when changing a committed response".to_string(),
            )
        })?;

        let request = ChangeRequest::new(schedule.id.clone(), status, reason);
        self.change_requests.create_request(&request).await?;
        self.cache.invalidate(&schedule.id).await;
        self.notify(&schedule.id).await;

        info!(
            schedule_id = %schedule.id,
            change_request_id = %request.id,
            requested_status = status.as_str(),
            "change request submitted"
        );
        Ok(SubmitOutcome::Submitted)
    }

    /// Open change-request lookup for one schedule, served through the cache.
    pub async fn change_request_status(
        &self,
        schedule_id: &str,
    ) -> Result<ChangeRequestStatus, AppError> {
        if self.schedules.get_schedule(schedule_id).await?.is_none() {
            return Err(AppError::NotFound(format!("schedule {schedule_id}")));
        }

        let open_request = self.open_request_cached(schedule_id).await?;
        Ok(ChangeRequestStatus {
            has_open_request: open_request.is_some(),
            open_request,
        })
    }

    /// Projected status of a single schedule.
    pub async fn effective_status_of(&self, schedule_id: &str) -> Result<DisplayState, AppError> {
        let schedule = self
            .schedules
            .get_schedule(schedule_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("schedule {schedule_id}")))?;
        let open_request = self.open_request_cached(schedule_id).await?;
        Ok(effective_status(
            &schedule,
            open_request.as_ref(),
            self.clock.today(),
        ))
    }

    /// Schedule directory read: an employee's public schedules in a date
    /// window, each paired with its projected state.
    pub async fn list_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ProjectedSchedule>, AppError> {
        let schedules = self
            .schedules
            .list_public_for_employee(employee_id, from, to)
            .await?;
        let today = self.clock.today();

        let mut projected = Vec::with_capacity(schedules.len());
        for schedule in schedules {
            let open_request = self.open_request_cached(&schedule.id).await?;
            let display_state = effective_status(&schedule, open_request.as_ref(), today);
            projected.push(ProjectedSchedule {
                schedule,
                display_state,
            });
        }
        Ok(projected)
    }

    async fn open_request_cached(
        &self,
        schedule_id: &str,
    ) -> Result<Option<ChangeRequest>, AppError> {
        if let Some(cached) = self.cache.get(schedule_id).await {
            return Ok(cached);
        }

        let loaded = self
            .change_requests
            .find_open_for_schedule(schedule_id)
            .await?;
        self.cache.set(schedule_id, loaded.clone()).await;
        Ok(loaded)
    }

    async fn notify(&self, schedule_id: &str) {
        if let Err(e) = self.notifier.schedule_changed(schedule_id).await {
            warn!(schedule_id = %schedule_id, "refresh notification failed: {e}");
        }
    }
}

fn normalize_reason(reason: Option<&str>) -> Option<String> {
    reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::repositories::{
        ChangeRequestRepository as PortChangeRequestRepository,
        ScheduleRepository as PortScheduleRepository,
    };
    use crate::domain::entities::Visibility;
    use async_trait::async_trait;
    use chrono::{Duration, NaiveTime, Utc};
    use mockall::{mock, predicate::*};

    // `apply_response` takes `Option<&str>`, a container of references; with
    // `#[async_trait]` the boxed future would capture its lifetime, which
    // mockall cannot mock. Mock sync inherent methods instead and delegate
    // the trait impl to them by hand.
    mock! {
        pub ScheduleRepo {
            fn create_schedule(&self, schedule: &Schedule) -> Result<(), AppError>;
            fn get_schedule(&self, id: &str) -> Result<Option<Schedule>, AppError>;
            fn apply_response<'a>(
                &self,
                id: &str,
                status: ResponseStatus,
                rejection_reason: Option<&'a str>,
            ) -> Result<bool, AppError>;
            fn list_public_for_employee(
                &self,
                employee_id: &str,
                from: NaiveDate,
                to: NaiveDate,
            ) -> Result<Vec<Schedule>, AppError>;
        }
    }

    #[async_trait]
    impl PortScheduleRepository for MockScheduleRepo {
        async fn create_schedule(&self, schedule: &Schedule) -> Result<(), AppError> {
            MockScheduleRepo::create_schedule(self, schedule)
        }
        async fn get_schedule(&self, id: &str) -> Result<Option<Schedule>, AppError> {
            MockScheduleRepo::get_schedule(self, id)
        }
        async fn apply_response(
            &self,
            id: &str,
            status: ResponseStatus,
            rejection_reason: Option<&str>,
        ) -> Result<bool, AppError> {
            MockScheduleRepo::apply_response(self, id, status, rejection_reason)
        }
        async fn list_public_for_employee(
            &self,
            employee_id: &str,
            from: NaiveDate,
            to: NaiveDate,
        ) -> Result<Vec<Schedule>, AppError> {
            MockScheduleRepo::list_public_for_employee(self, employee_id, from, to)
        }
    }

    mock! {
        pub ChangeRequestRepo {}

        #[async_trait]
        impl PortChangeRequestRepository for ChangeRequestRepo {
            async fn create_request(&self, request: &ChangeRequest) -> Result<(), AppError>;
            async fn get_request(&self, id: &str) -> Result<Option<ChangeRequest>, AppError>;
            async fn find_open_for_schedule(
                &self,
                schedule_id: &str,
            ) -> Result<Option<ChangeRequest>, AppError>;
            async fn approve_open_request(&self, request: &ChangeRequest) -> Result<bool, AppError>;
            async fn deny_open_request(&self, request_id: &str) -> Result<bool, AppError>;
        }
    }

    mock! {
        pub Cache {}

        #[async_trait]
        impl OpenRequestCache for Cache {
            async fn get(&self, schedule_id: &str) -> Option<Option<ChangeRequest>>;
            async fn set(&self, schedule_id: &str, request: Option<ChangeRequest>);
            async fn invalidate(&self, schedule_id: &str);
        }
    }

    mock! {
        pub Notifier {}

        #[async_trait]
        impl RefreshNotifier for Notifier {
            async fn schedule_changed(&self, schedule_id: &str) -> Result<(), AppError>;
        }
    }

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn schedule_with(id: &str, date: NaiveDate, status: ScheduleStatus) -> Schedule {
        Schedule {
            id: id.to_string(),
            employee_id: "emp-1".to_string(),
            work_date: date,
            section: "hall".to_string(),
            shift_name: "early".to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            status,
            rejection_reason: None,
            visibility: Visibility::Public,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    struct Mocks {
        schedules: MockScheduleRepo,
        change_requests: MockChangeRequestRepo,
        cache: MockCache,
        notifier: MockNotifier,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                schedules: MockScheduleRepo::new(),
                change_requests: MockChangeRequestRepo::new(),
                cache: MockCache::new(),
                notifier: MockNotifier::new(),
            }
        }

        fn into_service(self, today: NaiveDate) -> ScheduleResponseService {
            ScheduleResponseService::new(
                Arc::new(self.schedules),
                Arc::new(self.change_requests),
                Arc::new(self.cache),
                Arc::new(self.notifier),
                Arc::new(FixedClock(today)),
            )
        }
    }

    #[tokio::test]
    async fn submit_fails_with_not_found_for_missing_schedule() {
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .with(eq("missing"))
            .returning(|_| Ok(None));

        let service = mocks.into_service(today());
        let result = service
            .submit_response("missing", ResponseStatus::Accepted, None)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn submit_fails_with_schedule_closed_for_elapsed_shift() {
        let yesterday = today() - Duration::days(1);
        let mut mocks = Mocks::new();
        mocks.schedules.expect_get_schedule().returning(move |id| {
            Ok(Some(schedule_with(id, yesterday, ScheduleStatus::Accepted)))
        });
        // No apply/create expectations: any mutation attempt fails the test.

        let service = mocks.into_service(today());
        let result = service
            .submit_response("s-1", ResponseStatus::Rejected, Some("late notice"))
            .await;
        assert!(matches!(result, Err(AppError::ScheduleClosed(_))));
    }

    #[tokio::test]
    async fn first_response_accept_applies_directly() {
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Unset))));
        mocks
            .change_requests
            .expect_find_open_for_schedule()
            .returning(|_| Ok(None));
        mocks
            .schedules
            .expect_apply_response()
            .withf(|id, status, reason| {
                id == "s-1" && *status == ResponseStatus::Accepted && reason.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(true));
        mocks
            .cache
            .expect_invalidate()
            .with(eq("s-1"))
            .times(1)
            .returning(|_| ());
        mocks
            .notifier
            .expect_schedule_changed()
            .with(eq("s-1"))
            .times(1)
            .returning(|_| Ok(()));

        let service = mocks.into_service(today());
        let outcome = service
            .submit_response("s-1", ResponseStatus::Accepted, None)
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Applied);
    }

    #[tokio::test]
    async fn first_response_reject_requires_reason() {
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Unset))));
        mocks
            .change_requests
            .expect_find_open_for_schedule()
            .returning(|_| Ok(None));

        let service = mocks.into_service(today());
        let result = service
            .submit_response("s-1", ResponseStatus::Rejected, Some("   "))
            .await;
        assert!(matches!(result, Err(AppError::ReasonRequired(_))));
    }

    #[tokio::test]
    async fn first_response_reject_stores_reason() {
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Unset))));
        mocks
            .change_requests
            .expect_find_open_for_schedule()
            .returning(|_| Ok(None));
        mocks
            .schedules
            .expect_apply_response()
            .withf(|id, status, reason| {
                id == "s-1" && *status == ResponseStatus::Rejected && reason == &Some("conflict")
            })
            .times(1)
            .returning(|_, _, _| Ok(true));
        mocks.cache.expect_invalidate().returning(|_| ());
        mocks
            .notifier
            .expect_schedule_changed()
            .returning(|_| Ok(()));

        let service = mocks.into_service(today());
        let outcome = service
            .submit_response("s-1", ResponseStatus::Rejected, Some("conflict"))
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Applied);
    }

    #[tokio::test]
    async fn stored_pending_without_request_counts_as_first_response() {
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Pending))));
        mocks
            .change_requests
            .expect_find_open_for_schedule()
            .returning(|_| Ok(None));
        mocks
            .schedules
            .expect_apply_response()
            .withf(|_, status, reason| {
                *status == ResponseStatus::Rejected && reason == &Some("conflict")
            })
            .times(1)
            .returning(|_, _, _| Ok(true));
        mocks.cache.expect_invalidate().returning(|_| ());
        mocks
            .notifier
            .expect_schedule_changed()
            .returning(|_| Ok(()));

        let service = mocks.into_service(today());
        let outcome = service
            .submit_response("s-1", ResponseStatus::Rejected, Some("conflict"))
            .await
            .unwrap();
        // Applied directly, no change request created.
        assert_eq!(outcome, SubmitOutcome::Applied);
    }

    #[tokio::test]
    async fn lost_first_response_race_falls_back_to_change_request() {
        // Both callers classify the schedule as needing a first response; the
        // guarded write refuses the second one, which must re-classify and
        // open a change request instead of overwriting the committed status.
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .times(1)
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Unset))));
        mocks
            .change_requests
            .expect_find_open_for_schedule()
            .returning(|_| Ok(None));
        mocks
            .schedules
            .expect_apply_response()
            .times(1)
            .returning(|_, _, _| Ok(false));
        // Re-load sees the concurrent winner's committed response.
        mocks
            .schedules
            .expect_get_schedule()
            .times(1)
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Accepted))));
        mocks
            .change_requests
            .expect_create_request()
            .withf(|request| {
                request.requested_status == ResponseStatus::Rejected && request.reason == "conflict"
            })
            .times(1)
            .returning(|_| Ok(()));
        mocks.cache.expect_invalidate().returning(|_| ());
        mocks
            .notifier
            .expect_schedule_changed()
            .returning(|_| Ok(()));

        let service = mocks.into_service(today());
        let outcome = service
            .submit_response("s-1", ResponseStatus::Rejected, Some("conflict"))
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted);
    }

    #[tokio::test]
    async fn non_first_response_submits_change_request() {
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Accepted))));
        mocks
            .change_requests
            .expect_find_open_for_schedule()
            .returning(|_| Ok(None));
        mocks
            .change_requests
            .expect_create_request()
            .withf(|request| {
                request.schedule_id == "s-1"
                    && request.requested_status == ResponseStatus::Rejected
                    && request.reason == "sick"
                    && request.is_open()
            })
            .times(1)
            .returning(|_| Ok(()));
        mocks
            .cache
            .expect_invalidate()
            .with(eq("s-1"))
            .times(1)
            .returning(|_| ());
        mocks
            .notifier
            .expect_schedule_changed()
            .returning(|_| Ok(()));
        // No apply_response expectation: the stored status must stay as-is.

        let service = mocks.into_service(today());
        let outcome = service
            .submit_response("s-1", ResponseStatus::Rejected, Some("sick"))
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted);
    }

    #[tokio::test]
    async fn change_request_requires_reason_even_for_accept() {
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Rejected))));
        mocks
            .change_requests
            .expect_find_open_for_schedule()
            .returning(|_| Ok(None));

        let service = mocks.into_service(today());
        let result = service
            .submit_response("s-1", ResponseStatus::Accepted, None)
            .await;
        assert!(matches!(result, Err(AppError::ReasonRequired(_))));
    }

    #[tokio::test]
    async fn open_request_wins_over_missing_reason() {
        // Duplicate detection comes before reason validation.
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Accepted))));
        mocks
            .change_requests
            .expect_find_open_for_schedule()
            .returning(|schedule_id| {
                Ok(Some(ChangeRequest::new(
                    schedule_id.to_string(),
                    ResponseStatus::Rejected,
                    "sick".to_string(),
                )))
            });

        let service = mocks.into_service(today());
        let result = service
            .submit_response("s-1", ResponseStatus::Accepted, None)
            .await;
        assert!(matches!(result, Err(AppError::DuplicatePending(_))));
    }

    #[tokio::test]
    async fn change_request_status_serves_cache_hits_without_repository() {
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Accepted))));
        mocks.cache.expect_get().with(eq("s-1")).returning(|_| {
            Some(Some(ChangeRequest::new(
                "s-1".to_string(),
                ResponseStatus::Rejected,
                "sick".to_string(),
            )))
        });
        // No find_open_for_schedule expectation: a repo call fails the test.

        let service = mocks.into_service(today());
        let status = service.change_request_status("s-1").await.unwrap();
        assert!(status.has_open_request);
        assert_eq!(
            status.open_request.unwrap().requested_status,
            ResponseStatus::Rejected
        );
    }

    #[tokio::test]
    async fn change_request_status_fills_cache_on_miss() {
        let mut mocks = Mocks::new();
        mocks
            .schedules
            .expect_get_schedule()
            .returning(|id| Ok(Some(schedule_with(id, today(), ScheduleStatus::Accepted))));
        mocks.cache.expect_get().returning(|_| None);
        mocks
            .change_requests
            .expect_find_open_for_schedule()
            .times(1)
            .returning(|_| Ok(None));
        mocks
            .cache
            .expect_set()
            .withf(|id, request| id == "s-1" && request.is_none())
            .times(1)
            .returning(|_, _| ());

        let service = mocks.into_service(today());
        let status = service.change_request_status("s-1").await.unwrap();
        assert!(!status.has_open_request);
    }

    #[tokio::test]
    async fn list_for_employee_projects_each_schedule() {
        let mut mocks = Mocks::new();
        let from = today();
        let to = today() + Duration::days(7);
        mocks
            .schedules
            .expect_list_public_for_employee()
            .with(eq("emp-1"), eq(from), eq(to))
            .returning(|_, _, _| {
                Ok(vec![
                    schedule_with("s-1", today(), ScheduleStatus::Unset),
                    schedule_with("s-2", today(), ScheduleStatus::Accepted),
                ])
            });
        mocks.cache.expect_get().returning(|_| Some(None));

        let service = mocks.into_service(today());
        let board = service.list_for_employee("emp-1", from, to).await.unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].display_state, DisplayState::NeedsFirstResponse);
        assert_eq!(board[1].display_state, DisplayState::Accepted);
    }
}
