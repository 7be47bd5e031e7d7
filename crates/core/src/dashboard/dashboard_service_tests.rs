//! Tests for the dashboard load pipeline, the session commit guard and the
//! refresh loop.

#[cfg(test)]
mod tests {
    use crate::dashboard::{
        DashboardRequest, DashboardScope, DashboardService, DashboardSession, RefreshHandle,
    };
    use crate::errors::{Error, Result};
    use crate::filters::StatusFilter;
    use crate::goals::{
        GoalCategory, GoalLoadResult, GoalQuery, GoalRecord, GoalServiceTrait, GoalStatus,
        GoalUpdate, NewGoal,
    };
    use crate::periods::{EvaluationPeriod, PeriodApiTrait, PeriodStatus};
    use crate::users::{Department, DirectoryApiTrait, Stage, User, UserRef};
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // =========================================================================
    // Fixtures
    // =========================================================================

    fn user(id: &str, supervisor: Option<&str>) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            employee_code: format!("E-{}", id),
            email: format!("{}@example.com", id),
            department: Some(Department {
                id: "d-1".to_string(),
                name: "Sales".to_string(),
                description: None,
            }),
            stage: Some(Stage {
                id: "s-1".to_string(),
                name: "Junior".to_string(),
                description: None,
            }),
            supervisor: supervisor.map(|id| UserRef {
                id: id.to_string(),
                name: format!("User {}", id),
            }),
        }
    }

    fn goal(id: &str, user_id: &str, status: GoalStatus, previous: Option<&str>) -> GoalRecord {
        let at = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        GoalRecord {
            id: id.to_string(),
            user_id: user_id.to_string(),
            period_id: "p-2026".to_string(),
            goal_category: GoalCategory::Performance,
            status,
            weight: 50.0,
            title: id.to_string(),
            description: None,
            achievement_criteria: None,
            previous_goal_id: previous.map(str::to_string),
            created_at: at,
            updated_at: at,
            approved_at: None,
            approved_by: None,
            supervisor_review: None,
            rejection_history: None,
        }
    }

    fn period(id: &str, status: PeriodStatus) -> EvaluationPeriod {
        EvaluationPeriod {
            id: id.to_string(),
            name: id.to_uppercase(),
            start_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2027, 3, 31).unwrap(),
            goal_submission_deadline: None,
            status,
        }
    }

    // =========================================================================
    // Mocks
    // =========================================================================

    #[derive(Default)]
    struct MockGoalService {
        goals: Vec<GoalRecord>,
        warning: Option<String>,
        fail: AtomicBool,
        delays: Mutex<VecDeque<Duration>>,
        queries: Mutex<Vec<GoalQuery>>,
        calls: AtomicUsize,
    }

    impl MockGoalService {
        fn with_goals(goals: Vec<GoalRecord>) -> Self {
            Self {
                goals,
                ..Default::default()
            }
        }

        fn delayed(self, delays: &[Duration]) -> Self {
            *self.delays.lock().unwrap() = delays.iter().copied().collect();
            self
        }

        fn last_query(&self) -> GoalQuery {
            self.queries.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl GoalServiceTrait for MockGoalService {
        async fn load_goals(&self, query: &GoalQuery) -> Result<GoalLoadResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().unwrap().push(query.clone());
            let delay = self.delays.lock().unwrap().pop_front();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(Error::Transport("connection reset".to_string()));
            }

            let goals = self
                .goals
                .iter()
                .filter(|g| query.user_id.as_deref().map_or(true, |u| g.user_id == u))
                .cloned()
                .collect();
            Ok(GoalLoadResult {
                goals,
                total_pages: 1,
                pages_failed: u32::from(self.warning.is_some()),
                warning: self.warning.clone(),
            })
        }

        async fn get_goal_history(&self, _goal_id: &str) -> Result<Vec<GoalRecord>> {
            Ok(Vec::new())
        }

        async fn create_goal(&self, _new_goal: NewGoal) -> Result<GoalRecord> {
            unimplemented!()
        }

        async fn update_goal(&self, _goal_id: &str, _update: GoalUpdate) -> Result<GoalRecord> {
            unimplemented!()
        }

        async fn submit_goal(&self, _goal_id: &str) -> Result<GoalRecord> {
            unimplemented!()
        }

        async fn delete_goal(&self, _goal_id: &str) -> Result<()> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct MockDirectory {
        users: Vec<User>,
        fail: bool,
    }

    #[async_trait]
    impl DirectoryApiTrait for MockDirectory {
        async fn list_users(&self) -> Result<Vec<User>> {
            if self.fail {
                return Err(Error::Api {
                    status: Some(503),
                    message: "directory unavailable".to_string(),
                });
            }
            Ok(self.users.clone())
        }

        async fn list_departments(&self) -> Result<Vec<Department>> {
            Ok(Vec::new())
        }

        async fn list_stages(&self) -> Result<Vec<Stage>> {
            Ok(Vec::new())
        }
    }

    struct MockPeriods(Vec<EvaluationPeriod>);

    #[async_trait]
    impl PeriodApiTrait for MockPeriods {
        async fn list_periods(&self) -> Result<Vec<EvaluationPeriod>> {
            Ok(self.0.clone())
        }
    }

    fn standard_users() -> Vec<User> {
        vec![
            user("boss", None),
            user("u-1", Some("boss")),
            user("u-2", Some("boss")),
            user("u-3", Some("other")),
        ]
    }

    fn standard_goals() -> Vec<GoalRecord> {
        vec![
            goal("g-1", "u-1", GoalStatus::Approved, None),
            goal("g-2-old", "u-2", GoalStatus::Rejected, None),
            goal("g-2", "u-2", GoalStatus::Draft, Some("g-2-old")),
            goal("g-3", "u-3", GoalStatus::Submitted, None),
            goal("g-x", "ghost", GoalStatus::Draft, None),
        ]
    }

    fn standard_periods() -> Vec<EvaluationPeriod> {
        vec![
            period("p-2025", PeriodStatus::Completed),
            period("p-2026", PeriodStatus::Active),
        ]
    }

    fn service_with(goals: Arc<MockGoalService>, directory: MockDirectory) -> DashboardService {
        DashboardService::new(
            goals,
            Arc::new(directory),
            Arc::new(MockPeriods(standard_periods())),
        )
    }

    fn standard_service() -> (Arc<MockGoalService>, DashboardService) {
        let goals = Arc::new(MockGoalService::with_goals(standard_goals()));
        let service = service_with(
            goals.clone(),
            MockDirectory {
                users: standard_users(),
                fail: false,
            },
        );
        (goals, service)
    }

    // =========================================================================
    // DashboardService
    // =========================================================================

    #[tokio::test]
    async fn test_organization_scope_aggregates_active_goals() {
        let (goals, service) = standard_service();

        let data = service
            .load(&DashboardRequest::new(DashboardScope::Organization))
            .await
            .unwrap();

        assert_eq!(data.period.id, "p-2026");
        assert_eq!(goals.last_query().period_id, "p-2026");
        assert_eq!(data.summaries.len(), 4);
        // The rejected predecessor and the goal of an unknown user are gone.
        assert_eq!(data.goals.len(), 3);
        let u2 = data.summaries.iter().find(|s| s.user_id == "u-2").unwrap();
        assert_eq!(u2.status_counts.draft, 1);
        assert_eq!(u2.status_counts.rejected, 0);
        assert!(!data.summaries[0].has_goals());
        assert!(data.warning.is_none());
    }

    #[tokio::test]
    async fn test_subordinate_scope_keeps_direct_reports() {
        let (_, service) = standard_service();

        let data = service
            .load(&DashboardRequest::new(DashboardScope::Subordinates {
                supervisor_id: "boss".to_string(),
            }))
            .await
            .unwrap();

        let ids: Vec<&str> = data.summaries.iter().map(|s| s.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u-1", "u-2"]);
        assert!(data.goals.iter().all(|g| g.user_id != "u-3"));
    }

    #[tokio::test]
    async fn test_user_scope_narrows_goal_query() {
        let (goals, service) = standard_service();

        let data = service
            .load(&DashboardRequest::new(DashboardScope::User {
                user_id: "u-3".to_string(),
            }))
            .await
            .unwrap();

        assert_eq!(goals.last_query().user_id.as_deref(), Some("u-3"));
        assert_eq!(data.summaries.len(), 1);
        assert_eq!(data.summaries[0].status_counts.submitted, 1);
    }

    #[tokio::test]
    async fn test_unknown_period_falls_back_to_current() {
        let (goals, service) = standard_service();

        let data = service
            .load(&DashboardRequest::new(DashboardScope::Organization).for_period("p-1999"))
            .await
            .unwrap();
        assert_eq!(data.period.id, "p-2026");

        service
            .load(&DashboardRequest::new(DashboardScope::Organization).for_period("p-2025"))
            .await
            .unwrap();
        assert_eq!(goals.last_query().period_id, "p-2025");
    }

    #[tokio::test]
    async fn test_no_periods_is_an_error() {
        let service = DashboardService::new(
            Arc::new(MockGoalService::default()),
            Arc::new(MockDirectory::default()),
            Arc::new(MockPeriods(Vec::new())),
        );

        let result = service
            .load(&DashboardRequest::new(DashboardScope::Organization))
            .await;
        assert!(matches!(result, Err(Error::NoEvaluationPeriod)));
    }

    #[tokio::test]
    async fn test_reference_data_failure_fails_load() {
        let goals = Arc::new(MockGoalService::with_goals(standard_goals()));
        let service = service_with(
            goals.clone(),
            MockDirectory {
                users: Vec::new(),
                fail: true,
            },
        );

        let result = service
            .load(&DashboardRequest::new(DashboardScope::Organization))
            .await;
        assert!(matches!(result, Err(Error::Api { status: Some(503), .. })));
        assert_eq!(goals.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_loader_warning_is_forwarded() {
        let mut mock = MockGoalService::with_goals(standard_goals());
        mock.warning = Some("Failed to load 1 of 3 pages".to_string());
        let service = service_with(
            Arc::new(mock),
            MockDirectory {
                users: standard_users(),
                fail: false,
            },
        );

        let data = service
            .load(&DashboardRequest::new(DashboardScope::Organization))
            .await
            .unwrap();
        assert_eq!(data.warning.as_deref(), Some("Failed to load 1 of 3 pages"));
    }

    // =========================================================================
    // DashboardSession
    // =========================================================================

    fn session_with(goals: MockGoalService) -> (Arc<MockGoalService>, Arc<DashboardSession>) {
        let goals = Arc::new(goals);
        let service = service_with(
            goals.clone(),
            MockDirectory {
                users: standard_users(),
                fail: false,
            },
        );
        let session = DashboardSession::new(
            Arc::new(service),
            DashboardRequest::new(DashboardScope::Organization),
        );
        (goals, Arc::new(session))
    }

    #[tokio::test]
    async fn test_refetch_commits_and_filters() {
        let (_, session) = session_with(MockGoalService::with_goals(standard_goals()));
        let commits = session.subscribe();

        let outcome = session.refetch().await.unwrap();
        assert!(outcome.success);
        assert_eq!(*commits.borrow(), 1);
        assert_eq!(session.period().await.unwrap().id, "p-2026");
        assert_eq!(session.current_page().await.total_items, 4);

        session.set_status(StatusFilter::HasDrafts).await;
        let page = session.current_page().await;
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].user_id, "u-2");
        assert_eq!(session.overview().await.total_users, 4);
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_previous_data() {
        let (goals, session) = session_with(MockGoalService::with_goals(standard_goals()));
        session.refetch().await.unwrap();

        goals.fail.store(true, Ordering::SeqCst);
        let outcome = session.refetch().await.unwrap();

        assert!(!outcome.success);
        assert!(outcome.error.unwrap().contains("connection reset"));
        assert!(session.error().await.is_some());
        assert_eq!(session.current_page().await.total_items, 4);

        session.dismiss_error().await;
        assert!(session.error().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_discards_in_flight_load() {
        let (_, session) = session_with(
            MockGoalService::with_goals(standard_goals()).delayed(&[Duration::from_secs(1)]),
        );

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.refetch().await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;
        session.close();

        assert!(pending.await.unwrap().is_none());
        assert!(session.data().await.is_none());
        assert_eq!(*session.subscribe().borrow(), 0);
        assert!(session.refetch().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_while_commit_waits_for_lock() {
        let (_, session) = session_with(
            MockGoalService::with_goals(standard_goals()).delayed(&[Duration::from_secs(1)]),
        );

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.refetch().await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;

        // The load finishes while a reader holds the state lock.
        let reader = session.state.read().await;
        tokio::time::sleep(Duration::from_secs(2)).await;
        session.close();
        drop(reader);

        assert!(pending.await.unwrap().is_none());
        assert!(session.data().await.is_none());
        assert_eq!(*session.subscribe().borrow(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_load_supersedes_older() {
        let (goals, session) = session_with(
            MockGoalService::with_goals(standard_goals())
                .delayed(&[Duration::from_secs(5), Duration::ZERO]),
        );

        let slow = {
            let session = session.clone();
            tokio::spawn(async move { session.refetch().await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;

        let fast = session.refetch().await;
        assert!(fast.unwrap().success);
        assert!(slow.await.unwrap().is_none());
        assert_eq!(goals.calls.load(Ordering::SeqCst), 2);
        assert!(session.data().await.is_some());
    }

    #[tokio::test]
    async fn test_period_change_resets_page() {
        let (goals, session) = session_with(MockGoalService::with_goals(standard_goals()));
        session.set_page(3).await;

        session.set_period(Some("p-2025".to_string())).await;
        session.refetch().await.unwrap();

        assert_eq!(goals.last_query().period_id, "p-2025");
        assert_eq!(session.current_page().await.page, 1);
    }

    // =========================================================================
    // RefreshHandle
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_refresh_polls_pauses_and_stops_on_drop() {
        let (goals, session) = session_with(MockGoalService::with_goals(standard_goals()));
        let handle = RefreshHandle::spawn(session.clone(), Duration::from_secs(60));

        // Ticks at 0s, 60s and 120s.
        tokio::time::sleep(Duration::from_secs(150)).await;
        assert_eq!(goals.calls.load(Ordering::SeqCst), 3);

        handle.set_input_focused(true);
        assert!(handle.is_paused());
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(goals.calls.load(Ordering::SeqCst), 3);

        handle.set_input_focused(false);
        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(goals.calls.load(Ordering::SeqCst), 4);

        drop(handle);
        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(goals.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_stops_when_session_closes() {
        let (_, session) = session_with(MockGoalService::with_goals(standard_goals()));
        let handle = RefreshHandle::spawn(session.clone(), Duration::from_secs(10));
        tokio::time::sleep(Duration::from_secs(1)).await;

        session.close();
        tokio::time::sleep(Duration::from_secs(15)).await;
        assert!(!handle.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_refresh_interval_is_raised_to_minimum() {
        let (goals, session) = session_with(MockGoalService::with_goals(standard_goals()));
        let handle = RefreshHandle::spawn(session.clone(), Duration::ZERO);

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        assert!(handle.is_running());
        assert_eq!(goals.calls.load(Ordering::SeqCst), 3);
    }
}
