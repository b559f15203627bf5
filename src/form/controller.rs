// src/form/controller.rs
//! Owns the form state and runs one submission at a time against a
//! recommendation transport. Every state change is published on a watch
//! channel so a view can follow the submission while it is in flight.

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::reducer::{reduce, FormEvent};
use super::state::FormState;
use crate::core::service_client::RecommendationTransport;
use crate::render::{render, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
    /// The controller was torn down before the request resolved, or before
    /// it was issued. No result was applied.
    Discarded,
    /// A submission was already in flight. Nothing was sent.
    Rejected,
}

/// Signals that the owner of the form is gone.
#[derive(Debug, Clone)]
pub struct TeardownHandle {
    token: CancellationToken,
}

impl TeardownHandle {
    pub fn teardown(&self) {
        self.token.cancel();
    }
}

pub struct ProfileFormController<T> {
    state: FormState,
    transport: T,
    liveness: CancellationToken,
    observers: watch::Sender<FormState>,
}

impl<T: RecommendationTransport> ProfileFormController<T> {
    pub fn new(transport: T) -> Self {
        Self::with_state(transport, FormState::default())
    }

    pub fn with_state(transport: T, state: FormState) -> Self {
        let (observers, _) = watch::channel(state.clone());
        Self {
            state,
            transport,
            liveness: CancellationToken::new(),
            observers,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn view(&self) -> View {
        render(&self.state)
    }

    /// Receiver that sees every state the form passes through, including
    /// Loading while `submit` is awaiting the transport.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.observers.subscribe()
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        TeardownHandle {
            token: self.liveness.clone(),
        }
    }

    pub fn dispatch(&mut self, event: FormEvent) -> &FormState {
        if self.liveness.is_cancelled() {
            debug!(?event, "Form torn down, event dropped");
            return &self.state;
        }
        apply(&mut self.state, &self.observers, event);
        &self.state
    }

    /// Send the current profile and fold the result back into the state.
    /// Loading is cleared on every exit path, including this future being
    /// dropped mid-flight.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.liveness.is_cancelled() {
            warn!("Submit requested after teardown");
            return SubmitOutcome::Discarded;
        }
        if !self.state.can_submit() {
            warn!(
                in_flight = ?self.state.ui.in_flight(),
                "Submit requested while a request is in flight"
            );
            return SubmitOutcome::Rejected;
        }

        let submission = Uuid::new_v4();
        let request = self.state.profile.to_request();

        let liveness = self.liveness.clone();
        let transport = &self.transport;
        let Some(mut guard) = SettleGuard::begin(&mut self.state, &self.observers, submission)
        else {
            warn!(%submission, "Form did not enter Loading, nothing sent");
            return SubmitOutcome::Rejected;
        };

        info!(%submission, "Sending profile to recommendation service");
        debug!(%submission, profile = %request.student_profile);

        let resolved = tokio::select! {
            biased;
            _ = liveness.cancelled() => None,
            result = transport.recommend(&request) => Some(result),
        };

        match resolved {
            None => {
                info!(%submission, "Form torn down before the response arrived");
                SubmitOutcome::Discarded
            }
            Some(Ok(response)) => {
                info!(
                    %submission,
                    count = response.recommendations().len(),
                    "Recommendations received"
                );
                guard.settle(FormEvent::SubmitSucceeded {
                    submission,
                    response,
                });
                SubmitOutcome::Succeeded
            }
            Some(Err(e)) => {
                error!(%submission, kind = e.kind(), "Failed to get recommendations: {}", e);
                guard.settle(FormEvent::SubmitFailed { submission });
                SubmitOutcome::Failed
            }
        }
    }
}

fn apply(state: &mut FormState, observers: &watch::Sender<FormState>, event: FormEvent) {
    *state = reduce(std::mem::take(state), event);
    observers.send_replace(state.clone());
}

/// Holds the form in Loading for one submission. Dropping it unsettled
/// abandons the submission.
struct SettleGuard<'a> {
    state: &'a mut FormState,
    observers: &'a watch::Sender<FormState>,
    submission: Uuid,
    settled: bool,
}

impl<'a> SettleGuard<'a> {
    /// `None` when the form is not Loading for `submission` afterwards.
    fn begin(
        state: &'a mut FormState,
        observers: &'a watch::Sender<FormState>,
        submission: Uuid,
    ) -> Option<Self> {
        apply(state, observers, FormEvent::SubmitStarted { submission });
        if state.ui.in_flight() != Some(submission) {
            return None;
        }
        Some(Self {
            state,
            observers,
            submission,
            settled: false,
        })
    }

    fn settle(&mut self, event: FormEvent) {
        apply(self.state, self.observers, event);
        self.settled = true;
    }
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            apply(
                self.state,
                self.observers,
                FormEvent::SubmitAbandoned {
                    submission: self.submission,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;
    use crate::form::state::UiState;
    use crate::render::SubmitAffordance;
    use crate::types::{JobRecommendation, RecommendationRequest, RecommendationResponse};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::Notify;

    enum Reply {
        Ok(RecommendationResponse),
        Status(u16),
        Malformed,
        Hang,
    }

    struct FakeTransport {
        reply: Reply,
        requests: Arc<Mutex<Vec<RecommendationRequest>>>,
        started: Arc<Notify>,
        /// When set, the reply waits for this before resolving.
        release: Option<Arc<Notify>>,
    }

    impl FakeTransport {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                requests: Arc::new(Mutex::new(Vec::new())),
                started: Arc::new(Notify::new()),
                release: None,
            }
        }

        fn gated(reply: Reply) -> (Self, Arc<Notify>) {
            let release = Arc::new(Notify::new());
            let transport = Self {
                release: Some(release.clone()),
                ..Self::new(reply)
            };
            (transport, release)
        }
    }

    #[async_trait]
    impl RecommendationTransport for FakeTransport {
        async fn recommend(
            &self,
            request: &RecommendationRequest,
        ) -> Result<RecommendationResponse, SubmitError> {
            self.requests.lock().unwrap().push(request.clone());
            self.started.notify_one();
            if let Some(release) = &self.release {
                release.notified().await;
            }
            match &self.reply {
                Reply::Ok(response) => Ok(response.clone()),
                Reply::Status(status) => Err(SubmitError::Status {
                    status: *status,
                    body: "nope".to_string(),
                }),
                Reply::Malformed => Err(SubmitError::MalformedResponse(
                    "expected value at line 1".to_string(),
                )),
                Reply::Hang => std::future::pending().await,
            }
        }
    }

    fn one_card_response() -> RecommendationResponse {
        RecommendationResponse {
            recommendations: Some(vec![JobRecommendation {
                title: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                salary: None,
                match_score: 92,
            }]),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_submit_success_sends_one_request() {
        let transport = FakeTransport::new(Reply::Ok(one_card_response()));
        let requests = transport.requests.clone();
        let mut controller = ProfileFormController::new(transport);
        controller.dispatch(FormEvent::ToggleSkill("Python".to_string()));
        controller.dispatch(FormEvent::ToggleSkill("Go".to_string()));

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert_eq!(
            controller.state().ui,
            UiState::Success {
                response: one_card_response()
            }
        );
        let sent = requests.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].student_profile.starts_with("Skills: Python, Go\n"));
    }

    #[tokio::test]
    async fn test_submit_failure_paths_end_in_error() {
        for reply in [Reply::Status(500), Reply::Status(404), Reply::Malformed] {
            let mut controller = ProfileFormController::new(FakeTransport::new(reply));
            assert_eq!(controller.submit().await, SubmitOutcome::Failed);
            assert_eq!(
                controller.state().ui.error(),
                Some("Failed to get recommendations")
            );
            assert!(controller.state().can_submit());
        }
    }

    #[tokio::test]
    async fn test_resubmit_after_error_clears_it() {
        let mut controller = ProfileFormController::new(FakeTransport::new(Reply::Status(503)));
        controller.submit().await;
        assert!(controller.state().ui.error().is_some());

        controller.transport.reply = Reply::Ok(RecommendationResponse::default());
        assert_eq!(controller.submit().await, SubmitOutcome::Succeeded);
        assert!(controller.state().ui.error().is_none());
    }

    #[tokio::test]
    async fn test_observers_see_loading_while_in_flight() {
        let replies = [
            (Reply::Ok(one_card_response()), SubmitOutcome::Succeeded),
            (Reply::Status(500), SubmitOutcome::Failed),
            (Reply::Malformed, SubmitOutcome::Failed),
        ];
        for (reply, expected) in replies {
            let (transport, release) = FakeTransport::gated(reply);
            let started = transport.started.clone();
            let mut controller = ProfileFormController::new(transport);
            let mut observed = controller.subscribe();
            assert!(!observed.borrow().ui.is_loading());

            let (outcome, _) = tokio::join!(controller.submit(), async {
                started.notified().await;
                let during = observed.borrow_and_update().clone();
                assert!(during.ui.is_loading());
                assert!(!during.can_submit());
                assert!(matches!(
                    render(&during).submit,
                    SubmitAffordance::Progress(_)
                ));
                release.notify_one();
            });

            assert_eq!(outcome, expected);
            let after = observed.borrow_and_update().clone();
            assert!(!after.ui.is_loading());
            assert!(matches!(render(&after).submit, SubmitAffordance::Button(_)));
            assert_eq!(&after, controller.state());
        }
    }

    #[tokio::test]
    async fn test_submit_while_loading_sends_nothing() {
        let transport = FakeTransport::new(Reply::Ok(one_card_response()));
        let requests = transport.requests.clone();
        let pending = Uuid::new_v4();
        let state = FormState {
            ui: UiState::Loading {
                submission: pending,
            },
            ..FormState::default()
        };
        let mut controller = ProfileFormController::with_state(transport, state);

        assert_eq!(controller.submit().await, SubmitOutcome::Rejected);

        assert!(requests.lock().unwrap().is_empty());
        assert_eq!(
            controller.state().ui,
            UiState::Loading {
                submission: pending
            }
        );
    }

    #[test]
    fn test_settle_guard_needs_its_own_loading() {
        let pending = Uuid::new_v4();
        let mut state = FormState {
            ui: UiState::Loading {
                submission: pending,
            },
            ..FormState::default()
        };
        let (observers, _) = watch::channel(state.clone());

        assert!(SettleGuard::begin(&mut state, &observers, Uuid::new_v4()).is_none());
        assert_eq!(state.ui.in_flight(), Some(pending));

        let mut idle = FormState::default();
        let submission = Uuid::new_v4();
        {
            let guard = SettleGuard::begin(&mut idle, &observers, submission);
            assert!(guard.is_some());
            assert_eq!(observers.borrow().ui.in_flight(), Some(submission));
        }
        assert_eq!(idle.ui, UiState::Idle);
        assert_eq!(observers.borrow().ui, UiState::Idle);
    }

    #[tokio::test]
    async fn test_loading_only_while_in_flight() {
        let transport = FakeTransport::new(Reply::Hang);
        let started = transport.started.clone();
        let mut controller = ProfileFormController::new(transport);
        assert!(!controller.state().ui.is_loading());

        {
            let submit = controller.submit();
            tokio::pin!(submit);
            tokio::select! {
                _ = &mut submit => panic!("hanging transport resolved"),
                _ = started.notified() => {}
            }
            // submit future dropped here, mid-flight
        }

        assert_eq!(controller.state().ui, UiState::Idle);
        assert!(controller.state().can_submit());
    }

    #[tokio::test]
    async fn test_teardown_discards_in_flight_result() {
        let transport = FakeTransport::new(Reply::Hang);
        let started = transport.started.clone();
        let mut controller = ProfileFormController::new(transport);
        let handle = controller.teardown_handle();

        let (outcome, _) = tokio::join!(controller.submit(), async {
            started.notified().await;
            handle.teardown();
        });

        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert!(controller.state().ui.response().is_none());
        assert!(!controller.state().ui.is_loading());
    }

    #[tokio::test]
    async fn test_after_teardown_nothing_is_sent() {
        let transport = FakeTransport::new(Reply::Ok(one_card_response()));
        let requests = transport.requests.clone();
        let mut controller = ProfileFormController::new(transport);
        controller.teardown_handle().teardown();

        assert_eq!(controller.submit().await, SubmitOutcome::Discarded);
        controller.dispatch(FormEvent::SetLocation("Remote".to_string()));

        assert!(requests.lock().unwrap().is_empty());
        assert_eq!(controller.state().profile.preferred_location, "");
        assert_eq!(controller.state().ui, UiState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_timeout_of_its_own() {
        let mut controller = ProfileFormController::new(FakeTransport::new(Reply::Hang));
        let result = tokio::time::timeout(Duration::from_secs(3600), controller.submit()).await;
        assert!(result.is_err());
        assert!(!controller.state().ui.is_loading());
    }
}
