//! Prediction workflow use case
//!
//! [`PredictionWorkflow`] is the single source of truth for the active
//! locale, the form inputs and the request lifecycle. State lives in a
//! `tokio::sync::watch` channel: presentation components read snapshots or
//! subscribe to changes, and only the workflow writes.
//!
//! # Request lifecycle
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Success(response) ──submit──▶ Loading ...
//!                          └─err─▶ Failure(message)  ──submit──▶ Loading ...
//! ```
//!
//! At most one request is in flight. `submit()` while Loading is ignored,
//! so the response applied is always the one from the only outstanding
//! request and no sequence matching is needed.

use crate::config::WorkflowConfig;
use crate::ports::prediction_gateway::PredictionGateway;
use crate::ports::result_viewport::{NoViewport, ResultViewport};
use cardiacheck_domain::{
    CatalogEntry, Direction, FieldValue, Locale, PredictionInput, RequestState,
    TranslationCatalog,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Snapshot of everything the presentation layer renders from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowState {
    pub locale: Locale,
    pub inputs: PredictionInput,
    pub request: RequestState,
}

impl WorkflowState {
    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }
}

/// What a call to [`PredictionWorkflow::submit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was already in flight; nothing was sent
    Ignored,
    Succeeded,
    Failed,
}

/// Rolls Loading back to Idle if the submit future is dropped before the
/// gateway call settles.
struct InFlight<'a> {
    state: &'a watch::Sender<WorkflowState>,
    armed: bool,
}

impl InFlight<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("Prediction request dropped before it settled");
        self.state.send_if_modified(|state| {
            if state.request.is_loading() {
                state.request = RequestState::Idle;
                true
            } else {
                false
            }
        });
    }
}

/// Controller for the prediction form
pub struct PredictionWorkflow<G: PredictionGateway + 'static> {
    gateway: Arc<G>,
    catalog: &'static TranslationCatalog,
    state: watch::Sender<WorkflowState>,
    viewport: Arc<dyn ResultViewport>,
    reveal_delay: Duration,
}

impl<G: PredictionGateway + 'static> PredictionWorkflow<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_config(gateway, WorkflowConfig::default())
    }

    pub fn with_config(gateway: Arc<G>, config: WorkflowConfig) -> Self {
        let (state, _) = watch::channel(WorkflowState {
            locale: config.initial_locale,
            inputs: config.initial_inputs,
            request: RequestState::Idle,
        });

        Self {
            gateway,
            catalog: TranslationCatalog::shared(),
            state,
            viewport: Arc::new(NoViewport),
            reveal_delay: config.reveal_delay,
        }
    }

    /// Set the viewport revealed after a successful prediction
    pub fn with_viewport(mut self, viewport: Arc<dyn ResultViewport>) -> Self {
        self.viewport = viewport;
        self
    }

    // ==================== Read surface ====================

    pub fn snapshot(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Receive every state change from now on
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    pub fn locale(&self) -> Locale {
        self.state.borrow().locale
    }

    pub fn direction(&self) -> Direction {
        self.locale().direction()
    }

    /// Catalog entry for the active locale
    pub fn catalog_entry(&self) -> &'static CatalogEntry {
        self.catalog.get(self.locale())
    }

    pub fn catalog(&self) -> &'static TranslationCatalog {
        self.catalog
    }

    // ==================== Write surface ====================

    /// Switch the active locale. Inputs and request state are untouched.
    pub fn set_locale(&self, locale: Locale) {
        let changed = self.state.send_if_modified(|state| {
            if state.locale == locale {
                return false;
            }
            state.locale = locale;
            true
        });
        if changed {
            info!("Locale switched to {}", locale);
        }
    }

    /// Replace exactly one form field
    pub fn update_field(&self, value: FieldValue) {
        debug!("Field {} updated: {:?}", value.name(), value);
        self.state.send_modify(|state| state.inputs.apply(value));
    }

    /// Submit the current inputs.
    ///
    /// Ignored while a request is in flight. On failure the state holds the
    /// active locale's generic message; the error itself is only logged.
    pub async fn submit(&self) -> SubmitOutcome {
        let mut snapshot = None;
        self.state.send_if_modified(|state| {
            if state.request.is_loading() {
                return false;
            }
            state.request = RequestState::Loading;
            snapshot = Some(state.inputs.clone());
            true
        });

        let Some(inputs) = snapshot else {
            debug!("Submit ignored: a prediction request is already in flight");
            return SubmitOutcome::Ignored;
        };

        let in_flight = InFlight {
            state: &self.state,
            armed: true,
        };

        info!("Submitting prediction request");
        let result = self.gateway.predict(&inputs).await;
        in_flight.disarm();

        match result {
            Ok(response) => {
                info!(
                    "Prediction received: probability={} label={:?}",
                    response.probability, response.predicted_label
                );
                self.state
                    .send_modify(|state| state.request = RequestState::Success(response));
                self.schedule_reveal();
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                warn!("Prediction request failed: {}", e);
                let catalog = self.catalog;
                self.state.send_modify(|state| {
                    let message = catalog.get(state.locale).schema().workflow.request_failed;
                    state.request = RequestState::Failure(message.to_string());
                });
                SubmitOutcome::Failed
            }
        }
    }

    /// Reveal the result once, after the configured delay
    fn schedule_reveal(&self) {
        let viewport = Arc::clone(&self.viewport);
        let delay = self.reveal_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            viewport.reveal_result();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::prediction_gateway::{FailureCause, RequestFailed};
    use async_trait::async_trait;
    use cardiacheck_domain::{PredictionResponse, Sex};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{Notify, mpsc};

    // === Mock implementations ===

    /// Returns scripted results in order and records every input it sees
    struct ScriptedGateway {
        results: Mutex<VecDeque<Result<PredictionResponse, RequestFailed>>>,
        calls: Mutex<Vec<PredictionInput>>,
    }

    impl ScriptedGateway {
        fn new(results: Vec<Result<PredictionResponse, RequestFailed>>) -> Self {
            Self {
                results: Mutex::new(VecDeque::from(results)),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<PredictionInput> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PredictionGateway for ScriptedGateway {
        async fn predict(
            &self,
            input: &PredictionInput,
        ) -> Result<PredictionResponse, RequestFailed> {
            self.calls.lock().unwrap().push(input.clone());
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(FailureCause::Network("no scripted result".into()).into()))
        }
    }

    /// Holds every request open until released
    struct GatedGateway {
        calls: AtomicUsize,
        entered: Notify,
        release: Notify,
    }

    impl GatedGateway {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                entered: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl PredictionGateway for GatedGateway {
        async fn predict(
            &self,
            _input: &PredictionInput,
        ) -> Result<PredictionResponse, RequestFailed> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();
            self.release.notified().await;
            Ok(PredictionResponse::new(0.9))
        }
    }

    struct ChannelViewport(mpsc::UnboundedSender<()>);

    impl ResultViewport for ChannelViewport {
        fn reveal_result(&self) {
            let _ = self.0.send(());
        }
    }

    fn failed() -> Result<PredictionResponse, RequestFailed> {
        Err(FailureCause::Status(500).into())
    }

    // === Tests ===

    #[test]
    fn test_initial_state() {
        let workflow = PredictionWorkflow::new(Arc::new(ScriptedGateway::new(vec![])));
        let state = workflow.snapshot();
        assert_eq!(state.locale, Locale::En);
        assert_eq!(state.inputs, PredictionInput::default());
        assert_eq!(state.request, RequestState::Idle);
        assert_eq!(state.direction(), Direction::LeftToRight);
    }

    #[test]
    fn test_initial_state_from_config() {
        let config = WorkflowConfig::default()
            .with_locale(Locale::Ar)
            .with_inputs(PredictionInput::default().with(FieldValue::Sex(Sex::Female)));
        let workflow =
            PredictionWorkflow::with_config(Arc::new(ScriptedGateway::new(vec![])), config);

        assert_eq!(workflow.locale(), Locale::Ar);
        assert_eq!(workflow.direction(), Direction::RightToLeft);
        assert_eq!(workflow.snapshot().inputs.sex, Sex::Female);
    }

    #[tokio::test]
    async fn test_update_field_reaches_gateway_verbatim() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(PredictionResponse::new(0.2))]));
        let workflow = PredictionWorkflow::new(gateway.clone());

        workflow.update_field(FieldValue::Age(45));
        let outcome = workflow.submit().await;

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].age, 45);
        assert_eq!(
            calls[0],
            PredictionInput::default().with(FieldValue::Age(45))
        );
    }

    #[tokio::test]
    async fn test_success_stores_response() {
        let response = PredictionResponse::new(0.851789).with_label("Disease Present");
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(response.clone())]));
        let workflow = PredictionWorkflow::new(gateway);

        workflow.submit().await;

        assert_eq!(workflow.snapshot().request, RequestState::Success(response));
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_ignored() {
        let gateway = Arc::new(GatedGateway::new());
        let workflow = Arc::new(PredictionWorkflow::new(gateway.clone()));

        let first = tokio::spawn({
            let workflow = Arc::clone(&workflow);
            async move { workflow.submit().await }
        });
        gateway.entered.notified().await;
        assert!(workflow.snapshot().request.is_loading());

        let second = workflow.submit().await;
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

        gateway.release.notify_one();
        assert_eq!(first.await.unwrap(), SubmitOutcome::Succeeded);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        assert!(workflow.snapshot().request.response().is_some());
    }

    #[tokio::test]
    async fn test_edits_during_flight_do_not_change_submitted_snapshot() {
        let gateway = Arc::new(GatedGateway::new());
        let workflow = Arc::new(PredictionWorkflow::new(gateway.clone()));

        let pending = tokio::spawn({
            let workflow = Arc::clone(&workflow);
            async move { workflow.submit().await }
        });
        gateway.entered.notified().await;

        workflow.update_field(FieldValue::Age(77));
        workflow.set_locale(Locale::De);
        assert!(workflow.snapshot().request.is_loading());

        gateway.release.notify_one();
        pending.await.unwrap();

        let state = workflow.snapshot();
        assert_eq!(state.inputs.age, 77);
        assert_eq!(state.locale, Locale::De);
        assert!(state.request.response().is_some());
    }

    #[tokio::test]
    async fn test_failure_uses_active_locale_message() {
        let gateway = Arc::new(ScriptedGateway::new(vec![failed()]));
        let workflow = PredictionWorkflow::new(gateway);
        workflow.set_locale(Locale::Ar);

        let outcome = workflow.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        let ar = workflow.catalog().get(Locale::Ar).schema();
        assert_eq!(
            workflow.snapshot().request.failure_message(),
            Some(ar.workflow.request_failed)
        );
    }

    #[tokio::test]
    async fn test_failure_message_is_not_retranslated() {
        let gateway = Arc::new(ScriptedGateway::new(vec![failed()]));
        let workflow = PredictionWorkflow::new(gateway);

        workflow.submit().await;
        let english = workflow.catalog().get(Locale::En).schema().workflow.request_failed;
        assert_eq!(workflow.snapshot().request.failure_message(), Some(english));

        workflow.set_locale(Locale::De);
        assert_eq!(workflow.snapshot().request.failure_message(), Some(english));
    }

    #[tokio::test]
    async fn test_failure_permits_retry() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            failed(),
            Ok(PredictionResponse::new(0.1)),
        ]));
        let workflow = PredictionWorkflow::new(gateway.clone());

        assert_eq!(workflow.submit().await, SubmitOutcome::Failed);
        assert_eq!(workflow.submit().await, SubmitOutcome::Succeeded);
        assert_eq!(gateway.calls().len(), 2);
        assert_eq!(
            workflow.snapshot().request.response().map(|r| r.probability),
            Some(0.1)
        );
    }

    #[tokio::test]
    async fn test_set_locale_keeps_inputs_and_request() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(PredictionResponse::new(0.6))]));
        let workflow = PredictionWorkflow::new(gateway);
        workflow.update_field(FieldValue::Age(33));
        workflow.submit().await;
        let before = workflow.snapshot();

        workflow.set_locale(Locale::De);

        let after = workflow.snapshot();
        assert_eq!(after.locale, Locale::De);
        assert_eq!(after.inputs, before.inputs);
        assert_eq!(after.request, before.request);
        assert_eq!(workflow.catalog_entry().schema().form.calculate, "Berechnen");
    }

    #[tokio::test]
    async fn test_success_reveals_result_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(PredictionResponse::new(0.4))]));
        let config = WorkflowConfig::default().with_reveal_delay(Duration::from_millis(5));
        let workflow = PredictionWorkflow::with_config(gateway, config)
            .with_viewport(Arc::new(ChannelViewport(tx)));

        workflow.submit().await;

        let revealed = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await;
        assert_eq!(revealed.unwrap(), Some(()));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_failure_does_not_reveal() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let gateway = Arc::new(ScriptedGateway::new(vec![failed()]));
        let config = WorkflowConfig::default().with_reveal_delay(Duration::ZERO);
        let workflow = PredictionWorkflow::with_config(gateway, config)
            .with_viewport(Arc::new(ChannelViewport(tx)));

        workflow.submit().await;

        let revealed = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(revealed.is_err());
    }

    #[tokio::test]
    async fn test_dropped_submit_returns_to_idle() {
        let gateway = Arc::new(GatedGateway::new());
        let workflow = Arc::new(PredictionWorkflow::new(gateway.clone()));

        let pending = tokio::spawn({
            let workflow = Arc::clone(&workflow);
            async move { workflow.submit().await }
        });
        gateway.entered.notified().await;
        assert!(workflow.snapshot().request.is_loading());

        pending.abort();
        assert!(pending.await.unwrap_err().is_cancelled());
        assert_eq!(workflow.snapshot().request, RequestState::Idle);
    }

    #[tokio::test]
    async fn test_subscriber_sees_loading_then_result() {
        let gateway = Arc::new(GatedGateway::new());
        let workflow = Arc::new(PredictionWorkflow::new(gateway.clone()));
        let mut rx = workflow.subscribe();

        let pending = tokio::spawn({
            let workflow = Arc::clone(&workflow);
            async move { workflow.submit().await }
        });

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().request.is_loading());

        gateway.entered.notified().await;
        gateway.release.notify_one();
        pending.await.unwrap();

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().request.response().is_some());
    }

    #[test]
    fn test_set_same_locale_does_not_notify() {
        let workflow = PredictionWorkflow::new(Arc::new(ScriptedGateway::new(vec![])));
        let rx = workflow.subscribe();
        workflow.set_locale(Locale::En);
        assert!(!rx.has_changed().unwrap());
        workflow.set_locale(Locale::Ar);
        assert!(rx.has_changed().unwrap());
    }
}
