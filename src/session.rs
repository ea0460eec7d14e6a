//! Dialog sessions: attach, decide, detach, recreate
//!
//! A [`DialogSession`] owns one frozen configuration and the live selection
//! state derived from it. Attaching resolves where results will go; the
//! resolved listener is never persisted because the host object after a
//! recreation is a new instance. The one fact that cannot be re-derived,
//! whether the dialog was opened through the channel entry point, is
//! carried in [`SavedState`] together with the configuration and the
//! checked flags.

use crate::bus::ResultBus;
use crate::dialogs::DialogConfig;
use crate::result::{
    ButtonCode, DialogResult, Payload, KEY_CHECK_STATE_LIST, KEY_DAY_OF_MONTH, KEY_HOUR,
    KEY_MINUTE, KEY_MONTH, KEY_SELECTED_INDEX, KEY_YEAR, SELECTION_RESULT_CODE,
};
use crate::routing::{resolve_listener, Host, Route};
use crate::selection::{Activation, SelectionEngine};
use crate::surface::{ProgressView, Surface};
use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Lifecycle of a session instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Detached,
    Attaching,
    Attached,
}

/// Everything that must survive host recreation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub config: DialogConfig,
    pub called_from_channel: bool,
    pub checked_states: Option<Vec<bool>>,
}

/// A live dialog instance bound to a host environment
#[derive(Debug)]
pub struct DialogSession {
    config: DialogConfig,
    called_from_channel: bool,
    route: Route,
    state: SessionState,
    engine: Option<SelectionEngine>,
    dismissed: bool,
}

impl DialogSession {
    fn new(config: DialogConfig) -> Self {
        let engine = config
            .selection_mode()
            .map(|mode| SelectionEngine::new(mode, config.items().unwrap_or_default().to_vec()));
        Self {
            config,
            called_from_channel: false,
            route: Route::Unresolved,
            state: SessionState::Detached,
            engine,
            dismissed: false,
        }
    }

    /// Open a dialog from a screen that may implement [`DialogListener`]
    ///
    /// The listener is looked up on the host itself first, then on its
    /// logical parent. A host with neither still gets a visible dialog,
    /// but its results are undeliverable.
    ///
    /// [`DialogListener`]: crate::routing::DialogListener
    pub fn show_via_screen(config: DialogConfig, host: &dyn Host) -> Self {
        let mut session = Self::new(config);
        session.attach_screen(host);
        session
    }

    /// Open a dialog whose result is published on the bus under its
    /// request key
    pub fn show_via_channel(config: DialogConfig, bus: &ResultBus) -> Self {
        let mut session = Self::new(config);
        session.called_from_channel = true;
        session.state = SessionState::Attaching;
        session.route = Route::Channel(bus.clone());
        session.state = SessionState::Attached;
        debug!(tag = session.config.tag(), "session attached via channel");
        session
    }

    /// Snapshot for host recreation
    pub fn save_state(&self) -> SavedState {
        SavedState {
            config: self.config.clone(),
            called_from_channel: self.called_from_channel,
            checked_states: self.engine.as_ref().map(SelectionEngine::checked_states),
        }
    }

    /// Rebuild a session after the host destroyed and recreated it
    ///
    /// A channel-opened session reconnects to the bus without looking at
    /// the new host at all; anything else would hand a result meant for
    /// the bus to an ancestor listener. Screen-opened sessions re-resolve
    /// the listener against the new host instance.
    pub fn restore(saved: SavedState, host: &dyn Host, bus: &ResultBus) -> Self {
        let mut session = Self::new(saved.config);
        if let (Some(engine), Some(states)) = (session.engine.as_mut(), &saved.checked_states) {
            engine.restore_checked_states(states);
        }
        if saved.called_from_channel {
            session.called_from_channel = true;
            session.state = SessionState::Attaching;
            session.route = Route::Channel(bus.clone());
            session.state = SessionState::Attached;
            debug!(tag = session.config.tag(), "session re-attached via channel");
        } else {
            session.attach_screen(host);
        }
        session
    }

    fn attach_screen(&mut self, host: &dyn Host) {
        self.state = SessionState::Attaching;
        match resolve_listener(host) {
            Some(listener) => self.route = Route::Listener(listener),
            None => {
                warn!(tag = self.config.tag(), "host resolved no listener; results will be undeliverable");
                self.route = Route::Unresolved;
            }
        }
        self.state = SessionState::Attached;
        debug!(tag = self.config.tag(), route = ?self.route, "session attached via screen");
    }

    /// Drop the host binding. The listener reference must not outlive the
    /// host, so the route is cleared unconditionally.
    pub fn detach(&mut self) {
        self.route = Route::Unresolved;
        self.state = SessionState::Detached;
        debug!(tag = self.config.tag(), "session detached");
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn called_from_channel(&self) -> bool {
        self.called_from_channel
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Live selection snapshot, for the kinds that carry one
    pub fn selection(&self) -> Option<&SelectionEngine> {
        self.engine.as_ref()
    }

    /// Draw the dialog's initial content on a fresh surface
    pub fn present(&mut self, surface: &mut dyn Surface) -> Result<()> {
        if let Some(engine) = &self.engine {
            surface.render_list(engine.items(), self.config.columns())?;
        }
        let labels = self.config.button_labels();
        if !labels.is_empty() {
            surface.render_buttons(&labels)?;
        }
        if let DialogConfig::Progress(config) = &self.config {
            let view = if config.is_indeterminate() {
                ProgressView::Indeterminate
            } else {
                ProgressView::Determinate {
                    progress: 0,
                    quantity_max: config.quantity_max,
                    percent: 0,
                }
            };
            surface.render_progress(view, config.message.as_deref())?;
        }
        Ok(())
    }

    /// Handle an activation reported by the surface at `position`
    ///
    /// For the persistent selection kinds this mutates checked state and
    /// repaints only the changed positions. For the one-shot picker the
    /// activation is the decision and closes the session.
    pub fn activate_item(&mut self, position: usize, surface: &mut dyn Surface) -> Result<()> {
        if self.dismissed {
            return Ok(());
        }
        let columns = self.config.columns();
        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };
        match engine.activate(position) {
            Activation::Changed(positions) => {
                surface.render_changed(&positions, engine.items(), columns)
            }
            Activation::Chosen(index) => {
                let mut payload = Payload::new();
                payload.insert(KEY_SELECTED_INDEX.to_string(), serde_json::json!(index));
                self.finish(SELECTION_RESULT_CODE, payload, surface)
            }
            Activation::Unchanged | Activation::Ignored => Ok(()),
        }
    }

    /// Handle a button press reported by the surface
    pub fn press_button(&mut self, code: ButtonCode, surface: &mut dyn Surface) -> Result<()> {
        if self.dismissed {
            return Ok(());
        }
        debug!(tag = self.config.tag(), code = code.code(), "button pressed");
        let payload = self.decision_payload();
        self.finish(code.code(), payload, surface)
    }

    /// Deliver a confirmed date from a date picker surface
    pub fn confirm_date(&mut self, date: NaiveDate, surface: &mut dyn Surface) -> Result<()> {
        if self.dismissed {
            return Ok(());
        }
        if !matches!(self.config, DialogConfig::DateSelect(_)) {
            anyhow::bail!("confirm_date on a {} session", self.config.tag());
        }
        let mut payload = Payload::new();
        payload.insert(KEY_YEAR.to_string(), serde_json::json!(date.year()));
        payload.insert(KEY_MONTH.to_string(), serde_json::json!(date.month()));
        payload.insert(KEY_DAY_OF_MONTH.to_string(), serde_json::json!(date.day()));
        self.finish(ButtonCode::Positive.code(), payload, surface)
    }

    /// Deliver a confirmed time from a time picker surface
    pub fn confirm_time(&mut self, time: NaiveTime, surface: &mut dyn Surface) -> Result<()> {
        if self.dismissed {
            return Ok(());
        }
        if !matches!(self.config, DialogConfig::TimeSelect(_)) {
            anyhow::bail!("confirm_time on a {} session", self.config.tag());
        }
        let mut payload = Payload::new();
        payload.insert(KEY_HOUR.to_string(), serde_json::json!(time.hour()));
        payload.insert(KEY_MINUTE.to_string(), serde_json::json!(time.minute()));
        self.finish(ButtonCode::Positive.code(), payload, surface)
    }

    /// Host-driven dismissal (outside tap, back navigation): tear down
    /// without routing a result. Safe to call twice.
    pub fn cancel(&mut self, surface: &mut dyn Surface) -> Result<()> {
        if self.dismissed {
            return Ok(());
        }
        self.dismissed = true;
        debug!(tag = self.config.tag(), "session cancelled without result");
        surface.dismiss()
    }

    /// Selection snapshot that travels with a button decision
    fn decision_payload(&self) -> Payload {
        let mut payload = Payload::new();
        match &self.config {
            DialogConfig::MultiChoice(_) => {
                if let Some(engine) = &self.engine {
                    payload.insert(
                        KEY_CHECK_STATE_LIST.to_string(),
                        serde_json::json!(engine.checked_states()),
                    );
                }
            }
            DialogConfig::SingleChoice(_) => {
                if let Some(engine) = &self.engine {
                    let index = engine
                        .checked_position()
                        .map(|pos| pos as i64)
                        .unwrap_or(-1);
                    payload.insert(KEY_SELECTED_INDEX.to_string(), serde_json::json!(index));
                }
            }
            _ => {}
        }
        payload
    }

    /// Dismiss first, then deliver; delivery never blocks dismissal
    fn finish(&mut self, result_code: i32, payload: Payload, surface: &mut dyn Surface) -> Result<()> {
        self.dismissed = true;
        let dismissed = surface.dismiss();
        self.route
            .deliver(DialogResult::new(self.config.request_key(), result_code, payload));
        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::{
        DateSelectDialogBuilder, ItemSelectDialogBuilder, MessageDialogBuilder,
        MultiChoiceDialogBuilder, SingleChoiceDialogBuilder, TimeSelectDialogBuilder,
    };
    use crate::item::SelectorItem;
    use crate::routing::DialogListener;
    use crate::surface::test_support::RecordingSurface;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingListener {
        received: Mutex<Vec<(String, i32, Payload)>>,
    }

    impl DialogListener for RecordingListener {
        fn receive_result(&self, request_key: &str, result_code: i32, payload: &Payload) {
            self.received
                .lock()
                .unwrap()
                .push((request_key.to_string(), result_code, payload.clone()));
        }
    }

    struct Screen {
        listener: Option<Arc<RecordingListener>>,
    }

    impl Host for Screen {
        fn listener(&self) -> Option<Arc<dyn DialogListener>> {
            self.listener
                .as_ref()
                .map(|listener| listener.clone() as Arc<dyn DialogListener>)
        }
    }

    fn message_config() -> DialogConfig {
        MessageDialogBuilder::new()
            .title("Title")
            .text("Body")
            .positive_label("OK")
            .negative_label("Cancel")
            .request_key("msg")
            .build()
            .unwrap()
            .into()
    }

    fn multi_choice_config() -> DialogConfig {
        MultiChoiceDialogBuilder::new()
            .title("Pick")
            .selector_items(vec![
                SelectorItem::text("a").unwrap(),
                SelectorItem::text("b").unwrap(),
                SelectorItem::text("c").unwrap(),
            ])
            .positive_label("OK")
            .request_key("multi")
            .build()
            .unwrap()
            .into()
    }

    #[test]
    fn test_screen_attach_resolves_listener_and_delivers() {
        let listener = Arc::new(RecordingListener::default());
        let screen = Screen {
            listener: Some(listener.clone()),
        };
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_screen(message_config(), &screen);
        assert_eq!(session.state(), SessionState::Attached);
        assert!(!session.called_from_channel());

        session.press_button(ButtonCode::Positive, &mut surface).unwrap();
        assert_eq!(surface.dismissed, 1);
        let received = listener.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].0, "msg");
        assert_eq!(received[0].1, -1);
        assert!(received[0].2.is_empty());
    }

    #[test]
    fn test_dismissal_happens_even_without_listener() {
        let screen = Screen { listener: None };
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_screen(message_config(), &screen);
        // Delivering panics on the unresolved route, but the surface must
        // already be gone by then.
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            session.press_button(ButtonCode::Negative, &mut surface)
        }));
        assert!(outcome.is_err());
        assert_eq!(surface.dismissed, 1);
    }

    #[tokio::test]
    async fn test_channel_decision_carries_full_check_state_list() {
        let bus = ResultBus::new();
        let mut rx = bus.subscribe("multi");
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_channel(multi_choice_config(), &bus);
        assert!(session.called_from_channel());

        session.activate_item(0, &mut surface).unwrap();
        session.activate_item(2, &mut surface).unwrap();
        let expected = session.selection().unwrap().checked_states();
        session.press_button(ButtonCode::Positive, &mut surface).unwrap();

        let result = rx.recv().await.unwrap();
        assert_eq!(result.result_code, -1);
        let states: Vec<bool> =
            serde_json::from_value(result.payload[KEY_CHECK_STATE_LIST].clone()).unwrap();
        assert_eq!(states.len(), 3);
        assert_eq!(states, expected);
        assert_eq!(states, vec![true, false, true]);
        // The channel route also mirrors the button code into the payload.
        assert_eq!(result.payload[crate::result::KEY_RESULT], serde_json::json!(-1));
    }

    #[test]
    fn test_selection_changes_repaint_only_changed_positions() {
        let config: DialogConfig = SingleChoiceDialogBuilder::new()
            .title("Pick one")
            .selector_items(vec![
                SelectorItem::text("a").unwrap(),
                SelectorItem::text("b").unwrap(),
            ])
            .positive_label("OK")
            .request_key("single")
            .build()
            .unwrap()
            .into();
        let bus = ResultBus::new();
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_channel(config, &bus);
        session.activate_item(0, &mut surface).unwrap();
        session.activate_item(1, &mut surface).unwrap();
        assert_eq!(surface.changed_renders, vec![vec![0], vec![0, 1]]);
    }

    #[tokio::test]
    async fn test_single_choice_decision_carries_checked_index() {
        let config: DialogConfig = SingleChoiceDialogBuilder::new()
            .title("Pick one")
            .selector_items(vec![
                SelectorItem::text("a").unwrap(),
                SelectorItem::text("b").unwrap(),
            ])
            .positive_label("OK")
            .request_key("single")
            .build()
            .unwrap()
            .into();
        let bus = ResultBus::new();
        let mut rx = bus.subscribe("single");
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_channel(config, &bus);
        session.activate_item(1, &mut surface).unwrap();
        session.press_button(ButtonCode::Positive, &mut surface).unwrap();
        let result = rx.recv().await.unwrap();
        assert_eq!(result.payload[KEY_SELECTED_INDEX], serde_json::json!(1));
    }

    #[tokio::test]
    async fn test_one_shot_activation_resolves_and_dismisses() {
        let config: DialogConfig = ItemSelectDialogBuilder::new()
            .title("Share via")
            .selector_items(vec![
                SelectorItem::text("Mail").unwrap(),
                SelectorItem::text("Drive").unwrap(),
            ])
            .request_key("share")
            .build()
            .unwrap()
            .into();
        let bus = ResultBus::new();
        let mut rx = bus.subscribe("share");
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_channel(config, &bus);
        session.activate_item(1, &mut surface).unwrap();
        assert!(session.is_dismissed());
        assert_eq!(surface.dismissed, 1);
        let result = rx.recv().await.unwrap();
        assert_eq!(result.result_code, SELECTION_RESULT_CODE);
        assert_eq!(result.payload[KEY_SELECTED_INDEX], serde_json::json!(1));

        // Further activations are no-ops after the session ended.
        session.activate_item(0, &mut surface).unwrap();
        assert_eq!(surface.dismissed, 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_recreation_round_trip_preserves_state() {
        let bus = ResultBus::new();
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_channel(multi_choice_config(), &bus);
        session.activate_item(1, &mut surface).unwrap();

        let saved = session.save_state();
        let json = serde_json::to_string(&saved).unwrap();
        session.detach();
        drop(session);

        let restored_state: SavedState = serde_json::from_str(&json).unwrap();
        assert!(restored_state.called_from_channel);
        let screen = Screen { listener: None };
        let session = DialogSession::restore(restored_state, &screen, &bus);
        assert!(session.called_from_channel());
        assert_eq!(
            session.selection().unwrap().checked_states(),
            vec![false, true, false]
        );
    }

    #[test]
    fn test_restored_channel_session_skips_listener_resolution() {
        let bus = ResultBus::new();
        let session = DialogSession::show_via_channel(multi_choice_config(), &bus);
        let saved = session.save_state();

        // The recreated host is listener-capable; a channel session must
        // ignore it so the result does not leak to the screen.
        let listener = Arc::new(RecordingListener::default());
        let screen = Screen {
            listener: Some(listener.clone()),
        };
        let mut restored = DialogSession::restore(saved, &screen, &bus);
        let mut rx = bus.subscribe("multi");
        let mut surface = RecordingSurface::default();
        restored.press_button(ButtonCode::Neutral, &mut surface).unwrap();
        assert!(listener.received.lock().unwrap().is_empty());
        assert_eq!(rx.try_recv().unwrap().result_code, -3);
    }

    #[test]
    fn test_restored_screen_session_rebinds_to_new_host() {
        let listener_a = Arc::new(RecordingListener::default());
        let screen_a = Screen {
            listener: Some(listener_a.clone()),
        };
        let session = DialogSession::show_via_screen(message_config(), &screen_a);
        let saved = session.save_state();

        let listener_b = Arc::new(RecordingListener::default());
        let screen_b = Screen {
            listener: Some(listener_b.clone()),
        };
        let bus = ResultBus::new();
        let mut restored = DialogSession::restore(saved, &screen_b, &bus);
        let mut surface = RecordingSurface::default();
        restored.press_button(ButtonCode::Positive, &mut surface).unwrap();
        assert!(listener_a.received.lock().unwrap().is_empty());
        assert_eq!(listener_b.received.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_detach_clears_route() {
        let listener = Arc::new(RecordingListener::default());
        let screen = Screen {
            listener: Some(listener),
        };
        let mut session = DialogSession::show_via_screen(message_config(), &screen);
        session.detach();
        assert_eq!(session.state(), SessionState::Detached);
        assert!(matches!(session.state(), SessionState::Detached));
    }

    #[test]
    fn test_cancel_is_idempotent_and_routes_nothing() {
        let bus = ResultBus::new();
        let mut rx = bus.subscribe("msg");
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_channel(message_config(), &bus);
        session.cancel(&mut surface).unwrap();
        session.cancel(&mut surface).unwrap();
        assert_eq!(surface.dismissed, 1);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_date_confirmation_payload() {
        let config: DialogConfig = DateSelectDialogBuilder::new()
            .date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
            .request_key("date")
            .build()
            .unwrap()
            .into();
        let bus = ResultBus::new();
        let mut rx = bus.subscribe("date");
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_channel(config, &bus);
        session
            .confirm_date(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(), &mut surface)
            .unwrap();
        let result = rx.recv().await.unwrap();
        assert_eq!(result.result_code, -1);
        assert_eq!(result.payload[KEY_YEAR], serde_json::json!(2026));
        assert_eq!(result.payload[KEY_MONTH], serde_json::json!(1));
        assert_eq!(result.payload[KEY_DAY_OF_MONTH], serde_json::json!(2));
    }

    #[tokio::test]
    async fn test_time_confirmation_payload() {
        let config: DialogConfig = TimeSelectDialogBuilder::new()
            .request_key("time")
            .build()
            .unwrap()
            .into();
        let bus = ResultBus::new();
        let mut rx = bus.subscribe("time");
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_channel(config, &bus);
        session
            .confirm_time(NaiveTime::from_hms_opt(7, 45, 0).unwrap(), &mut surface)
            .unwrap();
        let result = rx.recv().await.unwrap();
        assert_eq!(result.payload[KEY_HOUR], serde_json::json!(7));
        assert_eq!(result.payload[KEY_MINUTE], serde_json::json!(45));
    }

    #[test]
    fn test_confirm_date_on_wrong_kind_errors() {
        let bus = ResultBus::new();
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_channel(message_config(), &bus);
        let err = session
            .confirm_date(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(), &mut surface)
            .unwrap_err();
        assert!(err.to_string().contains("MessageDialog"));
    }

    #[test]
    fn test_present_renders_list_and_buttons() {
        let bus = ResultBus::new();
        let mut surface = RecordingSurface::default();
        let mut session = DialogSession::show_via_channel(multi_choice_config(), &bus);
        session.present(&mut surface).unwrap();
        assert_eq!(surface.list_renders.len(), 1);
        assert_eq!(surface.list_renders[0].len(), 3);
        assert_eq!(surface.button_renders.len(), 1);
        assert_eq!(surface.button_renders[0].positive.as_deref(), Some("OK"));
    }
}
