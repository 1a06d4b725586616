//! Call session lifecycle.
//!
//! [`SessionController`] owns the one [`SessionState`] of a page load: which
//! screen is showing, the group call id, the last call end outcome and the
//! viewport width. Screens never touch the state directly; they send
//! [`SessionCommand`]s up and receive plain values down.
//!
//! Rejoining or going home is not an edge inside one state machine. Both
//! navigate the page, which discards this controller; the next page load
//! builds a new one seeded from the (possibly modified) address.

pub mod group_id;

pub use group_id::GroupId;

use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::commands::SessionCommand;
use crate::config::AppConfig;
use crate::error::{Result, SessionError};
use crate::platform::Browser;
use group_id::{group_id_from_href, href_with_group_id, href_without_query};

/// The mutually exclusive screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Home,
    Configuration,
    InCall,
    EndCall,
    Unsupported,
    Error,
}

impl Screen {
    /// No transition leaves a terminal screen within the same page load
    pub fn is_terminal(self) -> bool {
        matches!(self, Screen::EndCall | Screen::Unsupported | Screen::Error)
    }
}

/// Why a call terminated, as reported by the calling SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEndOutcome {
    pub code: i32,
    pub sub_code: i32,
}

impl CallEndOutcome {
    /// A join was attempted with no group call id to join
    pub const NO_GROUP_ID: CallEndOutcome = CallEndOutcome { code: 400, sub_code: 0 };

    pub fn new(code: i32, sub_code: i32) -> Self {
        Self { code, sub_code }
    }

    /// Text shown on the error screen
    pub fn message(&self) -> String {
        format!("The call has ended with this error code ({})", self)
    }
}

impl fmt::Display for CallEndOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code: {} Subcode: {}", self.code, self.sub_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub screen: Screen,
    /// Assigned once, then fixed for the page load
    pub group_id: Option<GroupId>,
    /// Only set when `screen` is [`Screen::Error`]
    pub call_end_outcome: Option<CallEndOutcome>,
    /// 0 until the first measurement
    pub viewport_width: u32,
    /// Set when the call connects; shown on the in-call screen
    pub connected_at: Option<DateTime<Utc>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            group_id: None,
            call_end_outcome: None,
            viewport_width: 0,
            connected_at: None,
        }
    }
}

/// A shared call link overrides the default landing screen.
///
/// Pure and idempotent, so it can run before every render and before every
/// transition without changing the outcome of either.
pub fn select_screen(url_group_id: Option<&GroupId>, current: Screen) -> Screen {
    match (url_group_id, current) {
        (Some(_), Screen::Home) => Screen::Configuration,
        _ => current,
    }
}

pub struct SessionController<B: Browser> {
    state: SessionState,
    browser: B,
    config: AppConfig,
}

impl<B: Browser> SessionController<B> {
    /// Build the session for a fresh page load.
    ///
    /// An address that already carries a group id lands on the configuration
    /// screen with that id adopted. History is not written.
    pub fn new(browser: B, config: AppConfig) -> Self {
        let mut controller = Self {
            state: SessionState::default(),
            browser,
            config,
        };
        controller.sync_screen();
        controller
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Group id carried by the current page address, if any
    pub fn url_group_id(&self) -> Option<GroupId> {
        group_id_from_href(&self.browser.href(), &self.config.group_id_param)
    }

    /// Screen to render right now, without mutating anything
    pub fn visible_screen(&self) -> Screen {
        select_screen(self.url_group_id().as_ref(), self.state.screen)
    }

    /// Return the group id, adopting one on first use.
    ///
    /// Prefers a non-empty id from the address and otherwise synthesizes a
    /// new one. Never writes history; [`Self::start_call`] does that.
    pub fn resolve_group_id(&mut self) -> GroupId {
        if let Some(id) = &self.state.group_id {
            return id.clone();
        }

        let id = match self.url_group_id() {
            Some(id) => {
                info!("Joining group call {} from the page address", id);
                id
            }
            None => {
                let id = GroupId::generate();
                info!("Created group call {}", id);
                id
            }
        };
        self.state.group_id = Some(id.clone());
        id
    }

    /// Home -> Configuration. Puts the group id into the address so it can be shared.
    pub fn start_call(&mut self) -> Result<Screen> {
        self.require("start a call", &[Screen::Home])?;

        let id = self.resolve_group_id();
        let href = href_with_group_id(&self.browser.href(), &self.config.group_id_param, &id);
        if let Err(e) = self.browser.push_state(&href) {
            warn!("Could not add group id to the address: {}", e);
        }

        Ok(self.enter(Screen::Configuration))
    }

    /// Configuration -> InCall
    pub fn call_established(&mut self) -> Result<Screen> {
        self.require("join the call", &[Screen::Configuration])?;
        self.state.connected_at = Some(Utc::now());
        Ok(self.enter(Screen::InCall))
    }

    /// Configuration -> Unsupported
    pub fn unsupported_detected(&mut self) -> Result<Screen> {
        self.require("report an unsupported browser", &[Screen::Configuration])?;
        self.browser.set_title(&self.config.unsupported_title);
        Ok(self.enter(Screen::Unsupported))
    }

    /// Configuration or InCall -> Error, keeping the outcome for display
    pub fn call_ended(&mut self, outcome: CallEndOutcome) -> Result<Screen> {
        self.require("end the call with an error", &[Screen::Configuration, Screen::InCall])?;
        warn!("Call ended abnormally ({})", outcome);
        self.state.call_end_outcome = Some(outcome);
        self.browser.set_title(&self.config.error_title);
        Ok(self.enter(Screen::Error))
    }

    /// InCall -> EndCall
    pub fn end_call(&mut self) -> Result<Screen> {
        self.require("leave the call", &[Screen::InCall])?;
        Ok(self.enter(Screen::EndCall))
    }

    /// Reload the page at the same address, rejoining the same call
    pub fn rejoin(&mut self) -> Result<Screen> {
        let screen = self.require("rejoin", &[Screen::EndCall])?;
        let href = self.browser.href();
        info!("Rejoining via {}", href);
        self.browser.navigate(&href)?;
        Ok(screen)
    }

    /// Reload the page without the query string, landing on a fresh home screen
    pub fn go_home(&mut self) -> Result<Screen> {
        let screen = self.require("go home", &[Screen::EndCall])?;
        let href = self.browser.href();
        let home = href_without_query(&href);
        info!("Returning home via {}", home);
        self.browser.navigate(home)?;
        Ok(screen)
    }

    /// Overwrite the viewport width; nothing else changes
    pub fn record_viewport_width(&mut self, width: u32) {
        debug!("Viewport width {}", width);
        self.state.viewport_width = width;
    }

    /// Apply one command from a screen or the SDK bridge
    pub fn apply(&mut self, command: SessionCommand) -> Result<Screen> {
        match command {
            SessionCommand::StartCall => self.start_call(),
            SessionCommand::CallEstablished => self.call_established(),
            SessionCommand::UnsupportedDetected => self.unsupported_detected(),
            SessionCommand::CallEnded { outcome } => self.call_ended(outcome),
            SessionCommand::EndCall => self.end_call(),
            SessionCommand::Rejoin => self.rejoin(),
            SessionCommand::GoHome => self.go_home(),
            SessionCommand::Resize { width } => {
                self.record_viewport_width(width);
                Ok(self.state.screen)
            }
        }
    }

    /// Fold the link override into the stored screen
    fn sync_screen(&mut self) {
        let screen = self.visible_screen();
        if screen != self.state.screen {
            self.resolve_group_id();
            self.enter(screen);
        }
    }

    /// Check the edge against the visible screen; state is only touched once it is accepted
    fn require(&mut self, action: &'static str, allowed: &[Screen]) -> Result<Screen> {
        let from = self.visible_screen();
        if allowed.contains(&from) {
            self.sync_screen();
            Ok(from)
        } else {
            if from.is_terminal() {
                warn!("Session already finished on {:?}; cannot {}", from, action);
            } else {
                warn!("Ignoring request to {} from {:?}", action, from);
            }
            Err(SessionError::InvalidTransition { from, action })
        }
    }

    fn enter(&mut self, to: Screen) -> Screen {
        info!("Session screen {:?} -> {:?}", self.state.screen, to);
        self.state.screen = to;
        to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryBrowser;

    const ROOT: &str = "http://localhost:3000/";

    fn controller_at(href: &str) -> (SessionController<MemoryBrowser>, MemoryBrowser) {
        let browser = MemoryBrowser::new(href, 1280);
        (SessionController::new(browser.clone(), AppConfig::default()), browser)
    }

    fn in_call() -> (SessionController<MemoryBrowser>, MemoryBrowser) {
        let (mut session, browser) = controller_at(ROOT);
        session.start_call().unwrap();
        session.call_established().unwrap();
        (session, browser)
    }

    #[test]
    fn fresh_start_lands_on_home() {
        let (session, browser) = controller_at(ROOT);
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(session.visible_screen(), Screen::Home);
        assert_eq!(session.state().group_id, None);
        assert!(browser.history().is_empty());
    }

    #[test]
    fn start_call_creates_id_and_writes_address() {
        let (mut session, browser) = controller_at(ROOT);

        assert_eq!(session.start_call(), Ok(Screen::Configuration));

        let id = session.state().group_id.clone().expect("group id assigned");
        assert!(!id.as_str().is_empty());
        assert!(browser.href().ends_with(&format!("?groupId={}", id)));
        assert_eq!(browser.history().len(), 1);
        assert!(browser.navigations().is_empty());
    }

    #[test]
    fn shared_link_skips_home() {
        let (mut session, browser) = controller_at("http://localhost:3000/?groupId=abc123");

        assert_eq!(session.screen(), Screen::Configuration);
        assert_eq!(session.resolve_group_id().as_str(), "abc123");
        assert!(browser.history().is_empty());
    }

    #[test]
    fn empty_group_id_in_address_is_ignored() {
        let (mut session, _browser) = controller_at("http://localhost:3000/?groupId=");
        assert_eq!(session.screen(), Screen::Home);
        assert_ne!(session.resolve_group_id().as_str(), "");
    }

    #[test]
    fn resolve_group_id_is_idempotent() {
        let (mut session, browser) = controller_at(ROOT);

        let first = session.resolve_group_id();
        let second = session.resolve_group_id();

        assert_eq!(first, second);
        assert!(browser.history().is_empty());
    }

    #[test]
    fn synthesized_ids_differ_between_sessions() {
        let (mut a, _) = controller_at(ROOT);
        let (mut b, _) = controller_at(ROOT);
        assert_ne!(a.resolve_group_id(), b.resolve_group_id());
    }

    #[test]
    fn select_screen_only_overrides_home() {
        let id = GroupId::parse("abc123").unwrap();
        assert_eq!(select_screen(Some(&id), Screen::Home), Screen::Configuration);
        assert_eq!(select_screen(None, Screen::Home), Screen::Home);
        for screen in [
            Screen::Configuration,
            Screen::InCall,
            Screen::EndCall,
            Screen::Unsupported,
            Screen::Error,
        ] {
            assert_eq!(select_screen(Some(&id), screen), screen);
            assert_eq!(select_screen(None, screen), screen);
        }
    }

    #[test]
    fn select_screen_is_idempotent() {
        let id = GroupId::parse("abc123").unwrap();
        let once = select_screen(Some(&id), Screen::Home);
        assert_eq!(select_screen(Some(&id), once), once);
    }

    #[test]
    fn configuration_reaches_in_call() {
        let (session, _) = in_call();
        assert_eq!(session.screen(), Screen::InCall);
        assert!(session.state().connected_at.is_some());
    }

    #[test]
    fn end_of_call_keeps_group_id() {
        let (mut session, _) = in_call();
        let id = session.state().group_id.clone();

        assert_eq!(session.end_call(), Ok(Screen::EndCall));
        assert_eq!(session.state().group_id, id);
    }

    #[test]
    fn unsupported_sets_title() {
        let (mut session, browser) = controller_at("http://h/?groupId=g");
        assert_eq!(session.unsupported_detected(), Ok(Screen::Unsupported));
        assert_eq!(browser.title(), "Unsupported browser");
        assert_eq!(session.state().call_end_outcome, None);
    }

    #[test]
    fn call_end_outcome_is_captured() {
        let (mut session, browser) = controller_at("http://h/?groupId=g");

        let outcome = CallEndOutcome::new(487, 12345);
        assert_eq!(session.call_ended(outcome), Ok(Screen::Error));

        assert_eq!(session.state().call_end_outcome, Some(outcome));
        assert_eq!(browser.title(), "Call Ended");
        let message = outcome.message();
        assert!(message.contains("487"));
        assert!(message.contains("12345"));
    }

    #[test]
    fn abnormal_end_while_in_call_reaches_error() {
        let (mut session, _) = in_call();
        assert_eq!(session.call_ended(CallEndOutcome::new(0, 1)), Ok(Screen::Error));
    }

    #[test]
    fn terminal_screens_stay_terminal() {
        let outcome = CallEndOutcome::new(487, 12345);
        let all = [
            SessionCommand::StartCall,
            SessionCommand::CallEstablished,
            SessionCommand::UnsupportedDetected,
            SessionCommand::CallEnded { outcome },
            SessionCommand::EndCall,
        ];

        let mut unsupported = controller_at("http://h/?groupId=g").0;
        unsupported.unsupported_detected().unwrap();
        let mut errored = controller_at("http://h/?groupId=g").0;
        errored.call_ended(outcome).unwrap();
        let mut ended = in_call().0;
        ended.end_call().unwrap();

        for session in [&mut unsupported, &mut errored, &mut ended] {
            let before = session.state().clone();
            for command in all.iter().cloned() {
                let result = session.apply(command);
                assert!(matches!(result, Err(SessionError::InvalidTransition { .. })));
                assert_eq!(session.state(), &before);
                assert!(session.screen().is_terminal());
            }
        }
    }

    #[test]
    fn invalid_transition_reports_origin() {
        let (mut session, _) = controller_at(ROOT);
        assert_eq!(
            session.end_call(),
            Err(SessionError::InvalidTransition { from: Screen::Home, action: "leave the call" })
        );
    }

    #[test]
    fn rejoin_reloads_same_address() {
        let (mut session, browser) = in_call();
        session.end_call().unwrap();
        let href = browser.href();

        assert_eq!(session.rejoin(), Ok(Screen::EndCall));
        assert_eq!(browser.navigations(), vec![href.clone()]);

        // The reloaded page joins the same call
        let mut reloaded = SessionController::new(browser.clone(), AppConfig::default());
        assert_eq!(reloaded.screen(), Screen::Configuration);
        assert_eq!(Some(reloaded.resolve_group_id()), session.state().group_id);
    }

    #[test]
    fn go_home_strips_group_id() {
        let (mut session, browser) = in_call();
        session.end_call().unwrap();

        session.go_home().unwrap();
        assert_eq!(browser.navigations(), vec![ROOT.to_string()]);

        let reloaded = SessionController::new(browser.clone(), AppConfig::default());
        assert_eq!(reloaded.screen(), Screen::Home);
        assert_eq!(reloaded.state().group_id, None);
    }

    #[test]
    fn rejoin_only_from_end_call() {
        let (mut session, browser) = in_call();
        assert!(session.rejoin().is_err());
        assert!(session.go_home().is_err());
        assert!(browser.navigations().is_empty());
    }

    #[test]
    fn failed_history_write_still_starts_call() {
        let browser = MemoryBrowser::new(ROOT, 1280).with_failing_navigation();
        let mut session = SessionController::new(browser.clone(), AppConfig::default());

        assert_eq!(session.start_call(), Ok(Screen::Configuration));
        assert!(session.state().group_id.is_some());
        assert_eq!(browser.href(), ROOT);
    }

    #[test]
    fn failed_reload_is_reported() {
        let browser = MemoryBrowser::new("http://h/?groupId=g", 1280).with_failing_navigation();
        let mut session = SessionController::new(browser, AppConfig::default());
        session.call_established().unwrap();
        session.end_call().unwrap();

        assert!(matches!(session.rejoin(), Err(SessionError::Navigation(_))));
    }

    #[test]
    fn viewport_tracking_touches_only_width() {
        let (mut session, _) = in_call();
        let before = session.state().clone();

        assert_eq!(session.apply(SessionCommand::Resize { width: 480 }), Ok(Screen::InCall));

        assert_eq!(session.state().viewport_width, 480);
        let mut expected = before;
        expected.viewport_width = 480;
        assert_eq!(session.state(), &expected);
    }

    #[test]
    fn resize_listener_feeds_controller_until_dropped() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let browser = MemoryBrowser::new(ROOT, 1280);
        let session = Rc::new(RefCell::new(SessionController::new(
            browser.clone(),
            AppConfig::default(),
        )));
        session.borrow_mut().record_viewport_width(browser.inner_width());
        assert_eq!(session.borrow().state().viewport_width, 1280);

        let listener = {
            let session = session.clone();
            browser.on_resize(Box::new(move |w| session.borrow_mut().record_viewport_width(w)))
        };
        browser.resize(480);
        assert_eq!(session.borrow().state().viewport_width, 480);
        assert_eq!(session.borrow().screen(), Screen::Home);

        drop(listener);
        browser.resize(320);
        assert_eq!(session.borrow().state().viewport_width, 480);
    }

    #[test]
    fn rejected_action_after_address_change_leaves_state_alone() {
        let (mut session, browser) = controller_at("http://h/");
        browser.push_state("http://h/?groupId=late").unwrap();
        let before = session.state().clone();

        assert_eq!(
            session.end_call(),
            Err(SessionError::InvalidTransition { from: Screen::Configuration, action: "leave the call" })
        );
        assert_eq!(session.state(), &before);
        assert_eq!(session.state().group_id, None);
    }

    #[test]
    fn sdk_normal_end_reaches_end_call() {
        use crate::calling::CallEvent;

        let (mut session, browser) = in_call();
        let id = session.state().group_id.clone();

        assert_eq!(session.apply(SessionCommand::from(CallEvent::Left)), Ok(Screen::EndCall));
        assert_eq!(session.state().call_end_outcome, None);
        assert_eq!(session.state().group_id, id);
        assert_eq!(browser.title(), "");
    }

    #[test]
    fn sdk_abnormal_end_reaches_error() {
        use crate::calling::CallEvent;

        let (mut session, _) = in_call();
        let outcome = CallEndOutcome::new(487, 12345);

        assert_eq!(session.apply(SessionCommand::from(CallEvent::Ended(outcome))), Ok(Screen::Error));
        assert_eq!(session.state().call_end_outcome, Some(outcome));
    }

    #[test]
    fn join_failure_during_configuration_reaches_error() {
        use crate::calling::CallEvent;

        let (mut session, browser) = controller_at("http://h/?groupId=g1");
        assert_eq!(session.screen(), Screen::Configuration);

        let command = SessionCommand::from(CallEvent::Ended(CallEndOutcome::NO_GROUP_ID));
        assert_eq!(session.apply(command), Ok(Screen::Error));
        assert_eq!(
            session.state().call_end_outcome.map(|o| o.message()),
            Some("The call has ended with this error code (Code: 400 Subcode: 0)".to_string())
        );
        assert_eq!(browser.title(), "Call Ended");
    }

    #[test]
    fn address_change_after_start_moves_home() {
        let (mut session, browser) = controller_at(ROOT);
        browser.push_state("http://localhost:3000/?groupId=late").unwrap();

        assert_eq!(session.visible_screen(), Screen::Configuration);
        assert_eq!(session.call_established(), Ok(Screen::InCall));
        assert_eq!(session.state().group_id, GroupId::parse("late"));
    }

    #[test]
    fn custom_query_param() {
        let browser = MemoryBrowser::new("http://h/?room=r1", 800);
        let config = AppConfig::default().with_group_id_param("room");
        let mut session = SessionController::new(browser, config);
        assert_eq!(session.screen(), Screen::Configuration);
        assert_eq!(session.resolve_group_id().as_str(), "r1");
    }
}
