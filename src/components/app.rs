use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use log::{error, info, warn};

use super::{
    CallErrorScreen, ConfigurationScreen, EndCallScreen, GroupCallScreen, HomeScreen,
    TitleBanner, UnsupportedScreen,
};
use crate::calling::{CallEventChannel, CallEventHandler};
use crate::commands::SessionCommand;
use crate::config::AppConfig;
use crate::platform::{default_browser, Browser, DefaultBrowser};
use crate::session::{Screen, SessionController};
use crate::theme;

#[component]
pub fn App() -> Element {
    // The one session for this page load
    let controller = use_signal(|| {
        let browser = default_browser();
        let width = browser.inner_width();
        let mut session = SessionController::new(browser, AppConfig::default());
        session.record_viewport_width(width);
        session
    });

    use_hook(|| info!("{}", AppConfig::default().banner()));

    // Calling SDK notifications arrive here; an SDK integration takes
    // `sdk_events.handler()`
    let sdk_events = use_hook(|| Rc::new(CallEventChannel::new()));

    // Single owner of session transitions. Commands come from the screens,
    // events come from the calling SDK.
    let coroutine_events = sdk_events.clone();
    let session = use_coroutine(move |mut rx: UnboundedReceiver<SessionCommand>| {
        let sdk_events = coroutine_events.clone();
        let mut controller = controller;

        async move {
            let Some(mut events) = sdk_events.take_receiver() else {
                error!("Calling event receiver already taken");
                return;
            };

            loop {
                let command = tokio::select! {
                    biased;
                    Some(command) = rx.next() => command,
                    Some(event) = events.recv() => SessionCommand::from(event),
                    else => break,
                };

                info!("Session: processing {:?}", command);
                if let Err(e) = controller.write().apply(command) {
                    warn!("Session command rejected: {}", e);
                }
            }
        }
    });

    // Track the viewport until the app is torn down
    let resize_listener = use_hook(|| {
        let browser: DefaultBrowser = controller.peek().browser().clone();
        let listener = browser.on_resize(Box::new(move |width| {
            session.send(SessionCommand::Resize { width });
        }));
        Rc::new(RefCell::new(Some(listener)))
    });
    use_drop(move || {
        resize_listener.borrow_mut().take();
        info!("Resize listener removed");
    });

    let (screen, group_id, viewport_width, outcome, connected_at, supported, config) = {
        let current = controller.read();
        let state = current.state();
        let snapshot = (
            current.visible_screen(),
            state
                .group_id
                .clone()
                .or_else(|| current.url_group_id())
                .map(|id| id.to_string())
                .unwrap_or_default(),
            state.viewport_width,
            state.call_end_outcome,
            state.connected_at,
            current.browser().supports_calling(),
            current.config().clone(),
        );
        snapshot
    };

    // The configuration screen stands in for the SDK's join flow, so its
    // outcomes travel the same path an SDK integration would use
    let established_events = sdk_events.handler();
    let unsupported_events = sdk_events.handler();
    let ended_events = sdk_events.handler();

    rsx! {
        style { {theme::stylesheet()} }

        div {
            style: "font-family: sans-serif; min-height: 100vh; display: flex; flex-direction: column;",

            TitleBanner { title: "Group Calling".to_string() }

            div {
                style: "padding: 0 20px 24px 20px; flex-grow: 1; display: flex; flex-direction: column;",
                match screen {
                    Screen::Home => rsx! {
                        HomeScreen {
                            on_start_call: move |_| session.send(SessionCommand::StartCall),
                        }
                    },
                    Screen::Configuration => rsx! {
                        ConfigurationScreen {
                            group_id: group_id,
                            screen_width: viewport_width,
                            supported: supported,
                            on_start_call: move |_| {
                                let events = established_events.clone();
                                spawn(async move { events.on_call_established().await });
                            },
                            on_unsupported: move |_| {
                                let events = unsupported_events.clone();
                                spawn(async move { events.on_unsupported_environment().await });
                            },
                            on_call_ended: move |outcome| {
                                let events = ended_events.clone();
                                spawn(async move { events.on_call_ended(outcome).await });
                            },
                        }
                    },
                    Screen::InCall => rsx! {
                        GroupCallScreen {
                            group_id: group_id,
                            screen_width: viewport_width,
                            connected_at: connected_at,
                            on_end_call: move |_| session.send(SessionCommand::EndCall),
                        }
                    },
                    Screen::EndCall => rsx! {
                        EndCallScreen {
                            message: config.end_call_message.clone(),
                            on_rejoin: move |_| session.send(SessionCommand::Rejoin),
                            on_home: move |_| session.send(SessionCommand::GoHome),
                        }
                    },
                    Screen::Unsupported => rsx! {
                        UnsupportedScreen {
                            help_url: config.browser_support_url.clone(),
                        }
                    },
                    Screen::Error => rsx! {
                        CallErrorScreen {
                            message: outcome.map(|o| o.message()).unwrap_or_default(),
                            help_url: config.troubleshooting_url.clone(),
                        }
                    },
                }
            }
        }
    }
}
