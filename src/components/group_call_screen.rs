use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use lucide_dioxus::PhoneOff;

use crate::theme::NARROW_VIEWPORT;

#[component]
pub fn GroupCallScreen(
    group_id: String,
    screen_width: u32,
    #[props(!optional)] connected_at: Option<DateTime<Utc>>,
    on_end_call: EventHandler<()>
) -> Element {
    let compact = screen_width < NARROW_VIEWPORT;
    let status_text = match connected_at {
        Some(at) => format!("Connected since {}", at.format("%H:%M:%S UTC")),
        None => "Connected".to_string(),
    };

    rsx! {
        div {
            style: "background: white; border-radius: 12px; padding: 24px; border: 1px solid var(--neutral-light); display: flex; flex-direction: column; gap: 16px;",

            div {
                h2 {
                    style: "font-size: 1.25rem; font-weight: 500; color: var(--neutral-dark); margin: 0;",
                    "Group call"
                }
                if !compact {
                    div {
                        style: "font-family: monospace; color: var(--neutral-secondary); font-size: 0.875rem;",
                        "{group_id}"
                    }
                }
                div {
                    style: "color: var(--theme-dark); font-size: 0.875rem;",
                    "{status_text}"
                }
            }

            button {
                style: "
                    padding: 12px 24px;
                    background: #DC2626;
                    color: white;
                    border: none;
                    border-radius: 8px;
                    font-weight: 500;
                    cursor: pointer;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 8px;
                ",
                onclick: move |_| on_end_call.call(()),
                PhoneOff {
                    size: 18,
                    color: "currentColor",
                    stroke_width: 2
                }
                if !compact {
                    span { "Leave call" }
                }
            }
        }
    }
}
