use dioxus::prelude::*;
use lucide_dioxus::PhoneForwarded;

use crate::session::CallEndOutcome;
use crate::theme::NARROW_VIEWPORT;

#[component]
pub fn ConfigurationScreen(
    group_id: String,
    screen_width: u32,
    supported: bool,
    on_start_call: EventHandler<()>,
    on_unsupported: EventHandler<()>,
    on_call_ended: EventHandler<CallEndOutcome>
) -> Element {
    // One-shot support check before the call screen can be reached
    use_hook(move || {
        if !supported {
            on_unsupported.call(());
        }
    });

    let has_group_id = !group_id.is_empty();
    let direction = if screen_width < NARROW_VIEWPORT { "column" } else { "row" };

    rsx! {
        div {
            style: "background: white; border-radius: 12px; padding: 32px; border: 1px solid var(--neutral-light);",

            h2 {
                style: "font-size: 1.5rem; font-weight: 500; color: var(--neutral-dark); margin: 0 0 16px 0;",
                "Start a call"
            }

            div {
                style: "display: flex; flex-direction: {direction}; gap: 16px; align-items: center; justify-content: space-between;",

                div {
                    div {
                        style: "color: var(--neutral-secondary); font-size: 0.875rem;",
                        "Group call id"
                    }
                    div {
                        style: "font-family: monospace; color: var(--neutral-primary); word-break: break-all;",
                        "{group_id}"
                    }
                    div {
                        style: "color: var(--neutral-tertiary); font-size: 0.75rem; margin-top: 4px;",
                        "Copy this page's address to invite others to the same call."
                    }
                }

                button {
                    style: "
                        padding: 12px 24px;
                        background: var(--theme-primary);
                        color: white;
                        border: none;
                        border-radius: 8px;
                        font-weight: 500;
                        cursor: pointer;
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                    ",
                    disabled: !supported,
                    onclick: move |_| {
                        if has_group_id {
                            on_start_call.call(());
                        } else {
                            on_call_ended.call(CallEndOutcome::NO_GROUP_ID);
                        }
                    },
                    PhoneForwarded {
                        size: 18,
                        color: "currentColor",
                        stroke_width: 2
                    }
                    span { "Join call" }
                }
            }
        }
    }
}
