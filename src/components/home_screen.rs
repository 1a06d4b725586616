use dioxus::prelude::*;
use lucide_dioxus::Phone;

#[component]
pub fn HomeScreen(on_start_call: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "
                background: white;
                border-radius: 12px;
                padding: 48px 32px;
                border: 1px solid var(--neutral-light);
                text-align: center;
            ",

            h2 {
                style: "font-size: 1.75rem; font-weight: 500; color: var(--neutral-dark); margin: 0 0 16px 0;",
                "Group Calling"
            }

            p {
                style: "color: var(--neutral-secondary); margin: 0 0 32px 0;",
                "Start a new group call and share the link so others can join."
            }

            button {
                style: "
                    padding: 16px 24px;
                    background: var(--theme-primary);
                    color: white;
                    border: none;
                    border-radius: 8px;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                ",
                onclick: move |_| on_start_call.call(()),
                Phone {
                    size: 18,
                    color: "currentColor",
                    stroke_width: 2
                }
                span { "Start a call" }
            }
        }
    }
}
