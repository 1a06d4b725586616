use dioxus::prelude::*;

#[component]
pub fn EndCallScreen(
    message: String,
    on_rejoin: EventHandler<()>,
    on_home: EventHandler<()>
) -> Element {
    rsx! {
        div {
            style: "background: white; border-radius: 12px; padding: 48px 32px; border: 1px solid var(--neutral-light); text-align: center;",

            h2 {
                style: "font-size: 1.5rem; font-weight: 500; color: var(--neutral-dark); margin: 0 0 32px 0;",
                "{message}"
            }

            div {
                style: "display: flex; gap: 16px; justify-content: center;",

                button {
                    style: "padding: 12px 24px; background: var(--theme-primary); color: white; border: none; border-radius: 8px; font-weight: 500; cursor: pointer; min-width: 120px;",
                    onclick: move |_| on_rejoin.call(()),
                    "Rejoin call"
                }

                button {
                    style: "padding: 12px 24px; background: var(--neutral-light); color: var(--neutral-primary); border: none; border-radius: 8px; font-weight: 500; cursor: pointer; min-width: 120px;",
                    onclick: move |_| on_home.call(()),
                    "Go to homepage"
                }
            }
        }
    }
}
