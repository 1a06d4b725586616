use dioxus::prelude::*;

#[component]
pub fn CallErrorScreen(message: String, help_url: String) -> Element {
    rsx! {
        div {
            div { "{message}" }
            div {
                a { href: "{help_url}", "Learn more" }
                " about why this call has ended."
            }
        }
    }
}
