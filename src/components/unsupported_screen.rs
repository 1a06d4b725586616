use dioxus::prelude::*;

#[component]
pub fn UnsupportedScreen(help_url: String) -> Element {
    rsx! {
        div {
            a { href: "{help_url}", "Learn more" }
            " about browsers and platforms supported by the web calling sdk"
        }
    }
}
