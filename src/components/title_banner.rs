use dioxus::prelude::*;

#[component]
pub fn TitleBanner(title: String) -> Element {
    rsx! {
        div {
            style: "background: var(--theme-primary); color: var(--white); padding: 20px 0; text-align: center; font-weight: 600; font-size: 1.5rem; letter-spacing: 0.025em; margin-bottom: 24px;",
            "{title}"
        }
    }
}
