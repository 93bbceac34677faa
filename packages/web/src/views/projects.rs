use dioxus::prelude::*;

use super::page::PageIntro;

#[component]
pub fn Projects() -> Element {
    rsx! {
        PageIntro { title_key: "projects.title", intro_key: "projects.intro" }
    }
}
