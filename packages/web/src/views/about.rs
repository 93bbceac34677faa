use dioxus::prelude::*;

use super::page::PageIntro;

#[component]
pub fn About() -> Element {
    rsx! {
        PageIntro { title_key: "about.title", intro_key: "about.intro" }
    }
}
