use dioxus::prelude::*;

use super::page::PageIntro;

#[component]
pub fn Faq() -> Element {
    rsx! {
        PageIntro { title_key: "faq.title", intro_key: "faq.intro" }
    }
}
