use dioxus::prelude::*;

use super::page::PageIntro;

#[component]
pub fn Services() -> Element {
    rsx! {
        PageIntro { title_key: "services.title", intro_key: "services.intro" }
    }
}
