use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let lang = ui::use_lang()();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "site_container page",
            h1 { {ui::t(lang, "not_found.title")} }
            p { class: "hint", "{path}" }
            ui::ButtonLink { to: "/", {ui::t(lang, "not_found.back")} }
        }
    }
}
