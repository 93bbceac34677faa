use dioxus::prelude::*;

/// Title and intro paragraph shared by the content pages, both looked up by
/// translation key.
#[component]
pub fn PageIntro(title_key: String, intro_key: String, children: Element) -> Element {
    let lang = ui::use_lang()();
    rsx! {
        div { class: "site_container page",
            h1 { {ui::t(lang, &title_key)} }
            p { class: "hint", {ui::t(lang, &intro_key)} }
            {children}
        }
    }
}
