use dioxus::prelude::*;

use super::page::PageIntro;

#[component]
pub fn Contact() -> Element {
    let lang = ui::use_lang()();
    let info = ui::CODAM_CONTACT;

    rsx! {
        PageIntro { title_key: "contact.title", intro_key: "contact.intro",
            dl { class: "contact_details",
                dt { {ui::t(lang, "contact.phone")} }
                dd { a { href: info.phone_href(), "{info.phone}" } }
                dt { {ui::t(lang, "contact.email")} }
                dd { a { href: info.email_href(), "{info.email}" } }
                dt { {ui::t(lang, "contact.address")} }
                dd { "{info.address}" }
            }
        }
    }
}
