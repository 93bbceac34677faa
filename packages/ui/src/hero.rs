use dioxus::prelude::*;

use crate::button::{ButtonLink, ButtonSize, ButtonVariant};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "hero",
            div { class: "site_container hero_inner",
                h1 { {crate::t(lang, "hero.title")} }
                p { {crate::t(lang, "hero.subtitle")} }

                div { class: "cta_row",
                    ButtonLink { to: crate::CTA_PATH, variant: ButtonVariant::Gold, size: ButtonSize::Lg,
                        {crate::t(lang, "hero.cta.quote")}
                    }
                    ButtonLink { to: "/services", variant: ButtonVariant::Outline, size: ButtonSize::Lg,
                        {crate::t(lang, "hero.cta.services")}
                    }
                }
            }
        }
    }
}
