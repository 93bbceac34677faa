use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::button::{ButtonLink, ButtonSize, ButtonVariant};
use crate::contact::ContactStrip;
use crate::i18n::{set_lang, t, use_lang, Lang};
use crate::icons::{CloseIcon, MenuIcon};

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const LOGO: Asset = asset!("/assets/codam-logo.svg");

/// Navigation entries as (translation key, path), in display order.
pub const NAV_ROUTES: [(&str, &str); 6] = [
    ("nav.home", "/"),
    ("nav.services", "/services"),
    ("nav.about", "/about"),
    ("nav.projects", "/projects"),
    ("nav.contact", "/contact"),
    ("nav.faq", "/faq"),
];

/// Where the quote button leads.
pub const CTA_PATH: &str = "/contact";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: String,
    pub path: &'static str,
}

/// Build the navigation entries with labels in `lang`.
pub fn navigation(lang: Lang) -> Vec<NavigationItem> {
    NAV_ROUTES
        .iter()
        .map(|&(key, path)| NavigationItem {
            label: t(lang, key),
            path,
        })
        .collect()
}

pub fn is_active(current_path: &str, path: &str) -> bool {
    current_path == path
}

fn desktop_link_class(active: bool) -> &'static str {
    if active {
        "nav_link active"
    } else {
        "nav_link"
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "mobile_link active"
    } else {
        "mobile_link"
    }
}

/// Menu state after a click on the menu button.
fn toggled(open: bool) -> bool {
    !open
}

/// Menu state after following a link from the mobile panel.
fn after_mobile_link(_open: bool) -> bool {
    false
}

/// Where a language toggle is rendered; only the hover treatment differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleVariant {
    Desktop,
    Mobile,
}

fn lang_button_class(selected: bool, variant: ToggleVariant) -> &'static str {
    match (selected, variant) {
        (true, _) => "lang_btn selected",
        (false, ToggleVariant::Desktop) => "lang_btn hoverable",
        (false, ToggleVariant::Mobile) => "lang_btn",
    }
}

/// FR / EN switch bound to the shared language signal.
#[component]
pub fn LanguageToggle(variant: ToggleVariant) -> Element {
    let lang_sig = use_lang();
    let current = lang_sig();

    rsx! {
        div { class: "lang_toggle", role: "group", "aria-label": t(current, "lang.label"),
            for code in Lang::ALL {
                button {
                    key: "{code:?}",
                    class: lang_button_class(code == current, variant),
                    "data-lang": code.code(),
                    "aria-pressed": (code == current).to_string(),
                    onclick: move |_| set_lang(lang_sig, code),
                    {code.label()}
                }
            }
        }
    }
}

#[component]
fn QuoteButton() -> Element {
    let lang = use_lang()();
    rsx! {
        ButtonLink { to: CTA_PATH, variant: ButtonVariant::Gold, size: ButtonSize::Sm,
            {t(lang, "hero.cta.quote")}
        }
    }
}

/// Site header: contact strip, brand, navigation, language toggle, quote
/// button and the collapsible mobile menu.
///
/// `current_path` is the router's current path; the matching link is
/// highlighted.
#[component]
pub fn Header(current_path: String) -> Element {
    let lang = use_lang()();
    let mut menu_open = use_signal(|| false);

    // Effects only run on the client, so this flips once hydration is done.
    let mut ready = use_signal(|| false);
    use_effect(move || ready.set(true));

    let items = navigation(lang);
    let toggle_label = if menu_open() {
        t(lang, "nav.menu.close")
    } else {
        t(lang, "nav.menu.open")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header { class: "site_header", "data-ready": "{ready}",
            ContactStrip {}

            div { class: "site_container",
                div { class: "main_bar",
                    Link { class: "brand", to: "/",
                        img { class: "brand_logo", src: LOGO, alt: "CODAM BENIN CONSULTING" }
                        div { class: "brand_text",
                            span { class: "brand_name", "CODAM BENIN" }
                            span { class: "brand_tagline", "CONSULTING" }
                        }
                    }

                    nav { class: "desktop_nav",
                        for item in items.iter() {
                            Link {
                                key: "{item.path}",
                                class: desktop_link_class(is_active(&current_path, item.path)),
                                to: item.path,
                                "{item.label}"
                            }
                        }
                    }

                    div { class: "desktop_actions",
                        LanguageToggle { variant: ToggleVariant::Desktop }
                        QuoteButton {}
                    }

                    button {
                        class: "menu_toggle",
                        "aria-label": toggle_label,
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| {
                            let next = toggled(menu_open());
                            menu_open.set(next);
                            debug!(open = next, "mobile menu toggled");
                        },
                        if menu_open() {
                            CloseIcon { class: "icon icon_md" }
                        } else {
                            MenuIcon { class: "icon icon_md" }
                        }
                    }
                }

                if menu_open() {
                    div { class: "mobile_nav",
                        nav { class: "mobile_nav_links",
                            for item in items.iter() {
                                Link {
                                    key: "{item.path}",
                                    class: mobile_link_class(is_active(&current_path, item.path)),
                                    to: item.path,
                                    onclick: move |_| {
                                        let next = after_mobile_link(menu_open());
                                        menu_open.set(next);
                                    },
                                    "{item.label}"
                                }
                            }
                            div { class: "mobile_actions",
                                LanguageToggle { variant: ToggleVariant::Mobile }
                                QuoteButton {}
                            }
                        }
                    }
                }
            }
        }
    }
}
