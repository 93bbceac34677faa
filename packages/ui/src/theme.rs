use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Site-wide palette, typography and button styles.
#[component]
pub fn SiteTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: THEME_CSS } }
}
