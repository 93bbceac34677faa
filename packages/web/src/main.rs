use dioxus::prelude::*;

use views::{About, Contact, Faq, Home, NotFound, Projects, Services};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/services")]
    Services {},
    #[route("/about")]
    About {},
    #[route("/projects")]
    Projects {},
    #[route("/contact")]
    Contact {},
    #[route("/faq")]
    Faq {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let config = config::RuntimeConfig::from_env();
    eprintln!("startup: IP={} PORT={}", config.ip, config.port);
    if !config.port_is_valid() {
        eprintln!("startup: WARNING PORT={} is not a valid port number", config.port);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::I18nProvider {
            Router::<Route> {}
        }
    }
}

/// Wraps every page in the shared `Header`, handing it the path of the
/// current web `Route`.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        ui::Header { current_path: route.to_string() }
        main { class: "site_main route_view", Outlet::<Route> {} }
    }
}
