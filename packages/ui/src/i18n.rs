use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

const STORAGE_KEY: &str = "codam_lang";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Fr,
    En,
}

impl Lang {
    /// Order in which the language toggle shows the languages.
    pub const ALL: [Lang; 2] = [Lang::Fr, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    /// Button label in the language toggle.
    pub fn label(self) -> &'static str {
        match self {
            Lang::Fr => "FR",
            Lang::En => "EN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        // Only the primary subtag matters: "en-AU" and "fr_CA" are accepted too.
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "fr" => Some(Lang::Fr),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to French.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::Fr);
    use_context_provider(|| lang);

    // Best-effort: load from localStorage or browser language after mount.
    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"
            (function(){{
              try {{
                const saved = localStorage.getItem("{STORAGE_KEY}");
                if(saved && typeof saved === "string" && saved.length > 0) return saved;
              }} catch(e) {{}}
              try {{ return (navigator.language || "fr"); }} catch(e) {{}}
              return "fr";
            }})()
            "#
            );
            if let Ok(v) = document::eval(&js).await {
                if let Some(next) = v.as_str().and_then(Lang::from_code) {
                    debug!(lang = next.code(), "restored language preference");
                    lang.set(next);
                }
            }
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    warn!("missing I18nProvider context, using local Lang::Fr signal");
    use_signal(|| Lang::Fr)
}

/// Returns the language to switch to, or `None` when `requested` is already in effect.
pub fn lang_change(current: Lang, requested: Lang) -> Option<Lang> {
    (current != requested).then_some(requested)
}

/// Switch the shared language signal and remember the choice.
///
/// Selecting the current language leaves the signal untouched, so subscribers
/// do not re-render.
pub fn set_lang(mut current: Signal<Lang>, requested: Lang) {
    let Some(next) = lang_change(*current.peek(), requested) else {
        return;
    };
    current.set(next);
    debug!(lang = next.code(), "language switched");
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("{STORAGE_KEY}","{}"); }} catch(e) {{}} return ""; }})()"#,
            next.code()
        ))
        .await;
    });
}

/// Translate a key for a given language. Falls back to French if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Navigation
        (Lang::Fr, "nav.home") => "Accueil".to_string(),
        (Lang::En, "nav.home") => "Home".to_string(),
        (Lang::Fr, "nav.services") => "Services".to_string(),
        (Lang::En, "nav.services") => "Services".to_string(),
        (Lang::Fr, "nav.about") => "À propos".to_string(),
        (Lang::En, "nav.about") => "About".to_string(),
        (Lang::Fr, "nav.projects") => "Projets".to_string(),
        (Lang::En, "nav.projects") => "Projects".to_string(),
        (Lang::Fr, "nav.contact") => "Contact".to_string(),
        (Lang::En, "nav.contact") => "Contact".to_string(),
        (Lang::Fr, "nav.faq") => "FAQ".to_string(),
        (Lang::Fr, "nav.menu.open") => "Ouvrir le menu".to_string(),
        (Lang::En, "nav.menu.open") => "Open menu".to_string(),
        (Lang::Fr, "nav.menu.close") => "Fermer le menu".to_string(),
        (Lang::En, "nav.menu.close") => "Close menu".to_string(),
        (Lang::Fr, "lang.label") => "Langue".to_string(),
        (Lang::En, "lang.label") => "Language".to_string(),

        // Hero
        (Lang::Fr, "hero.title") => "Votre partenaire pour des projets réussis".to_string(),
        (Lang::En, "hero.title") => "Your partner for successful projects".to_string(),
        (Lang::Fr, "hero.subtitle") => "Conseil, études et accompagnement des entreprises et institutions au Bénin et dans la sous-région.".to_string(),
        (Lang::En, "hero.subtitle") => "Consulting, studies and support for companies and institutions in Benin and across the region.".to_string(),
        (Lang::Fr, "hero.cta.quote") => "Demander un devis".to_string(),
        (Lang::En, "hero.cta.quote") => "Request a quote".to_string(),
        (Lang::Fr, "hero.cta.services") => "Nos services".to_string(),
        (Lang::En, "hero.cta.services") => "Our services".to_string(),

        // Pages
        (Lang::Fr, "services.title") => "Nos services".to_string(),
        (Lang::En, "services.title") => "Our services".to_string(),
        (Lang::Fr, "services.intro") => "Études, conseil en gestion, formation et suivi de projets.".to_string(),
        (Lang::En, "services.intro") => "Studies, management consulting, training and project monitoring.".to_string(),
        (Lang::Fr, "about.title") => "À propos de nous".to_string(),
        (Lang::En, "about.title") => "About us".to_string(),
        (Lang::Fr, "about.intro") => "CODAM BENIN CONSULTING accompagne ses clients depuis Abomey-Calavi.".to_string(),
        (Lang::En, "about.intro") => "CODAM BENIN CONSULTING supports its clients from Abomey-Calavi.".to_string(),
        (Lang::Fr, "projects.title") => "Nos projets".to_string(),
        (Lang::En, "projects.title") => "Our projects".to_string(),
        (Lang::Fr, "projects.intro") => "Une sélection des missions menées pour nos partenaires.".to_string(),
        (Lang::En, "projects.intro") => "A selection of assignments delivered for our partners.".to_string(),
        (Lang::Fr, "contact.title") => "Contactez-nous".to_string(),
        (Lang::En, "contact.title") => "Contact us".to_string(),
        (Lang::Fr, "contact.intro") => "Parlez-nous de votre projet, nous revenons vers vous rapidement.".to_string(),
        (Lang::En, "contact.intro") => "Tell us about your project and we will get back to you shortly.".to_string(),
        (Lang::Fr, "contact.phone") => "Téléphone".to_string(),
        (Lang::En, "contact.phone") => "Phone".to_string(),
        (Lang::Fr, "contact.email") => "E-mail".to_string(),
        (Lang::En, "contact.email") => "Email".to_string(),
        (Lang::Fr, "contact.address") => "Adresse".to_string(),
        (Lang::En, "contact.address") => "Address".to_string(),
        (Lang::Fr, "faq.title") => "Questions fréquentes".to_string(),
        (Lang::En, "faq.title") => "Frequently asked questions".to_string(),
        (Lang::Fr, "faq.intro") => "Les réponses aux questions que nos clients nous posent le plus souvent.".to_string(),
        (Lang::En, "faq.intro") => "Answers to the questions our clients ask most often.".to_string(),
        (Lang::Fr, "not_found.title") => "Page introuvable".to_string(),
        (Lang::En, "not_found.title") => "Page not found".to_string(),
        (Lang::Fr, "not_found.back") => "Retour à l'accueil".to_string(),
        (Lang::En, "not_found.back") => "Back to home".to_string(),

        // Fallback: use French string if present, else show key.
        (Lang::En, k) => t(Lang::Fr, k),
        (Lang::Fr, _) => key.to_string(),
    }
}
