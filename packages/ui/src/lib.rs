//! This crate contains all shared UI for the site.

mod hero;
pub use hero::Hero;

mod header;
pub use header::{
    is_active, navigation, Header, LanguageToggle, NavigationItem, ToggleVariant, CTA_PATH,
    NAV_ROUTES,
};

mod button;
pub use button::{button_class, ButtonLink, ButtonSize, ButtonVariant};

mod contact;
pub use contact::{ContactInfo, ContactStrip, CODAM_CONTACT};

mod icons;
pub use icons::{CloseIcon, MailIcon, MenuIcon, PhoneIcon};

mod theme;
pub use theme::SiteTheme;

mod i18n;
pub use i18n::{lang_change, set_lang, t, use_lang, I18nProvider, Lang};
