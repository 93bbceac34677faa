use dioxus::prelude::*;

use crate::icons::{MailIcon, PhoneIcon};

/// Static contact details shown in the header strip and on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

pub const CODAM_CONTACT: ContactInfo = ContactInfo {
    phone: "+229 01 96 75 76 39",
    email: "contact@codambenin.com",
    address: "F82W+4P Abomey Calavi, Atlantique Benin",
};

impl ContactInfo {
    /// `tel:` URI with the display spacing removed.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Top strip of the header: phone and email on the left, address on the right
/// (the address is hidden below the tablet breakpoint).
#[component]
pub fn ContactStrip() -> Element {
    let info = CODAM_CONTACT;

    rsx! {
        div { class: "contact_strip",
            div { class: "site_container contact_strip_inner",
                div { class: "contact_items",
                    a { class: "contact_item", href: info.phone_href(),
                        PhoneIcon { class: "icon icon_xs" }
                        span { "{info.phone}" }
                    }
                    a { class: "contact_item", href: info.email_href(),
                        MailIcon { class: "icon icon_xs" }
                        span { "{info.email}" }
                    }
                }
                div { class: "contact_address",
                    span { "{info.address}" }
                }
            }
        }
    }
}
