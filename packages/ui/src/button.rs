use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Gold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "primary",
        ButtonVariant::Outline => "outline",
        ButtonVariant::Gold => "gold",
    };
    match size {
        ButtonSize::Default => format!("btn {variant}"),
        ButtonSize::Sm => format!("btn {variant} sm"),
        ButtonSize::Lg => format!("btn {variant} lg"),
    }
}

/// Router link styled as a button.
#[component]
pub fn ButtonLink(
    #[props(into)] to: NavigationTarget,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    children: Element,
) -> Element {
    rsx! {
        Link { class: button_class(variant, size), to: to, {children} }
    }
}
