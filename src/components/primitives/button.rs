//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::PortfolioColors;
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Nav-bar button on the dark surface
    #[default]
    Nav,
    /// Nav-bar button for the section currently shown
    Active,
    /// Bordered compact button (Back)
    Outline,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Nav,
            disabled: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set whether the button ignores clicks
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a nav-bar button, highlighted when `active`
    pub fn nav(id: impl Into<ElementId>, label: impl Into<SharedString>, active: bool) -> Self {
        let variant = if active {
            ButtonVariant::Active
        } else {
            ButtonVariant::Nav
        };
        Self::new(id, label).variant(variant)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }
}

/// Resolved look of a button in one state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub bg: Rgba,
    pub text: Rgba,
    /// `None` when the button does not react to hover or press
    pub hover_bg: Option<Rgba>,
    pub opacity: f32,
}

/// Opacity while the pointer is held down
pub const PRESSED_OPACITY: f32 = 0.85;

/// Opacity of a disabled button
pub const DISABLED_OPACITY: f32 = 0.5;

impl ButtonVariant {
    pub fn style(self, disabled: bool) -> ButtonStyle {
        let (bg, text, hover_bg) = match self {
            ButtonVariant::Nav | ButtonVariant::Outline => (
                PortfolioColors::surface(),
                PortfolioColors::text_primary(),
                PortfolioColors::surface_hover(),
            ),
            ButtonVariant::Active => (
                PortfolioColors::accent(),
                PortfolioColors::text_on_accent(),
                PortfolioColors::accent_hover(),
            ),
        };

        ButtonStyle {
            bg,
            text,
            hover_bg: (!disabled).then_some(hover_bg),
            opacity: if disabled { DISABLED_OPACITY } else { 1.0 },
        }
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = self.variant.style(self.disabled);

        let (padding_x, padding_y) = match self.variant {
            ButtonVariant::Nav | ButtonVariant::Active => (px(36.0), px(14.0)),
            ButtonVariant::Outline => (px(24.0), px(10.0)),
        };

        let mut element = div()
            .id(self.id)
            .px(padding_x)
            .py(padding_y)
            .bg(style.bg)
            .text_color(style.text)
            .text_size(px(Typography::TEXT_BASE))
            .rounded_xl()
            .shadow_md()
            .opacity(style.opacity)
            .child(self.label);

        if self.variant == ButtonVariant::Outline {
            element = element
                .rounded_lg()
                .border_1()
                .border_color(PortfolioColors::border());
        }

        if let Some(hover_bg) = style.hover_bg {
            element = element
                .cursor_pointer()
                .hover(|s| s.bg(hover_bg).shadow_lg())
                .active(|s| s.opacity(PRESSED_OPACITY));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_buttons_react() {
        for variant in [ButtonVariant::Nav, ButtonVariant::Active, ButtonVariant::Outline] {
            let style = variant.style(false);
            assert!(style.hover_bg.is_some());
            assert_eq!(style.opacity, 1.0);
        }
    }

    #[test]
    fn test_disabled_buttons_are_dimmed_and_inert() {
        for variant in [ButtonVariant::Nav, ButtonVariant::Active, ButtonVariant::Outline] {
            let style = variant.style(true);
            assert_eq!(style.hover_bg, None);
            assert_eq!(style.opacity, DISABLED_OPACITY);
        }
    }

    #[test]
    fn test_active_variant_uses_accent() {
        assert_eq!(ButtonVariant::Active.style(false).bg, PortfolioColors::accent());
        assert_eq!(ButtonVariant::Nav.style(false).bg, PortfolioColors::surface());
    }
}
