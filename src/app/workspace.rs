//! Workspace - Root View with Keyboard Routing and Footer
//!
//! The workspace is the window's root: it owns focus, turns keyboard actions
//! into controller calls, and lays the portfolio page above the footer.

use gpui::{
    div, prelude::*, px, App, Context, Entity, FocusHandle, Focusable, IntoElement,
    ParentElement, Render, Styled, Window,
};
use gpui_component::{h_flex, v_flex};
use tracing::debug;

use crate::features::portfolio::controller::ViewController;
use crate::features::portfolio::page::PortfolioPage;
use crate::helpers::{NavAction, NavRequest, PORTFOLIO_CONTEXT};
use crate::i18n::tr_current;
use crate::theme::colors::PortfolioColors;
use crate::theme::typography::Typography;

/// Main workspace containing the application layout
pub struct Workspace {
    controller: Entity<ViewController>,
    page: Entity<PortfolioPage>,
    focus_handle: FocusHandle,
}

impl Workspace {
    pub fn new(controller: Entity<ViewController>, cx: &mut Context<Self>) -> Self {
        let page = cx.new(|cx| PortfolioPage::new(controller.clone(), cx));

        Self {
            controller,
            page,
            focus_handle: cx.focus_handle(),
        }
    }

    fn handle_nav(&mut self, action: &NavAction, _window: &mut Window, cx: &mut Context<Self>) {
        let active = self.controller.read(cx).state().active_section;

        match action.request(active) {
            Some(NavRequest::To(section)) => self
                .controller
                .update(cx, |controller, cx| controller.navigate_to(section, cx)),
            Some(NavRequest::Back) => self
                .controller
                .update(cx, |controller, cx| controller.navigate_back(cx)),
            None => debug!(?action, ?active, "Shortcut has no effect here"),
        }
    }

    fn render_footer(&self) -> impl IntoElement {
        h_flex()
            .w_full()
            .justify_center()
            .py_6()
            .text_size(px(Typography::TEXT_SM))
            .text_color(PortfolioColors::text_muted())
            .child(tr_current("footer.credit"))
    }
}

impl Focusable for Workspace {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .id("workspace")
            .key_context(PORTFOLIO_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_nav))
            .size_full()
            .bg(PortfolioColors::background())
            .font_family(Typography::FONT_FAMILY)
            .text_color(PortfolioColors::text_primary())
            .child(div().flex_1().w_full().child(self.page.clone()))
            .child(self.render_footer())
    }
}
