//! Portfolio Page
//!
//! Draws the controller's state: the active section's content, the nav-button
//! row while on Home, and the Back control everywhere else. Outgoing elements
//! finish their exit before incoming ones mount (see [`Presence`]).

use std::time::{Duration, Instant};

use gpui::{
    div, img, prelude::*, px, relative, Animation, AnimationExt, AnyElement, App, ClickEvent,
    Context, Div, ElementId, Entity, FontWeight, HighlightStyle, IntoElement, ParentElement,
    Render, SharedString, Styled, StyledText, Window,
};
use tracing::info;

use crate::app::navigation::Section;
use crate::components::presence::{Presence, PresenceFrame};
use crate::components::primitives::button::{Button, PRESSED_OPACITY};
use crate::constants::{AVATAR_SIZE, PROJECT_CARD_WIDTH, TEXT_BLOCK_MAX_WIDTH};
use crate::domain::avatar::AvatarSource;
use crate::domain::content::{ContentDescription, HeroContent, ProjectCard, TextBlock};
use crate::features::portfolio::controller::{NavigationEvent, ViewController};
use crate::state::NavigationState;
use crate::i18n::tr_current;
use crate::theme::colors::PortfolioColors;
use crate::theme::motion::{self, StyleFrame, TransitionSpec};
use crate::theme::typography::Typography;

/// Portfolio page component
pub struct PortfolioPage {
    controller: Entity<ViewController>,
    content: Presence<Section>,
    nav: Presence<()>,
    back: Presence<()>,
}

fn content_spec(section: Section) -> TransitionSpec {
    if section.is_home() {
        motion::HERO
    } else {
        motion::SECTION
    }
}

fn content_exit(section: Section) -> Duration {
    content_spec(section).exit_duration
}

fn nav_exit(_: ()) -> Duration {
    motion::NAV_CONTAINER.exit_duration
}

fn back_exit(_: ()) -> Duration {
    motion::BACK_CONTROL.exit_duration
}

/// Element id that is unique per mount
fn keyed(name: impl Into<SharedString>, generation: u64) -> ElementId {
    ElementId::NamedInteger(name.into(), generation)
}

fn apply_frame<E: Styled>(element: E, frame: StyleFrame) -> E {
    element.opacity(frame.opacity).relative().top(px(frame.y))
}

/// Play the enter transition once, when the element first mounts under `id`
fn animate_in<E>(element: E, id: ElementId, spec: TransitionSpec) -> AnyElement
where
    E: IntoElement + Styled + 'static,
{
    element
        .with_animation(
            id,
            Animation::new(spec.enter_total()).with_easing(move |t| spec.enter_progress(t)),
            move |element, progress| apply_frame(element, spec.enter_frame(progress)),
        )
        .into_any_element()
}

impl PortfolioPage {
    pub fn new(controller: Entity<ViewController>, cx: &mut Context<Self>) -> Self {
        // Re-render on every controller change
        cx.observe(&controller, |_this, _, cx| cx.notify()).detach();

        cx.subscribe(&controller, |_this, _, event: &NavigationEvent, _cx| {
            if let NavigationEvent::AvatarFallback = event {
                info!("Hero avatar switched to fallback image");
            }
        })
        .detach();

        let state = controller.read(cx).state();

        Self {
            controller,
            content: Presence::new(Some(state.active_section), content_exit),
            nav: Presence::new(state.shows_nav_bar().then_some(()), nav_exit),
            back: Presence::new(state.shows_back().then_some(()), back_exit),
        }
    }

    fn render_content(&self, frame: PresenceFrame<Section>, cx: &App) -> AnyElement {
        let controller = self.controller.read(cx);

        match frame {
            PresenceFrame::Empty => div().into_any_element(),
            PresenceFrame::Shown { key, generation } => {
                let body = render_description(
                    controller.content_for(key),
                    controller.avatar_source(),
                    Some(generation),
                );
                animate_in(body, keyed(key.element_key(), generation), content_spec(key))
            }
            PresenceFrame::Exiting { key, progress, .. } => {
                let body = render_description(
                    controller.content_for(key),
                    controller.avatar_source(),
                    None,
                );
                apply_frame(body, content_spec(key).exit_frame(progress)).into_any_element()
            }
        }
    }

    fn render_nav(
        &self,
        frame: PresenceFrame<()>,
        state: NavigationState,
        cx: &mut Context<Self>,
    ) -> Option<AnyElement> {
        let (generation, exiting) = match frame {
            PresenceFrame::Empty => return None,
            PresenceFrame::Shown { generation, .. } => (generation, None),
            PresenceFrame::Exiting { generation, progress, .. } => (generation, Some(progress)),
        };

        let buttons = Section::nav_order().iter().enumerate().map(|(index, &section)| {
            let button = Button::nav(
                ("nav-button", index),
                tr_current(section.label_key()),
                section == state.active_section,
            )
            .disabled(state.transitioning)
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller
                    .update(cx, |controller, cx| controller.navigate_to(section, cx));
            }));
            let item = div().child(button);

            match exiting {
                Some(_) => item.into_any_element(),
                None => animate_in(
                    item,
                    keyed(format!("nav-item-{}", section.element_key()), generation),
                    motion::nav_item(index),
                ),
            }
        });

        let bar = div()
            .flex()
            .flex_row()
            .flex_wrap()
            .justify_center()
            .gap_5()
            .mt_12()
            .children(buttons);

        Some(match exiting {
            Some(progress) => apply_frame(bar, motion::NAV_CONTAINER.exit_frame(progress))
                .into_any_element(),
            None => animate_in(bar, keyed("nav-bar", generation), motion::NAV_CONTAINER),
        })
    }

    fn render_back(
        &self,
        frame: PresenceFrame<()>,
        state: NavigationState,
        cx: &mut Context<Self>,
    ) -> Option<AnyElement> {
        let (generation, exiting) = match frame {
            PresenceFrame::Empty => return None,
            PresenceFrame::Shown { generation, .. } => (generation, None),
            PresenceFrame::Exiting { generation, progress, .. } => (generation, Some(progress)),
        };

        let button = Button::outline("back-button", tr_current("nav.back"))
            .disabled(state.transitioning)
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.controller
                    .update(cx, |controller, cx| controller.navigate_back(cx));
            }));
        let control = div().mt_10().child(button);

        Some(match exiting {
            Some(progress) => apply_frame(control, motion::BACK_CONTROL.exit_frame(progress))
                .into_any_element(),
            None => animate_in(control, keyed("back-control", generation), motion::BACK_CONTROL),
        })
    }
}

impl Render for PortfolioPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let now = Instant::now();
        let state = self.controller.read(cx).state();

        let content_frame = self.content.update(Some(state.active_section), now);
        let nav_frame = self.nav.update(state.shows_nav_bar().then_some(()), now);
        let back_frame = self.back.update(state.shows_back().then_some(()), now);

        // Exits are driven from here rather than by GPUI animations, so keep frames coming
        if self.content.is_exiting() || self.nav.is_exiting() || self.back.is_exiting() {
            window.request_animation_frame();
        }

        let content = self.render_content(content_frame, cx);
        let nav = self.render_nav(nav_frame, state, cx);
        let back = self.render_back(back_frame, state, cx);

        div()
            .id("portfolio-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .px_6()
            .child(content)
            .children(nav)
            .children(back)
    }
}

/// Build the element for a content description.
///
/// `generation` is set while the content is mounted and entering; nested
/// elements then play their own enter transitions. Exiting content is drawn
/// static and faded as a whole.
fn render_description(
    description: ContentDescription,
    avatar: AvatarSource,
    generation: Option<u64>,
) -> Div {
    match description {
        ContentDescription::Hero(hero) => render_hero(&hero, avatar, generation),
        ContentDescription::TextBlock(block) => render_text_block(block),
        ContentDescription::CardGrid(cards) => render_card_grid(&cards),
    }
}

fn render_hero(hero: &HeroContent, avatar: AvatarSource, generation: Option<u64>) -> Div {
    let title = div()
        .text_size(px(Typography::TEXT_HERO))
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(PortfolioColors::text_primary())
        .child(hero.title);

    let quote = div()
        .flex()
        .flex_col()
        .items_center()
        .gap_2()
        .child(
            div()
                .text_size(px(Typography::TEXT_2XL))
                .italic()
                .text_color(PortfolioColors::text_secondary())
                .child(format!("“{}”", hero.quote)),
        )
        .child(
            div()
                .text_size(px(Typography::TEXT_SM))
                .text_color(PortfolioColors::text_muted())
                .child(format!("— {}", hero.attribution)),
        );

    let image = match avatar {
        AvatarSource::Primary(path) => img(path),
        AvatarSource::Fallback(asset) => img(asset),
    }
    .size_full()
    .rounded_full();

    let (title, quote, image) = match generation {
        Some(generation) => (
            animate_in(title, keyed("hero-title", generation), motion::HERO_TITLE),
            animate_in(quote, keyed("hero-quote", generation), motion::HERO_QUOTE),
            animate_in(image, keyed("hero-avatar", generation), motion::AVATAR),
        ),
        None => (
            title.into_any_element(),
            quote.into_any_element(),
            image.into_any_element(),
        ),
    };

    div()
        .flex()
        .flex_col()
        .items_center()
        .gap_12()
        .child(title)
        .child(quote)
        .child(
            div()
                .id("hero-avatar-frame")
                .size(px(AVATAR_SIZE))
                .rounded_full()
                .overflow_hidden()
                .bg(PortfolioColors::surface())
                .border_1()
                .border_color(PortfolioColors::border())
                .shadow_2xl()
                .hover(|s| s.border_color(PortfolioColors::text_muted()))
                .child(image),
        )
}

fn render_text_block(block: TextBlock) -> Div {
    let emphasis = block.emphasis_range().map(|range| {
        (
            range,
            HighlightStyle {
                color: Some(PortfolioColors::text_primary().into()),
                font_weight: Some(FontWeight::MEDIUM),
                ..Default::default()
            },
        )
    });

    div()
        .max_w(px(TEXT_BLOCK_MAX_WIDTH))
        .text_size(px(Typography::TEXT_XL))
        .line_height(relative(Typography::LEADING_RELAXED))
        .text_color(PortfolioColors::text_secondary())
        .child(StyledText::new(block.body).with_highlights(emphasis))
}

fn render_card_grid(cards: &[ProjectCard]) -> Div {
    div()
        .flex()
        .flex_row()
        .flex_wrap()
        .justify_center()
        .gap_8()
        .mt_8()
        .children(cards.iter().enumerate().map(|(index, card)| {
            div()
                .id(("project-card", index))
                .w(px(PROJECT_CARD_WIDTH))
                .p_6()
                .bg(PortfolioColors::surface())
                .rounded_2xl()
                .border_1()
                .border_color(PortfolioColors::border())
                .shadow_md()
                .hover(|s| {
                    s.bg(PortfolioColors::surface_hover())
                        .border_color(PortfolioColors::text_muted())
                        .shadow_lg()
                })
                .active(|s| s.opacity(PRESSED_OPACITY))
                .child(
                    div()
                        .mb_2()
                        .text_size(px(Typography::TEXT_2XL))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(PortfolioColors::text_primary())
                        .child(card.title),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_BASE))
                        .text_color(PortfolioColors::text_secondary())
                        .child(card.description),
                )
        }))
}
