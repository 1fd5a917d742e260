//! Portfolio Controller
//!
//! Drives section switching. Each transition's deferred second phase runs as a
//! GPUI task stored on the controller, so dropping the controller (or the task)
//! cancels it, and a task that outlives the entity finds nothing to update.

use std::sync::Arc;

use gpui::{Context, EventEmitter, Task};
use tracing::{debug, info, warn};

use crate::app::navigation::Section;
use crate::domain::avatar::{AvatarSource, AvatarState};
use crate::domain::content::{ContentDescription, PortfolioRenderer, SectionRenderer};
use crate::services::{FsImageLoader, ImageLoader};
use crate::state::{NavigationMachine, NavigationState, PortfolioConfig, Scheduled};

/// Events emitted to subscribed views
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationEvent {
    /// The navigation state changed
    Changed(NavigationState),
    /// The avatar switched to its fallback image
    AvatarFallback,
}

/// Owns the navigation state machine, the section renderer and the avatar state
pub struct ViewController {
    machine: NavigationMachine,
    renderer: PortfolioRenderer,
    avatar: AvatarState,
    loader: Arc<dyn ImageLoader>,
    /// Timer for the pending deferred step; dropping it cancels the step
    pending_task: Option<Task<()>>,
}

impl EventEmitter<NavigationEvent> for ViewController {}

impl ViewController {
    pub fn new(config: &PortfolioConfig, _cx: &mut Context<Self>) -> Self {
        Self::with_loader(config, Arc::new(FsImageLoader))
    }

    /// Create a controller with a custom image loader
    pub fn with_loader(config: &PortfolioConfig, loader: Arc<dyn ImageLoader>) -> Self {
        let mut machine = NavigationMachine::new(config.transition_timing());
        machine.subscribe(|state| {
            debug!(
                section = ?state.active_section,
                nav_visible = state.nav_visible,
                transitioning = state.transitioning,
                "Navigation state changed"
            );
        });

        Self {
            machine,
            renderer: PortfolioRenderer::new(config.avatar_ref()),
            avatar: AvatarState::new(),
            loader,
            pending_task: None,
        }
    }

    // ==================== Getters ====================

    pub fn state(&self) -> NavigationState {
        self.machine.state()
    }

    /// Content of the active section
    pub fn content(&self) -> ContentDescription {
        self.renderer.render(self.machine.state().active_section)
    }

    /// Content of any section, used while an outgoing section plays its exit
    pub fn content_for(&self, section: Section) -> ContentDescription {
        self.renderer.render(section)
    }

    pub fn avatar_source(&self) -> AvatarSource {
        self.avatar.source(self.renderer.avatar())
    }

    // ==================== Navigation ====================

    /// Begin a transition to `target`; ignored while another is running
    pub fn navigate_to(&mut self, target: Section, cx: &mut Context<Self>) {
        if let Some(scheduled) = self.machine.navigate_to(target) {
            info!(?target, "Navigating to section");
            self.schedule(scheduled, cx);
            self.changed(cx);
        }
    }

    /// Return to the hero; ignored while a transition is running
    pub fn navigate_back(&mut self, cx: &mut Context<Self>) {
        if let Some(scheduled) = self.machine.navigate_back() {
            info!("Navigating back to home");
            self.schedule(scheduled, cx);
            self.changed(cx);
        }
    }

    fn schedule(&mut self, scheduled: Scheduled, cx: &mut Context<Self>) {
        debug!(ticket = scheduled.ticket, step = ?scheduled.step, delay = ?scheduled.delay, "Deferred step scheduled");

        let task = cx.spawn(async move |this, cx| {
            cx.background_executor().timer(scheduled.delay).await;
            this.update(cx, |controller, cx| {
                controller.complete(scheduled.ticket, cx);
            })
            .ok();
        });
        self.pending_task = Some(task);
    }

    fn complete(&mut self, ticket: u64, cx: &mut Context<Self>) {
        if self.machine.complete(ticket) {
            // Called from inside this task, so let it run to completion
            if let Some(task) = self.pending_task.take() {
                task.detach();
            }
            self.changed(cx);
        }
    }

    fn changed(&mut self, cx: &mut Context<Self>) {
        cx.emit(NavigationEvent::Changed(self.machine.state()));
        cx.notify();
    }

    // ==================== Avatar ====================

    /// Try the primary avatar in the background; fall back on failure
    pub fn load_avatar(&mut self, cx: &mut Context<Self>) {
        let loader = self.loader.clone();
        let path = self.renderer.avatar().primary.clone();

        cx.spawn(async move |this, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { loader.load(&path) })
                .await;

            if let Err(e) = result {
                warn!(error = %e, "Avatar failed to load, using fallback");
                this.update(cx, |controller, cx| controller.report_avatar_failure(cx))
                    .ok();
            }
        })
        .detach();
    }

    /// Switch to the fallback avatar. Repeated reports do nothing.
    pub fn report_avatar_failure(&mut self, cx: &mut Context<Self>) {
        if self.avatar.mark_failed() {
            cx.emit(NavigationEvent::AvatarFallback);
            cx.notify();
        }
    }

    // ==================== Teardown ====================

    /// Cancel the pending step and stop accepting navigation
    pub fn dispose(&mut self) {
        self.pending_task = None;
        if let Some(cancelled) = self.machine.dispose() {
            debug!(ticket = cancelled.ticket, "Pending step cancelled on dispose");
        }
    }
}

impl Drop for ViewController {
    fn drop(&mut self) {
        self.dispose();
    }
}
