//! Motion - Transition Descriptors
//!
//! Every animated element is described by plain data: the style it mounts with,
//! the style it animates to, the style it leaves with, and the timing curve.
//! The view hands these to GPUI's animation support; the navigation state
//! machine never sees them.

use std::time::Duration;

/// Animatable style values of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleFrame {
    pub opacity: f32,
    /// Vertical offset in pixels (positive moves down)
    pub y: f32,
}

impl StyleFrame {
    pub const VISIBLE: StyleFrame = StyleFrame { opacity: 1.0, y: 0.0 };

    pub const fn new(opacity: f32, y: f32) -> Self {
        Self { opacity, y }
    }

    pub const fn faded() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Linear interpolation between two frames
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            y: from.y + (to.y - from.y) * t,
        }
    }
}

/// Timing curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS-style cubic-bezier(x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

/// The portfolio's signature curve: fast start, long soft landing
pub const EXPO_OUT: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

impl Easing {
    /// Apply the curve to normalized time (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_sample(t, x1, y1, x2, y2),
        }
    }
}

/// Solve x(s) = t with Newton-Raphson, then evaluate y(s)
fn cubic_bezier_sample(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let mut guess = t;
    for _ in 0..8 {
        let x = bezier_component(guess, x1, x2) - t;
        if x.abs() < 1e-4 {
            break;
        }
        let dx = bezier_derivative(guess, x1, x2);
        if dx.abs() < 1e-4 {
            break;
        }
        guess -= x / dx;
    }
    bezier_component(guess.clamp(0.0, 1.0), y1, y2)
}

fn bezier_component(s: f32, p1: f32, p2: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Enter/exit description of one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub initial: StyleFrame,
    pub animate: StyleFrame,
    /// `None` for elements that leave together with their parent
    pub exit: Option<StyleFrame>,
    pub duration: Duration,
    pub delay: Duration,
    pub exit_duration: Duration,
    pub easing: Easing,
}

impl TransitionSpec {
    const fn enter_only(initial: StyleFrame, duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            initial,
            animate: StyleFrame::VISIBLE,
            exit: None,
            duration: Duration::from_millis(duration_ms),
            delay: Duration::from_millis(delay_ms),
            exit_duration: Duration::ZERO,
            easing: EXPO_OUT,
        }
    }

    const fn with_exit(mut self, exit: StyleFrame, exit_ms: u64) -> Self {
        self.exit = Some(exit);
        self.exit_duration = Duration::from_millis(exit_ms);
        self
    }

    /// Same transition, entering `extra` later
    pub fn delayed_by(mut self, extra: Duration) -> Self {
        self.delay += extra;
        self
    }

    /// Delay plus duration
    pub fn enter_total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Eased enter progress for normalized time over [`Self::enter_total`].
    ///
    /// Stays at 0 until the delay has elapsed.
    pub fn enter_progress(&self, t: f32) -> f32 {
        let total = self.enter_total().as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = t.clamp(0.0, 1.0) * total;
        let delay = self.delay.as_secs_f32();
        if elapsed <= delay {
            return 0.0;
        }
        let duration = self.duration.as_secs_f32();
        if duration <= 0.0 {
            return 1.0;
        }
        self.easing.apply((elapsed - delay) / duration)
    }

    /// Style while entering, for eased progress `p`
    pub fn enter_frame(&self, p: f32) -> StyleFrame {
        StyleFrame::lerp(self.initial, self.animate, p)
    }

    /// Style while exiting, for linear progress `t` over the exit duration
    pub fn exit_frame(&self, t: f32) -> StyleFrame {
        match self.exit {
            Some(exit) => StyleFrame::lerp(self.animate, exit, self.easing.apply(t)),
            None => self.animate,
        }
    }
}

/// Hero container
pub const HERO: TransitionSpec = TransitionSpec::enter_only(StyleFrame::new(0.0, 20.0), 600, 0)
    .with_exit(StyleFrame::new(0.0, 10.0), 600);

/// Name heading inside the hero
pub const HERO_TITLE: TransitionSpec =
    TransitionSpec::enter_only(StyleFrame::new(0.0, -20.0), 800, 0);

/// Quote and attribution
pub const HERO_QUOTE: TransitionSpec = TransitionSpec::enter_only(StyleFrame::faded(), 900, 450);

/// Avatar image
pub const AVATAR: TransitionSpec = TransitionSpec::enter_only(StyleFrame::faded(), 800, 200);

/// About / Projects / Achievements content
pub const SECTION: TransitionSpec = TransitionSpec::enter_only(StyleFrame::new(0.0, 20.0), 550, 120)
    .with_exit(StyleFrame::new(0.0, 10.0), 550);

/// Nav-button row
pub const NAV_CONTAINER: TransitionSpec =
    TransitionSpec::enter_only(StyleFrame::new(0.0, 24.0), 550, 0)
        .with_exit(StyleFrame::new(0.0, 16.0), 350);

/// One nav button; staggered with [`nav_item`]
pub const NAV_ITEM: TransitionSpec = TransitionSpec::enter_only(StyleFrame::new(0.0, 10.0), 450, 0)
    .with_exit(StyleFrame::new(0.0, 10.0), 280);

/// Gap between consecutive nav buttons
pub const NAV_STAGGER: Duration = Duration::from_millis(60);

/// Back control
pub const BACK_CONTROL: TransitionSpec =
    TransitionSpec::enter_only(StyleFrame::new(0.0, 10.0), 450, 80)
        .with_exit(StyleFrame::new(0.0, 10.0), 450);

/// Nav button `index`: children start once the container has entered, then stagger
pub fn nav_item(index: usize) -> TransitionSpec {
    NAV_ITEM.delayed_by(NAV_CONTAINER.enter_total() + NAV_STAGGER * index as u32)
}
