//! NavigationState - Guarded Two-Phase Section Transitions
//!
//! The machine owns the single [`NavigationState`] and mutates it only through
//! `navigate_to`, `navigate_back` and the completion of their deferred second
//! phase. It never sleeps: each transition returns a [`Scheduled`] step that the
//! host runs after `delay` by calling [`NavigationMachine::complete`] with the
//! step's ticket. Only the ticket occupying the pending slot may complete, so a
//! cancelled or stale timer firing late does nothing.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::app::navigation::Section;
use crate::constants::{CONTENT_EXIT_DELAY_MS, NAV_EXIT_DELAY_MS};

/// Observable navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: Section,
    /// Only ever true while `active_section` is Home
    pub nav_visible: bool,
    /// Input gate; no transition may start while set
    pub transitioning: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: Section::Home,
            nav_visible: true,
            transitioning: false,
        }
    }
}

impl NavigationState {
    /// Whether the nav-button row is mounted
    pub fn shows_nav_bar(&self) -> bool {
        self.active_section.is_home() && self.nav_visible
    }

    /// Whether the persistent Back control is mounted
    pub fn shows_back(&self) -> bool {
        !self.active_section.is_home()
    }
}

/// Fixed delays of the two deferred phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    /// D1: nav-bar exit before the target section is revealed
    pub nav_exit: Duration,
    /// D2: section exit before the nav bar returns
    pub content_exit: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            nav_exit: Duration::from_millis(NAV_EXIT_DELAY_MS),
            content_exit: Duration::from_millis(CONTENT_EXIT_DELAY_MS),
        }
    }
}

/// Second phase of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredStep {
    /// Show the target section and reopen the gate
    RevealSection(Section),
    /// Show the nav bar again and reopen the gate
    RestoreNav,
}

/// A deferred step the host must run after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub ticket: u64,
    pub step: DeferredStep,
    pub delay: Duration,
}

/// Handle for removing an observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&NavigationState)>;

/// The view's navigation state machine
pub struct NavigationMachine {
    state: NavigationState,
    timing: TransitionTiming,
    pending: Option<Scheduled>,
    next_ticket: u64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    disposed: bool,
}

impl NavigationMachine {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            state: NavigationState::default(),
            timing,
            pending: None,
            next_ticket: 1,
            observers: Vec::new(),
            next_subscription: 1,
            disposed: false,
        }
    }

    // ==================== Getters ====================

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    /// The deferred step currently awaiting its timer
    pub fn pending(&self) -> Option<Scheduled> {
        self.pending
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // ==================== Transitions ====================

    /// Start moving to `target`: hide the nav bar now, reveal `target` after D1.
    ///
    /// Ignored while a transition is running, when `target` is already active,
    /// or after disposal.
    pub fn navigate_to(&mut self, target: Section) -> Option<Scheduled> {
        if self.disposed || self.state.transitioning || target == self.state.active_section {
            debug!(?target, state = ?self.state, "navigate_to ignored");
            return None;
        }

        self.state.transitioning = true;
        self.state.nav_visible = false;
        let scheduled = self.schedule(DeferredStep::RevealSection(target), self.timing.nav_exit);
        self.notify();
        Some(scheduled)
    }

    /// Return to Home now, bring the nav bar back after D2.
    ///
    /// Ignored while a transition is running or after disposal.
    pub fn navigate_back(&mut self) -> Option<Scheduled> {
        if self.disposed || self.state.transitioning {
            debug!(state = ?self.state, "navigate_back ignored");
            return None;
        }

        self.state.transitioning = true;
        self.state.active_section = Section::Home;
        let scheduled = self.schedule(DeferredStep::RestoreNav, self.timing.content_exit);
        self.notify();
        Some(scheduled)
    }

    /// Run the second phase of the pending transition.
    ///
    /// Returns `false` (and changes nothing) when `ticket` is not the pending one.
    pub fn complete(&mut self, ticket: u64) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if self.disposed || pending.ticket != ticket {
            debug!(ticket, pending = pending.ticket, "stale deferred step dropped");
            return false;
        }

        self.pending = None;
        match pending.step {
            DeferredStep::RevealSection(target) => {
                self.state.active_section = target;
            }
            DeferredStep::RestoreNav => {
                self.state.nav_visible = true;
            }
        }
        self.state.transitioning = false;
        self.notify();
        true
    }

    /// Tear the machine down. Returns the step that was cancelled, if any.
    ///
    /// Afterwards every operation is a no-op and observers are released.
    pub fn dispose(&mut self) -> Option<Scheduled> {
        if self.disposed {
            return None;
        }
        self.disposed = true;
        self.observers.clear();
        self.pending.take()
    }

    // ==================== Observers ====================

    /// Call `observer` after every state change
    pub fn subscribe(&mut self, observer: impl FnMut(&NavigationState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        if !self.disposed {
            self.observers.push((id, Box::new(observer)));
        }
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn schedule(&mut self, step: DeferredStep, delay: Duration) -> Scheduled {
        let scheduled = Scheduled {
            ticket: self.next_ticket,
            step,
            delay,
        };
        self.next_ticket += 1;
        self.pending = Some(scheduled);
        scheduled
    }

    fn notify(&mut self) {
        let state = self.state;
        for (_, observer) in self.observers.iter_mut() {
            observer(&state);
        }
    }
}

impl Default for NavigationMachine {
    fn default() -> Self {
        Self::new(TransitionTiming::default())
    }
}

impl fmt::Debug for NavigationMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationMachine")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("observers", &self.observers.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Fake timer queue: fires scheduled steps once simulated time passes their deadline
    #[derive(Default)]
    struct FakeTimers {
        now: Duration,
        queue: Vec<(Duration, u64)>,
    }

    impl FakeTimers {
        fn arm(&mut self, scheduled: Option<Scheduled>) {
            if let Some(s) = scheduled {
                self.queue.push((self.now + s.delay, s.ticket));
            }
        }

        fn advance(&mut self, by: Duration, machine: &mut NavigationMachine) {
            self.now += by;
            let now = self.now;
            let (due, rest): (Vec<_>, Vec<_>) =
                self.queue.drain(..).partition(|(deadline, _)| *deadline <= now);
            self.queue = rest;
            for (_, ticket) in due {
                machine.complete(ticket);
            }
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn assert_invariant(state: &NavigationState) {
        if state.nav_visible {
            assert_eq!(state.active_section, Section::Home, "nav visible off Home: {state:?}");
        }
    }

    #[test]
    fn test_initial_state() {
        let machine = NavigationMachine::default();
        assert_eq!(machine.state(), NavigationState::default());
        assert_eq!(
            machine.state(),
            NavigationState {
                active_section: Section::Home,
                nav_visible: true,
                transitioning: false,
            }
        );
        assert!(machine.pending().is_none());
    }

    #[test]
    fn test_navigate_to_projects_scenario() {
        let mut machine = NavigationMachine::default();
        let mut timers = FakeTimers::default();

        timers.arm(machine.navigate_to(Section::Projects));
        assert_eq!(
            machine.state(),
            NavigationState {
                active_section: Section::Home,
                nav_visible: false,
                transitioning: true,
            }
        );

        timers.advance(ms(379), &mut machine);
        assert_eq!(machine.state().active_section, Section::Home);
        assert!(machine.state().transitioning);

        timers.advance(ms(1), &mut machine);
        assert_eq!(
            machine.state(),
            NavigationState {
                active_section: Section::Projects,
                nav_visible: false,
                transitioning: false,
            }
        );
    }

    #[test]
    fn test_navigate_back_scenario() {
        let mut machine = NavigationMachine::default();
        let mut timers = FakeTimers::default();
        timers.arm(machine.navigate_to(Section::Projects));
        timers.advance(ms(380), &mut machine);

        timers.arm(machine.navigate_back());
        assert_eq!(
            machine.state(),
            NavigationState {
                active_section: Section::Home,
                nav_visible: false,
                transitioning: true,
            }
        );

        timers.advance(ms(419), &mut machine);
        assert!(!machine.state().nav_visible);

        timers.advance(ms(1), &mut machine);
        assert_eq!(
            machine.state(),
            NavigationState {
                active_section: Section::Home,
                nav_visible: true,
                transitioning: false,
            }
        );
    }

    #[test]
    fn test_round_trip_restores_initial_state() {
        let mut machine = NavigationMachine::default();
        let mut timers = FakeTimers::default();

        timers.arm(machine.navigate_to(Section::About));
        timers.advance(ms(380), &mut machine);
        timers.arm(machine.navigate_back());
        timers.advance(ms(420), &mut machine);

        assert_eq!(machine.state(), NavigationState::default());
        assert!(machine.pending().is_none());
    }

    #[test]
    fn test_calls_while_transitioning_are_ignored() {
        let mut machine = NavigationMachine::default();
        let first = machine.navigate_to(Section::About).expect("transition starts");
        let snapshot = machine.state();

        assert!(machine.navigate_to(Section::Projects).is_none());
        assert!(machine.navigate_to(Section::Achievements).is_none());
        assert!(machine.navigate_back().is_none());
        assert!(machine.navigate_to(Section::Home).is_none());

        assert_eq!(machine.state(), snapshot);
        assert_eq!(machine.pending(), Some(first));
    }

    #[test]
    fn test_back_while_transitioning_back_is_ignored() {
        let mut machine = NavigationMachine::default();
        let mut timers = FakeTimers::default();
        timers.arm(machine.navigate_to(Section::Achievements));
        timers.advance(ms(380), &mut machine);

        timers.arm(machine.navigate_back());
        let snapshot = machine.state();
        assert!(machine.navigate_back().is_none());
        assert!(machine.navigate_to(Section::About).is_none());
        assert_eq!(machine.state(), snapshot);
    }

    #[test]
    fn test_navigate_to_active_section_is_noop() {
        let mut machine = NavigationMachine::default();
        assert!(machine.navigate_to(Section::Home).is_none());
        assert_eq!(machine.state(), NavigationState::default());

        let mut timers = FakeTimers::default();
        timers.arm(machine.navigate_to(Section::About));
        timers.advance(ms(380), &mut machine);
        let snapshot = machine.state();
        assert!(machine.navigate_to(Section::About).is_none());
        assert_eq!(machine.state(), snapshot);
    }

    #[test]
    fn test_section_to_section_keeps_nav_hidden() {
        let mut machine = NavigationMachine::default();
        let mut timers = FakeTimers::default();
        timers.arm(machine.navigate_to(Section::About));
        timers.advance(ms(380), &mut machine);

        timers.arm(machine.navigate_to(Section::Projects));
        assert_eq!(machine.state().active_section, Section::About);
        timers.advance(ms(380), &mut machine);
        assert_eq!(machine.state().active_section, Section::Projects);
        assert!(!machine.state().nav_visible);
    }

    #[test]
    fn test_invariant_holds_at_every_notification() {
        let mut machine = NavigationMachine::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        machine.subscribe(move |state| sink.borrow_mut().push(*state));

        let mut timers = FakeTimers::default();
        let script = [
            Some(Section::Projects),
            None,
            Some(Section::About),
            Some(Section::Achievements),
            None,
            None,
        ];
        for (i, action) in script.iter().enumerate() {
            match action {
                Some(target) => timers.arm(machine.navigate_to(*target)),
                None => timers.arm(machine.navigate_back()),
            }
            assert_invariant(&machine.state());
            // Alternate between interrupting mid-flight and letting the timer run out
            let step = if i % 2 == 0 { ms(100) } else { ms(500) };
            timers.advance(step, &mut machine);
            assert_invariant(&machine.state());
        }
        timers.advance(ms(1000), &mut machine);

        let seen = seen.borrow();
        assert!(!seen.is_empty());
        seen.iter().for_each(assert_invariant);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut machine = NavigationMachine::default();
        let scheduled = machine.navigate_to(Section::About).expect("transition starts");

        assert!(!machine.complete(scheduled.ticket + 1));
        assert!(machine.state().transitioning);

        assert!(machine.complete(scheduled.ticket));
        // Firing the same timer twice does nothing
        assert!(!machine.complete(scheduled.ticket));
        assert_eq!(machine.state().active_section, Section::About);
    }

    #[test]
    fn test_dispose_cancels_pending_step() {
        let mut machine = NavigationMachine::default();
        let scheduled = machine.navigate_to(Section::Projects).expect("transition starts");
        let before = machine.state();

        assert_eq!(machine.dispose(), Some(scheduled));
        assert!(machine.is_disposed());
        assert!(!machine.complete(scheduled.ticket));
        assert_eq!(machine.state(), before);

        assert!(machine.navigate_back().is_none());
        assert!(machine.dispose().is_none());
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let mut machine = NavigationMachine::default();
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        let id = machine.subscribe(move |_| *counter.borrow_mut() += 1);

        let scheduled = machine.navigate_to(Section::About).expect("transition starts");
        machine.complete(scheduled.ticket);
        assert_eq!(*count.borrow(), 2, "one notification per phase");

        assert!(machine.unsubscribe(id));
        assert!(!machine.unsubscribe(id));
        machine.navigate_back();
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_ignored_calls_do_not_notify() {
        let mut machine = NavigationMachine::default();
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        machine.subscribe(move |_| *counter.borrow_mut() += 1);

        machine.navigate_to(Section::Home);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_custom_timing_is_used() {
        let timing = TransitionTiming {
            nav_exit: ms(10),
            content_exit: ms(20),
        };
        let mut machine = NavigationMachine::new(timing);
        let forward = machine.navigate_to(Section::About).expect("transition starts");
        assert_eq!(forward.delay, ms(10));
        assert_eq!(forward.step, DeferredStep::RevealSection(Section::About));
        machine.complete(forward.ticket);

        let back = machine.navigate_back().expect("transition starts");
        assert_eq!(back.delay, ms(20));
        assert_eq!(back.step, DeferredStep::RestoreNav);
    }

    #[test]
    fn test_visibility_helpers() {
        let state = NavigationState::default();
        assert!(state.shows_nav_bar());
        assert!(!state.shows_back());

        let hidden = NavigationState {
            nav_visible: false,
            transitioning: true,
            ..state
        };
        assert!(!hidden.shows_nav_bar());

        let section = NavigationState {
            active_section: Section::Projects,
            nav_visible: false,
            transitioning: false,
        };
        assert!(section.shows_back());
        assert!(!section.shows_nav_bar());
    }
}
