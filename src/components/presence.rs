//! Presence - Wait-for-Exit Mounting
//!
//! Tracks which keyed element is on screen. When the requested key changes,
//! the outgoing element keeps rendering with its exit style until its exit
//! duration has elapsed; only then is the incoming element mounted. Each mount
//! gets a fresh generation so GPUI treats it as a new element and replays the
//! enter animation.

use std::time::{Duration, Instant};

/// What to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresenceFrame<K> {
    /// Nothing mounted
    Empty,
    /// Incoming or resting element
    Shown { key: K, generation: u64 },
    /// Outgoing element; `progress` runs 0..=1 over its exit duration
    Exiting { key: K, generation: u64, progress: f32 },
}

#[derive(Debug, Clone, Copy)]
struct Mounted<K> {
    key: K,
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct Leaving<K> {
    key: K,
    generation: u64,
    since: Instant,
    exit: Duration,
}

#[derive(Debug)]
pub struct Presence<K> {
    target: Option<Mounted<K>>,
    leaving: Option<Leaving<K>>,
    next_generation: u64,
    exit_for: fn(K) -> Duration,
}

impl<K: Copy + PartialEq> Presence<K> {
    /// Start with `initial` mounted. `exit_for` gives each key's exit duration.
    pub fn new(initial: Option<K>, exit_for: fn(K) -> Duration) -> Self {
        Self {
            target: initial.map(|key| Mounted { key, generation: 0 }),
            leaving: None,
            next_generation: 1,
            exit_for,
        }
    }

    /// Request `next` to be on screen and return the frame to draw at `now`
    pub fn update(&mut self, next: Option<K>, now: Instant) -> PresenceFrame<K> {
        let current = self.target.map(|m| m.key);
        if current != next {
            // A target that never got mounted because an exit was running is simply replaced
            if self.leaving.is_none()
                && let Some(mounted) = self.target
            {
                self.leaving = Some(Leaving {
                    key: mounted.key,
                    generation: mounted.generation,
                    since: now,
                    exit: (self.exit_for)(mounted.key),
                });
            }
            self.target = next.map(|key| {
                let generation = self.next_generation;
                self.next_generation += 1;
                Mounted { key, generation }
            });
        }

        if let Some(leaving) = self.leaving {
            let elapsed = now.saturating_duration_since(leaving.since);
            if elapsed < leaving.exit {
                let progress = elapsed.as_secs_f32() / leaving.exit.as_secs_f32();
                return PresenceFrame::Exiting {
                    key: leaving.key,
                    generation: leaving.generation,
                    progress,
                };
            }
            self.leaving = None;
        }

        match self.target {
            Some(Mounted { key, generation }) => PresenceFrame::Shown { key, generation },
            None => PresenceFrame::Empty,
        }
    }

    /// Whether an exit is still running and needs further frames
    pub fn is_exiting(&self) -> bool {
        self.leaving.is_some()
    }
}
