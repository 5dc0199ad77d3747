//! Time-based value transitions
//!
//! A [`ValueTransition`] moves linearly from its current value to a target
//! over a fixed duration. It is driven by [`ValueTransition::tick`] once per
//! frame.

use embassy_time::{Duration, Instant};

use crate::color::{Rgb, blend_colors};
use crate::math8::{blend8, progress8};

/// Blends two values of type `T` using a progress value (0-255)
pub type ValueBlender<T> = fn(T, T, u8) -> T;

#[derive(Debug, Clone, Copy)]
struct ActiveTransition<T: Copy> {
    from: T,
    to: T,
    started_at: Instant,
    duration: Duration,
}

/// Transition for values of type `T`
#[derive(Debug, Clone)]
pub struct ValueTransition<T: Copy> {
    blend: ValueBlender<T>,
    current: T,
    active: Option<ActiveTransition<T>>,
}

impl<T: Copy> ValueTransition<T> {
    pub const fn new(initial: T, blend: ValueBlender<T>) -> Self {
        Self {
            blend,
            current: initial,
            active: None,
        }
    }

    /// Current interpolated value
    pub const fn current(&self) -> T {
        self.current
    }

    /// Value the transition is heading to, or the current one when idle
    pub fn target(&self) -> T {
        self.active.map_or(self.current, |active| active.to)
    }

    pub const fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// Start moving towards `value`
    ///
    /// A zero `duration` applies the value immediately.
    pub fn set(&mut self, value: T, duration: Duration, now: Instant) {
        if duration.as_millis() == 0 {
            self.current = value;
            self.active = None;
            return;
        }

        self.active = Some(ActiveTransition {
            from: self.current,
            to: value,
            started_at: now,
            duration,
        });
    }

    /// Advance the transition to `now`
    pub fn tick(&mut self, now: Instant) {
        let Some(active) = self.active else {
            return;
        };

        let elapsed = now.saturating_duration_since(active.started_at);
        if elapsed >= active.duration {
            self.current = active.to;
            self.active = None;
            return;
        }

        let progress = progress8(elapsed, active.duration);
        self.current = (self.blend)(active.from, active.to, progress);
    }
}

impl ValueTransition<u8> {
    pub const fn new_u8(initial: u8) -> Self {
        Self::new(initial, blend8)
    }
}

impl ValueTransition<Rgb> {
    pub const fn new_rgb(initial: Rgb) -> Self {
        Self::new(initial, blend_colors)
    }
}
