//! Frame scheduling.
//!
//! Components do not register with a process-wide display refresh. They
//! subscribe to a [`FrameScheduler`] handed to them, hold the returned
//! [`Subscription`], and are ticked only while it is active. Cancelling is
//! idempotent and also happens on drop.
//!
//! Everything here is single-threaded: the registry lives in an
//! `Rc<RefCell<_>>` and the types are `!Send`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashSet;
use web_time::Instant;

use crate::util::frame_timing::FrameTiming;

/// Identifies one subscription within its scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    active: FxHashSet<SubscriptionId>,
}

/// Source of per-frame ticks.
pub trait FrameScheduler {
    /// Register a new frame subscriber.
    fn subscribe(&self) -> Subscription;
}

/// Registration with a [`FrameScheduler`].
///
/// Cancelled explicitly with [`cancel`](Self::cancel) or implicitly on drop.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// This subscription's id.
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the scheduler still delivers frames to this subscription.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let Some(reg) = self.registry.upgrade() else {
            return false;
        };
        let active = reg.borrow().active.contains(&self.id);
        active
    }

    /// Stop receiving frames. Returns `true` only on the call that actually
    /// removed the registration.
    pub fn cancel(&mut self) -> bool {
        let Some(reg) = self.registry.upgrade() else {
            return false;
        };
        let removed = reg.borrow_mut().active.remove(&self.id);
        if removed {
            log::debug!("frame subscription {:?} cancelled", self.id);
        }
        removed
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self.cancel();
    }
}

/// One frame as delivered by [`FrameClock::advance`].
///
/// Ids are only unique per clock, so a tick remembers which clock emitted
/// it and never fires subscriptions held with another clock.
#[derive(Debug, Clone)]
pub struct FrameTick {
    /// Frame timestamp.
    pub timestamp: Instant,
    /// Subscriptions that fire on this frame, in ascending id order.
    pub fired: Vec<SubscriptionId>,
    source: Weak<RefCell<Registry>>,
}

impl FrameTick {
    /// Whether `sub` was registered with the emitting clock and fires on
    /// this frame.
    #[must_use]
    pub fn fires(&self, sub: &Subscription) -> bool {
        Weak::ptr_eq(&self.source, &sub.registry)
            && self.fired.binary_search(&sub.id).is_ok()
    }
}

/// Host-driven frame clock.
///
/// The host calls [`advance`](Self::advance) once per display refresh (or
/// per simulated frame) and forwards the returned [`FrameTick`] to its
/// components.
#[derive(Debug)]
pub struct FrameClock {
    registry: Rc<RefCell<Registry>>,
    timestamp: Option<Instant>,
    timing: FrameTiming,
}

impl FrameClock {
    /// Clock without frame pacing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_target_fps(0)
    }

    /// Clock that reports [`should_render`](Self::should_render) at most
    /// `fps` times per second (0 = unlimited).
    #[must_use]
    pub fn with_target_fps(fps: u32) -> Self {
        Self {
            registry: Rc::default(),
            timestamp: None,
            timing: FrameTiming::new(fps),
        }
    }

    /// Timestamp of the most recent frame.
    #[must_use]
    pub fn timestamp(&self) -> Option<Instant> {
        self.timestamp
    }

    /// Number of active subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().active.len()
    }

    /// Smoothed frames per second over advanced frames.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Whether the pacing target allows a frame at `now`.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        self.timing.should_render(now)
    }

    /// Emit a frame at `now` to every active subscription.
    pub fn advance(&mut self, now: Instant) -> FrameTick {
        self.timestamp = Some(now);
        self.timing.end_frame(now);

        let mut fired: Vec<SubscriptionId> =
            self.registry.borrow().active.iter().copied().collect();
        fired.sort_unstable();
        FrameTick {
            timestamp: now,
            fired,
            source: Rc::downgrade(&self.registry),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for FrameClock {
    fn subscribe(&self) -> Subscription {
        let mut reg = self.registry.borrow_mut();
        let id = SubscriptionId(reg.next_id);
        reg.next_id += 1;
        let _ = reg.active.insert(id);
        log::debug!("frame subscription {id:?} registered");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }
}
