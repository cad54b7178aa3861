//! Virtual clock for a session.
//!
//! Replaces the host timers a browser game would use: a repeating
//! one-second tick and one-shot delayed unflips. Time only moves when the
//! host calls `advance`, which makes sessions deterministic under test.

use std::time::Duration;

use crate::core::UnflipToken;

/// Something that became due while the clock advanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Due {
    /// This many consecutive tick intervals elapsed.
    Ticks(u64),
    /// A scheduled unflip reached its deadline.
    Unflip(UnflipToken),
}

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    due: Duration,
    token: UnflipToken,
}

/// Virtual clock with a repeating tick and one-shot unflip timers.
///
/// Time saturates at `Duration::MAX`. Ticks past that point are never due.
#[derive(Clone, Debug)]
pub struct SessionClock {
    now: Duration,
    tick_interval: Duration,
    /// `None` once the next tick would lie beyond `Duration::MAX`.
    next_tick: Option<Duration>,
    /// Sorted by deadline; equal deadlines keep scheduling order.
    pending: Vec<Scheduled>,
}

impl SessionClock {
    /// Create a clock at time zero. A zero interval is raised to 1ms.
    #[must_use]
    pub fn new(tick_interval: Duration) -> Self {
        let tick_interval = tick_interval.max(Duration::from_millis(1));
        Self {
            now: Duration::ZERO,
            tick_interval,
            next_tick: Some(tick_interval),
            pending: Vec::new(),
        }
    }

    /// Time since the clock was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of unflips waiting for their deadline.
    #[must_use]
    pub fn pending_unflips(&self) -> usize {
        self.pending.len()
    }

    /// Cancel every pending unflip and restart the tick phase from now.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.next_tick = self.now.checked_add(self.tick_interval);
    }

    /// Schedule an unflip `delay` from now.
    pub fn schedule_unflip(&mut self, token: UnflipToken, delay: Duration) {
        let due = self.now.saturating_add(delay);
        let at = self.pending.partition_point(|s| s.due <= due);
        self.pending.insert(at, Scheduled { due, token });
    }

    /// Move the clock forward, returning everything that fell due in
    /// chronological order. Runs of ticks between unflips are reported as
    /// one `Due::Ticks`. A tick and an unflip due at the same instant yield
    /// the tick first.
    pub fn advance(&mut self, dt: Duration) -> Vec<Due> {
        let target = self.now.saturating_add(dt);
        let mut fired = Vec::new();

        loop {
            let next_unflip = self.pending.first().map(|s| s.due).filter(|&due| due <= target);

            let ticks = self.take_ticks_through(next_unflip.unwrap_or(target));
            if ticks > 0 {
                fired.push(Due::Ticks(ticks));
            }

            if next_unflip.is_none() {
                break;
            }
            let scheduled = self.pending.remove(0);
            self.now = scheduled.due;
            fired.push(Due::Unflip(scheduled.token));
        }

        self.now = target;
        fired
    }

    /// Consume every tick due at or before `until`, returning how many.
    fn take_ticks_through(&mut self, until: Duration) -> u64 {
        let next = match self.next_tick {
            Some(next) if next <= until => next,
            _ => return 0,
        };

        let interval = self.tick_interval.as_nanos();
        let count = (until - next).as_nanos() / interval + 1;
        self.next_tick = duration_from_nanos(next.as_nanos() + count * interval);
        u64::try_from(count).unwrap_or(u64::MAX)
    }
}

/// `Duration` from a nanosecond count, or `None` past `Duration::MAX`.
fn duration_from_nanos(nanos: u128) -> Option<Duration> {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).ok()?;
    Some(Duration::new(secs, (nanos % NANOS_PER_SEC) as u32))
}
