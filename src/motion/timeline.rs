//! Fixed-delay state machines for the contact form and toasts, plus the
//! epoch token that lets an owner invalidate steps still in flight.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::PageConfig;

/// What a timed step waits on before advancing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wait {
    Frames(u32),
    Millis(u32),
}

pub trait Timeline: Copy + PartialEq + Sized {
    /// The step that follows `self`, or `None` once the machine rests.
    fn next(self, config: &PageConfig) -> Option<(Wait, Self)>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Success,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        self != SubmitPhase::Idle
    }
}

impl Timeline for SubmitPhase {
    fn next(self, config: &PageConfig) -> Option<(Wait, Self)> {
        match self {
            // Idle only leaves through a submit event.
            SubmitPhase::Idle => None,
            SubmitPhase::Submitting => Some((Wait::Millis(config.submit_delay_ms), SubmitPhase::Success)),
            SubmitPhase::Success => Some((Wait::Millis(config.reset_delay_ms), SubmitPhase::Idle)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// In the document but not yet painted with `show`.
    Entering,
    Shown,
    Leaving,
    Removed,
}

impl ToastPhase {
    pub fn has_show_marker(self) -> bool {
        self == ToastPhase::Shown
    }
}

impl Timeline for ToastPhase {
    fn next(self, config: &PageConfig) -> Option<(Wait, Self)> {
        match self {
            // Two frames so the hidden state is painted before the transition.
            ToastPhase::Entering => Some((Wait::Frames(2), ToastPhase::Shown)),
            ToastPhase::Shown => Some((Wait::Millis(config.toast_display_ms), ToastPhase::Leaving)),
            ToastPhase::Leaving => Some((Wait::Millis(config.toast_exit_ms), ToastPhase::Removed)),
            ToastPhase::Removed => None,
        }
    }
}

/// Shared counter; bumping it invalidates every ticket issued before.
#[derive(Clone, Debug, Default)]
pub struct Epoch(Rc<Cell<u64>>);

impl Epoch {
    pub fn advance(&self) -> Ticket {
        let value = self.0.get().wrapping_add(1);
        self.0.set(value);
        Ticket { epoch: self.clone(), value }
    }

    pub fn invalidate(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}

#[derive(Clone, Debug)]
pub struct Ticket {
    epoch: Epoch,
    value: u64,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.epoch.0.get() == self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Phase reached `elapsed` ms after entering `from`, with frame waits
    /// treated as instantaneous.
    fn after<T: Timeline>(from: T, elapsed: u32, config: &PageConfig) -> T {
        let mut phase = from;
        let mut at = 0u32;
        while let Some((wait, next)) = phase.next(config) {
            let cost = match wait {
                Wait::Frames(_) => 0,
                Wait::Millis(ms) => ms,
            };
            at = at.saturating_add(cost);
            if at > elapsed {
                break;
            }
            phase = next;
        }
        phase
    }

    #[test]
    fn form_runs_loading_success_then_resets() {
        let config = PageConfig::default();
        let start = SubmitPhase::Submitting;
        assert_eq!(after(start, 0, &config), SubmitPhase::Submitting);
        assert_eq!(after(start, 1599, &config), SubmitPhase::Submitting);
        assert_eq!(after(start, 1600, &config), SubmitPhase::Success);
        assert_eq!(after(start, 5099, &config), SubmitPhase::Success);
        assert_eq!(after(start, 5100, &config), SubmitPhase::Idle);
        assert_eq!(after(start, 60_000, &config), SubmitPhase::Idle);
        assert_eq!(SubmitPhase::Idle.next(&config), None);
    }

    #[test]
    fn busy_covers_whole_run() {
        assert!(SubmitPhase::Submitting.is_busy());
        assert!(SubmitPhase::Success.is_busy());
        assert!(!SubmitPhase::Idle.is_busy());
    }

    #[test]
    fn toast_shows_hides_and_is_removed() {
        let config = PageConfig::default();
        let start = ToastPhase::Entering;
        assert_eq!(start.next(&config), Some((Wait::Frames(2), ToastPhase::Shown)));
        assert!(after(start, 0, &config).has_show_marker());
        assert!(after(start, 4999, &config).has_show_marker());
        assert_eq!(after(start, 5000, &config), ToastPhase::Leaving);
        assert!(!after(start, 5000, &config).has_show_marker());
        assert_eq!(after(start, 5399, &config), ToastPhase::Leaving);
        assert_eq!(after(start, 5400, &config), ToastPhase::Removed);
    }

    #[test]
    fn advancing_epoch_invalidates_older_tickets() {
        let epoch = Epoch::default();
        let first = epoch.advance();
        assert!(first.is_current());
        let second = epoch.advance();
        assert!(!first.is_current());
        assert!(second.is_current());
        epoch.invalidate();
        assert!(!second.is_current());
    }
}
