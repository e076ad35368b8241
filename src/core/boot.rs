//! Boot sequencer - Fixed-duration progress simulation for a starting session
//!
//! A [`BootTask`] is polled from the frame loop with the current time and
//! reports [`BootPoll::Complete`] exactly once. Cancelling the task (or
//! dropping it together with the session phase that owns it) guarantees
//! completion never fires afterwards.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::machine::BootMedia;
use super::settings::BootTimings;

/// Status messages shown while booting the operating system
pub const OS_BOOT_MESSAGES: &[&str] = &[
    "Initializing hardware...",
    "Loading EFI firmware...",
    "Starting kernel...",
    "Loading kernel extensions...",
    "Mounting file systems...",
    "Starting system services...",
    "Loading WindowServer...",
    "Starting login window...",
];

/// Status messages shown while booting installer media
pub const INSTALLER_BOOT_MESSAGES: &[&str] = &[
    "Starting macOS Installer...",
    "Loading essential components...",
    "Verifying installation media...",
    "Preparing for installation...",
    "Ready for installation!",
];

/// Snapshot of the boot animation at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootProgress {
    /// 0..=100
    pub percent: u32,
    pub message_index: usize,
    pub message: &'static str,
}

impl BootProgress {
    pub fn fraction(&self) -> f32 {
        self.percent as f32 / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootTaskState {
    Running,
    Completed,
    Cancelled,
}

/// Result of polling a boot task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPoll {
    /// Still booting
    Pending,
    /// The boot finished on this poll
    Complete,
    /// Already completed or cancelled; nothing to do
    Inactive,
}

/// Creates boot tasks with the configured timings
#[derive(Debug, Clone)]
pub struct BootSequencer {
    timings: BootTimings,
}

impl BootSequencer {
    pub fn new(timings: BootTimings) -> Self {
        Self { timings }
    }

    /// Start a boot for the given media at `now`
    pub fn start(&self, media: BootMedia, now: Instant) -> BootTask {
        let messages = match media {
            BootMedia::Os => OS_BOOT_MESSAGES,
            BootMedia::Installer => INSTALLER_BOOT_MESSAGES,
        };
        debug!(
            "Boot sequence started ({}, {:?})",
            media.label(),
            self.timings.total()
        );
        BootTask {
            started_at: now,
            timings: self.timings.clone(),
            messages,
            state: BootTaskState::Running,
        }
    }
}

/// A running boot animation
#[derive(Debug)]
pub struct BootTask {
    started_at: Instant,
    timings: BootTimings,
    messages: &'static [&'static str],
    state: BootTaskState,
}

impl BootTask {
    #[cfg(test)]
    pub fn state(&self) -> BootTaskState {
        self.state
    }

    /// Progress as seen at `now`
    pub fn progress(&self, now: Instant) -> BootProgress {
        let elapsed = now.saturating_duration_since(self.started_at);

        let steps = elapsed.as_millis() / self.timings.progress_interval().as_millis().max(1);
        let percent = (steps.min(u32::MAX as u128) as u32)
            .saturating_mul(self.timings.progress_step)
            .min(100);

        let last = self.messages.len().saturating_sub(1);
        let message_index = (elapsed.as_millis()
            / self.timings.message_interval().as_millis().max(1))
        .min(last as u128) as usize;

        BootProgress {
            percent,
            message_index,
            message: self.messages.get(message_index).copied().unwrap_or(""),
        }
    }

    /// Time left until completion, zero once finished
    pub fn remaining(&self, now: Instant) -> Duration {
        if self.state != BootTaskState::Running {
            return Duration::ZERO;
        }
        (self.started_at + self.timings.total()).saturating_duration_since(now)
    }

    /// Advance the task. Returns [`BootPoll::Complete`] exactly once.
    pub fn poll(&mut self, now: Instant) -> BootPoll {
        if self.state != BootTaskState::Running {
            return BootPoll::Inactive;
        }
        if now.saturating_duration_since(self.started_at) >= self.timings.total() {
            self.state = BootTaskState::Completed;
            debug!("Boot sequence complete");
            return BootPoll::Complete;
        }
        trace!("Boot at {}%", self.progress(now).percent);
        BootPoll::Pending
    }

    /// Release the task; later polls never complete
    pub fn cancel(&mut self) {
        if self.state == BootTaskState::Running {
            self.state = BootTaskState::Cancelled;
            debug!("Boot sequence cancelled");
        }
    }
}
