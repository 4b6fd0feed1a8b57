//! Step-by-step playback over a route's timeline.
//!
//! [`PlaybackCursor`] is an index into the immutable list returned by
//! [`Route::timeline`](crate::Route::timeline), owned by whoever drives the
//! playback. Pausing keeps the exact position; resuming continues from it;
//! stopping discards it. The route itself is never recomputed.

/// Position of a playback within a timeline of `len` steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackCursor {
    len: usize,
    /// Index of the next step to show.
    next: usize,
    auto_play: bool,
    stopped: bool,
}

impl PlaybackCursor {
    /// A cursor at the first of `len` steps, playing.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            next: 0,
            auto_play: true,
            stopped: false,
        }
    }

    /// Index of the step to show on this tick, moving past it.
    ///
    /// Returns `None` while paused, once stopped, or past the last step.
    pub fn advance(&mut self) -> Option<usize> {
        if !self.auto_play {
            return None;
        }
        self.step_forward()
    }

    /// Move one step forward regardless of pause.
    pub fn step_forward(&mut self) -> Option<usize> {
        if self.stopped || self.next >= self.len {
            return None;
        }
        let idx = self.next;
        self.next += 1;
        Some(idx)
    }

    /// Move one step back regardless of pause, returning the step now
    /// current.
    pub fn step_back(&mut self) -> Option<usize> {
        if self.stopped || self.next <= 1 {
            return None;
        }
        self.next -= 1;
        Some(self.next - 1)
    }

    /// Jump so that `idx` is the next step shown. Clamped to the end.
    pub fn seek(&mut self, idx: usize) {
        if self.stopped {
            return;
        }
        self.next = idx.min(self.len);
    }

    pub fn pause(&mut self) {
        self.auto_play = false;
    }

    pub fn resume(&mut self) {
        self.auto_play = true;
    }

    pub fn toggle_pause(&mut self) {
        self.auto_play = !self.auto_play;
    }

    pub fn is_paused(&self) -> bool {
        !self.auto_play
    }

    /// Hard stop: forget the position. Only [`PlaybackCursor::restart`]
    /// brings the cursor back.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.next = 0;
        self.auto_play = false;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Start over from the first step, playing.
    pub fn restart(&mut self) {
        *self = Self::new(self.len);
    }

    /// Index of the next step to show.
    pub fn index(&self) -> usize {
        self.next
    }

    /// Number of steps in the timeline.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every step has been shown.
    pub fn is_finished(&self) -> bool {
        !self.stopped && self.next >= self.len
    }

    /// Share of steps shown, in percent.
    pub fn progress(&self) -> f32 {
        if self.len == 0 {
            return 100.0;
        }
        self.next as f32 * 100.0 / self.len as f32
    }
}
