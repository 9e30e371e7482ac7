/// One-shot start gate for a page view.
///
/// Both flags start false. `sequence_started` flips to true once and never back, so a
/// sequence can start at most once; `trigger_scheduled` marks a start that is waiting out
/// the debounce window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceGate {
    sequence_started: bool,
    trigger_scheduled: bool,
}

impl SequenceGate {
    /// Both flags false.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the sequence has started.
    pub fn sequence_started(&self) -> bool {
        self.sequence_started
    }

    /// True while a start waits out the debounce window.
    pub fn trigger_scheduled(&self) -> bool {
        self.trigger_scheduled
    }

    /// Claim the pending slot. False when a start is already pending or done.
    pub fn try_schedule(&mut self) -> bool {
        if self.sequence_started || self.trigger_scheduled {
            return false;
        }
        self.trigger_scheduled = true;
        true
    }

    /// Consume the pending slot and mark the sequence started. True exactly once.
    pub fn try_start(&mut self) -> bool {
        self.trigger_scheduled = false;
        if self.sequence_started {
            return false;
        }
        self.sequence_started = true;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/gate.rs"]
mod tests;
