//! Restart decision of the receiver, kept free of side effects so every
//! combination of conditions can be evaluated directly.
use crate::protocol::transport::transfer_id::TidRelation;

/// Conditions derived from an incoming frame and the receiver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RestartConditions {
    /// No transfer start has ever been recorded.
    pub not_initialized: bool,
    /// Full timeout window elapsed since the current transfer started.
    pub receiver_timed_out: bool,
    /// Frame arrived on the authoritative interface.
    pub same_iface: bool,
    /// Frame carries the start-of-transfer flag.
    pub first_frame: bool,
    /// Frame transfer ID relative to the tracked one.
    pub tid_relation: TidRelation,
    /// Authoritative interface silent for more than two intervals.
    pub iface_timed_out: bool,
}

/// What `add_frame` must do before validating the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RestartAction {
    /// Keep the current transfer and validate the frame against it.
    Keep,
    /// Adopt the frame's interface and transfer ID, then validate it as a first frame.
    RestartAndContinue,
    /// Adopt the frame's identity, skip its transfer ID, and drop the frame.
    RestartAndDrop,
}

impl RestartConditions {
    /// Whether the current transfer must be abandoned in favour of the frame's.
    pub const fn need_restart(&self) -> bool {
        let newer_first_frame =
            self.first_frame && matches!(self.tid_relation, TidRelation::Future);

        self.not_initialized
            || self.receiver_timed_out
            || (self.same_iface && newer_first_frame)
            || (self.iface_timed_out && newer_first_frame)
    }

    /// Restart decision as an action.
    pub const fn action(&self) -> RestartAction {
        if !self.need_restart() {
            RestartAction::Keep
        } else if self.first_frame {
            RestartAction::RestartAndContinue
        } else {
            RestartAction::RestartAndDrop
        }
    }
}
