//! Per-tick motion state.

use std::fmt;

/// The phase within a behavior that selects this tick's velocity formula.
///
/// Every agent starts `Idle`.  There is no terminal state: the machine is
/// re-evaluated on every tick for as long as the simulation runs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionState {
    #[default]
    Idle,
    Arrive,
    Seek,
    Evade,
}

impl MotionState {
    /// Upper-case status label shown by host UIs above each agent.
    pub fn label(self) -> &'static str {
        match self {
            MotionState::Idle   => "IDLE",
            MotionState::Arrive => "ARRIVE",
            MotionState::Seek   => "SEEK",
            MotionState::Evade  => "EVADE",
        }
    }

    /// `true` for states that actively steer toward or away from the target.
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, MotionState::Idle)
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
