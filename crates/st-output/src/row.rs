//! Plain data row types written by output backends.

/// One agent's kinematic state and status at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub tick:       u64,
    pub agent_id:   u32,
    pub x:          f32,
    pub y:          f32,
    pub vx:         f32,
    pub vy:         f32,
    /// Motion state label ("IDLE", "ARRIVE", "SEEK", "EVADE").
    pub state:      &'static str,
    pub distressed: bool,
}

/// One distress delivery from an evader to a subscribed listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistressRow {
    pub tick:       u64,
    pub evader:     u32,
    pub listener:   u32,
    pub distressed: bool,
}
