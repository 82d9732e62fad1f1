//! Platform-agnostic terminal event types.
//!
//! Every host maps its native keyboard input to these enums. The interpreter
//! never sees raw key codes.

/// An input event delivered to the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// The user submitted the current input line (Enter).
    Submit(String),
    /// History recall (Up / Down).
    Navigate(Direction),
    /// Completion requested for the current input text (Tab).
    Complete(String),
}

/// History navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Recall an older entry (-1).
    Older,
    /// Recall a newer entry (+1).
    Newer,
}

impl Direction {
    /// Map a signed step to a direction. Negative is older, positive is newer.
    pub fn from_step(step: i32) -> Option<Self> {
        match step.signum() {
            -1 => Some(Self::Older),
            1 => Some(Self::Newer),
            _ => None,
        }
    }

    /// The signed step this direction represents.
    pub fn step(self) -> i32 {
        match self {
            Self::Older => -1,
            Self::Newer => 1,
        }
    }
}
