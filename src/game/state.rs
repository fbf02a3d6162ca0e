//! Round state types.

/// Round state.
///
/// Rounds move `Setup -> Play -> Result`. From `Result` a restart goes back
/// to `Setup` and a replay goes back to `Play` keeping deck and history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Collecting the bet and choice.
    Setup,
    /// Drawing cards.
    Play,
    /// The round has been resolved.
    Result,
}

/// Notification emitted when a round is resolved, for audio front-ends.
///
/// Cues are fire-and-forget: the game never waits on them and nothing about
/// the round depends on whether they are consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCue {
    /// The round was won.
    Win,
    /// The round was lost.
    Loss,
}

impl ResultCue {
    pub(crate) const fn from_won(won: bool) -> Self {
        if won { Self::Win } else { Self::Loss }
    }
}
