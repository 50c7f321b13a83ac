//! Advisory turn and challenge clocks.
//!
//! The clocks only count; they never force a pass or resolve a challenge.
//! The host owns a [`Timers`] value, calls [`Timers::tick`] once per second,
//! and calls [`Timers::follow_phase`] after every game action so that each
//! clock only runs in the phase that needs it.

use crate::game::Phase;

/// The two clocks shown to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Time the current player has spent thinking.
    Turn,
    /// Time the table has spent deciding whether to challenge.
    Challenge,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Countdown {
    running: bool,
    seconds: u32,
}

/// A pair of cancellable second counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timers {
    turn: Countdown,
    challenge: Countdown,
}

impl Timers {
    /// Creates stopped timers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            turn: Countdown {
                running: false,
                seconds: 0,
            },
            challenge: Countdown {
                running: false,
                seconds: 0,
            },
        }
    }

    const fn slot(&mut self, kind: TimerKind) -> &mut Countdown {
        match kind {
            TimerKind::Turn => &mut self.turn,
            TimerKind::Challenge => &mut self.challenge,
        }
    }

    /// Starts a clock from zero, cancelling any run already in progress.
    pub const fn start(&mut self, kind: TimerKind) {
        *self.slot(kind) = Countdown {
            running: true,
            seconds: 0,
        };
    }

    /// Stops and clears a clock.
    pub const fn stop(&mut self, kind: TimerKind) {
        *self.slot(kind) = Countdown {
            running: false,
            seconds: 0,
        };
    }

    /// Advances every running clock by one second.
    pub const fn tick(&mut self) {
        if self.turn.running {
            self.turn.seconds = self.turn.seconds.saturating_add(1);
        }
        if self.challenge.running {
            self.challenge.seconds = self.challenge.seconds.saturating_add(1);
        }
    }

    /// Returns the elapsed seconds of a running clock.
    #[must_use]
    pub const fn elapsed(&self, kind: TimerKind) -> Option<u32> {
        let countdown = match kind {
            TimerKind::Turn => self.turn,
            TimerKind::Challenge => self.challenge,
        };
        if countdown.running {
            Some(countdown.seconds)
        } else {
            None
        }
    }

    /// Returns whether a clock is running.
    #[must_use]
    pub const fn is_running(&self, kind: TimerKind) -> bool {
        self.elapsed(kind).is_some()
    }

    /// Restarts the clock the new phase needs and stops the other one.
    ///
    /// Every game action hands the turn or the challenge window to someone,
    /// so the matching clock always restarts from zero.
    pub const fn follow_phase(&mut self, phase: Phase) {
        match phase {
            Phase::AwaitingTurnAction => {
                self.stop(TimerKind::Challenge);
                self.start(TimerKind::Turn);
            }
            Phase::AwaitingChallengeDecision => {
                self.stop(TimerKind::Turn);
                self.start(TimerKind::Challenge);
            }
            _ => {
                self.stop(TimerKind::Turn);
                self.stop(TimerKind::Challenge);
            }
        }
    }
}
