//! Interactive walk from the entrance to the exit of a maze
//!
//! The session moves an agent one cell at a time through open walls. Elapsed
//! time is derived from the clock on every query while the run is active and
//! frozen when the agent reaches the exit.

use std::fmt;
use std::time::Duration;

use crate::session::clock::{Clock, SystemClock};
use crate::spatial::{Cell, Direction, Grid};

/// Lifecycle of a traversal run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalState {
    /// No run started
    #[default]
    Idle,
    /// Agent is moving and the timer is running
    Active,
    /// Agent reached the exit; stays here until reset or restarted
    Finished,
}

impl fmt::Display for TraversalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Finished => "finished",
        })
    }
}

/// Result of a movement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Agent stepped into `to`
    Moved {
        /// New position
        to: Cell,
    },
    /// Agent stepped onto the exit and the run finished
    Reached {
        /// Exit cell
        to: Cell,
        /// Final run time
        elapsed: Duration,
    },
    /// The wall in that direction is closed; nothing changed
    Blocked,
    /// No run is active; nothing changed
    Inactive,
}

impl MoveOutcome {
    /// Whether the move was accepted
    pub const fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. } | Self::Reached { .. })
    }
}

/// Read-only view of a traversal session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalSnapshot {
    /// Agent position
    pub position: Cell,
    /// Lifecycle state
    pub state: TraversalState,
    /// Run time so far, or final time once finished
    pub elapsed: Duration,
    /// Moves that changed the agent's cell
    pub moves: usize,
    /// Moves refused by a closed wall
    pub blocked: usize,
}

/// Traversal state machine over an externally owned grid
#[derive(Debug, Clone)]
pub struct TraversalSession<C: Clock = SystemClock> {
    state: TraversalState,
    position: Cell,
    started_at: Option<Duration>,
    finished_after: Option<Duration>,
    moves: usize,
    blocked: usize,
    clock: C,
}

impl Default for TraversalSession<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> TraversalSession<C> {
    /// Create an idle session at the entrance
    pub const fn new(clock: C) -> Self {
        Self {
            state: TraversalState::Idle,
            position: Cell::new(0, 0),
            started_at: None,
            finished_after: None,
            moves: 0,
            blocked: 0,
            clock,
        }
    }

    /// Begin a run at the entrance and start the timer
    ///
    /// Starting while a run is active or finished restarts it.
    pub fn start(&mut self) {
        self.state = TraversalState::Active;
        self.position = Cell::new(0, 0);
        self.started_at = Some(self.clock.now());
        self.finished_after = None;
        self.moves = 0;
        self.blocked = 0;
    }

    /// Try to move the agent one cell in `direction`
    ///
    /// Only an active run moves, and only through an open wall. Reaching the
    /// exit of `grid` finishes the run and freezes the timer. On a grid whose
    /// entrance is its exit the first move finishes the run in place.
    pub fn try_move(&mut self, grid: &Grid, direction: Direction) -> MoveOutcome {
        if self.state != TraversalState::Active {
            return MoveOutcome::Inactive;
        }

        if self.position == grid.exit() {
            return self.finish(self.position);
        }

        // A stale position from a previous, larger grid cannot move
        if !grid.contains(self.position) || !grid.is_open(self.position, direction) {
            self.blocked += 1;
            return MoveOutcome::Blocked;
        }

        let Some(next) = grid.neighbor(self.position, direction) else {
            self.blocked += 1;
            return MoveOutcome::Blocked;
        };

        self.position = next;
        self.moves += 1;

        if next == grid.exit() {
            return self.finish(next);
        }

        MoveOutcome::Moved { to: next }
    }

    fn finish(&mut self, at: Cell) -> MoveOutcome {
        let elapsed = self.elapsed();
        self.finished_after = Some(elapsed);
        self.state = TraversalState::Finished;
        MoveOutcome::Reached { to: at, elapsed }
    }

    /// Return to `Idle` at the entrance with the timer cleared
    pub const fn reset(&mut self) {
        self.state = TraversalState::Idle;
        self.position = Cell::new(0, 0);
        self.started_at = None;
        self.finished_after = None;
        self.moves = 0;
        self.blocked = 0;
    }

    /// Run time: zero when idle, live while active, frozen once finished
    pub fn elapsed(&self) -> Duration {
        match self.state {
            TraversalState::Idle => Duration::ZERO,
            TraversalState::Active => self
                .started_at
                .map_or(Duration::ZERO, |start| self.clock.now().saturating_sub(start)),
            TraversalState::Finished => self.finished_after.unwrap_or(Duration::ZERO),
        }
    }

    /// Lifecycle state
    pub const fn state(&self) -> TraversalState {
        self.state
    }

    /// Agent position
    pub const fn position(&self) -> Cell {
        self.position
    }

    /// Whether a run is in progress
    pub fn is_active(&self) -> bool {
        self.state == TraversalState::Active
    }

    /// Whether the agent has reached the exit
    pub fn is_finished(&self) -> bool {
        self.state == TraversalState::Finished
    }

    /// Moves that changed the agent's cell since the run started
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Access the clock
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> TraversalSnapshot {
        TraversalSnapshot {
            position: self.position,
            state: self.state,
            elapsed: self.elapsed(),
            moves: self.moves,
            blocked: self.blocked,
        }
    }
}
