//! Tests for the traversal state machine and its timer

#[cfg(test)]
mod tests {
    use mazeweave::session::clock::ManualClock;
    use mazeweave::session::traversal::{MoveOutcome, TraversalSession, TraversalState};
    use mazeweave::spatial::{Cell, Direction, Grid};
    use std::time::Duration;

    fn corridor() -> Grid {
        Grid::from_masks(2, 2, vec![2, 8 | 4, 0, 1]).unwrap_or_else(|_| Grid::new(5, 5))
    }

    // Tests that moves are ignored before a run starts
    // Verified by allowing moves in the Idle state
    #[test]
    fn test_idle_session_ignores_moves() {
        let grid = corridor();
        let mut session = TraversalSession::new(ManualClock::new());

        assert_eq!(session.state(), TraversalState::Idle);
        assert_eq!(session.try_move(&grid, Direction::East), MoveOutcome::Inactive);
        assert_eq!(session.position(), Cell::new(0, 0));
        assert_eq!(session.elapsed(), Duration::ZERO);
    }

    // Tests blocked and accepted moves and the exit transition
    // Verified by skipping the wall check in try_move
    #[test]
    fn test_walk_to_exit() {
        let grid = corridor();
        let clock = ManualClock::new();
        let mut session = TraversalSession::new(clock.clone());
        session.start();

        assert_eq!(session.try_move(&grid, Direction::South), MoveOutcome::Blocked);
        assert_eq!(session.position(), Cell::new(0, 0));
        assert!(session.is_active());

        assert_eq!(
            session.try_move(&grid, Direction::East),
            MoveOutcome::Moved {
                to: Cell::new(1, 0)
            }
        );

        clock.advance(Duration::from_secs(3));
        assert_eq!(session.elapsed(), Duration::from_secs(3));

        assert_eq!(
            session.try_move(&grid, Direction::South),
            MoveOutcome::Reached {
                to: Cell::new(1, 1),
                elapsed: Duration::from_secs(3)
            }
        );
        assert!(session.is_finished());
        assert_eq!(session.moves(), 2);
        assert_eq!(session.snapshot().blocked, 1);
    }

    // Tests that the timer freezes at the exit and later moves are refused
    // Verified by computing elapsed from the clock in the Finished state
    #[test]
    fn test_finished_run_is_frozen() {
        let grid = corridor();
        let clock = ManualClock::new();
        let mut session = TraversalSession::new(clock.clone());
        session.start();
        let _ = session.try_move(&grid, Direction::East);
        clock.advance(Duration::from_millis(1500));
        let _ = session.try_move(&grid, Direction::South);

        clock.advance(Duration::from_secs(60));
        assert_eq!(session.elapsed(), Duration::from_millis(1500));
        assert_eq!(session.try_move(&grid, Direction::North), MoveOutcome::Inactive);
        assert_eq!(session.position(), Cell::new(1, 1));
    }

    // Tests that elapsed time is measured from the start, not accumulated
    // Verified by resetting started_at on each query
    #[test]
    fn test_elapsed_tracks_clock() {
        let clock = ManualClock::new();
        clock.set(Duration::from_secs(10));
        let mut session = TraversalSession::new(clock.clone());
        session.start();

        clock.advance(Duration::from_secs(1));
        assert_eq!(session.elapsed(), Duration::from_secs(1));
        clock.advance(Duration::from_secs(1));
        assert_eq!(session.snapshot().elapsed, Duration::from_secs(2));
    }

    // Tests reset and restart from the finished state
    // Verified by keeping the position in reset
    #[test]
    fn test_reset_and_restart() {
        let grid = corridor();
        let mut session = TraversalSession::new(ManualClock::new());
        session.start();
        let _ = session.try_move(&grid, Direction::East);
        let _ = session.try_move(&grid, Direction::South);
        assert_eq!(session.state(), TraversalState::Finished);

        session.start();
        assert_eq!(session.state(), TraversalState::Active);
        assert_eq!(session.position(), Cell::new(0, 0));
        assert_eq!(session.moves(), 0);

        let _ = session.try_move(&grid, Direction::East);
        session.reset();
        assert_eq!(session.state(), TraversalState::Idle);
        assert_eq!(session.position(), Cell::new(0, 0));
        assert_eq!(session.state().to_string(), "idle");
    }

    // Tests that a position left over from a larger grid cannot move
    // Verified by trusting the stored position in try_move
    #[test]
    fn test_stale_position_is_blocked() {
        let large = Grid::new(5, 5);
        let mut walked = large.clone();
        walked.open_passage(Cell::new(0, 0), Direction::East);
        walked.open_passage(Cell::new(1, 0), Direction::East);
        walked.open_passage(Cell::new(2, 0), Direction::East);

        let mut session = TraversalSession::new(ManualClock::new());
        session.start();
        for _ in 0..3 {
            let _ = session.try_move(&walked, Direction::East);
        }
        assert_eq!(session.position(), Cell::new(3, 0));

        let small = corridor();
        assert_eq!(session.try_move(&small, Direction::West), MoveOutcome::Blocked);
        assert!(!MoveOutcome::Blocked.moved());
    }

    // Tests that a single-cell grid finishes on the first move
    // Verified by only checking the exit after a step in try_move
    #[test]
    fn test_single_cell_run_finishes() {
        let grid = Grid::from_masks(1, 1, vec![0]).unwrap_or_else(|_| Grid::new(5, 5));
        assert_eq!(grid.dimensions(), (1, 1));
        let clock = ManualClock::new();
        let mut session = TraversalSession::new(clock.clone());
        session.start();
        clock.advance(Duration::from_millis(250));

        assert_eq!(
            session.try_move(&grid, Direction::East),
            MoveOutcome::Reached {
                to: Cell::new(0, 0),
                elapsed: Duration::from_millis(250)
            }
        );
        assert_eq!(session.state(), TraversalState::Finished);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.try_move(&grid, Direction::East), MoveOutcome::Inactive);
    }
}
