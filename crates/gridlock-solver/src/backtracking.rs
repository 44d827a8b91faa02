//! Depth-first backtracking search over a mutable board.

use gridlock_core::{Board, Position};

/// How much of the board to re-check after each tentative placement.
///
/// Candidates are already filtered against the row, column, and block of the
/// target cell, so the post-placement check is a safety net rather than the
/// primary pruning mechanism.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Revalidation {
    /// Re-check all 9 rows, 9 columns, and 9 blocks. This matches the
    /// reference behavior and is the default.
    #[default]
    WholeBoard,
    /// Re-check only the row, column, and block containing the placed cell.
    /// Equivalent in outcome when the rest of the board was valid before the
    /// placement, and asymptotically cheaper.
    Affected,
}

/// Statistics collected during a solve.
///
/// # Examples
///
/// ```
/// use gridlock_core::Board;
/// use gridlock_solver::BacktrackingSolver;
///
/// let solver = BacktrackingSolver::new();
/// let mut board = Board::empty();
///
/// let (solved, stats) = solver.solve_with_stats(&mut board);
/// assert!(solved);
/// println!("placements: {}", stats.placements);
/// println!("backtracks: {}", stats.backtracks);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of tentative digit placements tried.
    pub placements: usize,
    /// Number of placements undone after a dead end.
    pub backtracks: usize,
}

impl SolveStats {
    /// Creates a new empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the search ever had to undo a placement.
    #[must_use]
    pub fn has_backtracked(&self) -> bool {
        self.backtracks > 0
    }
}

/// A solver that completes a board by depth-first backtracking.
///
/// The search repeatedly finds the first empty cell in row-major order,
/// tries its candidate digits in ascending order, and recurses. A placement
/// that fails re-validation, or whose subtree dead-ends, is undone before
/// the next candidate is tried. Termination is guaranteed: each recursion
/// level fills one more cell (depth at most 81) and tries at most 9
/// candidates.
///
/// A board that is already invalid is rejected up front, before any search.
/// "No solution exists" is an expected outcome reported as `false`, never an
/// error.
///
/// # Examples
///
/// ```
/// use gridlock_core::Board;
/// use gridlock_solver::BacktrackingSolver;
///
/// let solver = BacktrackingSolver::new();
/// let mut board = Board::empty();
///
/// // Every empty board has a completion
/// assert!(solver.solve(&mut board));
/// assert!(board.is_full());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSolver {
    revalidation: Revalidation,
}

impl BacktrackingSolver {
    /// Creates a solver that re-validates the whole board after each
    /// placement ([`Revalidation::WholeBoard`]).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            revalidation: Revalidation::WholeBoard,
        }
    }

    /// Creates a solver with the given re-validation scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_solver::{BacktrackingSolver, Revalidation};
    ///
    /// let solver = BacktrackingSolver::with_revalidation(Revalidation::Affected);
    /// ```
    #[must_use]
    pub const fn with_revalidation(revalidation: Revalidation) -> Self {
        Self { revalidation }
    }

    /// Solves the board in place.
    ///
    /// On success the board holds a complete, valid assignment and `true` is
    /// returned. On failure the board is left exactly as it was passed in
    /// (every tentative placement has been undone) and `false` is returned.
    pub fn solve(&self, board: &mut Board) -> bool {
        self.solve_with_stats(board).0
    }

    /// Solves the board in place, collecting search statistics.
    ///
    /// Returns a tuple `(solved, stats)` where `solved` is `true` if the
    /// board now holds a complete valid assignment.
    pub fn solve_with_stats(&self, board: &mut Board) -> (bool, SolveStats) {
        let mut stats = SolveStats::new();
        // A broken board must never be reported as solved, even when full.
        if !board.is_valid() {
            return (false, stats);
        }
        let solved = self.search(board, &mut stats);
        (solved, stats)
    }

    fn placement_ok(&self, board: &Board, pos: Position) -> bool {
        match self.revalidation {
            Revalidation::WholeBoard => board.is_valid(),
            Revalidation::Affected => board.is_valid_at(pos),
        }
    }

    fn search(&self, board: &mut Board, stats: &mut SolveStats) -> bool {
        let Some(pos) = board.first_empty() else {
            // No empty cell and the board was valid on entry: solved.
            return true;
        };
        for digit in board.candidates(pos) {
            board[pos] = Some(digit);
            stats.placements += 1;
            if self.placement_ok(board, pos) && self.search(board, stats) {
                return true;
            }
            board[pos] = None;
            stats.backtracks += 1;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::Digit;

    use super::*;

    const PUZZLE: [&str; 9] = [
        "530070000",
        "600195000",
        "098000060",
        "800060003",
        "400803001",
        "700020006",
        "060000280",
        "000419005",
        "000080079",
    ];

    const SOLUTION: &str = "\
-------------
|534|678|912|
|672|195|348|
|198|342|567|
-------------
|859|761|423|
|426|853|791|
|713|924|856|
-------------
|961|537|284|
|287|419|635|
|345|286|179|
-------------";

    fn puzzle_board() -> Board {
        Board::from_lines(&PUZZLE).unwrap()
    }

    #[test]
    fn test_solves_classic_puzzle() {
        let mut board = puzzle_board();
        let solver = BacktrackingSolver::new();
        assert!(solver.solve(&mut board));
        assert_eq!(board.to_text(), SOLUTION);
    }

    #[test]
    fn test_soundness() {
        let mut board = puzzle_board();
        assert!(BacktrackingSolver::new().solve(&mut board));
        assert!(board.is_full());
        assert!(board.is_valid());
    }

    #[test]
    fn test_determinism_on_fresh_copies() {
        let solver = BacktrackingSolver::new();
        let mut first = puzzle_board();
        let mut second = puzzle_board();
        assert!(solver.solve(&mut first));
        assert!(solver.solve(&mut second));
        assert_eq!(first, second);
        assert_eq!(first.to_text(), second.to_text());
    }

    #[test]
    fn test_revalidation_modes_agree() {
        let whole = BacktrackingSolver::new();
        let affected = BacktrackingSolver::with_revalidation(Revalidation::Affected);

        let mut a = puzzle_board();
        let mut b = puzzle_board();
        let (solved_a, stats_a) = whole.solve_with_stats(&mut a);
        let (solved_b, stats_b) = affected.solve_with_stats(&mut b);

        assert!(solved_a && solved_b);
        assert_eq!(a, b);
        // Same search tree, only the per-placement check differs
        assert_eq!(stats_a, stats_b);
    }

    #[test]
    fn test_already_solved_board() {
        let mut board: Board = SOLUTION
            .lines()
            .filter(|line| line.starts_with('|'))
            .map(|line| line.replace('|', ""))
            .collect::<Vec<_>>()
            .join("\n")
            .parse()
            .unwrap();
        let before = board;

        let (solved, stats) = BacktrackingSolver::new().solve_with_stats(&mut board);
        assert!(solved);
        assert_eq!(board, before);
        assert_eq!(stats.placements, 0);
        assert!(!stats.has_backtracked());
    }

    #[test]
    fn test_duplicate_in_row_is_rejected() {
        let mut board = Board::empty();
        board[Position::new(0, 0)] = Some(Digit::D7);
        board[Position::new(5, 0)] = Some(Digit::D7);

        let (solved, stats) = BacktrackingSolver::new().solve_with_stats(&mut board);
        assert!(!solved);
        // Rejected before search; nothing was placed or undone
        assert_eq!(stats, SolveStats::new());
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_unsolvable_leaves_board_untouched() {
        // Valid givens, but cell (0, 0) has no candidate left:
        // row holds 1-8 and its column holds 9.
        let rows = [
            "012345678",
            "400000000",
            "900000000",
            "300000000",
            "700000000",
            "800000000",
            "200000000",
            "500000000",
            "600000000",
        ];
        let mut board = Board::from_lines(&rows).unwrap();
        assert!(board.is_valid());
        let before = board;

        let solver = BacktrackingSolver::new();
        assert!(!solver.solve(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_board_is_solvable() {
        let mut board = Board::empty();
        let (solved, stats) = BacktrackingSolver::new().solve_with_stats(&mut board);
        assert!(solved);
        assert!(board.is_full());
        assert!(board.is_valid());
        assert!(stats.placements >= 81);
    }
}
