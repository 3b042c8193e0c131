//! Alpha-beta search with transposition caching.
//!
//! Negamax formulation: scores are always from the side to move's point
//! of view, negated across recursion. Static evaluation is White-relative
//! and converted with the side's sign. Move ordering prefers captures,
//! then checking moves.

use crate::board::{Board, Move, MoveList, ScoredMoveList};
use crate::tt::{BoundType, TranspositionTable};

/// Default transposition table size in megabytes
pub const DEFAULT_TT_MB: usize = 64;

/// Window bound comfortably above any material evaluation
const INFINITY: i32 = 1_000_000;

const CAPTURE_ORDER_BONUS: i32 = 100;
const CHECK_ORDER_BONUS: i32 = 50;

/// Counters accumulated over a search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Transposition table hits at sufficient depth
    pub tt_hits: u64,
}

/// Search state that persists across calls: the transposition table and
/// accumulated statistics.
pub struct SearchState {
    tt: TranspositionTable,
    pub stats: SearchStats,
}

impl SearchState {
    /// Create search state with a transposition table of roughly
    /// `tt_size_mb` megabytes.
    #[must_use]
    pub fn new(tt_size_mb: usize) -> Self {
        SearchState {
            tt: TranspositionTable::new(tt_size_mb),
            stats: SearchStats::default(),
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_TT_MB)
    }
}

/// Score each move for ordering: +100 for captures, +50 for moves that
/// give check. Check detection makes the candidate move for real and
/// probes the enemy king, then unmakes.
fn order_moves(board: &mut Board, moves: &MoveList) -> ScoredMoveList {
    let opponent = board.side_to_move().opponent();
    let mut scored = ScoredMoveList::new();

    for m in moves {
        let mut score = 0;
        if m.is_capture() {
            score += CAPTURE_ORDER_BONUS;
        }
        let info = board.make_move(*m);
        if board.is_in_check(opponent) {
            score += CHECK_ORDER_BONUS;
        }
        board.unmake_move(*m, info);
        scored.push(*m, score);
    }

    scored.sort_by_score_desc();
    scored
}

fn negamax(board: &mut Board, state: &mut SearchState, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
    state.stats.nodes += 1;
    let color = board.side_to_move();

    if depth == 0 {
        return color.sign() * board.evaluate();
    }

    let alpha_orig = alpha;
    if let Some(entry) = state.tt.probe(board.hash()) {
        if entry.depth >= depth {
            state.stats.tt_hits += 1;
            match entry.bound_type {
                BoundType::Exact => return entry.score,
                BoundType::LowerBound => alpha = alpha.max(entry.score),
                BoundType::UpperBound => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }
    }

    let moves = board.generate_moves();
    if moves.is_empty() {
        // Checkmate or stalemate: the static score is the terminal value
        return color.sign() * board.evaluate();
    }

    let ordered = order_moves(board, &moves);
    let mut best = -INFINITY;

    for sm in ordered.iter() {
        let info = board.make_move(sm.mv);
        let score = -negamax(board, state, depth - 1, -beta, -alpha);
        board.unmake_move(sm.mv, info);

        if score > best {
            best = score;
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    let bound_type = if best <= alpha_orig {
        BoundType::UpperBound
    } else if best >= beta {
        BoundType::LowerBound
    } else {
        BoundType::Exact
    };
    state.tt.store(board.hash(), depth, best, bound_type);

    best
}

/// Search to the given depth and return the best move for the side to
/// move, or `None` when the position is terminal.
pub fn find_best_move(board: &mut Board, state: &mut SearchState, depth: u32) -> Option<Move> {
    let moves = board.generate_moves();
    if moves.is_empty() {
        return None;
    }

    let depth = depth.max(1);
    state.stats.nodes += 1;

    let ordered = order_moves(board, &moves);
    let mut alpha = -INFINITY;
    let mut best_move = ordered.as_slice()[0].mv;
    let mut best_score = -INFINITY;

    for sm in ordered.iter() {
        let info = board.make_move(sm.mv);
        let score = -negamax(board, state, depth - 1, -INFINITY, -alpha);
        board.unmake_move(sm.mv, info);

        if score > best_score {
            best_score = score;
            best_move = sm.mv;
        }
        alpha = alpha.max(score);
    }

    Some(best_move)
}
