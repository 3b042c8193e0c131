//! Classical ray attacks for sliding pieces.
//!
//! Eight precomputed ray masks per square. A slider's attack set along a
//! ray runs up to and including the first blocker; the squares shadowed by
//! the blocker are removed by subtracting the blocker's own ray in the
//! same direction.

/// Ray directions, ordered so that the first four scan toward higher
/// square indices and the last four toward lower ones.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    East,
    NorthEast,
    NorthWest,
    South,
    West,
    SouthEast,
    SouthWest,
}

impl Direction {
    const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::South,
        Direction::West,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Rank/file step for this direction
    const fn step(self) -> (isize, isize) {
        match self {
            Direction::North => (1, 0),
            Direction::East => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (1, -1),
            Direction::South => (-1, 0),
            Direction::West => (0, -1),
            Direction::SouthEast => (-1, 1),
            Direction::SouthWest => (-1, -1),
        }
    }

    /// True when the ray scans toward higher square indices, so the
    /// nearest blocker is the lowest set bit.
    const fn scans_upward(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::NorthEast | Direction::NorthWest
        )
    }
}

static RAYS: std::sync::LazyLock<[[u64; 64]; 8]> = std::sync::LazyLock::new(|| {
    let mut rays = [[0u64; 64]; 8];
    for dir in Direction::ALL {
        let (dr, df) = dir.step();
        for sq in 0..64 {
            let mut mask = 0u64;
            let mut r = (sq / 8) as isize + dr;
            let mut f = (sq % 8) as isize + df;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                mask |= 1u64 << ((r as usize) * 8 + (f as usize));
                r += dr;
                f += df;
            }
            rays[dir.index()][sq] = mask;
        }
    }
    rays
});

fn ray_attack(dir: Direction, from_idx: usize, occupancy: u64) -> u64 {
    let ray = RAYS[dir.index()][from_idx];
    let blockers = ray & occupancy;
    if blockers == 0 {
        return ray;
    }
    let first = if dir.scans_upward() {
        blockers.trailing_zeros() as usize
    } else {
        63 - blockers.leading_zeros() as usize
    };
    ray ^ RAYS[dir.index()][first]
}

/// Rook-style attacks (orthogonal rays) from a square over the given occupancy
pub(crate) fn rook_attacks(from_idx: usize, occupancy: u64) -> u64 {
    Direction::ORTHOGONAL
        .iter()
        .fold(0, |acc, &dir| acc | ray_attack(dir, from_idx, occupancy))
}

/// Bishop-style attacks (diagonal rays) from a square over the given occupancy
pub(crate) fn bishop_attacks(from_idx: usize, occupancy: u64) -> u64 {
    Direction::DIAGONAL
        .iter()
        .fold(0, |acc, &dir| acc | ray_attack(dir, from_idx, occupancy))
}

/// Queen attacks: union of rook and bishop rays
pub(crate) fn queen_attacks(from_idx: usize, occupancy: u64) -> u64 {
    rook_attacks(from_idx, occupancy) | bishop_attacks(from_idx, occupancy)
}
