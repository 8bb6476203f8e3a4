//! Classification of a pair of slots into a move.

use tracing::debug;

use super::{Direction, Move, MoveType};
use crate::ring::SlotIndex;

/// Signed shortest cyclic distance from `from` to `to` on a ring of `slots`.
///
/// Positive means clockwise. The magnitude never exceeds `slots / 2`; the
/// diametric tie on even rings always resolves to `+slots / 2`, whatever the
/// argument order.
pub fn signed_distance(from: SlotIndex, to: SlotIndex, slots: usize) -> isize {
    if slots == 0 {
        return 0;
    }
    let n = slots as isize;
    let forward = (to as isize - from as isize).rem_euclid(n);
    if forward * 2 <= n {
        forward
    } else {
        forward - n
    }
}

/// Classify the move from `from` to `to` on a ring of `slots`.
///
/// Returns `None` for equal indices, out-of-range indices or a ring with
/// fewer than two slots.
pub fn classify(from: SlotIndex, to: SlotIndex, slots: usize) -> Option<Move> {
    if slots < 2 || from >= slots || to >= slots || from == to {
        return None;
    }

    let distance = signed_distance(from, to, slots);
    let magnitude = distance.unsigned_abs();
    let direction = Direction::from_sign(distance);

    // Adjacency wins over the diametric case on a two-slot ring.
    let (move_type, direction) = if magnitude == 1 {
        (MoveType::Shift, Some(direction))
    } else if slots % 2 == 0 && magnitude == slots / 2 {
        (MoveType::Cross, None)
    } else {
        (MoveType::DoSiDo, Some(direction))
    };

    debug!(from, to, distance, ?move_type, "Classified move");

    Some(Move {
        move_type,
        from,
        to,
        direction,
    })
}
