//! Closest-corners collision resolution.
//!
//! Scores every eligible droppable by the summed distance between the four
//! corners of the dragged card and the matching corners of the droppable.
//! The lowest score wins; exact ties go to the lower column enumeration
//! index, then the lower position, with a column container ranking ahead of
//! slot 0.

use crate::board::domain::{Board, DragGeometry, DropCandidate, DropTarget, ResolvedTarget};
use std::cmp::Ordering;

#[derive(Debug)]
struct Scored {
    distance: f64,
    column_rank: usize,
    // 0 for a column container, `index + 1` for a slot.
    position_rank: usize,
    target: ResolvedTarget,
}

impl Scored {
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.column_rank.cmp(&other.column_rank))
            .then(self.position_rank.cmp(&other.position_rank))
    }
}

fn score(board: &Board, geometry: &DragGeometry, candidate: &DropCandidate) -> Option<Scored> {
    let column = candidate.target.column();
    let column_rank = board.column_index(column)?;
    let len = board.column(column)?.len();
    let (position_rank, index) = match candidate.target {
        DropTarget::Column { .. } if len > 0 => return None,
        DropTarget::Column { .. } => (0, len),
        DropTarget::Slot { index, .. } => (index.saturating_add(1), index),
    };
    let distance = geometry.active.corner_distance(candidate.rect);
    if !distance.is_finite() {
        return None;
    }
    Some(Scored {
        distance,
        column_rank,
        position_rank,
        target: ResolvedTarget::new(column.clone(), index),
    })
}

/// Picks the drop target closest to the dragged card.
///
/// Column containers only take part while their column is empty. Candidates
/// naming columns that are not on the board, or whose score is not finite,
/// are skipped. Returns `None` when nothing is eligible.
#[must_use]
pub fn closest_corners(board: &Board, geometry: &DragGeometry) -> Option<ResolvedTarget> {
    geometry
        .candidates
        .iter()
        .filter_map(|candidate| score(board, geometry, candidate))
        .min_by(Scored::cmp_priority)
        .map(|winner| winner.target)
}
