//! Capture requests, results, and the capture-sum search.

use smallvec::SmallVec;

use crate::cards::Card;

/// Groups of table cards requested in one capture. Each inner group must
/// sum to a capture value of the played card on its own.
pub type TakenCards = Vec<Vec<Card>>;

/// Flattened taken cards. Captures rarely exceed a handful of cards.
pub(crate) type FlatTaken = SmallVec<[Card; 8]>;

/// Outcome of an accepted capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    /// The played card followed by every taken card, in request order.
    pub cards: Vec<Card>,
    /// True when the capture emptied the table.
    pub cleared: bool,
}

pub(crate) fn flatten(taken: &[Vec<Card>]) -> FlatTaken {
    taken.iter().flatten().copied().collect()
}

/// Check whether some choice of one capture value per card sums to any of
/// `targets`.
///
/// Walks the full Cartesian product of per-card values, so the cost is
/// `2^n` for a group holding `n` Aces. A single deck has four, but groups
/// built from aliased multi-deck identities can hold more. An empty group
/// sums to 0.
#[must_use]
pub fn sums_to(group: &[Card], targets: &[u32]) -> bool {
    fn search(rest: &[Card], acc: u32, targets: &[u32]) -> bool {
        match rest.split_first() {
            None => targets.contains(&acc),
            Some((card, rest)) => card
                .capture_values()
                .iter()
                .any(|&value| search(rest, acc + value, targets)),
        }
    }

    search(group, 0, targets)
}
