//! Per-step book statistics

use tracing::warn;
use types::book::{OrderBookSnapshot, StepStats};

/// Signed, normalized bid/ask imbalance in `[-1, 1]`.
///
/// An empty book has no pressure either way and yields 0.
pub fn imbalance(bid_sum: f64, ask_sum: f64) -> f64 {
    let total = bid_sum + ask_sum;
    if total > 0.0 {
        (bid_sum - ask_sum) / total
    } else {
        warn!(bid_sum, ask_sum, "zero total book volume, imbalance set to 0");
        0.0
    }
}

/// Reduce a snapshot to its step statistics.
pub fn aggregate(snapshot: &OrderBookSnapshot) -> StepStats {
    let bid_sum = snapshot.bid_sum();
    let ask_sum = snapshot.ask_sum();
    StepStats {
        bid_sum,
        ask_sum,
        imbalance: imbalance(bid_sum, ask_sum),
    }
}
