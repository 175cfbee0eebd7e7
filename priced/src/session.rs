use crate::mean::Mean;
use priced_codecs::{Price, Timestamp};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    pub timestamp: Timestamp,
    pub price: Price,
}

/// Append-only price history of a single connection. Duplicate and
/// out-of-order timestamps are kept as distinct observations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session(Vec<Observation>);

impl Session {
    pub fn insert(&mut self, timestamp: Timestamp, price: Price) {
        self.0.push(Observation { timestamp, price });
    }

    pub fn mean_in_range(&self, min_time: Timestamp, max_time: Timestamp) -> i32 {
        let interval = min_time..=max_time;
        self.0
            .iter()
            .filter_map(|o| interval.contains(&o.timestamp).then_some(o.price))
            .mean()
    }
}
