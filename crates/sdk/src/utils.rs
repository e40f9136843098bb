//! Small internal helpers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current UNIX timestamp in seconds.
pub(crate) fn unix_timestamp_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_recent() {
        // 2020-01-01 as a floor; catches unit mistakes (millis vs secs).
        assert!(unix_timestamp_secs() > 1_577_836_800);
        assert!(unix_timestamp_secs() < 10_000_000_000);
    }
}
