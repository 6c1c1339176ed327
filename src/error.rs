//! Error types for card construction.

use thiserror::Error;

/// Errors that can occur when building a card from raw ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside Ace (1) to King (13).
    #[error("invalid rank {0}, expected 1 to 13")]
    InvalidRank(u8),
    /// Suit ordinal outside the suit enumeration.
    #[error("invalid suit {0}, expected 0 to 4")]
    InvalidSuit(u8),
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::CardError;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            CardError::InvalidRank(14).to_string(),
            "invalid rank 14, expected 1 to 13"
        );
        assert_eq!(
            CardError::InvalidSuit(7).to_string(),
            "invalid suit 7, expected 0 to 4"
        );
    }
}
