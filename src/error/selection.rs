//! Errors raised when a table selection cannot be resolved to an item.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("error parsing rank [{value}]: {message}")]
    UnparsableRank { value: String, message: String },

    #[error("item not found (rank {rank})")]
    UnknownRank { rank: u32 },

    #[error("no row selected")]
    NothingSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_rank_includes_offending_value() {
        let err = SelectionError::UnparsableRank {
            value: "abc".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("[abc]"));
    }

    #[test]
    fn test_unknown_rank_message() {
        let err = SelectionError::UnknownRank { rank: 7 };
        assert!(err.to_string().starts_with("item not found"));
    }
}
