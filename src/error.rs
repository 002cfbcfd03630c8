use std::fmt;

/// リストパースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldListError {
    /// 要素が 1 つもない
    Empty,
    /// 要素数超過
    TooManyItems { count: usize, limit: usize },
    /// 要素が長すぎる
    ItemTooLong { size: usize, limit: usize },
}

impl fmt::Display for FieldListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldListError::Empty => write!(f, "empty field list"),
            FieldListError::TooManyItems { count, limit } => {
                write!(f, "too many list items: {} > {}", count, limit)
            }
            FieldListError::ItemTooLong { size, limit } => {
                write!(f, "list item too long: {} > {}", size, limit)
            }
        }
    }
}

impl std::error::Error for FieldListError {}
