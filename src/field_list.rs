//! 正規化済みリスト (RFC 9110 Section 5.6.1)
//!
//! ## 概要
//!
//! フィールド値のリスト要素をすべて正規形にして保持します。
//! 要素数と要素長は [`FieldListLimits`] で制限できます。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_field_list::FieldList;
//!
//! let list = FieldList::parse("GET, Head , (legacy) PUT").unwrap();
//! assert_eq!(list.items(), ["get", "head", "(legacy) put"]);
//! assert!(list.contains("HEAD"));
//! assert!(list.contains("put"));
//! assert_eq!(list.to_string(), "get, head, (legacy) put");
//! ```

use core::fmt;

use crate::cursor::FieldCursor;
use crate::error::FieldListError;
use crate::limits::FieldListLimits;
use crate::list_item::{self, canonicalize};

/// 正規化済みリスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList {
    items: Vec<String>,
}

impl FieldList {
    /// デフォルトの制限でパース
    pub fn parse(input: &str) -> Result<Self, FieldListError> {
        Self::parse_with_limits(input, &FieldListLimits::default())
    }

    /// 制限を指定してパース
    pub fn parse_with_limits(
        input: &str,
        limits: &FieldListLimits,
    ) -> Result<Self, FieldListError> {
        let mut cursor = FieldCursor::new(input);
        let mut items = Vec::new();

        while let Some(item) = cursor.next_item() {
            if items.len() >= limits.max_items {
                return Err(FieldListError::TooManyItems {
                    count: items.len() + 1,
                    limit: limits.max_items,
                });
            }
            if item.len() > limits.max_item_size {
                return Err(FieldListError::ItemTooLong {
                    size: item.len(),
                    limit: limits.max_item_size,
                });
            }
            items.push(item.canonical());
        }

        if items.is_empty() {
            return Err(FieldListError::Empty);
        }
        Ok(FieldList { items })
    }

    /// 正規形の要素一覧
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// 要素数
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 空かどうか (パースに成功したリストは常に空ではない)
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `item` を正規形にして一致する要素があるかどうか
    ///
    /// コメントを取り除いた形での一致も認めます。
    pub fn contains(&self, item: &str) -> bool {
        let Some(target) = canonicalize(item) else {
            return false;
        };
        self.items
            .iter()
            .any(|value| list_item::contains_item(value, &target))
    }
}

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_items() {
        let list = FieldList::parse(" A=1 ;  B , \"Q,R\" ").unwrap();
        assert_eq!(list.items(), ["a=1;b", "\"Q,R\""]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
    }

    #[test]
    fn parse_empty() {
        assert_eq!(FieldList::parse(""), Err(FieldListError::Empty));
        assert_eq!(FieldList::parse(" , ,\t"), Err(FieldListError::Empty));
    }

    #[test]
    fn limits() {
        let limits = FieldListLimits {
            max_items: 2,
            max_item_size: 4,
        };
        assert!(FieldList::parse_with_limits("a, b", &limits).is_ok());
        assert_eq!(
            FieldList::parse_with_limits("a, b, c", &limits),
            Err(FieldListError::TooManyItems { count: 3, limit: 2 })
        );
        assert_eq!(
            FieldList::parse_with_limits("abcde", &limits),
            Err(FieldListError::ItemTooLong { size: 5, limit: 4 })
        );
        // 末尾の空白は要素長に含めない
        assert!(FieldList::parse_with_limits("abcd   ", &limits).is_ok());
    }

    #[test]
    fn unlimited() {
        let input = vec!["x"; 1000].join(",");
        assert!(FieldList::parse(&input).is_err());
        let list = FieldList::parse_with_limits(&input, &FieldListLimits::unlimited()).unwrap();
        assert_eq!(list.len(), 1000);
    }

    #[test]
    fn contains() {
        let list = FieldList::parse("Text/HTML; Level=1, gzip (fast)").unwrap();
        assert!(list.contains("text/html;level=1"));
        assert!(list.contains("TEXT/HTML ; LEVEL = 1"));
        assert!(list.contains("gzip"));
        assert!(list.contains("GZIP (fast)"));
        assert!(!list.contains("text/html"));
        assert!(!list.contains(""));
    }

    #[test]
    fn display_roundtrip() {
        let list = FieldList::parse("A,  B C , (x)").unwrap();
        let displayed = list.to_string();
        assert_eq!(displayed, "a, b c, (x)");
        assert_eq!(FieldList::parse(&displayed).unwrap(), list);
    }

    #[test]
    fn error_display() {
        assert_eq!(FieldListError::Empty.to_string(), "empty field list");
        assert_eq!(
            FieldListError::TooManyItems { count: 3, limit: 2 }.to_string(),
            "too many list items: 3 > 2"
        );
    }
}
