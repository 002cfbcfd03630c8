//! Vary ヘッダーパース (RFC 9110 Section 12.5.5)
//!
//! ## 概要
//!
//! Vary ヘッダーのフィールド名を正規形 (小文字) で保持します。
//! キャッシュキーを作る側は [`Vary::varies_on`] でリクエストヘッダーを選びます。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_field_list::vary::Vary;
//!
//! let vary = Vary::parse("Accept-Encoding, User-Agent").unwrap();
//! assert_eq!(vary.fields().len(), 2);
//! assert!(vary.varies_on("accept-encoding"));
//! assert!(!vary.varies_on("Accept"));
//! ```

use core::fmt;

use crate::char_class::is_token;
use crate::error::FieldListError;
use crate::field_list::FieldList;
use crate::list_item::strip_comments;

/// Vary パースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaryError {
    /// 空の入力
    Empty,
    /// 不正な形式
    InvalidFormat(FieldListError),
    /// 不正なフィールド名トークン
    InvalidFieldName,
}

impl fmt::Display for VaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaryError::Empty => write!(f, "empty Vary header"),
            VaryError::InvalidFormat(e) => write!(f, "invalid Vary header format: {}", e),
            VaryError::InvalidFieldName => write!(f, "invalid Vary header field name"),
        }
    }
}

impl std::error::Error for VaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VaryError::InvalidFormat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldListError> for VaryError {
    fn from(e: FieldListError) -> Self {
        match e {
            FieldListError::Empty => VaryError::Empty,
            e => VaryError::InvalidFormat(e),
        }
    }
}

/// Vary ヘッダー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vary {
    any: bool,
    fields: Vec<String>,
}

impl Vary {
    /// Vary ヘッダーをパース
    pub fn parse(input: &str) -> Result<Self, VaryError> {
        let list = FieldList::parse(input)?;

        let mut any = false;
        let mut fields = Vec::new();
        for item in list.items() {
            let field = strip_comments(item);
            if field.is_empty() {
                continue;
            }
            if field == "*" {
                any = true;
                continue;
            }
            if !is_token(&field) {
                return Err(VaryError::InvalidFieldName);
            }
            if !fields.contains(&field) {
                fields.push(field);
            }
        }

        if !any && fields.is_empty() {
            return Err(VaryError::Empty);
        }
        Ok(Vary { any, fields })
    }

    /// Vary が "*" を含むかどうか
    pub fn is_any(&self) -> bool {
        self.any
    }

    /// フィールド名 (小文字、重複なし)
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// 指定したリクエストヘッダーでレスポンスが変わるかどうか
    ///
    /// "*" の場合は常に `true` を返します。
    pub fn varies_on(&self, field_name: &str) -> bool {
        self.any
            || self
                .fields
                .iter()
                .any(|name| name.eq_ignore_ascii_case(field_name))
    }
}

impl fmt::Display for Vary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.any {
            return write!(f, "*");
        }
        write!(f, "{}", self.fields.join(", "))
    }
}
