//! Connection ヘッダーパース (RFC 9110 Section 7.6.1)
//!
//! ## 概要
//!
//! Connection ヘッダーの接続オプションを正規形 (小文字) で保持します。
//! コメントは接続オプションに含めません (`close (legacy)` は `close`)。
//! `close` の検出のように 1 つのオプションだけを調べる場合は、
//! 文字列を確保しない [`Connection::line_has`] を使います。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_field_list::connection::Connection;
//!
//! let connection = Connection::parse("Keep-Alive, Upgrade").unwrap();
//! assert!(connection.is_keep_alive());
//! assert!(connection.has_option("upgrade"));
//! assert!(!connection.is_close());
//!
//! assert!(Connection::line_has("keep-alive, CLOSE", "close"));
//! ```

use core::fmt;

use crate::char_class::is_token;
use crate::error::FieldListError;
use crate::field_list::FieldList;
use crate::list_item::{contains_item, strip_comments};

/// Connection パースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// 空の入力
    Empty,
    /// 不正な形式
    InvalidFormat(FieldListError),
    /// 不正な接続オプション
    InvalidOption,
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::Empty => write!(f, "empty Connection header"),
            ConnectionError::InvalidFormat(e) => {
                write!(f, "invalid Connection header format: {}", e)
            }
            ConnectionError::InvalidOption => write!(f, "invalid Connection option"),
        }
    }
}

impl std::error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConnectionError::InvalidFormat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldListError> for ConnectionError {
    fn from(e: FieldListError) -> Self {
        match e {
            FieldListError::Empty => ConnectionError::Empty,
            e => ConnectionError::InvalidFormat(e),
        }
    }
}

/// Connection ヘッダー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    options: Vec<String>,
}

impl Connection {
    /// Connection ヘッダーをパース
    pub fn parse(input: &str) -> Result<Self, ConnectionError> {
        let list = FieldList::parse(input)?;

        let mut options = Vec::with_capacity(list.len());
        for item in list.items() {
            let option = strip_comments(item);
            // コメントだけの要素
            if option.is_empty() {
                continue;
            }
            if !is_token(&option) {
                return Err(ConnectionError::InvalidOption);
            }
            options.push(option);
        }

        if options.is_empty() {
            return Err(ConnectionError::Empty);
        }
        Ok(Connection { options })
    }

    /// フィールド値に接続オプション `option` が含まれるかどうか
    ///
    /// パースせずに照合するため、文字列を確保しません。
    /// `option` は小文字で渡します。パースに成功する値では
    /// [`Connection::has_option`] と同じ結果になります。
    pub fn line_has(line: &str, option: &str) -> bool {
        contains_item(line, option)
    }

    /// 接続オプション一覧 (小文字)
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// 指定した接続オプションが含まれるかどうか
    pub fn has_option(&self, option: &str) -> bool {
        self.options
            .iter()
            .any(|value| value.eq_ignore_ascii_case(option))
    }

    /// `close` を含むかどうか
    pub fn is_close(&self) -> bool {
        self.has_option("close")
    }

    /// `keep-alive` を含むかどうか
    pub fn is_keep_alive(&self) -> bool {
        self.has_option("keep-alive")
    }

    /// 転送時に取り除くべきヘッダー名かどうか
    ///
    /// Connection で指定されたフィールド名は hop-by-hop として扱います。
    pub fn is_hop_by_hop(&self, field_name: &str) -> bool {
        !matches!(
            field_name.to_ascii_lowercase().as_str(),
            "close" | "keep-alive"
        ) && self.has_option(field_name)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.options.join(", "))
    }
}
