//! # shiguredo_field_list
//!
//! 依存なしの HTTP ヘッダーフィールド値 リスト字句解析ライブラリ
//!
//! ## 特徴
//!
//! - **依存なし**: 標準ライブラリのみ使用
//! - **確保しない照合**: パースツリーや途中の文字列を作らずにリスト要素を照合
//! - **RFC 2068 準拠**: quoted-string、quoted-pair、入れ子のコメントを区切りと誤認しない
//!
//! ## 使い方
//!
//! ### リスト要素の走査
//!
//! ```rust
//! use shiguredo_field_list::FieldCursor;
//!
//! let mut cursor = FieldCursor::new(" Foo ; Bar=Baz , \"a,b\" (x, y) ");
//! assert_eq!(cursor.next_canonical_item().as_deref(), Some("foo;bar=baz"));
//! assert_eq!(cursor.next_canonical_item().as_deref(), Some("\"a,b\" (x, y)"));
//! assert_eq!(cursor.next_canonical_item(), None);
//! ```
//!
//! ### 照合
//!
//! ```rust
//! use shiguredo_field_list::{contains_item, has_token};
//!
//! // 正規形との完全一致 (前方一致は不可)
//! assert!(contains_item("Keep-Alive, Close", "close"));
//! assert!(!contains_item("text/html", "text"));
//!
//! // tspecials で区切られたトークンの検索
//! assert!(has_token("close, Keep-Alive", "close"));
//! ```

pub mod char_class;
pub mod connection;
mod cursor;
mod error;
mod field_list;
mod lexer;
mod limits;
mod list_item;
mod token;
pub mod vary;

pub use cursor::FieldCursor;
pub use error::FieldListError;
pub use field_list::FieldList;
pub use limits::FieldListLimits;
pub use list_item::{
    CanonicalItems, ListItem, ListItems, canonical_items, canonicalize, contains_item, list_items,
};
pub use token::{has_token, line_ends_with_token, media_type_to_lowercase, strip_parameters};
