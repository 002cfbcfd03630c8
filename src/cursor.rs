//! フィールド値の読み取り位置
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_field_list::FieldCursor;
//!
//! let mut cursor = FieldCursor::new("Keep-Alive, Upgrade");
//! assert_eq!(cursor.next_item().unwrap().as_str(), "Keep-Alive");
//! assert_eq!(cursor.next_canonical_item().as_deref(), Some("upgrade"));
//! assert!(cursor.next_item().is_none());
//! ```

use crate::list_item::{self, ListItem};
use crate::token;

/// ヘッダーフィールド値と、その中の読み取り位置
///
/// 入力は変更せず、各操作は読み取り位置だけを進めます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    /// 先頭を指すカーソルを作成
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// 元の入力
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// 現在のバイト位置
    pub fn position(&self) -> usize {
        self.pos
    }

    /// まだ読んでいない部分
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or("")
    }

    /// 読み終わったかどうか
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// 次のリスト要素の範囲を取り出す
    ///
    /// 先頭の `,` と空白を読み飛ばし、quoted-string / コメント / quoted-pair の外にある
    /// `,` までを 1 要素とします。要素がなければ `None` を返します。
    /// いずれの場合もカーソルは要素の後ろの `,` と空白の先まで進みます。
    pub fn next_item(&mut self) -> Option<ListItem<'a>> {
        let (item, next) = list_item::size_item(self.input, self.pos);
        self.pos = next;
        item
    }

    /// 次のリスト要素を正規形 (小文字化、空白の整理) にして取り出す
    pub fn next_canonical_item(&mut self) -> Option<String> {
        self.next_item().map(|item| item.canonical())
    }

    /// 次のトークンを取り出す
    ///
    /// `;` と `,` で区切り、`accept_whitespace` が `false` なら空白でも区切ります。
    /// quoted-string の中の区切り文字は無視します。残りがなければ空文字列を返します。
    pub fn next_token(&mut self, accept_whitespace: bool) -> &'a str {
        let (token, next) = token::scan_token(self.input, self.pos, accept_whitespace);
        self.pos = next;
        token
    }

    /// 次の文字が `byte` なら読み飛ばす
    ///
    /// [`next_token`](Self::next_token) の後で区切り文字を確認するのに使います。
    pub fn skip_byte(&mut self, byte: u8) -> bool {
        if self.input.as_bytes().get(self.pos) == Some(&byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}
