//! カンマ区切りリスト要素の走査、正規化、照合 (RFC 2068 Section 2.1)
//!
//! ## 概要
//!
//! `Connection` / `TE` / `Vary` / `Allow` のような `#rule` 形式のフィールド値を
//! パースツリーを作らずに扱います。
//!
//! - 要素は quoted-string、コメント、quoted-pair の外にある `,` で区切る
//! - 正規形では quoted-string とコメントの外を小文字にし、空白を 1 つにまとめ、
//!   `=` `/` `;` の前後の空白を取り除く
//! - 照合は正規形と 1 バイトずつ比較し、途中の文字列を確保しない
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_field_list::{canonical_items, contains_item};
//!
//! let items: Vec<String> = canonical_items(" Foo ; Bar=Baz , \"a,b\"").collect();
//! assert_eq!(items, ["foo;bar=baz", "\"a,b\""]);
//!
//! assert!(contains_item("Keep-Alive, Upgrade", "upgrade"));
//! assert!(!contains_item("text/html", "text"));
//! ```

use core::fmt;
use core::ops::Range;

use crate::cursor::FieldCursor;
use crate::lexer::{self, Collect, Compare, Discard, Elide};

/// リスト要素の範囲
///
/// 先頭の空白と、quoted-string / コメントの外にある末尾の空白は含みません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    value: &'a str,
    start: usize,
}

impl<'a> ListItem<'a> {
    /// 要素の文字列 (元の入力の一部)
    pub fn as_str(&self) -> &'a str {
        self.value
    }

    /// 入力中の開始バイト位置
    pub fn start(&self) -> usize {
        self.start
    }

    /// バイト長
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// 空かどうか (走査で得た要素は常に空ではない)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// 入力中の範囲
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.value.len()
    }

    /// 正規形
    pub fn canonical(&self) -> String {
        let mut sink = Collect::with_capacity(self.value.len());
        lexer::scan_item(self.value.as_bytes(), 0, &mut sink);
        sink.into_string()
    }

    /// コメントを取り除いた正規形
    ///
    /// 照合で使うコメントを除いた形と同じものです。コメントだけの要素では空文字列になります。
    pub fn canonical_without_comments(&self) -> String {
        let mut sink = Elide::new(Collect::with_capacity(self.value.len()));
        lexer::scan_item(self.value.as_bytes(), 0, &mut sink);
        sink.into_inner().into_string()
    }

    /// 正規形が `canonical_target` と一致するかどうか
    ///
    /// コメントを取り除いた形での一致も認めます。
    pub fn matches(&self, canonical_target: &str) -> bool {
        !canonical_target.is_empty() && {
            let mut sink = Compare::new(canonical_target.as_bytes());
            lexer::scan_item(self.value.as_bytes(), 0, &mut sink);
            sink.matched()
        }
    }
}

impl fmt::Display for ListItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

/// `pos` から次の要素の範囲を求め、要素と次の読み取り位置を返す
pub(crate) fn size_item(input: &str, pos: usize) -> (Option<ListItem<'_>>, usize) {
    let bytes = input.as_bytes();
    let start = lexer::skip_separators(bytes, pos);
    let end = lexer::scan_item(bytes, start, &mut Discard);
    let next = lexer::skip_separators(bytes, end.end);

    if end.significant == start {
        return (None, next);
    }
    // 区切りはすべて ASCII なので文字境界に一致する
    let item = input.get(start..end.significant).map(|value| ListItem { value, start });
    (item, next)
}

/// リスト要素を順に返すイテレーター
#[derive(Debug, Clone)]
pub struct ListItems<'a> {
    cursor: FieldCursor<'a>,
}

impl<'a> Iterator for ListItems<'a> {
    type Item = ListItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_item()
    }
}

/// 正規化したリスト要素を順に返すイテレーター
#[derive(Debug, Clone)]
pub struct CanonicalItems<'a> {
    cursor: FieldCursor<'a>,
}

impl Iterator for CanonicalItems<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_canonical_item()
    }
}

/// フィールド値のリスト要素を列挙
pub fn list_items(line: &str) -> ListItems<'_> {
    ListItems {
        cursor: FieldCursor::new(line),
    }
}

/// フィールド値のリスト要素を正規形で列挙
pub fn canonical_items(line: &str) -> CanonicalItems<'_> {
    CanonicalItems {
        cursor: FieldCursor::new(line),
    }
}

/// 最初のリスト要素の正規形
///
/// 呼び出し側で照合対象を正規形にそろえるのに使います。
pub fn canonicalize(item: &str) -> Option<String> {
    FieldCursor::new(item).next_canonical_item()
}

/// 最初のリスト要素からコメントを取り除いた正規形 (要素がなければ空文字列)
pub(crate) fn strip_comments(item: &str) -> String {
    FieldCursor::new(item)
        .next_item()
        .map(|item| item.canonical_without_comments())
        .unwrap_or_default()
}

/// フィールド値に正規形 `canonical_target` と一致する要素があるかどうか
///
/// `canonical_target` は [`canonicalize`] と同じ正規形 (小文字、空白整理済み) で渡します。
/// 前方一致だけの要素は一致とみなしません。コメントは照合に影響せず、
/// コメントを取り除いた形と一致する要素も一致とみなします。
pub fn contains_item(line: &str, canonical_target: &str) -> bool {
    if canonical_target.is_empty() {
        return false;
    }

    let bytes = line.as_bytes();
    let target = canonical_target.as_bytes();
    let mut pos = lexer::skip_separators(bytes, 0);

    while pos < bytes.len() {
        // 不一致が確定しても要素の終わりまでは走査して次の要素の位置を求める
        let mut sink = Compare::new(target);
        let end = lexer::scan_item(bytes, pos, &mut sink);
        if sink.matched() {
            return true;
        }
        pos = lexer::skip_separators(bytes, end.end);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(line: &str) -> Vec<&str> {
        list_items(line).map(|item| item.as_str()).collect()
    }

    fn canonical(line: &str) -> Vec<String> {
        canonical_items(line).collect()
    }

    #[test]
    fn boundaries() {
        assert_eq!(items("a, b ,c"), ["a", "b", "c"]);
        assert_eq!(items(",,, a ,,"), ["a"]);
        assert_eq!(items("\"a,b\", c"), ["\"a,b\"", "c"]);
        assert_eq!(items("a (x, y) b, c"), ["a (x, y) b", "c"]);
        assert_eq!(items("a\\,b, c"), ["a\\,b", "c"]);
        assert!(items("").is_empty());
        assert!(items(" \t, ,").is_empty());
    }

    #[test]
    fn item_span() {
        let line = "  Foo , Bar";
        let item = list_items(line).nth(1).unwrap();
        assert_eq!(item.start(), 8);
        assert_eq!(item.len(), 3);
        assert_eq!(&line[item.span()], "Bar");
    }

    #[test]
    fn unterminated_quoted_string() {
        // 閉じられていない quoted-string は入力の終わりまで続く
        assert_eq!(items("a, \"b, c  "), ["a", "\"b, c  "]);
        assert_eq!(canonical("a, \"B, C  "), ["a", "\"B, C  "]);
    }

    #[test]
    fn unterminated_comment() {
        assert_eq!(items("a, (B, (c) d"), ["a", "(B, (c) d"]);
        assert_eq!(canonical("(B, (C) D"), ["(B, (C) D"]);
    }

    #[test]
    fn dangling_backslash() {
        assert_eq!(items("a, b\\"), ["a", "b\\"]);
        assert_eq!(canonical("a, B\\"), ["a", "b\\"]);
    }

    #[test]
    fn normalization() {
        assert_eq!(canonical(" Foo ; Bar=Baz "), ["foo;bar=baz"]);
        assert_eq!(canonical("A  B\tC"), ["a b c"]);
        assert_eq!(canonical("Text / HTML"), ["text/html"]);
        assert_eq!(canonical("a \"Q  \\\"R\""), ["a \"Q  \\\"R\""]);
        assert_eq!(canonical("X (Com  MENT) Y"), ["x (Com  MENT) y"]);
        assert_eq!(canonical("(c) )"), ["(c))"]);
    }

    #[test]
    fn canonicalize_is_idempotent() {
        for line in [" Foo ; Bar=Baz ", "A (B  c) \"D  e\"", "x = \"y\"", "a\\ B"] {
            let once = canonicalize(line).unwrap();
            let twice = canonicalize(&once).unwrap();
            assert_eq!(once, twice, "{:?}", line);
        }
    }

    #[test]
    fn canonicalize_keeps_multibyte() {
        assert_eq!(canonicalize("\u{c9}T\u{c9}").as_deref(), Some("\u{c9}t\u{c9}"));
        assert_eq!(canonicalize("\\\u{e9}").as_deref(), Some("\\\u{e9}"));
    }

    #[test]
    fn contains() {
        assert!(contains_item("close", "close"));
        assert!(contains_item("Keep-Alive, CLOSE", "close"));
        assert!(contains_item("foo, text / html ; level=1", "text/html;level=1"));
        assert!(!contains_item("text/html", "text"));
        assert!(!contains_item("text", "text/html"));
        assert!(!contains_item("", "close"));
        assert!(!contains_item("close", ""));
        assert!(!contains_item("\"close\"", "close"));
        assert!(contains_item("\"a,b\", c", "\"a,b\""));
    }

    #[test]
    fn contains_through_comments() {
        assert!(contains_item("a, (ignored, still) b", "b"));
        assert!(contains_item("a, (ignored, still) b", "(ignored, still) b"));
        assert!(!contains_item("a, (ignored, still) b", "still) b"));
        assert!(!contains_item("a, (ignored, still) b", "ignored"));
        assert!(contains_item("gzip (fast) , br", "gzip"));
    }

    #[test]
    fn contains_through_comments_next_to_separators() {
        assert!(contains_item("gzip (fast);q=1", "gzip;q=1"));
        assert!(contains_item("br, text/html; (note) level=1", "text/html;level=1"));
        assert!(contains_item("a/(x)b", "a/b"));
        // 正規形にならない対象とは一致しない
        assert!(!contains_item("gzip (fast);q=1", "gzip ;q=1"));
        assert!(!contains_item("text/html; (note) level=1", "text/html; level=1"));
        assert_eq!(canonicalize("gzip ;q=1").as_deref(), Some("gzip;q=1"));
    }

    #[test]
    fn contains_state_resets_between_items() {
        // 末尾の空白で保留された空白が次の要素に持ち越されない
        assert!(contains_item("a , ab", "ab"));
        assert!(contains_item("x\t, y", "y"));
    }

    #[test]
    fn list_item_matches() {
        let item = list_items("Foo (bar)").next().unwrap();
        assert!(item.matches("foo (bar)"));
        assert!(item.matches("foo"));
        assert!(!item.matches("fo"));
        assert!(!item.matches(""));
        assert_eq!(item.to_string(), "Foo (bar)");
        assert_eq!(item.canonical(), "foo (bar)");
        assert_eq!(item.canonical_without_comments(), "foo");

        let item = list_items("(only)").next().unwrap();
        assert_eq!(item.canonical_without_comments(), "");
    }
}
