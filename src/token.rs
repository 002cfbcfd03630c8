//! トークンの取り出しと検索 (RFC 2068 Section 2.2)
//!
//! ## 概要
//!
//! - [`FieldCursor::next_token`](crate::FieldCursor::next_token): `;` / `,` / 空白で区切られたトークンを 1 つ取り出す
//! - [`has_token`]: tspecials と制御文字で区切られたトークンを大文字小文字を区別せずに探す
//! - [`line_ends_with_token`]: 末尾のトークンを調べる (`Transfer-Encoding` の最後が `chunked` か等)
//! - [`strip_parameters`] / [`media_type_to_lowercase`]: メディアタイプのパラメータ処理
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_field_list::{has_token, line_ends_with_token};
//!
//! assert!(has_token("close, Keep-Alive", "keep-alive"));
//! assert!(!has_token("notclose", "close"));
//! assert!(line_ends_with_token("gzip, chunked", "chunked"));
//! ```

use crate::char_class::{is_space, is_token_stop};

/// `pos` から 1 トークンを取り出し、トークンと次の読み取り位置を返す
///
/// コメントはすでに取り除かれている前提で、quoted-string だけを読み飛ばします。
pub(crate) fn scan_token(input: &str, pos: usize, accept_whitespace: bool) -> (&str, usize) {
    let bytes = input.as_bytes();
    let start = skip_spaces(bytes, pos);
    let mut pos = start;

    while let Some(&b) = bytes.get(pos) {
        if b == b';' || b == b',' || (!accept_whitespace && is_space(b)) {
            break;
        }
        pos += 1;
        if b == b'"' {
            // 閉じる '"' まで (閉じられていなければ終わりまで) をそのまま含める
            while let Some(&c) = bytes.get(pos) {
                pos += 1;
                if c == b'"' {
                    break;
                }
            }
        }
    }

    let token = input.get(start..pos).unwrap_or("");
    (token, skip_spaces(bytes, pos))
}

fn skip_spaces(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(|&b| is_space(b)) {
        pos += 1;
    }
    pos
}

/// `line` に `token` と一致するトークンがあるかどうか
///
/// トークンは tspecials と制御文字で区切られた最長の並びで、
/// ASCII の大文字小文字を区別せずに全体が一致するものだけを一致とみなします。
pub fn has_token(line: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let bytes = line.as_bytes();
    let mut pos = 0;
    loop {
        while bytes.get(pos).is_some_and(|&b| is_token_stop(b)) {
            pos += 1;
        }
        if pos >= bytes.len() {
            return false;
        }

        let start = pos;
        while bytes.get(pos).is_some_and(|&b| !is_token_stop(b)) {
            pos += 1;
        }
        if bytes[start..pos].eq_ignore_ascii_case(token.as_bytes()) {
            return true;
        }
    }
}

/// `line` が `token` で終わるかどうか
///
/// 一致した部分は `line` 全体であるか、直前が空白か `,` でなければなりません。
pub fn line_ends_with_token(line: &str, token: &str) -> bool {
    let bytes = line.as_bytes();
    let token = token.as_bytes();
    if token.is_empty() || token.len() > bytes.len() {
        return false;
    }

    let index = bytes.len() - token.len();
    if index > 0 {
        let prev = bytes[index - 1];
        if !(is_space(prev) || prev == b',') {
            return false;
        }
    }
    bytes[index..].eq_ignore_ascii_case(token)
}

/// パラメータを取り除いたフィールド値
///
/// 最初の `;` より前を、末尾の空白を除いて返します。
///
/// ```rust
/// use shiguredo_field_list::strip_parameters;
///
/// assert_eq!(strip_parameters("text/html ; charset=utf-8"), "text/html");
/// assert_eq!(strip_parameters("text/plain"), "text/plain");
/// ```
pub fn strip_parameters(value: &str) -> &str {
    match value.split_once(';') {
        Some((head, _)) => head.trim_end_matches(|c: char| c.is_ascii() && is_space(c as u8)),
        None => value,
    }
}

/// メディアタイプ部分 (最初の `;` より前) だけを小文字にする
///
/// パラメータの値は大文字小文字を区別する場合があるためそのまま残します。
pub fn media_type_to_lowercase(value: &str) -> String {
    match value.split_once(';') {
        Some((head, params)) => format!("{};{}", head.to_ascii_lowercase(), params),
        None => value.to_ascii_lowercase(),
    }
}
