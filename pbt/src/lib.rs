//! PBT テスト共通ユーティリティ

use proptest::prelude::*;

// ========================================
// トークン生成 (RFC 9110 Section 5.6.2)
// ========================================

/// token: tchar の 1-12 文字
pub fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9!#$%&'*+.^_`|~-]{1,12}".prop_map(|s| s)
}

/// 小文字だけのトークン
pub fn lowercase_token() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,12}".prop_map(|s| s)
}

/// 省略可能な空白 (OWS)
pub fn ows() -> impl Strategy<Value = String> {
    "[ \t]{0,3}".prop_map(|s| s)
}

// ========================================
// quoted-string / コメント生成
// ========================================

/// quoted-string: 区切り文字と quoted-pair を含みうる
pub fn quoted_string() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            "[A-Za-z0-9 ,;=/()]{1,4}".prop_map(|s| s),
            Just("\\\"".to_string()),
            Just("\\\\".to_string()),
        ],
        0..4,
    )
    .prop_map(|parts| format!("\"{}\"", parts.concat()))
}

/// コメント: 1 段だけ入れ子になりうる
pub fn comment() -> impl Strategy<Value = String> {
    (
        "[A-Za-z0-9 ,;=]{0,8}",
        proptest::option::of("[A-Za-z0-9 ,]{0,6}"),
    )
        .prop_map(|(text, nested)| match nested {
            Some(nested) => format!("({} ({}))", text, nested),
            None => format!("({})", text),
        })
}

// ========================================
// リスト要素生成
// ========================================

/// パラメータ: OWS ";" OWS name "=" ( token / quoted-string )
pub fn parameter() -> impl Strategy<Value = String> {
    (
        ows(),
        ows(),
        token(),
        prop_oneof![token(), quoted_string()],
    )
        .prop_map(|(before, after, name, value)| format!("{};{}{}={}", before, after, name, value))
}

/// リスト要素: 先頭と末尾に空白を含まない
pub fn list_item() -> impl Strategy<Value = String> {
    (
        prop_oneof![token(), quoted_string()],
        proptest::collection::vec(parameter(), 0..3),
        proptest::option::of(comment()),
    )
        .prop_map(|(head, params, comment)| {
            let mut item = head;
            item.push_str(&params.concat());
            if let Some(comment) = comment {
                item.push(' ');
                item.push_str(&comment);
            }
            item
        })
}

/// コメントを含まないリスト要素
pub fn plain_list_item() -> impl Strategy<Value = String> {
    (token(), proptest::collection::vec(parameter(), 0..3))
        .prop_map(|(head, params)| format!("{}{}", head, params.concat()))
}

/// 要素の区切りの間に置くコメント (前後の空白は省略可能) と、コメントを除いた残り
fn comment_slot() -> impl Strategy<Value = (String, String)> {
    proptest::option::of((ows(), comment(), ows())).prop_map(|slot| match slot {
        Some((before, comment, after)) => (
            format!("{}{}{}", before, comment, after),
            format!("{}{}", before, after),
        ),
        None => (String::new(), String::new()),
    })
}

/// `/` `;` `=` の直前直後を含む任意の位置にコメントを置いたリスト要素と、
/// そこからコメントだけを取り除いた文字列の組
pub fn commented_list_item() -> impl Strategy<Value = (String, String)> {
    (
        token(),
        proptest::option::of(token()),
        proptest::collection::vec((token(), prop_oneof![token(), quoted_string()]), 0..3),
    )
        .prop_flat_map(|(head, subtype, params)| {
            let mut pieces = vec![head];
            if let Some(subtype) = subtype {
                pieces.push("/".to_string());
                pieces.push(subtype);
            }
            for (name, value) in params {
                pieces.extend([";".to_string(), name, "=".to_string(), value]);
            }
            let count = pieces.len() + 1;
            proptest::collection::vec(comment_slot(), count).prop_map(move |slots| {
                let mut with_comments = String::new();
                let mut without_comments = String::new();
                for (i, (slot_with, slot_without)) in slots.iter().enumerate() {
                    with_comments.push_str(slot_with);
                    without_comments.push_str(slot_without);
                    if let Some(piece) = pieces.get(i) {
                        with_comments.push_str(piece);
                        without_comments.push_str(piece);
                    }
                }
                (with_comments, without_comments)
            })
        })
}

/// 要素を OWS "," OWS でつなぐ (空要素を挟むこともある)
pub fn join_items(items: Vec<String>) -> impl Strategy<Value = String> {
    let count = items.len();
    (
        proptest::collection::vec((ows(), ows(), prop::bool::weighted(0.2)), count),
        ows(),
    )
        .prop_map(move |(separators, leading)| {
            let mut value = leading;
            for (i, (item, (before, after, empty))) in
                items.iter().zip(separators.iter()).enumerate()
            {
                if i > 0 {
                    value.push_str(before);
                    value.push(',');
                    if *empty {
                        value.push_str(" ,");
                    }
                    value.push_str(after);
                }
                value.push_str(item);
            }
            value
        })
}

/// フィールド値と、その要素 (空白を含まない) の組
pub fn field_value() -> impl Strategy<Value = (String, Vec<String>)> {
    proptest::collection::vec(list_item(), 1..6).prop_flat_map(|items| {
        join_items(items.clone()).prop_map(move |value| (value, items.clone()))
    })
}

/// コメントを含まないフィールド値と、その要素の組
pub fn plain_field_value() -> impl Strategy<Value = (String, Vec<String>)> {
    proptest::collection::vec(plain_list_item(), 1..6).prop_flat_map(|items| {
        join_items(items.clone()).prop_map(move |value| (value, items.clone()))
    })
}

/// コメントを区切りの隣に置いたフィールド値と、各要素からコメントを除いたものの組
pub fn commented_field_value() -> impl Strategy<Value = (String, Vec<String>)> {
    proptest::collection::vec(commented_list_item(), 1..5).prop_flat_map(|pairs| {
        let (with_comments, without_comments): (Vec<String>, Vec<String>) =
            pairs.into_iter().unzip();
        join_items(with_comments).prop_map(move |value| (value, without_comments.clone()))
    })
}
