//! FieldList / Connection / Vary のプロパティテスト

use pbt::{comment, field_value, lowercase_token, token};
use proptest::prelude::*;
use shiguredo_field_list::connection::Connection;
use shiguredo_field_list::vary::Vary;
use shiguredo_field_list::{FieldList, FieldListError, FieldListLimits, canonical_items};

// ========================================
// FieldListLimits
// ========================================

#[test]
fn field_list_limits_default_values() {
    let limits = FieldListLimits::default();

    assert_eq!(limits.max_items, 64);
    assert_eq!(limits.max_item_size, 8 * 1024); // 8KB
}

#[test]
fn field_list_limits_unlimited_values() {
    let limits = FieldListLimits::unlimited();

    assert_eq!(limits.max_items, usize::MAX);
    assert_eq!(limits.max_item_size, usize::MAX);
}

// 要素数の制限: 超えたときだけ TooManyItems
proptest! {
    #[test]
    fn prop_max_items(tokens in proptest::collection::vec(token(), 1..20), max_items in 1usize..20) {
        let line = tokens.join(", ");
        let limits = FieldListLimits { max_items, ..FieldListLimits::default() };
        let result = FieldList::parse_with_limits(&line, &limits);
        if tokens.len() <= max_items {
            prop_assert_eq!(result.unwrap().len(), tokens.len());
        } else {
            prop_assert_eq!(
                result,
                Err(FieldListError::TooManyItems { count: max_items + 1, limit: max_items })
            );
        }
    }
}

// 要素長の制限: 超えたときだけ ItemTooLong
proptest! {
    #[test]
    fn prop_max_item_size(item in "[a-z]{1,32}", max_item_size in 1usize..32) {
        let limits = FieldListLimits { max_item_size, ..FieldListLimits::default() };
        let result = FieldList::parse_with_limits(&item, &limits);
        if item.len() <= max_item_size {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(
                result,
                Err(FieldListError::ItemTooLong { size: item.len(), limit: max_item_size })
            );
        }
    }
}

// ========================================
// FieldList
// ========================================

// 要素は canonical_items と同じ
proptest! {
    #[test]
    fn prop_field_list_items((value, _items) in field_value()) {
        let list = FieldList::parse(&value).unwrap();
        let expected: Vec<String> = canonical_items(&value).collect();
        prop_assert_eq!(list.items(), expected.as_slice());
    }
}

// Display したものを再パースすると同じリスト
proptest! {
    #[test]
    fn prop_field_list_roundtrip((value, _items) in field_value()) {
        let list = FieldList::parse(&value).unwrap();
        let reparsed = FieldList::parse(&list.to_string()).unwrap();
        prop_assert_eq!(list, reparsed);
    }
}

// 生成した要素はすべて contains で見つかる
proptest! {
    #[test]
    fn prop_field_list_contains((value, items) in field_value()) {
        let list = FieldList::parse(&value).unwrap();
        for item in &items {
            prop_assert!(list.contains(item));
        }
    }
}

// ========================================
// Connection / Vary
// ========================================

proptest! {
    #[test]
    fn prop_connection_options(options in proptest::collection::vec(token(), 1..8), close in any::<bool>()) {
        let mut options = options;
        if close {
            options.push("Close".to_string());
        }
        let line = options.join(" , ");
        let connection = Connection::parse(&line).unwrap();
        prop_assert_eq!(connection.options().len(), options.len());
        for option in &options {
            prop_assert!(connection.has_option(option));
        }
        if close {
            prop_assert!(connection.is_close());
            prop_assert!(Connection::line_has(&line, "close"));
        }
        let reparsed = Connection::parse(&connection.to_string()).unwrap();
        prop_assert_eq!(connection, reparsed);
    }
}

// コメント付きの接続オプションでも、パース結果と確保しない照合が一致する
proptest! {
    #[test]
    fn prop_connection_agrees_with_line_has(
        options in proptest::collection::vec(
            (token(), proptest::option::of(comment()), any::<bool>()),
            1..6,
        ),
    ) {
        let line = options
            .iter()
            .map(|(option, comment, before)| match comment {
                Some(comment) if *before => format!("{} {}", comment, option),
                Some(comment) => format!("{}{}", option, comment),
                None => option.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        let connection = Connection::parse(&line).unwrap();
        prop_assert_eq!(connection.options().len(), options.len());
        for (option, _, _) in &options {
            let option = option.to_ascii_lowercase();
            prop_assert!(connection.has_option(&option));
            prop_assert!(Connection::line_has(&line, &option));
        }
        prop_assert_eq!(connection.is_close(), Connection::line_has(&line, "close"));
    }
}

proptest! {
    #[test]
    fn prop_vary_roundtrip(fields in proptest::collection::vec(lowercase_token(), 1..8)) {
        let line = fields.join(", ");
        let vary = Vary::parse(&line).unwrap();
        for field in &fields {
            prop_assert!(vary.varies_on(field));
            prop_assert!(vary.varies_on(&field.to_ascii_uppercase()));
        }
        let reparsed = Vary::parse(&vary.to_string()).unwrap();
        prop_assert_eq!(vary, reparsed);
    }
}
