#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_field_list::connection::Connection;
use shiguredo_field_list::vary::Vary;
use shiguredo_field_list::{FieldList, FieldListLimits};

#[derive(Arbitrary, Debug)]
struct FuzzFieldList {
    max_items: u8,
    max_item_size: u16,
    value: String,
}

fuzz_target!(|input: FuzzFieldList| {
    let limits = FieldListLimits {
        max_items: input.max_items as usize,
        max_item_size: input.max_item_size as usize,
    };

    if let Ok(list) = FieldList::parse_with_limits(&input.value, &limits) {
        assert!(list.len() <= limits.max_items);
        for item in list.items() {
            assert!(list.contains(item));
        }
        let displayed = list.to_string();
        let _ = FieldList::parse(&displayed);
    }

    if let Ok(connection) = Connection::parse(&input.value) {
        assert_eq!(
            connection.is_close(),
            Connection::line_has(&input.value, "close")
        );
        let _ = connection.is_keep_alive();
        let reparsed = Connection::parse(&connection.to_string()).expect("displayed Connection must parse");
        assert_eq!(connection, reparsed);
    }

    if let Ok(vary) = Vary::parse(&input.value) {
        let displayed = vary.to_string();
        if let Ok(reparsed) = Vary::parse(&displayed) {
            assert_eq!(vary.is_any(), reparsed.is_any());
            assert_eq!(vary.fields(), reparsed.fields());
        }
    }
});
