#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_field_list::{FieldCursor, canonicalize, contains_item};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut cursor = FieldCursor::new(s);
        let mut last = 0;
        while let Some(item) = cursor.next_item() {
            assert!(!item.is_empty());
            assert!(item.start() >= last);
            assert_eq!(&s[item.span()], item.as_str());
            last = cursor.position();

            let canonical = item.canonical();
            assert_eq!(canonicalize(&canonical).as_deref(), Some(canonical.as_str()));
            assert!(contains_item(s, &canonical));

            let elided = item.canonical_without_comments();
            if !elided.is_empty() {
                assert_eq!(canonicalize(&elided).as_deref(), Some(elided.as_str()));
                assert!(contains_item(s, &elided));
            }
        }
        assert!(cursor.is_empty());
    }
});
