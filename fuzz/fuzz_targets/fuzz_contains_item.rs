#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_field_list::{canonical_items, canonicalize, contains_item};

#[derive(Arbitrary, Debug)]
struct FuzzMatch {
    line: String,
    target: String,
}

fuzz_target!(|input: FuzzMatch| {
    let found = contains_item(&input.line, &input.target);

    // 正規形と完全に一致する要素があれば必ず一致する
    if canonical_items(&input.line).any(|item| item == input.target) {
        assert!(found);
    }
    if input.target.is_empty() {
        assert!(!found);
    }

    if let Some(target) = canonicalize(&input.target) {
        let _ = contains_item(&input.line, &target);
    }
});
