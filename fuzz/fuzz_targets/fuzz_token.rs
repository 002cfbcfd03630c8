#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_field_list::{
    FieldCursor, has_token, line_ends_with_token, media_type_to_lowercase, strip_parameters,
};

#[derive(Arbitrary, Debug)]
struct FuzzToken {
    line: String,
    token: String,
    accept_whitespace: bool,
}

fuzz_target!(|input: FuzzToken| {
    let mut cursor = FieldCursor::new(&input.line);
    while !cursor.is_empty() {
        let before = cursor.position();
        let token = cursor.next_token(input.accept_whitespace);
        assert!(input.line.contains(token));
        let skipped = cursor.skip_byte(b';') || cursor.skip_byte(b',');
        if !skipped && cursor.position() == before {
            break;
        }
    }

    let found = has_token(&input.line, &input.token);
    if input.token.is_empty() {
        assert!(!found);
    }
    if line_ends_with_token(&input.line, &input.token) {
        assert!(
            input
                .line
                .to_ascii_lowercase()
                .ends_with(&input.token.to_ascii_lowercase())
        );
    }

    let stripped = strip_parameters(&input.line);
    assert!(!stripped.contains(';'));
    let _ = media_type_to_lowercase(&input.line);
});
