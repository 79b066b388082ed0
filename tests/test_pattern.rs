use ftypes_rust::prelude::*;

fn bytes_of(text: &[u8]) -> FieldValue {
    let mut value = FieldValue::new(FieldKind::Bytes);
    value.set_bytes(text.to_vec());
    value
}

#[test]
fn test_compile_and_match() {
    let pattern = CompiledPattern::compile("^HTTP/1\\.[01] [0-9]{3}").unwrap();
    assert_eq!(pattern.pattern(), "^HTTP/1\\.[01] [0-9]{3}");
    assert!(pattern.matches(b"HTTP/1.1 200 OK"));
    assert!(pattern.matches(b"http/1.0 404 Not Found"));
    assert!(!pattern.matches(b"HTTP/2 200"));
}

#[test]
fn test_invalid_pattern_is_error() {
    assert!(CompiledPattern::compile("(unclosed").is_err());
    assert!(CompiledPattern::compile("[z-a]").is_err());
}

#[test]
fn test_non_utf8_subject() {
    let pattern = CompiledPattern::compile("ab.d").unwrap();
    assert!(pattern.matches(&[0xfe, b'a', b'b', 0xff, b'd']));
    assert!(!pattern.matches(&[b'a', b'b', b'\n', b'd']));
}

#[test]
fn test_field_value_matches() {
    let value = bytes_of(b"GET /index.html HTTP/1.1");
    let hit = CompiledPattern::compile("index\\.HTML").unwrap();
    let miss = CompiledPattern::compile("^post").unwrap();
    assert!(value.matches(&hit));
    assert!(!value.matches(&miss));
}

#[test]
fn test_matches_after_slice() {
    let value = bytes_of(b"xxGETxx");
    let sliced = value.slice(&"2:3".parse().unwrap()).unwrap();
    let pattern = CompiledPattern::compile("^get$").unwrap();
    assert!(sliced.matches(&pattern));
}

#[test]
fn test_pattern_is_reusable_across_threads() {
    let pattern = CompiledPattern::compile("needle").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pattern = pattern.clone();
            std::thread::spawn(move || {
                let subject = format!("hay{}NEEDLE{}", i, i);
                pattern.matches(subject.as_bytes())
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
#[should_panic(expected = "has no matches test")]
fn test_matches_on_integer_panics() {
    let value = FieldValue::from_literal(FieldKind::UInt8, "1").unwrap();
    let pattern = CompiledPattern::compile("1").unwrap();
    value.matches(&pattern);
}
