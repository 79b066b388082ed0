use ftypes_rust::prelude::*;

const TEN_BYTES: &str = "00:11:22:33:44:55:66:77:88:99";

fn bytes(s: &str) -> FieldValue {
    FieldValue::from_literal(FieldKind::Bytes, s).unwrap()
}

fn slice(source: &str, range: &str) -> Result<FieldValue, SliceError> {
    let drange: DRange = range.parse().unwrap();
    bytes(source).slice(&drange)
}

fn sliced_text(source: &str, range: &str) -> String {
    slice(source, range).unwrap().to_string()
}

#[test]
fn test_single_node_forms() {
    assert_eq!(sliced_text(TEN_BYTES, "1:2"), "11:22");
    assert_eq!(sliced_text(TEN_BYTES, "-3:"), "77:88:99");
    assert_eq!(sliced_text(TEN_BYTES, "2-4"), "22:33:44");
    assert_eq!(sliced_text(TEN_BYTES, ":3"), "00:11:22");
    assert_eq!(sliced_text(TEN_BYTES, "9"), "99");
    assert_eq!(sliced_text(TEN_BYTES, "-4--2"), "66:77:88");
    assert_eq!(sliced_text(TEN_BYTES, ":"), "00");
}

#[test]
fn test_multiple_nodes_concatenate_in_order() {
    assert_eq!(sliced_text(TEN_BYTES, "0:2,-1"), "00:11:99");
    assert_eq!(sliced_text(TEN_BYTES, "8:,0"), "88:99:00");
}

#[test]
fn test_result_is_bytes_value() {
    let sliced = slice(TEN_BYTES, "1:4").unwrap();
    assert_eq!(sliced.kind(), FieldKind::Bytes);
    assert_eq!(sliced.length(), 4);
    assert_eq!(sliced.get_bytes(), &[0x11, 0x22, 0x33, 0x44]);

    // 結果も再度スライスできる
    let again = sliced.slice(&"1-2".parse().unwrap()).unwrap();
    assert_eq!(again.get_bytes(), &[0x22, 0x33]);
}

#[test]
fn test_out_of_range_fails_whole_slice() {
    let err = slice(TEN_BYTES, "0:2,5:10").unwrap_err();
    assert_eq!(
        err,
        SliceError::OutOfRange {
            node: "5:10".to_string(),
            field_length: 10
        }
    );
    assert_eq!(err.to_string(), "Range 5:10 is out of bounds for a field of length 10");

    assert!(slice(TEN_BYTES, "10:").is_err());
    assert!(slice(TEN_BYTES, "-11:").is_err());
    assert!(slice(TEN_BYTES, "3-10").is_err());
}

#[test]
fn test_programmatic_ranges() {
    let value = bytes(TEN_BYTES);
    let whole = DRange::from_nodes([DRangeNode::with_end_offset(0, -1)]);
    assert_eq!(value.slice(&whole).unwrap(), value);

    let inverted = DRange::from_nodes([DRangeNode::with_end_offset(-2, -5)]);
    assert!(value.slice(&inverted).is_err());

    let empty = DRange::new();
    assert_eq!(value.slice(&empty).unwrap().length(), 0);
}

#[test]
fn test_slice_error_converts() {
    let err: FtypesError = slice(TEN_BYTES, "20").unwrap_err().into();
    assert!(matches!(err, FtypesError::Slice(_)));
}

#[test]
#[should_panic(expected = "cannot be sliced")]
fn test_unsliceable_kind_panics() {
    let value = FieldValue::from_literal(FieldKind::UInt32, "7").unwrap();
    let _ = value.slice(&"0:1".parse().unwrap());
}

#[test]
fn test_range_text_errors() {
    assert_eq!(
        "a:b".parse::<DRange>().unwrap_err().to_string(),
        "\"a:b\" is not a valid number."
    );
    assert_eq!(
        "1:0".parse::<DRange>().unwrap_err().to_string(),
        "Range 1:0 isn't valid because length 0 isn't positive"
    );
    assert_eq!(
        "-1-2".parse::<DRange>().unwrap_err().to_string(),
        "Range -1-2 isn't valid because -1 and 2 have different signs"
    );
    assert_eq!(
        "3:4:5".parse::<DRange>().unwrap_err().to_string(),
        "\"3:4:5\" is not a valid range."
    );
}

#[test]
fn test_bytes_kind_basics() {
    assert_eq!(bytes("0a0B0c").get_bytes(), &[0x0a, 0x0b, 0x0c]);
    assert_eq!(bytes("aa-bb.cc").to_string(), "aa:bb:cc");
    assert_eq!(bytes("0:1").to_string(), "00:01");
    assert_eq!(bytes("0a0b.0c").to_string(), "0a:0b:0c");
    for bad in ["", "abc", "0:123", "zz", "aa:"] {
        let err = FieldValue::from_literal(FieldKind::Bytes, bad).unwrap_err();
        assert_eq!(err.to_string(), format!("\"{}\" is not a valid byte string.", bad));
    }

    assert!(bytes(TEN_BYTES).contains(&bytes("33:44")));
    assert!(!bytes(TEN_BYTES).contains(&bytes("44:33")));
    assert!(bytes("01:02").cmp_lt(&bytes("00:00:00")));
    assert!(bytes("01:02").cmp_gt(&bytes("01:01")));
}
