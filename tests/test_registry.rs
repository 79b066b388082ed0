use ftypes_rust::ftypes_common_rs::ftypes::core::TypeRegistry;
use ftypes_rust::ftypes_common_rs::ftypes::types::builtin_descriptor;
use ftypes_rust::prelude::*;

#[test]
fn test_every_kind_is_registered() {
    ftypes_initialize();
    let registry = registry();
    for kind in FieldKind::ALL {
        assert!(registry.is_registered(kind), "{:?} missing", kind);
        assert_eq!(registry.lookup(kind).kind, kind);
    }
}

#[test]
fn test_initialize_is_repeatable() {
    ftypes_initialize();
    ftypes_initialize();
    assert_eq!(registry().descriptors().count(), FieldKind::COUNT);
}

#[test]
fn test_names_and_pretty_names() {
    assert_eq!(kind_name(FieldKind::UInt8), "uint8");
    assert_eq!(kind_name(FieldKind::Int56), "int56");
    assert_eq!(kind_name(FieldKind::HardwareAddress64), "eui64");
    assert_eq!(kind_name(FieldKind::FrameIndex), "framenum");
    assert_eq!(kind_pretty_name(FieldKind::UInt8), "Unsigned integer, 1 byte");
    assert_eq!(kind_pretty_name(FieldKind::Int16), "Signed integer, 2 bytes");
    assert_eq!(kind_pretty_name(FieldKind::Char), "Character, 1 byte");
    assert_eq!(kind_pretty_name(FieldKind::AbsoluteTime), "Date and time");
    assert_eq!(kind_pretty_name(FieldKind::RelativeTime), "Time offset");
}

#[test]
fn test_wire_sizes() {
    let expected = [
        (FieldKind::UInt8, 1),
        (FieldKind::UInt24, 3),
        (FieldKind::UInt40, 5),
        (FieldKind::Int56, 7),
        (FieldKind::Int64, 8),
        (FieldKind::Char, 1),
        (FieldKind::Boolean, 0),
        (FieldKind::LegacyNetworkNumber, 4),
        (FieldKind::FrameIndex, 4),
        (FieldKind::HardwareAddress64, 8),
        (FieldKind::AbsoluteTime, 0),
        (FieldKind::RelativeTime, 0),
    ];
    for (kind, size) in expected {
        assert_eq!(wire_size(kind), size, "{:?}", kind);
    }
}

#[test]
fn test_kind_text_round_trip() {
    for kind in FieldKind::ALL {
        let name = kind.to_string();
        assert_eq!(name.parse::<FieldKind>().unwrap(), kind);
    }
    assert_eq!("UINT16".parse::<FieldKind>().unwrap(), FieldKind::UInt16);
    assert!("float".parse::<FieldKind>().is_err());
}

#[test]
fn test_similarity_classes() {
    assert!(types_are_similar(FieldKind::UInt8, FieldKind::UInt32));
    assert!(types_are_similar(FieldKind::Int16, FieldKind::Int24));
    assert!(types_are_similar(FieldKind::UInt40, FieldKind::UInt64));
    assert!(types_are_similar(FieldKind::Int48, FieldKind::Int64));
    assert!(!types_are_similar(FieldKind::UInt32, FieldKind::UInt40));
    assert!(!types_are_similar(FieldKind::UInt8, FieldKind::Int8));
    assert!(!types_are_similar(FieldKind::Char, FieldKind::UInt8));
    assert!(!types_are_similar(FieldKind::FrameIndex, FieldKind::UInt32));
    assert!(types_are_similar(FieldKind::Boolean, FieldKind::Boolean));

    // 対称性
    for a in FieldKind::ALL {
        for b in FieldKind::ALL {
            assert_eq!(types_are_similar(a, b), types_are_similar(b, a));
        }
    }
}

#[test]
fn test_operation_availability() {
    let registry = registry();
    for kind in FieldKind::ALL {
        assert!(registry.can_order(kind), "{:?} should be ordered", kind);
    }
    assert!(registry.can_bitwise_and(FieldKind::Char));
    assert!(registry.can_bitwise_and(FieldKind::Int64));
    assert!(registry.can_bitwise_and(FieldKind::HardwareAddress64));
    assert!(!registry.can_bitwise_and(FieldKind::RelativeTime));
    assert!(!registry.can_contain(FieldKind::UInt32));
    assert!(registry.can_contain(FieldKind::Bytes));
}

#[test]
fn test_quoted_parse_only_for_absolute_time() {
    for kind in FieldKind::ALL {
        let has_quoted = registry().lookup(kind).parse_quoted.is_some();
        assert_eq!(has_quoted, kind == FieldKind::AbsoluteTime, "{:?}", kind);
    }
}

#[test]
#[should_panic(expected = "already registered")]
fn test_private_registry_rejects_duplicates() {
    let mut registry = TypeRegistry::new();
    registry.register(FieldKind::Char, builtin_descriptor(FieldKind::Char));
    registry.register(FieldKind::Char, builtin_descriptor(FieldKind::Char));
}
