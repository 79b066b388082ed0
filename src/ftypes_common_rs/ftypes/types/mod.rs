pub mod boolean;
pub mod bytes;
pub mod charconst;
pub mod integer;
pub mod integer64;
pub mod time;

use crate::ftypes_common_rs::ftypes::core::kind::{FieldKind, StorageClass};
use crate::ftypes_common_rs::ftypes::core::registry::KindDescriptor;

use self::boolean::*;
use self::bytes::*;
use self::integer::*;
use self::integer64::*;
use self::time::*;

// 種別ファミリごとの共通操作。各種別はこれに名前・幅・解析関数を上書きする

const UINTEGER_OPS: KindDescriptor = KindDescriptor {
    kind: FieldKind::UInt32,
    name: "uint32",
    pretty_name: "Unsigned integer, 4 bytes",
    wire_size: 4,
    storage: StorageClass::UInteger,
    construct: uinteger_zero,
    parse_literal: Some(uint32_from_literal),
    parse_quoted: None,
    format: Some(uinteger_format),
    repr_len: Some(uinteger_repr_len),
    compare: Some(uinteger_compare),
    bitwise_and: Some(uinteger_bitwise_and),
    contains: None,
    matches: None,
    len: None,
    slice: None,
};

const SINTEGER_OPS: KindDescriptor = KindDescriptor {
    kind: FieldKind::Int32,
    name: "int32",
    pretty_name: "Signed integer, 4 bytes",
    wire_size: 4,
    storage: StorageClass::SInteger,
    construct: sinteger_zero,
    parse_literal: Some(sint32_from_literal),
    format: Some(sinteger_format),
    repr_len: Some(sinteger_repr_len),
    compare: Some(sinteger_compare),
    bitwise_and: Some(sinteger_bitwise_and),
    ..UINTEGER_OPS
};

const UINTEGER64_OPS: KindDescriptor = KindDescriptor {
    kind: FieldKind::UInt64,
    name: "uint64",
    pretty_name: "Unsigned integer, 8 bytes",
    wire_size: 8,
    storage: StorageClass::UInteger64,
    construct: uinteger64_zero,
    parse_literal: Some(uint64_from_literal),
    format: Some(uinteger64_format),
    repr_len: Some(integer64_repr_len),
    compare: Some(uinteger64_compare),
    bitwise_and: Some(uinteger64_bitwise_and),
    ..UINTEGER_OPS
};

const SINTEGER64_OPS: KindDescriptor = KindDescriptor {
    kind: FieldKind::Int64,
    name: "int64",
    pretty_name: "Signed integer, 8 bytes",
    wire_size: 8,
    storage: StorageClass::SInteger64,
    construct: integer64_zero,
    parse_literal: Some(sint64_from_literal),
    format: Some(sinteger64_format),
    repr_len: Some(integer64_repr_len),
    compare: Some(sinteger64_compare),
    bitwise_and: Some(sinteger64_bitwise_and),
    ..UINTEGER_OPS
};

const TIME_OPS: KindDescriptor = KindDescriptor {
    kind: FieldKind::RelativeTime,
    name: "relative_time",
    pretty_name: "Time offset",
    wire_size: 0,
    storage: StorageClass::Time,
    construct: time_zero,
    parse_literal: Some(relative_from_literal),
    parse_quoted: None,
    format: Some(relative_format),
    repr_len: Some(time_repr_len),
    compare: Some(time_compare),
    bitwise_and: None,
    ..UINTEGER_OPS
};

static UINT8: KindDescriptor = KindDescriptor {
    kind: FieldKind::UInt8,
    name: "uint8",
    pretty_name: "Unsigned integer, 1 byte",
    wire_size: 1,
    parse_literal: Some(uint8_from_literal),
    ..UINTEGER_OPS
};

static UINT16: KindDescriptor = KindDescriptor {
    kind: FieldKind::UInt16,
    name: "uint16",
    pretty_name: "Unsigned integer, 2 bytes",
    wire_size: 2,
    parse_literal: Some(uint16_from_literal),
    ..UINTEGER_OPS
};

static UINT24: KindDescriptor = KindDescriptor {
    kind: FieldKind::UInt24,
    name: "uint24",
    pretty_name: "Unsigned integer, 3 bytes",
    wire_size: 3,
    parse_literal: Some(uint24_from_literal),
    ..UINTEGER_OPS
};

static UINT32: KindDescriptor = UINTEGER_OPS;

static UINT40: KindDescriptor = KindDescriptor {
    kind: FieldKind::UInt40,
    name: "uint40",
    pretty_name: "Unsigned integer, 5 bytes",
    wire_size: 5,
    parse_literal: Some(uint40_from_literal),
    ..UINTEGER64_OPS
};

static UINT48: KindDescriptor = KindDescriptor {
    kind: FieldKind::UInt48,
    name: "uint48",
    pretty_name: "Unsigned integer, 6 bytes",
    wire_size: 6,
    parse_literal: Some(uint48_from_literal),
    ..UINTEGER64_OPS
};

static UINT56: KindDescriptor = KindDescriptor {
    kind: FieldKind::UInt56,
    name: "uint56",
    pretty_name: "Unsigned integer, 7 bytes",
    wire_size: 7,
    parse_literal: Some(uint56_from_literal),
    ..UINTEGER64_OPS
};

static UINT64: KindDescriptor = UINTEGER64_OPS;

static INT8: KindDescriptor = KindDescriptor {
    kind: FieldKind::Int8,
    name: "int8",
    pretty_name: "Signed integer, 1 byte",
    wire_size: 1,
    parse_literal: Some(sint8_from_literal),
    ..SINTEGER_OPS
};

static INT16: KindDescriptor = KindDescriptor {
    kind: FieldKind::Int16,
    name: "int16",
    pretty_name: "Signed integer, 2 bytes",
    wire_size: 2,
    parse_literal: Some(sint16_from_literal),
    ..SINTEGER_OPS
};

static INT24: KindDescriptor = KindDescriptor {
    kind: FieldKind::Int24,
    name: "int24",
    pretty_name: "Signed integer, 3 bytes",
    wire_size: 3,
    parse_literal: Some(sint24_from_literal),
    ..SINTEGER_OPS
};

static INT32: KindDescriptor = SINTEGER_OPS;

static INT40: KindDescriptor = KindDescriptor {
    kind: FieldKind::Int40,
    name: "int40",
    pretty_name: "Signed integer, 5 bytes",
    wire_size: 5,
    parse_literal: Some(sint40_from_literal),
    ..SINTEGER64_OPS
};

static INT48: KindDescriptor = KindDescriptor {
    kind: FieldKind::Int48,
    name: "int48",
    pretty_name: "Signed integer, 6 bytes",
    wire_size: 6,
    parse_literal: Some(sint48_from_literal),
    ..SINTEGER64_OPS
};

static INT56: KindDescriptor = KindDescriptor {
    kind: FieldKind::Int56,
    name: "int56",
    pretty_name: "Signed integer, 7 bytes",
    wire_size: 7,
    parse_literal: Some(sint56_from_literal),
    ..SINTEGER64_OPS
};

static INT64: KindDescriptor = SINTEGER64_OPS;

static CHAR: KindDescriptor = KindDescriptor {
    kind: FieldKind::Char,
    name: "char",
    pretty_name: "Character, 1 byte",
    wire_size: 1,
    parse_literal: Some(uint8_from_literal),
    format: Some(char_format),
    repr_len: Some(char_repr_len),
    ..UINTEGER_OPS
};

static BOOLEAN: KindDescriptor = KindDescriptor {
    kind: FieldKind::Boolean,
    name: "boolean",
    pretty_name: "Boolean",
    wire_size: 0,
    construct: boolean_new,
    parse_literal: Some(boolean_from_literal),
    format: Some(boolean_format),
    repr_len: Some(boolean_repr_len),
    compare: Some(boolean_compare),
    bitwise_and: None,
    ..UINTEGER64_OPS
};

static LEGACY_NETWORK_NUMBER: KindDescriptor = KindDescriptor {
    kind: FieldKind::LegacyNetworkNumber,
    name: "legacy_net",
    pretty_name: "Legacy network number",
    wire_size: 4,
    parse_literal: Some(legacy_network_from_literal),
    format: Some(legacy_network_format),
    repr_len: Some(legacy_network_repr_len),
    ..UINTEGER_OPS
};

static FRAME_INDEX: KindDescriptor = KindDescriptor {
    kind: FieldKind::FrameIndex,
    name: "framenum",
    pretty_name: "Frame number",
    wire_size: 4,
    bitwise_and: None,
    ..UINTEGER_OPS
};

static HARDWARE_ADDRESS_64: KindDescriptor = KindDescriptor {
    kind: FieldKind::HardwareAddress64,
    name: "eui64",
    pretty_name: "EUI64 address",
    wire_size: EUI64_LEN,
    parse_literal: Some(eui64_from_literal),
    format: Some(eui64_format),
    repr_len: Some(eui64_repr_len),
    ..UINTEGER64_OPS
};

static ABSOLUTE_TIME: KindDescriptor = KindDescriptor {
    kind: FieldKind::AbsoluteTime,
    name: "absolute_time",
    pretty_name: "Date and time",
    parse_literal: Some(absolute_from_literal),
    parse_quoted: Some(absolute_from_literal),
    format: Some(absolute_format),
    ..TIME_OPS
};

static RELATIVE_TIME: KindDescriptor = TIME_OPS;

static BYTES: KindDescriptor = KindDescriptor {
    kind: FieldKind::Bytes,
    name: "bytes",
    pretty_name: "Sequence of bytes",
    wire_size: 0,
    storage: StorageClass::Bytes,
    construct: bytes_new,
    parse_literal: Some(bytes_from_literal),
    parse_quoted: None,
    format: Some(bytes_format),
    repr_len: Some(bytes_repr_len),
    compare: Some(bytes_compare),
    bitwise_and: None,
    contains: Some(bytes_contains),
    matches: Some(bytes_matches),
    len: Some(bytes_len),
    slice: Some(bytes_slice),
};

/// 組み込み種別のディスクリプタ（全種別を網羅）
pub fn builtin_descriptor(kind: FieldKind) -> &'static KindDescriptor {
    match kind {
        FieldKind::UInt8 => &UINT8,
        FieldKind::UInt16 => &UINT16,
        FieldKind::UInt24 => &UINT24,
        FieldKind::UInt32 => &UINT32,
        FieldKind::UInt40 => &UINT40,
        FieldKind::UInt48 => &UINT48,
        FieldKind::UInt56 => &UINT56,
        FieldKind::UInt64 => &UINT64,
        FieldKind::Int8 => &INT8,
        FieldKind::Int16 => &INT16,
        FieldKind::Int24 => &INT24,
        FieldKind::Int32 => &INT32,
        FieldKind::Int40 => &INT40,
        FieldKind::Int48 => &INT48,
        FieldKind::Int56 => &INT56,
        FieldKind::Int64 => &INT64,
        FieldKind::Char => &CHAR,
        FieldKind::Boolean => &BOOLEAN,
        FieldKind::LegacyNetworkNumber => &LEGACY_NETWORK_NUMBER,
        FieldKind::FrameIndex => &FRAME_INDEX,
        FieldKind::HardwareAddress64 => &HARDWARE_ADDRESS_64,
        FieldKind::AbsoluteTime => &ABSOLUTE_TIME,
        FieldKind::RelativeTime => &RELATIVE_TIME,
        FieldKind::Bytes => &BYTES,
    }
}
