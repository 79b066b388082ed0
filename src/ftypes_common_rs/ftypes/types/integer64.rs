/// 64 ビットアキュムレータの整数種別（40〜64 ビット）と EUI-64 アドレス

use std::cmp::Ordering;

use crate::ftypes_common_rs::ftypes::core::exceptions::FvalueParseError;
use crate::ftypes_common_rs::ftypes::core::field_value::Storage;
use crate::ftypes_common_rs::ftypes::core::kind::{FieldDisplay, FieldKind, ReprKind};
use crate::ftypes_common_rs::ftypes::types::bytes::decode_hex_groups;
use crate::ftypes_common_rs::ftypes::types::integer::{parse_signed, parse_unsigned};

/// EUI-64 のバイト数
pub const EUI64_LEN: usize = 8;
/// "xx:xx:xx:xx:xx:xx:xx:xx"
pub const EUI64_STR_LEN: usize = 23;

fn parse_uint64_width(s: &str, max: u64) -> Result<Storage, FvalueParseError> {
    parse_unsigned(s, max, u64::MAX).map(Storage::UInteger64)
}

fn parse_sint64_width(s: &str, min: i64, max: i64) -> Result<Storage, FvalueParseError> {
    parse_signed(s, min, max, i64::MIN, i64::MAX).map(Storage::SInteger64)
}

pub fn uint40_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_uint64_width(s, 0xff_ffff_ffff)
}

pub fn uint48_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_uint64_width(s, 0xffff_ffff_ffff)
}

pub fn uint56_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_uint64_width(s, 0xff_ffff_ffff_ffff)
}

pub fn uint64_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_uint64_width(s, u64::MAX)
}

pub fn sint40_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_sint64_width(s, -0x80_0000_0000, 0x7f_ffff_ffff)
}

pub fn sint48_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_sint64_width(s, -0x8000_0000_0000, 0x7fff_ffff_ffff)
}

pub fn sint56_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_sint64_width(s, -0x80_0000_0000_0000, 0x7f_ffff_ffff_ffff)
}

pub fn sint64_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_sint64_width(s, i64::MIN, i64::MAX)
}

/// 8 バイトの区切り付き 16 進表記を読む（`0:11:...` や `0011.2233.4455.6677` も可）
fn parse_eui64_bytes(s: &str) -> Option<[u8; EUI64_LEN]> {
    if !s.contains(|c: char| c == ':' || c == '-' || c == '.') {
        return None;
    }
    decode_hex_groups(s)?.try_into().ok()
}

/// 数値として読めなければバイト列表記を試す
pub fn eui64_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    if let Ok(storage) = uint64_from_literal(s) {
        return Ok(storage);
    }
    parse_eui64_bytes(s)
        .map(|bytes| Storage::UInteger64(u64::from_be_bytes(bytes)))
        .ok_or_else(|| FvalueParseError::InvalidEui64(s.to_string()))
}

pub fn integer64_zero() -> Storage {
    Storage::SInteger64(0)
}

pub fn uinteger64_zero() -> Storage {
    Storage::UInteger64(0)
}

/// 16 進は常に 16 桁
pub fn uinteger64_format(
    _kind: FieldKind,
    storage: &Storage,
    _rtype: ReprKind,
    display: FieldDisplay,
) -> Option<String> {
    let value = storage.uinteger64();
    if display.prefers_hex() {
        Some(format!("0x{:016x}", value))
    } else {
        Some(value.to_string())
    }
}

pub fn sinteger64_format(
    _kind: FieldKind,
    storage: &Storage,
    _rtype: ReprKind,
    _display: FieldDisplay,
) -> Option<String> {
    let value = storage.sinteger64();
    if value < 0 {
        Some(format!("-{}", value.unsigned_abs()))
    } else {
        Some(value.to_string())
    }
}

pub fn eui64_format(
    _kind: FieldKind,
    storage: &Storage,
    _rtype: ReprKind,
    _display: FieldDisplay,
) -> Option<String> {
    let groups: Vec<String> = storage
        .uinteger64()
        .to_be_bytes()
        .iter()
        .map(|b| hex::encode([*b]))
        .collect();
    Some(groups.join(":"))
}

pub fn integer64_repr_len(
    _: FieldKind,
    _: &Storage,
    _: ReprKind,
    _: FieldDisplay,
) -> Option<usize> {
    Some(20)
}

pub fn eui64_repr_len(_: FieldKind, _: &Storage, _: ReprKind, _: FieldDisplay) -> Option<usize> {
    Some(EUI64_STR_LEN)
}

pub fn uinteger64_compare(a: &Storage, b: &Storage) -> Ordering {
    a.uinteger64().cmp(&b.uinteger64())
}

pub fn sinteger64_compare(a: &Storage, b: &Storage) -> Ordering {
    a.sinteger64().cmp(&b.sinteger64())
}

pub fn uinteger64_bitwise_and(a: &Storage, b: &Storage) -> bool {
    a.uinteger64() & b.uinteger64() != 0
}

pub fn sinteger64_bitwise_and(a: &Storage, b: &Storage) -> bool {
    a.sinteger64() & b.sinteger64() != 0
}
