/// バイト列種別
/// スライス結果の受け皿。スライス元としても使える。

use std::cmp::Ordering;

use crate::ftypes_common_rs::ftypes::core::exceptions::FvalueParseError;
use crate::ftypes_common_rs::ftypes::core::field_value::Storage;
use crate::ftypes_common_rs::ftypes::core::kind::{FieldDisplay, FieldKind, ReprKind};
use crate::ftypes_common_rs::ftypes::core::pattern::CompiledPattern;

pub fn bytes_new() -> Storage {
    Storage::Bytes(Vec::new())
}

fn is_separator(c: char) -> bool {
    c == ':' || c == '-' || c == '.'
}

/// 区切り付きの 16 進グループを読む
///
/// 1 桁と 2 桁のグループは 1 バイト、4 桁のグループは 2 バイトになる。空のグループは不可。
pub fn decode_hex_groups(s: &str) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    for group in s.split(is_separator) {
        match group.len() {
            1 => out.extend(hex::decode(format!("0{}", group)).ok()?),
            2 | 4 => out.extend(hex::decode(group).ok()?),
            _ => return None,
        }
    }
    Some(out)
}

/// `aa:bb:cc`（区切りは `:` `-` `.`）または区切りなしの `aabbcc`
fn decode_hex(s: &str) -> Option<Vec<u8>> {
    if s.is_empty() {
        return None;
    }
    if s.contains(is_separator) {
        decode_hex_groups(s)
    } else {
        hex::decode(s).ok()
    }
}

pub fn bytes_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    decode_hex(s)
        .map(Storage::Bytes)
        .ok_or_else(|| FvalueParseError::InvalidBytes(s.to_string()))
}

pub fn bytes_format(
    _kind: FieldKind,
    storage: &Storage,
    _rtype: ReprKind,
    _display: FieldDisplay,
) -> Option<String> {
    let groups: Vec<String> = storage.bytes().iter().map(|b| hex::encode([*b])).collect();
    Some(groups.join(":"))
}

/// 1 バイト 2 桁 + 区切り
pub fn bytes_repr_len(
    _: FieldKind,
    storage: &Storage,
    _: ReprKind,
    _: FieldDisplay,
) -> Option<usize> {
    let n = storage.bytes().len();
    Some(if n == 0 { 0 } else { n * 3 - 1 })
}

/// 長さが先、同じ長さならバイト順
pub fn bytes_compare(a: &Storage, b: &Storage) -> Ordering {
    let (a, b) = (a.bytes(), b.bytes());
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

pub fn bytes_contains(haystack: &Storage, needle: &Storage) -> bool {
    let (haystack, needle) = (haystack.bytes(), needle.bytes());
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

pub fn bytes_matches(storage: &Storage, pattern: &CompiledPattern) -> bool {
    pattern.matches(storage.bytes())
}

pub fn bytes_len(storage: &Storage) -> usize {
    storage.bytes().len()
}

pub fn bytes_slice(storage: &Storage, out: &mut Vec<u8>, offset: usize, length: usize) {
    out.extend_from_slice(&storage.bytes()[offset..offset + length]);
}
