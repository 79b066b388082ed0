/// 真偽値種別
/// 64 ビット符号なしで格納し、非ゼロを真とする。

use std::cmp::Ordering;

use crate::ftypes_common_rs::ftypes::core::exceptions::FvalueParseError;
use crate::ftypes_common_rs::ftypes::core::field_value::Storage;
use crate::ftypes_common_rs::ftypes::core::kind::{FieldDisplay, FieldKind, ReprKind};
use crate::ftypes_common_rs::ftypes::types::integer64::uint64_from_literal;

/// 既定値は真
pub fn boolean_new() -> Storage {
    Storage::UInteger64(1)
}

pub fn boolean_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    uint64_from_literal(s)
}

pub fn boolean_format(
    _kind: FieldKind,
    storage: &Storage,
    _rtype: ReprKind,
    _display: FieldDisplay,
) -> Option<String> {
    let text = if storage.uinteger64() != 0 { "1" } else { "0" };
    Some(text.to_string())
}

pub fn boolean_repr_len(_: FieldKind, _: &Storage, _: ReprKind, _: FieldDisplay) -> Option<usize> {
    Some(1)
}

/// 偽 < 真。値の大きさは見ない
pub fn boolean_compare(a: &Storage, b: &Storage) -> Ordering {
    match (a.uinteger64() != 0, b.uinteger64() != 0) {
        (true, true) | (false, false) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_three_cases() {
        let t = Storage::UInteger64(1);
        let t2 = Storage::UInteger64(7);
        let f = Storage::UInteger64(0);
        assert_eq!(boolean_compare(&f, &f), Ordering::Equal);
        assert_eq!(boolean_compare(&t, &t2), Ordering::Equal);
        assert_eq!(boolean_compare(&f, &t), Ordering::Less);
        assert_eq!(boolean_compare(&t, &f), Ordering::Greater);
    }

    #[test]
    fn test_format() {
        let fmt = |v| {
            let storage = Storage::UInteger64(v);
            boolean_format(FieldKind::Boolean, &storage, ReprKind::Display, FieldDisplay::Dec)
        };
        assert_eq!(fmt(5).unwrap(), "1");
        assert_eq!(fmt(0).unwrap(), "0");
    }

    #[test]
    fn test_parse_nonzero_is_true() {
        assert_eq!(boolean_from_literal("2").unwrap(), Storage::UInteger64(2));
        assert!(boolean_from_literal("yes").is_err());
    }
}
