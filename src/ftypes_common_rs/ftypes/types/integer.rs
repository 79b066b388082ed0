/// 整数種別（8〜32 ビット）、文字、レガシーネットワーク番号、フレーム番号
///
/// 数値リテラルは基数自動判定（`0x` = 16 進、先頭 `0` = 8 進）で読み、
/// 32 ビットのアキュムレータで溢れを検出してから種別ごとの範囲で検査する。

use std::cmp::Ordering;

use crate::ftypes_common_rs::ftypes::core::exceptions::FvalueParseError;
use crate::ftypes_common_rs::ftypes::core::field_value::Storage;
use crate::ftypes_common_rs::ftypes::core::kind::{FieldDisplay, FieldKind, ReprKind};
use crate::ftypes_common_rs::ftypes::types::charconst::{format_charconst, parse_charconst};

/// 基数自動判定スキャンの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScannedInteger {
    pub negative: bool,
    pub magnitude: u64,
    /// u64 に収まらなかった
    pub overflowed: bool,
    /// 数字が1桁以上あり、末尾まで消費した
    pub complete: bool,
    /// 数字列の直後の位置（数字がなければ 0）
    pub consumed: usize,
}

impl ScannedInteger {
    /// 先頭部分が負の非ゼロ値として読めたか
    pub fn is_negative_nonzero(&self) -> bool {
        self.negative && (self.magnitude != 0 || self.overflowed)
    }
}

/// 空白スキップ、符号、基数プレフィックスを解釈して数字列を読む
pub(crate) fn scan_integer(s: &str) -> ScannedInteger {
    let bytes = s.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let mut negative = false;
    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        negative = bytes[pos] == b'-';
        pos += 1;
    }

    let mut radix = 10;
    if pos < bytes.len() && bytes[pos] == b'0' {
        let has_hex_prefix = matches!(bytes.get(pos + 1), Some(b'x') | Some(b'X'))
            && bytes.get(pos + 2).map_or(false, |c| c.is_ascii_hexdigit());
        if has_hex_prefix {
            radix = 16;
            pos += 2;
        } else {
            radix = 8;
        }
    }

    let mut magnitude: u64 = 0;
    let mut overflowed = false;
    let mut digits = 0;
    while pos < bytes.len() {
        let digit = match (bytes[pos] as char).to_digit(radix) {
            Some(d) => d,
            None => break,
        };
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(m) => magnitude = m,
            None => overflowed = true,
        }
        digits += 1;
        pos += 1;
    }

    ScannedInteger {
        negative,
        magnitude,
        overflowed,
        complete: digits > 0 && pos == bytes.len(),
        consumed: if digits > 0 { pos } else { 0 },
    }
}

/// 符号なし整数の解析
///
/// `accumulator_max` は変換に使うアキュムレータの上限、`max` は種別の上限。
pub(crate) fn parse_unsigned(
    s: &str,
    max: u64,
    accumulator_max: u64,
) -> Result<u64, FvalueParseError> {
    let value = if s.starts_with('\'') {
        u64::from(parse_charconst(s)?)
    } else {
        let scan = scan_integer(s);
        if s.contains('-') && scan.is_negative_nonzero() {
            return Err(FvalueParseError::too_small(s, 0));
        }
        if !scan.complete {
            return Err(FvalueParseError::InvalidNumber(s.to_string()));
        }
        if scan.overflowed || scan.magnitude > accumulator_max {
            return Err(FvalueParseError::Overflow(s.to_string()));
        }
        scan.magnitude
    };

    if value > max {
        return Err(FvalueParseError::too_big(s, max));
    }
    Ok(value)
}

/// 符号付き整数の解析
///
/// 文字定数は符号付き 8 ビットとして解釈する。
pub(crate) fn parse_signed(
    s: &str,
    min: i64,
    max: i64,
    accumulator_min: i64,
    accumulator_max: i64,
) -> Result<i64, FvalueParseError> {
    let value = if s.starts_with('\'') {
        i64::from(parse_charconst(s)? as i8)
    } else {
        let scan = scan_integer(s);
        if !s.contains('-') && (scan.overflowed || scan.magnitude > accumulator_max as u64) {
            return Err(FvalueParseError::Overflow(s.to_string()));
        }
        if !scan.complete {
            return Err(FvalueParseError::InvalidNumber(s.to_string()));
        }
        if scan.negative {
            if scan.overflowed || scan.magnitude > accumulator_min.unsigned_abs() {
                return Err(FvalueParseError::Underflow(s.to_string()));
            }
            (-(i128::from(scan.magnitude))) as i64
        } else {
            if scan.overflowed || scan.magnitude > accumulator_max as u64 {
                return Err(FvalueParseError::Overflow(s.to_string()));
            }
            scan.magnitude as i64
        }
    };

    if value > max {
        return Err(FvalueParseError::too_big(s, max as u64));
    }
    if value < min {
        return Err(FvalueParseError::too_small(s, min));
    }
    Ok(value)
}

/// 種別ごとの符号なし上限（32 ビット系）
fn unsigned_max(kind: FieldKind) -> u32 {
    match kind {
        FieldKind::UInt8 | FieldKind::Char => u32::from(u8::MAX),
        FieldKind::UInt16 => u32::from(u16::MAX),
        FieldKind::UInt24 => 0x00ff_ffff,
        _ => u32::MAX,
    }
}

fn parse_uint_width(s: &str, kind: FieldKind) -> Result<Storage, FvalueParseError> {
    let value = parse_unsigned(s, u64::from(unsigned_max(kind)), u64::from(u32::MAX))?;
    Ok(Storage::UInteger(value as u32))
}

fn parse_sint_width(s: &str, min: i32, max: i32) -> Result<Storage, FvalueParseError> {
    let value = parse_signed(
        s,
        i64::from(min),
        i64::from(max),
        i64::from(i32::MIN),
        i64::from(i32::MAX),
    )?;
    Ok(Storage::SInteger(value as i32))
}

pub fn uint8_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_uint_width(s, FieldKind::UInt8)
}

pub fn uint16_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_uint_width(s, FieldKind::UInt16)
}

pub fn uint24_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_uint_width(s, FieldKind::UInt24)
}

pub fn uint32_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_uint_width(s, FieldKind::UInt32)
}

pub fn sint8_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_sint_width(s, i32::from(i8::MIN), i32::from(i8::MAX))
}

pub fn sint16_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_sint_width(s, i32::from(i16::MIN), i32::from(i16::MAX))
}

pub fn sint24_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_sint_width(s, -0x80_0000, 0x7f_ffff)
}

pub fn sint32_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_sint_width(s, i32::MIN, i32::MAX)
}

/// 数値として読めなければ種別固有のエラーにする
pub fn legacy_network_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    uint32_from_literal(s).map_err(|_| FvalueParseError::InvalidLegacyNetwork(s.to_string()))
}

pub fn uinteger_zero() -> Storage {
    Storage::UInteger(0)
}

pub fn sinteger_zero() -> Storage {
    Storage::SInteger(0)
}

/// 16 進表示の桁数（バイト幅 × 2）
fn hex_digits(kind: FieldKind) -> usize {
    match kind {
        FieldKind::UInt8 => 2,
        FieldKind::UInt16 => 4,
        FieldKind::UInt24 => 6,
        _ => 8,
    }
}

pub fn uinteger_format(
    kind: FieldKind,
    storage: &Storage,
    _rtype: ReprKind,
    display: FieldDisplay,
) -> Option<String> {
    let value = storage.uinteger();
    if display.prefers_hex() {
        Some(format!("0x{:0width$x}", value, width = hex_digits(kind)))
    } else {
        Some(value.to_string())
    }
}

pub fn sinteger_format(
    _kind: FieldKind,
    storage: &Storage,
    _rtype: ReprKind,
    _display: FieldDisplay,
) -> Option<String> {
    let value = storage.sinteger();
    if value < 0 {
        Some(format!("-{}", value.unsigned_abs()))
    } else {
        Some(value.to_string())
    }
}

pub fn char_format(
    _kind: FieldKind,
    storage: &Storage,
    _rtype: ReprKind,
    display: FieldDisplay,
) -> Option<String> {
    Some(format_charconst(storage.uinteger(), display))
}

/// 常に `0x` + 8 桁 16 進
pub fn legacy_network_format(
    kind: FieldKind,
    storage: &Storage,
    rtype: ReprKind,
    _display: FieldDisplay,
) -> Option<String> {
    uinteger_format(kind, storage, rtype, FieldDisplay::Hex)
}

// 出力に必要なバッファ長は種別ごとの固定値

pub fn uinteger_repr_len(_: FieldKind, _: &Storage, _: ReprKind, _: FieldDisplay) -> Option<usize> {
    Some(10)
}

pub fn sinteger_repr_len(_: FieldKind, _: &Storage, _: ReprKind, _: FieldDisplay) -> Option<usize> {
    Some(11)
}

pub fn char_repr_len(_: FieldKind, _: &Storage, _: ReprKind, _: FieldDisplay) -> Option<usize> {
    Some(7)
}

pub fn legacy_network_repr_len(
    _: FieldKind,
    _: &Storage,
    _: ReprKind,
    _: FieldDisplay,
) -> Option<usize> {
    Some(2 + 8)
}

pub fn uinteger_compare(a: &Storage, b: &Storage) -> Ordering {
    a.uinteger().cmp(&b.uinteger())
}

pub fn sinteger_compare(a: &Storage, b: &Storage) -> Ordering {
    a.sinteger().cmp(&b.sinteger())
}

pub fn uinteger_bitwise_and(a: &Storage, b: &Storage) -> bool {
    a.uinteger() & b.uinteger() != 0
}

/// 符号付き値もビット列として判定する
pub fn sinteger_bitwise_and(a: &Storage, b: &Storage) -> bool {
    a.sinteger() & b.sinteger() != 0
}
