/// C 形式の文字定数（'a', '\n', '\x41', '\101' など）の解析と出力

use crate::ftypes_common_rs::ftypes::core::exceptions::FvalueParseError;
use crate::ftypes_common_rs::ftypes::core::kind::FieldDisplay;

fn hex_digit(c: u8) -> Option<u32> {
    (c as char).to_digit(16)
}

fn octal_digit(c: u8) -> Option<u32> {
    (c as char).to_digit(8)
}

fn is_printable(c: u32) -> bool {
    (0x20..=0x7e).contains(&c)
}

/// 文字定数を解析してバイト値を返す
///
/// 先頭の `'` は呼び出し側で確認済みであること。
pub fn parse_charconst(s: &str) -> Result<u8, FvalueParseError> {
    let bytes = s.as_bytes();
    // 終端の外側は NUL として扱う
    let at = |i: usize| bytes.get(i).copied().unwrap_or(0);
    let invalid = || FvalueParseError::InvalidCharConst(s.to_string());

    let mut cp = 1;
    let value: u32;
    if at(cp) == b'\\' {
        cp += 1;
        value = match at(cp) {
            b'a' => 0x07,
            b'b' => 0x08,
            b'f' => 0x0c,
            b'n' => u32::from(b'\n'),
            b'r' => u32::from(b'\r'),
            b't' => u32::from(b'\t'),
            b'v' => 0x0b,
            b'\'' => u32::from(b'\''),
            b'\\' => u32::from(b'\\'),
            b'"' => u32::from(b'"'),
            b'x' => {
                cp += 1;
                let mut v = hex_digit(at(cp)).ok_or_else(invalid)?;
                if at(cp + 1) != b'\'' {
                    cp += 1;
                    v = (v << 4) | hex_digit(at(cp)).ok_or_else(invalid)?;
                }
                v
            }
            c => {
                let mut v = octal_digit(c).ok_or_else(invalid)?;
                for _ in 0..2 {
                    if at(cp + 1) == b'\'' {
                        break;
                    }
                    cp += 1;
                    v = (v << 3) | octal_digit(at(cp)).ok_or_else(invalid)?;
                }
                if v > 0xFF {
                    return Err(FvalueParseError::CharConstTooLarge(s.to_string()));
                }
                v
            }
        };
    } else {
        let c = at(cp);
        if !is_printable(u32::from(c)) {
            return Err(FvalueParseError::NonPrintableChar(c));
        }
        value = u32::from(c);
    }

    cp += 1;
    if at(cp) != b'\'' || cp + 1 != bytes.len() {
        return Err(FvalueParseError::CharConstTooLong(s.to_string()));
    }

    Ok(value as u8)
}

/// バイト値を文字定数として出力する
///
/// 表示不可能な値は名前付きエスケープ、なければ 3 桁 8 進（Hex 表示なら `\xHH`）。
pub fn format_charconst(value: u32, display: FieldDisplay) -> String {
    let mut out = String::with_capacity(7);
    out.push('\'');
    if is_printable(value) {
        if value == u32::from(b'\\') || value == u32::from(b'\'') {
            out.push('\\');
        }
        out.push(value as u8 as char);
    } else {
        out.push('\\');
        match value {
            0x00 => out.push('0'),
            0x07 => out.push('a'),
            0x08 => out.push('b'),
            0x0c => out.push('f'),
            0x0a => out.push('n'),
            0x0d => out.push('r'),
            0x09 => out.push('t'),
            0x0b => out.push('v'),
            _ => {
                if display == FieldDisplay::Hex {
                    out.push_str(&format!("x{:02x}", value & 0xff));
                } else {
                    out.push_str(&format!("{:03o}", value & 0xff));
                }
            }
        }
    }
    out.push('\'');
    out
}
