use std::fmt;
use std::str::FromStr;

/// フィールド値の種別（閉じた列挙）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    UInt8,
    UInt16,
    UInt24,
    UInt32,
    UInt40,
    UInt48,
    UInt56,
    UInt64,
    Int8,
    Int16,
    Int24,
    Int32,
    Int40,
    Int48,
    Int56,
    Int64,
    Char,
    Boolean,
    LegacyNetworkNumber,
    FrameIndex,
    HardwareAddress64,
    AbsoluteTime,
    RelativeTime,
    Bytes,
}

impl FieldKind {
    pub const COUNT: usize = 24;

    pub const ALL: [FieldKind; FieldKind::COUNT] = [
        FieldKind::UInt8,
        FieldKind::UInt16,
        FieldKind::UInt24,
        FieldKind::UInt32,
        FieldKind::UInt40,
        FieldKind::UInt48,
        FieldKind::UInt56,
        FieldKind::UInt64,
        FieldKind::Int8,
        FieldKind::Int16,
        FieldKind::Int24,
        FieldKind::Int32,
        FieldKind::Int40,
        FieldKind::Int48,
        FieldKind::Int56,
        FieldKind::Int64,
        FieldKind::Char,
        FieldKind::Boolean,
        FieldKind::LegacyNetworkNumber,
        FieldKind::FrameIndex,
        FieldKind::HardwareAddress64,
        FieldKind::AbsoluteTime,
        FieldKind::RelativeTime,
        FieldKind::Bytes,
    ];

    /// レジストリテーブルの添字
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_time(self) -> bool {
        matches!(self, FieldKind::AbsoluteTime | FieldKind::RelativeTime)
    }

    pub fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            FieldKind::UInt8
                | FieldKind::UInt16
                | FieldKind::UInt24
                | FieldKind::UInt32
                | FieldKind::UInt40
                | FieldKind::UInt48
                | FieldKind::UInt56
                | FieldKind::UInt64
        )
    }

    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            FieldKind::Int8
                | FieldKind::Int16
                | FieldKind::Int24
                | FieldKind::Int32
                | FieldKind::Int40
                | FieldKind::Int48
                | FieldKind::Int56
                | FieldKind::Int64
        )
    }

    /// 重複フィールド登録の互換性判定に使う代表種別
    fn similarity_class(self) -> FieldKind {
        match self {
            FieldKind::Int8 | FieldKind::Int16 | FieldKind::Int24 | FieldKind::Int32 => {
                FieldKind::Int32
            }
            FieldKind::UInt8 | FieldKind::UInt16 | FieldKind::UInt24 | FieldKind::UInt32 => {
                FieldKind::UInt32
            }
            FieldKind::Int40 | FieldKind::Int48 | FieldKind::Int56 | FieldKind::Int64 => {
                FieldKind::Int64
            }
            FieldKind::UInt40 | FieldKind::UInt48 | FieldKind::UInt56 | FieldKind::UInt64 => {
                FieldKind::UInt64
            }
            FieldKind::Char
            | FieldKind::Boolean
            | FieldKind::LegacyNetworkNumber
            | FieldKind::FrameIndex
            | FieldKind::HardwareAddress64
            | FieldKind::AbsoluteTime
            | FieldKind::RelativeTime
            | FieldKind::Bytes => self,
        }
    }

    /// 2つの種別が同じ互換クラスに属するか
    pub fn is_similar_to(self, other: FieldKind) -> bool {
        self.similarity_class() == other.similarity_class()
    }
}

/// 重複フィールドとして同居できる種別かどうか
pub fn types_are_similar(a: FieldKind, b: FieldKind) -> bool {
    a.is_similar_to(b)
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = crate::ftypes_common_rs::ftypes::core::registry::registry();
        write!(f, "{}", registry.lookup(*self).name)
    }
}

impl FromStr for FieldKind {
    type Err = String;

    /// 登録済みの短い識別子（大文字小文字は区別しない）から種別を引く
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let registry = crate::ftypes_common_rs::ftypes::core::registry::registry();
        FieldKind::ALL
            .iter()
            .copied()
            .find(|kind| registry.lookup(*kind).name.eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown field kind: {}", s))
    }
}

/// 値の格納形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageClass {
    UInteger,
    SInteger,
    UInteger64,
    SInteger64,
    Time,
    Bytes,
}

/// 文字列表現の用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReprKind {
    /// UI・エクスポート向け
    Display,
    /// フィルタ式のリテラルとして再解析できる形
    DFilter,
}

/// 表示基数・時刻表示モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldDisplay {
    #[default]
    Dec,
    Hex,
    DecHex,
    HexDec,
    AbsoluteLocal,
    AbsoluteUtc,
    AbsoluteDoyUtc,
}

impl FieldDisplay {
    /// 整数を16進で出すモードか
    pub fn prefers_hex(self) -> bool {
        matches!(self, FieldDisplay::Hex | FieldDisplay::HexDec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, kind) in FieldKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_similarity_classes() {
        assert!(FieldKind::Int8.is_similar_to(FieldKind::Int32));
        assert!(FieldKind::UInt16.is_similar_to(FieldKind::UInt24));
        assert!(FieldKind::UInt40.is_similar_to(FieldKind::UInt64));
        assert!(!FieldKind::Int8.is_similar_to(FieldKind::UInt8));
        assert!(!FieldKind::Int32.is_similar_to(FieldKind::Int40));
        assert!(!FieldKind::UInt32.is_similar_to(FieldKind::FrameIndex));
        assert!(FieldKind::Boolean.is_similar_to(FieldKind::Boolean));
        assert!(!FieldKind::AbsoluteTime.is_similar_to(FieldKind::RelativeTime));
    }

    #[test]
    fn test_display_mode_hex() {
        assert!(FieldDisplay::Hex.prefers_hex());
        assert!(FieldDisplay::HexDec.prefers_hex());
        assert!(!FieldDisplay::DecHex.prefers_hex());
        assert!(!FieldDisplay::default().prefers_hex());
    }
}
