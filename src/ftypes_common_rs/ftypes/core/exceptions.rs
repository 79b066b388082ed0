/// フィールド値レイヤのエラー型定義
/// 入力テキストの不備（回復可能）だけをここで表現する。
/// 呼び出し側の契約違反（二重登録、アクセサの型不一致など）は panic で扱う。

use std::error::Error;
use std::fmt;

/// リテラル解析エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FvalueParseError {
    /// 数値として解釈できない（空文字列、末尾のゴミを含む）
    InvalidNumber(String),
    /// 変換時のオーバーフロー
    Overflow(String),
    /// 変換時のアンダーフロー
    Underflow(String),
    /// 型の最大値を超えている
    TooBig { input: String, max: u64 },
    /// 型の最小値を下回っている
    TooSmall { input: String, min: i64 },
    /// 文字定数の書式不正
    InvalidCharConst(String),
    /// 文字定数の値が 0xFF を超える
    CharConstTooLarge(String),
    /// 文字定数の閉じ引用符の位置が不正
    CharConstTooLong(String),
    /// 文字定数に表示不可能な文字が含まれる
    NonPrintableChar(u8),
    /// レガシーネットワーク番号として解釈できない
    InvalidLegacyNetwork(String),
    /// EUI-64 アドレスとして解釈できない
    InvalidEui64(String),
    /// 相対時間として解釈できない
    InvalidRelativeTime(String),
    /// 絶対時刻として解釈できない
    InvalidAbsoluteTime(String),
    /// バイト列として解釈できない
    InvalidBytes(String),
}

impl fmt::Display for FvalueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FvalueParseError::InvalidNumber(s) => write!(f, "\"{}\" is not a valid number.", s),
            FvalueParseError::Overflow(s) => write!(f, "\"{}\" causes an integer overflow.", s),
            FvalueParseError::Underflow(s) => write!(f, "\"{}\" causes an integer underflow.", s),
            FvalueParseError::TooBig { input, max } => {
                write!(f, "\"{}\" too big for this field, maximum {}.", input, max)
            }
            FvalueParseError::TooSmall { input, min } => {
                write!(f, "\"{}\" too small for this field, minimum {}.", input, min)
            }
            FvalueParseError::InvalidCharConst(s) => {
                write!(f, "\"{}\" isn't a valid character constant.", s)
            }
            FvalueParseError::CharConstTooLarge(s) => {
                write!(f, "\"{}\" is too large to be a valid character constant.", s)
            }
            FvalueParseError::CharConstTooLong(s) => {
                write!(f, "\"{}\" is too long to be a valid character constant.", s)
            }
            FvalueParseError::NonPrintableChar(c) => {
                write!(f, "Non-printable character '\\x{:02x}' in character constant.", c)
            }
            FvalueParseError::InvalidLegacyNetwork(s) => {
                write!(f, "\"{}\" is not a valid legacy network number.", s)
            }
            FvalueParseError::InvalidEui64(s) => {
                write!(f, "\"{}\" is not a valid EUI-64 address.", s)
            }
            FvalueParseError::InvalidRelativeTime(s) => write!(f, "\"{}\" is not a valid time.", s),
            FvalueParseError::InvalidAbsoluteTime(s) => write!(
                f,
                "\"{}\" is not a valid absolute time. Example: \"Nov 12, 1999 08:55:44.123\" or \"2011-07-04 12:34:56\"",
                s
            ),
            FvalueParseError::InvalidBytes(s) => write!(f, "\"{}\" is not a valid byte string.", s),
        }
    }
}

impl Error for FvalueParseError {}

/// 種別が要求された解析経路を持たない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedOperation {
    pub input: String,
    pub kind_pretty_name: &'static str,
}

impl fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" cannot be converted to {}.", self.input, self.kind_pretty_name)
    }
}

impl Error for UnsupportedOperation {}

/// スライス失敗（最初に失敗した範囲ノードを保持）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    /// 範囲がフィールド長を超える、または反転している
    OutOfRange { node: String, field_length: usize },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::OutOfRange { node, field_length } => {
                write!(f, "Range {} is out of bounds for a field of length {}", node, field_length)
            }
        }
    }
}

impl Error for SliceError {}

/// 範囲指定テキストの解析エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DRangeParseError {
    InvalidNumber(String),
    Overflow(String),
    InvalidRange(String),
    NonPositiveLength { range: String, length: i32 },
    SignMismatch { range: String, start: i32, end: i32 },
    EndNotAfterStart { range: String, start: i32, end: i32 },
}

impl fmt::Display for DRangeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DRangeParseError::InvalidNumber(s) => write!(f, "\"{}\" is not a valid number.", s),
            DRangeParseError::Overflow(s) => write!(f, "\"{}\" causes an integer overflow.", s),
            DRangeParseError::InvalidRange(s) => write!(f, "\"{}\" is not a valid range.", s),
            DRangeParseError::NonPositiveLength { range, length } => {
                write!(f, "Range {} isn't valid because length {} isn't positive", range, length)
            }
            DRangeParseError::SignMismatch { range, start, end } => write!(
                f,
                "Range {} isn't valid because {} and {} have different signs",
                range, start, end
            ),
            DRangeParseError::EndNotAfterStart { range, start, end } => write!(
                f,
                "Range {} isn't valid because {} is greater or equal than {}",
                range, start, end
            ),
        }
    }
}

impl Error for DRangeParseError {}

/// フィールド値レイヤの統合エラー型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FtypesError {
    /// リテラル解析エラー
    Parse(FvalueParseError),
    /// 未対応の変換
    Unsupported(UnsupportedOperation),
    /// スライスエラー
    Slice(SliceError),
    /// 範囲指定エラー
    Range(DRangeParseError),
}

impl fmt::Display for FtypesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FtypesError::Parse(err) => write!(f, "{}", err),
            FtypesError::Unsupported(err) => write!(f, "{}", err),
            FtypesError::Slice(err) => write!(f, "{}", err),
            FtypesError::Range(err) => write!(f, "{}", err),
        }
    }
}

impl Error for FtypesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FtypesError::Parse(err) => Some(err),
            FtypesError::Unsupported(err) => Some(err),
            FtypesError::Slice(err) => Some(err),
            FtypesError::Range(err) => Some(err),
        }
    }
}

// From実装で自動変換をサポート
impl From<FvalueParseError> for FtypesError {
    fn from(err: FvalueParseError) -> Self {
        FtypesError::Parse(err)
    }
}

impl From<UnsupportedOperation> for FtypesError {
    fn from(err: UnsupportedOperation) -> Self {
        FtypesError::Unsupported(err)
    }
}

impl From<SliceError> for FtypesError {
    fn from(err: SliceError) -> Self {
        FtypesError::Slice(err)
    }
}

impl From<DRangeParseError> for FtypesError {
    fn from(err: DRangeParseError) -> Self {
        FtypesError::Range(err)
    }
}

/// Result型のエイリアス
pub type FtResult<T> = Result<T, FtypesError>;

/// エラーヘルパー関数
impl FvalueParseError {
    /// 最大値超過エラーを作成
    pub fn too_big(input: &str, max: u64) -> Self {
        FvalueParseError::TooBig {
            input: input.to_string(),
            max,
        }
    }

    /// 最小値未満エラーを作成
    pub fn too_small(input: &str, min: i64) -> Self {
        FvalueParseError::TooSmall {
            input: input.to_string(),
            min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = FvalueParseError::too_big("256", 255);
        assert_eq!(format!("{}", err), "\"256\" too big for this field, maximum 255.");

        let err = FvalueParseError::too_small("-1", 0);
        assert_eq!(format!("{}", err), "\"-1\" too small for this field, minimum 0.");

        let err = FvalueParseError::NonPrintableChar(0x07);
        assert_eq!(format!("{}", err), "Non-printable character '\\x07' in character constant.");
    }

    #[test]
    fn test_unsupported_display() {
        let err = UnsupportedOperation {
            input: "abc".to_string(),
            kind_pretty_name: "Frame number",
        };
        assert_eq!(format!("{}", err), "\"abc\" cannot be converted to Frame number.");
    }

    #[test]
    fn test_ftypes_error_conversion() {
        let parse_err = FvalueParseError::Overflow("99999999999".to_string());
        let err: FtypesError = parse_err.clone().into();

        match err {
            FtypesError::Parse(inner) => assert_eq!(inner, parse_err),
            _ => panic!("Conversion failed"),
        }
    }

    #[test]
    fn test_error_chain() {
        let err = FtypesError::from(SliceError::OutOfRange {
            node: "5:10".to_string(),
            field_length: 10,
        });
        assert!(err.source().is_some());
    }
}
