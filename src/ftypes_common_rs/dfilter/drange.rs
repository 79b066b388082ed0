/// バイト範囲指定（スライス指定）
///
/// 範囲ノードの書式:
/// * `i:j` 開始 i、長さ j
/// * `i-j` 開始 i、終端 j（j を含む）
/// * `i`   開始 i、長さ 1
/// * `:j`  開始 0、長さ j
/// * `i:`  開始 i から末尾まで
///
/// 負のオフセットはフィールド末尾からの相対位置。

use std::fmt;
use std::str::FromStr;

use crate::ftypes_common_rs::ftypes::core::exceptions::DRangeParseError;
use crate::ftypes_common_rs::ftypes::types::integer::scan_integer;

/// 範囲の終わり方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DRangeEnd {
    /// フィールド末尾まで
    ToEnd,
    /// 固定長
    FixedLength(i32),
    /// 終端オフセット（含む）
    ExplicitEnd(i32),
}

/// 範囲ノード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DRangeNode {
    start: i32,
    end: DRangeEnd,
}

impl DRangeNode {
    pub fn new(start: i32, end: DRangeEnd) -> Self {
        Self { start, end }
    }

    pub fn to_the_end(start: i32) -> Self {
        Self::new(start, DRangeEnd::ToEnd)
    }

    pub fn with_length(start: i32, length: i32) -> Self {
        Self::new(start, DRangeEnd::FixedLength(length))
    }

    pub fn with_end_offset(start: i32, end: i32) -> Self {
        Self::new(start, DRangeEnd::ExplicitEnd(end))
    }

    pub fn start_offset(&self) -> i32 {
        self.start
    }

    pub fn ending(&self) -> DRangeEnd {
        self.end
    }

    pub fn length(&self) -> Option<i32> {
        match self.end {
            DRangeEnd::FixedLength(length) => Some(length),
            _ => None,
        }
    }

    pub fn end_offset(&self) -> Option<i32> {
        match self.end {
            DRangeEnd::ExplicitEnd(end) => Some(end),
            _ => None,
        }
    }
}

impl fmt::Display for DRangeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            DRangeEnd::ToEnd => write!(f, "{}:", self.start),
            DRangeEnd::ExplicitEnd(end) => write!(f, "{}-{}", self.start, end),
            DRangeEnd::FixedLength(length) => write!(f, "{}:{}", self.start, length),
        }
    }
}

/// 基数自動判定で 32 ビット符号付きのオフセットを読む。消費したバイト数も返す
fn str_to_i32(s: &str) -> Result<(i32, usize), DRangeParseError> {
    let scan = scan_integer(s);
    if scan.consumed == 0 {
        return Err(DRangeParseError::InvalidNumber(s.to_string()));
    }
    let value = if scan.negative {
        -i128::from(scan.magnitude)
    } else {
        i128::from(scan.magnitude)
    };
    if scan.overflowed || value > i128::from(i32::MAX) || value < i128::from(i32::MIN) {
        return Err(DRangeParseError::Overflow(s.to_string()));
    }
    Ok((value as i32, scan.consumed))
}

fn skip_whitespace(s: &str, mut pos: usize) -> usize {
    let bytes = s.as_bytes();
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

impl FromStr for DRangeNode {
    type Err = DRangeParseError;

    fn from_str(range: &str) -> Result<Self, Self::Err> {
        let invalid = || DRangeParseError::InvalidRange(range.to_string());

        let mut pos = 0;
        // `:j` は開始 0。`:` はそのまま長さ指定として読む
        let starts_with_colon = range.starts_with(':');
        let lower = if starts_with_colon {
            0
        } else {
            let (lower, consumed) = str_to_i32(range)?;
            pos += consumed;
            lower
        };

        pos = skip_whitespace(range, pos);
        let rest = &range[pos..];
        let (end, consumed) = if let Some(upper_text) = rest.strip_prefix('-') {
            let (upper, consumed) = str_to_i32(upper_text).map_err(|_| invalid())?;
            (DRangeEnd::ExplicitEnd(upper), consumed + 1)
        } else if let Some(length_text) = rest.strip_prefix(':') {
            if length_text.is_empty() {
                // 単独の `:` は先頭 1 バイト
                let end = if starts_with_colon {
                    DRangeEnd::FixedLength(1)
                } else {
                    DRangeEnd::ToEnd
                };
                (end, 1)
            } else {
                let (length, consumed) = str_to_i32(length_text).map_err(|_| invalid())?;
                (DRangeEnd::FixedLength(length), consumed + 1)
            }
        } else if rest.is_empty() {
            (DRangeEnd::FixedLength(1), 0)
        } else {
            return Err(invalid());
        };

        pos = skip_whitespace(range, pos + consumed);
        if pos != range.len() {
            return Err(invalid());
        }

        match end {
            DRangeEnd::FixedLength(length) if length <= 0 => {
                Err(DRangeParseError::NonPositiveLength {
                    range: range.to_string(),
                    length,
                })
            }
            DRangeEnd::ExplicitEnd(upper) => {
                if (lower < 0 && upper > 0) || (lower > 0 && upper < 0) {
                    return Err(DRangeParseError::SignMismatch {
                        range: range.to_string(),
                        start: lower,
                        end: upper,
                    });
                }
                if upper <= lower {
                    return Err(DRangeParseError::EndNotAfterStart {
                        range: range.to_string(),
                        start: lower,
                        end: upper,
                    });
                }
                Ok(DRangeNode::with_end_offset(lower, upper))
            }
            _ => Ok(DRangeNode::new(lower, end)),
        }
    }
}

/// 範囲ノードの並び（スライス指定）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DRange {
    nodes: Vec<DRangeNode>,
    has_total_length: bool,
    total_length: i32,
    min_start_offset: i32,
    max_start_offset: i32,
}

impl DRange {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            has_total_length: true,
            total_length: 0,
            min_start_offset: i32::MAX,
            max_start_offset: i32::MIN,
        }
    }

    pub fn from_nodes<I: IntoIterator<Item = DRangeNode>>(nodes: I) -> Self {
        let mut drange = Self::new();
        for node in nodes {
            drange.append(node);
        }
        drange
    }

    pub fn append(&mut self, node: DRangeNode) {
        self.update_with_node(&node);
        self.nodes.push(node);
    }

    pub fn prepend(&mut self, node: DRangeNode) {
        self.update_with_node(&node);
        self.nodes.insert(0, node);
    }

    fn update_with_node(&mut self, node: &DRangeNode) {
        match node.end {
            DRangeEnd::ToEnd => self.has_total_length = false,
            DRangeEnd::FixedLength(length) if self.has_total_length => {
                self.total_length = self.total_length.saturating_add(length);
            }
            _ => {}
        }
        self.min_start_offset = self.min_start_offset.min(node.start);
        self.max_start_offset = self.max_start_offset.max(node.start);
    }

    pub fn nodes(&self) -> &[DRangeNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 末尾までのノードを含まなければ true
    pub fn has_total_length(&self) -> bool {
        self.has_total_length
    }

    /// 固定長ノードの長さの合計
    pub fn total_length(&self) -> i32 {
        self.total_length
    }

    pub fn min_start_offset(&self) -> i32 {
        self.min_start_offset
    }

    pub fn max_start_offset(&self) -> i32 {
        self.max_start_offset
    }
}

impl Default for DRange {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DRange {
    type Err = DRangeParseError;

    /// `,` 区切りのノード列
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nodes = s
            .split(',')
            .map(|part| part.trim().parse::<DRangeNode>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DRange::from_nodes(nodes))
    }
}

impl fmt::Display for DRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.nodes.iter().map(|node| node.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_forms() {
        assert_eq!("2:3".parse::<DRangeNode>().unwrap(), DRangeNode::with_length(2, 3));
        assert_eq!("2-4".parse::<DRangeNode>().unwrap(), DRangeNode::with_end_offset(2, 4));
        assert_eq!("7".parse::<DRangeNode>().unwrap(), DRangeNode::with_length(7, 1));
        assert_eq!(":4".parse::<DRangeNode>().unwrap(), DRangeNode::with_length(0, 4));
        assert_eq!("5:".parse::<DRangeNode>().unwrap(), DRangeNode::to_the_end(5));
        assert_eq!("-3:".parse::<DRangeNode>().unwrap(), DRangeNode::to_the_end(-3));
        assert_eq!("-3--1".parse::<DRangeNode>().unwrap(), DRangeNode::with_end_offset(-3, -1));
        assert_eq!("0x10:2".parse::<DRangeNode>().unwrap(), DRangeNode::with_length(16, 2));
    }

    #[test]
    fn test_lone_colon_is_first_byte() {
        assert_eq!(":".parse::<DRangeNode>().unwrap(), DRangeNode::with_length(0, 1));
        assert_eq!("0:".parse::<DRangeNode>().unwrap(), DRangeNode::to_the_end(0));
    }

    #[test]
    fn test_node_errors() {
        assert_eq!(
            "x".parse::<DRangeNode>(),
            Err(DRangeParseError::InvalidNumber("x".to_string()))
        );
        assert_eq!(
            "3000000000:1".parse::<DRangeNode>(),
            Err(DRangeParseError::Overflow("3000000000:1".to_string()))
        );
        assert_eq!(
            "1:x".parse::<DRangeNode>(),
            Err(DRangeParseError::InvalidRange("1:x".to_string()))
        );
        assert_eq!(
            "1;2".parse::<DRangeNode>(),
            Err(DRangeParseError::InvalidRange("1;2".to_string()))
        );
        assert_eq!(
            "1:0".parse::<DRangeNode>(),
            Err(DRangeParseError::NonPositiveLength {
                range: "1:0".to_string(),
                length: 0
            })
        );
        assert_eq!(
            "-2-3".parse::<DRangeNode>(),
            Err(DRangeParseError::SignMismatch {
                range: "-2-3".to_string(),
                start: -2,
                end: 3
            })
        );
        assert_eq!(
            "4-4".parse::<DRangeNode>(),
            Err(DRangeParseError::EndNotAfterStart {
                range: "4-4".to_string(),
                start: 4,
                end: 4
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = "1:0".parse::<DRangeNode>().unwrap_err();
        assert_eq!(err.to_string(), "Range 1:0 isn't valid because length 0 isn't positive");
        let err = "4-2".parse::<DRangeNode>().unwrap_err();
        assert_eq!(err.to_string(), "Range 4-2 isn't valid because 4 is greater or equal than 2");
    }

    #[test]
    fn test_drange_summary() {
        let drange: DRange = "1:2, 4-6, -2:".parse().unwrap();
        assert_eq!(drange.nodes().len(), 3);
        assert!(!drange.has_total_length());
        assert_eq!(drange.total_length(), 2);
        assert_eq!(drange.min_start_offset(), -2);
        assert_eq!(drange.max_start_offset(), 4);
        assert_eq!(drange.to_string(), "1:2,4-6,-2:");

        let fixed: DRange = "0:4,8".parse().unwrap();
        assert!(fixed.has_total_length());
        assert_eq!(fixed.total_length(), 5);
    }

    #[test]
    fn test_prepend_keeps_order() {
        let mut drange = DRange::from_nodes([DRangeNode::with_length(4, 1)]);
        drange.prepend(DRangeNode::with_length(0, 2));
        assert_eq!(drange.to_string(), "0:2,4:1");
        assert_eq!(drange.min_start_offset(), 0);
    }
}
