/// スライスエンジン
/// 範囲ノードを順に解決して元の値からバイトを集め、新しいバイト列値を作る。

use log::debug;

use super::exceptions::SliceError;
use super::field_value::{FieldValue, Storage};
use super::kind::FieldKind;
use crate::ftypes_common_rs::dfilter::drange::{DRange, DRangeEnd, DRangeNode};

/// 負のオフセットを末尾基準で解決する（解決後も負なら None）
fn resolve_offset(offset: i64, field_length: i64) -> Option<i64> {
    let resolved = if offset < 0 { offset + field_length } else { offset };
    (resolved >= 0).then_some(resolved)
}

/// ノードを (開始位置, 長さ) に解決する
pub fn resolve_node(node: &DRangeNode, field_length: usize) -> Option<(usize, usize)> {
    let field_length = field_length as i64;
    let start = resolve_offset(i64::from(node.start_offset()), field_length)?;

    let length = match node.ending() {
        DRangeEnd::ToEnd => field_length - start,
        DRangeEnd::FixedLength(length) => {
            let length = i64::from(length);
            if start + length > field_length {
                return None;
            }
            length
        }
        DRangeEnd::ExplicitEnd(end) => {
            let end = resolve_offset(i64::from(end), field_length)?;
            if end < start || end >= field_length {
                return None;
            }
            end - start + 1
        }
    };

    if length <= 0 {
        return None;
    }
    Some((start as usize, length as usize))
}

/// 値をスライスする。最初に失敗したノードで全体を中止し、途中結果は返さない
pub fn slice_value(value: &FieldValue, drange: &DRange) -> Result<FieldValue, SliceError> {
    let slice = match value.descriptor().slice {
        Some(slice) => slice,
        None => panic!("field kind {:?} cannot be sliced", value.kind()),
    };
    let field_length = value.length();

    let mut bytes = Vec::new();
    for node in drange.nodes() {
        let (start, length) = resolve_node(node, field_length).ok_or_else(|| {
            debug!(
                "slice {} out of range for {} of length {}",
                node,
                value.type_name(),
                field_length
            );
            SliceError::OutOfRange {
                node: node.to_string(),
                field_length,
            }
        })?;
        slice(value.storage(), &mut bytes, start, length);
    }

    Ok(FieldValue::from_storage(FieldKind::Bytes, Storage::Bytes(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_negative_start() {
        assert_eq!(resolve_node(&DRangeNode::to_the_end(-3), 10), Some((7, 3)));
        assert_eq!(resolve_node(&DRangeNode::to_the_end(-11), 10), None);
    }

    #[test]
    fn test_resolve_fixed_length() {
        assert_eq!(resolve_node(&DRangeNode::with_length(5, 5), 10), Some((5, 5)));
        assert_eq!(resolve_node(&DRangeNode::with_length(5, 10), 10), None);
        assert_eq!(resolve_node(&DRangeNode::with_length(2, 0), 10), None);
    }

    #[test]
    fn test_resolve_explicit_end() {
        assert_eq!(resolve_node(&DRangeNode::with_end_offset(0, -1), 10), Some((0, 10)));
        assert_eq!(resolve_node(&DRangeNode::with_end_offset(2, 4), 10), Some((2, 3)));
        assert_eq!(resolve_node(&DRangeNode::with_end_offset(2, 10), 10), None);
        assert_eq!(resolve_node(&DRangeNode::with_end_offset(-2, -5), 10), None);
    }

    #[test]
    fn test_resolve_to_end_past_length() {
        assert_eq!(resolve_node(&DRangeNode::to_the_end(10), 10), None);
    }
}
