/// ftypes Rust Implementation
/// Typed field values for protocol analysis: kind registry, parsing, formatting and slicing

pub mod ftypes_common_rs;

// 便利な再エクスポート
pub mod prelude {
    pub use crate::ftypes_common_rs::dfilter::drange::{DRange, DRangeEnd, DRangeNode};
    pub use crate::ftypes_common_rs::ftypes::core::{
        ftypes_initialize, kind_name, kind_pretty_name, registry, types_are_similar, wire_size,
        CompiledPattern, DRangeParseError, FieldDisplay, FieldKind, FieldValue, FtResult,
        FtypesError, FvalueParseError, NsTime, ReprKind, SliceError, Storage,
    };
}
