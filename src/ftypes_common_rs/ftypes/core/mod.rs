//! フィールド値コア機能
//! 種別レジストリ、値インスタンス、エラー、スライス、パターン照合

pub mod kind;
pub mod nstime;
pub mod exceptions;
pub mod registry;
pub mod field_value;
pub mod slice;
pub mod pattern;

// 便利な再エクスポート
pub use kind::{types_are_similar, FieldDisplay, FieldKind, ReprKind, StorageClass};
pub use nstime::{NsTime, NSECS_PER_SEC};
pub use exceptions::{
    DRangeParseError, FtResult, FtypesError, FvalueParseError, SliceError, UnsupportedOperation,
};
pub use registry::{
    ftypes_initialize, kind_name, kind_pretty_name, registry, wire_size, KindDescriptor,
    TypeRegistry,
};
pub use field_value::{FieldValue, Storage};
pub use slice::slice_value;
pub use pattern::CompiledPattern;
