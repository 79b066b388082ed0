/// フィールド値
/// ディスクリプタへの参照と格納領域の組。操作はすべてディスクリプタ経由で呼び出す。

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use super::exceptions::{FtResult, FtypesError, SliceError, UnsupportedOperation};
use super::kind::{FieldDisplay, FieldKind, ReprKind, StorageClass};
use super::nstime::NsTime;
use super::pattern::CompiledPattern;
use super::registry::{registry, KindDescriptor, ParseFn};
use super::slice::slice_value;
use crate::ftypes_common_rs::dfilter::drange::DRange;

/// 値の格納領域
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    UInteger(u32),
    SInteger(i32),
    UInteger64(u64),
    SInteger64(i64),
    Time(NsTime),
    Bytes(Vec<u8>),
}

impl Storage {
    pub fn class(&self) -> StorageClass {
        match self {
            Storage::UInteger(_) => StorageClass::UInteger,
            Storage::SInteger(_) => StorageClass::SInteger,
            Storage::UInteger64(_) => StorageClass::UInteger64,
            Storage::SInteger64(_) => StorageClass::SInteger64,
            Storage::Time(_) => StorageClass::Time,
            Storage::Bytes(_) => StorageClass::Bytes,
        }
    }

    /// 格納形式ごとの取り出し（形式違いは呼び出し側のバグなので panic）
    pub fn uinteger(&self) -> u32 {
        match self {
            Storage::UInteger(v) => *v,
            other => storage_mismatch(StorageClass::UInteger, other.class()),
        }
    }

    pub fn sinteger(&self) -> i32 {
        match self {
            Storage::SInteger(v) => *v,
            other => storage_mismatch(StorageClass::SInteger, other.class()),
        }
    }

    pub fn uinteger64(&self) -> u64 {
        match self {
            Storage::UInteger64(v) => *v,
            other => storage_mismatch(StorageClass::UInteger64, other.class()),
        }
    }

    pub fn sinteger64(&self) -> i64 {
        match self {
            Storage::SInteger64(v) => *v,
            other => storage_mismatch(StorageClass::SInteger64, other.class()),
        }
    }

    pub fn time(&self) -> NsTime {
        match self {
            Storage::Time(t) => *t,
            other => storage_mismatch(StorageClass::Time, other.class()),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Storage::Bytes(b) => b,
            other => storage_mismatch(StorageClass::Bytes, other.class()),
        }
    }
}

fn storage_mismatch(expected: StorageClass, found: StorageClass) -> ! {
    panic!("storage mismatch: expected {:?}, found {:?}", expected, found)
}

/// フィールド値インスタンス
///
/// `Clone` はバイト列も含めた深いコピーになる。
#[derive(Clone)]
pub struct FieldValue {
    descriptor: &'static KindDescriptor,
    storage: Storage,
}

impl FieldValue {
    /// 種別のゼロ値を生成
    pub fn new(kind: FieldKind) -> Self {
        let descriptor = registry().lookup(kind);
        Self {
            descriptor,
            storage: (descriptor.construct)(),
        }
    }

    /// 格納領域を直接指定して生成（格納形式は種別と一致していること）
    pub fn from_storage(kind: FieldKind, storage: Storage) -> Self {
        let descriptor = registry().lookup(kind);
        if storage.class() != descriptor.storage {
            storage_mismatch(descriptor.storage, storage.class());
        }
        Self { descriptor, storage }
    }

    /// フィルタ式中の自由形式テキストから生成
    pub fn from_literal(kind: FieldKind, s: &str) -> FtResult<Self> {
        let descriptor = registry().lookup(kind);
        Self::parse_with(descriptor, descriptor.parse_literal, s)
    }

    /// 引用符付き文字列リテラルから生成
    pub fn from_quoted(kind: FieldKind, s: &str) -> FtResult<Self> {
        let descriptor = registry().lookup(kind);
        Self::parse_with(descriptor, descriptor.parse_quoted, s)
    }

    fn parse_with(
        descriptor: &'static KindDescriptor,
        parser: Option<ParseFn>,
        s: &str,
    ) -> FtResult<Self> {
        let parser = parser.ok_or_else(|| UnsupportedOperation {
            input: s.to_string(),
            kind_pretty_name: descriptor.pretty_name,
        })?;
        match parser(s) {
            Ok(storage) => Ok(Self { descriptor, storage }),
            Err(err) => {
                trace!("{} literal rejected: {}", descriptor.name, err);
                Err(FtypesError::Parse(err))
            }
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.descriptor.kind
    }

    pub fn descriptor(&self) -> &'static KindDescriptor {
        self.descriptor
    }

    pub fn type_name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// 論理長（スライスの基準になる長さ）
    pub fn length(&self) -> usize {
        match self.descriptor.len {
            Some(len) => len(&self.storage),
            None => self.descriptor.wire_size,
        }
    }

    /// 文字列表現。種別がその表現を持たなければ `None`
    pub fn to_string_repr(&self, rtype: ReprKind, display: FieldDisplay) -> Option<String> {
        let format = self.descriptor.format?;
        format(self.descriptor.kind, &self.storage, rtype, display)
    }

    /// 文字列表現に必要なバッファ長。種別がその表現を持たなければ `None`
    pub fn string_repr_len(&self, rtype: ReprKind, display: FieldDisplay) -> Option<usize> {
        let repr_len = self.descriptor.repr_len?;
        repr_len(self.descriptor.kind, &self.storage, rtype, display)
    }

    fn expect_storage(&self, class: StorageClass) {
        if self.descriptor.storage != class {
            panic!(
                "accessor for {:?} storage used on field kind {:?}",
                class, self.descriptor.kind
            );
        }
    }

    pub fn get_uinteger(&self) -> u32 {
        self.expect_storage(StorageClass::UInteger);
        self.storage.uinteger()
    }

    pub fn set_uinteger(&mut self, value: u32) {
        self.expect_storage(StorageClass::UInteger);
        self.storage = Storage::UInteger(value);
    }

    pub fn get_sinteger(&self) -> i32 {
        self.expect_storage(StorageClass::SInteger);
        self.storage.sinteger()
    }

    pub fn set_sinteger(&mut self, value: i32) {
        self.expect_storage(StorageClass::SInteger);
        self.storage = Storage::SInteger(value);
    }

    pub fn get_uinteger64(&self) -> u64 {
        self.expect_storage(StorageClass::UInteger64);
        self.storage.uinteger64()
    }

    pub fn set_uinteger64(&mut self, value: u64) {
        self.expect_storage(StorageClass::UInteger64);
        self.storage = Storage::UInteger64(value);
    }

    pub fn get_sinteger64(&self) -> i64 {
        self.expect_storage(StorageClass::SInteger64);
        self.storage.sinteger64()
    }

    pub fn set_sinteger64(&mut self, value: i64) {
        self.expect_storage(StorageClass::SInteger64);
        self.storage = Storage::SInteger64(value);
    }

    pub fn get_time(&self) -> NsTime {
        self.expect_storage(StorageClass::Time);
        self.storage.time()
    }

    pub fn set_time(&mut self, value: NsTime) {
        self.expect_storage(StorageClass::Time);
        self.storage = Storage::Time(value);
    }

    pub fn get_bytes(&self) -> &[u8] {
        self.expect_storage(StorageClass::Bytes);
        self.storage.bytes()
    }

    pub fn set_bytes(&mut self, value: Vec<u8>) {
        self.expect_storage(StorageClass::Bytes);
        self.storage = Storage::Bytes(value);
    }

    /// 全順序比較。順序を持たない種別や格納形式の異なる値同士は panic
    pub fn cmp_order(&self, other: &FieldValue) -> Ordering {
        let compare = match self.descriptor.compare {
            Some(compare) => compare,
            None => panic!("field kind {:?} cannot be ordered", self.descriptor.kind),
        };
        if self.descriptor.storage != other.descriptor.storage {
            panic!(
                "cannot compare {:?} with {:?}",
                self.descriptor.kind, other.descriptor.kind
            );
        }
        compare(&self.storage, &other.storage)
    }

    pub fn cmp_eq(&self, other: &FieldValue) -> bool {
        self.cmp_order(other) == Ordering::Equal
    }

    pub fn cmp_ne(&self, other: &FieldValue) -> bool {
        self.cmp_order(other) != Ordering::Equal
    }

    pub fn cmp_gt(&self, other: &FieldValue) -> bool {
        self.cmp_order(other) == Ordering::Greater
    }

    pub fn cmp_ge(&self, other: &FieldValue) -> bool {
        self.cmp_order(other) != Ordering::Less
    }

    pub fn cmp_lt(&self, other: &FieldValue) -> bool {
        self.cmp_order(other) == Ordering::Less
    }

    pub fn cmp_le(&self, other: &FieldValue) -> bool {
        self.cmp_order(other) != Ordering::Greater
    }

    /// `a & b` が非ゼロか
    pub fn bitwise_and(&self, other: &FieldValue) -> bool {
        match self.descriptor.bitwise_and {
            Some(test) => test(&self.storage, &other.storage),
            None => panic!("field kind {:?} has no bitwise-and test", self.descriptor.kind),
        }
    }

    pub fn contains(&self, other: &FieldValue) -> bool {
        match self.descriptor.contains {
            Some(test) => test(&self.storage, &other.storage),
            None => panic!("field kind {:?} has no contains test", self.descriptor.kind),
        }
    }

    pub fn matches(&self, pattern: &CompiledPattern) -> bool {
        match self.descriptor.matches {
            Some(test) => {
                let matched = test(&self.storage, pattern);
                trace!("{} matches /{}/: {}", self.descriptor.name, pattern.pattern(), matched);
                matched
            }
            None => panic!("field kind {:?} has no matches test", self.descriptor.kind),
        }
    }

    /// バイト範囲を切り出して新しいバイト列値を作る
    pub fn slice(&self, drange: &DRange) -> Result<FieldValue, SliceError> {
        slice_value(self, drange)
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.kind == other.descriptor.kind && self.storage == other.storage
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValue")
            .field("kind", &self.descriptor.kind)
            .field("storage", &self.storage)
            .finish()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_string_repr(ReprKind::Display, FieldDisplay::default()) {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "<{}>", self.descriptor.pretty_name),
        }
    }
}
