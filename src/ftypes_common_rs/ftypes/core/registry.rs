/// 種別レジストリ
/// 種別ごとのディスクリプタ（メタデータと操作関数テーブル）を保持する。
/// プロセス全体のテーブルは初回アクセス時に一度だけ構築され、以降は読み取り専用。

use std::cmp::Ordering;
use std::fmt;

use log::debug;
use once_cell::sync::Lazy;

use super::exceptions::FvalueParseError;
use super::field_value::Storage;
use super::kind::{FieldDisplay, FieldKind, ReprKind, StorageClass};
use super::pattern::CompiledPattern;
use crate::ftypes_common_rs::ftypes::types::builtin_descriptor;

pub type ConstructFn = fn() -> Storage;
pub type ParseFn = fn(&str) -> Result<Storage, FvalueParseError>;
pub type FormatFn = fn(FieldKind, &Storage, ReprKind, FieldDisplay) -> Option<String>;
pub type ReprLenFn = fn(FieldKind, &Storage, ReprKind, FieldDisplay) -> Option<usize>;
pub type CompareFn = fn(&Storage, &Storage) -> Ordering;
pub type PredicateFn = fn(&Storage, &Storage) -> bool;
pub type MatchesFn = fn(&Storage, &CompiledPattern) -> bool;
pub type LenFn = fn(&Storage) -> usize;
pub type SliceFn = fn(&Storage, &mut Vec<u8>, usize, usize);

/// 1つの種別の登録情報
///
/// 意味を持たない操作は `None` で表す。スタブ関数は置かない。
pub struct KindDescriptor {
    pub kind: FieldKind,
    /// 短い識別子
    pub name: &'static str,
    /// 人間向けの名前
    pub pretty_name: &'static str,
    /// ワイヤ上のバイト数（0 = 可変/なし）
    pub wire_size: usize,
    /// アクセサが要求する格納形式
    pub storage: StorageClass,
    /// ゼロ値の生成
    pub construct: ConstructFn,
    /// フィルタ式中の自由形式テキストからの変換
    pub parse_literal: Option<ParseFn>,
    /// 引用符付き文字列リテラルからの変換
    pub parse_quoted: Option<ParseFn>,
    pub format: Option<FormatFn>,
    pub repr_len: Option<ReprLenFn>,
    /// 全順序比較（None なら順序付け不可）
    pub compare: Option<CompareFn>,
    pub bitwise_and: Option<PredicateFn>,
    pub contains: Option<PredicateFn>,
    pub matches: Option<MatchesFn>,
    /// 論理長（None ならワイヤサイズを使う）
    pub len: Option<LenFn>,
    pub slice: Option<SliceFn>,
}

impl fmt::Debug for KindDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindDescriptor")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("pretty_name", &self.pretty_name)
            .field("wire_size", &self.wire_size)
            .field("storage", &self.storage)
            .field("can_order", &self.compare.is_some())
            .field("can_slice", &self.slice.is_some())
            .finish()
    }
}

/// 種別タグで引ける固定長テーブル
pub struct TypeRegistry {
    table: [Option<&'static KindDescriptor>; FieldKind::COUNT],
}

impl TypeRegistry {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self {
            table: [None; FieldKind::COUNT],
        }
    }

    /// 組み込みの全種別を登録したレジストリを作成
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self::new();
        for kind in FieldKind::ALL {
            registry.register(kind, builtin_descriptor(kind));
        }
        registry
    }

    /// ディスクリプタを登録する
    ///
    /// 同じタグの再登録、タグとディスクリプタの不一致は契約違反として panic する。
    pub fn register(&mut self, kind: FieldKind, descriptor: &'static KindDescriptor) {
        assert_eq!(
            descriptor.kind, kind,
            "descriptor '{}' registered under mismatched kind {:?}",
            descriptor.name, kind
        );
        let slot = &mut self.table[kind.index()];
        assert!(slot.is_none(), "field kind {:?} is already registered", kind);
        debug!("registered field kind {} ({})", descriptor.name, descriptor.pretty_name);
        *slot = Some(descriptor);
    }

    /// ディスクリプタを取得する（未登録なら panic）
    pub fn lookup(&self, kind: FieldKind) -> &'static KindDescriptor {
        match self.table[kind.index()] {
            Some(descriptor) => descriptor,
            None => panic!("field kind {:?} is not registered", kind),
        }
    }

    pub fn is_registered(&self, kind: FieldKind) -> bool {
        self.table[kind.index()].is_some()
    }

    /// 登録済みディスクリプタを列挙順に返す
    pub fn descriptors(&self) -> impl Iterator<Item = &'static KindDescriptor> + '_ {
        self.table.iter().filter_map(|slot| *slot)
    }

    pub fn kind_name(&self, kind: FieldKind) -> &'static str {
        self.lookup(kind).name
    }

    pub fn kind_pretty_name(&self, kind: FieldKind) -> &'static str {
        self.lookup(kind).pretty_name
    }

    pub fn wire_size(&self, kind: FieldKind) -> usize {
        self.lookup(kind).wire_size
    }

    /// eq/ne/gt/ge/lt/le すべてに共通
    pub fn can_order(&self, kind: FieldKind) -> bool {
        self.lookup(kind).compare.is_some()
    }

    pub fn can_bitwise_and(&self, kind: FieldKind) -> bool {
        self.lookup(kind).bitwise_and.is_some()
    }

    pub fn can_contain(&self, kind: FieldKind) -> bool {
        self.lookup(kind).contains.is_some()
    }

    pub fn can_match(&self, kind: FieldKind) -> bool {
        self.lookup(kind).matches.is_some()
    }

    pub fn can_slice(&self, kind: FieldKind) -> bool {
        self.lookup(kind).slice.is_some()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static FTYPE_REGISTRY: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::with_builtin_kinds);

/// プロセス全体のレジストリ
pub fn registry() -> &'static TypeRegistry {
    &FTYPE_REGISTRY
}

/// レジストリを明示的に初期化する（他スレッドから使う前に呼んでおくとよい）
pub fn ftypes_initialize() {
    Lazy::force(&FTYPE_REGISTRY);
}

pub fn kind_name(kind: FieldKind) -> &'static str {
    registry().kind_name(kind)
}

pub fn kind_pretty_name(kind: FieldKind) -> &'static str {
    registry().kind_pretty_name(kind)
}

pub fn wire_size(kind: FieldKind) -> usize {
    registry().wire_size(kind)
}
