/// バイト列向け正規表現
/// 大文字小文字を区別せず、対象・パターンとも UTF-8 であることを仮定しない。

use std::fmt;

use regex::bytes::{Regex, RegexBuilder};

/// コンパイル済みパターン（所有者が破棄すれば解放される）
#[derive(Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    /// パターンをコンパイルする
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .unicode(false)
            .build()?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn matches(&self, subject: &[u8]) -> bool {
        self.regex.is_match(subject)
    }

    pub fn pattern(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompiledPattern").field(&self.pattern()).finish()
    }
}
