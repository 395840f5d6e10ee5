//! 已编译的规则目录
//!
//! 目录在构建时一次性编译所有规则，之后只读；多个线程可以无锁并发查询。
//! 需要换规则时构建新的 `Catalogue` 并替换 `Arc`，不要原地修改。

use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::formats::{builtin_rules, CandidateFormat, FormatRule};

static SHARED: OnceLock<Arc<Catalogue>> = OnceLock::new();

#[derive(Clone, Debug)]
struct CompiledRule {
    regex: Regex,
    rule: FormatRule,
}

/// 有序、不可变的格式规则目录
#[derive(Clone, Debug)]
pub struct Catalogue {
    rules: Vec<CompiledRule>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 将规则模式包裹为整串、大小写不敏感的正则。
#[must_use]
pub fn anchored(pattern: &str) -> String {
    format!("(?i)^(?:{pattern})$")
}

/// 编译单条模式（已包裹锚点）。
///
/// # Errors
///
/// 当模式不是合法正则时返回 `regex::Error`。
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&anchored(pattern))
}

impl Catalogue {
    /// 按给定顺序编译规则；无效模式会被跳过并记录警告。
    #[must_use]
    pub fn new(rules: Vec<FormatRule>) -> Self {
        let total = rules.len();
        let rules = rules
            .into_iter()
            .filter_map(|rule| match compile_pattern(&rule.pattern) {
                Ok(regex) => Some(CompiledRule { regex, rule }),
                Err(err) => {
                    log::warn!("跳过无效哈希格式模式: {} ({err})", rule.pattern);
                    None
                }
            })
            .collect::<Vec<_>>();

        log::info!("哈希格式目录已编译: {}/{} 条规则", rules.len(), total);
        Self { rules }
    }

    /// 内置目录
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_rules())
    }

    /// 进程级共享的内置目录（首次调用时构建）
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::builtin())))
    }

    /// 在当前目录之后追加规则，返回新的目录，原目录不变。
    #[must_use]
    pub fn extend(
        &self,
        extra: Vec<FormatRule>,
    ) -> Self {
        let mut extended = self.clone();
        extended.rules.extend(Self::new(extra).rules);
        extended
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 所有规则下候选格式的总数
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.rules.iter().map(|r| r.rule.formats.len()).sum()
    }

    pub fn rules(&self) -> impl Iterator<Item = &FormatRule> + '_ {
        self.rules.iter().map(|r| &r.rule)
    }

    /// 按目录顺序返回与 `token` 整串匹配的规则（序号 + 候选格式）。
    ///
    /// `token` 应由调用方预先 trim。
    pub fn matching<'a>(
        &'a self,
        token: &'a str,
    ) -> impl Iterator<Item = (usize, &'a [CandidateFormat])> + 'a {
        self.rules
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.regex.is_match(token))
            .map(|(index, r)| (index, r.rule.formats.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_compiles_every_rule() {
        let catalogue = Catalogue::builtin();
        assert_eq!(catalogue.len(), builtin_rules().len());
        assert_eq!(catalogue.candidate_count(), 272);
    }

    #[test]
    fn test_no_rule_accepts_empty_string() {
        let catalogue = Catalogue::builtin();
        assert_eq!(catalogue.matching("").count(), 0);
    }

    #[test]
    fn test_anchoring_rejects_neighbouring_lengths() {
        let catalogue = Catalogue::new(vec![FormatRule::new(
            "[a-f0-9]{32}",
            vec![CandidateFormat::new("MD5", Some(0))],
        )]);
        let md5 = "5f4dcc3b5aa765d61d8327deb882cf99";
        assert_eq!(catalogue.matching(md5).count(), 1);
        assert_eq!(catalogue.matching(&md5[1..]).count(), 0);
        assert_eq!(catalogue.matching(&format!("{md5}0")).count(), 0);
        assert_eq!(catalogue.matching(&format!("x{md5}")).count(), 0);
    }

    #[test]
    fn test_top_level_alternation_is_anchored_as_a_whole() {
        let catalogue = Catalogue::new(vec![FormatRule::new(
            "abc|def",
            vec![CandidateFormat::new("alt", None)],
        )]);
        assert_eq!(catalogue.matching("abc").count(), 1);
        assert_eq!(catalogue.matching("def").count(), 1);
        assert_eq!(catalogue.matching("abcx").count(), 0);
        assert_eq!(catalogue.matching("xdef").count(), 0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let catalogue = Catalogue::builtin();
        let lower = catalogue.matching("5f4dcc3b5aa765d61d8327deb882cf99").count();
        let upper = catalogue.matching("5F4DCC3B5AA765D61D8327DEB882CF99").count();
        assert!(lower > 0);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let catalogue = Catalogue::new(vec![
            FormatRule::new("[a-f", vec![CandidateFormat::new("broken", None)]),
            FormatRule::new("[a-f]{2}", vec![CandidateFormat::new("ok", None)]),
        ]);
        assert_eq!(catalogue.len(), 1);
        assert!(compile_pattern("[a-f").is_err());
    }

    #[test]
    fn test_extend_appends_without_touching_original() {
        let base = Catalogue::builtin();
        let extended = base.extend(vec![FormatRule::new(
            "zz[0-9]{3}",
            vec![CandidateFormat::new("custom", Some(99_999))],
        )]);
        assert_eq!(extended.len(), base.len() + 1);
        assert_eq!(base.matching("zz123").count(), 0);
        let hits: Vec<_> = extended.matching("zz123").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, base.len());
    }

    #[test]
    fn test_shared_is_built_once() {
        let a = Catalogue::shared();
        let b = Catalogue::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
