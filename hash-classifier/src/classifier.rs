//! 哈希格式识别
//!
//! 给定一个文本 token，按目录顺序返回它在结构上可能属于的全部哈希格式。
//! 识别是纯函数：不做 I/O，不报错，同一输入总是得到同一输出。

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalogue::Catalogue;
use crate::report::{Report, ReportOptions};

/// 一个结构匹配到的候选格式（含没有 hashcat 模式的条目）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatMatch {
    pub name: String,
    pub engine_mode: Option<u32>,
    pub extended: bool,
    /// 命中规则在目录中的序号
    pub rule_index: usize,
}

/// 可直接交给 hashcat 的 (名称, 模式) 条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMode {
    pub name: String,
    pub mode: u32,
}

/// 识别状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recognition {
    /// 没有任何规则匹配
    Unknown,
    /// 有规则匹配，但所有候选都没有 hashcat 模式
    Unsupported,
    /// 至少有一个可用的 hashcat 模式
    Actionable,
}

/// 单个 token 的识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    input: String,
    modes: Vec<EngineMode>,
    matches: Vec<FormatMatch>,
}

impl ClassificationResult {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            modes: Vec::new(),
            matches: Vec::new(),
        }
    }

    // 名称重复时保留首次出现的位置，模式取后出现的值
    fn insert_mode(
        &mut self,
        name: &str,
        mode: u32,
    ) {
        if let Some(existing) = self.modes.iter_mut().find(|m| m.name == name) {
            existing.mode = mode;
        } else {
            self.modes.push(EngineMode {
                name: name.to_string(),
                mode,
            });
        }
    }

    /// trim 之后参与匹配的输入
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// 可执行的 (名称, 模式) 列表，按目录顺序
    #[must_use]
    pub fn modes(&self) -> &[EngineMode] {
        &self.modes
    }

    /// 查找某个格式名称对应的 hashcat 模式
    #[must_use]
    pub fn mode(
        &self,
        name: &str,
    ) -> Option<u32> {
        self.modes.iter().find(|m| m.name == name).map(|m| m.mode)
    }

    /// 所有结构匹配（含不可执行的候选），按匹配顺序
    #[must_use]
    pub fn matches(&self) -> &[FormatMatch] {
        &self.matches
    }

    /// 没有可执行的 hashcat 模式
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// 至少有一条规则在结构上匹配
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !self.matches.is_empty()
    }

    #[must_use]
    pub fn recognition(&self) -> Recognition {
        if !self.modes.is_empty() {
            Recognition::Actionable
        } else if self.matches.is_empty() {
            Recognition::Unknown
        } else {
            Recognition::Unsupported
        }
    }

    /// 生成可读报告；`options` 只影响展示，不影响结果本身
    #[must_use]
    pub fn report(
        &self,
        options: ReportOptions,
    ) -> Report<'_> {
        Report::new(self, options)
    }
}

/// 哈希格式识别器
///
/// 持有共享目录的 `Arc`，克隆开销很小，可在线程间自由传递。
#[derive(Clone, Debug)]
pub struct Classifier {
    catalogue: Arc<Catalogue>,
    parallel: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Catalogue::shared())
    }
}

impl Classifier {
    #[must_use]
    pub const fn new(catalogue: Arc<Catalogue>) -> Self {
        Self {
            catalogue,
            parallel: true,
        }
    }

    /// 批量识别是否使用 rayon 并行
    #[must_use]
    pub const fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// 识别单个 token
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_classifier::Classifier;
    ///
    /// let result = Classifier::default().classify("5f4dcc3b5aa765d61d8327deb882cf99");
    /// assert_eq!(result.modes()[0].name, "MD5");
    /// assert_eq!(result.modes()[0].mode, 0);
    /// ```
    #[must_use]
    pub fn classify(
        &self,
        token: &str,
    ) -> ClassificationResult {
        let token = token.trim();
        let mut result = ClassificationResult::new(token);

        for (rule_index, formats) in self.catalogue.matching(token) {
            log::trace!("规则 #{rule_index} 命中: {} 个候选", formats.len());
            for format in formats {
                result.matches.push(FormatMatch {
                    name: format.name.clone(),
                    engine_mode: format.engine_mode,
                    extended: format.extended,
                    rule_index,
                });
                if let Some(mode) = format.engine_mode {
                    result.insert_mode(&format.name, mode);
                }
            }
        }

        log::debug!(
            "识别完成: {} 个结构匹配, {} 个可用模式",
            result.matches.len(),
            result.modes.len()
        );
        result
    }

    /// 批量识别（保持输入顺序）
    #[must_use]
    pub fn classify_batch(
        &self,
        tokens: &[&str],
    ) -> Vec<ClassificationResult> {
        if self.parallel {
            tokens.par_iter().map(|t| self.classify(t)).collect()
        } else {
            tokens.iter().map(|t| self.classify(t)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{CandidateFormat, FormatRule};
    use pretty_assertions::assert_eq;

    const MD5_PASSWORD: &str = "5f4dcc3b5aa765d61d8327deb882cf99";
    const BCRYPT: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

    fn names(result: &ClassificationResult) -> Vec<&str> {
        result.modes().iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_md5_is_first_actionable() {
        let result = Classifier::default().classify(MD5_PASSWORD);
        assert_eq!(
            result.modes()[0],
            EngineMode {
                name: "MD5".to_string(),
                mode: 0
            }
        );
        assert_eq!(result.mode("NTLM"), Some(1000));
        assert_eq!(result.recognition(), Recognition::Actionable);
    }

    #[test]
    fn test_salted_suffix_overlaps_with_plain_md5() {
        let result = Classifier::default().classify(&format!("{MD5_PASSWORD}:ab"));
        assert_eq!(result.mode("MD5"), Some(0));
        assert_eq!(result.mode("osCommerce"), Some(21));
        assert_eq!(result.mode("xt:Commerce"), Some(21));
        let names = names(&result);
        let md5 = names.iter().position(|n| *n == "MD5");
        let oscommerce = names.iter().position(|n| *n == "osCommerce");
        assert!(md5 < oscommerce);
    }

    #[test]
    fn test_bcrypt_excludes_hex_candidates() {
        assert_eq!(BCRYPT.len(), 7 + 53);
        let result = Classifier::default().classify(BCRYPT);
        assert_eq!(names(&result), vec!["Blowfish(OpenBSD)", "bcrypt"]);
        assert_eq!(result.mode("bcrypt"), Some(3200));
        assert_eq!(result.mode("Blowfish(OpenBSD)"), Some(3200));
        assert_eq!(result.mode("MD5"), None);
    }

    #[test]
    fn test_empty_and_prose_are_unknown() {
        let classifier = Classifier::default();
        for token in ["", "   ", "not a hash at all!!"] {
            let result = classifier.classify(token);
            assert!(result.is_empty());
            assert!(!result.is_recognized());
            assert_eq!(result.recognition(), Recognition::Unknown);
        }
    }

    #[test]
    fn test_checksum_shape_is_recognized_but_not_actionable() {
        let result = Classifier::default().classify("abcd");
        assert!(result.is_empty());
        assert!(result.is_recognized());
        assert_eq!(result.recognition(), Recognition::Unsupported);
        assert_eq!(result.matches()[0].name, "CRC-16");
        assert!(result.matches().iter().all(|m| m.engine_mode.is_none()));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let classifier = Classifier::default();
        let plain = classifier.classify(MD5_PASSWORD);
        let padded = classifier.classify(&format!(" \t{MD5_PASSWORD} \n"));
        assert_eq!(plain, padded);
        assert_eq!(padded.input(), MD5_PASSWORD);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = Classifier::default();
        let sha1 = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
        assert_eq!(classifier.classify(sha1), classifier.classify(sha1));
    }

    #[test]
    fn test_sha1_reports_generic_and_nested_variants() {
        let result = Classifier::default().classify("da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(result.modes()[0].name, "SHA-1");
        assert_eq!(result.mode("sha1(sha1(sha1($pass)))"), Some(4600));
        assert!(result
            .matches()
            .iter()
            .any(|m| m.name == "Cisco Type 7" && m.extended));
    }

    #[test]
    fn test_matches_follow_catalogue_order() {
        let result = Classifier::default().classify(&format!("{MD5_PASSWORD}:ab"));
        let indices: Vec<usize> = result.matches().iter().map(|m| m.rule_index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn test_rule_order_is_preserved_in_modes() {
        let catalogue = Catalogue::new(vec![
            FormatRule::new("[0-9]+", vec![CandidateFormat::new("digits", Some(2))]),
            FormatRule::new("[0-9]{3}", vec![CandidateFormat::new("three", Some(1))]),
        ]);
        let classifier = Classifier::new(Arc::new(catalogue));
        assert_eq!(names(&classifier.classify("123")), vec!["digits", "three"]);
        assert_eq!(names(&classifier.classify("1234")), vec!["digits"]);
    }

    #[test]
    fn test_recurring_name_keeps_first_position_and_last_mode() {
        let catalogue = Catalogue::new(vec![
            FormatRule::new(
                "[a-z]+",
                vec![
                    CandidateFormat::new("shared", Some(1)),
                    CandidateFormat::new("other", Some(5)),
                ],
            ),
            FormatRule::new("[a-z]{4}", vec![CandidateFormat::new("shared", Some(7))]),
        ]);
        let result = Classifier::new(Arc::new(catalogue)).classify("abcd");
        assert_eq!(names(&result), vec!["shared", "other"]);
        assert_eq!(result.mode("shared"), Some(7));
        assert_eq!(result.matches().len(), 3);
    }

    #[test]
    fn test_phpass_listed_once() {
        let result = Classifier::default().classify("$P$984478476IagS59wHZvyQMArzfx58u.");
        assert_eq!(
            names(&result),
            vec!["Wordpress ≥ v2.6.2", "Joomla ≥ v2.5.18", "PHPass' Portable Hash"]
        );
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let tokens = [BCRYPT, MD5_PASSWORD, "nope!", "{SHA}qUqP5cyxm6YcTAhz05Hph5gvu9M="];
        let parallel = Classifier::default().classify_batch(&tokens);
        let sequential = Classifier::default().with_parallel(false).classify_batch(&tokens);
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.len(), 4);
        assert_eq!(parallel[1].modes()[0].name, "MD5");
        assert!(parallel[2].is_empty());
        assert_eq!(parallel[3].mode("SHA-1(Base64)"), Some(101));
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = Classifier::default().classify("abcd");
        let json = serde_json::to_value(&result).unwrap_or_default();
        assert_eq!(json["input"], "abcd");
        assert_eq!(json["modes"].as_array().map(Vec::len), Some(0));
        assert_eq!(json["matches"][0]["name"], "CRC-16");
    }
}
