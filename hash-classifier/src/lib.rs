#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! 哈希格式识别
//!
//! 对一个不透明的文本 token，按固定的规则目录给出它在结构上可能属于的哈希格式，
//! 并标注 hashcat 是否直接支持以及对应的 `-m` 模式。本 crate 不做破解。

pub mod catalogue;
pub mod classifier;
pub mod config;
pub mod formats;
pub mod prelude;
pub mod report;

pub use catalogue::Catalogue;
pub use classifier::{ClassificationResult, Classifier, EngineMode, FormatMatch, Recognition};
pub use config::ClassifierConfig;
pub use formats::{CandidateFormat, FormatRule};
pub use report::{Report, ReportOptions};

/// 简单API：用进程级共享的内置目录识别单个 token
///
/// # Examples
///
/// ```
/// let result = hash_classifier::classify("$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy");
/// assert_eq!(result.mode("bcrypt"), Some(3200));
/// assert_eq!(result.mode("MD5"), None);
/// ```
#[must_use]
pub fn classify(token: &str) -> ClassificationResult {
    Classifier::default().classify(token)
}
