//! Prelude 模块 - 一次性导入所有常用类型
//!
//! ```rust
//! use hash_classifier::prelude::*;
//! ```

// 识别器
pub use crate::classifier::{
    ClassificationResult, Classifier, EngineMode, FormatMatch, Recognition,
};
pub use crate::classify;

// 规则与目录
pub use crate::catalogue::Catalogue;
pub use crate::formats::{builtin_rules, CandidateFormat, FormatRule};

// 报告
pub use crate::report::{Report, ReportOptions};

// 配置
pub use crate::config::ClassifierConfig;
