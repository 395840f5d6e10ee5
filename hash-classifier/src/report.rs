//! 识别结果的可读报告
//!
//! 展示与识别分离：`Report` 只借用 [`ClassificationResult`]，由调用方决定何时打印。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classifier::{ClassificationResult, FormatMatch};

pub const HEADER: &str = "Detected hash to be one of the following,";
pub const UNKNOWN: &str = "[+] Unknown hash";

/// 报告展示选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// 展示派生变体（加盐、多重哈希等）
    pub extended: bool,
    /// 在名称后标注 hashcat 模式
    pub engine_modes: bool,
    /// 展示没有 hashcat 模式的候选
    pub unsupported: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            extended: true,
            engine_modes: true,
            unsupported: true,
        }
    }
}

impl ReportOptions {
    /// 只列出可交给 hashcat 的条目（与早期命令行输出一致）
    #[must_use]
    pub const fn actionable_only() -> Self {
        Self {
            extended: true,
            engine_modes: true,
            unsupported: false,
        }
    }

    const fn shows(
        self,
        m: &FormatMatch,
    ) -> bool {
        (self.extended || !m.extended) && (self.unsupported || m.engine_mode.is_some())
    }
}

/// 单个识别结果的报告
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    result: &'a ClassificationResult,
    options: ReportOptions,
}

impl<'a> Report<'a> {
    #[must_use]
    pub const fn new(
        result: &'a ClassificationResult,
        options: ReportOptions,
    ) -> Self {
        Self { result, options }
    }

    /// 经过选项过滤后要展示的匹配
    pub fn entries(&self) -> impl Iterator<Item = &'a FormatMatch> + 'a {
        let options = self.options;
        self.result.matches().iter().filter(move |m| options.shows(m))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{UNKNOWN}");
        }

        writeln!(f, "{HEADER}")?;
        for entry in self.entries() {
            write!(f, "[+] {}", entry.name)?;
            if let (true, Some(mode)) = (self.options.engine_modes, entry.engine_mode) {
                write!(f, " [Hashcat Mode: {mode}]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
