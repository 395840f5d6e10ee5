//! 哈希格式规则的数据模型
//!
//! 一条 [`FormatRule`] 描述一种文本形状，以及共享该形状的若干 [`CandidateFormat`]。
//! 内置规则以 `'static` 紧凑定义存放在 `builtin` 子模块中，构建目录时才转换为运行期记录。

use serde::{Deserialize, Serialize};

mod builtin;

/// 候选哈希格式
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateFormat {
    /// 格式名称（如 "MD5"、"bcrypt"、"NTLM"），不要求全局唯一
    pub name: String,
    /// hashcat `-m` 模式；`None` 表示可识别但 hashcat 没有直接支持
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_mode: Option<u32>,
    /// 派生/组合变体（加盐、多重哈希、HMAC、编码包装等）
    #[serde(default)]
    pub extended: bool,
}

impl CandidateFormat {
    #[must_use]
    pub fn new(
        name: &str,
        engine_mode: Option<u32>,
    ) -> Self {
        Self {
            name: name.to_string(),
            engine_mode,
            extended: false,
        }
    }

    #[must_use]
    pub const fn extended(mut self) -> Self {
        self.extended = true;
        self
    }

    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        self.engine_mode.is_some()
    }
}

/// 格式规则：一个结构模式 + 有序的候选格式列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRule {
    /// 不带锚点的正则表达式；匹配时总是整串、大小写不敏感
    pub pattern: String,
    pub formats: Vec<CandidateFormat>,
}

impl FormatRule {
    #[must_use]
    pub fn new(
        pattern: &str,
        formats: Vec<CandidateFormat>,
    ) -> Self {
        Self {
            pattern: pattern.to_string(),
            formats,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct FormatDef {
    name: &'static str,
    engine_mode: Option<u32>,
    extended: bool,
}

#[derive(Clone, Copy, Debug)]
struct RuleDef {
    pattern: &'static str,
    formats: &'static [FormatDef],
}

impl From<&FormatDef> for CandidateFormat {
    fn from(def: &FormatDef) -> Self {
        Self {
            name: def.name.to_string(),
            engine_mode: def.engine_mode,
            extended: def.extended,
        }
    }
}

impl From<&RuleDef> for FormatRule {
    fn from(def: &RuleDef) -> Self {
        Self {
            pattern: def.pattern.to_string(),
            formats: def.formats.iter().map(CandidateFormat::from).collect(),
        }
    }
}

/// 内置规则（按目录顺序）
#[must_use]
pub fn builtin_rules() -> Vec<FormatRule> {
    builtin::BUILTIN_RULES.iter().map(FormatRule::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_size() {
        let rules = builtin_rules();
        assert_eq!(rules.len(), 145);
        let formats: usize = rules.iter().map(|r| r.formats.len()).sum();
        assert_eq!(formats, 272);
    }

    #[test]
    fn test_builtin_patterns_are_unanchored() {
        for rule in builtin_rules() {
            assert!(!rule.pattern.starts_with('^'), "{}", rule.pattern);
            assert!(!rule.pattern.ends_with('$'), "{}", rule.pattern);
            assert!(!rule.formats.is_empty(), "{}", rule.pattern);
        }
    }

    #[test]
    fn test_first_rule_is_crc16_without_engine_mode() {
        let rules = builtin_rules();
        let first = &rules[0];
        assert_eq!(first.pattern, "[a-f0-9]{4}");
        assert_eq!(first.formats[0].name, "CRC-16");
        assert!(first.formats.iter().all(|f| !f.is_actionable()));
    }

    #[test]
    fn test_phpass_recurs_under_two_rules() {
        let count = builtin_rules()
            .iter()
            .filter(|r| r.formats.iter().any(|f| f.name == "PHPass' Portable Hash"))
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_candidate_builder() {
        let f = CandidateFormat::new("md5($pass.$salt)", Some(10)).extended();
        assert!(f.extended);
        assert!(f.is_actionable());
        assert!(!CandidateFormat::new("CRC-16", None).is_actionable());
    }
}
