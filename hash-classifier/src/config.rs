use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalogue::{compile_pattern, Catalogue};
use crate::classifier::Classifier;
use crate::formats::FormatRule;
use crate::report::ReportOptions;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub batch: BatchSettings,
    /// 追加在内置目录之后的自定义规则
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_rules: Vec<FormatRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSettings {
    #[serde(default = "default_true")]
    pub show_extended: bool,
    #[serde(default = "default_true")]
    pub show_engine_modes: bool,
    #[serde(default = "default_true")]
    pub show_unsupported: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchSettings {
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

const fn default_true() -> bool {
    true
}
const fn default_parallel() -> bool {
    true
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            show_extended: default_true(),
            show_engine_modes: default_true(),
            show_unsupported: default_true(),
        }
    }
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}

impl ClassifierConfig {
    /// 从 TOML 配置文件加载配置。
    ///
    /// # Errors
    ///
    /// 当读取文件失败或 TOML 解析失败时返回错误。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        Ok(config)
    }

    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        path.and_then(|p| Self::load(p).ok())
            .or_else(|| Self::load(&Self::default_config_path()).ok())
            .unwrap_or_default()
    }

    /// 将配置保存为 TOML 文件。
    ///
    /// # Errors
    ///
    /// 当创建父目录、序列化或写入文件失败时返回错误。
    pub fn save(
        &self,
        path: &Path,
    ) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        config_base_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hashid")
            .join("config.toml")
    }

    #[must_use]
    pub const fn report_options(&self) -> ReportOptions {
        ReportOptions {
            extended: self.report.show_extended,
            engine_modes: self.report.show_engine_modes,
            unsupported: self.report.show_unsupported,
        }
    }

    /// 校验自定义规则（模式可编译、至少一个候选、名称非空）。
    ///
    /// # Errors
    ///
    /// 当任一自定义规则不满足约束时返回错误。
    pub fn validate(&self) -> Result<()> {
        for (i, rule) in self.custom_rules.iter().enumerate() {
            if rule.pattern.trim().is_empty() {
                bail!("custom_rules[{i}].pattern 不能为空");
            }
            if let Err(err) = compile_pattern(&rule.pattern) {
                bail!("custom_rules[{i}].pattern 不是合法正则: {err}");
            }
            if rule.formats.is_empty() {
                bail!("custom_rules[{i}].formats 不能为空");
            }
            if rule.formats.iter().any(|f| f.name.trim().is_empty()) {
                bail!("custom_rules[{i}] 存在空的格式名称");
            }
        }
        Ok(())
    }

    /// 按配置构建识别器：内置目录 + 自定义规则。
    ///
    /// # Errors
    ///
    /// 当 `validate()` 失败时返回错误。
    pub fn build_classifier(&self) -> Result<Classifier> {
        self.validate()?;
        let catalogue = if self.custom_rules.is_empty() {
            Catalogue::shared()
        } else {
            Arc::new(Catalogue::shared().extend(self.custom_rules.clone()))
        };
        Ok(Classifier::new(catalogue).with_parallel(self.batch.parallel))
    }

    #[must_use]
    pub fn generate_default_config() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

fn config_base_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(dir);
    }

    #[cfg(windows)]
    {
        if let Some(dir) = std::env::var_os("APPDATA").map(PathBuf::from) {
            return Some(dir);
        }
    }

    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::CandidateFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.report_options(), ReportOptions::default());
        assert!(config.batch.parallel);
        assert!(config.custom_rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ClassifierConfig = toml::from_str("[report]\nshow_unsupported = false\n").unwrap();
        assert!(!config.report.show_unsupported);
        assert!(config.report.show_extended);
        assert!(config.batch.parallel);
    }

    #[test]
    fn test_custom_rules_from_toml() {
        let content = r#"
[[custom_rules]]
pattern = "zz[0-9]{3}"
formats = [{ name = "Custom ZZ", engine_mode = 99999 }]
"#;
        let config: ClassifierConfig = toml::from_str(content).unwrap();
        assert_eq!(
            config.custom_rules[0].formats[0],
            CandidateFormat::new("Custom ZZ", Some(99_999))
        );

        let classifier = config.build_classifier().unwrap();
        let result = classifier.classify("ZZ123");
        assert_eq!(result.mode("Custom ZZ"), Some(99_999));
        assert_eq!(
            classifier.catalogue().len(),
            Catalogue::shared().len() + 1
        );
    }

    #[test]
    fn test_custom_rules_come_after_builtin() {
        let config = ClassifierConfig {
            custom_rules: vec![FormatRule::new(
                "[a-f0-9]{32}",
                vec![CandidateFormat::new("In-house MD5", Some(0))],
            )],
            ..Default::default()
        };
        let result = config
            .build_classifier()
            .unwrap()
            .classify("5f4dcc3b5aa765d61d8327deb882cf99");
        assert_eq!(result.modes()[0].name, "MD5");
        assert_eq!(result.modes().last().map(|m| m.name.as_str()), Some("In-house MD5"));
    }

    #[test]
    fn test_validate_rejects_bad_rules() {
        let bad_regex = ClassifierConfig {
            custom_rules: vec![FormatRule::new("[a-f", vec![CandidateFormat::new("x", None)])],
            ..Default::default()
        };
        assert!(bad_regex.validate().is_err());
        assert!(bad_regex.build_classifier().is_err());

        let no_formats = ClassifierConfig {
            custom_rules: vec![FormatRule::new("[a-f]{3}", Vec::new())],
            ..Default::default()
        };
        assert!(no_formats.validate().is_err());

        let empty_name = ClassifierConfig {
            custom_rules: vec![FormatRule::new("[a-f]{3}", vec![CandidateFormat::new(" ", None)])],
            ..Default::default()
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ClassifierConfig::default();
        config.report.show_extended = false;
        config.batch.parallel = false;
        config.save(&path).unwrap();

        let loaded = ClassifierConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(ClassifierConfig::load_or_default(Some(&path)), config);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ClassifierConfig::load(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_generate_default_config_parses() {
        let text = ClassifierConfig::generate_default_config();
        assert!(text.contains("[report]"));
        let parsed: ClassifierConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, ClassifierConfig::default());
    }
}
