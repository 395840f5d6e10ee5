//! `hashid` 命令行入口：识别哈希格式并列出可用的 hashcat 模式

use anyhow::{Context, Result};
use clap::Parser;
use hash_classifier::{ClassificationResult, ClassifierConfig, ReportOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "hashid", version, about = "Identify hashes!")]
struct Cli {
    /// 待识别的哈希
    hashes: Vec<String>,

    /// 待识别的哈希（可重复）
    #[arg(short = 's', long = "string", value_name = "HASH")]
    strings: Vec<String>,

    /// 从文件读取哈希，每行一个
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// 以 JSON 输出识别结果
    #[arg(long)]
    json: bool,

    /// 展示派生变体
    #[arg(short = 'e', long, overrides_with = "no_extended")]
    extended: bool,

    #[arg(long, overrides_with = "extended")]
    no_extended: bool,

    /// 标注 hashcat 模式
    #[arg(short = 'm', long, overrides_with = "no_mode")]
    mode: bool,

    #[arg(long, overrides_with = "mode")]
    no_mode: bool,

    /// 只列出 hashcat 支持的格式
    #[arg(long)]
    actionable_only: bool,

    /// 配置文件路径
    #[arg(long, env = "HASHID_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// 打印默认配置后退出
    #[arg(long)]
    print_default_config: bool,
}

impl Cli {
    fn report_options(
        &self,
        config: &ClassifierConfig,
    ) -> ReportOptions {
        let mut options = config.report_options();
        if self.extended {
            options.extended = true;
        }
        if self.no_extended {
            options.extended = false;
        }
        if self.mode {
            options.engine_modes = true;
        }
        if self.no_mode {
            options.engine_modes = false;
        }
        if self.actionable_only {
            options.unsupported = false;
        }
        options
    }

    fn tokens(&self) -> Result<Vec<String>> {
        let mut tokens: Vec<String> = self.hashes.iter().chain(&self.strings).cloned().collect();
        if let Some(path) = &self.file {
            tokens.extend(read_tokens(path)?);
        }
        Ok(tokens)
    }
}

fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("读取哈希文件失败: {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

fn print_text(
    results: &[ClassificationResult],
    options: ReportOptions,
) {
    for result in results {
        if results.len() > 1 {
            println!("Analyzing '{}'", result.input());
        }
        print!("{}", result.report(options));
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", ClassifierConfig::generate_default_config());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => ClassifierConfig::load(path)?,
        None => ClassifierConfig::load_or_default(None),
    };
    let classifier = config.build_classifier()?;

    let tokens = cli.tokens()?;
    if tokens.is_empty() {
        anyhow::bail!("没有输入哈希，使用 -s <HASH> 或 -f <PATH>");
    }
    log::debug!("待识别 {} 个哈希", tokens.len());

    let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
    let results = classifier.classify_batch(&refs);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_text(&results, cli.report_options(&config));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_string_and_positional() {
        let cli = Cli::try_parse_from(["hashid", "abcd", "-s", "5f4dcc3b5aa765d61d8327deb882cf99"])
            .unwrap();
        assert_eq!(
            cli.tokens().unwrap(),
            vec!["abcd".to_string(), "5f4dcc3b5aa765d61d8327deb882cf99".to_string()]
        );
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["hashid", "--no-extended", "--actionable-only", "x"]).unwrap();
        let options = cli.report_options(&ClassifierConfig::default());
        assert!(!options.extended);
        assert!(options.engine_modes);
        assert!(!options.unsupported);
    }

    #[test]
    fn test_read_tokens_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashes.txt");
        fs::write(&path, "abcd\n\n  5f4dcc3b5aa765d61d8327deb882cf99  \r\n").unwrap();
        assert_eq!(
            read_tokens(&path).unwrap(),
            vec!["abcd".to_string(), "5f4dcc3b5aa765d61d8327deb882cf99".to_string()]
        );
    }
}
