//! 日志初始化
//!
//! 终端被 TUI 占用，日志只写入数据目录下的 `academic-desk.log`。
//! 过滤规则优先取环境变量 `ACADEMIC_DESK_LOG`，否则使用配置中的 `logLevel`。
//! `log` 宏的记录经由 tracing-log 转发到同一个订阅者。

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "ACADEMIC_DESK_LOG";
const LOG_FILE: &str = "academic-desk.log";

/// 初始化日志；返回的 guard 必须保持到程序结束，否则缓冲的日志会丢失
pub fn init_logging(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .context("cannot open log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| filter_for(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("logging already initialized")?;

    Ok(guard)
}

/// 配置中的级别无法解析时回退到 info
fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        assert_eq!(filter_for("debug").to_string(), "debug");
        assert_eq!(filter_for("academic_desk=loud").to_string(), "info");
    }
}
