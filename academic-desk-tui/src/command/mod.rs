//! src/command/mod.rs
//! Command 层：后台业务调用
//!
//!
//! Update 层不直接调用业务服务，而是返回 `Vec<Command>`，由主循环交给
//! `CommandExecutor` 在 tokio 运行时上执行：
//!
//!     update(app, services, msg) ──▶ Vec<Command> ──▶ CommandExecutor::spawn()
//!                                                           │
//!                                                           ▼
//!                                              tokio::spawn(timeout(服务调用))
//!                                                           │
//!                                                           ▼
//!     update(app, services, 结果消息) ◀── try_next() ◀── mpsc 通道
//!
//!
//! 约定：
//!     · 一个 Command 恰好执行一次服务调用，恰好产生一条 AppMessage
//!     · 超时或失败同样产生消息（携带 ServiceError），绝不静默丢弃
//!     · Command 只捕获自己需要的输入（服务句柄 + 参数），不碰 UI 模型
//!

mod executor;

pub use executor::CommandExecutor;

use std::fmt;
use std::future::Future;
use std::time::Duration;

use academic_desk_core::{CoreError, CoreResult};
use futures::future::{BoxFuture, FutureExt};
use thiserror::Error;

use crate::message::AppMessage;

/// 默认操作超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

type Task = Box<dyn FnOnce(Duration) -> BoxFuture<'static, AppMessage> + Send>;

/// 延迟执行的一次副作用操作
pub struct Command {
    /// 用于日志的操作名，例如 "create assessment"
    label: String,
    task: Task,
}

impl Command {
    /// 包装一次业务服务调用
    ///
    /// `future` 是尚未执行的服务调用，`map` 把结果（含超时）转换成消息。
    pub fn service<T, Fut, F>(label: impl Into<String>, future: Fut, map: F) -> Self
    where
        T: Send + 'static,
        Fut: Future<Output = CoreResult<T>> + Send + 'static,
        F: FnOnce(Result<T, ServiceError>) -> AppMessage + Send + 'static,
    {
        let label = label.into();
        let operation = label.clone();

        let task: Task = Box::new(move |limit| {
            async move {
                let result = match tokio::time::timeout(limit, future).await {
                    Ok(Ok(value)) => Ok(value),
                    Ok(Err(err)) => Err(ServiceError::from_core(&operation, &err)),
                    Err(_) => {
                        log::warn!("{operation} timed out after {}ms", limit.as_millis());
                        Err(ServiceError::TimedOut {
                            operation,
                            after: limit,
                        })
                    }
                };
                map(result)
            }
            .boxed()
        });

        Self { label, task }
    }

    /// 立即产生一条消息的命令（不调用服务）
    #[cfg(test)]
    pub fn message(msg: AppMessage) -> Self {
        Self {
            label: "message".to_string(),
            task: Box::new(move |_| futures::future::ready(msg).boxed()),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// 在给定超时内执行命令
    pub async fn run(self, limit: Duration) -> AppMessage {
        (self.task)(limit).await
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command").field("label", &self.label).finish()
    }
}

/// 后台调用失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// 服务返回错误
    #[error("{operation} failed: {message}")]
    Failed {
        operation: String,
        message: String,
        /// 预期内的错误（校验、未找到等），日志级别为 warn
        expected: bool,
    },

    /// 超过操作超时
    #[error("{operation} timed out after {}s", .after.as_secs())]
    TimedOut { operation: String, after: Duration },
}

impl ServiceError {
    pub fn from_core(operation: &str, err: &CoreError) -> Self {
        if err.is_expected() {
            log::warn!("{operation} rejected: {err}");
        } else {
            log::error!("{operation} failed: {err}");
        }
        Self::Failed {
            operation: operation.to_string(),
            message: err.to_string(),
            expected: err.is_expected(),
        }
    }

    /// 面向用户的简短描述
    pub fn user_message(&self) -> String {
        match self {
            Self::Failed { message, .. } => message.clone(),
            Self::TimedOut { .. } => self.to_string(),
        }
    }
}
