//! 命令执行器
//!
//! 在 tokio 运行时上并发执行 Command，结果通过 mpsc 通道逐条交回主循环。
//! 主循环只调用非阻塞的 `try_next()`，永远不会等待某个 Command。

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::Command;
use crate::message::AppMessage;

/// 命令执行器
pub struct CommandExecutor {
    runtime: Handle,
    timeout: Duration,
    sender: UnboundedSender<AppMessage>,
    receiver: UnboundedReceiver<AppMessage>,
}

impl CommandExecutor {
    /// 创建执行器
    ///
    /// # Arguments
    /// * `runtime` - 执行命令的 tokio 运行时
    /// * `timeout` - 每个命令统一使用的操作超时
    pub fn new(runtime: Handle, timeout: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            runtime,
            timeout,
            sender,
            receiver,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 启动一个命令，立即返回
    pub fn spawn(&self, command: Command) {
        let sender = self.sender.clone();
        let timeout = self.timeout;
        let label = command.label().to_string();

        log::debug!("command started: {label}");
        self.runtime.spawn(async move {
            let msg = command.run(timeout).await;
            log::debug!("command finished: {label}");
            // 接收端只在退出时被丢弃，此时结果已无意义
            if sender.send(msg).is_err() {
                log::debug!("result of {label} dropped: loop has exited");
            }
        });
    }

    /// 启动一批命令，它们各自独立完成，互不排序
    pub fn spawn_all(&self, commands: Vec<Command>) {
        for command in commands {
            self.spawn(command);
        }
    }

    /// 取出一条已完成命令的结果（非阻塞）
    pub fn try_next(&mut self) -> Option<AppMessage> {
        self.receiver.try_recv().ok()
    }

    /// 等待下一条结果
    #[cfg(test)]
    pub async fn next(&mut self) -> Option<AppMessage> {
        self.receiver.recv().await
    }
}
