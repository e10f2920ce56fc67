//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦。业务规则都在 academic-desk-core 中，
//! 这里只负责把核心库接到本地存储和配置文件上。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;       // 核心服务入口
//!         mod json_repository;    // 实体持久化（JSON 文件）
//!         mod config_service;     // 配置文件
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         创建流程：
//!             1. 为每种实体创建一个 JsonFileRepository
//!             2. 组装 ServiceContext（服务上下文）
//!             3. services() 基于 ServiceContext 创建 Services 句柄集合
//!
//!         Services 是 update 层唯一能接触到的业务入口。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、实体仓库（JsonFileRepository）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/json_repository.rs 中定义：
//!
//!         实现 academic-desk-core 的 Repository trait。
//!
//!         存储位置：<data_dir>/<kind>.json
//!             task.json  class.json  assessment.json
//!             lesson.json  question.json  proof.json
//!
//!         · 首次访问时读取文件，之后使用内存缓存
//!         · 每次修改先写 .tmp 再 rename，写入失败时缓存不变
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、配置（JsonConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/academic-desk/config.json
//!
//!         · 文件不存在：使用默认配置
//!         · 文件损坏：返回 ConfigError，由 main 提示并使用默认配置
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在表单中提交
//!         ↓
//!     Update 层生成 Command（持有 ServiceHandle 的克隆）
//!         ↓
//!     CommandExecutor 在 tokio 运行时上执行
//!         ↓
//!     CrudService → Repository → JSON 文件
//!         ↓
//!     结果作为 AppMessage 回到 Update 层
//!

mod config_service;
mod core_service;
mod json_repository;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use core_service::CoreService;
