//! 核心服务
//!
//! 封装 academic-desk-core 的各种服务，
//! 提供给 TUI 层使用的统一接口

use std::path::Path;
use std::sync::Arc;

use academic_desk_core::{ServiceContext, Services};

use super::json_repository::JsonFileRepository;

/// TUI 核心服务
///
/// 持有服务上下文，所有实体都保存在数据目录下的 JSON 文件中
pub struct CoreService {
    /// 服务上下文（供各服务使用）
    ctx: Arc<ServiceContext>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(data_dir: &Path) -> Self {
        // 每种实体一个仓库，文件在首次访问时才读取
        let ctx = Arc::new(ServiceContext::new(
            Arc::new(JsonFileRepository::new(data_dir)),
            Arc::new(JsonFileRepository::new(data_dir)),
            Arc::new(JsonFileRepository::new(data_dir)),
            Arc::new(JsonFileRepository::new(data_dir)),
            Arc::new(JsonFileRepository::new(data_dir)),
            Arc::new(JsonFileRepository::new(data_dir)),
        ));

        log::info!("data directory: {}", data_dir.display());
        Self { ctx }
    }

    /// 获取所有业务服务的句柄
    pub fn services(&self) -> Services {
        Services::new(&self.ctx)
    }
}
