//! 班级名称查找缓存
//!
//! 列表加载后，为每个尚未解析的班级 ID 各发出一个 `get` 命令；
//! 每条结果写入缓存并重新投影已加载的行，名称逐个出现而不阻塞列表。

use std::collections::HashMap;

use academic_desk_core::EntityId;

/// 缓存项
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// 已发出请求，等待结果
    Pending,
    Resolved(String),
    /// 请求失败，下次加载时重试
    Failed,
}

/// 查找缓存（按 ID）
#[derive(Debug, Clone, Default)]
pub struct LookupCache {
    entries: HashMap<EntityId, Lookup>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: EntityId) -> Option<&Lookup> {
        self.entries.get(&id)
    }

    /// 行中显示的文本：名称、等待中为 "…"、未知为 "#id"
    pub fn display(&self, id: EntityId) -> String {
        match self.entries.get(&id) {
            Some(Lookup::Resolved(name)) => name.clone(),
            Some(Lookup::Pending) => "…".to_string(),
            Some(Lookup::Failed) | None => format!("#{id}"),
        }
    }

    /// 从 ID 列表中挑出需要请求的，并标记为等待中
    pub fn claim(&mut self, ids: impl IntoIterator<Item = EntityId>) -> Vec<EntityId> {
        let mut claimed = Vec::new();
        for id in ids {
            let needs_fetch = matches!(self.entries.get(&id), None | Some(Lookup::Failed));
            if needs_fetch {
                self.entries.insert(id, Lookup::Pending);
                claimed.push(id);
            }
        }
        claimed
    }

    pub fn resolve(&mut self, id: EntityId, name: String) {
        self.entries.insert(id, Lookup::Resolved(name));
    }

    pub fn fail(&mut self, id: EntityId) {
        self.entries.insert(id, Lookup::Failed);
    }
}
