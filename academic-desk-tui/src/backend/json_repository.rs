//! 实体仓库
//!
//! 使用 JSON 文件存储实体，每种实体一个文件（`<data_dir>/<kind>.json`）
//! 实现 academic-desk-core 的 Repository trait

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use academic_desk_core::{CoreError, CoreResult, EntityId, Record, Repository};
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

/// 基于 JSON 文件的实体仓库
pub struct JsonFileRepository<T: Record> {
    /// 数据文件路径
    path: PathBuf,
    /// 内存缓存（首次访问时从文件加载）
    cache: Mutex<Option<BTreeMap<EntityId, T>>>,
    entity: PhantomData<T>,
}

impl<T: Record> JsonFileRepository<T> {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", T::KIND.name())),
            cache: Mutex::new(None),
            entity: PhantomData,
        }
    }

    /// 从文件加载实体列表
    async fn load_from_file(&self) -> CoreResult<BTreeMap<EntityId, T>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        let records: Vec<T> = serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        log::debug!(
            "loaded {} {} record(s) from {}",
            records.len(),
            T::KIND,
            self.path.display()
        );
        Ok(records.into_iter().map(|r| (r.id(), r)).collect())
    }

    /// 保存实体列表到文件（先写临时文件再替换）
    async fn save_to_file(&self, records: &BTreeMap<EntityId, T>) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let list: Vec<&T> = records.values().collect();
        let content = serde_json::to_string_pretty(&list)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        Ok(())
    }

    /// 读取缓存，未加载时从文件加载
    async fn snapshot(&self) -> CoreResult<BTreeMap<EntityId, T>> {
        let mut cache = self.cache.lock().await;
        if let Some(records) = cache.as_ref() {
            return Ok(records.clone());
        }
        let records = self.load_from_file().await?;
        *cache = Some(records.clone());
        Ok(records)
    }

    /// 修改、落盘并更新缓存；落盘失败时缓存保持不变
    async fn modify<R>(
        &self,
        change: impl FnOnce(&mut BTreeMap<EntityId, T>) -> R + Send,
    ) -> CoreResult<R> {
        let mut cache = self.cache.lock().await;
        let mut records = match cache.as_ref() {
            Some(records) => records.clone(),
            None => self.load_from_file().await?,
        };

        let result = change(&mut records);
        self.save_to_file(&records).await?;
        *cache = Some(records);
        Ok(result)
    }
}

#[async_trait]
impl<T: Record> Repository<T> for JsonFileRepository<T> {
    async fn find_all(&self) -> CoreResult<Vec<T>> {
        Ok(self.snapshot().await?.into_values().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<T>> {
        Ok(self.snapshot().await?.remove(&id))
    }

    async fn save(&self, record: &T) -> CoreResult<()> {
        let record = record.clone();
        self.modify(move |records| {
            records.insert(record.id(), record);
        })
        .await
    }

    async fn delete(&self, id: EntityId) -> CoreResult<bool> {
        self.modify(move |records| records.remove(&id).is_some())
            .await
    }

    async fn next_id(&self) -> CoreResult<EntityId> {
        let records = self.snapshot().await?;
        Ok(records.keys().next_back().map_or(1, |last| last + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academic_desk_core::types::{Class, ClassDraft};
    use chrono::Utc;

    fn class(id: EntityId, name: &str) -> Class {
        Class::build(
            id,
            ClassDraft {
                name: name.to_string(),
                subject: "Matemática".to_string(),
                year: 2024,
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::<Class>::new(dir.path());
        repo.save(&class(1, "7º A")).await.unwrap();
        repo.save(&class(2, "8º B")).await.unwrap();
        assert!(dir.path().join("class.json").exists());

        let reopened = JsonFileRepository::<Class>::new(dir.path());
        let names: Vec<_> = reopened
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["7º A", "8º B"]);
        assert_eq!(reopened.next_id().await.unwrap(), 3);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::<Class>::new(&dir.path().join("nested"));
        tokio_test::block_on(async {
            assert!(repo.find_all().await.unwrap().is_empty());
            assert_eq!(repo.next_id().await.unwrap(), 1);
            assert!(repo.find_by_id(1).await.unwrap().is_none());
        });
    }

    #[tokio::test]
    async fn test_delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::<Class>::new(dir.path());
        repo.save(&class(1, "7º A")).await.unwrap();
        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());

        let reopened = JsonFileRepository::<Class>::new(dir.path());
        assert!(reopened.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("class.json"), "{ not json").unwrap();
        let repo = JsonFileRepository::<Class>::new(dir.path());
        assert!(matches!(
            repo.find_all().await,
            Err(CoreError::SerializationError(_))
        ));
    }
}
