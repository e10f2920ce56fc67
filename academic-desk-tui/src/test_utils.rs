//! 测试辅助模块
//!
//! 提供内存服务、故障注入服务，以及驱动 update 循环的小工具。

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use academic_desk_core::types::{ClassDraft, TaskDraft};
use academic_desk_core::{
    CoreError, CoreResult, CrudService, EntityId, Record, ServiceContext, ServiceHandle, Services,
};
use async_trait::async_trait;

use crate::command::{Command, DEFAULT_TIMEOUT};
use crate::message::{AppMessage, FormMessage, NavigationMessage};
use crate::model::{App, Page};
use crate::update::update;

/// 全内存的服务集合
pub fn in_memory_services() -> Services {
    Services::new(&Arc::new(ServiceContext::in_memory()))
}

pub async fn seed_class(services: &Services, name: &str) -> EntityId {
    services
        .classes
        .create(ClassDraft {
            name: name.to_string(),
            subject: "Matemática".to_string(),
            year: 2024,
        })
        .await
        .unwrap()
        .id
}

pub async fn seed_task(services: &Services, title: &str) -> EntityId {
    services
        .tasks
        .create(TaskDraft {
            title: title.to_string(),
            ..TaskDraft::default()
        })
        .await
        .unwrap()
        .id
}

/// 所有操作都失败的服务
pub struct FailingService<T> {
    entity: PhantomData<fn() -> T>,
}

impl<T: Record> FailingService<T> {
    pub fn handle() -> ServiceHandle<T> {
        Arc::new(Self {
            entity: PhantomData,
        })
    }

    fn error() -> CoreError {
        CoreError::StorageError("disk unavailable".to_string())
    }
}

#[async_trait]
impl<T: Record> CrudService for FailingService<T> {
    type Entity = T;
    type Draft = T::Draft;

    async fn list(&self) -> CoreResult<Vec<T>> {
        Err(Self::error())
    }

    async fn get(&self, _id: EntityId) -> CoreResult<T> {
        Err(Self::error())
    }

    async fn create(&self, _draft: T::Draft) -> CoreResult<T> {
        Err(Self::error())
    }

    async fn update(&self, _id: EntityId, _draft: T::Draft) -> CoreResult<T> {
        Err(Self::error())
    }

    async fn delete(&self, _id: EntityId) -> CoreResult<()> {
        Err(Self::error())
    }
}

/// 记录创建请求的服务包装
pub struct RecordingService<T: Record> {
    inner: ServiceHandle<T>,
    created: Arc<Mutex<Vec<T::Draft>>>,
}

impl<T: Record> RecordingService<T> {
    /// 返回包装后的句柄，以及记录创建草稿的列表
    pub fn wrap(inner: ServiceHandle<T>) -> (ServiceHandle<T>, Arc<Mutex<Vec<T::Draft>>>) {
        let created = Arc::new(Mutex::new(Vec::new()));
        let service = Arc::new(Self {
            inner,
            created: created.clone(),
        });
        (service, created)
    }
}

#[async_trait]
impl<T: Record> CrudService for RecordingService<T> {
    type Entity = T;
    type Draft = T::Draft;

    async fn list(&self) -> CoreResult<Vec<T>> {
        self.inner.list().await
    }

    async fn get(&self, id: EntityId) -> CoreResult<T> {
        self.inner.get(id).await
    }

    async fn create(&self, draft: T::Draft) -> CoreResult<T> {
        self.created.lock().unwrap().push(draft.clone());
        self.inner.create(draft).await
    }

    async fn update(&self, id: EntityId, draft: T::Draft) -> CoreResult<T> {
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: EntityId) -> CoreResult<()> {
        self.inner.delete(id).await
    }
}

/// 每次调用前先等待一段时间的服务包装
pub struct SlowService<T: Record> {
    inner: ServiceHandle<T>,
    delay: Duration,
}

impl<T: Record> SlowService<T> {
    pub fn wrap(inner: ServiceHandle<T>, delay: Duration) -> ServiceHandle<T> {
        Arc::new(Self { inner, delay })
    }
}

#[async_trait]
impl<T: Record> CrudService for SlowService<T> {
    type Entity = T;
    type Draft = T::Draft;

    async fn list(&self) -> CoreResult<Vec<T>> {
        tokio::time::sleep(self.delay).await;
        self.inner.list().await
    }

    async fn get(&self, id: EntityId) -> CoreResult<T> {
        tokio::time::sleep(self.delay).await;
        self.inner.get(id).await
    }

    async fn create(&self, draft: T::Draft) -> CoreResult<T> {
        tokio::time::sleep(self.delay).await;
        self.inner.create(draft).await
    }

    async fn update(&self, id: EntityId, draft: T::Draft) -> CoreResult<T> {
        tokio::time::sleep(self.delay).await;
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: EntityId) -> CoreResult<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.delete(id).await
    }
}

/// 依次执行命令，收集结果消息
pub async fn run(commands: Vec<Command>) -> Vec<AppMessage> {
    let mut messages = Vec::with_capacity(commands.len());
    for command in commands {
        messages.push(command.run(DEFAULT_TIMEOUT).await);
    }
    messages
}

/// 执行命令并把结果送回 update，直到没有新的命令
pub async fn settle(app: &mut App, services: &Services, commands: Vec<Command>) {
    let mut queue = commands;
    while !queue.is_empty() {
        let messages = run(queue).await;
        queue = Vec::new();
        for msg in messages {
            queue.extend(update(app, services, msg));
        }
    }
}

/// 通过导航栏打开页面，并等待首次加载完成
pub async fn open_page(app: &mut App, services: &Services, page: Page) {
    app.navigation.selected = Page::all().iter().position(|p| *p == page).unwrap();
    let commands = update(app, services, AppMessage::Navigation(NavigationMessage::Confirm));
    settle(app, services, commands).await;
}

/// 在当前表单字段中逐字输入
pub fn type_text(app: &mut App, services: &Services, text: &str) {
    for c in text.chars() {
        let commands = update(app, services, AppMessage::Form(FormMessage::Input(c)));
        assert!(commands.is_empty());
    }
}

/// 命令标签
pub fn labels(commands: &[Command]) -> Vec<&str> {
    commands.iter().map(Command::label).collect()
}
