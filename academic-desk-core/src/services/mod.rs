//! 业务逻辑服务层

mod class_scoped_service;
mod class_service;
mod entity_service;
mod proof_service;

pub use class_scoped_service::{ClassScoped, ClassScopedService};
pub use class_service::ClassService;
pub use entity_service::EntityService;
pub use proof_service::ProofService;

use std::sync::Arc;

use crate::traits::{CrudService, InMemoryRepository, Repository};
use crate::types::{Assessment, Class, Lesson, Proof, Question, Record, Task};

/// 某种实体的服务句柄
pub type ServiceHandle<T> = Arc<dyn CrudService<Entity = T, Draft = <T as Record>::Draft>>;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    /// 任务仓库
    pub tasks: Arc<dyn Repository<Task>>,
    /// 班级仓库
    pub classes: Arc<dyn Repository<Class>>,
    /// 评估仓库
    pub assessments: Arc<dyn Repository<Assessment>>,
    /// 课程计划仓库
    pub lessons: Arc<dyn Repository<Lesson>>,
    /// 题库仓库
    pub questions: Arc<dyn Repository<Question>>,
    /// 试卷仓库
    pub proofs: Arc<dyn Repository<Proof>>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        tasks: Arc<dyn Repository<Task>>,
        classes: Arc<dyn Repository<Class>>,
        assessments: Arc<dyn Repository<Assessment>>,
        lessons: Arc<dyn Repository<Lesson>>,
        questions: Arc<dyn Repository<Question>>,
        proofs: Arc<dyn Repository<Proof>>,
    ) -> Self {
        Self {
            tasks,
            classes,
            assessments,
            lessons,
            questions,
            proofs,
        }
    }

    /// 全部使用内存仓库的上下文（数据不落盘）
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
        )
    }
}

/// 所有业务服务的句柄集合
///
/// 前端只通过这些句柄访问业务层。
#[derive(Clone)]
pub struct Services {
    pub tasks: ServiceHandle<Task>,
    pub classes: ServiceHandle<Class>,
    pub assessments: ServiceHandle<Assessment>,
    pub lessons: ServiceHandle<Lesson>,
    pub questions: ServiceHandle<Question>,
    pub proofs: ServiceHandle<Proof>,
}

impl Services {
    /// 基于服务上下文组装所有服务
    #[must_use]
    pub fn new(ctx: &Arc<ServiceContext>) -> Self {
        Self {
            tasks: Arc::new(EntityService::new(ctx.tasks.clone())),
            classes: Arc::new(ClassService::new(ctx.clone())),
            assessments: Arc::new(ClassScopedService::new(
                ctx.assessments.clone(),
                ctx.classes.clone(),
            )),
            lessons: Arc::new(ClassScopedService::new(
                ctx.lessons.clone(),
                ctx.classes.clone(),
            )),
            questions: Arc::new(EntityService::new(ctx.questions.clone())),
            proofs: Arc::new(ProofService::new(ctx.clone())),
        }
    }
}
