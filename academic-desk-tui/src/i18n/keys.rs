//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：表单与删除确认都以弹窗形式显示
//! 3. **页面内容归对应页面**：如 `home.*`, `tasks.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//! 6. **状态栏消息归 `status.*`**，**表单校验归 `validation.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 主页文本
    pub home: HomeTexts,
    /// 待办任务
    pub tasks: TasksTexts,
    /// 班级
    pub classes: ClassesTexts,
    /// 评估
    pub assessments: AssessmentsTexts,
    /// 课程计划
    pub lessons: LessonsTexts,
    /// 题库
    pub questions: QuestionsTexts,
    /// 试卷
    pub proofs: ProofsTexts,
    /// 详情页与错误页
    pub pages: PageTexts,
    /// 弹窗文本（表单、删除确认）
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 表单校验
    pub validation: ValidationTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub created_at: &'static str,
    pub error: &'static str,
    pub back: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub space: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub switch_panel: &'static str,
    pub open: &'static str,
    pub new: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub toggle_done: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub next_field: &'static str,
    pub submit: &'static str,
    pub new_line: &'static str,
    pub cancel: &'static str,
    pub back: &'static str,
    pub retry: &'static str,
    pub switch_button: &'static str,
    pub confirm: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub tasks: &'static str,
    pub classes: &'static str,
    pub assessments: &'static str,
    pub lessons: &'static str,
    pub questions: &'static str,
    pub proofs: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 主页文本
pub struct HomeTexts {
    pub welcome: &'static str,
    pub welcome_desc: &'static str,
    pub summary: &'static str,
    pub tasks: &'static str,
    pub pending: &'static str,
    pub classes: &'static str,
    pub assessments: &'static str,
    pub questions: &'static str,
    pub proofs: &'static str,
    pub unavailable: &'static str,
    pub load_failed: &'static str,
}

pub struct TasksTexts {
    pub title: &'static str,
    pub description: &'static str,
    pub due_date: &'static str,
    pub status: &'static str,
    pub done: &'static str,
    pub pending: &'static str,
    pub overdue: &'static str,
}

pub struct ClassesTexts {
    pub name: &'static str,
    pub subject: &'static str,
    pub year: &'static str,
}

pub struct AssessmentsTexts {
    pub name: &'static str,
    pub class: &'static str,
    pub class_id: &'static str,
    pub term: &'static str,
    pub weight: &'static str,
}

pub struct LessonsTexts {
    pub class: &'static str,
    pub class_id: &'static str,
    pub date: &'static str,
    pub topic: &'static str,
    pub plan: &'static str,
}

pub struct QuestionsTexts {
    pub subject: &'static str,
    pub topic: &'static str,
    pub difficulty: &'static str,
    pub statement: &'static str,
    pub answer: &'static str,
    pub easy: &'static str,
    pub medium: &'static str,
    pub hard: &'static str,
}

pub struct ProofsTexts {
    pub title: &'static str,
    pub class: &'static str,
    pub class_id: &'static str,
    pub question_ids: &'static str,
    pub question_count: &'static str,
}

/// 详情页与错误页
pub struct PageTexts {
    pub detail_title: &'static str,
    pub error_title: &'static str,
    pub error_hint: &'static str,
    pub empty_hint: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    /// 新建 / 编辑表单
    pub form: FormModalTexts,
    /// 确认删除弹窗
    pub confirm_delete: ConfirmDeleteTexts,
}

pub struct FormModalTexts {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub submit_button: &'static str,
    pub multiline_hint: &'static str,
}

/// 确认删除弹窗
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_button: &'static str,
    pub cancel_button: &'static str,
}

// ============================================================================
// 消息
// ============================================================================

/// 状态栏中显示的操作反馈
pub struct StatusTexts {
    pub busy: &'static str,
    pub saving: &'static str,
    pub deleting: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub refreshing: &'static str,
    pub lookup_failed: &'static str,
    pub config_failed: &'static str,
}

/// 表单校验失败原因
pub struct ValidationTexts {
    pub required: &'static str,
    pub too_long: &'static str,
    pub out_of_range: &'static str,
    pub integer: &'static str,
    pub decimal: &'static str,
    pub date: &'static str,
    pub id_list: &'static str,
    pub one_of: &'static str,
    pub invalid: &'static str,
}

// ============================================================================
// 其他组件
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub ready: &'static str,
    pub loading: &'static str,
    pub busy: &'static str,
}

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub list_shortcuts: &'static str,
    pub form_shortcuts: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助页面快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub page: &'static str,
    pub open_detail: &'static str,
    pub back_cancel: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub toggle_done: &'static str,
    pub next_field: &'static str,
    pub prev_field: &'static str,
    pub submit: &'static str,
}
