//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, AssessmentsTexts, ClassesTexts, CommonTexts, ConfirmDeleteTexts,
    FormModalTexts, HelpActionTexts, HelpTexts, HintTexts, HomeTexts, KeyNames, LessonsTexts,
    ModalTexts, NavTexts, PageTexts, ProofsTexts, QuestionsTexts, StatusBarTexts, StatusTexts,
    TasksTexts, Translations, ValidationTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Academic Desk",
        loading: "Loading...",
        no_data: "No data",
        created_at: "Created",
        error: "Error",
        back: "Back",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Space",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "Navigate",
            switch_panel: "Switch panel",
            open: "Open",
            new: "New",
            edit: "Edit",
            delete: "Delete",
            toggle_done: "Done/undo",
            refresh: "Refresh",
            help: "Help",
            quit: "Quit",
            next_field: "Next field",
            submit: "Submit",
            new_line: "New line",
            cancel: "Cancel",
            back: "Back",
            retry: "Retry",
            switch_button: "Switch",
            confirm: "Confirm",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        home: "Home",
        tasks: "Tasks",
        classes: "Classes",
        assessments: "Assessments",
        lessons: "Lessons",
        questions: "Question bank",
        proofs: "Exams",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        welcome: "Welcome to Academic Desk",
        welcome_desc: "Plan lessons, track assessments and build exams from your terminal.",
        summary: "Overview",
        tasks: "Tasks",
        pending: "pending",
        classes: "Classes",
        assessments: "Assessments",
        questions: "Questions",
        proofs: "Exams",
        unavailable: "unavailable",
        load_failed: "Overview failed to load",
    },
    tasks: TasksTexts {
        title: "Title",
        description: "Description",
        due_date: "Due date",
        status: "Status",
        done: "Done",
        pending: "Pending",
        overdue: "Overdue",
    },
    classes: ClassesTexts {
        name: "Name",
        subject: "Subject",
        year: "Year",
    },
    assessments: AssessmentsTexts {
        name: "Name",
        class: "Class",
        class_id: "Class ID",
        term: "Term",
        weight: "Weight",
    },
    lessons: LessonsTexts {
        class: "Class",
        class_id: "Class ID",
        date: "Date",
        topic: "Topic",
        plan: "Plan",
    },
    questions: QuestionsTexts {
        subject: "Subject",
        topic: "Topic",
        difficulty: "Difficulty",
        statement: "Statement",
        answer: "Answer",
        easy: "Easy",
        medium: "Medium",
        hard: "Hard",
    },
    proofs: ProofsTexts {
        title: "Title",
        class: "Class",
        class_id: "Class ID",
        question_ids: "Question IDs",
        question_count: "Questions",
    },
    pages: PageTexts {
        detail_title: "Details",
        error_title: "Could not load",
        error_hint: "Press Esc or r to try again",
        empty_hint: "Nothing here yet. Press n to create one.",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        form: FormModalTexts {
            create_title: "New",
            edit_title: "Edit",
            submit_button: "Save",
            multiline_hint: "Enter inserts a line break",
        },
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm delete",
            message: "Delete this item? This cannot be undone.",
            confirm_button: "Delete",
            cancel_button: "Cancel",
        },
    },

    // ========================================================================
    // 消息
    // ========================================================================
    status: StatusTexts {
        busy: "Another operation is still running",
        saving: "Saving...",
        deleting: "Deleting...",
        created: "Created",
        updated: "Updated",
        deleted: "Deleted",
        refreshing: "Refreshing...",
        lookup_failed: "Could not resolve class",
        config_failed: "Configuration could not be read, using defaults",
    },
    validation: ValidationTexts {
        required: "is required",
        too_long: "is too long",
        out_of_range: "is out of range",
        integer: "must be a whole number",
        decimal: "must be a number",
        date: "must be a date (YYYY-MM-DD)",
        id_list: "must be a comma-separated list of IDs",
        one_of: "must be one of",
        invalid: "is invalid",
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "Ready",
        loading: "Loading",
        busy: "Working",
    },
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global",
        list_shortcuts: "Lists",
        form_shortcuts: "Forms",
        close_hint: "Press any key to close",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            move_up_down: "Move up/down",
            page: "Previous/next page",
            open_detail: "Open details",
            back_cancel: "Back/Cancel",
            refresh: "Refresh",
            help: "Show help",
            quit: "Quit",
            add: "New",
            edit: "Edit",
            delete: "Delete",
            toggle_done: "Mark task done/undone",
            next_field: "Next field",
            prev_field: "Previous field",
            submit: "Submit (on the Save button)",
        },
    },
};
