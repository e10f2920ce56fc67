//! 葡萄牙语翻译 (pt-BR)

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
        loading: "Carregando...",
        no_data: "Sem dados",
        created_at: "Criado em",
        error: "Erro",
        back: "Voltar",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Espaço",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "Navegar",
            switch_panel: "Trocar painel",
            open: "Abrir",
            new: "Novo",
            edit: "Editar",
            delete: "Excluir",
            toggle_done: "Concluir",
            refresh: "Atualizar",
            help: "Ajuda",
            quit: "Sair",
            next_field: "Próximo campo",
            submit: "Enviar",
            new_line: "Nova linha",
            cancel: "Cancelar",
            back: "Voltar",
            retry: "Tentar de novo",
            switch_button: "Alternar",
            confirm: "Confirmar",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        home: "Início",
        tasks: "Tarefas",
        classes: "Turmas",
        assessments: "Avaliações",
        lessons: "Aulas",
        questions: "Banco de questões",
        proofs: "Provas",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        welcome: "Bem-vindo ao Academic Desk",
        welcome_desc: "Planeje aulas, acompanhe avaliações e monte provas pelo terminal.",
        summary: "Resumo",
        tasks: "Tarefas",
        pending: "pendentes",
        classes: "Turmas",
        assessments: "Avaliações",
        questions: "Questões",
        proofs: "Provas",
        unavailable: "indisponível",
        load_failed: "Falha ao carregar o resumo",
    },
    tasks: TasksTexts {
        title: "Título",
        description: "Descrição",
        due_date: "Prazo",
        status: "Situação",
        done: "Concluída",
        pending: "Pendente",
        overdue: "Atrasada",
    },
    classes: ClassesTexts {
        name: "Nome",
        subject: "Disciplina",
        year: "Ano",
    },
    assessments: AssessmentsTexts {
        name: "Nome",
        class: "Turma",
        class_id: "ID da turma",
        term: "Bimestre",
        weight: "Peso",
    },
    lessons: LessonsTexts {
        class: "Turma",
        class_id: "ID da turma",
        date: "Data",
        topic: "Tema",
        plan: "Plano",
    },
    questions: QuestionsTexts {
        subject: "Disciplina",
        topic: "Tema",
        difficulty: "Dificuldade",
        statement: "Enunciado",
        answer: "Resposta",
        easy: "Fácil",
        medium: "Média",
        hard: "Difícil",
    },
    proofs: ProofsTexts {
        title: "Título",
        class: "Turma",
        class_id: "ID da turma",
        question_ids: "IDs das questões",
        question_count: "Questões",
    },
    pages: PageTexts {
        detail_title: "Detalhes",
        error_title: "Não foi possível carregar",
        error_hint: "Pressione Esc ou r para tentar de novo",
        empty_hint: "Nada por aqui ainda. Pressione n para criar.",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        form: FormModalTexts {
            create_title: "Novo",
            edit_title: "Editar",
            submit_button: "Salvar",
            multiline_hint: "Enter insere uma quebra de linha",
        },
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirmar exclusão",
            message: "Excluir este item? Esta ação não pode ser desfeita.",
            confirm_button: "Excluir",
            cancel_button: "Cancelar",
        },
    },

    // ========================================================================
    // 消息
    // ========================================================================
    status: StatusTexts {
        busy: "Outra operação ainda está em andamento",
        saving: "Salvando...",
        deleting: "Excluindo...",
        created: "Criado",
        updated: "Atualizado",
        deleted: "Excluído",
        refreshing: "Atualizando...",
        lookup_failed: "Não foi possível obter a turma",
        config_failed: "Não foi possível ler a configuração, usando padrões",
    },
    validation: ValidationTexts {
        required: "é obrigatório",
        too_long: "é longo demais",
        out_of_range: "está fora do intervalo",
        integer: "deve ser um número inteiro",
        decimal: "deve ser um número",
        date: "deve ser uma data (AAAA-MM-DD)",
        id_list: "deve ser uma lista de IDs separados por vírgula",
        one_of: "deve ser um de",
        invalid: "é inválido",
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "Pronto",
        loading: "Carregando",
        busy: "Processando",
    },
    help: HelpTexts {
        title: "Ajuda",
        global_shortcuts: "Geral",
        list_shortcuts: "Listas",
        form_shortcuts: "Formulários",
        close_hint: "Pressione qualquer tecla para fechar",
        actions: HelpActionTexts {
            switch_panel: "Trocar painel",
            move_up_down: "Mover para cima/baixo",
            page: "Página anterior/seguinte",
            open_detail: "Abrir detalhes",
            back_cancel: "Voltar/Cancelar",
            refresh: "Atualizar",
            help: "Mostrar ajuda",
            quit: "Sair",
            add: "Novo",
            edit: "Editar",
            delete: "Excluir",
            toggle_done: "Marcar tarefa concluída/pendente",
            next_field: "Próximo campo",
            prev_field: "Campo anterior",
            submit: "Enviar (no botão Salvar)",
        },
    },
};
