//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 默认英语；界面语言在启动时由配置决定。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod pt_br;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 葡萄牙语（巴西）
    PtBr,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::PtBr]
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::PtBr => "pt-BR",
        }
    }

    /// 从语言代码解析（不区分大小写，也接受 "pt" 这样的简写）
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Language::all().iter().copied().find(|lang| {
            let full = lang.code();
            full.eq_ignore_ascii_case(code)
                || full
                    .split('-')
                    .next()
                    .is_some_and(|short| short.eq_ignore_ascii_case(code))
        })
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
///
/// # Example
///
/// ```ignore
/// let text = t().nav.home; // "Home" or "Início"
/// ```
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &pt_br::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::PtBr => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("pt"), Some(Language::PtBr));
        assert_eq!(Language::from_code("zh-CN"), None);
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::EnUs);
        assert_eq!(t().nav.home, "Home");
    }
}
