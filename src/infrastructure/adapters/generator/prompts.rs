//! 提示词构造

use crate::application::ports::GenerationRequest;

/// 聊天消息对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// 根据内容类型构造 system / user 消息
pub fn build_prompts(request: &GenerationRequest) -> PromptPair {
    let lang = request.language.code();
    let words = request.word_count.value();
    let topic = &request.prompt;

    if request.content_type.is_presentation() {
        PromptPair {
            system: format!(
                "Сіз презентацияларды жасау бойынша сарапшысыз. {lang} тілінде құрылымдық презентация жасаңыз.\n\n\
                 Формат: әр слайдтың тақырыбы және 3-5 негізгі тармақтары болуы керек.\n\
                 Құрылым: кіріспе, негізгі бөлімдер, қорытынды.\n\
                 Көлем: шамамен {words} сөз.\n\
                 Стиль: кәсіби, ақпараттық, нақты фактілермен."
            ),
            user: format!(
                "Презентация тақырыбы: \"{topic}\". Тілі: {lang}. Көлемі: ~{words} сөз. \
                 Тақырыптары мен тармақтары бар анық слайд құрылымын жасаңыз."
            ),
        }
    } else {
        PromptPair {
            system: format!(
                "Сіз академиялық авторсыз. Қатаң түрде {lang} тілінде, анық және құрылымды түрде жазыңыз.\n\n\
                 Құрылым: кіріспе, 2-4 бөлім, қорытынды.\n\
                 Артық сөздерден аулақ болыңыз. Ішкі тақырыптарын қолданыңыз.\n\
                 Мақсатты көлем - шамамен {words} сөз."
            ),
            user: format!(
                "Реферат тақырыбы: \"{topic}\". Тілі: {lang}. Көлемі: ~{words} сөз. \
                 Егер тақырып кең болса - назарды тарылтып, кіріспеде қысқаша мазмұн ұсыныңыз."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{ContentType, Language, WordCount};

    fn request(content_type: ContentType, language: Language) -> GenerationRequest {
        GenerationRequest {
            prompt: "Қазақстан тарихы".to_string(),
            content_type,
            language,
            word_count: WordCount::new(800),
        }
    }

    #[test]
    fn test_presentation_prompt() {
        let prompts = build_prompts(&request(ContentType::Presentation, Language::Russian));
        assert!(prompts.system.contains("ru тілінде құрылымдық презентация"));
        assert!(prompts.system.contains("шамамен 800 сөз"));
        assert!(prompts.user.starts_with("Презентация тақырыбы: \"Қазақстан тарихы\""));
    }

    #[test]
    fn test_referat_prompt() {
        let prompts = build_prompts(&request(ContentType::Referat, Language::English));
        assert!(prompts.system.contains("Қатаң түрде en тілінде"));
        assert!(prompts.user.contains("Тілі: en. Көлемі: ~800 сөз."));
    }
}
