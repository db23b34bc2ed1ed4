//! Report Command Handlers

use std::sync::Arc;

use crate::application::commands::{GenerateContent, SaveReport};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ContentGeneratorPort, GenerationRequest, NewReport, ReportRepositoryPort, UserRepositoryPort,
};

// ============================================================================
// GenerateContent
// ============================================================================

/// 生成结果来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationSource {
    /// 外部 AI 服务
    Api,
    /// 静态模板回退
    Fallback,
}

impl GenerationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationSource::Api => "api",
            GenerationSource::Fallback => "fallback",
        }
    }
}

/// 生成响应
#[derive(Debug, Clone)]
pub struct GenerateContentResponse {
    pub text: String,
    pub source: GenerationSource,
}

/// GenerateContent Handler
///
/// 先调用主生成器，任何失败都改由回退生成器给出结果
pub struct GenerateContentHandler {
    primary: Arc<dyn ContentGeneratorPort>,
    fallback: Arc<dyn ContentGeneratorPort>,
}

impl GenerateContentHandler {
    pub fn new(
        primary: Arc<dyn ContentGeneratorPort>,
        fallback: Arc<dyn ContentGeneratorPort>,
    ) -> Self {
        Self { primary, fallback }
    }

    pub async fn handle(&self, command: GenerateContent) -> Result<GenerateContentResponse, ApplicationError> {
        let prompt = command.prompt.trim();
        if prompt.is_empty() {
            return Err(ApplicationError::validation("Тақырыпты енгізіңіз"));
        }

        let request = GenerationRequest {
            prompt: prompt.to_string(),
            content_type: command.content_type,
            language: command.language,
            word_count: command.word_count,
        };

        tracing::info!(
            content_type = %request.content_type,
            language = %request.language,
            word_count = %request.word_count,
            generator = self.primary.name(),
            "Generating content"
        );

        match self.primary.generate(&request).await {
            Ok(text) => {
                tracing::info!(chars = text.chars().count(), "Content generated");
                return Ok(GenerateContentResponse {
                    text,
                    source: GenerationSource::Api,
                });
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    generator = self.primary.name(),
                    "Primary generator failed, using fallback"
                );
            }
        }

        let text = self
            .fallback
            .generate(&request)
            .await
            .map_err(|e| ApplicationError::ExternalServiceError(e.to_string()))?;

        tracing::info!(
            generator = self.fallback.name(),
            language = %request.language,
            "Fallback content used"
        );

        Ok(GenerateContentResponse {
            text,
            source: GenerationSource::Fallback,
        })
    }
}

// ============================================================================
// SaveReport
// ============================================================================

/// 保存报告响应
#[derive(Debug, Clone)]
pub struct SaveReportResponse {
    pub report_id: i64,
}

/// SaveReport Handler
pub struct SaveReportHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    report_repo: Arc<dyn ReportRepositoryPort>,
}

impl SaveReportHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        report_repo: Arc<dyn ReportRepositoryPort>,
    ) -> Self {
        Self {
            user_repo,
            report_repo,
        }
    }

    pub async fn handle(&self, command: SaveReport) -> Result<SaveReportResponse, ApplicationError> {
        if command.content.trim().is_empty() {
            return Err(ApplicationError::validation("Сақталатын мәтін бос"));
        }

        // 用户必须仍然存在
        self.user_repo
            .find_by_id(command.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", command.user_id))?;

        let report = self
            .report_repo
            .create(&NewReport {
                user_id: command.user_id,
                title: command.title.trim().to_string(),
                content: command.content,
                content_type: command.content_type,
                language: command.language,
                word_count: command.word_count,
            })
            .await?;

        tracing::info!(
            report_id = report.id,
            user_id = report.user_id,
            content_type = %report.content_type,
            "Report saved"
        );

        Ok(SaveReportResponse {
            report_id: report.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::application::ports::{GeneratorError, NewUser};
    use crate::domain::report::{ContentType, Language, WordCount};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteReportRepository, SqliteUserRepository,
    };

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl ContentGeneratorPort for FixedGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, GeneratorError> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl ContentGeneratorPort for FailingGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, GeneratorError> {
            Err(GeneratorError::Timeout)
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn command(prompt: &str) -> GenerateContent {
        GenerateContent {
            prompt: prompt.to_string(),
            content_type: ContentType::Presentation,
            language: Language::English,
            word_count: WordCount::default(),
        }
    }

    #[tokio::test]
    async fn test_primary_result_used() {
        let handler = GenerateContentHandler::new(
            Arc::new(FixedGenerator("from api")),
            Arc::new(FixedGenerator("from template")),
        );

        let result = handler.handle(command("Rust")).await.unwrap();
        assert_eq!(result.text, "from api");
        assert_eq!(result.source, GenerationSource::Api);
    }

    #[tokio::test]
    async fn test_fallback_on_primary_failure() {
        let handler = GenerateContentHandler::new(
            Arc::new(FailingGenerator),
            Arc::new(FixedGenerator("from template")),
        );

        let result = handler.handle(command("Rust")).await.unwrap();
        assert_eq!(result.text, "from template");
        assert_eq!(result.source, GenerationSource::Fallback);
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected() {
        let handler = GenerateContentHandler::new(
            Arc::new(FixedGenerator("x")),
            Arc::new(FixedGenerator("y")),
        );

        let err = handler.handle(command("   ")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_save_report_for_existing_user() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let users = Arc::new(SqliteUserRepository::new(pool.clone()));
        let reports = Arc::new(SqliteReportRepository::new(pool));

        let user = users
            .create(&NewUser {
                username: "dana".to_string(),
                password_hash: "h".to_string(),
                email: None,
            })
            .await
            .unwrap();

        let handler = SaveReportHandler::new(users, reports.clone());
        let saved = handler
            .handle(SaveReport {
                user_id: user.id,
                title: " Тақырып ".to_string(),
                content: "КІРІСПЕ\n• бір".to_string(),
                content_type: ContentType::Presentation,
                language: Language::Kazakh,
                word_count: 300,
            })
            .await
            .unwrap();

        let stored = reports.find_for_user(saved.report_id, user.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Тақырып");
        assert_eq!(stored.content_type, ContentType::Presentation);

        let missing_user = handler
            .handle(SaveReport {
                user_id: user.id + 100,
                title: String::new(),
                content: "text".to_string(),
                content_type: ContentType::Referat,
                language: Language::Kazakh,
                word_count: 0,
            })
            .await
            .unwrap_err();
        assert!(matches!(missing_user, ApplicationError::NotFound { .. }));
    }
}
