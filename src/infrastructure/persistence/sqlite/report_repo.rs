//! SQLite Report Repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    AuthoredReport, NewReport, ReportRecord, ReportRepositoryPort, ReportStats, RepositoryError,
};
use crate::domain::report::{ContentType, Language};

/// SQLite Report Repository
pub struct SqliteReportRepository {
    pool: DbPool,
}

impl SqliteReportRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ReportRow {
    id: i64,
    user_id: i64,
    title: String,
    content: String,
    #[sqlx(rename = "type")]
    content_type: String,
    language: String,
    word_count: i64,
    created_at: String,
}

impl TryFrom<ReportRow> for ReportRecord {
    type Error = RepositoryError;

    fn try_from(row: ReportRow) -> Result<Self, Self::Error> {
        Ok(ReportRecord {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            content: row.content,
            content_type: ContentType::from_str(&row.content_type),
            language: Language::from_str(&row.language),
            word_count: row.word_count.max(0) as u32,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[derive(FromRow)]
struct AuthoredReportRow {
    #[sqlx(flatten)]
    report: ReportRow,
    username: String,
}

impl TryFrom<AuthoredReportRow> for AuthoredReport {
    type Error = RepositoryError;

    fn try_from(row: AuthoredReportRow) -> Result<Self, Self::Error> {
        Ok(AuthoredReport {
            report: ReportRecord::try_from(row.report)?,
            username: row.username,
        })
    }
}

const REPORT_COLUMNS: &str =
    "r.id, r.user_id, r.title, r.content, r.type, r.language, r.word_count, r.created_at";

#[async_trait]
impl ReportRepositoryPort for SqliteReportRepository {
    async fn create(&self, report: &NewReport) -> Result<ReportRecord, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO reports (user_id, title, content, type, language, word_count, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(report.user_id)
        .bind(&report.title)
        .bind(&report.content)
        .bind(report.content_type.as_str())
        .bind(report.language.as_str())
        .bind(report.word_count as i64)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(ReportRecord {
            id: result.last_insert_rowid(),
            user_id: report.user_id,
            title: report.title.clone(),
            content: report.content.clone(),
            content_type: report.content_type,
            language: report.language,
            word_count: report.word_count,
            created_at,
        })
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<ReportRecord>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM reports r WHERE r.user_id = ? ORDER BY r.created_at DESC, r.id DESC",
            REPORT_COLUMNS
        );
        let rows: Vec<ReportRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ReportRecord::try_from).collect()
    }

    async fn find_for_user(
        &self,
        report_id: i64,
        user_id: i64,
    ) -> Result<Option<ReportRecord>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM reports r WHERE r.id = ? AND r.user_id = ?",
            REPORT_COLUMNS
        );
        let row: Option<ReportRow> = sqlx::query_as(&sql)
            .bind(report_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(ReportRecord::try_from).transpose()
    }

    async fn find_all_with_author(&self) -> Result<Vec<AuthoredReport>, RepositoryError> {
        let sql = format!(
            "SELECT {}, u.username FROM reports r JOIN users u ON r.user_id = u.id ORDER BY r.created_at DESC, r.id DESC",
            REPORT_COLUMNS
        );
        let rows: Vec<AuthoredReportRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(AuthoredReport::try_from).collect()
    }

    async fn stats(&self, today: NaiveDate) -> Result<ReportStats, RepositoryError> {
        // created_at 以 RFC 3339 (UTC) 存储，前 10 个字符即日期
        let (total, presentations, today_count): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COALESCE(SUM(CASE WHEN type = 'presentation' THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN substr(created_at, 1, 10) = ? THEN 1 ELSE 0 END), 0)
            FROM reports
            "#,
        )
        .bind(today.format("%Y-%m-%d").to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(ReportStats {
            total: total as u64,
            presentations: presentations as u64,
            today: today_count as u64,
        })
    }
}
