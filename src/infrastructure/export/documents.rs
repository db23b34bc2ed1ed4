//! 文档导出
//!
//! "docx"/"pdf" 均为 UTF-8 纯文本，只有文件名和 MIME 类型不同

use crate::domain::report::ContentType;

pub const DEFAULT_REFERAT_TITLE: &str = "Реферат";
pub const DEFAULT_PRESENTATION_TITLE: &str = "Презентация";

pub const MIME_TXT: &str = "text/plain; charset=utf-8";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_PDF: &str = "application/pdf";

/// 下载格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Docx,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Txt => MIME_TXT,
            ExportFormat::Docx => MIME_DOCX,
            ExportFormat::Pdf => MIME_PDF,
        }
    }

    /// 已保存报告仅支持 txt / docx
    pub fn for_saved_report(s: &str) -> Option<Self> {
        match s {
            "txt" => Some(ExportFormat::Txt),
            "docx" => Some(ExportFormat::Docx),
            _ => None,
        }
    }
}

fn non_empty_or<'a>(title: &'a str, default: &'a str) -> &'a str {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

pub fn txt(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

pub fn referat_docx(text: &str, title: &str) -> Vec<u8> {
    format!("{}\n\n{}", non_empty_or(title, DEFAULT_REFERAT_TITLE), text).into_bytes()
}

pub fn presentation_docx(text: &str, title: &str) -> Vec<u8> {
    format!(
        "Презентация: {}\n\n{}",
        non_empty_or(title, DEFAULT_PRESENTATION_TITLE),
        text
    )
    .into_bytes()
}

pub fn presentation_pdf(text: &str, title: &str) -> Vec<u8> {
    // 与 docx 内容相同
    presentation_docx(text, title)
}

/// 按内容类型导出 docx
pub fn docx_for(content_type: ContentType, text: &str, title: &str) -> Vec<u8> {
    if content_type.is_presentation() {
        presentation_docx(text, title)
    } else {
        referat_docx(text, title)
    }
}

/// 临时导出文件名：реферат.docx / презентация.docx
pub fn adhoc_filename(content_type: ContentType, format: ExportFormat) -> String {
    format!("{}.{}", content_type.file_stem(), format.extension())
}

/// 演示文稿导出文件名：презентация_{title}.{ext}
pub fn presentation_filename(title: &str, format: ExportFormat) -> String {
    let title = non_empty_or(title, DEFAULT_PRESENTATION_TITLE).replace(' ', "_");
    format!("презентация_{}.{}", title, format.extension())
}

/// 已保存报告文件名：{stem}_{id}.{ext}
pub fn report_filename(content_type: ContentType, report_id: i64, format: ExportFormat) -> String {
    format!("{}_{}.{}", content_type.file_stem(), report_id, format.extension())
}

/// Content-Disposition 头：ASCII 回退名 + RFC 5987 UTF-8 名
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_bodies() {
        assert_eq!(txt("мәтін"), "мәтін".as_bytes());
        assert_eq!(referat_docx("body", ""), "Реферат\n\nbody".as_bytes());
        assert_eq!(referat_docx("body", "Тақырып"), "Тақырып\n\nbody".as_bytes());
        assert_eq!(
            presentation_docx("body", "AI"),
            "Презентация: AI\n\nbody".as_bytes()
        );
        assert_eq!(presentation_pdf("body", " "), "Презентация: Презентация\n\nbody".as_bytes());
    }

    #[test]
    fn test_docx_for_content_type() {
        assert_eq!(
            docx_for(ContentType::Presentation, "b", "t"),
            presentation_docx("b", "t")
        );
        assert_eq!(docx_for(ContentType::Referat, "b", "t"), referat_docx("b", "t"));
    }

    #[test]
    fn test_filenames() {
        assert_eq!(adhoc_filename(ContentType::Referat, ExportFormat::Docx), "реферат.docx");
        assert_eq!(
            presentation_filename("Жасанды интеллект", ExportFormat::Pdf),
            "презентация_Жасанды_интеллект.pdf"
        );
        assert_eq!(
            report_filename(ContentType::Presentation, 42, ExportFormat::Txt),
            "презентация_42.txt"
        );
    }

    #[test]
    fn test_saved_report_formats() {
        assert_eq!(ExportFormat::for_saved_report("txt"), Some(ExportFormat::Txt));
        assert_eq!(ExportFormat::for_saved_report("docx"), Some(ExportFormat::Docx));
        assert_eq!(ExportFormat::for_saved_report("pdf"), None);
    }

    #[test]
    fn test_content_disposition() {
        let header = content_disposition("реферат_7.txt");
        assert!(header.starts_with("attachment; filename=\""));
        assert!(header.contains("_______7.txt"));
        assert!(header.ends_with("filename*=UTF-8''%D1%80%D0%B5%D1%84%D0%B5%D1%80%D0%B0%D1%82_7.txt"));
        assert!(header.is_ascii());
    }
}
