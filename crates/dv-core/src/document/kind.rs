use serde::{Deserialize, Serialize};

/// Coarse document category derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Pdf,
    Image,
    Word,
    Spreadsheet,
    Other,
}

impl DocumentKind {
    pub fn from_file_name(name: &str) -> Self {
        let extension = match name.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return DocumentKind::Other,
        };

        match extension.as_str() {
            "pdf" => DocumentKind::Pdf,
            "jpg" | "jpeg" | "png" => DocumentKind::Image,
            "doc" | "docx" => DocumentKind::Word,
            "xls" | "xlsx" => DocumentKind::Spreadsheet,
            _ => DocumentKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Image => "image",
            DocumentKind::Word => "word",
            DocumentKind::Spreadsheet => "spreadsheet",
            DocumentKind::Other => "other",
        }
    }
}
