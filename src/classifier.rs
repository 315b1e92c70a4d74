// SPDX-License-Identifier: MIT

//! Extension-based file categorization

use serde::{Deserialize, Serialize};

use crate::scanner::FileDescriptor;

/// Closed set of inventory categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Picture,
    WordDocument,
    ExcelDocument,
    PdfDocument,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Picture,
        Category::WordDocument,
        Category::ExcelDocument,
        Category::PdfDocument,
        Category::Other,
    ];

    /// Label stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Picture => "Picture",
            Category::WordDocument => "Word Document",
            Category::ExcelDocument => "Excel Document",
            Category::PdfDocument => "PDF Document",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A descriptor paired with its category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizedFile {
    pub descriptor: FileDescriptor,
    pub category: Category,
}

/// Map an extension (leading dot, any case, possibly empty) to its
/// category. Pure and total: every input yields a value.
pub fn classify(extension: &str) -> Category {
    match extension.to_ascii_lowercase().as_str() {
        ".jpg" | ".jpeg" | ".png" | ".gif" | ".bmp" => Category::Picture,
        ".doc" | ".docx" => Category::WordDocument,
        ".xls" | ".xlsx" => Category::ExcelDocument,
        ".pdf" => Category::PdfDocument,
        _ => Category::Other,
    }
}

/// Categorize every descriptor from a traversal, preserving order.
pub fn categorize_files(files: Vec<FileDescriptor>) -> Vec<CategorizedFile> {
    files
        .into_iter()
        .map(|descriptor| {
            let category = classify(&descriptor.extension);
            CategorizedFile {
                descriptor,
                category,
            }
        })
        .collect()
}
