//! Uploaded-document library shown on the dashboard.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocKind {
    Pdf,
    Docx,
    Pptx,
    Other,
}

impl DocKind {
    /// Classify by file extension, case-insensitively.
    pub fn from_file_name(name: &str) -> Self {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("docx") => Self::Docx,
            Some("pptx") => Self::Pptx,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Pptx => "PPTX",
            Self::Other => "FILE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryDocument {
    pub id: String,
    pub title: String,
    pub kind: DocKind,
    pub last_opened: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Library {
    documents: Vec<LibraryDocument>,
}

impl Library {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Record a fresh upload at the top of the list. Re-uploading a known id
    /// moves it to the top instead of duplicating it.
    pub fn add_upload(&mut self, file_id: &str, file_name: &str) {
        self.documents.retain(|doc| doc.id != file_id);
        self.documents.insert(
            0,
            LibraryDocument {
                id: file_id.to_owned(),
                title: file_name.to_owned(),
                kind: DocKind::from_file_name(file_name),
                last_opened: "Just now".to_owned(),
            },
        );
    }

    pub fn get(&self, id: &str) -> Option<&LibraryDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Documents whose title contains `query`, ignoring case. A blank query
    /// matches everything.
    pub fn filtered(&self, query: &str) -> Vec<LibraryDocument> {
        let needle = query.trim().to_lowercase();
        self.documents
            .iter()
            .filter(|doc| needle.is_empty() || doc.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
