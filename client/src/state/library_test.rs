use super::*;

#[test]
fn doc_kind_from_extension() {
    assert_eq!(DocKind::from_file_name("notes.PDF"), DocKind::Pdf);
    assert_eq!(DocKind::from_file_name("essay.docx"), DocKind::Docx);
    assert_eq!(DocKind::from_file_name("deck.final.pptx"), DocKind::Pptx);
    assert_eq!(DocKind::from_file_name("README"), DocKind::Other);
    assert_eq!(DocKind::from_file_name("image.png"), DocKind::Other);
}

#[test]
fn uploads_are_listed_newest_first() {
    let mut library = Library::default();
    library.add_upload("a", "first.pdf");
    library.add_upload("b", "second.docx");
    let docs = library.filtered("");
    assert_eq!(docs[0].id, "b");
    assert_eq!(docs[1].id, "a");
    assert_eq!(docs[0].last_opened, "Just now");
}

#[test]
fn reupload_moves_document_to_top() {
    let mut library = Library::default();
    library.add_upload("a", "first.pdf");
    library.add_upload("b", "second.pdf");
    library.add_upload("a", "first.pdf");
    assert_eq!(library.len(), 2);
    assert_eq!(library.filtered("")[0].id, "a");
}

#[test]
fn filter_is_case_insensitive() {
    let mut library = Library::default();
    library.add_upload("a", "AP Art History.pdf");
    library.add_upload("b", "Electrical Foundations.docx");
    let hits = library.filtered("  art ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "AP Art History.pdf");
    assert!(library.filtered("chemistry").is_empty());
}

#[test]
fn get_finds_by_id() {
    let mut library = Library::default();
    assert!(library.is_empty());
    library.add_upload("a", "x.pdf");
    assert_eq!(library.get("a").map(|d| d.kind), Some(DocKind::Pdf));
    assert!(library.get("missing").is_none());
}
