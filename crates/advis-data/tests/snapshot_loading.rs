//! Loading the snapshot from disk and from the embedded copy.

use std::sync::Arc;

use advis_core::enums::TableKind;
use advis_data::{DataError, DirectorySource, EmbeddedSource, TableRepository, TableSource};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn embedded_snapshot_loads_every_table() {
    let repo = TableRepository::embedded();
    repo.preload().await.unwrap();

    for table in TableKind::ALL {
        assert!(repo.is_loaded(table), "{table} should be loaded");
    }
    assert_eq!(repo.row_count(TableKind::Students), Some(12));
    assert_eq!(repo.row_count(TableKind::Courses), Some(14));

    let students = repo.students().await.unwrap();
    assert_eq!(students[0].name, "Aarav Patel");
    assert_eq!(students[0].major, "Computer Science");
}

#[tokio::test]
async fn directory_source_reads_files_with_overridden_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Courses.csv"),
        "course_id,dept,level,title\n101,CS,110,Intro to Programming\n\n",
    )
    .unwrap();

    let source =
        DirectorySource::new(dir.path()).with_file_name(TableKind::Courses, "Courses.csv");
    let repo = TableRepository::new(source);

    let courses = repo.courses().await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Intro to Programming");

    let again = repo.courses().await.unwrap();
    assert!(Arc::ptr_eq(&courses, &again));

    let err = repo.students().await.unwrap_err();
    assert!(matches!(err, DataError::MissingTable(TableKind::Students)));
}

#[tokio::test]
async fn directory_copy_of_embedded_snapshot_matches() {
    let dir = tempfile::tempdir().unwrap();
    for table in TableKind::ALL {
        let text = EmbeddedSource.read(table).unwrap();
        std::fs::write(dir.path().join(table.default_file_name()), text.as_ref()).unwrap();
    }

    let from_disk = TableRepository::new(DirectorySource::new(dir.path()));
    let embedded = TableRepository::embedded();

    assert_eq!(
        *from_disk.term_gpas().await.unwrap(),
        *embedded.term_gpas().await.unwrap()
    );
    assert_eq!(
        *from_disk.advising_notes().await.unwrap(),
        *embedded.advising_notes().await.unwrap()
    );
}

#[tokio::test]
async fn malformed_file_reports_table_and_line() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("term_gpas.csv"),
        "student_id,term_id,term_gpa\n1,1,3.2\n2,1,abc\n",
    )
    .unwrap();

    let repo = TableRepository::new(DirectorySource::new(dir.path()));
    let err = repo.term_gpas().await.unwrap_err();
    assert_eq!(err.table(), TableKind::TermGpas);
    assert!(matches!(err, DataError::Parse { line: 3, .. }));
}
