use ojtlog::core::import::{ImportLogic, read_rows, validate_rows};
use ojtlog::db::pool::DbPool;
use ojtlog::db::queries::count_rows;
use std::fs;
use std::path::Path;

mod common;
use common::temp_out;

const SHEET: &str = "\
Student ID,First Name,Last Name,Email,Section
2021-00123,Ana,Reyes,ana.reyes@school.edu,BSIT-4A
2021-00124,Ben,Cruz,ben.cruz@school.edu,BSIT-4A
2021-00123,Ana,Reyes,ana2@school.edu,BSIT-4A
2021-00125,Carl,Santos,BEN.CRUZ@school.edu,BSIT-4B
,Dina,Lim,dina@school.edu,BSIT-4B
2021-00126,Eli,Tan,not-an-email,BSIT-4B

2021-00127,Faye,Go,faye@school.edu,BSIT-4B
";

#[test]
fn test_validation_reports_each_bad_row() {
    let rows = read_rows(SHEET.as_bytes()).unwrap();
    assert_eq!(rows.len(), 7);

    let report = validate_rows(&rows);

    let valid: Vec<_> = report.valid.iter().map(|s| s.student_id.as_str()).collect();
    assert_eq!(valid, vec!["2021-00123", "2021-00124", "2021-00127"]);

    assert_eq!(report.rejected.len(), 4);
    let lines: Vec<_> = report.rejected.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![4, 5, 6, 7]);

    assert!(report.rejected[0].reasons[0].contains("duplicate student id"));
    assert!(report.rejected[1].reasons[0].contains("duplicate email"));
    assert!(report.rejected[2].reasons.iter().any(|r| r == "missing student_id"));
    assert!(report.rejected[3].reasons[0].contains("invalid email"));
}

#[test]
fn test_fields_are_trimmed() {
    let csv = "student_id,first_name,last_name,email,section\n 2021-00200 , Gia ,Uy, gia@school.edu ,BSCS-3\n";
    let report = validate_rows(&read_rows(csv.as_bytes()).unwrap());

    assert_eq!(report.valid.len(), 1);
    assert_eq!(report.valid[0].first_name, "Gia");
    assert_eq!(report.valid[0].email, "gia@school.edu");
}

#[test]
fn test_rejected_row_does_not_block_later_fix() {
    let csv = "student_id,first_name,last_name,email,section\n\
               2021-00300,Ivy,Lao,ivy-at-school,BSCS-3\n\
               2021-00300,Ivy,Lao,ivy@school.edu,BSCS-3\n";
    let report = validate_rows(&read_rows(csv.as_bytes()).unwrap());

    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].line, 2);
    assert!(report.rejected[0].reasons[0].contains("invalid email"));

    assert_eq!(report.valid.len(), 1);
    assert_eq!(report.valid[0].email, "ivy@school.edu");
}

#[test]
fn test_malformed_student_id() {
    let csv = "student_id,first_name,last_name,email,section\nABC-1,Hal,Ong,hal@school.edu,BSCS-3\n";
    let report = validate_rows(&read_rows(csv.as_bytes()).unwrap());

    assert!(report.valid.is_empty());
    assert!(report.rejected[0].reasons[0].contains("invalid student id"));
}

#[test]
fn test_import_inserts_valid_rows_and_skips_registered() {
    let file = temp_out("import_students", "csv");
    fs::write(&file, SHEET).unwrap();

    let mut pool = DbPool::in_memory().unwrap();

    let first = ImportLogic::apply(&mut pool, Path::new(&file), false).unwrap();
    assert_eq!(first.valid.len(), 3);
    assert_eq!(count_rows(&pool.conn, "students").unwrap(), 3);

    let second = ImportLogic::apply(&mut pool, Path::new(&file), false).unwrap();
    assert!(second.valid.is_empty());
    assert!(
        second
            .rejected
            .iter()
            .any(|r| r.reasons.iter().any(|m| m == "already registered"))
    );
    assert_eq!(count_rows(&pool.conn, "students").unwrap(), 3);
}

#[test]
fn test_dry_run_inserts_nothing() {
    let file = temp_out("import_students_dry", "csv");
    fs::write(&file, SHEET).unwrap();

    let mut pool = DbPool::in_memory().unwrap();
    let report = ImportLogic::apply(&mut pool, Path::new(&file), true).unwrap();

    assert_eq!(report.valid.len(), 3);
    assert_eq!(count_rows(&pool.conn, "students").unwrap(), 0);
}
