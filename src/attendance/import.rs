//! Bulk attendance import from timekeeper spreadsheet exports.
//!
//! The exports arrive as loosely structured grids: a preamble of title and
//! merge rows, then a header row whose cells are the day numbers of the
//! month, then one or more rows per employee carrying check times under the
//! day columns. Parsing is tolerant by design: rows that match no known
//! employee and cells that are not times are skipped, never errors.
//!
//! Reconciliation is destructive per (employee, month): importing a sheet
//! replaces every existing record of that month for the employees the sheet
//! mentions, including manually entered leave. Records of other months and
//! of employees absent from the sheet are untouched.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, RecordStatus, User};

use super::lateness::parse_hhmm;

/// Minimum distinct day numbers a row must carry to qualify as the header.
const MIN_DAY_COLUMNS: usize = 5;

/// Folds Vietnamese diacritics to their base letter. Input is already
/// lowercased.
fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ'
        | 'ấ' | 'ẩ' | 'ẫ' | 'ậ' => 'a',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' => 'e',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ'
        | 'ớ' | 'ở' | 'ỡ' | 'ợ' => 'o',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' => 'u',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'đ' => 'd',
        other => other,
    }
}

/// Normalizes a name for matching: lowercase, diacritics folded, interior
/// whitespace collapsed to single spaces.
fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(fold_char)
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Finds the header row and maps each day number to its first column.
fn find_day_columns(rows: &[Vec<String>]) -> Option<(usize, HashMap<u32, usize>)> {
    for (row_index, row) in rows.iter().enumerate() {
        let mut columns: HashMap<u32, usize> = HashMap::new();
        for (col_index, cell) in row.iter().enumerate() {
            if let Ok(day) = cell.trim().parse::<u32>() {
                if (1..=31).contains(&day) {
                    columns.entry(day).or_insert(col_index);
                }
            }
        }
        if columns.len() >= MIN_DAY_COLUMNS {
            return Some((row_index, columns));
        }
    }
    None
}

/// Parses a timekeeper sheet into attendance records.
///
/// The header row is the first row containing at least five distinct day
/// numbers. Rows below it are matched to `users` by
/// normalized name equality (any cell in the row may carry the name). For
/// each employee and day column, the employee's matching rows are scanned
/// top to bottom: the first well-formed "HH:MM" value is the check-in, the
/// second the check-out. Days with no time value produce no record.
///
/// All produced records carry [`RecordStatus::Present`] as the stored
/// label; the Present/Late distinction is re-derived from the check-in at
/// classification time.
///
/// # Errors
///
/// Rejects sheets with fewer than two rows, with no recognizable day
/// header row, or whose rows match none of the given users. Structural
/// rejection leaves no partial state; the caller never sees a silent
/// empty import.
pub fn parse_sheet(
    rows: &[Vec<String>],
    users: &[User],
    year: i32,
    month: u32,
) -> EngineResult<Vec<AttendanceRecord>> {
    if rows.len() < 2 {
        return Err(EngineError::ImportRejected {
            message: format!("sheet has {} rows, need at least 2", rows.len()),
        });
    }

    let (header_index, day_columns) =
        find_day_columns(rows).ok_or_else(|| EngineError::ImportRejected {
            message: "no day header row found".to_string(),
        })?;

    let by_name: HashMap<String, &User> = users
        .iter()
        .map(|u| (normalize_name(&u.name), u))
        .collect();

    let day_column_set: HashSet<usize> = day_columns.values().copied().collect();

    // Group the body rows by employee, preserving sheet order. A row with
    // content only under day columns continues the previous employee (the
    // exports put check-outs on a nameless second row).
    let mut matched_order: Vec<&User> = Vec::new();
    let mut rows_by_user: HashMap<&str, Vec<&Vec<String>>> = HashMap::new();
    let mut current: Option<&User> = None;
    for row in &rows[header_index + 1..] {
        let matched = row
            .iter()
            .find_map(|cell| by_name.get(&normalize_name(cell)))
            .copied();
        let user = match matched {
            Some(user) => {
                current = Some(user);
                Some(user)
            }
            None => {
                let is_continuation = row
                    .iter()
                    .enumerate()
                    .all(|(i, cell)| day_column_set.contains(&i) || cell.trim().is_empty());
                if is_continuation {
                    current
                } else {
                    // A named row for somebody we do not know: drop it and
                    // its continuation rows.
                    current = None;
                    None
                }
            }
        };
        if let Some(user) = user {
            let entry = rows_by_user.entry(user.id.as_str()).or_default();
            if entry.is_empty() {
                matched_order.push(user);
            }
            entry.push(row);
        }
    }

    if matched_order.is_empty() {
        return Err(EngineError::ImportRejected {
            message: "no employee row matched a known user".to_string(),
        });
    }

    let mut days: Vec<u32> = day_columns.keys().copied().collect();
    days.sort_unstable();

    let mut records = Vec::new();
    for user in matched_order {
        let user_rows = &rows_by_user[user.id.as_str()];
        for &day in &days {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };
            let column = day_columns[&day];

            let mut times = user_rows
                .iter()
                .filter_map(|row| row.get(column))
                .filter(|cell| parse_hhmm(cell).is_some())
                .map(|cell| cell.trim().to_string());

            let check_in = times.next();
            let check_out = times.next();
            if check_in.is_none() {
                continue;
            }

            records.push(AttendanceRecord {
                id: format!("att_{}_{date}", user.id),
                user_id: user.id.clone(),
                date,
                status: RecordStatus::Present,
                check_in,
                check_out,
            });
        }
    }

    Ok(records)
}

/// Merges an import into the existing record set.
///
/// Destructive per (employee, month): every existing record of the target
/// month belonging to an employee the import mentions is dropped, then the
/// imported records are appended. Other months and unmentioned employees
/// keep their records, manual entries included.
pub fn reconcile_import(
    existing: Vec<AttendanceRecord>,
    imported: Vec<AttendanceRecord>,
    year: i32,
    month: u32,
) -> Vec<AttendanceRecord> {
    let imported_users: HashSet<&str> = imported.iter().map(|r| r.user_id.as_str()).collect();

    let mut merged: Vec<AttendanceRecord> = existing
        .into_iter()
        .filter(|r| {
            !(r.date.year() == year
                && r.date.month() == month
                && imported_users.contains(r.user_id.as_str()))
        })
        .collect();
    merged.extend(imported);
    merged
}

/// Inserts or replaces a record by its (user, date) key.
pub fn upsert_record(records: &mut Vec<AttendanceRecord>, record: AttendanceRecord) {
    match records
        .iter_mut()
        .find(|r| r.user_id == record.user_id && r.date == record.date)
    {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentStatus;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            role: "sales".to_string(),
            basic_salary: Decimal::ZERO,
            employment: EmploymentStatus::Normal,
        }
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn sample_sheet() -> Vec<Vec<String>> {
        vec![
            row(&["ATTENDANCE SHEET", "", "", "", "", "", ""]),
            row(&["MARCH 2026", "", "", "", "", "", ""]),
            row(&["No", "Name", "1", "2", "3", "4", "5"]),
            // Two rows per employee: check-ins above, check-outs below.
            row(&["1", "Nguyễn Văn Đông", "08:02", "07:55", "", "08:30", "07:58"]),
            row(&["", "", "17:31", "17:35", "", "17:40", "17:30"]),
            row(&["2", "Trần Thị Bình", "", "08:10", "08:05", "", ""]),
            row(&["", "", "", "17:28", "17:33", "", ""]),
        ]
    }

    #[test]
    fn test_normalize_name_folds_diacritics() {
        assert_eq!(normalize_name("Nguyễn Văn Đông"), "nguyen van dong");
        assert_eq!(normalize_name("  TRẦN   Thị  Bình "), "tran thi binh");
        assert_eq!(normalize_name("Lê Hữu Phước"), "le huu phuoc");
    }

    #[test]
    fn test_rejects_sheet_with_too_few_rows() {
        let users = [user("user_001", "Nguyễn Văn Đông")];
        let result = parse_sheet(&[row(&["only one row"])], &users, 2026, 3);
        assert!(matches!(result, Err(EngineError::ImportRejected { .. })));
    }

    #[test]
    fn test_rejects_sheet_without_day_header() {
        let rows = vec![
            row(&["Name", "Notes"]),
            row(&["Nguyễn Văn Đông", "no day columns here"]),
        ];
        let users = [user("user_001", "Nguyễn Văn Đông")];
        let result = parse_sheet(&rows, &users, 2026, 3);
        assert!(matches!(result, Err(EngineError::ImportRejected { .. })));
    }

    #[test]
    fn test_rejects_sheet_matching_no_employee() {
        // A well-formed sheet for people the portal does not know must be
        // rejected outright, not imported as an empty record set.
        let users = [user("user_001", "Phạm Quốc Việt")];
        let result = parse_sheet(&sample_sheet(), &users, 2026, 3);
        match result {
            Err(EngineError::ImportRejected { message }) => {
                assert!(message.contains("no employee"), "{message}");
            }
            other => panic!("expected ImportRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_paired_in_and_out_rows() {
        let users = [
            user("user_001", "Nguyen Van Dong"), // matches despite diacritics
            user("user_002", "Trần Thị Bình"),
        ];
        let records = parse_sheet(&sample_sheet(), &users, 2026, 3).unwrap();

        // Dong: days 1, 2, 4, 5 (day 3 empty). Binh: days 2, 3.
        assert_eq!(records.len(), 6);

        let dong_day1 = records
            .iter()
            .find(|r| r.user_id == "user_001" && r.date == date(2026, 3, 1))
            .unwrap();
        assert_eq!(dong_day1.check_in.as_deref(), Some("08:02"));
        assert_eq!(dong_day1.check_out.as_deref(), Some("17:31"));
        assert_eq!(dong_day1.status, RecordStatus::Present);
        assert_eq!(dong_day1.id, "att_user_001_2026-03-01");

        let binh_day3 = records
            .iter()
            .find(|r| r.user_id == "user_002" && r.date == date(2026, 3, 3))
            .unwrap();
        assert_eq!(binh_day3.check_in.as_deref(), Some("08:05"));
        assert_eq!(binh_day3.check_out.as_deref(), Some("17:33"));
    }

    #[test]
    fn test_empty_day_produces_no_record() {
        let users = [user("user_001", "Nguyễn Văn Đông")];
        let records = parse_sheet(&sample_sheet(), &users, 2026, 3).unwrap();
        assert!(!records.iter().any(|r| r.date == date(2026, 3, 3)));
    }

    #[test]
    fn test_unmatched_rows_are_skipped() {
        let mut rows = sample_sheet();
        rows.push(row(&["3", "Somebody Unknown", "08:00", "", "", "", ""]));
        let users = [user("user_001", "Nguyễn Văn Đông")];

        let records = parse_sheet(&rows, &users, 2026, 3).unwrap();
        assert!(records.iter().all(|r| r.user_id == "user_001"));
    }

    #[test]
    fn test_day_column_beyond_month_end_is_skipped() {
        let rows = vec![
            row(&["Name", "27", "28", "29", "30", "31"]),
            row(&["Trần Thị Bình", "08:00", "08:00", "08:00", "08:00", "08:00"]),
        ];
        let users = [user("user_002", "Trần Thị Bình")];

        // February 2026 has 28 days: columns 29-31 produce nothing.
        let records = parse_sheet(&rows, &users, 2026, 2).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_non_time_cells_are_ignored() {
        let rows = vec![
            row(&["Name", "1", "2", "3", "4", "5"]),
            row(&["Trần Thị Bình", "x", "08:10", "OFF", "-", ""]),
        ];
        let users = [user("user_002", "Trần Thị Bình")];

        let records = parse_sheet(&rows, &users, 2026, 3).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, date(2026, 3, 2));
    }

    #[test]
    fn test_reconcile_replaces_month_for_imported_users_only() {
        let manual_leave = AttendanceRecord {
            id: "att_user_001_2026-03-10".to_string(),
            user_id: "user_001".to_string(),
            date: date(2026, 3, 10),
            status: RecordStatus::Absent,
            check_in: None,
            check_out: None,
        };
        let other_month = AttendanceRecord {
            id: "att_user_001_2026-02-05".to_string(),
            user_id: "user_001".to_string(),
            date: date(2026, 2, 5),
            status: RecordStatus::Present,
            check_in: Some("08:00".to_string()),
            check_out: None,
        };
        let other_user = AttendanceRecord {
            id: "att_user_009_2026-03-10".to_string(),
            user_id: "user_009".to_string(),
            date: date(2026, 3, 10),
            status: RecordStatus::Present,
            check_in: Some("08:00".to_string()),
            check_out: None,
        };
        let imported = vec![AttendanceRecord {
            id: "att_user_001_2026-03-02".to_string(),
            user_id: "user_001".to_string(),
            date: date(2026, 3, 2),
            status: RecordStatus::Present,
            check_in: Some("07:58".to_string()),
            check_out: Some("17:30".to_string()),
        }];

        let merged = reconcile_import(
            vec![manual_leave, other_month.clone(), other_user.clone()],
            imported.clone(),
            2026,
            3,
        );

        // The manual March entry for user_001 is gone; the February record
        // and the other user's March record survive.
        assert_eq!(merged.len(), 3);
        assert!(merged.contains(&other_month));
        assert!(merged.contains(&other_user));
        assert!(merged.contains(&imported[0]));
        assert!(!merged.iter().any(|r| r.id == "att_user_001_2026-03-10"));
    }

    #[test]
    fn test_reimport_is_idempotent_for_the_month() {
        let users = [user("user_001", "Nguyễn Văn Đông")];
        let first = parse_sheet(&sample_sheet(), &users, 2026, 3).unwrap();
        let merged = reconcile_import(Vec::new(), first.clone(), 2026, 3);
        let again = parse_sheet(&sample_sheet(), &users, 2026, 3).unwrap();
        let merged = reconcile_import(merged, again, 2026, 3);
        assert_eq!(merged, first);
    }

    #[test]
    fn test_upsert_replaces_by_user_and_date() {
        let mut records = vec![AttendanceRecord {
            id: "att_user_001_2026-03-02".to_string(),
            user_id: "user_001".to_string(),
            date: date(2026, 3, 2),
            status: RecordStatus::Present,
            check_in: Some("08:00".to_string()),
            check_out: None,
        }];

        upsert_record(
            &mut records,
            AttendanceRecord {
                id: "att_user_001_2026-03-02".to_string(),
                user_id: "user_001".to_string(),
                date: date(2026, 3, 2),
                status: RecordStatus::Absent,
                check_in: None,
                check_out: None,
            },
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, RecordStatus::Absent);

        upsert_record(
            &mut records,
            AttendanceRecord {
                id: "att_user_001_2026-03-03".to_string(),
                user_id: "user_001".to_string(),
                date: date(2026, 3, 3),
                status: RecordStatus::Present,
                check_in: Some("07:50".to_string()),
                check_out: None,
            },
        );
        assert_eq!(records.len(), 2);
    }
}
