//! User list filtering and timestamp display formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::types::{FilterCriteria, UserListItem};

/// Check a single item against every criterion.
///
/// - name: case-insensitive substring of `"firstName lastName"`
/// - role: case-insensitive substring of `role`
/// - created_at: case-sensitive substring of the raw `createdAt` string
pub fn matches(item: &UserListItem, criteria: &FilterCriteria) -> bool {
    let name_ok = criteria.name.is_empty()
        || item
            .search_name()
            .to_lowercase()
            .contains(&criteria.name.to_lowercase());

    let role_ok = criteria.role.is_empty()
        || item
            .role
            .to_lowercase()
            .contains(&criteria.role.to_lowercase());

    let created_ok =
        criteria.created_at.is_empty() || item.created_at.contains(criteria.created_at.as_str());

    name_ok && role_ok && created_ok
}

/// Derive the displayed collection from the base collection.
///
/// Pure and total: the base is never touched and the result is rebuilt from
/// scratch on every call, preserving base order.
pub fn filter_users(base: &[UserListItem], criteria: &FilterCriteria) -> Vec<UserListItem> {
    base.iter()
        .filter(|item| matches(item, criteria))
        .cloned()
        .collect()
}

/// Format an ISO-like timestamp as `DD-MM-YYYY` for display.
///
/// Accepts RFC 3339 (`2024-03-02T00:00:00Z`, with any offset), a naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` or a bare `YYYY-MM-DD`. Offsets are normalised
/// to UTC before taking the calendar date. Anything unparseable is returned
/// unchanged so the table never shows garbage.
pub fn format_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format("%d-%m-%Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(first: &str, last: &str, role: &str, created_at: &str) -> UserListItem {
        UserListItem {
            id: "1".into(),
            first_name: first.into(),
            last_name: last.into(),
            email: "a@x.com".into(),
            address: "HN".into(),
            created_at: created_at.into(),
            role: role.into(),
        }
    }

    fn sample() -> Vec<UserListItem> {
        vec![
            item("An", "Nguyen", "admin", "2024-01-05T00:00:00Z"),
            item("Binh", "Tran", "customer", "2024-02-10T08:30:00Z"),
            item("Chi", "Le", "Customer", "2023-12-31T23:59:59Z"),
        ]
    }

    fn criteria(name: &str, role: &str, created_at: &str) -> FilterCriteria {
        FilterCriteria {
            name: name.into(),
            role: role.into(),
            created_at: created_at.into(),
        }
    }

    #[test]
    fn test_empty_criteria_returns_base_unchanged() {
        let base = sample();
        let filtered = filter_users(&base, &FilterCriteria::default());
        assert_eq!(filtered, base);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let base = sample();
        let c = criteria("n", "cust", "");
        let once = filter_users(&base, &c);
        let twice = filter_users(&base, &c);
        assert_eq!(once, twice);
        assert_eq!(filter_users(&once, &c), once);
    }

    #[test]
    fn test_name_filter_is_case_insensitive_on_full_name() {
        let base = vec![item("An", "Nguyen", "admin", "2024-01-05T00:00:00Z")];
        let filtered = filter_users(&base, &criteria("an", "", ""));
        assert_eq!(filtered.len(), 1);

        // Spans the space between first and last name
        let filtered = filter_users(&base, &criteria("AN NGU", "", ""));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_name_filter_does_not_match_reversed_order() {
        let base = vec![item("An", "Nguyen", "admin", "2024-01-05T00:00:00Z")];
        assert!(filter_users(&base, &criteria("nguyen an", "", "")).is_empty());
    }

    #[test]
    fn test_role_filter_is_case_insensitive() {
        let filtered = filter_users(&sample(), &criteria("", "CUSTOMER", ""));
        let names: Vec<_> = filtered.iter().map(|u| u.first_name.as_str()).collect();
        assert_eq!(names, vec!["Binh", "Chi"]);
    }

    #[test]
    fn test_created_at_filter_matches_raw_string() {
        let base = vec![item("An", "Nguyen", "admin", "2024-01-05T00:00:00Z")];
        assert!(filter_users(&base, &criteria("", "", "2024-01-06")).is_empty());
        assert_eq!(filter_users(&base, &criteria("", "", "2024-01-05")).len(), 1);
    }

    #[test]
    fn test_created_at_filter_ignores_display_format() {
        let base = vec![item("An", "Nguyen", "admin", "2024-01-05T00:00:00Z")];
        // "05-01-2024" is what the table shows, but filtering uses the raw value
        assert!(filter_users(&base, &criteria("", "", "05-01-2024")).is_empty());
    }

    #[test]
    fn test_created_at_filter_is_case_sensitive() {
        let base = vec![item("An", "Nguyen", "admin", "2024-01-05T00:00:00Z")];
        assert!(filter_users(&base, &criteria("", "", "t00")).is_empty());
        assert_eq!(filter_users(&base, &criteria("", "", "T00")).len(), 1);
    }

    #[test]
    fn test_all_criteria_must_hold() {
        let filtered = filter_users(&sample(), &criteria("an", "admin", "2024"));
        assert_eq!(filtered.len(), 1);
        assert!(filter_users(&sample(), &criteria("an", "customer", "2023")).is_empty());
    }

    #[test]
    fn test_filter_preserves_base_order() {
        let filtered = filter_users(&sample(), &criteria("", "", "T"));
        let ids: Vec<_> = filtered.iter().map(|u| u.first_name.clone()).collect();
        assert_eq!(ids, vec!["An", "Binh", "Chi"]);
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2024-03-02T00:00:00Z"), "02-03-2024");
        assert_eq!(format_date("2024-12-25T10:15:30.123Z"), "25-12-2024");
    }

    #[test]
    fn test_format_date_normalises_offsets_to_utc() {
        assert_eq!(format_date("2024-03-02T01:00:00+02:00"), "01-03-2024");
    }

    #[test]
    fn test_format_date_naive_forms() {
        assert_eq!(format_date("2024-03-02T08:00:00"), "02-03-2024");
        assert_eq!(format_date("2024-03-02 08:00:00.5"), "02-03-2024");
        assert_eq!(format_date("2024-03-02"), "02-03-2024");
    }

    #[test]
    fn test_format_date_passes_through_unparseable() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }
}
