//! Subscription Service - expiry and overdue-fine calculation
//!
//! All comparisons are done on whole-day counts since the Unix epoch
//! (`floor(epoch_millis / 86_400_000)`); there is no calendar arithmetic.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::{IssuedBookStatus, LoanStatus, ReturnStatus, SubscriptionReport, User};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Fine for a late return while the subscription is still running
pub const FINE_OVERDUE: u32 = 100;
/// Fine for a late return once the subscription has expired
pub const FINE_OVERDUE_EXPIRED: u32 = 200;

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a stored date. Every format is read as UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole days elapsed since the Unix epoch, rounded towards negative infinity
pub fn day_count(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_millis().div_euclid(MILLIS_PER_DAY)
}

/// Day count of a stored date; absent, blank or unreadable dates count as `now`
pub fn date_in_days(raw: Option<&str>, now: DateTime<Utc>) -> i64 {
    raw.and_then(parse_date)
        .map(day_count)
        .unwrap_or_else(|| day_count(now))
}

/// Build the subscription report for `user` as seen at `now`
pub fn subscription_report(user: &User, now: DateTime<Utc>) -> SubscriptionReport {
    let current_day = day_count(now);
    let start_day = date_in_days(Some(&user.subscription_date), now);
    let expiration_day = start_day + user.subscription_type.duration_days();
    let subscription_expired = expiration_day < current_day;

    let issued_book_status = match user.issued_book {
        Some(_) => {
            let return_day = date_in_days(user.return_date.as_deref(), now);
            let overdue = return_day < current_day;

            IssuedBookStatus::Issued(LoanStatus {
                days_left_for_return: return_day - current_day,
                return_status: if overdue {
                    ReturnStatus::Passed
                } else {
                    ReturnStatus::NotYetPassed
                },
                fine: match (overdue, subscription_expired) {
                    (false, _) => 0,
                    (true, false) => FINE_OVERDUE,
                    (true, true) => FINE_OVERDUE_EXPIRED,
                },
            })
        }
        None => IssuedBookStatus::NoBookIssued,
    };

    SubscriptionReport {
        user: user.clone(),
        subscription_expired,
        days_left_for_subscription: expiration_day - current_day,
        issued_book_status,
    }
}

/// Build the subscription report against the current wall clock
pub fn current_subscription_report(user: &User) -> SubscriptionReport {
    subscription_report(user, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriptionType;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    fn days_ago(days: i64) -> String {
        (now() - Duration::days(days)).format("%Y-%m-%d").to_string()
    }

    fn member(kind: &str, start: &str) -> User {
        User {
            id: "1".to_string(),
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subscription_type: SubscriptionType::from(kind),
            subscription_date: start.to_string(),
            issued_book: None,
            issued_date: None,
            return_date: None,
        }
    }

    fn borrower(kind: &str, start: &str, return_date: &str) -> User {
        User {
            issued_book: Some(1),
            issued_date: Some(days_ago(20)),
            return_date: Some(return_date.to_string()),
            ..member(kind, start)
        }
    }

    fn loan(report: &SubscriptionReport) -> &LoanStatus {
        match &report.issued_book_status {
            IssuedBookStatus::Issued(status) => status,
            IssuedBookStatus::NoBookIssued => panic!("expected an issued book"),
        }
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("01/15/2024"), Some(expected));
        assert_eq!(parse_date("2024-01-15T00:00:00Z"), Some(expected));
        assert_eq!(parse_date("2024-01-15T00:00:00"), Some(expected));
        assert_eq!(
            parse_date("2024-01-15T02:00:00+02:00"),
            Some(expected),
            "offsets are normalised to UTC"
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("someday"), None);
    }

    #[test]
    fn test_day_count_floors() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(day_count(epoch), 0);
        assert_eq!(day_count(epoch + Duration::hours(23)), 0);
        assert_eq!(day_count(epoch + Duration::days(1)), 1);
        assert_eq!(day_count(epoch - Duration::hours(1)), -1);
    }

    #[test]
    fn test_date_in_days_falls_back_to_now() {
        let today = day_count(now());
        assert_eq!(date_in_days(None, now()), today);
        assert_eq!(date_in_days(Some(""), now()), today);
        assert_eq!(date_in_days(Some("not a date"), now()), today);
        assert_eq!(date_in_days(Some(&days_ago(4)), now()), today - 4);
    }

    #[test]
    fn test_expiration_offsets_by_plan() {
        let start = days_ago(100);
        for (kind, offset) in [("monthly", 30), ("annual", 365), ("trial", 7), ("weekly", 0)] {
            let report = subscription_report(&member(kind, &start), now());
            assert_eq!(
                report.days_left_for_subscription,
                offset - 100,
                "plan {}",
                kind
            );
        }
    }

    #[test]
    fn test_unknown_plan_expires_after_start_day() {
        let today = subscription_report(&member("other", &days_ago(0)), now());
        assert!(!today.subscription_expired);
        assert_eq!(today.days_left_for_subscription, 0);

        let yesterday = subscription_report(&member("other", &days_ago(1)), now());
        assert!(yesterday.subscription_expired);
        assert_eq!(yesterday.days_left_for_subscription, -1);
    }

    #[test]
    fn test_expiry_is_strictly_after_last_day() {
        // Monthly plan started 30 days ago expires today: still active
        let report = subscription_report(&member("monthly", &days_ago(30)), now());
        assert!(!report.subscription_expired);
        assert_eq!(report.days_left_for_subscription, 0);

        let report = subscription_report(&member("monthly", &days_ago(31)), now());
        assert!(report.subscription_expired);
        assert_eq!(report.days_left_for_subscription, -1);
    }

    #[test]
    fn test_trial_started_ten_days_ago_is_expired() {
        let report = subscription_report(&member("trial", &days_ago(10)), now());

        assert!(report.subscription_expired);
        assert_eq!(report.days_left_for_subscription, -3);
    }

    #[test]
    fn test_no_book_issued_sentinel() {
        for kind in ["monthly", "annual", "trial", "other"] {
            let report = subscription_report(&member(kind, &days_ago(400)), now());
            assert_eq!(report.issued_book_status, IssuedBookStatus::NoBookIssued);
        }
    }

    #[test]
    fn test_overdue_with_active_subscription_fines_100() {
        let user = borrower("trial", &days_ago(2), &days_ago(1));
        let report = subscription_report(&user, now());

        assert!(!report.subscription_expired);
        let status = loan(&report);
        assert_eq!(status.return_status, ReturnStatus::Passed);
        assert_eq!(status.days_left_for_return, -1);
        assert_eq!(status.fine, FINE_OVERDUE);
    }

    #[test]
    fn test_overdue_with_expired_subscription_fines_200() {
        let user = borrower("trial", &days_ago(30), &days_ago(5));
        let report = subscription_report(&user, now());

        assert!(report.subscription_expired);
        let status = loan(&report);
        assert_eq!(status.return_status, ReturnStatus::Passed);
        assert_eq!(status.fine, FINE_OVERDUE_EXPIRED);
    }

    #[test]
    fn test_not_overdue_has_no_fine() {
        let due_tomorrow = (now() + Duration::days(1)).format("%Y-%m-%d").to_string();

        // Expired subscription alone never produces a fine
        let user = borrower("trial", &days_ago(30), &due_tomorrow);
        let status = subscription_report(&user, now());
        assert_eq!(loan(&status).fine, 0);
        assert_eq!(loan(&status).days_left_for_return, 1);
        assert_eq!(loan(&status).return_status, ReturnStatus::NotYetPassed);

        // Due today is not yet passed
        let user = borrower("annual", &days_ago(3), &days_ago(0));
        let status = subscription_report(&user, now());
        assert_eq!(loan(&status).fine, 0);
        assert_eq!(loan(&status).days_left_for_return, 0);
    }

    #[test]
    fn test_issued_book_without_return_date_is_due_today() {
        let user = User {
            issued_book: Some(4),
            ..member("monthly", &days_ago(1))
        };
        let report = subscription_report(&user, now());

        let status = loan(&report);
        assert_eq!(status.days_left_for_return, 0);
        assert_eq!(status.fine, 0);
    }

    #[test]
    fn test_report_serializes_user_fields_flat() {
        let user = borrower("monthly", &days_ago(2), &days_ago(1));
        let json = serde_json::to_value(subscription_report(&user, now())).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["subscriptionType"], "monthly");
        assert_eq!(json["subscriptionExpired"], false);
        assert_eq!(json["daysLeftForSubscription"], 28);
        assert_eq!(json["issuedBookStatus"]["fine"], 100);
        assert_eq!(
            json["issuedBookStatus"]["returnStatus"],
            "Book return date has passed"
        );
    }
}
