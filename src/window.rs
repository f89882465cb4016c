use chrono::{DateTime, Datelike, Duration, Local, Utc, Weekday};
use rayon::prelude::*;

use crate::group::group_by;
use crate::model::{Issue, MonthBucket, WeekBucket};
use crate::stats::issue_stats;

// Week windows end Saturday 23:59:59.999 UTC. Which calendar day counts as
// "today" when finding that Saturday is a policy choice, so the timezone used
// for weekday detection is an explicit parameter ("utc", "local", or an IANA
// name) instead of whatever the host happens to be set to. Date arithmetic
// and the boundary instant itself are always UTC.

const MS_PER_WEEK: i64 = 7 * 24 * 60 * 60 * 1000;

fn weekday_in_tz(now: DateTime<Utc>, tz: &str) -> Weekday {
  if tz.eq_ignore_ascii_case("local") {
    return now.with_timezone(&Local).weekday();
  }

  if tz.eq_ignore_ascii_case("utc") {
    return now.weekday();
  }

  match tz.parse::<chrono_tz::Tz>() {
    Ok(zone) => now.with_timezone(&zone).weekday(),
    Err(_) => now.weekday(),
  }
}

/// The upcoming (or current, when today is Saturday) Saturday at
/// 23:59:59.999 UTC, anchored on the UTC calendar date of `now`.
pub fn end_of_week(now: DateTime<Utc>, tz: &str) -> DateTime<Utc> {
  let days_until_saturday = i64::from(Weekday::Sat.num_days_from_sunday())
    - i64::from(weekday_in_tz(now, tz).num_days_from_sunday());

  let date = now.date_naive() + Duration::days(days_until_saturday);

  date.and_hms_milli_opt(23, 59, 59, 999).unwrap().and_utc()
}

/// Whole weeks between `created` and the end-of-week boundary, floored.
///
/// Index 0 covers (end - 1 week, end]; records created after the boundary
/// land at negative indices, which is permitted.
pub fn week_index(created: DateTime<Utc>, end_of_week: DateTime<Utc>) -> i64 {
  (end_of_week - created).num_milliseconds().div_euclid(MS_PER_WEEK)
}

/// Partition issues into week buckets relative to `end_of_week`, attach a
/// stats summary to each, and return them sorted ascending by week index.
pub fn group_by_week(issues: &[Issue], end_of_week: DateTime<Utc>) -> Vec<WeekBucket> {
  let grouped: Vec<(i64, Vec<&Issue>)> = group_by(issues, |i| week_index(i.created, end_of_week))
    .into_iter()
    .collect();

  grouped
    .into_par_iter()
    .map(|(week, members)| {
      let issues: Vec<Issue> = members.into_iter().cloned().collect();
      let end_date = end_of_week - Duration::weeks(week);
      let start_date = end_date - Duration::weeks(1) + Duration::seconds(1);
      let stats = issue_stats(&issues);

      WeekBucket {
        week,
        start_date,
        end_date,
        issues,
        stats,
      }
    })
    .collect()
}

/// Partition issues by the UTC calendar month of `created`, keyed by the
/// first of the month, sorted ascending.
pub fn group_by_month(issues: &[Issue]) -> Vec<MonthBucket> {
  let grouped: Vec<((i32, u32), Vec<&Issue>)> = group_by(issues, |i| (i.created.year(), i.created.month()))
    .into_iter()
    .collect();

  grouped
    .into_par_iter()
    .map(|((year, month), members)| {
      let issues: Vec<Issue> = members.into_iter().cloned().collect();
      let stats = issue_stats(&issues);

      MonthBucket {
        month: format!("{year:04}-{month:02}-01"),
        issues,
        stats,
      }
    })
    .collect()
}
