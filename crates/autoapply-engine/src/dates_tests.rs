use super::*;

#[test]
fn test_year_month_passes_through() {
    assert_eq!(normalize_date("2021-03"), "2021-03");
    assert_eq!(normalize_date("1999-12"), "1999-12");
}

#[test]
fn test_full_date_is_idempotent() {
    let once = normalize_date("2021-03-05");
    assert_eq!(once, "2021-03-05");
    assert_eq!(normalize_date(&once), once);
}

#[test]
fn test_slash_dates_reformat() {
    assert_eq!(normalize_date("03/05/2021"), "2021-03-05");
    assert_eq!(normalize_date("2021/03/05"), "2021-03-05");
}

#[test]
fn test_verbose_dates_reformat() {
    assert_eq!(normalize_date("5 March 2021"), "2021-03-05");
    assert_eq!(normalize_date("March 5, 2021"), "2021-03-05");
    assert_eq!(normalize_date("Mar 5, 2021"), "2021-03-05");
}

#[test]
fn test_month_year_maps_to_first() {
    assert_eq!(normalize_date("June 2021"), "2021-06-01");
    assert_eq!(normalize_date("Jun 2021"), "2021-06-01");
}

#[test]
fn test_datetime_takes_date_part() {
    assert_eq!(normalize_date("2021-03-05T09:30:00"), "2021-03-05");
}

#[test]
fn test_unparsable_passes_through() {
    assert_eq!(normalize_date("sometime last year"), "sometime last year");
    assert_eq!(normalize_date("2021-13-90"), "2021-13-90");
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize_date(""), "");
    assert_eq!(normalize_date("   "), "");
}

#[test]
fn test_zero_padding() {
    assert_eq!(normalize_date("3/5/2021"), "2021-03-05");
}
