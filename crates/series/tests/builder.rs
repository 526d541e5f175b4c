use chrono::NaiveDate;
use kairos_calendar::DateRange;
use kairos_io::PurchaseRecord;
use kairos_series::{SeriesBuilder, SeriesError, build_daily_series, totals_by_year_month};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn records() -> Vec<PurchaseRecord> {
    vec![
        PurchaseRecord::new(ymd(2023, 12, 30), 100.0).with_department("IT"),
        PurchaseRecord::new(ymd(2023, 12, 30), 50.0).with_department("HR"),
        PurchaseRecord::new(ymd(2024, 1, 2), 25.0),
        PurchaseRecord::new(ymd(2024, 1, 4), 10.0),
    ]
}

#[test]
fn series_is_contiguous_across_year_boundary() {
    let s = build_daily_series(&records()).unwrap();
    assert_eq!(s.start(), ymd(2023, 12, 30));
    assert_eq!(s.end(), ymd(2024, 1, 4));
    assert_eq!(s.len(), 6);
    assert_eq!(s.values(), &[150.0, 150.0, 150.0, 25.0, 25.0, 10.0]);

    let dates = s.dates();
    for w in dates.windows(2) {
        assert_eq!(w[1].signed_duration_since(w[0]).num_days(), 1);
    }
}

#[test]
fn record_order_does_not_matter() {
    let mut shuffled = records();
    shuffled.reverse();
    assert_eq!(
        build_daily_series(&shuffled).unwrap(),
        build_daily_series(&records()).unwrap()
    );
}

#[test]
fn explicit_span_before_data_is_rejected() {
    let span = DateRange::new(ymd(2023, 12, 1), ymd(2024, 1, 4)).unwrap();
    let err = SeriesBuilder::new()
        .with_span(span)
        .build(&records())
        .unwrap_err();
    assert_eq!(
        err,
        SeriesError::InsufficientData {
            first: ymd(2023, 12, 1)
        }
    );
}

#[test]
fn filtered_subset_builds_too() {
    let recs = records();
    let subset: Vec<&PurchaseRecord> = recs
        .iter()
        .filter(|r| r.department() == Some("IT"))
        .collect();
    let s = build_daily_series(subset.iter().copied()).unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s.values(), &[100.0]);
}

#[test]
fn year_month_totals_match_series_inputs() {
    let ym = totals_by_year_month(&records());
    assert_eq!(ym[&(2023, 12)], 150.0);
    assert_eq!(ym[&(2024, 1)], 35.0);
}
