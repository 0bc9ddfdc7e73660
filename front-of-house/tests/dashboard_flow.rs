//! End-to-end dashboard flow over the fixture datasets
//!
//! Loads `fixtures/diners.json` and `fixtures/dishes.json` through the same
//! path the binary takes, then checks each derived view.

use chrono::NaiveDate;
use front_of_house::insights::{NO_INSIGHTS, insight_tags, summarize};
use front_of_house::kitchen::STANDARD_VARIATION;
use front_of_house::reservations::{
    MonthCursor, available_dates, calendar_months, default_date, reservations_on, summarize_day,
};
use front_of_house::{
    Config, Dataset, ErrorCode, KitchenBoard, PartyFilter, build_manifest, rank_reservations,
    rank_reservations_on,
};
use shared::models::InsightKind;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn load() -> Dataset {
    let config = Config::default().with_paths(
        Some(fixture("diners.json")),
        Some(fixture("dishes.json")),
    );
    Dataset::load(&config).expect("fixtures should load")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_fixture_loads() {
    let dataset = load();
    assert_eq!(dataset.diners.len(), 3);
    assert_eq!(dataset.parties.len(), 3);
}

#[test]
fn test_missing_diner_file_is_not_found() {
    let config = Config::default().with_paths(
        Some(fixture("does-not-exist.json")),
        Some(fixture("dishes.json")),
    );
    let err = Dataset::load(&config).unwrap_err();
    assert_eq!(err.code, ErrorCode::DatasetNotFound);
}

#[test]
fn test_missing_manifest_is_derived_from_diners() {
    let config = Config::default().with_paths(
        Some(fixture("diners.json")),
        Some(fixture("does-not-exist.json")),
    );
    let dataset = Dataset::load(&config).unwrap();
    // One party per reservation
    assert_eq!(dataset.parties.len(), 4);
    let ids: Vec<i64> = dataset.parties.iter().map(|p| p.party_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_dates_and_day_view() {
    let dataset = load();
    let dates = available_dates(&dataset.diners);
    assert_eq!(dates, vec![date(2024, 5, 20), date(2024, 5, 21), date(2024, 6, 2)]);
    assert_eq!(default_date(&dataset.diners), Some(date(2024, 5, 20)));

    let day = reservations_on(&dataset.diners, date(2024, 5, 20));
    let names: Vec<&str> = day.iter().map(|r| r.guest_name).collect();
    assert_eq!(names, vec!["Alice Moreau", "Bastien Leroy"]);

    let summary = summarize_day(date(2024, 5, 20), &day);
    assert_eq!(summary.parties, 2);
    assert_eq!(summary.total_guests, 6);

    assert!(reservations_on(&dataset.diners, date(2024, 7, 1)).is_empty());
}

#[test]
fn test_worked_priority_example() {
    let dataset = load();
    let ranked = rank_reservations_on(&dataset.diners, date(2024, 5, 20));
    let view: Vec<(&str, f64)> = ranked.iter().map(|r| (r.guest_name, r.score)).collect();
    assert_eq!(view, vec![("Bastien Leroy", 120.0), ("Alice Moreau", 110.0)]);

    let top = &ranked[0].breakdown;
    assert_eq!(top.spend, 20.0);
    assert_eq!(top.accommodations, 100.0);
    assert_eq!(top.dietary, 0.0);
}

#[test]
fn test_priority_across_all_dates() {
    let dataset = load();
    let ranked = rank_reservations(&dataset.diners);
    let scores: Vec<f64> = ranked.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![120.0, 110.0, 96.0, 0.0]);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_calendar_pages_cover_reservation_months() {
    let dataset = load();
    let dates = available_dates(&dataset.diners);
    let pages = calendar_months(&dates, Some(date(2024, 6, 2)));
    assert_eq!(pages.len(), 2);
    assert_eq!((pages[0].year, pages[0].month), (2024, 5));
    // 2024-05-01 is a Wednesday
    assert_eq!(pages[0].leading_blanks, 3);
    assert_eq!(pages[0].days.len(), 31);
    assert!(pages[0].days[19].has_reservations);
    assert!(!pages[0].days[18].has_reservations);

    let mut cursor = MonthCursor::new(&pages, Some(date(2024, 6, 2)));
    assert_eq!(cursor.index(), 1);
    assert!(!cursor.has_next());
    assert_eq!(cursor.previous_month(), 0);
    assert_eq!(cursor.previous_month(), 0);
}

#[test]
fn test_insight_card_for_fixture_guest() {
    let dataset = load();
    let bastien = &dataset.diners[1];
    let insights = bastien.reservations[0].insights().unwrap();
    assert_eq!(
        summarize(insights),
        "Returning customer. Special needs: wheelchair access, quiet table"
    );

    let tags = insight_tags(insights);
    assert_eq!(tags.len(), 3);
    assert_eq!(tags[1].kind, InsightKind::SpecialAccommodations);
    assert_eq!(
        tags[1].justification.as_deref(),
        Some("Mentioned mobility needs in a previous email.")
    );
    assert_eq!(tags[2].justification, None);

    let alice = &dataset.diners[0];
    assert!(alice.reservations[0].insights().is_none());
    assert_eq!(summarize(&Default::default()), NO_INSIGHTS);
}

#[test]
fn test_table_view_orders_by_table() {
    let dataset = load();
    let board = KitchenBoard::new(dataset.parties);
    let tables = board.tables(&PartyFilter::all());
    let ids: Vec<i64> = tables.iter().map(|t| t.party.party_id).collect();
    // Parties 2 and 3 share table 4 and keep manifest order
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(tables[2].total, 70.5);
}

#[test]
fn test_table_filter_by_id_name_and_dish() {
    let dataset = load();
    let board = KitchenBoard::new(dataset.parties);

    let by_id: Vec<i64> = board
        .tables(&PartyFilter::new("3"))
        .iter()
        .map(|t| t.party.party_id)
        .collect();
    assert_eq!(by_id, vec![3]);

    let by_name: Vec<i64> = board
        .tables(&PartyFilter::new("emily"))
        .iter()
        .map(|t| t.party.party_id)
        .collect();
    assert_eq!(by_name, vec![1]);

    // Filter matches raw dish names, so "Boeuf" on party 1 is not a hit
    let by_dish: Vec<i64> = board
        .tables(&PartyFilter::new("BEEF"))
        .iter()
        .map(|t| t.party.party_id)
        .collect();
    assert_eq!(by_dish, vec![2]);
}

#[test]
fn test_dish_view_groups_and_sorts() {
    let dataset = load();
    let board = KitchenBoard::new(dataset.parties);
    let dishes = board.dishes();

    let names: Vec<&str> = dishes.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Beef Bourguignon", "Crème brûlée", "Éclair", "Tartare"]);

    let beef = &dishes[0];
    assert_eq!(beef.quantity, 3);
    let keys: Vec<&str> = beef.variations.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(keys, vec![STANDARD_VARIATION, "gluten-free, no dairy"]);

    let standard = beef.variation(STANDARD_VARIATION).unwrap();
    assert_eq!(standard.quantity, 2);
    let tables: Vec<u32> = standard.occurrences.iter().map(|o| o.table_number).collect();
    assert_eq!(tables, vec![11, 4]);
}

#[test]
fn test_soft_delete_hides_party_from_both_views() {
    let dataset = load();
    let mut board = KitchenBoard::new(dataset.parties);
    board.delete_party(2).unwrap();
    // Deleting again is a no-op
    board.delete_party(2).unwrap();

    assert!(board.tables(&PartyFilter::all()).iter().all(|t| t.party.party_id != 2));
    assert!(board.tables(&PartyFilter::new("2")).is_empty());

    let dishes = board.dishes();
    let beef = dishes.iter().find(|d| d.name == "Beef Bourguignon").unwrap();
    assert_eq!(beef.quantity, 1);
    assert!(beef.variation("gluten-free, no dairy").is_none());
    assert!(
        dishes
            .iter()
            .flat_map(|d| &d.variations)
            .flat_map(|v| &v.occurrences)
            .all(|o| o.party_id != 2)
    );

    let err = board.delete_party(99).unwrap_err();
    assert_eq!(err.code, ErrorCode::PartyNotFound);
    assert_eq!(board.deleted().len(), 1);
}

#[test]
fn test_views_are_repeatable() {
    let dataset = load();
    let board = KitchenBoard::new(dataset.parties.clone());
    let first = serde_json::to_string(&board.dishes()).unwrap();
    let second = serde_json::to_string(&board.dishes()).unwrap();
    assert_eq!(first, second);

    let a = serde_json::to_string(&rank_reservations(&dataset.diners)).unwrap();
    let b = serde_json::to_string(&rank_reservations(&dataset.diners)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_manifest_from_fixture() {
    let dataset = load();
    let generated_at = "2024-05-19T08:00:00Z".parse().unwrap();
    let manifest = build_manifest(&dataset.diners, generated_at, "diners.json");
    assert_eq!(manifest.parties.len(), 4);

    let first = &manifest.parties[0];
    assert_eq!(first.customer_name, "Alice Moreau");
    assert_eq!(first.table_number, 3);
    assert_eq!(first.dishes[0].dietary_exceptions, vec!["gluten-free"]);

    let metadata = manifest.metadata.unwrap();
    assert_eq!(metadata.total_parties, 4);
    assert_eq!(metadata.total_revenue, 98.0);
    assert_eq!(metadata.source_file, "diners.json");
}
