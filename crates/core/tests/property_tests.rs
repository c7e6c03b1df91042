use donation_tally_core::{DateBucket, Tally, TallyOptions, split_columns};
use proptest::prelude::*;

fn record_line(year: u16, month: u8, name: &str) -> String {
    format!("C00|N|M2|P|{year:04}{month:02}15|15|IND|{name}|CITY|ST|99999")
}

proptest! {
    #[test]
    fn bucket_counts_sum_to_line_count(
        rows in prop::collection::vec((1990u16..2030, 1u8..=12, "[A-Z]{1,6}(, [A-Z]{1,6}( [A-Z])?)?"), 0..200)
    ) {
        let options = TallyOptions::default();
        let mut tally = Tally::new(&options);
        for (year, month, name) in &rows {
            tally.observe(&record_line(*year, *month, name)).unwrap();
        }
        let summary = tally.finish();

        prop_assert_eq!(summary.total_lines, rows.len() as u64);
        prop_assert_eq!(summary.donations.values().sum::<u64>(), summary.total_lines);
        for (year, month, _) in &rows {
            prop_assert!(summary.donations.contains_key(&DateBucket::new(*year, *month)));
        }
    }

    #[test]
    fn most_common_count_never_exceeds_line_count(
        names in prop::collection::vec("[a-c]{1,2}, [a-c]{1,2}", 1..100)
    ) {
        let options = TallyOptions::default();
        let mut tally = Tally::new(&options);
        for name in &names {
            tally.observe(&record_line(2020, 1, name)).unwrap();
        }
        let summary = tally.finish();
        let winner = summary.most_common_first_name.expect("every line has a first name");
        prop_assert!(winner.count <= summary.total_lines);
        prop_assert!(winner.count >= 1);
    }

    #[test]
    fn split_never_exceeds_nine_columns(line in "[a-z |\\t]{0,80}") {
        let columns = split_columns(&line);
        prop_assert!(columns.len() >= 1);
        prop_assert!(columns.len() <= 9);
        let pipes = line.bytes().filter(|&b| b == b'|').count();
        prop_assert_eq!(columns.len(), (pipes + 1).min(9));
    }
}

#[test]
fn summary_serializes_buckets_as_ordered_entries() {
    let options = TallyOptions::default();
    let mut tally = Tally::new(&options);
    tally.observe(&record_line(2021, 3, "Doe, Jane")).unwrap();
    tally.observe(&record_line(2020, 11, "Roe, Jane")).unwrap();
    let summary = tally.finish();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_lines"], 2);
    assert_eq!(json["donations"][0]["year"], 2020);
    assert_eq!(json["donations"][0]["month"], 11);
    assert_eq!(json["donations"][1]["year"], 2021);
    assert_eq!(json["most_common_first_name"]["name"], "Jane");
    assert_eq!(json["captured_names"]["0"], "Doe, Jane");

    let back: donation_tally_core::Summary = serde_json::from_value(json).unwrap();
    assert_eq!(back, summary);
}
