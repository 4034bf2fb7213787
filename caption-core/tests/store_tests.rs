use caption_core::store::{CaptionStore, TimelineIssue};
use caption_core::Caption;

fn two_captions() -> CaptionStore {
    CaptionStore::new(vec![
        Caption::new(1, 0.0, 2.0, "first"),
        Caption::new(2, 2.0, 5.0, "second"),
    ])
}

fn ids(captions: Vec<&Caption>) -> Vec<u32> {
    captions.into_iter().map(|c| c.id).collect()
}

#[test]
fn shared_boundary_is_active_in_both() {
    let store = two_captions();
    assert_eq!(ids(store.active_at(2.0)), vec![1, 2]);
}

#[test]
fn just_before_boundary_is_first_only() {
    let store = two_captions();
    assert_eq!(ids(store.active_at(1.999)), vec![1]);
}

#[test]
fn past_the_end_is_none() {
    let store = two_captions();
    assert!(store.active_at(10.0).is_empty());
    assert!(store.first_active(10.0).is_none());
}

#[test]
fn overlapping_windows_are_all_returned() {
    let store = CaptionStore::new(vec![
        Caption::new(1, 0.0, 4.0, "a"),
        Caption::new(2, 1.0, 3.0, "b"),
        Caption::new(3, 2.0, 6.0, "c"),
    ]);
    assert_eq!(ids(store.active_at(2.5)), vec![1, 2, 3]);
    assert_eq!(store.first_active(2.5).map(|c| c.id), Some(1));
}

#[test]
fn update_text_touches_only_that_text() {
    let mut store = two_captions();
    let before = store.clone();
    assert!(store.update_text(2, "changed"));

    assert_eq!(store.get(1), before.get(1));
    let updated = store.get(2).unwrap();
    assert_eq!(updated.text, "changed");
    assert_eq!(updated.start_time, 2.0);
    assert_eq!(updated.end_time, 5.0);
    assert_eq!(store.revision(), before.revision());
}

#[test]
fn update_text_unknown_id_is_noop() {
    let mut store = two_captions();
    let before = store.clone();
    assert!(!store.update_text(99, "nope"));
    assert_eq!(store, before);
}

#[test]
fn replace_all_discards_previous_records() {
    let mut store = two_captions();
    store.replace_all(vec![Caption::new(1, 10.0, 11.0, "only")]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(2), None);
    assert_eq!(store.revision(), 1);
}

#[test]
fn upload_matches_decoded_sequence() {
    let mut store = two_captions();
    let doc = "1\n00:00:00,000 --> 00:00:01,000\nA\n\n2\n00:00:01,000 --> 00:00:02,000\nB\n\n3\n00:00:02,000 --> 00:00:03,000\nC";
    assert_eq!(store.load_srt(doc).unwrap(), 3);
    let ids: Vec<u32> = store.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(store.get(1).unwrap().text, "A");
}

#[test]
fn malformed_upload_leaves_store_untouched() {
    let mut store = two_captions();
    store.update_text(1, "edited");
    let before = store.clone();

    assert!(store.load_srt("1\n00:00:00,000 --> 00:00:01,000\nA\n\njust one line").is_err());
    assert_eq!(store, before);
}

#[test]
fn timeline_issues_reports_overlap_and_order() {
    let store = CaptionStore::new(vec![
        Caption::new(1, 0.0, 3.0, "a"),
        Caption::new(2, 2.0, 4.0, "b"),
        Caption::new(3, 1.0, 1.5, "c"),
        Caption::new(4, 4.0, 5.0, "d"),
    ]);
    assert_eq!(
        store.timeline_issues(),
        vec![
            TimelineIssue::Overlap { first: 1, second: 2 },
            TimelineIssue::OutOfOrder { previous: 2, next: 3 },
        ]
    );
}

#[test]
fn touching_windows_are_not_an_overlap() {
    assert!(two_captions().timeline_issues().is_empty());
}
