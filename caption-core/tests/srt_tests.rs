use caption_core::srt::{decode, encode, SrtError};
use caption_core::Caption;

const TWO_BLOCKS: &str =
    "1\n00:00:00,000 --> 00:00:02,000\nHello\n\n2\n00:00:02,000 --> 00:00:05,500\nWorld";

#[test]
fn decodes_two_blocks() {
    let captions = decode(TWO_BLOCKS).unwrap();
    assert_eq!(
        captions,
        vec![
            Caption::new(1, 0.0, 2.0, "Hello"),
            Caption::new(2, 2.0, 5.5, "World"),
        ]
    );
}

#[test]
fn ignores_index_values() {
    let doc = "42\n00:00:01,000 --> 00:00:02,000\nA\n\n7\n00:00:03,000 --> 00:00:04,000\nB\n";
    let ids: Vec<u32> = decode(doc).unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn joins_text_lines_with_spaces() {
    let doc = "1\n00:00:00,000 --> 00:00:02,000\n  first line \nsecond line\n";
    assert_eq!(decode(doc).unwrap()[0].text, "first line second line");
}

#[test]
fn accepts_crlf_and_extra_blank_lines() {
    let doc = "\r\n1\r\n00:00:00,000 --> 00:00:01,000\r\nHi\r\n\r\n\r\n2\r\n00:00:01,000 --> 00:00:02,000\r\nThere\r\n\r\n";
    let captions = decode(doc).unwrap();
    assert_eq!(captions.len(), 2);
    assert_eq!(captions[1].text, "There");
}

#[test]
fn allows_empty_text() {
    let captions = decode("1\n00:00:00,000 --> 00:00:01,000\n").unwrap();
    assert_eq!(captions[0].text, "");
}

#[test]
fn rejects_single_line_block() {
    let doc = "1\n00:00:00,000 --> 00:00:01,000\nOk\n\n2\n";
    assert_eq!(decode(doc), Err(SrtError::MissingTiming { block: 2 }));
}

#[test]
fn rejects_empty_document() {
    assert_eq!(decode("  \n\n "), Err(SrtError::Empty));
}

#[test]
fn rejects_timing_without_arrow() {
    let err = decode("1\n00:00:00,000 00:00:01,000\nHi").unwrap_err();
    assert!(matches!(err, SrtError::MalformedTiming { block: 1, .. }));
}

#[test]
fn rejects_bad_time_code() {
    let err = decode("1\n00:00:0a,000 --> 00:00:01,000\nHi").unwrap_err();
    assert!(matches!(err, SrtError::Timecode { block: 1, .. }));
}

#[test]
fn rejects_inverted_range() {
    let err = decode("1\n00:00:05,000 --> 00:00:01,000\nHi").unwrap_err();
    assert!(matches!(err, SrtError::InvertedRange { block: 1, .. }));
}

#[test]
fn does_not_check_order_across_blocks() {
    let doc = "1\n00:00:10,000 --> 00:00:12,000\nLate\n\n2\n00:00:00,000 --> 00:00:01,000\nEarly";
    let captions = decode(doc).unwrap();
    assert_eq!(captions[0].start_time, 10.0);
    assert_eq!(captions[1].start_time, 0.0);
}

#[test]
fn encodes_blocks() {
    let out = encode(&[Caption::new(1, 0.0, 2.5, "Hello")]);
    assert_eq!(out, "1\n00:00:00,000 --> 00:00:02,500\nHello\n\n");
}

#[test]
fn encode_folds_line_breaks_in_text() {
    let out = encode(&[Caption::new(3, 1.0, 2.0, "one\n\ntwo")]);
    assert_eq!(out, "3\n00:00:01,000 --> 00:00:02,000\none two\n\n");
}

#[test]
fn exported_captions_decode_back() {
    let captions = vec![
        Caption::new(1, 0.0, 2.0, "[MUSIC]"),
        Caption::new(2, 2.0, 7.25, "Edited text"),
    ];
    assert_eq!(decode(&encode(&captions)).unwrap(), captions);

    let multi_line = vec![Caption::new(1, 0.0, 2.0, "line one\nline two")];
    let decoded = decode(&encode(&multi_line)).unwrap();
    assert_eq!(decoded, vec![Caption::new(1, 0.0, 2.0, "line one line two")]);
    assert_eq!(encode(&decoded), encode(&multi_line));
}
