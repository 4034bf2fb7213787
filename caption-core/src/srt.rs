//! SubRip decoding and encoding.
//!
//! Blocks are separated by blank lines. Each block is an index line (ignored,
//! ids are reassigned by position), a `start --> end` timing line and any
//! number of text lines, which are joined with single spaces.

use thiserror::Error;

use crate::caption::{Caption, CaptionId};
use crate::timecode::{format_timecode, parse_timecode, TimecodeError};

const ARROW: &str = "-->";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SrtError {
    #[error("Caption file is empty")]
    Empty,
    #[error("Block {block}: missing timing line")]
    MissingTiming { block: usize },
    #[error("Block {block}: malformed timing line {line:?}")]
    MalformedTiming { block: usize, line: String },
    #[error("Block {block}: {source}")]
    Timecode {
        block: usize,
        #[source]
        source: TimecodeError,
    },
    #[error("Block {block}: caption ends at {end}s before it starts at {start}s")]
    InvertedRange { block: usize, start: f64, end: f64 },
}

/// Decode a whole SRT document. Any malformed block fails the whole document.
pub fn decode(content: &str) -> Result<Vec<Caption>, SrtError> {
    let normalized = content.replace("\r\n", "\n");
    let blocks = split_blocks(normalized.trim());
    if blocks.is_empty() {
        return Err(SrtError::Empty);
    }

    blocks
        .iter()
        .enumerate()
        .map(|(position, lines)| decode_block(position + 1, lines))
        .collect()
}

fn split_blocks(document: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in document.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn decode_block(block: usize, lines: &[&str]) -> Result<Caption, SrtError> {
    let timing = lines.get(1).ok_or(SrtError::MissingTiming { block })?;
    let (start_time, end_time) = parse_timing(block, timing)?;
    if end_time < start_time {
        return Err(SrtError::InvertedRange {
            block,
            start: start_time,
            end: end_time,
        });
    }
    let text = lines[2..].join(" ").trim().to_string();

    Ok(Caption {
        id: block as CaptionId,
        start_time,
        end_time,
        text,
    })
}

fn parse_timing(block: usize, line: &str) -> Result<(f64, f64), SrtError> {
    let malformed = || SrtError::MalformedTiming {
        block,
        line: line.to_string(),
    };
    let (start, end) = line.split_once(ARROW).ok_or_else(malformed)?;
    if end.contains(ARROW) {
        return Err(malformed());
    }
    let parse = |raw: &str| parse_timecode(raw).map_err(|source| SrtError::Timecode { block, source });
    Ok((parse(start)?, parse(end)?))
}

/// Encode captions as SRT using each record's id as the block index.
///
/// Text is written on one line with line breaks folded to spaces, which is
/// what [`decode`] would make of it anyway and keeps blank lines from
/// splitting a block.
pub fn encode(captions: &[Caption]) -> String {
    let mut out = String::new();
    for caption in captions {
        let text: Vec<&str> = caption.text.split_whitespace().collect();
        out.push_str(&format!(
            "{}\n{} {ARROW} {}\n{}\n\n",
            caption.id,
            format_timecode(caption.start_time),
            format_timecode(caption.end_time),
            text.join(" ")
        ));
    }
    out
}
