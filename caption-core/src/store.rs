//! Ordered caption state shared by the player overlay and the editor.

use crate::caption::{Caption, CaptionId};
use crate::srt::{self, SrtError};

/// Something odd about the timeline. Reported, never rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineIssue {
    /// `next` starts before `previous` in store order.
    OutOfOrder { previous: CaptionId, next: CaptionId },
    /// Both windows cover more than a shared boundary instant.
    Overlap { first: CaptionId, second: CaptionId },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionStore {
    captions: Vec<Caption>,
    revision: u64,
}

impl CaptionStore {
    pub fn new(captions: Vec<Caption>) -> Self {
        Self {
            captions,
            revision: 0,
        }
    }

    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Caption> {
        self.captions.iter()
    }

    pub fn len(&self) -> usize {
        self.captions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// Bumped on every whole-list replacement, untouched by text edits.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: CaptionId) -> Option<&Caption> {
        self.captions.iter().find(|c| c.id == id)
    }

    pub fn replace_all(&mut self, captions: Vec<Caption>) {
        log::info!(
            "Replacing {} captions with {} (revision {})",
            self.captions.len(),
            captions.len(),
            self.revision + 1
        );
        self.captions = captions;
        self.revision += 1;
    }

    /// Returns false when no caption has `id`.
    pub fn update_text(&mut self, id: CaptionId, text: impl Into<String>) -> bool {
        match self.captions.iter_mut().find(|c| c.id == id) {
            Some(caption) => {
                caption.text = text.into();
                true
            }
            None => {
                log::debug!("Ignoring text update for unknown caption {id}");
                false
            }
        }
    }

    /// All captions whose window contains `time`, in store order.
    pub fn active_at(&self, time: f64) -> Vec<&Caption> {
        self.captions.iter().filter(|c| c.is_active_at(time)).collect()
    }

    pub fn first_active(&self, time: f64) -> Option<&Caption> {
        self.captions.iter().find(|c| c.is_active_at(time))
    }

    /// Decode `content` and swap it in. On error the store is left untouched.
    pub fn load_srt(&mut self, content: &str) -> Result<usize, SrtError> {
        let captions = srt::decode(content)?;
        let count = captions.len();
        self.replace_all(captions);
        for issue in self.timeline_issues() {
            log::warn!("Uploaded captions: {issue:?}");
        }
        Ok(count)
    }

    /// Compares each caption with its predecessor in store order.
    pub fn timeline_issues(&self) -> Vec<TimelineIssue> {
        self.captions
            .windows(2)
            .filter_map(|pair| {
                let (prev, next) = (&pair[0], &pair[1]);
                if next.start_time < prev.start_time {
                    Some(TimelineIssue::OutOfOrder {
                        previous: prev.id,
                        next: next.id,
                    })
                } else if next.start_time < prev.end_time {
                    Some(TimelineIssue::Overlap {
                        first: prev.id,
                        second: next.id,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}
