//! Caption generation as a cancellable task with progress reporting.
//!
//! [`PlaceholderGenerator`] stands in for a real speech-to-text backend: it
//! waits out its delay and hands back the captions it was given. A real
//! backend implements [`CaptionGenerator`] and plugs into the same UI.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::caption::Caption;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Caption generation was cancelled")]
    Cancelled,
    #[error("Caption generation failed: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationProgress {
    pub completed: u32,
    pub total: u32,
}

impl GenerationProgress {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        (self.completed.min(self.total) as f32) / (self.total as f32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// URL of the audio/video source to caption.
    pub source: String,
    /// Captions currently in the store.
    pub current: Vec<Caption>,
}

/// Handle shared between the caller and a running generator.
pub struct GenerationTask {
    token: CancellationToken,
    on_progress: Box<dyn Fn(GenerationProgress)>,
}

impl GenerationTask {
    pub fn new(on_progress: impl Fn(GenerationProgress) + 'static) -> Self {
        Self {
            token: CancellationToken::new(),
            on_progress: Box::new(on_progress),
        }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Progress after cancellation is dropped.
    pub fn report(&self, progress: GenerationProgress) {
        if !self.is_cancelled() {
            (self.on_progress)(progress);
        }
    }

    pub fn checkpoint(&self) -> Result<(), GenerateError> {
        if self.is_cancelled() {
            Err(GenerateError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait CaptionGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
        task: &GenerationTask,
    ) -> Result<Vec<Caption>, GenerateError>;
}

pub trait Timer {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

pub struct PlaceholderGenerator<T> {
    timer: T,
    delay_ms: u32,
    steps: u32,
}

impl<T: Timer> PlaceholderGenerator<T> {
    pub fn new(timer: T, delay_ms: u32, steps: u32) -> Self {
        Self {
            timer,
            delay_ms,
            steps: steps.max(1),
        }
    }
}

impl<T: Timer> CaptionGenerator for PlaceholderGenerator<T> {
    async fn generate(
        &self,
        request: GenerationRequest,
        task: &GenerationTask,
    ) -> Result<Vec<Caption>, GenerateError> {
        log::info!(
            "Placeholder generation for {} ({} captions)",
            request.source,
            request.current.len()
        );
        let step_ms = self.delay_ms / self.steps;
        for completed in 1..=self.steps {
            task.checkpoint()?;
            self.timer.sleep(step_ms).await;
            task.report(GenerationProgress {
                completed,
                total: self.steps,
            });
        }
        task.checkpoint()?;
        Ok(request.current)
    }
}
