//! Fetch lifecycle for the actor listing
//!
//! [`ActorsFetch`] owns one listing request at a time. A call to
//! [`ActorsFetch::refetch`] aborts whatever is still in flight and starts a
//! new cycle tagged with a fresh generation; outcomes carrying an older
//! generation are dropped on arrival. Failures never clear the records
//! from the last successful cycle.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::{ActorSource, ApiError};
use crate::models::Actor;

/// Where the current fetch cycle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug)]
struct FetchOutcome {
    generation: u64,
    result: Result<Vec<Actor>, ApiError>,
}

pub struct ActorsFetch {
    source: Arc<dyn ActorSource>,
    records: Vec<Actor>,
    phase: FetchPhase,
    error_message: Option<String>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    last_updated: Option<DateTime<Local>>,
    tx: UnboundedSender<FetchOutcome>,
    rx: UnboundedReceiver<FetchOutcome>,
}

impl ActorsFetch {
    /// Create an idle fetcher. Nothing is requested until [`refetch`](Self::refetch).
    pub fn new(source: Arc<dyn ActorSource>) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            source,
            records: Vec::new(),
            phase: FetchPhase::Idle,
            error_message: None,
            generation: 0,
            in_flight: None,
            last_updated: None,
            tx,
            rx,
        }
    }

    /// Create a fetcher and immediately start the first cycle.
    /// Must be called from within a tokio runtime.
    pub fn mount(source: Arc<dyn ActorSource>) -> Self {
        let mut fetch = Self::new(source);
        fetch.refetch();
        fetch
    }

    pub fn records(&self) -> &[Actor] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Time of the last successful cycle
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    /// Start a new fetch cycle, superseding any request still in flight
    pub fn refetch(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!("Aborting superseded fetch (generation {})", self.generation);
            }
            handle.abort();
        }

        self.generation += 1;
        self.phase = FetchPhase::Loading;
        self.error_message = None;

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        info!("Fetching actors (generation {})", generation);
        self.in_flight = Some(tokio::spawn(async move {
            let result = source.list_actors().await;
            // Receiver lives as long as the fetcher; a closed channel just means we were dropped
            let _ = tx.send(FetchOutcome { generation, result });
        }));
    }

    /// Apply any outcomes that have arrived. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.rx.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Wait until the current cycle resolves
    pub async fn settle(&mut self) {
        while self.is_loading() {
            match self.rx.recv().await {
                Some(outcome) => {
                    self.apply(outcome);
                }
                None => break,
            }
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation {
            debug!(
                "Discarding outcome of generation {} (current is {})",
                outcome.generation, self.generation
            );
            return false;
        }

        self.in_flight = None;
        match outcome.result {
            Ok(records) => {
                info!("Loaded {} actors", records.len());
                self.records = records;
                self.error_message = None;
                self.phase = FetchPhase::Success;
                self.last_updated = Some(Local::now());
            }
            Err(e) => {
                match e.status_code() {
                    Some(status) => warn!("Fetching actors failed with HTTP {}: {}", status, e),
                    None => warn!("Fetching actors failed: {:?}", e),
                }
                self.error_message = Some(e.to_string());
                self.phase = FetchPhase::Failed;
            }
        }
        true
    }
}

impl Drop for ActorsFetch {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use crate::api::{ActorSource, ApiError};
    use crate::models::Actor;

    pub enum Step {
        Ready(Result<Vec<Actor>, ApiError>),
        Gated(oneshot::Receiver<Result<Vec<Actor>, ApiError>>),
    }

    /// Answers each call with the next scripted step
    #[derive(Default)]
    pub struct ScriptedSource {
        steps: Mutex<VecDeque<Step>>,
        calls: Mutex<usize>,
    }

    impl ScriptedSource {
        pub fn new(steps: Vec<Step>) -> Self {
            Self {
                steps: Mutex::new(steps.into()),
                calls: Mutex::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl ActorSource for ScriptedSource {
        async fn list_actors(&self) -> Result<Vec<Actor>, ApiError> {
            *self.calls.lock().unwrap() += 1;
            let step = self.steps.lock().unwrap().pop_front();
            match step {
                Some(Step::Ready(result)) => result,
                Some(Step::Gated(rx)) => rx.await.unwrap_or_else(|_| {
                    Err(ApiError::InvalidUrl("gate dropped".into()))
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    pub fn server_error() -> ApiError {
        ApiError::Status { status_code: 500, url: "http://test/actors".into() }
    }
}
