//! Run lifecycle ownership — activation, cancellation, teardown.
//!
//! [`FetchCoordinator`] ties the fetch pipeline to a consumer's lifetime: one
//! cancellable run starts on [`activate`](FetchCoordinator::activate), is
//! cancelled unconditionally on [`teardown`](FetchCoordinator::teardown), and
//! never invokes presenter callbacks after cancellation. At most one run is
//! live at a time; activating while a run is in flight cancels the old run
//! before the new one issues its first request.
//!
//! Cancellation is cooperative: the run polls its token before each
//! repository call, races the call itself against the token, and re-checks
//! after resuming. The orchestrator below it stays stateless — all mutable
//! lifecycle state lives here.

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

use crate::presenter::Presenter;
use crate::types::RunState;
use crate::usecase::BoxOfficeUseCase;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;

/// One live (or finished) run: its cancellation token, state, and task handle
struct RunHandle {
    token: CancellationToken,
    state: Arc<Mutex<RunState>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl RunHandle {
    /// Signal cancellation and mark the run cancelled if it was still running
    fn cancel(&self) {
        self.token.cancel();
        let mut state = lock_unpoisoned(&self.state);
        if *state == RunState::Running {
            *state = RunState::Cancelled;
        }
    }
}

/// How a run body terminated
#[derive(Clone, Copy, PartialEq, Eq)]
enum RunOutcome {
    Completed,
    Cancelled,
}

/// Owner of the single cancellable fetch run
///
/// The coordinator exclusively owns the run's cancellation token; it is the
/// only party that cancels it, and it does so only on the activation and
/// teardown paths — never from within the run body.
pub struct FetchCoordinator<P: Presenter> {
    usecase: Arc<BoxOfficeUseCase>,
    presenter: Arc<P>,
    fetch_detail: bool,
    run: Mutex<Option<RunHandle>>,
}

impl<P: Presenter> FetchCoordinator<P> {
    /// Create a coordinator that delivers into `presenter`
    pub fn new(usecase: BoxOfficeUseCase, presenter: Arc<P>) -> Self {
        Self {
            usecase: Arc::new(usecase),
            presenter,
            fetch_detail: true,
            run: Mutex::new(None),
        }
    }

    /// Disable or re-enable the detail phase (enabled by default)
    pub fn with_detail(mut self, fetch_detail: bool) -> Self {
        self.fetch_detail = fetch_detail;
        self
    }

    /// Start a fresh run
    ///
    /// If a run is already live it is cancelled first, before the new run is
    /// spawned — the old run cannot reach a presenter callback once its token
    /// has fired, and the new run's first request is only issued afterwards.
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(&self) {
        let mut run = lock_unpoisoned(&self.run);

        if let Some(previous) = run.take() {
            tracing::debug!("cancelling previous run before re-activation");
            previous.cancel();
        }

        let token = CancellationToken::new();
        let state = Arc::new(Mutex::new(RunState::Running));

        let handle = tokio::spawn(run_fetch(
            Arc::clone(&self.usecase),
            Arc::clone(&self.presenter),
            token.clone(),
            Arc::clone(&state),
            self.fetch_detail,
        ));

        *run = Some(RunHandle {
            token,
            state,
            handle: Some(handle),
        });
    }

    /// Cancel the live run, if any
    ///
    /// Safe to call at any point, including mid-fetch: the run observes the
    /// token at its next suspension point, discards partial data, and invokes
    /// no presenter callback afterwards. A no-op when idle or already
    /// terminal.
    pub fn teardown(&self) {
        let run = lock_unpoisoned(&self.run);
        if let Some(run) = run.as_ref() {
            tracing::debug!("tearing down fetch run");
            run.cancel();
        }
    }

    /// Current lifecycle state of the most recent run
    pub fn state(&self) -> RunState {
        let run = lock_unpoisoned(&self.run);
        match run.as_ref() {
            None => RunState::Idle,
            Some(run) => *lock_unpoisoned(&run.state),
        }
    }

    /// Wait for the current run's task to finish
    ///
    /// Useful for embedders (and tests) that need a quiescent point; returns
    /// immediately when no task is pending. Does not cancel anything.
    pub async fn join(&self) {
        let handle = {
            let mut run = lock_unpoisoned(&self.run);
            run.as_mut().and_then(|r| r.handle.take())
        };

        if let Some(handle) = handle
            && handle.await.is_err()
        {
            tracing::warn!("fetch run task panicked or was aborted");
        }
    }
}

impl<P: Presenter> Drop for FetchCoordinator<P> {
    fn drop(&mut self) {
        // A dropped owner must not leak in-flight work.
        let run = lock_unpoisoned(&self.run);
        if let Some(run) = run.as_ref() {
            run.cancel();
        }
    }
}

/// Lock a mutex, recovering the guard if a panicking test poisoned it
fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Run task entry point: drive the pipeline, then record the terminal state
async fn run_fetch<P: Presenter>(
    usecase: Arc<BoxOfficeUseCase>,
    presenter: Arc<P>,
    token: CancellationToken,
    state: Arc<Mutex<RunState>>,
    fetch_detail: bool,
) {
    let outcome = drive(&usecase, presenter.as_ref(), &token, fetch_detail).await;

    let mut state = lock_unpoisoned(&state);
    // teardown() may already have marked the run Cancelled; terminal states
    // are never overwritten.
    if *state == RunState::Running {
        *state = match outcome {
            RunOutcome::Completed => RunState::Completed,
            RunOutcome::Cancelled => RunState::Cancelled,
        };
    }
}

/// The sequential fetch pipeline of one run
///
/// Phases:
/// 1. Fetch the ranked list; deliver `render` or `report_error`
/// 2. On list success, fetch detail for the top-ranked movie; deliver
///    `render_detail` or `report_error`
///
/// A list failure short-circuits — the detail fetch is never attempted. A
/// detail failure is reported independently and never discards the already
/// delivered list. The token is checked before each repository call, raced
/// against the call itself, and re-checked after resuming; past any of those
/// checks a cancelled run returns without touching the presenter.
async fn drive<P: Presenter>(
    usecase: &BoxOfficeUseCase,
    presenter: &P,
    token: &CancellationToken,
    fetch_detail: bool,
) -> RunOutcome {
    if token.is_cancelled() {
        return RunOutcome::Cancelled;
    }

    let list = tokio::select! {
        result = usecase.fetch_list() => result,
        _ = token.cancelled() => {
            tracing::debug!("run cancelled during list fetch");
            return RunOutcome::Cancelled;
        }
    };
    // The fetch may have completed in the same poll the token fired in.
    if token.is_cancelled() {
        return RunOutcome::Cancelled;
    }

    let top_id = match list {
        Ok(movies) => {
            let top_id = movies.first().map(|movie| movie.id.clone());
            presenter.render(movies);
            top_id
        }
        Err(error) => {
            presenter.report_error(&error);
            // List failure short-circuits: the run is done, detail is never
            // attempted.
            return RunOutcome::Completed;
        }
    };

    if !fetch_detail {
        return RunOutcome::Completed;
    }

    // An empty list leaves nothing to request detail for.
    let Some(id) = top_id else {
        tracing::debug!("ranked list empty, skipping detail phase");
        return RunOutcome::Completed;
    };

    let detail = tokio::select! {
        result = usecase.fetch_detail(&id) => result,
        _ = token.cancelled() => {
            tracing::debug!(movie_id = %id, "run cancelled during detail fetch");
            return RunOutcome::Cancelled;
        }
    };
    if token.is_cancelled() {
        return RunOutcome::Cancelled;
    }

    match detail {
        Ok(detail) => presenter.render_detail(detail),
        Err(error) => presenter.report_error(&error),
    }

    RunOutcome::Completed
}
