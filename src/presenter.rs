//! Outbound presentation boundary.

use crate::error::DomainError;
use crate::types::{BoxOfficeMovie, MovieDetail};

/// The rendering/error-reporting callbacks a fetch run delivers into
///
/// Implemented by the embedding application (a UI layer, a logger, a test
/// recorder). The coordinator guarantees:
/// - [`render`](Presenter::render) is invoked at most once per run, with the
///   full ranked list;
/// - [`render_detail`](Presenter::render_detail) is invoked at most once per
///   run, after `render`, carrying the independent detail outcome;
/// - [`report_error`](Presenter::report_error) is invoked at most once per
///   failed phase, independently per phase;
/// - nothing is invoked after the run has been cancelled.
///
/// User-facing message text is derived from the [`DomainError`]'s `Display`
/// impl on this side of the boundary; the core hands over the variant only.
///
/// Implementations should return quickly: these methods are called from the
/// run's async task.
pub trait Presenter: Send + Sync + 'static {
    /// Deliver a successfully fetched ranked list
    fn render(&self, movies: Vec<BoxOfficeMovie>);

    /// Deliver the supplementary detail for the top-ranked movie
    fn render_detail(&self, detail: MovieDetail);

    /// Report a normalized failure for one phase
    fn report_error(&self, error: &DomainError);
}
