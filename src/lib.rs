//! # boxoffice-client
//!
//! Embeddable client library for ranked box-office data retrieval.
//!
//! The crate fetches the daily box-office ranking from a remote REST service,
//! then fetches supplementary detail for the top-ranked movie, and delivers
//! both outcomes — or a normalized failure — to a presentation boundary you
//! implement. Transport-level failures (connectivity, timeouts, decoding)
//! never cross that boundary: they are mapped into a closed three-variant
//! [`DomainError`] taxonomy.
//!
//! ## Design Philosophy
//!
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Cancellable by construction** - Each fetch run is one cooperative
//!   unit of work: started on activation, cancelled on teardown, never
//!   calling back after cancellation
//! - **Stable error surface** - Presentation code matches on three domain
//!   variants, not on transport internals
//! - **Strictly sequential** - The detail fetch only starts after the list
//!   fetch succeeds; there is no fan-out
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use boxoffice_client::{
//!     BoxOfficeMovie, BoxOfficeUseCase, Config, DomainError, FetchCoordinator,
//!     HttpMovieRepository, MovieDetail, Presenter,
//! };
//!
//! struct LogPresenter;
//!
//! impl Presenter for LogPresenter {
//!     fn render(&self, movies: Vec<BoxOfficeMovie>) {
//!         for movie in movies {
//!             println!("{:>2}. {}", movie.rank, movie.title);
//!         }
//!     }
//!
//!     fn render_detail(&self, detail: MovieDetail) {
//!         println!("top movie detail: {:?}", detail);
//!     }
//!
//!     fn report_error(&self, error: &DomainError) {
//!         eprintln!("fetch failed: {}", error);
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.api.api_key = "your-api-key".to_string();
//!
//!     let repository = Arc::new(HttpMovieRepository::new(&config)?);
//!     let usecase = BoxOfficeUseCase::new(repository);
//!     let coordinator = FetchCoordinator::new(usecase, Arc::new(LogPresenter));
//!
//!     coordinator.activate();
//!     coordinator.join().await;
//!     // ...later, e.g. when the hosting view goes away:
//!     coordinator.teardown();
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Run lifecycle ownership (activation, cancellation, teardown)
pub mod coordinator;
/// Error types
pub mod error;
/// Outbound presentation boundary
pub mod presenter;
/// Repository boundary: wire payloads and the fetch contract
pub mod repository;
/// Core domain types
pub mod types;
/// Fetch orchestration use case
pub mod usecase;

// Re-export commonly used types
pub use config::{ApiConfig, Config};
pub use coordinator::FetchCoordinator;
pub use error::{ConfigError, DomainError, EntityError, Result, TransportError};
pub use presenter::Presenter;
pub use repository::{HttpMovieRepository, MovieRepository};
pub use types::{BoxOfficeMovie, MovieDetail, MovieId, RankChange, RunState};
pub use usecase::BoxOfficeUseCase;
