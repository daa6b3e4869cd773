//! Shared test helpers: a scriptable repository and a recording presenter.

use crate::error::{DomainError, TransportError};
use crate::presenter::Presenter;
use crate::repository::{
    BoxOfficePayload, BoxOfficeResult, MovieInfo, MovieInfoPayload, MovieInfoResult,
    MovieRepository, NamedGenre, NamedNation, NamedPerson, RankedListItem,
};
use crate::types::{BoxOfficeMovie, MovieDetail, MovieId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::time::Duration;

/// Build a ranked-list payload with one record per title, ranked in order
pub(crate) fn sample_payload(titles: &[&str]) -> BoxOfficePayload {
    let daily_box_office_list = titles
        .iter()
        .enumerate()
        .map(|(i, title)| RankedListItem {
            movie_cd: format!("2023605{}", i + 1),
            movie_nm: (*title).to_string(),
            rank: (i + 1).to_string(),
            rank_inten: "0".to_string(),
            rank_old_and_new: "OLD".to_string(),
            audi_cnt: (1000 * (titles.len() - i)).to_string(),
            audi_acc: (50_000 * (titles.len() - i)).to_string(),
        })
        .collect();

    BoxOfficePayload {
        box_office_result: BoxOfficeResult {
            boxoffice_type: "일별 박스오피스".to_string(),
            show_range: "20260829~20260829".to_string(),
            daily_box_office_list,
        },
    }
}

/// Build a detail payload for the given movie code
pub(crate) fn sample_detail(movie_cd: &str) -> MovieInfoPayload {
    MovieInfoPayload {
        movie_info_result: MovieInfoResult {
            movie_info: MovieInfo {
                movie_cd: movie_cd.to_string(),
                movie_nm: "서울의 봄".to_string(),
                show_tm: "141".to_string(),
                open_dt: "20260812".to_string(),
                genres: vec![NamedGenre {
                    genre_nm: "드라마".to_string(),
                }],
                directors: vec![NamedPerson {
                    people_nm: "김성수".to_string(),
                }],
                nations: vec![NamedNation {
                    nation_nm: "한국".to_string(),
                }],
            },
        },
    }
}

/// One scripted repository response, with an optional delay before delivery
struct ScriptedCall<T> {
    delay: Option<Duration>,
    result: Result<T, TransportError>,
}

/// Repository double with scripted outcomes, call counters, and per-call delays
///
/// Each `script_*` call queues one response; calls beyond the script fail
/// with a transport error so an unexpected extra fetch shows up as a test
/// failure rather than a hang.
pub(crate) struct MockRepository {
    list: Mutex<VecDeque<ScriptedCall<BoxOfficePayload>>>,
    detail: Mutex<VecDeque<ScriptedCall<MovieInfoPayload>>>,
    pub(crate) list_calls: AtomicUsize,
    pub(crate) detail_calls: AtomicUsize,
    last_detail_id: Mutex<Option<MovieId>>,
}

impl MockRepository {
    pub(crate) fn new() -> Self {
        Self {
            list: Mutex::new(VecDeque::new()),
            detail: Mutex::new(VecDeque::new()),
            list_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            last_detail_id: Mutex::new(None),
        }
    }

    pub(crate) fn script_list(&self, result: Result<BoxOfficePayload, TransportError>) {
        self.list.lock().unwrap().push_back(ScriptedCall {
            delay: None,
            result,
        });
    }

    pub(crate) fn script_list_delayed(
        &self,
        delay: Duration,
        result: Result<BoxOfficePayload, TransportError>,
    ) {
        self.list.lock().unwrap().push_back(ScriptedCall {
            delay: Some(delay),
            result,
        });
    }

    pub(crate) fn script_detail(&self, result: Result<MovieInfoPayload, TransportError>) {
        self.detail.lock().unwrap().push_back(ScriptedCall {
            delay: None,
            result,
        });
    }

    pub(crate) fn script_detail_delayed(
        &self,
        delay: Duration,
        result: Result<MovieInfoPayload, TransportError>,
    ) {
        self.detail.lock().unwrap().push_back(ScriptedCall {
            delay: Some(delay),
            result,
        });
    }

    /// The movie code of the most recent detail request
    pub(crate) fn last_detail_id(&self) -> Option<MovieId> {
        self.last_detail_id.lock().unwrap().clone()
    }
}

async fn play<T>(queue: &Mutex<VecDeque<ScriptedCall<T>>>) -> Result<T, TransportError> {
    let call = queue.lock().unwrap().pop_front();
    match call {
        Some(call) => {
            if let Some(delay) = call.delay {
                tokio::time::sleep(delay).await;
            }
            call.result
        }
        None => Err(TransportError::Other("unscripted repository call".into())),
    }
}

#[async_trait]
impl MovieRepository for MockRepository {
    async fn get_ranked_list(&self) -> Result<BoxOfficePayload, TransportError> {
        self.list_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        play(&self.list).await
    }

    async fn get_detail(&self, id: &MovieId) -> Result<MovieInfoPayload, TransportError> {
        self.detail_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        *self.last_detail_id.lock().unwrap() = Some(id.clone());
        play(&self.detail).await
    }
}

/// Everything a run delivered, in delivery order
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PresenterEvent {
    Rendered(Vec<BoxOfficeMovie>),
    DetailRendered(MovieDetail),
    ErrorReported(DomainError),
}

/// Presenter double that records every callback in order
pub(crate) struct RecordingPresenter {
    events: Mutex<Vec<PresenterEvent>>,
}

impl RecordingPresenter {
    pub(crate) fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn events(&self) -> Vec<PresenterEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&self, movies: Vec<BoxOfficeMovie>) {
        self.events
            .lock()
            .unwrap()
            .push(PresenterEvent::Rendered(movies));
    }

    fn render_detail(&self, detail: MovieDetail) {
        self.events
            .lock()
            .unwrap()
            .push(PresenterEvent::DetailRendered(detail));
    }

    fn report_error(&self, error: &DomainError) {
        self.events
            .lock()
            .unwrap()
            .push(PresenterEvent::ErrorReported(*error));
    }
}
