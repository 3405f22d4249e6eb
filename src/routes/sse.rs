use crate::state::InquisitorState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use std::convert::Infallible;
use tokio_stream::{StreamExt, wrappers::BroadcastStream};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SseEvent {
    CrudStudent,
}

impl SseEvent {
    ///what htmx listens for, as `sse:<name>`
    pub const fn name(self) -> &'static str {
        match self {
            Self::CrudStudent => "crud_student",
        }
    }
}

pub async fn sse_feed(
    State(state): State<InquisitorState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    //lagged receivers just skip ahead, the next event re-renders everything anyway
    let stream = BroadcastStream::new(state.subscribe_to_sse_feed())
        .filter_map(Result::ok)
        .map(|event| Ok(Event::default().event(event.name()).data(event.name())));
    let stream = futures::StreamExt::take_until(stream, state.wait_for_shutdown());

    Sse::new(stream).keep_alive(KeepAlive::default())
}
