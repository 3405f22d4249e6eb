#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    config::{RuntimeConfiguration, collation::Collation},
    data::feeds::load_roster,
    routes::{
        index::get_index_route,
        sse::sse_feed,
        students::{
            internal_get_close_student, internal_get_student_in_detail, internal_get_students,
            internal_post_student_flag,
        },
    },
    state::InquisitorState,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{future::Future, path::Path};
use tokio::{net::TcpListener, signal};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod config;
mod data;
mod error;
mod maud_conveniences;
mod routes;
mod state;

async fn os_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

async fn shutdown_signal(state: InquisitorState, signal: impl Future<Output = ()>) {
    signal.await;
    warn!("signal received, starting graceful shutdown");
    state.begin_shutdown();
}

fn router(state: InquisitorState, portraits_dir: &Path) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/internal/get_students", get(internal_get_students))
        .route("/internal/get_student", get(internal_get_student_in_detail))
        .route("/internal/student/flag", post(internal_post_student_flag))
        .route("/internal/close_student", get(internal_get_close_student))
        .route("/sse_feed", get(sse_feed))
        .nest_service("/portraits", ServeDir::new(portraits_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => panic!("unable to load env vars: {e}"),
    }

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let collation = Collation::new(config.locale.clone()).expect("unable to create collation");

    //no roster means nothing to show, so don't bother serving
    let roster = match load_roster(&config.students_feed, &config.families_feed).await {
        Ok(roster) => roster,
        Err(e) => {
            error!(?e, "Unable to load the roster");
            std::process::exit(1);
        }
    };
    info!(students = roster.len(), locale = %collation.locale(), "Roster built");
    if roster.is_empty() {
        warn!("Roster is empty, the student list will be blank");
    }

    let state = InquisitorState::new(roster, collation);

    let app = router(state.clone(), &config.portraits_dir);

    let listener = TcpListener::bind(&config.server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(server_ip = ?config.server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state, os_signal()))
        .await
        .expect("unable to serve app");
}
