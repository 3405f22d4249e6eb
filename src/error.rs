use crate::data::feeds::FeedKind;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::path::PathBuf;
use uuid::Uuid;

pub type InquisitorResult<T> = Result<T, InquisitorError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum InquisitorError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse locale {:?}", provided))]
    InvalidLocale {
        source: icu::locale::ParseError,
        provided: String,
    },
    #[snafu(display("Unable to build a collator for {:?}", locale))]
    BuildCollator {
        source: icu_provider::DataError,
        locale: String,
    },
    #[snafu(display("Unable to fetch the {} feed from {}", feed, location))]
    FetchFeed {
        source: reqwest::Error,
        feed: FeedKind,
        location: String,
    },
    #[snafu(display("Unable to read the {} feed from {:?}", feed, path))]
    ReadFeed {
        source: std::io::Error,
        feed: FeedKind,
        path: PathBuf,
    },
    #[snafu(display("Unable to parse the {} feed", feed))]
    ParseFeed {
        source: serde_json::Error,
        feed: FeedKind,
    },
    #[snafu(display("Tried to build the roster before the family blood lists were loaded"))]
    MissingBloodLookup,
    #[snafu(display("Unable to find student with UUID: {}", id))]
    MissingStudent { id: Uuid },
    #[snafu(display("Unknown student flag {:?}", provided))]
    UnknownFlag { provided: String },
}

impl IntoResponse for InquisitorError {
    #[allow(clippy::match_same_arms)]
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input
        const BG: StatusCode = StatusCode::BAD_GATEWAY; //upstream feed

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Inquisitor Error "}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::BadEnvVar { .. } => ISE,
            Self::InvalidLocale { .. } | Self::BuildCollator { .. } => ISE,
            Self::FetchFeed { .. } | Self::ParseFeed { .. } => BG,
            Self::ReadFeed { .. } => ISE,
            Self::MissingBloodLookup => ISE,
            Self::MissingStudent { .. } => NF,
            Self::UnknownFlag { .. } => BI,
        };

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()))).into_response()
    }
}
