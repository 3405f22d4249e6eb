use crate::{
    data::{
        roster::{Roster, RosterBuilder},
        student::BloodStatus,
    },
    error::{FetchFeedSnafu, InquisitorResult, ParseFeedSnafu, ReadFeedSnafu},
};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use snafu::ResultExt;
use std::{collections::HashSet, fmt, path::PathBuf};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FeedKind {
    Students,
    Families,
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Students => write!(f, "students"),
            Self::Families => write!(f, "families"),
        }
    }
}

/// One record of the students feed. Every field is optional, a record missing one still makes
/// it onto the roster with a default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStudent {
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// The families feed: surnames of half-blood and pure-blood families.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FamilyBlood {
    pub half: HashSet<String>,
    pub pure: HashSet<String>,
}

impl FamilyBlood {
    ///half-blood is checked first, so a surname in both lists is a half-blood
    pub fn classify(&self, surname: &str) -> BloodStatus {
        if self.half.contains(surname) {
            BloodStatus::Halfblood
        } else if self.pure.contains(surname) {
            BloodStatus::Pureblood
        } else {
            BloodStatus::Muggleblood
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Remote(String),
    Local(PathBuf),
}

impl FeedSource {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Remote(source)
        } else {
            Self::Local(PathBuf::from(source))
        }
    }

    pub async fn load<T: DeserializeOwned>(
        &self,
        client: &Client,
        feed: FeedKind,
    ) -> InquisitorResult<T> {
        let bytes = match self {
            Self::Remote(url) => client
                .get(url)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .context(FetchFeedSnafu {
                    feed,
                    location: url.as_str(),
                })?
                .bytes()
                .await
                .context(FetchFeedSnafu {
                    feed,
                    location: url.as_str(),
                })?
                .to_vec(),
            Self::Local(path) => tokio::fs::read(path)
                .await
                .context(ReadFeedSnafu { feed, path })?,
        };

        serde_json::from_slice(&bytes).context(ParseFeedSnafu { feed })
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads both feeds at once and builds the roster. Either feed failing fails the whole load.
pub async fn load_roster(students: &FeedSource, families: &FeedSource) -> InquisitorResult<Roster> {
    let client = Client::new();

    let (records, family_blood) = tokio::try_join!(
        students.load::<Vec<RawStudent>>(&client, FeedKind::Students),
        families.load::<FamilyBlood>(&client, FeedKind::Families),
    )?;
    info!(
        records = records.len(),
        half = family_blood.half.len(),
        pure = family_blood.pure.len(),
        %students,
        %families,
        "Loaded feeds"
    );

    RosterBuilder::new()
        .with_records(records)
        .with_family_blood(family_blood)
        .build()
}
