use crate::{
    data::feeds::FeedSource,
    error::{BadEnvVarSnafu, InquisitorResult},
};
use dotenvy::var;
use snafu::ResultExt;
use std::{env::VarError, path::PathBuf};

pub mod collation;

const DEFAULT_STUDENTS_FEED: &str = "https://petlatkea.dk/2019/hogwartsdata/students.json";
const DEFAULT_FAMILIES_FEED: &str = "https://petlatkea.dk/2019/hogwartsdata/families.json";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    pub students_feed: FeedSource,
    pub families_feed: FeedSource,
    pub locale: String,
    pub portraits_dir: PathBuf,
    pub server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> InquisitorResult<Self> {
        Ok(Self {
            students_feed: FeedSource::parse(var_or("INQUISITOR_STUDENTS_FEED", DEFAULT_STUDENTS_FEED)?),
            families_feed: FeedSource::parse(var_or("INQUISITOR_FAMILIES_FEED", DEFAULT_FAMILIES_FEED)?),
            locale: var_or("INQUISITOR_LOCALE", "en")?,
            portraits_dir: PathBuf::from(var_or("INQUISITOR_PORTRAITS_DIR", "elements/students")?),
            server_ip: var_or("INQUISITOR_SERVER_IP", "127.0.0.1:8080")?,
        })
    }
}

///unset is fine and gets the default, set-but-unreadable is an error
fn var_or(name: &'static str, default: &str) -> InquisitorResult<String> {
    match var(name) {
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(default.to_string()),
        other => other.context(BadEnvVarSnafu { name }),
    }
}
