use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{check_required, check_required_opt, limits};

#[derive(Debug, Deserialize)]
pub struct ReviewCreate {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub date: String,
    pub rating: i64,
    pub text: String,
    pub destination: String,
}

impl ReviewCreate {
    pub fn validate(&self) -> AppResult<()> {
        check_required("id", &self.id, limits::SLUG)?;
        check_required("name", &self.name, limits::NAME)?;
        check_required("image_url", &self.image_url, limits::URL)?;
        check_required("date", &self.date, limits::DATE)?;
        check_required("text", &self.text, limits::LONG_DESCRIPTION)?;
        check_required("destination", &self.destination, limits::TITLE)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewUpdate {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<String>,
    pub rating: Option<i64>,
    pub text: Option<String>,
    pub destination: Option<String>,
}

impl ReviewUpdate {
    pub fn validate(&self) -> AppResult<()> {
        check_required_opt("name", self.name.as_deref(), limits::NAME)?;
        check_required_opt("image_url", self.image_url.as_deref(), limits::URL)?;
        check_required_opt("date", self.date.as_deref(), limits::DATE)?;
        check_required_opt("text", self.text.as_deref(), limits::LONG_DESCRIPTION)?;
        check_required_opt("destination", self.destination.as_deref(), limits::TITLE)
    }
}
