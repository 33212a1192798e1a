use serde::Deserialize;

use super::{check_gallery, check_names, check_tips};
use crate::error::AppResult;
use crate::models::{check_required, check_required_opt, limits};

#[derive(Debug, Deserialize)]
pub struct PhotoSpotCreate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub image_url: String,
    pub category: String,
    pub location: String,
    pub best_time: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub nearby_attractions: Vec<String>,
}

impl PhotoSpotCreate {
    pub fn validate(&self) -> AppResult<()> {
        check_required("id", &self.id, limits::SLUG)?;
        check_required("title", &self.title, limits::TITLE)?;
        check_required("description", &self.description, limits::DESCRIPTION)?;
        check_required(
            "full_description",
            &self.full_description,
            limits::LONG_DESCRIPTION,
        )?;
        check_required("image_url", &self.image_url, limits::URL)?;
        check_required("category", &self.category, limits::CATEGORY)?;
        check_required("location", &self.location, limits::LOCATION)?;
        check_required("best_time", &self.best_time, limits::TIME)?;
        check_tips(&self.tips)?;
        check_gallery(&self.gallery)?;
        check_names("attraction name", &self.nearby_attractions)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PhotoSpotUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub best_time: Option<String>,
}

impl PhotoSpotUpdate {
    pub fn validate(&self) -> AppResult<()> {
        check_required_opt("title", self.title.as_deref(), limits::TITLE)?;
        check_required_opt("description", self.description.as_deref(), limits::DESCRIPTION)?;
        check_required_opt(
            "full_description",
            self.full_description.as_deref(),
            limits::LONG_DESCRIPTION,
        )?;
        check_required_opt("image_url", self.image_url.as_deref(), limits::URL)?;
        check_required_opt("category", self.category.as_deref(), limits::CATEGORY)?;
        check_required_opt("location", self.location.as_deref(), limits::LOCATION)?;
        check_required_opt("best_time", self.best_time.as_deref(), limits::TIME)
    }
}
