use serde::Deserialize;

use super::{check_gallery, check_names, check_tips};
use crate::error::AppResult;
use crate::models::{check_required, check_required_opt, limits};

#[derive(Debug, Deserialize)]
pub struct DestinationCreate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub image_url: String,
    pub category: String,
    pub price: String,
    pub location: String,
    pub open_hours: String,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl DestinationCreate {
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
        check_required("price", &self.price, limits::PRICE)?;
        check_required("location", &self.location, limits::LOCATION)?;
        check_required("open_hours", &self.open_hours, limits::TIME)?;
        check_names("facility name", &self.facilities)?;
        check_names("activity name", &self.activities)?;
        check_tips(&self.tips)?;
        check_gallery(&self.gallery)
    }
}

/// Partial update. Association lists, when present (even empty), replace
/// the stored set; tips and gallery are create-only and mutated through
/// the child endpoints instead.
#[derive(Debug, Default, Deserialize)]
pub struct DestinationUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub open_hours: Option<String>,
    pub facilities: Option<Vec<String>>,
    pub activities: Option<Vec<String>>,
}

impl DestinationUpdate {
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
        check_required_opt("price", self.price.as_deref(), limits::PRICE)?;
        check_required_opt("location", self.location.as_deref(), limits::LOCATION)?;
        check_required_opt("open_hours", self.open_hours.as_deref(), limits::TIME)?;
        if let Some(names) = &self.facilities {
            check_names("facility name", names)?;
        }
        if let Some(names) = &self.activities {
            check_names("activity name", names)?;
        }
        Ok(())
    }
}
