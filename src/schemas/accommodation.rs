use serde::Deserialize;

use super::{check_gallery, check_names};
use crate::error::AppResult;
use crate::models::{check_len_opt, check_required, check_required_opt, limits};

#[derive(Debug, Deserialize)]
pub struct AccommodationCreate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub image_url: String,
    pub category: String,
    pub price: String,
    pub location: String,
    pub contact: String,
    pub website: Option<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<RoomCreate>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl AccommodationCreate {
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
        check_required("contact", &self.contact, limits::CONTACT)?;
        check_len_opt("website", self.website.as_deref(), limits::URL)?;
        check_names("facility name", &self.facilities)?;
        for room in &self.rooms {
            room.validate()?;
        }
        check_gallery(&self.gallery)
    }
}

#[derive(Debug, Deserialize)]
pub struct RoomCreate {
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: String,
    pub capacity: String,
    pub description: String,
}

impl RoomCreate {
    pub fn validate(&self) -> AppResult<()> {
        check_required("type", &self.room_type, limits::TITLE)?;
        check_required("price", &self.price, limits::PRICE)?;
        check_required("capacity", &self.capacity, limits::CAPACITY)?;
        check_required("description", &self.description, limits::DESCRIPTION)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AccommodationUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub contact: Option<String>,
    pub website: Option<String>,
    pub facilities: Option<Vec<String>>,
}

impl AccommodationUpdate {
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
        check_required_opt("contact", self.contact.as_deref(), limits::CONTACT)?;
        // website is nullable at create and stays length-checked only
        check_len_opt("website", self.website.as_deref(), limits::URL)?;
        if let Some(names) = &self.facilities {
            check_names("facility name", names)?;
        }
        Ok(())
    }
}
