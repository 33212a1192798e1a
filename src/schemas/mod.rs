// Request payload types. `XxxCreate` carries every field of a new
// aggregate, children and association names included; `XxxUpdate` is a
// partial payload where absent fields leave the stored value untouched.

pub mod accommodation;
pub mod culinary;
pub mod destination;
pub mod photo_spot;
pub mod review;
pub mod transport_route;

pub use accommodation::{AccommodationCreate, AccommodationUpdate, RoomCreate};
pub use culinary::{CulinaryCreate, CulinaryUpdate};
pub use destination::{DestinationCreate, DestinationUpdate};
pub use photo_spot::{PhotoSpotCreate, PhotoSpotUpdate};
pub use review::{ReviewCreate, ReviewUpdate};
pub use transport_route::{RouteStepCreate, TransportRouteCreate, TransportRouteUpdate};

use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{check_required, limits};

/// Body for `POST .../tips` child endpoints.
#[derive(Debug, Deserialize)]
pub struct TipPayload {
    pub tip: String,
}

impl TipPayload {
    pub fn validate(&self) -> AppResult<()> {
        check_required("tip", &self.tip, limits::TIP)
    }
}

/// Body for `POST .../gallery` child endpoints.
#[derive(Debug, Deserialize)]
pub struct GalleryImagePayload {
    pub image_url: String,
}

impl GalleryImagePayload {
    pub fn validate(&self) -> AppResult<()> {
        check_required("image_url", &self.image_url, limits::URL)
    }
}

/// Body for name-only child endpoints (specialties, nearby attractions).
#[derive(Debug, Deserialize)]
pub struct NamePayload {
    pub name: String,
}

impl NamePayload {
    pub fn validate(&self) -> AppResult<()> {
        check_required("name", &self.name, limits::NAME)
    }
}

pub(crate) fn check_names(field: &str, names: &[String]) -> AppResult<()> {
    for name in names {
        check_required(field, name, limits::NAME)?;
    }
    Ok(())
}

pub(crate) fn check_tips(tips: &[String]) -> AppResult<()> {
    for tip in tips {
        check_required("tip", tip, limits::TIP)?;
    }
    Ok(())
}

pub(crate) fn check_gallery(urls: &[String]) -> AppResult<()> {
    for url in urls {
        check_required("image_url", url, limits::URL)?;
    }
    Ok(())
}
