// Persisted entity types, one module per aggregate root, plus the shared
// lookup entities and the column length limits the schema implies.

pub mod accommodation;
pub mod culinary;
pub mod destination;
pub mod lookup;
pub mod photo_spot;
pub mod review;
pub mod transport_route;

pub use accommodation::{Accommodation, AccommodationGallery, Room};
pub use culinary::{Culinary, CulinaryGallery, CulinarySpecialty};
pub use destination::{Destination, DestinationGallery, DestinationTip};
pub use lookup::{Activity, Facility};
pub use photo_spot::{PhotoSpot, PhotoSpotGallery, PhotoSpotNearbyAttraction, PhotoSpotTip};
pub use review::Review;
pub use transport_route::{RouteStep, RouteTip, TransportRoute};

use crate::error::{AppError, AppResult};

/// Column length limits. Payloads exceeding these are rejected with a
/// validation error, never silently truncated.
pub mod limits {
    pub const SLUG: usize = 50;
    pub const TITLE: usize = 100;
    pub const DESCRIPTION: usize = 500;
    pub const LONG_DESCRIPTION: usize = 2000;
    pub const URL: usize = 255;
    pub const LOCATION: usize = 255;
    pub const CATEGORY: usize = 50;
    pub const PRICE: usize = 50;
    pub const TIME: usize = 50;
    pub const CONTACT: usize = 20;
    pub const NAME: usize = 255;
    pub const TIP: usize = 500;
    pub const CAPACITY: usize = 20;
    pub const DATE: usize = 20;
    pub const DIFFICULTY: usize = 20;
    pub const VEHICLE: usize = 50;
    pub const DURATION: usize = 20;
}

pub fn check_len(field: &str, value: &str, max: usize) -> AppResult<()> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn check_len_opt(field: &str, value: Option<&str>, max: usize) -> AppResult<()> {
    match value {
        Some(v) => check_len(field, v, max),
        None => Ok(()),
    }
}

pub fn check_required(field: &str, value: &str, max: usize) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    check_len(field, value, max)
}

/// For update payloads: an absent field is fine, but a present value may
/// not empty out a field that creation requires.
pub fn check_required_opt(field: &str, value: Option<&str>, max: usize) -> AppResult<()> {
    match value {
        Some(v) => check_required(field, v, max),
        None => Ok(()),
    }
}
