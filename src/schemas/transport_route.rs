use serde::Deserialize;

use super::check_tips;
use crate::error::AppResult;
use crate::models::{check_required, check_required_opt, limits};

#[derive(Debug, Deserialize)]
pub struct TransportRouteCreate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_cost: String,
    pub estimated_time: String,
    pub difficulty: String,
    pub image_url: String,
    #[serde(default)]
    pub steps: Vec<RouteStepCreate>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl TransportRouteCreate {
    pub fn validate(&self) -> AppResult<()> {
        check_required("id", &self.id, limits::SLUG)?;
        check_required("title", &self.title, limits::TITLE)?;
        check_required("description", &self.description, limits::DESCRIPTION)?;
        check_required("estimated_cost", &self.estimated_cost, limits::PRICE)?;
        check_required("estimated_time", &self.estimated_time, limits::TIME)?;
        check_required("difficulty", &self.difficulty, limits::DIFFICULTY)?;
        check_required("image_url", &self.image_url, limits::URL)?;
        for step in &self.steps {
            step.validate()?;
        }
        check_tips(&self.tips)
    }
}

#[derive(Debug, Deserialize)]
pub struct RouteStepCreate {
    pub step: i64,
    pub description: String,
    pub duration: String,
    pub cost: String,
    pub vehicle: String,
}

impl RouteStepCreate {
    pub fn validate(&self) -> AppResult<()> {
        check_required("description", &self.description, limits::DESCRIPTION)?;
        check_required("duration", &self.duration, limits::DURATION)?;
        check_required("cost", &self.cost, limits::PRICE)?;
        check_required("vehicle", &self.vehicle, limits::VEHICLE)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TransportRouteUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_cost: Option<String>,
    pub estimated_time: Option<String>,
    pub difficulty: Option<String>,
    pub image_url: Option<String>,
}

impl TransportRouteUpdate {
    pub fn validate(&self) -> AppResult<()> {
        check_required_opt("title", self.title.as_deref(), limits::TITLE)?;
        check_required_opt("description", self.description.as_deref(), limits::DESCRIPTION)?;
        check_required_opt("estimated_cost", self.estimated_cost.as_deref(), limits::PRICE)?;
        check_required_opt("estimated_time", self.estimated_time.as_deref(), limits::TIME)?;
        check_required_opt("difficulty", self.difficulty.as_deref(), limits::DIFFICULTY)?;
        check_required_opt("image_url", self.image_url.as_deref(), limits::URL)
    }
}
