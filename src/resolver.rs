//! Turns a user selection into the rows and names the dashboard displays.

use crate::error::ResolveError;
use crate::models::{Dataset, SoilRecord};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// What the user currently has picked. Location and soil type are exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Unselected,
    Location(String),
    SoilType(String),
}

impl Selection {
    /// Choosing a location discards any soil type. An empty choice is a no-op.
    pub fn select_location(self, location: &str) -> Self {
        if location.is_empty() {
            self
        } else {
            Selection::Location(location.to_string())
        }
    }

    /// Choosing a soil type discards the location. An empty choice is a no-op.
    pub fn select_soil_type(self, soil_type: &str) -> Self {
        if soil_type.is_empty() {
            self
        } else {
            Selection::SoilType(soil_type.to_string())
        }
    }

    /// Final state after both dropdowns have been applied, location first.
    pub fn from_inputs(location: Option<&str>, soil_type: Option<&str>) -> Self {
        Selection::Unselected
            .select_location(location.unwrap_or_default())
            .select_soil_type(soil_type.unwrap_or_default())
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Selection::Location(location) => Some(location.as_str()),
            _ => None,
        }
    }

    pub fn soil_type(&self) -> Option<&str> {
        match self {
            Selection::SoilType(soil_type) => Some(soil_type.as_str()),
            _ => None,
        }
    }
}

/// Everything the presentation layer needs for one location.
#[derive(Debug, Serialize)]
pub struct LocationDetail<'a> {
    pub location: String,
    /// First row for the location in file order.
    pub info: &'a SoilRecord,
    /// Every row for the location, one map marker each.
    pub rows: Vec<&'a SoilRecord>,
}

#[derive(Debug, Serialize)]
pub struct SoilTypeMatches<'a> {
    pub soil_type: String,
    pub locations: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Resolution<'a> {
    Unselected,
    Location(LocationDetail<'a>),
    SoilType(SoilTypeMatches<'a>),
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

/// Distinct locations in order of first appearance.
pub fn distinct_locations(dataset: &Dataset) -> Vec<&str> {
    distinct(dataset.records().iter().map(|r| r.location.as_str()))
}

/// Location dropdown entries: the default first, whether or not the data has it.
/// The data's own copy of the default is not listed a second time.
pub fn location_options(dataset: &Dataset, default: &str) -> Vec<String> {
    std::iter::once(default)
        .chain(distinct_locations(dataset).into_iter().filter(|l| *l != default))
        .map(str::to_string)
        .collect()
}

/// Soil-type dropdown entries, taken from the whole dataset.
pub fn soil_type_options(dataset: &Dataset) -> Vec<&str> {
    distinct(dataset.records().iter().map(|r| r.soil_type.as_str()))
}

pub fn rows_for_location<'a>(dataset: &'a Dataset, location: &str) -> Vec<&'a SoilRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| r.location == location)
        .collect()
}

/// The first row for `location`. Exact, case-sensitive match.
pub fn info_row<'a>(dataset: &'a Dataset, location: &str) -> Result<&'a SoilRecord, ResolveError> {
    dataset
        .records()
        .iter()
        .find(|r| r.location == location)
        .ok_or_else(|| ResolveError::NotFound(location.to_string()))
}

pub fn locations_for_soil_type<'a>(dataset: &'a Dataset, soil_type: &str) -> Vec<&'a str> {
    distinct(
        dataset
            .records()
            .iter()
            .filter(|r| r.soil_type == soil_type)
            .map(|r| r.location.as_str()),
    )
}

pub fn resolve<'a>(
    dataset: &'a Dataset,
    selection: &Selection,
) -> Result<Resolution<'a>, ResolveError> {
    let resolution = match selection {
        Selection::Unselected => Resolution::Unselected,
        Selection::Location(location) => {
            let info = info_row(dataset, location)?;
            Resolution::Location(LocationDetail {
                location: location.clone(),
                info,
                rows: rows_for_location(dataset, location),
            })
        }
        Selection::SoilType(soil_type) => Resolution::SoilType(SoilTypeMatches {
            soil_type: soil_type.clone(),
            locations: locations_for_soil_type(dataset, soil_type),
        }),
    };
    debug!(?selection, "Selection resolved");
    Ok(resolution)
}
