use crate::{
    consts::{CELL_WIDTH, GRID_HEIGHT, GRID_WIDTH, MAX_STATES, NUMBER_OF_ANTS},
    error::ConfigError,
};
use serde::{Deserialize, Serialize};

/// Startup record shared by the application and the surface sizing.
///
/// Field names on the wire follow the host page's flags object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "maxStates")]
    pub max_states: i32,
    #[serde(rename = "numberOfAnts")]
    pub number_of_ants: i32,
    #[serde(rename = "gridWidth")]
    pub grid_width: i32,
    #[serde(rename = "gridHeight")]
    pub grid_height: i32,
    pub cellwidth: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_states: MAX_STATES,
            number_of_ants: NUMBER_OF_ANTS,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cellwidth: CELL_WIDTH,
        }
    }
}

impl Config {
    pub fn new(
        max_states: i32,
        number_of_ants: i32,
        grid_width: i32,
        grid_height: i32,
        cellwidth: i32,
    ) -> Result<Self, ConfigError> {
        let config = Config {
            max_states,
            number_of_ants,
            grid_width,
            grid_height,
            cellwidth,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("maxStates", self.max_states),
            ("gridWidth", self.grid_width),
            ("gridHeight", self.grid_height),
            ("cellwidth", self.cellwidth),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0) {
            return Err(ConfigError::NonPositive { field, value });
        }
        if self.number_of_ants < 0 {
            return Err(ConfigError::Negative {
                field: "numberOfAnts",
                value: self.number_of_ants,
            });
        }
        self.checked_surface_size().map(|_| ())
    }

    /// Pixel dimensions of the surface: one `cellwidth` square per grid cell.
    pub fn surface_size(&self) -> Result<(u32, u32), ConfigError> {
        self.validate()?;
        self.checked_surface_size()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.grid_width).contains(&x) && (0..self.grid_height).contains(&y)
    }

    fn checked_surface_size(&self) -> Result<(u32, u32), ConfigError> {
        let too_large = || ConfigError::SurfaceTooLarge {
            width: self.grid_width,
            height: self.grid_height,
            cellwidth: self.cellwidth,
        };
        let cell = self.cellwidth as u32;
        let width = (self.grid_width as u32)
            .checked_mul(cell)
            .ok_or_else(too_large)?;
        let height = (self.grid_height as u32)
            .checked_mul(cell)
            .ok_or_else(too_large)?;
        Ok((width, height))
    }
}
