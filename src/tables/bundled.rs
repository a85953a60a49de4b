//! Tables shipped with the crate.
//!
//! The text is compiled in with `include_str!` and parsed the first time a
//! model asks for it. Parsed tables live for the whole process and are never
//! mutated afterwards.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::{AttenuationGrid, AverageTable, DelimitedTable, TableError};
use crate::averages::AverageCurve;
use crate::radiative_transfer::{Configuration, DustDistribution, DustType, Geometry};

/// Starburst composite, `A(λ)/A(V)` from 0.0912 to 2.2 micron.
const STARBURST: &str = include_str!("../../data/averages/starburst.txt");

/// Synthetic radiative-transfer grids in the WG00 layout, one file per
/// geometry. They are not the published WG00 tables.
const WG00_SHELL: &str = include_str!("../../data/wg00/shell.txt");
const WG00_DUSTY: &str = include_str!("../../data/wg00/dusty.txt");
const WG00_CLOUDY: &str = include_str!("../../data/wg00/cloudy.txt");

type GeometryGrids = HashMap<(DustType, DustDistribution), Arc<AttenuationGrid>>;

static STARBURST_TABLE: OnceLock<Result<Arc<AverageTable>, TableError>> = OnceLock::new();
static SHELL_GRIDS: OnceLock<Result<GeometryGrids, TableError>> = OnceLock::new();
static DUSTY_GRIDS: OnceLock<Result<GeometryGrids, TableError>> = OnceLock::new();
static CLOUDY_GRIDS: OnceLock<Result<GeometryGrids, TableError>> = OnceLock::new();

pub fn average_table(curve: AverageCurve) -> Result<Arc<AverageTable>, TableError> {
    let (cell, text) = match curve {
        AverageCurve::Starburst => (&STARBURST_TABLE, STARBURST),
    };

    cell.get_or_init(|| {
        let name = format!("bundled:{}", curve.key());
        let table = DelimitedTable::parse_str(&name, text)?;
        AverageTable::from_delimited(curve.key(), &table).map(Arc::new)
    })
    .clone()
}

pub fn wg00_grid(configuration: &Configuration) -> Result<Arc<AttenuationGrid>, TableError> {
    let geometry = configuration.geometry;
    let (cell, text) = match geometry {
        Geometry::Shell => (&SHELL_GRIDS, WG00_SHELL),
        Geometry::Dusty => (&DUSTY_GRIDS, WG00_DUSTY),
        Geometry::Cloudy => (&CLOUDY_GRIDS, WG00_CLOUDY),
    };

    let grids = cell
        .get_or_init(|| parse_geometry(geometry, text))
        .as_ref()
        .map_err(Clone::clone)?;

    grids
        .get(&(configuration.dust_type, configuration.distribution))
        .cloned()
        .ok_or_else(|| TableError::Shape {
            table: format!("bundled:wg00/{}", geometry),
            message: format!("no grid for {}", configuration),
        })
}

fn parse_geometry(geometry: Geometry, text: &str) -> Result<GeometryGrids, TableError> {
    let table = DelimitedTable::parse_str(&format!("bundled:wg00/{}", geometry), text)?;

    let mut grids = HashMap::new();
    for dust_type in DustType::ALL {
        for distribution in DustDistribution::ALL {
            let grid = AttenuationGrid::from_delimited(&table, dust_type, distribution)?;
            grids.insert((dust_type, distribution), Arc::new(grid));
        }
    }
    Ok(grids)
}
