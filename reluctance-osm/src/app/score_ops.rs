use crate::{
    config::ReluctanceAppConfiguration,
    model::{property_set_ops, OsmTags, ReluctanceCliError},
};
use kdam::tqdm;
use reluctance_core::model::{
    category::Highway,
    preferences::RoutingPreferences,
    reluctance::{ReluctanceEngine, TraverseMode},
    tag::OptionalTag,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    io::{Read, Write},
};

pub const EDGE_ID_COLUMN: &str = "edge_id";
pub const MAX_SLOPE_COLUMN: &str = "max_slope";
pub const WHEELCHAIR_COLUMN: &str = "wheelchair";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EdgeReluctanceRow {
    pub edge_id: String,
    pub reluctance: f64,
}

/// scores every row of an edges CSV. each row carries an `edge_id` column
/// and any number of OSM tag columns. returns the number of edges written.
pub fn score_edges<R: Read, W: Write>(
    reader: R,
    writer: W,
    conf: &ReluctanceAppConfiguration,
    mode: TraverseMode,
    wheelchair: bool,
) -> Result<usize, ReluctanceCliError> {
    let preferences = RoutingPreferences::from(&conf.routing);
    log::info!("scoring {mode} edges with {}", preferences.walk);
    let engine = ReluctanceEngine::default();
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);

    let rows = tqdm!(
        csv_reader.deserialize::<HashMap<String, String>>(),
        desc = "score edges"
    );
    let mut count = 0;
    for row in rows {
        let row = row?;
        let scored = score_edge(&engine, &preferences, &row, conf, mode, wheelchair)?;
        csv_writer.serialize(scored)?;
        count += 1;
    }
    csv_writer.flush()?;
    Ok(count)
}

/// scores a single edge row. `highway=steps` marks the edge as stairs.
pub fn score_edge(
    engine: &ReluctanceEngine<'_>,
    preferences: &RoutingPreferences,
    row: &HashMap<String, String>,
    conf: &ReluctanceAppConfiguration,
    mode: TraverseMode,
    wheelchair: bool,
) -> Result<EdgeReluctanceRow, ReluctanceCliError> {
    let edge_id = row
        .get(EDGE_ID_COLUMN)
        .cloned()
        .ok_or_else(|| ReluctanceCliError::InvalidEdge {
            edge_id: String::from("<unknown>"),
            message: format!("row is missing the '{EDGE_ID_COLUMN}' column"),
        })?;
    let tags = row
        .iter()
        .filter(|(k, _)| k.as_str() != EDGE_ID_COLUMN)
        .collect::<OsmTags>();
    let properties =
        property_set_ops::accessibility_properties(&tags, conf.ignore_osm_parsing_errors)
            .map_err(|e| ReluctanceCliError::InvalidEdge {
                edge_id: edge_id.clone(),
                message: e.to_string(),
            })?;
    let is_stairs = properties.highway() == OptionalTag::Present(Highway::Steps);

    let reluctance = if wheelchair {
        let max_slope = match tags.get(MAX_SLOPE_COLUMN) {
            None => 0.0,
            Some(s) => s.parse::<f64>().map_err(|e| ReluctanceCliError::InvalidEdge {
                edge_id: edge_id.clone(),
                message: format!("could not parse {MAX_SLOPE_COLUMN} value '{s}': {e}"),
            })?,
        };
        let accessible = !tags.is_tag_false(WHEELCHAIR_COLUMN);
        engine.compute_wheelchair_reluctance(preferences, max_slope, accessible, is_stairs)
    } else {
        engine.compute_reluctance(preferences, mode, conf.walking_bike, is_stairs, &properties)?
    };

    Ok(EdgeReluctanceRow {
        edge_id,
        reluctance,
    })
}
