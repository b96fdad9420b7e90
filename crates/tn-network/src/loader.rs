//! Reading and writing the line-oriented network save format.
//!
//! # Format
//!
//! | Section        | Lines                                                    |
//! |----------------|----------------------------------------------------------|
//! | header         | intersection count, route count, yellow time             |
//! | intersections  | `id` or `id:duration:from1,from2,...`                    |
//! | route blocks   | `from:to:speed:numSensors[:signSpeed]` + one sensor line |
//! |                | `KIND:threshold:v1,v2,...` per declared sensor           |
//!
//! Lines starting with `;` are comments and are skipped wherever they
//! appear.  At most two trailing newlines are tolerated; any other empty
//! line is an error.  [`save_network`] writes exactly the text that
//! [`load_network`] accepts, so the two invert each other.

use std::fs;
use std::io::Read;
use std::path::Path;

use tn_sensors::{Sensor, SensorKind};

use crate::{LoadError, LoadResult, Network, NetworkError};

/// Separates the fields of a line.
pub const LINE_INFO_SEPARATOR: char = ':';
/// Separates the elements of a list field.
pub const LINE_LIST_SEPARATOR: char = ',';

/// A traffic-light declaration held back until every route exists, since
/// its order is validated against the intersection's incoming routes.
struct LightRequest<'a> {
    intersection: &'a str,
    duration:     u32,
    order:        Vec<&'a str>,
}

/// Cursor over the meaningful lines of a save file.
struct Lines<'a> {
    lines: std::vec::IntoIter<&'a str>,
}

impl<'a> Lines<'a> {
    /// Strip comments and validate blank-line structure up front.
    fn new(text: &'a str) -> LoadResult<Self> {
        let trailing = text.len() - text.trim_end_matches('\n').len();
        if trailing > 2 {
            return Err(LoadError::Format(format!(
                "{trailing} trailing newlines, at most 2 allowed"
            )));
        }
        let mut lines = Vec::new();
        for line in text.trim_end_matches('\n').split('\n') {
            if line.starts_with(';') {
                continue;
            }
            if line.is_empty() {
                return Err(LoadError::Format("empty line in network file".into()));
            }
            lines.push(line);
        }
        Ok(Lines { lines: lines.into_iter() })
    }

    /// The next line, which must exist.
    fn next(&mut self, what: &str) -> LoadResult<&'a str> {
        self.lines
            .next()
            .ok_or_else(|| LoadError::Format(format!("unexpected end of file, expected {what}")))
    }

    /// The next line, if any.  Used where the format permits the file to
    /// simply end.
    fn try_next(&mut self) -> Option<&'a str> {
        self.lines.next()
    }
}

fn parse_u32(field: &str, what: &str) -> LoadResult<u32> {
    field
        .parse::<u32>()
        .map_err(|_| LoadError::Format(format!("expected a number for {what}, got {field:?}")))
}

/// Parse one `KIND:threshold:v1,v2,...` sensor line.
fn parse_sensor(line: &str) -> LoadResult<Sensor> {
    let parts: Vec<&str> = line.split(LINE_INFO_SEPARATOR).collect();
    if parts.len() != 3 {
        return Err(LoadError::Format(format!(
            "sensor line {line:?} has {} fields, expected 3",
            parts.len()
        )));
    }
    let kind = parts[0].parse::<SensorKind>().map_err(NetworkError::from)?;
    let threshold = parse_u32(parts[1], "sensor threshold")?;
    let data = parts[2]
        .split(LINE_LIST_SEPARATOR)
        .map(|value| parse_u32(value, "sensor reading"))
        .collect::<LoadResult<Vec<u32>>>()?;
    Ok(Sensor::new(kind, threshold, data).map_err(NetworkError::from)?)
}

/// Build a [`Network`] from save-format text.
///
/// Any structural problem — wrong field counts, unparseable numbers,
/// declared counts that disagree with the lines present, or a mutation the
/// network itself rejects — comes back as [`LoadError::Format`].
pub fn load_network_str(text: &str) -> LoadResult<Network> {
    let mut lines = Lines::new(text)?;
    let mut network = Network::new();

    let intersection_count = parse_u32(lines.next("intersection count")?, "intersection count")?;
    let route_count = parse_u32(lines.next("route count")?, "route count")?;
    let yellow_time = parse_u32(lines.next("yellow time")?, "yellow time")?;
    network.set_yellow_time(yellow_time)?;

    // Pass 1: intersections.  Light declarations are deferred until the
    // routes they order exist.
    let mut light_requests: Vec<LightRequest<'_>> = Vec::new();
    for _ in 0..intersection_count {
        let line = lines.next("an intersection line")?;
        let parts: Vec<&str> = line.split(LINE_INFO_SEPARATOR).collect();
        match parts.len() {
            1 => network.create_intersection(parts[0])?,
            3 => {
                network.create_intersection(parts[0])?;
                light_requests.push(LightRequest {
                    intersection: parts[0],
                    duration:     parse_u32(parts[1], "light duration")?,
                    order:        parts[2].split(LINE_LIST_SEPARATOR).collect(),
                });
            }
            n => {
                return Err(LoadError::Format(format!(
                    "intersection line {line:?} has {n} fields, expected 1 or 3"
                )));
            }
        }
    }

    // Pass 2: route blocks with their sensor lines.
    while let Some(line) = lines.try_next() {
        let parts: Vec<&str> = line.split(LINE_INFO_SEPARATOR).collect();
        if parts.len() != 4 && parts.len() != 5 {
            return Err(LoadError::Format(format!(
                "route line {line:?} has {} fields, expected 4 or 5",
                parts.len()
            )));
        }
        let (from, to) = (parts[0], parts[1]);
        let speed = parse_u32(parts[2], "route speed")?;
        let sensor_count = parse_u32(parts[3], "sensor count")?;
        network.connect(from, to, speed)?;
        if parts.len() == 5 {
            network.add_speed_sign(from, to, parse_u32(parts[4], "speed sign")?)?;
        }
        for _ in 0..sensor_count {
            let sensor = parse_sensor(lines.next("a sensor line")?)?;
            network.add_sensor(from, to, sensor)?;
        }
    }

    for request in light_requests {
        network.add_lights(request.intersection, request.duration, &request.order)?;
    }

    if network.intersection_count() as u32 != intersection_count {
        return Err(LoadError::Format(format!(
            "header declares {intersection_count} intersections, file has {}",
            network.intersection_count()
        )));
    }
    if network.route_count() as u32 != route_count {
        return Err(LoadError::Format(format!(
            "header declares {route_count} routes, file has {}",
            network.route_count()
        )));
    }
    Ok(network)
}

/// Build a [`Network`] from any reader.
pub fn load_network_reader(mut reader: impl Read) -> LoadResult<Network> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_network_str(&text)
}

/// Build a [`Network`] from a file on disk.
pub fn load_network(path: impl AsRef<Path>) -> LoadResult<Network> {
    load_network_str(&fs::read_to_string(path)?)
}

/// Write the network's save-format text to a file, such that loading it
/// back yields an equal network.
pub fn save_network(network: &Network, path: impl AsRef<Path>) -> LoadResult<()> {
    fs::write(path, network.to_string())?;
    Ok(())
}
