//! Overpass prediction records and time-gap segmentation.
//!
//! Input format (whitespace-delimited): line 1 starts with the prediction
//! date as `YYYY/MM/DD`, line 2 is a column header, every following line is
//! one track record of 4 or 8 numeric columns:
//!
//! ```text
//! time      lat      lon      heading  [lat_left lon_left lat_right lon_right]
//! ```
//!
//! Upstream files carry west-positive longitudes, so every longitude is
//! sign-inverted on ingest. The 4-column form is produced for instruments
//! without a swath; both swath boundaries then default to the satellite
//! position.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fs;
use std::path::Path;

use crate::error::{ParseError, Result};

/// Missing-value sentinel used by upstream prediction files.
pub const MISSING_SENTINEL: f64 = -999.0;

/// Time gap that separates two overpass segments.
fn segment_gap() -> Duration {
    Duration::minutes(10)
}

/// A position whose components are independently maskable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: Option<f64>,
    pub lat: Option<f64>,
}

impl LonLat {
    pub fn is_complete(&self) -> bool {
        self.lon.is_some() && self.lat.is_some()
    }
}

/// One time-contiguous overpass.
///
/// The five sequences are parallel: entry `i` of each describes the same
/// track record. Missing source values appear as `None` at their original
/// position, never removed, so the alignment always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct OverpassSegment {
    pub utc: Vec<NaiveDateTime>,
    pub satpos: Vec<LonLat>,
    pub heading: Vec<Option<f64>>,
    pub swath_left: Vec<LonLat>,
    pub swath_right: Vec<LonLat>,
}

impl OverpassSegment {
    /// Number of records in the segment.
    pub fn len(&self) -> usize {
        self.utc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utc.is_empty()
    }
}

/// One parsed track record, before segmentation.
struct TrackRecord {
    utc: NaiveDateTime,
    satpos: LonLat,
    heading: Option<f64>,
    swath_left: LonLat,
    swath_right: LonLat,
}

/// Growable accumulator for the segment under construction.
#[derive(Default)]
struct SegmentBuffer {
    utc: Vec<NaiveDateTime>,
    satpos: Vec<LonLat>,
    heading: Vec<Option<f64>>,
    swath_left: Vec<LonLat>,
    swath_right: Vec<LonLat>,
}

impl SegmentBuffer {
    fn is_empty(&self) -> bool {
        self.utc.is_empty()
    }

    fn last_utc(&self) -> Option<NaiveDateTime> {
        self.utc.last().copied()
    }

    fn push(&mut self, record: TrackRecord) {
        self.utc.push(record.utc);
        self.satpos.push(record.satpos);
        self.heading.push(record.heading);
        self.swath_left.push(record.swath_left);
        self.swath_right.push(record.swath_right);
    }

    /// Freeze the accumulated buffers into a segment and reset.
    fn finalize(&mut self) -> OverpassSegment {
        let buffer = std::mem::take(self);
        OverpassSegment {
            utc: buffer.utc,
            satpos: buffer.satpos,
            heading: buffer.heading,
            swath_left: buffer.swath_left,
            swath_right: buffer.swath_right,
        }
    }
}

/// Read and parse a prediction file from disk.
pub fn read_overpass_predictions(path: &Path) -> Result<Vec<OverpassSegment>> {
    let content = fs::read_to_string(path)?;
    parse_overpass_predictions(&content)
}

/// Parse prediction text into time-ordered overpass segments.
///
/// Consecutive records stay in one segment while their time delta does not
/// exceed 10 minutes; a strictly larger gap starts a new segment. The
/// segment still being accumulated when the input ends is emitted too.
pub fn parse_overpass_predictions(input: &str) -> Result<Vec<OverpassSegment>> {
    let mut lines = input.lines();

    let date_line = lines.next().ok_or(ParseError::Empty)?;
    let date = parse_date_line(date_line)?;
    // line 2 is the column header
    lines.next();

    let mut segments = Vec::new();
    let mut buffer = SegmentBuffer::default();

    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record(line, index + 3, date)?;

        let same_segment = match buffer.last_utc() {
            Some(last) => record.utc - last <= segment_gap(),
            None => true,
        };
        if !same_segment {
            segments.push(buffer.finalize());
        }
        buffer.push(record);
    }

    if !buffer.is_empty() {
        segments.push(buffer.finalize());
    }

    Ok(segments)
}

fn parse_date_line(line: &str) -> Result<NaiveDate> {
    let token = line.split_whitespace().next().unwrap_or("");
    NaiveDate::parse_from_str(token, "%Y/%m/%d").map_err(|_| ParseError::InvalidDate {
        value: token.to_string(),
    })
}

fn parse_record(line: &str, line_no: usize, date: NaiveDate) -> Result<TrackRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 && fields.len() != 8 {
        return Err(ParseError::ColumnCount {
            line: line_no,
            count: fields.len(),
        });
    }

    let time = NaiveTime::parse_from_str(fields[0], "%H:%M:%S").map_err(|_| {
        ParseError::InvalidTime {
            line: line_no,
            value: fields[0].to_string(),
        }
    })?;
    let utc = date.and_time(time);

    let satpos = parse_lon_lat(fields[2], fields[1], line_no, "satellite")?;
    let heading = masked(parse_field(fields[3], line_no, "heading")?);

    let (swath_left, swath_right) = if fields.len() == 8 {
        (
            parse_lon_lat(fields[5], fields[4], line_no, "left swath")?,
            parse_lon_lat(fields[7], fields[6], line_no, "right swath")?,
        )
    } else {
        // instruments without a swath report only the ground track
        (satpos, satpos)
    };

    Ok(TrackRecord {
        utc,
        satpos,
        heading,
        swath_left,
        swath_right,
    })
}

/// Parse a (lon, lat) column pair, masking sentinels and inverting the
/// upstream west-positive longitude.
fn parse_lon_lat(
    lon_field: &str,
    lat_field: &str,
    line_no: usize,
    what: &'static str,
) -> Result<LonLat> {
    let lon_raw = parse_field(lon_field, line_no, what)?;
    let lat_raw = parse_field(lat_field, line_no, what)?;
    Ok(LonLat {
        // the sentinel is checked on the raw value, before sign inversion
        lon: masked(lon_raw).map(|v| -v),
        lat: masked(lat_raw),
    })
}

fn parse_field(field: &str, line_no: usize, what: &'static str) -> Result<f64> {
    field.parse().map_err(|_| ParseError::InvalidNumber {
        line: line_no,
        field: what,
        value: field.to_string(),
    })
}

fn masked(value: f64) -> Option<f64> {
    if value == MISSING_SENTINEL {
        None
    } else {
        Some(value)
    }
}
