//! Signal extraction from a parsed PDML document.
//!
//! One deterministic pass over the tree produces the shared timestamp axis
//! and the per-signal value series. The pass is pure: all accumulation is
//! local and returned as an immutable [`Extraction`].
//!
//! Extraction is all-or-nothing. A packet without the expected nested
//! protocol node or timestamp field, or a sample whose bracketed value is
//! neither numeric nor a boolean token, fails the entire pass.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;
use roxmltree::{Document, Node};

use crate::error::ViewerError;

/// Protocol node name identifying one IPTWP packet.
const PROTO_NAME: &str = "iptwp";
/// Field carrying the packet timestamp, in microseconds.
const TIMESTAMP_FIELD: &str = "iptwp.pd.timestamp_in_microsecond";
/// Field grouping the process-variable samples of one packet.
const PROCESS_VARIABLE_FIELD: &str = "iptwp.pd.ProcessVariableName";

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static NAME_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());
static BRACKET_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());

// ─────────────────────────────────────────────────────────────────────────────
// Result types
// ─────────────────────────────────────────────────────────────────────────────

/// One occurrence of a named signal.
///
/// `packet` is the index of the packet the sample came from, so a sparse
/// signal can still be paired with the timestamp of its own packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalSample {
    pub packet: usize,
    pub value: i64,
}

/// Ordered samples of one signal, one entry per packet it occurred in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalSeries {
    pub samples: Vec<SignalSample>,
}

impl SignalSeries {
    /// The bare value sequence, in packet order.
    pub fn values(&self) -> Vec<i64> {
        self.samples.iter().map(|sample| sample.value).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Result of the extraction pass: the normalized timestamp axis plus all
/// signal series, keyed by name in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    timestamps: Vec<i64>,
    series: HashMap<String, SignalSeries>,
    order: Vec<String>,
}

impl Extraction {
    /// Normalized packet timestamps in microseconds.
    ///
    /// Index 0 is always 0; later entries go negative if the first packet's
    /// raw timestamp was not the minimum.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Signal names in first-encounter order across packets.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn series(&self, name: &str) -> Option<&SignalSeries> {
        self.series.get(name)
    }

    pub fn packet_count(&self) -> usize {
        self.timestamps.len()
    }

    pub fn signal_count(&self) -> usize {
        self.order.len()
    }

    fn push_sample(&mut self, name: &str, sample: SignalSample) {
        if !self.series.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.series
            .entry(name.to_string())
            .or_default()
            .samples
            .push(sample);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Extraction pass
// ─────────────────────────────────────────────────────────────────────────────

/// Walk the document and collect `(timestamps, signal series)`.
///
/// Guarantees on success: `timestamps().len()` equals the number of matched
/// packets, and every series is at most that long (equal only if the signal
/// occurs in every packet).
pub fn extract(doc: &Document<'_>) -> Result<Extraction, ViewerError> {
    let packets: Vec<Node> = doc
        .root()
        .descendants()
        .filter(|node| is_element_named(*node, "proto") && node.attribute("name") == Some(PROTO_NAME))
        .collect();

    let mut out = Extraction::default();
    let mut t_offset = 0i64;

    for (index, packet) in packets.iter().enumerate() {
        // The packet payload is the first nested protocol node.
        let payload = packet
            .descendants()
            .filter(|node| node.id() != packet.id())
            .find(|node| is_element_named(*node, "proto"))
            .ok_or_else(|| {
                ViewerError::Parse(format!("packet {index} has no nested protocol node"))
            })?;

        let timestamp_raw = packet_timestamp(payload, index)?;
        // The offset is fixed by packet 0 and never recomputed.
        if index == 0 {
            t_offset = timestamp_raw;
        }
        out.timestamps.push(timestamp_raw - t_offset);

        let mut sample_count = 0usize;
        for group in payload
            .descendants()
            .filter(|node| is_field_named(*node, PROCESS_VARIABLE_FIELD))
        {
            for sample_node in group
                .descendants()
                .filter(|node| node.id() != group.id() && is_element_named(*node, "field"))
            {
                let showname = sample_node.attribute("showname").ok_or_else(|| {
                    ViewerError::Parse(format!("signal field in packet {index} has no showname"))
                })?;
                let (name, value) = parse_sample(showname)?;
                out.push_sample(name, SignalSample { packet: index, value });
                sample_count += 1;
            }
        }
        debug!(
            "packet {index}: t={} us, {sample_count} process-variable samples",
            timestamp_raw - t_offset
        );
    }

    info!(
        "extracted {} signals from {} packets",
        out.signal_count(),
        out.packet_count()
    );
    Ok(out)
}

/// Parse the packet timestamp: the first run of decimal digits anywhere in
/// the timestamp field's `showname`.
fn packet_timestamp(payload: Node<'_, '_>, index: usize) -> Result<i64, ViewerError> {
    let field = payload
        .descendants()
        .find(|node| is_field_named(*node, TIMESTAMP_FIELD))
        .ok_or_else(|| ViewerError::Parse(format!("packet {index} has no timestamp field")))?;
    let showname = field.attribute("showname").ok_or_else(|| {
        ViewerError::Parse(format!("timestamp field of packet {index} has no showname"))
    })?;
    let digits = DIGIT_RUN.find(showname).ok_or_else(|| {
        ViewerError::Parse(format!("no digits in timestamp display '{showname}'"))
    })?;
    digits
        .as_str()
        .parse::<i64>()
        .map_err(|err| ViewerError::Parse(format!("timestamp '{}': {err}", digits.as_str())))
}

/// Split a sample's `showname` into signal name and integer value.
///
/// The name is the first maximal run of non-whitespace characters; the value
/// is the substring between the first `[` and the next `]`. A value
/// containing `TRUE` coerces to 1 and `FALSE` to 0; anything else must parse
/// as a base-10 integer.
fn parse_sample(showname: &str) -> Result<(&str, i64), ViewerError> {
    let name = NAME_TOKEN
        .find(showname)
        .ok_or_else(|| ViewerError::Parse(format!("signal display '{showname}' has no name")))?
        .as_str();
    let raw = BRACKET_VALUE
        .captures(showname)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            ViewerError::Parse(format!("signal display '{showname}' has no bracketed value"))
        })?
        .as_str();

    let value = if raw.contains("TRUE") {
        1
    } else if raw.contains("FALSE") {
        0
    } else {
        raw.trim().parse::<i64>().map_err(|_| {
            ViewerError::Value(format!("'{raw}' in '{showname}' is neither numeric nor TRUE/FALSE"))
        })?
    };
    Ok((name, value))
}

fn is_element_named(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn is_field_named(node: Node<'_, '_>, name: &str) -> bool {
    is_element_named(node, "field") && node.attribute("name") == Some(name)
}
