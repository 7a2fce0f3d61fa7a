//! Per-segment re-application of the two-proportion test

use serde::{Deserialize, Serialize};

use super::conversion::{ConversionMetrics, Variant};

/// A sub-population with its own variant counts
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub segment_name: String,
    pub variants: Vec<Variant>,
}

impl Segment {
    pub fn new(segment_name: impl Into<String>, variants: Vec<Variant>) -> Self {
        Self {
            segment_name: segment_name.into(),
            variants,
        }
    }
}

/// Metrics for a single segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentAnalysis {
    pub segment_name: String,
    pub metrics: ConversionMetrics,
}

/// Analyze every segment that has at least two variants
///
/// The first variant is the control and the second the treatment; any further
/// variants are ignored. Segments with fewer than two variants are left out,
/// so the result may be shorter than the input.
pub fn analyze_segments(segments: &[Segment]) -> Vec<SegmentAnalysis> {
    segments
        .iter()
        .filter_map(|segment| match segment.variants.as_slice() {
            [control, treatment, ..] => Some(SegmentAnalysis {
                segment_name: segment.segment_name.clone(),
                metrics: ConversionMetrics::compare(control, treatment),
            }),
            _ => None,
        })
        .collect()
}
