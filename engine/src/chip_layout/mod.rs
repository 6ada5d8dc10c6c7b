//! Decides which filter chips fit inline and which collapse into the overflow affordance.

use common::filter_group::FilterGroup;
use serde::{Deserialize, Serialize};

mod text_measure;
pub use text_measure::{AverageGlyphMeasurer, FontStyle, TextMeasurer};

mod layout_config;
pub use layout_config::{ChipLayoutConfig, DEFAULT_MAX_CHIP_WIDTH, DEFAULT_OVERFLOW_RESERVE};

mod chip_strip;
pub use chip_strip::ChipStrip;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChipPlacement {
    pub facet_key: String,
    /// Measured width, before clamping.
    pub width: f32,
    pub visible: bool,
}

/// Placement of every group, in the order the groups were given (oldest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChipLayout {
    pub placements: Vec<ChipPlacement>,
}

impl ChipLayout {
    pub fn visible_keys(&self) -> Vec<&str> {
        self.placements.iter().filter(|p| p.visible).map(|p| p.facet_key.as_str()).collect()
    }

    pub fn overflowed_keys(&self) -> Vec<&str> {
        self.placements.iter().filter(|p| !p.visible).map(|p| p.facet_key.as_str()).collect()
    }

    pub fn overflow_count(&self) -> usize {
        self.placements.iter().filter(|p| !p.visible).count()
    }

    pub fn is_visible(&self, facet_key: &str) -> bool {
        self.placements.iter().any(|p| p.visible && p.facet_key == facet_key)
    }
}

/// Greedy right-to-left fit: walks from the newest group to the oldest, adding each chip's width
/// clamped to `max_chip_width`. Groups stay visible while the running total is within
/// `available_width - overflow_reserve`; the first group past the budget and every older one
/// overflow.
pub fn layout_chips<M: TextMeasurer + ?Sized>(
    groups: &[FilterGroup],
    available_width: f32,
    config: &ChipLayoutConfig,
    measurer: &M,
) -> ChipLayout {
    let budget = available_width - config.overflow_reserve;
    let mut total = 0.0_f32;
    let mut overflowed = false;

    let mut placements: Vec<ChipPlacement> = groups
        .iter()
        .rev()
        .map(|group| {
            let width = measurer.measure(&group.display_text(), &config.font).max(0.0);
            if !overflowed {
                total += width.min(config.max_chip_width);
                overflowed = total > budget;
            }
            ChipPlacement { facet_key: group.facet_key.clone(), width, visible: !overflowed }
        })
        .collect();
    placements.reverse();

    ChipLayout { placements }
}
