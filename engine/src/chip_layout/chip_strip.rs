//! Keeps a chip layout in sync with the active filters and the host width.

use common::filter_group::FilterGroup;

use super::{ChipLayout, ChipLayoutConfig, TextMeasurer, layout_chips};


pub struct ChipStrip<M: TextMeasurer> {
    config: ChipLayoutConfig,
    measurer: M,
    groups: Vec<FilterGroup>,
    available_width: f32,
    layout: ChipLayout,
}

impl<M: TextMeasurer> ChipStrip<M> {
    pub fn new(config: ChipLayoutConfig, measurer: M) -> Self {
        Self { config, measurer, groups: vec![], available_width: 0.0, layout: ChipLayout::default() }
    }

    /// Call whenever the active filters change.
    pub fn set_groups(&mut self, groups: Vec<FilterGroup>) -> &ChipLayout {
        self.groups = groups;
        self.relayout()
    }

    /// Call when the host is resized.
    pub fn set_available_width(&mut self, available_width: f32) -> &ChipLayout {
        if self.available_width == available_width {
            return &self.layout;
        }
        self.available_width = available_width;
        self.relayout()
    }

    fn relayout(&mut self) -> &ChipLayout {
        self.layout = layout_chips(&self.groups, self.available_width, &self.config, &self.measurer);
        &self.layout
    }

    pub fn layout(&self) -> &ChipLayout {
        &self.layout
    }

    pub fn visible_groups(&self) -> Vec<&FilterGroup> {
        self.groups.iter().filter(|g| self.layout.is_visible(&g.facet_key)).collect()
    }

    pub fn overflowed_groups(&self) -> Vec<&FilterGroup> {
        self.groups.iter().filter(|g| !self.layout.is_visible(&g.facet_key)).collect()
    }

    pub fn overflow_count(&self) -> usize {
        self.layout.overflow_count()
    }
}
