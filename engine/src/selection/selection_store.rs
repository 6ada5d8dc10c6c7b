//! Active filters plus the in-progress selection, and the commit protocol that moves between them.

use std::collections::HashMap;

use common::{
    active_filter::{ActiveFilter, ActiveFilters},
    facet_record::FacetRecord,
    facet_schema::{Facet, FacetSchema},
    facet_value::{FacetValue, push_unique},
    filter_group::FilterGroup,
    search_query::{SearchMode, SearchQuery},
};
use tracing::{debug, info};

use crate::{
    suggestions::{RowValueIndex, candidate_columns, candidate_values, is_facet_selectable, resolve_value_source},
    value_provider::{ValueLookup, ValueLookupOutcome},
};

use super::{
    list_navigation::{enter_target, next_index, prev_index},
    selection_event::{NavKey, OpenList, SelectionEvent, ValueListState},
};


/// State machine of one filtering session: `Idle -> FacetChosen -> ValueStaged* -> Committed -> Idle`.
///
/// Every committed change of the active filters queues a [`SelectionEvent::FiltersChanged`], which
/// the host collects with [`SelectionStore::drain_events`]. Suggestions are recomputed from the
/// current state on every call.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    schema: FacetSchema,
    mode: SearchMode,
    active: ActiveFilters,

    selected_facet: Option<String>,
    query: String,
    staged: HashMap<String, Vec<FacetValue>>,
    highlighted: Option<usize>,
    open_list: Option<OpenList>,

    provided_values: HashMap<String, Vec<FacetValue>>,
    row_values: RowValueIndex,
    pending_lookup: Option<ValueLookup>,
    lookup_generation: u64,

    events: Vec<SelectionEvent>,
}

impl SelectionStore {
    pub fn new(schema: FacetSchema) -> Self {
        Self {
            schema,
            mode: SearchMode::Advanced,
            active: ActiveFilters::new(),
            selected_facet: None,
            query: String::new(),
            staged: HashMap::new(),
            highlighted: None,
            open_list: None,
            provided_values: HashMap::new(),
            row_values: RowValueIndex::default(),
            pending_lookup: None,
            lookup_generation: 0,
            events: vec![],
        }
    }

    /// Session with pre-selected filters. Unknown facets are dropped, repeated facets merged and
    /// single-value facets keep their first value. Nothing is emitted.
    pub fn with_initial_filters(schema: FacetSchema, filters: impl IntoIterator<Item = ActiveFilter>) -> Self {
        let mut store = Self::new(schema);
        for filter in filters {
            let Some(facet) = store.schema.get(&filter.facet_key) else {
                debug!("ignoring initial filter for unknown facet {}", filter.facet_key);
                continue;
            };
            let mut values = store.active.get(&facet.key).map(|f| f.values.clone()).unwrap_or_default();
            for value in filter.values {
                push_unique(&mut values, value);
            }
            if !facet.multi_value {
                values.truncate(1);
            }
            let key = facet.key.clone();
            store.active.upsert(ActiveFilter::new(key, values));
        }
        store
    }

    // ---- snapshots ----

    pub fn schema(&self) -> &FacetSchema {
        &self.schema
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn active_filters(&self) -> &ActiveFilters {
        &self.active
    }

    pub fn filter_groups(&self) -> Vec<FilterGroup> {
        self.active.groups(&self.schema)
    }

    pub fn search_query(&self) -> SearchQuery {
        match self.mode {
            SearchMode::Basic => SearchQuery::basic(self.query.clone()),
            SearchMode::Advanced => SearchQuery::advanced(self.active.clone()),
        }
    }

    pub fn selected_facet(&self) -> Option<&Facet> {
        self.selected_facet.as_deref().and_then(|key| self.schema.get(key))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn open_list(&self) -> Option<OpenList> {
        self.open_list
    }

    pub fn is_idle(&self) -> bool {
        self.selected_facet.is_none() && self.open_list.is_none()
    }

    /// Values staged for the selected multi-value facet.
    pub fn staged_values(&self) -> &[FacetValue] {
        self.selected_facet
            .as_deref()
            .and_then(|key| self.staged.get(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Checkbox state of a value of the selected facet: staged for multi-value facets, committed
    /// otherwise.
    pub fn is_value_checked(&self, value_id: &str) -> bool {
        let Some(facet) = self.selected_facet() else {
            return false;
        };
        if facet.multi_value {
            self.staged_values().iter().any(|v| v.id == value_id)
        } else {
            self.active.get(&facet.key).is_some_and(|f| f.contains_id(value_id))
        }
    }

    /// Queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<SelectionEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- suggestions ----

    /// Column dropdown contents for the current query.
    pub fn column_suggestions(&self) -> Vec<&Facet> {
        candidate_columns(&self.schema, &self.active, &self.query)
    }

    /// Value dropdown contents for the selected `Select` facet.
    pub fn value_suggestions(&self) -> Vec<FacetValue> {
        let Some(facet) = self.selected_facet().filter(|f| f.is_select()) else {
            return vec![];
        };
        let source = resolve_value_source(
            facet,
            self.provided_values.get(&facet.key).map(Vec::as_slice),
            self.row_values.get(&facet.key),
        );
        candidate_values(facet, &self.query, source)
    }

    pub fn value_list_state(&self) -> ValueListState {
        match self.selected_facet() {
            Some(facet) if facet.is_select() => {
                if self.pending_lookup.as_ref().is_some_and(|l| l.facet_key == facet.key) {
                    ValueListState::Pending
                } else {
                    ValueListState::Ready
                }
            }
            _ => ValueListState::NotApplicable,
        }
    }

    fn open_list_len(&self) -> usize {
        match self.open_list {
            Some(OpenList::Columns) => self.column_suggestions().len(),
            Some(OpenList::Values) => self.value_suggestions().len(),
            None => 0,
        }
    }

    // ---- external notifications ----

    /// Swaps in a new schema. Filters on facets that no longer exist are dropped.
    pub fn replace_schema(&mut self, schema: FacetSchema) {
        self.schema = schema;
        self.provided_values.clear();
        self.reset_to_idle();

        let before = self.active.clone();
        let schema = &self.schema;
        self.active.retain(|f| schema.contains(&f.facet_key));
        let mut trimmed = ActiveFilters::new();
        for filter in self.active.iter() {
            let mut filter = filter.clone();
            if schema.get(&filter.facet_key).is_some_and(|f| !f.multi_value) {
                filter.values.truncate(1);
            }
            trimmed.upsert(filter);
        }
        self.active = trimmed;

        info!("facet schema replaced: {} facets", self.schema.len());
        if self.active != before {
            self.emit_filters();
        }
    }

    /// Rebuilds the distinct-value index used by `Select` facets without static options.
    pub fn index_records<R: FacetRecord>(&mut self, records: &[R]) {
        self.row_values = RowValueIndex::build(records);
        if self.open_list == Some(OpenList::Values) {
            self.highlighted = None;
        }
    }

    /// Switching mode resets the session.
    pub fn set_mode(&mut self, mode: SearchMode) {
        if self.mode == mode {
            return;
        }
        info!("search mode changed to {:?}", mode);
        let had_filters = !self.active.is_empty();
        self.active.clear();
        self.query.clear();
        self.reset_to_idle();
        self.mode = mode;
        if had_filters {
            self.emit_filters();
        }
    }

    // ---- user input ----

    /// Input focused: shows whichever list fits the current state.
    pub fn focus(&mut self) {
        if self.mode == SearchMode::Basic {
            return;
        }
        self.open_list = self.list_for_selection();
        self.highlighted = None;
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        if self.mode == SearchMode::Basic {
            self.events.push(SelectionEvent::BasicQueryChanged(self.query.clone()));
            return;
        }
        self.open_list = self.list_for_selection();
        self.highlighted = None;
    }

    fn list_for_selection(&self) -> Option<OpenList> {
        match self.selected_facet() {
            None => Some(OpenList::Columns),
            Some(facet) if facet.is_select() => Some(OpenList::Values),
            Some(_) => None,
        }
    }

    /// Starts editing `facet_key`. Multi-value facets get their committed values staged again.
    /// Unknown or excluded facets are ignored.
    pub fn choose_facet(&mut self, facet_key: &str) -> bool {
        if self.mode == SearchMode::Basic || !is_facet_selectable(&self.schema, &self.active, facet_key) {
            return false;
        }
        let Some(facet) = self.schema.get(facet_key) else {
            return false;
        };
        let multi_value = facet.multi_value;
        let open_list = if facet.is_select() { Some(OpenList::Values) } else { None };

        self.staged.clear();
        if multi_value {
            let seeded = self.active.get(facet_key).map(|f| f.values.clone()).unwrap_or_default();
            self.staged.insert(facet_key.to_string(), seeded);
        }
        self.selected_facet = Some(facet_key.to_string());
        self.query.clear();
        self.highlighted = None;
        self.open_list = open_list;
        self.pending_lookup = None;
        debug!("facet chosen: {}", facet_key);
        true
    }

    /// Commits `value` as the only value of the selected single-value facet.
    pub fn select_value(&mut self, value: FacetValue) -> bool {
        let Some(facet) = self.selected_facet().filter(|f| !f.multi_value) else {
            return false;
        };
        let key = facet.key.clone();
        debug!("committing {} = {}", key, value.value);
        self.active.upsert(ActiveFilter::single(key, value));
        self.emit_filters();
        self.reset_to_idle();
        true
    }

    /// Commits the trimmed query as the value of the selected text facet. Multi-value text facets
    /// collect values, single-value ones replace theirs.
    pub fn commit_text(&mut self) -> bool {
        let Some(facet) = self.selected_facet().filter(|f| !f.is_select()) else {
            return false;
        };
        let text = self.query.trim();
        if text.is_empty() {
            return false;
        }
        let key = facet.key.clone();
        let value = FacetValue::plain(text);
        let filter = if facet.multi_value {
            let mut values = self.active.get(&key).map(|f| f.values.clone()).unwrap_or_default();
            push_unique(&mut values, value);
            ActiveFilter::new(key.clone(), values)
        } else {
            ActiveFilter::single(key.clone(), value)
        };
        debug!("committing text filter on {}", key);
        self.active.upsert(filter);
        self.emit_filters();
        self.reset_to_idle();
        true
    }

    /// Flips `value` in the staging set of the selected multi-value facet. Nothing is emitted.
    pub fn toggle_value(&mut self, value: FacetValue) -> bool {
        let Some(facet) = self.selected_facet().filter(|f| f.multi_value) else {
            return false;
        };
        let key = facet.key.clone();
        let staged = self.staged.entry(key).or_default();
        if let Some(index) = staged.iter().position(|v| v.id == value.id) {
            staged.remove(index);
        } else {
            staged.push(value);
        }
        true
    }

    /// Commits the staged values of the selected multi-value facet. An empty staging set removes
    /// the facet.
    pub fn apply_multi_selection(&mut self) -> bool {
        let Some(facet) = self.selected_facet().filter(|f| f.multi_value) else {
            return false;
        };
        let key = facet.key.clone();
        let values = self.staged.remove(&key).unwrap_or_default();
        debug!("applying {} staged values on {}", values.len(), key);
        if values.is_empty() {
            self.active.remove(&key);
        } else {
            self.active.upsert(ActiveFilter::new(key, values));
        }
        self.emit_filters();
        self.reset_to_idle();
        true
    }

    /// Drops the staged values without emitting.
    pub fn cancel_multi_selection(&mut self) -> bool {
        if self.selected_facet().is_none_or(|f| !f.multi_value) {
            return false;
        }
        self.reset_to_idle();
        true
    }

    /// Chip removal. Unknown keys only close the suggestions.
    pub fn remove_filter(&mut self, facet_key: &str) -> bool {
        self.reset_to_idle();
        if self.active.remove(facet_key).is_none() {
            return false;
        }
        debug!("filter removed: {}", facet_key);
        self.emit_filters();
        true
    }

    /// Removes one value from a chip, and the chip itself when it was the last value.
    pub fn remove_filter_value(&mut self, facet_key: &str, value_id: &str) -> bool {
        self.reset_to_idle();
        if !self.active.remove_value(facet_key, value_id) {
            return false;
        }
        debug!("filter value removed: {} / {}", facet_key, value_id);
        self.emit_filters();
        true
    }

    pub fn clear_all(&mut self) {
        self.active.clear();
        self.reset_to_idle();
        debug!("all filters cleared");
        self.emit_filters();
    }

    /// Focus left the filter area: closes any list and forgets staged values.
    pub fn close_suggestions(&mut self) {
        self.reset_to_idle();
    }

    pub fn handle_key(&mut self, key: NavKey) {
        if self.mode == SearchMode::Basic {
            return;
        }
        match key {
            NavKey::ArrowDown => self.highlighted = next_index(self.highlighted, self.open_list_len()),
            NavKey::ArrowUp => self.highlighted = prev_index(self.highlighted, self.open_list_len()),
            NavKey::Enter => self.commit_highlighted(),
            NavKey::Escape => self.close_suggestions(),
        }
    }

    fn commit_highlighted(&mut self) {
        match self.open_list {
            Some(OpenList::Columns) => {
                let columns = self.column_suggestions();
                let Some(index) = enter_target(self.highlighted, columns.len()) else {
                    return;
                };
                let key = columns[index].key.clone();
                self.choose_facet(&key);
            }
            Some(OpenList::Values) => {
                let values = self.value_suggestions();
                let Some(index) = enter_target(self.highlighted, values.len()) else {
                    return;
                };
                let value = values[index].clone();
                if self.selected_facet().is_some_and(|f| f.multi_value) {
                    self.toggle_value(value);
                } else {
                    self.select_value(value);
                }
            }
            None => {
                self.commit_text();
            }
        }
    }

    // ---- dynamic values ----

    /// Starts a provider lookup for the selected `Select` facet when it has no static options.
    /// The host runs it and hands the outcome to [`SelectionStore::apply_value_lookup`].
    pub fn begin_value_lookup(&mut self) -> Option<ValueLookup> {
        let facet_key = self
            .selected_facet()
            .filter(|f| f.is_select() && !f.has_static_options())?
            .key
            .clone();
        self.lookup_generation += 1;
        let lookup = ValueLookup {
            facet_key,
            query: self.query.clone(),
            generation: self.lookup_generation,
        };
        self.pending_lookup = Some(lookup.clone());
        Some(lookup)
    }

    /// Caches the provider values on the facet, unless the facet is no longer selected or a newer
    /// lookup for it is pending. Failed or empty results are not cached: the facet falls back to
    /// its row-derived values.
    pub fn apply_value_lookup(&mut self, outcome: ValueLookupOutcome) -> bool {
        let ValueLookupOutcome { lookup, values, failed } = outcome;
        if self.selected_facet.as_deref() != Some(lookup.facet_key.as_str()) {
            debug!("discarding stale values for {}", lookup.facet_key);
            return false;
        }
        if let Some(pending) = &self.pending_lookup {
            if pending.generation != lookup.generation {
                debug!("discarding superseded values for {} (generation {})", lookup.facet_key, lookup.generation);
                return false;
            }
        }
        self.pending_lookup = None;
        self.highlighted = None;
        if failed || values.is_empty() {
            debug!("no provider values for facet {} and query {:?}", lookup.facet_key, lookup.query);
            self.provided_values.remove(&lookup.facet_key);
        } else {
            self.provided_values.insert(lookup.facet_key, values);
        }
        true
    }

    // ---- internals ----

    fn reset_to_idle(&mut self) {
        self.selected_facet = None;
        if self.mode == SearchMode::Advanced {
            self.query.clear();
        }
        self.staged.clear();
        self.highlighted = None;
        self.open_list = None;
        self.pending_lookup = None;
    }

    fn emit_filters(&mut self) {
        self.events.push(SelectionEvent::FiltersChanged(self.active.clone()));
    }
}
