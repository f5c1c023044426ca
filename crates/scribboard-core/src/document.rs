//! The element collection: one history snapshot.

use crate::shapes::{
    Element, ElementAtPosition, ElementId, Shape, TextMeasure, get_element_at_position,
};
use kurbo::{Point, Rect};
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// All elements on the board, keyed by id, plus paint order.
///
/// Ids are stable: erasing an element never renumbers the survivors.
/// Collection order (back to front) lives in `z_order` and is also the
/// order hit-tests walk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// All elements, keyed by ID.
    elements: HashMap<ElementId, Element>,
    /// Collection order of elements (back to front).
    z_order: Vec<ElementId>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element at the end of the collection.
    ///
    /// An element already present under the same id is replaced in place.
    pub fn insert(&mut self, element: Element) {
        let id = element.id();
        if self.elements.insert(id, element).is_none() {
            self.z_order.push(id);
        }
    }

    /// Copy with `element` appended.
    pub fn with(&self, element: Element) -> Self {
        let mut next = self.clone();
        next.insert(element);
        next
    }

    /// Replace the element with the same id, keeping its position.
    /// Returns false if no such element exists.
    pub fn replace(&mut self, element: Element) -> bool {
        match self.elements.get_mut(&element.id()) {
            Some(slot) => {
                *slot = element;
                true
            }
            None => false,
        }
    }

    /// Edit an element's shape in place. Returns false if no such element exists.
    pub fn edit(&mut self, id: ElementId, f: impl FnOnce(&mut Shape)) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                element.edit(f);
                true
            }
            None => false,
        }
    }

    /// Remove an element. Relative order of the rest is kept.
    pub fn erase(&mut self, id: ElementId) -> Option<Element> {
        let removed = self.elements.remove(&id)?;
        self.z_order.retain(|&other| other != id);
        Some(removed)
    }

    /// Copy with `id` removed. Erasing a missing id returns an equal copy.
    pub fn without(&self, id: ElementId) -> Self {
        let mut next = self.clone();
        next.erase(id);
        next
    }

    /// Get an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Elements in collection order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.z_order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Ids in collection order.
    pub fn ids(&self) -> &[ElementId] {
        &self.z_order
    }

    /// First element in collection order that `point` is not outside of.
    pub fn element_at(&self, point: Point, measure: &dyn TextMeasure) -> ElementAtPosition<'_> {
        get_element_at_position(point, self.iter(), measure)
    }

    /// Get the bounding box of all elements.
    pub fn bounds(&self) -> Option<Rect> {
        self.iter()
            .map(|element| element.shape().bounds())
            .reduce(|acc, bounds| acc.union(bounds))
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
