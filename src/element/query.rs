//! Tree queries: by id, name, class; generic predicate matching.

use super::node::Element;

impl Element {
    /// Pre-order depth-first traversal of this element and its descendants.
    pub fn walk(&self) -> Vec<&Element> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for child in current.children().iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Find the first element (self included) whose `id` attribute matches.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.walk().into_iter().find(|el| el.id() == Some(id))
    }

    /// Find the first element (self included) whose `name` attribute matches.
    pub fn find_by_name(&self, name: &str) -> Option<&Element> {
        self.walk().into_iter().find(|el| el.name() == Some(name))
    }

    /// Mutable lookup by `name`, e.g. to attach a validation error after the
    /// tree has been decorated.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Element> {
        if self.name() == Some(name) {
            return Some(self);
        }
        self.children_mut()
            .iter_mut()
            .find_map(|child| child.find_by_name_mut(name))
    }

    /// All elements carrying the given literal class.
    pub fn query_by_class(&self, class: &str) -> Vec<&Element> {
        self.query_all(|el| el.has_class(class))
    }

    /// All elements matching an arbitrary predicate, in tree order.
    pub fn query_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.walk().into_iter().filter(|el| predicate(el)).collect()
    }
}
