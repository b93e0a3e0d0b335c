//! Per-side user order arrays.

use crate::model::side::Side;

/// The two order arrays, left and right of the notch.
///
/// Empty means "no user order yet"; the registry falls back to priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideOrders {
    left: Vec<String>,
    right: Vec<String>,
}

impl SideOrders {
    pub fn new(left: Vec<String>, right: Vec<String>) -> Self {
        Self { left, right }
    }

    pub fn get(&self, side: Side) -> &[String] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn get_mut(&mut self, side: Side) -> &mut Vec<String> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Side whose array holds `id`, if any.
    pub fn side_of(&self, id: &str) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|side| self.get(*side).iter().any(|entry| entry == id))
    }

    /// Removes `id` from both arrays; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.left.len() + self.right.len();
        self.left.retain(|entry| entry != id);
        self.right.retain(|entry| entry != id);
        before != self.left.len() + self.right.len()
    }

    /// Inserts `id` into `side` at `index`, clamped to append.
    ///
    /// Removes `id` from both arrays first. Returns the index used.
    pub fn insert_clamped(&mut self, side: Side, id: &str, index: usize) -> usize {
        self.remove(id);
        let target = self.get_mut(side);
        let index = index.min(target.len());
        target.insert(index, id.to_string());
        index
    }

    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SideOrders;
    use crate::model::side::Side;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn insert_moves_between_sides_without_duplicates() {
        let mut orders = SideOrders::new(ids(&["calendar", "todolist"]), ids(&["media"]));

        let used = orders.insert_clamped(Side::Right, "todolist", 0);
        assert_eq!(used, 0);
        assert_eq!(orders.get(Side::Left), ids(&["calendar"]).as_slice());
        assert_eq!(orders.get(Side::Right), ids(&["todolist", "media"]).as_slice());
        assert_eq!(orders.side_of("todolist"), Some(Side::Right));
    }

    #[test]
    fn insert_past_end_appends() {
        let mut orders = SideOrders::new(ids(&["calendar"]), vec![]);
        let used = orders.insert_clamped(Side::Left, "media", 42);
        assert_eq!(used, 1);
        assert_eq!(orders.get(Side::Left), ids(&["calendar", "media"]).as_slice());
    }

    #[test]
    fn reinserting_at_same_position_keeps_order() {
        let mut orders = SideOrders::new(ids(&["calendar", "todolist"]), vec![]);
        orders.insert_clamped(Side::Left, "todolist", 1);
        assert_eq!(orders.get(Side::Left), ids(&["calendar", "todolist"]).as_slice());
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut orders = SideOrders::new(ids(&["calendar"]), ids(&["media"]));
        assert!(orders.remove("media"));
        assert!(!orders.remove("media"));
        assert!(!orders.is_empty());
        orders.clear();
        assert!(orders.is_empty());
    }
}
