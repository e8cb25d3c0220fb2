use crate::core::VID;
use std::ops::Index;

/// One value per node of a graph, index-aligned with [VID].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeState<V> {
    values: Vec<V>,
}

impl<V> NodeState<V> {
    pub fn new_from_values(values: Vec<V>) -> Self {
        Self { values }
    }

    pub fn new_empty() -> Self {
        Self { values: vec![] }
    }

    pub fn get(&self, v: VID) -> Option<&V> {
        self.values.get(v.index())
    }

    /// `(node, value)` pairs in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (VID, &V)> + '_ {
        self.values.iter().enumerate().map(|(i, v)| (VID(i), v))
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn into_values(self) -> Vec<V> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V> Index<VID> for NodeState<V> {
    type Output = V;

    fn index(&self, v: VID) -> &Self::Output {
        &self.values[v.index()]
    }
}

impl<V> FromIterator<V> for NodeState<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::new_from_values(iter.into_iter().collect())
    }
}
