/// Nodes with no in-graph dependencies, in declaration order.
///
/// Entry points can run as soon as a run starts: they either declare no inputs
/// or read only from external sources fed by the runtime.
///
/// ```
/// use taskgraph::graph::EntryPoints;
///
/// let entry_points = EntryPoints::from(vec![
///     "stock_data".to_string(),
///     "stock_symbol".to_string(),
/// ]);
///
/// assert_eq!(entry_points.len(), 2);
/// assert!(entry_points.contains("stock_symbol"));
/// let ids: Vec<String> = entry_points.into();
/// assert_eq!(ids[0], "stock_data");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPoints(pub Vec<String>);

impl EntryPoints {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, node_id: String) {
        self.0.push(node_id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.0.iter().any(|id| id == node_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for EntryPoints {
    fn from(entry_points: Vec<String>) -> Self {
        Self(entry_points)
    }
}

impl From<EntryPoints> for Vec<String> {
    fn from(value: EntryPoints) -> Self {
        value.0
    }
}
