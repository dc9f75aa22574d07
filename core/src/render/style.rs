/// Graphviz attributes applied to the whole graph, every node and every edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStyle {
    pub graph: Vec<(String, String)>,
    pub nodes: Vec<(String, String)>,
    pub edges: Vec<(String, String)>,
}

impl GraphStyle {
    /// No attributes at all; graphviz defaults apply.
    pub fn plain() -> Self {
        Self {
            graph: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        set(&mut self.graph, "label", title);
        self
    }
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            graph: attrs(&[
                ("label", "Network Map"),
                ("fontsize", "16"),
                ("fontcolor", "white"),
                ("bgcolor", "#3F3F3F"),
                ("rankdir", "BT"),
            ]),
            nodes: attrs(&[
                ("fontname", "Helvetica"),
                ("shape", "box"),
                ("fontcolor", "white"),
                ("color", "#006699"),
                ("style", "filled"),
                ("fillcolor", "#006699"),
                ("margin", "0.4"),
            ]),
            edges: attrs(&[
                ("style", "dashed"),
                ("color", "green"),
                ("arrowhead", "open"),
                ("fontname", "Courier"),
                ("fontsize", "14"),
                ("fontcolor", "white"),
            ]),
        }
    }
}

fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn set(list: &mut Vec<(String, String)>, key: &str, value: &str) {
    match list.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value.to_string(),
        None => list.push((key.to_string(), value.to_string())),
    }
}
