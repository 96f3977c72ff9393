//! Relay-style connections: `edges[].node`, `totalCount`, `pageInfo`.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    #[serde(default)]
    pub cursor: Option<String>,
    pub node: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_previous_page: bool,
    #[serde(default)]
    pub start_cursor: Option<String>,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// Pagination arguments, merged into operation variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl PageArgs {
    pub fn first(count: u32) -> Self {
        Self {
            first: Some(count),
            ..Self::default()
        }
    }

    /// Variables for a document that pages several connections at once:
    /// each set field becomes `<prefix>First`, `<prefix>After`, ...
    pub fn prefixed(&self, prefix: &str) -> Map<String, Value> {
        let mut variables = Map::new();
        if let Some(first) = self.first {
            variables.insert(format!("{prefix}First"), Value::from(first));
        }
        if let Some(after) = &self.after {
            variables.insert(format!("{prefix}After"), Value::from(after.as_str()));
        }
        if let Some(last) = self.last {
            variables.insert(format!("{prefix}Last"), Value::from(last));
        }
        if let Some(before) = &self.before {
            variables.insert(format!("{prefix}Before"), Value::from(before.as_str()));
        }
        variables
    }
}

impl<T> Connection<T> {
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Arguments for the following forward page, if the server has one.
    ///
    /// `first` is carried over from `current` so page sizes stay stable.
    pub fn next_page(&self, current: &PageArgs) -> Option<PageArgs> {
        let info = self.page_info.as_ref()?;
        if !info.has_next_page {
            return None;
        }
        let cursor = info
            .end_cursor
            .clone()
            .or_else(|| self.edges.last().and_then(|edge| edge.cursor.clone()))?;
        Some(PageArgs {
            first: current.first,
            after: Some(cursor),
            last: None,
            before: None,
        })
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            total_count: None,
            page_info: None,
        }
    }
}
