//! Wire envelope for GraphQL over HTTP.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::ClientError;
use crate::error::GraphqlErrors;

/// Request body POSTed to a GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    pub variables: Value,
}

impl GraphqlRequest {
    /// Builds a request, deriving `operationName` from the document.
    ///
    /// `Null` variables are sent as `{}` so servers that reject a null
    /// variables map accept the request.
    pub fn new(query: impl Into<String>, variables: Value) -> Self {
        let query = query.into();
        let operation_name = operation_name(&query);
        let variables = match variables {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        Self {
            query,
            operation_name,
            variables,
        }
    }

    /// Name used in logs and errors; `anonymous` for unnamed documents.
    pub fn label(&self) -> &str {
        self.operation_name.as_deref().unwrap_or("anonymous")
    }
}

/// Decoded `{data, errors}` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// Any reported error fails the whole call, even alongside partial data.
    pub fn into_result(self) -> Result<Value, ClientError> {
        if !self.errors.is_empty() {
            return Err(ClientError::Graphql(GraphqlErrors(self.errors)));
        }
        match self.data {
            Some(Value::Null) | None => Err(ClientError::MissingData),
            Some(data) => Ok(data),
        }
    }
}

/// One entry of the response `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path: Vec<PathSegment>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

/// Coarse classification of a GraphQL error by its `extensions.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthenticated,
    Forbidden,
    NotFound,
    InvalidInput,
    Other,
}

impl GraphqlError {
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(Value::as_str)
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code() {
            Some("UNAUTHENTICATED") => ErrorKind::Unauthenticated,
            Some("FORBIDDEN" | "UNAUTHORIZED" | "ACCESS_DENIED") => ErrorKind::Forbidden,
            Some("NOT_FOUND") => ErrorKind::NotFound,
            Some("BAD_USER_INPUT" | "INVALID_ARGUMENT" | "GRAPHQL_VALIDATION_FAILED") => {
                ErrorKind::InvalidInput
            }
            _ => ErrorKind::Other,
        }
    }

    /// Dotted rendering of `path`, e.g. `createAsset.assetEdge.node`.
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(|segment| match segment {
                PathSegment::Field(name) => name.clone(),
                PathSegment::Index(index) => index.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl std::fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.path.is_empty() {
            write!(f, " (at {})", self.path_string())?;
        }
        if let Some(code) = self.code() {
            write!(f, " [{code}]")?;
        }
        Ok(())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Extracts the name of the first named operation in a GraphQL document.
///
/// Returns `None` for anonymous operations (`query { ... }`) and shorthand
/// selection sets (`{ ... }`). Leading fragment definitions are skipped.
pub fn operation_name(document: &str) -> Option<String> {
    let stripped = strip_comments_and_strings(document);
    let mut rest = stripped.trim_start();

    loop {
        let keyword = leading_name(rest);
        match keyword {
            "query" | "mutation" | "subscription" => {
                let name = leading_name(rest[keyword.len()..].trim_start());
                return (!name.is_empty()).then(|| name.to_string());
            }
            "fragment" => rest = skip_selection_set(rest)?.trim_start(),
            _ => return None,
        }
    }
}

/// Drops comments and empties string and block-string literals, so that
/// `#`, `{` and `}` inside a literal never reach the scanner.
fn strip_comments_and_strings(document: &str) -> String {
    let mut out = String::with_capacity(document.len());
    let mut rest = document;
    while let Some(c) = rest.chars().next() {
        if let Some(body) = rest.strip_prefix("\"\"\"") {
            out.push_str("\"\"");
            rest = block_string_end(body).map_or("", |end| &body[end + 3..]);
        } else if c == '"' {
            let body = &rest[1..];
            out.push_str("\"\"");
            rest = string_end(body).map_or("", |end| &body[end + 1..]);
        } else if c == '#' {
            rest = rest.find('\n').map_or("", |end| &rest[end..]);
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

fn string_end(body: &str) -> Option<usize> {
    let mut escaped = false;
    for (offset, c) in body.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(offset),
            _ => {}
        }
    }
    None
}

/// Offset of the closing `"""`; `\"""` is an escaped delimiter.
fn block_string_end(body: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = body[from..].find("\"\"\"") {
        let at = from + found;
        if !body[..at].ends_with('\\') {
            return Some(at);
        }
        from = at + 3;
    }
    None
}

fn leading_name(s: &str) -> &str {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    &s[..end]
}

fn skip_selection_set(s: &str) -> Option<&str> {
    let start = s.find('{')?;
    let mut depth = 0usize;
    for (offset, c) in s[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[start + offset + 1..]);
                }
            }
            _ => {}
        }
    }
    None
}
