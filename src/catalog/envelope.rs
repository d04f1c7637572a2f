use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Known list envelopes, in the order they are tried.
///
/// `untagged` makes serde attempt each variant in declaration order, which is
/// the priority order of the shapes the catalog API has been seen to return.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListShape {
    Bare(Vec<Value>),
    Data { data: Vec<Value> },
    Items { items: Vec<Value> },
    Nested { data: NestedShape },
    Results { results: Vec<Value> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NestedShape {
    Data { data: Vec<Value> },
    Items { items: Vec<Value> },
}

impl ListShape {
    fn into_resources(self) -> Vec<Value> {
        match self {
            ListShape::Bare(list)
            | ListShape::Data { data: list }
            | ListShape::Items { items: list }
            | ListShape::Nested {
                data: NestedShape::Data { data: list },
            }
            | ListShape::Nested {
                data: NestedShape::Items { items: list },
            }
            | ListShape::Results { results: list } => list,
        }
    }
}

/// Canonical view over a catalog response of unknown shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEnvelope {
    /// A non-empty resource list.
    List(Vec<Value>),
    /// A single resource.
    Single(Value),
    /// Nothing usable.
    Empty,
}

impl CatalogEnvelope {
    /// Decodes `value` against every known envelope shape. Never fails.
    ///
    /// A non-empty list wins. Otherwise the value is read as a single
    /// resource: its `data` object if it has one, else the value itself.
    /// Only `null` is [`CatalogEnvelope::Empty`].
    ///
    /// # Example
    ///
    /// ```
    /// let envelope = CatalogEnvelope::from_value(&json!({"data": {"items": []}}));
    /// assert_eq!(envelope, CatalogEnvelope::Single(json!({"items": []})));
    /// ```
    pub fn from_value(value: &Value) -> Self {
        if let Some(list) = decode_list(value).filter(|list| !list.is_empty()) {
            return CatalogEnvelope::List(list);
        }

        match value {
            Value::Null => CatalogEnvelope::Empty,
            Value::Object(map) => match map.get("data") {
                Some(data @ Value::Object(_)) => CatalogEnvelope::Single(data.clone()),
                _ => CatalogEnvelope::Single(value.clone()),
            },
            other => CatalogEnvelope::Single(other.clone()),
        }
    }

    pub fn into_list(self) -> Vec<Value> {
        match self {
            CatalogEnvelope::List(list) => list,
            CatalogEnvelope::Single(_) | CatalogEnvelope::Empty => Vec::new(),
        }
    }

    pub fn into_single(self) -> Option<Value> {
        match self {
            CatalogEnvelope::List(list) => list.into_iter().next(),
            CatalogEnvelope::Single(value) => Some(value),
            CatalogEnvelope::Empty => None,
        }
    }
}

/// Resources of the first list envelope `value` matches, or `None` when it
/// matches none of them.
fn decode_list(value: &Value) -> Option<Vec<Value>> {
    ListShape::deserialize(value)
        .ok()
        .map(ListShape::into_resources)
}

/// Extracts the resource list from a response; unrecognized shapes give an empty list.
pub fn resource_list(value: &Value) -> Vec<Value> {
    decode_list(value).unwrap_or_else(|| {
        // functionally "no resources", but it usually means the API changed shape
        warn!(
            kind = json_kind(value),
            "catalog response has no recognized list envelope"
        );
        Vec::new()
    })
}

/// First resource of a non-empty list response, else the `data` object of a
/// single-resource response, else the raw value. `None` only for `null`.
pub fn single_resource(value: &Value) -> Option<Value> {
    CatalogEnvelope::from_value(value).into_single()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
