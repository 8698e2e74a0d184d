use serde_json::{Map, Value};

/// Converts a raw `data` payload into its client side model
///
/// The shape is preserved, except that any Relay connection
/// (`{ edges: [{ node }] }`) collapses into the list of its nodes.
pub fn hydrate(value: Value) -> Value {
    match value {
        Value::Object(map) => match connection_nodes(map) {
            Ok(nodes) => Value::Array(nodes.into_iter().map(hydrate).collect()),
            Err(map) => Value::Object(map.into_iter().map(|(k, v)| (k, hydrate(v))).collect()),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(hydrate).collect()),
        other => other,
    }
}

/// Pulls the nodes out of a connection, handing the map back untouched if it
/// isn't one
fn connection_nodes(mut map: Map<String, Value>) -> Result<Vec<Value>, Map<String, Value>> {
    let is_connection = match map.get("edges") {
        Some(Value::Array(edges)) => edges.iter().all(|edge| edge.get("node").is_some()),
        _ => false,
    };
    if !is_connection {
        return Err(map);
    }

    match map.remove("edges") {
        Some(Value::Array(edges)) => Ok(edges
            .into_iter()
            .filter_map(|edge| match edge {
                Value::Object(mut edge) => edge.remove("node"),
                _ => None,
            })
            .collect()),
        _ => Err(map),
    }
}
