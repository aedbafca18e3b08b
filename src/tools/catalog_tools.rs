//! Catalog tools - read-only product queries
//!
//! A lookup miss is returned as data, not as an error, so the model can tell
//! the customer the phone does not exist and carry on.

use serde_json::{json, Value};
use std::sync::Arc;

use crate::catalog::{Catalog, NAME_DELIMITER};
use crate::core::ToolDefinition;
use crate::tools::registry::{required_string, Tool};

pub const LIST_NAMES_TOOL: &str = "get_all_phone_names";
pub const GET_BY_NAME_TOOL: &str = "get_phone_data_by_name";

/// Value returned when no product matches the requested name
pub fn not_found() -> Value {
    json!({ "error": "not found" })
}

/// Comma-separated names of every phone in the catalog
pub fn all_phone_names(catalog: &Catalog) -> String {
    catalog.joined_names(NAME_DELIMITER)
}

/// Full record for an exactly named phone, or the not-found value
pub fn phone_data_by_name(catalog: &Catalog, name: &str) -> Value {
    catalog
        .find(name)
        .map(|product| product.to_value())
        .unwrap_or_else(not_found)
}

/// Tool listing every phone name
pub fn list_names_tool(catalog: Arc<Catalog>) -> Tool {
    Tool::new(
        ToolDefinition::function(
            LIST_NAMES_TOOL,
            "Returns the model names of all phones for sale as a comma-separated list.",
            json!({
                "type": "object",
                "properties": {}
            }),
        ),
        move |_call| Ok(Value::String(all_phone_names(&catalog))),
    )
}

/// Tool returning one phone's price, specs and description
pub fn get_by_name_tool(catalog: Arc<Catalog>) -> Tool {
    Tool::new(
        ToolDefinition::function(
            GET_BY_NAME_TOOL,
            "Returns the price in dollars, specifications and description of a phone \
             given its exact model name.",
            json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Exact model name of the phone"
                    }
                },
                "required": ["name"]
            }),
        ),
        move |call| {
            let name = required_string(call, "name")?;
            Ok(phone_data_by_name(&catalog, &name))
        },
    )
}
