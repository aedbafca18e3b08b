//! Order tool
//!
//! Orders are not validated or stored: the product name is not checked against
//! the catalog and the phone number is taken as-is. Each call hands exactly one
//! order to the sink and returns nothing.

use colored::Colorize;
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::core::ToolDefinition;
use crate::tools::registry::{required_string, Tool};

pub const CREATE_ORDER_TOOL: &str = "create_order";

/// A customer's request to buy a phone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Phone model name as given by the model
    pub product: String,
    /// Customer contact number
    pub phone: String,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!!! NEW ORDER !!! {} {}", self.product, self.phone)
    }
}

/// Destination for placed orders
pub trait OrderSink: Send + Sync {
    fn record(&self, order: Order);
}

/// Prints each order to the console
#[derive(Debug, Clone, Default)]
pub struct ConsoleOrderSink;

impl OrderSink for ConsoleOrderSink {
    fn record(&self, order: Order) {
        info!(product = %order.product, phone = %order.phone, "order placed");
        println!("{}", order.to_string().bold());
    }
}

/// Tool recording a phone order
pub fn create_order_tool(sink: Arc<dyn OrderSink>) -> Tool {
    Tool::new(
        ToolDefinition::function(
            CREATE_ORDER_TOOL,
            "Creates a new order for a phone.",
            json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Phone model name"
                    },
                    "phone": {
                        "type": "string",
                        "description": "Customer's phone number"
                    }
                },
                "required": ["name", "phone"]
            }),
        ),
        move |call| {
            let order = Order {
                product: required_string(call, "name")?,
                phone: required_string(call, "phone")?,
            };
            sink.record(order);
            Ok(Value::Null)
        },
    )
}
