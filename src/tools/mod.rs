//! Tools module - operations the agent may invoke
//!
//! Contains the catalog queries, the order tool, call tracing, and the
//! tool registry.

pub mod catalog_tools;
pub mod order;
pub mod registry;
pub mod trace;

use std::sync::Arc;

use crate::catalog::Catalog;

pub use order::{ConsoleOrderSink, Order, OrderSink};
pub use registry::{Tool, ToolRegistry};
pub use trace::{console_trace, traced, TraceSink};

/// Build the registry of sales tools, each wrapped with call tracing
pub fn sales_tools(
    catalog: Arc<Catalog>,
    orders: Arc<dyn OrderSink>,
    trace: TraceSink,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    for tool in [
        order::create_order_tool(orders),
        catalog_tools::get_by_name_tool(catalog.clone()),
        catalog_tools::list_names_tool(catalog),
    ] {
        registry.register(traced(tool, trace.clone()));
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ToolCall;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct NullSink;

    impl OrderSink for NullSink {
        fn record(&self, _order: Order) {}
    }

    #[test]
    fn test_sales_tools_are_traced() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let trace: TraceSink =
            Arc::new(move |name: &str| log.lock().unwrap().push(name.to_string()));

        let registry = sales_tools(Arc::new(Catalog::builtin()), Arc::new(NullSink), trace);
        assert_eq!(registry.len(), 3);

        for name in [
            catalog_tools::LIST_NAMES_TOOL,
            catalog_tools::GET_BY_NAME_TOOL,
            order::CREATE_ORDER_TOOL,
        ] {
            let call = ToolCall::new(name, json!({"name": "Pulse 5", "phone": "1"}));
            registry.execute(&call).unwrap();
        }

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["get_all_phone_names", "get_phone_data_by_name", "create_order"]
        );
    }

    #[test]
    fn test_catalog_is_unchanged_by_orders() {
        let catalog = Arc::new(Catalog::builtin());
        let before: Vec<_> = catalog.iter().cloned().collect();

        let registry = sales_tools(catalog.clone(), Arc::new(NullSink), Arc::new(|_: &str| {}));
        registry
            .execute(&ToolCall::new(
                order::CREATE_ORDER_TOOL,
                json!({"name": "Nova X1", "phone": "555"}),
            ))
            .unwrap();

        let after: Vec<_> = catalog.iter().cloned().collect();
        assert_eq!(before, after);
    }
}
