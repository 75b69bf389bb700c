//! ActionRegistry — name → operation lookup for the agent loop.
//!
//! A pure lookup table, fixed at startup. The engine resolves the
//! descriptor's `function_name` here before any invocation; an absent name
//! is the engine's `UnknownAction` condition, detected without side effects.

use std::collections::HashMap;

use async_trait::async_trait;

use super::errors::ActionError;

/// An external operation invocable by name with a JSON parameter bag.
///
/// Each implementation deserializes the bag into its own typed parameter
/// struct and rejects mismatches as [`ActionError::InvalidParameters`]
/// before performing any I/O.
#[async_trait]
pub trait Action: Send + Sync {
    /// The name the model uses in its action descriptors.
    fn name(&self) -> &str;

    /// Execute the operation with the descriptor's parameters.
    async fn invoke(&self, params: &serde_json::Value) -> Result<serde_json::Value, ActionError>;
}

/// Fixed mapping from action names to operations.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Box<dyn Action>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action under its own name. Replaces any previous entry
    /// with the same name.
    pub fn register(&mut self, action: Box<dyn Action>) {
        self.actions.insert(action.name().to_string(), action);
    }

    /// Look up an action by name.
    pub fn get(&self, name: &str) -> Option<&dyn Action> {
        self.actions.get(name).map(|a| a.as_ref())
    }

    /// Names of all registered actions, for logging and prompt assembly.
    pub fn names(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the registry has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoAction;

    #[async_trait]
    impl Action for EchoAction {
        fn name(&self) -> &str {
            "echo"
        }

        async fn invoke(
            &self,
            params: &serde_json::Value,
        ) -> Result<serde_json::Value, ActionError> {
            Ok(params.clone())
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ActionRegistry::new();
        registry.register(Box::new(EchoAction));
        assert!(registry.get("echo").is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_name_is_none() {
        let registry = ActionRegistry::new();
        assert!(registry.get("nonexistent_tool").is_none());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_invoke_through_lookup() {
        let mut registry = ActionRegistry::new();
        registry.register(Box::new(EchoAction));

        let params = serde_json::json!({"k": "v"});
        let action = registry.get("echo").unwrap();
        let result = action.invoke(&params).await.unwrap();
        assert_eq!(result, params);
    }

    #[test]
    fn test_reregister_replaces() {
        let mut registry = ActionRegistry::new();
        registry.register(Box::new(EchoAction));
        registry.register(Box::new(EchoAction));
        assert_eq!(registry.len(), 1);
    }
}
