use crate::command::Dispatch;
use crate::error::{EditorError, Result};
use crate::picture::GridPos;
use crate::state::AppState;

mod draw;
mod fill;
mod pick;
mod rectangle;

pub use draw::draw;
pub use fill::{fill, flood_region};
pub use pick::pick;
pub use rectangle::{rectangle, rectangle_edit};

/// Called with each new drag position while a gesture continues.
///
/// Receives the state as it is at the time of the call, never a copy captured
/// when the gesture started.
pub type Continuation = Box<dyn FnMut(GridPos, &AppState, &mut dyn Dispatch) -> Result<()>>;

/// A tool reacts to the start of a gesture and may ask to follow the drag.
pub type ToolFn = fn(GridPos, &AppState, &mut dyn Dispatch) -> Result<Option<Continuation>>;

/// Tools by name, in registration order
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<(String, ToolFn)>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard tool set: draw, fill, rectangle and pick
    pub fn base() -> Self {
        let mut registry = Self::new();
        registry.register("draw", draw);
        registry.register("fill", fill);
        registry.register("rectangle", rectangle);
        registry.register("pick", pick);
        registry
    }

    /// Add a tool, replacing any tool already registered under `name`
    pub fn register(&mut self, name: impl Into<String>, tool: ToolFn) {
        let name = name.into();
        match self.tools.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = tool,
            None => self.tools.push((name, tool)),
        }
    }

    pub fn get(&self, name: &str) -> Result<ToolFn> {
        self.tools
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, tool)| *tool)
            .ok_or_else(|| EditorError::UnknownTool(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: GridPos, _: &AppState, _: &mut dyn Dispatch) -> Result<Option<Continuation>> {
        Ok(None)
    }

    #[test]
    fn test_base_registry_order() {
        let registry = ToolRegistry::base();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["draw", "fill", "rectangle", "pick"]);
    }

    #[test]
    fn test_unknown_tool() {
        let registry = ToolRegistry::base();
        assert!(matches!(
            registry.get("spray"),
            Err(EditorError::UnknownTool(name)) if name == "spray"
        ));
    }

    #[test]
    fn test_register_replaces_by_name() {
        let mut registry = ToolRegistry::base();
        registry.register("fill", noop);
        registry.register("spray", noop);
        assert_eq!(registry.len(), 5);
        assert!(registry.contains("spray"));
        assert_eq!(registry.names().nth(1), Some("fill"));
    }
}
