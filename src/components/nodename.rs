use bevy_ecs::prelude::Component;

/// Name of the level node an entity was spawned from. Used in logs and reports.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeName(pub String);

impl NodeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
