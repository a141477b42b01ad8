//! Stack records: reusable workspace starting points.

use atelier_json::dto;

use crate::links::Link;
use crate::workspace::WorkspaceConfig;

dto! {
    /// A stack groups a workspace config with its origin and components.
    pub struct Stack {
        id: (string) = "id",
        name: (string) = "name",
        description: (string) = "description",
        /// Visibility scope, `general` or `advanced`.
        scope: (string) = "scope",
        creator: (string) = "creator",
        tags: (list string) = "tags",
        workspace_config: (dto WorkspaceConfig) = "workspaceConfig",
        source: (dto StackSource) = "source",
        components: (list dto StackComponent) = "components",
        links: (list dto Link) = "links",
    }
}

dto! {
    pub struct StackComponent {
        name: (string) = "name",
        version: (string) = "version",
    }
}

dto! {
    pub struct StackSource {
        kind: (string) = "type",
        origin: (string) = "origin",
    }
}
