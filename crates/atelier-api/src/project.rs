//! Project configs and the workspace file tree.

use atelier_json::dto;

use crate::links::Link;

dto! {
    /// Configuration of one project registered in a workspace.
    pub struct ProjectConfig {
        name: (string) = "name",
        path: (string) = "path",
        description: (string) = "description",
        kind: (string) = "type",
        mixins: (list string) = "mixins",
        /// Project-type attributes; each key maps to a list of values.
        attributes: (map list string) = "attributes",
        source: (dto SourceStorage) = "source",
        problems: (list dto ProjectProblem) = "problems",
        links: (list dto Link) = "links",
    }
}

dto! {
    /// Where a project's sources are imported from.
    pub struct SourceStorage {
        kind: (string) = "type",
        location: (string) = "location",
        parameters: (map string) = "parameters",
    }
}

dto! {
    pub struct ProjectProblem {
        code: (int) = "code",
        message: (string) = "message",
    }
}

dto! {
    /// A file or folder entry inside a project.
    pub struct ItemReference {
        name: (string) = "name",
        kind: (string) = "type",
        path: (string) = "path",
        project: (string) = "project",
        /// Last modification time, epoch milliseconds.
        modified: (int) = "modified",
        content_length: (int) = "contentLength",
        attributes: (map string) = "attributes",
        links: (list dto Link) = "links",
    }
}

dto! {
    /// A node of the project file tree. Children are owned by their
    /// parent; the structure is a strict tree with no back-references.
    pub struct TreeElement {
        node: (dto ItemReference) = "node",
        children: (list dto TreeElement) = "children",
    }
}

dto! {
    /// A registered project type.
    pub struct ProjectType {
        id: (string) = "id",
        display_name: (string) = "displayName",
        primaryable: (bool) = "primaryable",
        mixable: (bool) = "mixable",
        parents: (list string) = "parents",
        attributes: (list dto AttributeDescriptor) = "attributes",
    }
}

dto! {
    /// One attribute a project type declares.
    pub struct AttributeDescriptor {
        name: (string) = "name",
        description: (string) = "description",
        required: (bool) = "required",
        variable: (bool) = "variable",
        values: (list string) = "values",
    }
}

dto! {
    /// A registered source importer.
    pub struct ProjectImporter {
        id: (string) = "id",
        category: (string) = "category",
        description: (string) = "description",
        internal: (bool) = "internal",
    }
}
