//! Factory records: shareable workspace templates.

use atelier_json::dto;

use crate::links::Link;
use crate::workspace::WorkspaceConfig;

dto! {
    /// A factory: a workspace config plus creation policies and branding.
    pub struct Factory {
        /// Factory format version.
        v: (string) = "v",
        id: (string) = "id",
        name: (string) = "name",
        workspace: (dto WorkspaceConfig) = "workspace",
        policies: (dto Policies) = "policies",
        creator: (dto Author) = "creator",
        button: (dto Button) = "button",
        ide: (dto Ide) = "ide",
        links: (list dto Link) = "links",
    }
}

dto! {
    /// Constraints on who may use the factory, and when.
    pub struct Policies {
        referer: (string) = "referer",
        /// Validity window start, epoch milliseconds.
        since: (int) = "since",
        /// Validity window end, epoch milliseconds.
        until: (int) = "until",
        create: (string) = "create",
    }
}

dto! {
    pub struct Author {
        user_id: (string) = "userId",
        name: (string) = "name",
        email: (string) = "email",
        created: (int) = "created",
    }
}

dto! {
    pub struct Button {
        kind: (string) = "type",
        attributes: (dto ButtonAttributes) = "attributes",
    }
}

dto! {
    pub struct ButtonAttributes {
        color: (string) = "color",
        counter: (bool) = "counter",
        logo: (string) = "logo",
        style: (string) = "style",
    }
}

dto! {
    /// IDE lifecycle hooks a factory may configure.
    pub struct Ide {
        on_app_loaded: (dto OnAppLoaded) = "onAppLoaded",
        on_projects_loaded: (dto OnProjectsLoaded) = "onProjectsLoaded",
        on_app_closed: (dto OnAppClosed) = "onAppClosed",
    }
}

dto! {
    pub struct OnAppLoaded {
        actions: (list dto IdeAction) = "actions",
    }
}

dto! {
    pub struct OnProjectsLoaded {
        actions: (list dto IdeAction) = "actions",
    }
}

dto! {
    pub struct OnAppClosed {
        actions: (list dto IdeAction) = "actions",
    }
}

dto! {
    pub struct IdeAction {
        id: (string) = "id",
        properties: (map string) = "properties",
    }
}
