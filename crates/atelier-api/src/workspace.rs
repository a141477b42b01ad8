//! Workspace descriptors: the root aggregate of the REST surface.
//!
//! A [`Workspace`] embeds its [`WorkspaceConfig`] and, while running, a
//! [`WorkspaceRuntime`]; the config composes environments, commands, and
//! project configs recursively. Construction is plain tree composition,
//! bottom-up from the nested payload.

use atelier_json::dto;

use crate::links::Link;
use crate::machine::Machine;
use crate::project::ProjectConfig;

dto! {
    /// A workspace as returned by the master API.
    pub struct Workspace {
        id: (string) = "id",
        namespace: (string) = "namespace",
        /// Lifecycle status, e.g. `STARTING`, `RUNNING`, `STOPPED`.
        status: (string) = "status",
        temporary: (bool) = "temporary",
        attributes: (map string) = "attributes",
        config: (dto WorkspaceConfig) = "config",
        runtime: (dto WorkspaceRuntime) = "runtime",
        links: (list dto Link) = "links",
    }
}

dto! {
    /// The persistent part of a workspace.
    pub struct WorkspaceConfig {
        name: (string) = "name",
        description: (string) = "description",
        default_env: (string) = "defaultEnv",
        commands: (list dto Command) = "commands",
        projects: (list dto ProjectConfig) = "projects",
        environments: (map dto Environment) = "environments",
        links: (list dto Link) = "links",
    }
}

dto! {
    /// One runnable environment of a workspace config.
    pub struct Environment {
        recipe: (dto Recipe) = "recipe",
        machines: (map dto EnvironmentMachine) = "machines",
    }
}

dto! {
    /// How an environment is built: an inline recipe or a location.
    pub struct Recipe {
        kind: (string) = "type",
        content_type: (string) = "contentType",
        content: (string) = "content",
        location: (string) = "location",
    }
}

dto! {
    /// Per-machine settings inside an environment.
    pub struct EnvironmentMachine {
        agents: (list string) = "agents",
        servers: (map dto ServerConf2) = "servers",
        attributes: (map string) = "attributes",
    }
}

dto! {
    /// A server an environment machine exposes.
    pub struct ServerConf2 {
        port: (string) = "port",
        protocol: (string) = "protocol",
        properties: (map string) = "properties",
    }
}

dto! {
    /// A named command runnable inside the workspace.
    pub struct Command {
        name: (string) = "name",
        command_line: (string) = "commandLine",
        kind: (string) = "type",
        attributes: (map string) = "attributes",
    }
}

dto! {
    /// The live state of a started workspace.
    pub struct WorkspaceRuntime {
        active_env: (string) = "activeEnv",
        root_folder: (string) = "rootFolder",
        dev_machine: (dto Machine) = "devMachine",
        machines: (list dto Machine) = "machines",
        links: (list dto Link) = "links",
    }
}
