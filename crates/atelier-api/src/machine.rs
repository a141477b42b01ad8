//! Machine configs and runtime descriptors.

use atelier_json::dto;

use crate::links::Link;

dto! {
    /// A machine instance bound to a running workspace.
    pub struct Machine {
        id: (string) = "id",
        workspace_id: (string) = "workspaceId",
        env_name: (string) = "envName",
        owner: (string) = "owner",
        status: (string) = "status",
        config: (dto MachineConfig) = "config",
        runtime: (dto MachineRuntimeInfo) = "runtime",
        links: (list dto Link) = "links",
    }
}

dto! {
    /// The requested shape of a machine.
    pub struct MachineConfig {
        name: (string) = "name",
        kind: (string) = "type",
        /// Whether this is the dev machine that hosts the workspace agent.
        dev: (bool) = "dev",
        source: (dto MachineSource) = "source",
        limits: (dto MachineLimits) = "limits",
        servers: (list dto ServerConf) = "servers",
        env_variables: (map string) = "envVariables",
        links: (list dto Link) = "links",
    }
}

dto! {
    /// Where the machine image or recipe comes from.
    pub struct MachineSource {
        kind: (string) = "type",
        location: (string) = "location",
        content: (string) = "content",
    }
}

dto! {
    /// Resource limits applied to a machine.
    pub struct MachineLimits {
        /// RAM allocation in megabytes.
        ram: (int) = "ram",
    }
}

dto! {
    /// A server a machine config declares.
    pub struct ServerConf {
        reference: (string) = "ref",
        port: (string) = "port",
        protocol: (string) = "protocol",
        path: (string) = "path",
    }
}

dto! {
    /// Live facts about a started machine.
    pub struct MachineRuntimeInfo {
        env_variables: (map string) = "envVariables",
        properties: (map string) = "properties",
        servers: (map dto Server) = "servers",
    }
}

dto! {
    /// A running server exposed by a machine.
    pub struct Server {
        reference: (string) = "ref",
        address: (string) = "address",
        protocol: (string) = "protocol",
        port: (string) = "port",
        url: (string) = "url",
        properties: (dto ServerProperties) = "properties",
    }
}

dto! {
    pub struct ServerProperties {
        path: (string) = "path",
        internal_address: (string) = "internalAddress",
        internal_url: (string) = "internalUrl",
    }
}

dto! {
    /// A process started inside a machine.
    pub struct MachineProcess {
        pid: (int) = "pid",
        name: (string) = "name",
        command_line: (string) = "commandLine",
        kind: (string) = "type",
        alive: (bool) = "alive",
        output_channel: (string) = "outputChannel",
        attributes: (map string) = "attributes",
        links: (list dto Link) = "links",
    }
}

dto! {
    /// A saved snapshot of a workspace machine.
    pub struct Snapshot {
        id: (string) = "id",
        kind: (string) = "type",
        namespace: (string) = "namespace",
        workspace_id: (string) = "workspaceId",
        description: (string) = "description",
        /// Creation time, epoch milliseconds.
        created: (int) = "created",
        dev: (bool) = "dev",
        env_name: (string) = "envName",
        machine_name: (string) = "machineName",
        links: (list dto Link) = "links",
    }
}
