//! Debugger sessions, events, and inspection records.

use atelier_json::dto;

dto! {
    /// An attached debug session.
    pub struct DebugSession {
        id: (string) = "id",
        kind: (string) = "type",
        debugger_info: (dto DebuggerInfo) = "debuggerInfo",
    }
}

dto! {
    /// Facts about the debugger process behind a session.
    pub struct DebuggerInfo {
        host: (string) = "host",
        port: (int) = "port",
        name: (string) = "name",
        version: (string) = "version",
        pid: (int) = "pid",
        file: (string) = "file",
    }
}

dto! {
    /// An event pushed by the debugger: suspension, breakpoint activation,
    /// or disconnect. The populated fields depend on the event type.
    pub struct DebuggerEvent {
        kind: (string) = "type",
        location: (dto Location) = "location",
        breakpoint: (dto Breakpoint) = "breakpoint",
    }
}

dto! {
    pub struct Breakpoint {
        location: (dto Location) = "location",
        enabled: (bool) = "enabled",
        condition: (string) = "condition",
    }
}

dto! {
    /// A source location the debugger can point at.
    pub struct Location {
        target: (string) = "target",
        line_number: (int) = "lineNumber",
        resource_path: (string) = "resourcePath",
        resource_project_path: (string) = "resourceProjectPath",
        external_resource_id: (int) = "externalResourceId",
    }
}

dto! {
    /// A variable visible in the current frame. Structured values nest
    /// their members recursively.
    pub struct Variable {
        name: (string) = "name",
        value: (string) = "value",
        kind: (string) = "type",
        variable_path: (dto VariablePath) = "variablePath",
        primitive: (bool) = "primitive",
        variables: (list dto Variable) = "variables",
    }
}

dto! {
    /// Path from the frame root to one variable.
    pub struct VariablePath {
        path: (list string) = "path",
    }
}

dto! {
    pub struct StackFrameDump {
        fields: (list dto Variable) = "fields",
        variables: (list dto Variable) = "variables",
    }
}

dto! {
    /// An evaluated expression result.
    pub struct SimpleValue {
        value: (string) = "value",
        variables: (list dto Variable) = "variables",
    }
}

dto! {
    pub struct ResumeAction {
        kind: (string) = "type",
    }
}

dto! {
    /// Step over/into/out, selected by the action type.
    pub struct StepAction {
        kind: (string) = "type",
    }
}
