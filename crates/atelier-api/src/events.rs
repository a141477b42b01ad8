//! Status events the backend pushes while workspaces and machines run.
//!
//! These arrive over the notification channel; only their shapes live
//! here. The `error` field is populated on `ERROR`-typed events.

use atelier_json::dto;

dto! {
    pub struct WorkspaceStatusEvent {
        event_type: (string) = "eventType",
        workspace_id: (string) = "workspaceId",
        prev_status: (string) = "prevStatus",
        error: (string) = "error",
    }
}

dto! {
    pub struct MachineStatusEvent {
        event_type: (string) = "eventType",
        machine_id: (string) = "machineId",
        workspace_id: (string) = "workspaceId",
        machine_name: (string) = "machineName",
        dev: (bool) = "dev",
        error: (string) = "error",
    }
}

dto! {
    pub struct MachineProcessEvent {
        event_type: (string) = "eventType",
        machine_id: (string) = "machineId",
        process_id: (int) = "processId",
        error: (string) = "error",
    }
}
