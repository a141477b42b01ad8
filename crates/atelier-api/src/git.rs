//! Git command requests and responses.
//!
//! Requests mirror the git service endpoints one-to-one; most are built
//! fluently and sent as-is, so nearly every field is optional on the wire.

use atelier_json::dto;

dto! {
    pub struct CloneRequest {
        remote_uri: (string) = "remoteUri",
        remote_name: (string) = "remoteName",
        working_dir: (string) = "workingDir",
        branches_to_fetch: (list string) = "branchesToFetch",
        /// Timeout in seconds; zero means the server default.
        timeout: (int) = "timeout",
    }
}

dto! {
    pub struct AddRequest {
        file_pattern: (list string) = "filePattern",
        update: (bool) = "update",
    }
}

dto! {
    pub struct CommitRequest {
        message: (string) = "message",
        files: (list string) = "files",
        all: (bool) = "all",
        amend: (bool) = "amend",
    }
}

dto! {
    pub struct PushRequest {
        ref_spec: (list string) = "refSpec",
        remote: (string) = "remote",
        force: (bool) = "force",
        timeout: (int) = "timeout",
    }
}

dto! {
    pub struct PushResponse {
        command_output: (string) = "commandOutput",
    }
}

dto! {
    pub struct PullRequest {
        ref_spec: (string) = "refSpec",
        remote: (string) = "remote",
        timeout: (int) = "timeout",
    }
}

dto! {
    pub struct PullResponse {
        command_output: (string) = "commandOutput",
    }
}

dto! {
    pub struct FetchRequest {
        ref_spec: (list string) = "refSpec",
        remote: (string) = "remote",
        remove_deleted_refs: (bool) = "removeDeletedRefs",
        timeout: (int) = "timeout",
    }
}

dto! {
    pub struct CheckoutRequest {
        name: (string) = "name",
        start_point: (string) = "startPoint",
        create_new: (bool) = "createNew",
        track_branch: (string) = "trackBranch",
        files: (list string) = "files",
        no_track: (bool) = "noTrack",
    }
}

dto! {
    pub struct BranchCreateRequest {
        name: (string) = "name",
        start_point: (string) = "startPoint",
    }
}

dto! {
    /// A local or remote branch.
    pub struct Branch {
        name: (string) = "name",
        display_name: (string) = "displayName",
        active: (bool) = "active",
        remote: (bool) = "remote",
    }
}

dto! {
    /// A tag. The smallest record in the catalog.
    pub struct Tag {
        name: (string) = "name",
    }
}

dto! {
    pub struct TagCreateRequest {
        name: (string) = "name",
        commit: (string) = "commit",
        message: (string) = "message",
        force: (bool) = "force",
    }
}

dto! {
    pub struct Remote {
        name: (string) = "name",
        url: (string) = "url",
    }
}

dto! {
    pub struct RemoteAddRequest {
        name: (string) = "name",
        url: (string) = "url",
        branches: (list string) = "branches",
    }
}

dto! {
    /// One commit in a log.
    pub struct Revision {
        branch: (string) = "branch",
        id: (string) = "id",
        message: (string) = "message",
        /// Commit time, epoch milliseconds.
        commit_time: (int) = "commitTime",
        committer: (dto GitUser) = "committer",
    }
}

dto! {
    pub struct GitUser {
        name: (string) = "name",
        email: (string) = "email",
    }
}

dto! {
    pub struct LogResponse {
        commits: (list dto Revision) = "commits",
    }
}

dto! {
    /// Working-tree status grouped by change kind.
    pub struct Status {
        branch_name: (string) = "branchName",
        clean: (bool) = "clean",
        added: (list string) = "added",
        changed: (list string) = "changed",
        removed: (list string) = "removed",
        missing: (list string) = "missing",
        modified: (list string) = "modified",
        untracked: (list string) = "untracked",
        untracked_folders: (list string) = "untrackedFolders",
        conflicting: (list string) = "conflicting",
    }
}

dto! {
    pub struct MergeRequest {
        commit: (string) = "commit",
    }
}

dto! {
    pub struct MergeResult {
        new_head: (string) = "newHead",
        merge_status: (string) = "mergeStatus",
        merged_commits: (list string) = "mergedCommits",
        conflicts: (list string) = "conflicts",
        failed: (list string) = "failed",
    }
}

dto! {
    pub struct ResetRequest {
        commit: (string) = "commit",
        /// Reset mode: `SOFT`, `MIXED`, or `HARD`.
        kind: (string) = "type",
        file_pattern: (list string) = "filePattern",
    }
}

dto! {
    pub struct RmRequest {
        items: (list string) = "items",
        cached: (bool) = "cached",
    }
}

dto! {
    pub struct ShowFileContentResponse {
        content: (string) = "content",
    }
}
