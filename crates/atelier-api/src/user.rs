//! User accounts, profiles, and SSH key pairs.

use atelier_json::dto;

use crate::links::Link;

dto! {
    pub struct User {
        id: (string) = "id",
        email: (string) = "email",
        name: (string) = "name",
        aliases: (list string) = "aliases",
        password: (string) = "password",
        links: (list dto Link) = "links",
    }
}

dto! {
    pub struct Profile {
        user_id: (string) = "userId",
        email: (string) = "email",
        attributes: (map string) = "attributes",
        links: (list dto Link) = "links",
    }
}

dto! {
    /// An SSH key pair registered for a service, e.g. `vcs` or `machine`.
    pub struct SshPair {
        service: (string) = "service",
        name: (string) = "name",
        public_key: (string) = "publicKey",
        private_key: (string) = "privateKey",
        links: (list dto Link) = "links",
    }
}
