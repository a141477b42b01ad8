//! HAL-style hypermedia descriptors shared by every REST record.

use atelier_json::dto;

dto! {
    /// A hyperlink to a related REST operation.
    pub struct Link {
        href: (string) = "href",
        rel: (string) = "rel",
        method: (string) = "method",
        produces: (string) = "produces",
        consumes: (string) = "consumes",
        request_body: (dto RequestBodyDescriptor) = "requestBody",
        parameters: (list dto LinkParameter) = "parameters",
    }
}

dto! {
    /// One query or path parameter accepted by a [`Link`].
    pub struct LinkParameter {
        name: (string) = "name",
        default_value: (string) = "defaultValue",
        description: (string) = "description",
        /// Parameter kind on the wire, e.g. `String`, `Number`, `Array`.
        kind: (string) = "type",
        required: (bool) = "required",
        valid: (list string) = "valid",
    }
}

dto! {
    /// Description of the request body a [`Link`] expects.
    pub struct RequestBodyDescriptor {
        description: (string) = "description",
    }
}

dto! {
    /// Error payload returned by the backend.
    pub struct ServiceError {
        message: (string) = "message",
    }
}

dto! {
    /// Build and version facts reported by the master API root.
    pub struct ApiInfo {
        specification_vendor: (string) = "specificationVendor",
        implementation_vendor: (string) = "implementationVendor",
        specification_title: (string) = "specificationTitle",
        specification_version: (string) = "specificationVersion",
        implementation_version: (string) = "implementationVersion",
        scm_revision: (string) = "scmRevision",
        ide_version: (string) = "ideVersion",
    }
}
