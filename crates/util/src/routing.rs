//! Request routing for the generated RPC client.
//!
//! Project-scoped admin calls authenticate with the project secret key
//! instead of the operator session token. The client interceptor consults
//! [`needs_secret_key`] per outgoing call to decide which header to
//! attach.

/// RPC methods that operate within a single project and therefore carry
/// the project secret key.
pub const SECRET_KEY_METHODS: &[&str] = &[
    "ListDocuments",
    "GetDocument",
    "GetDocuments",
    "GetSnapshotMeta",
    "SearchDocuments",
    "RemoveDocumentByAdmin",
];

/// Whether an outgoing RPC URL addresses a project-scoped method.
///
/// Matching is by substring: generated client URLs end with the method
/// name, e.g. `https://api.example.com/docboard.v1.AdminService/ListDocuments`.
pub fn needs_secret_key(url: &str) -> bool {
    SECRET_KEY_METHODS.iter().any(|method| url.contains(method))
}
