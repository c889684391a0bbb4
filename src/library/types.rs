use serde::Serialize;

/// One declared parameter of a service method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    /// Parameter name as written in the signature
    pub name: String,
    /// Canonicalized type text (library prefix stripped, references removed)
    pub ty: String,
}

/// Normalized record of one service method, built once during extraction.
///
/// `service` is the grouping key for generated units and is stable across a
/// run; methods with identical `(service, name)` are assumed unique.
#[derive(Debug, Clone, Serialize)]
pub struct MethodRecord {
    /// Owning service type name, marker suffix retained (`IssuesService`)
    pub service: String,
    /// Method name as declared
    pub name: String,
    /// Ordered `(name, type)` parameter pairs, receiver excluded
    pub args: Vec<Argument>,
    /// Ordered return types (empty for `fn f(&self)` with no return)
    pub returns: Vec<String>,
}
