//! Method-shape classification.
//!
//! Partitions extracted method records into the one recognized shape - a
//! single pagination-options argument - and the not-implemented fallback.
//! The split is total and disjoint; richer shapes (id + options, create/edit
//! payloads) are future variants of [`MethodShape`], not handled here.

use tracing::debug;

use crate::library::MethodRecord;
use crate::naming::dasherize;

/// Canonical name of the library's pagination-options type.
pub const LIST_OPTIONS_TYPE: &str = "ListOptions";

/// Argument-shape pattern of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodShape {
    /// Exactly one argument of the pagination-options type
    PaginatedList,
    /// Everything else; rendered as a placeholder subcommand
    NotImplemented,
}

/// A method record together with its shape and user-facing subcommand name.
#[derive(Debug, Clone)]
pub struct ClassifiedMethod {
    pub record: MethodRecord,
    pub shape: MethodShape,
    /// Dasherized subcommand name, shared by both shapes
    pub command_name: String,
}

/// All classified methods of one service, in discovery order.
#[derive(Debug)]
pub struct ServiceGroup {
    pub service: String,
    pub methods: Vec<ClassifiedMethod>,
}

/// Classify one record by its argument shape.
pub fn classify(record: &MethodRecord) -> MethodShape {
    if record.args.len() == 1 && record.args[0].ty == LIST_OPTIONS_TYPE {
        MethodShape::PaginatedList
    } else {
        MethodShape::NotImplemented
    }
}

/// Classify a sequence of records, preserving order.
pub fn classify_methods(records: Vec<MethodRecord>) -> Vec<ClassifiedMethod> {
    records
        .into_iter()
        .map(|record| {
            let shape = classify(&record);
            let command_name = dasherize(&record.name);
            debug!(
                service = %record.service,
                method = %record.name,
                ?shape,
                "classified method"
            );
            ClassifiedMethod {
                record,
                shape,
                command_name,
            }
        })
        .collect()
}

/// Group classified methods by service, preserving first-seen service order
/// and per-service method order.
pub fn group_by_service(methods: Vec<ClassifiedMethod>) -> Vec<ServiceGroup> {
    let mut groups: Vec<ServiceGroup> = Vec::new();
    for method in methods {
        match groups.iter_mut().find(|g| g.service == method.record.service) {
            Some(group) => group.methods.push(method),
            None => groups.push(ServiceGroup {
                service: method.record.service.clone(),
                methods: vec![method],
            }),
        }
    }
    groups
}
