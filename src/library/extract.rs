use quote::ToTokens;
use syn::{FnArg, Item, ItemImpl, Pat, ReturnType, Type, Visibility};
use tracing::debug;

use super::load::SourcePackage;
use super::types::{Argument, MethodRecord};

/// Marker suffix that identifies a service type.
pub const SERVICE_SUFFIX: &str = "Service";

/// Extract one [`MethodRecord`] per public inherent method on a `*Service`
/// type, in source discovery order.
///
/// Methods with no parameters or no return type yield empty lists, not
/// errors. A parameter whose type cannot be shortened further is still
/// recorded with its best-effort text; rejection is the classifier's job.
pub fn extract_methods(package: &SourcePackage) -> Vec<MethodRecord> {
    let mut records = Vec::new();
    for (_, file) in &package.files {
        visit_items(&file.items, &package.crate_name, &mut records);
    }
    records
}

fn visit_items(items: &[Item], crate_name: &str, records: &mut Vec<MethodRecord>) {
    for item in items {
        match item {
            Item::Impl(imp) => visit_impl(imp, crate_name, records),
            // Inline modules can hold service impls too
            Item::Mod(module) => {
                if let Some((_, nested)) = &module.content {
                    visit_items(nested, crate_name, records);
                }
            }
            _ => {}
        }
    }
}

fn visit_impl(imp: &ItemImpl, crate_name: &str, records: &mut Vec<MethodRecord>) {
    if imp.trait_.is_some() {
        return;
    }
    let Some(service) = service_name(&imp.self_ty) else {
        return;
    };
    for entry in &imp.items {
        let syn::ImplItem::Fn(method) = entry else {
            continue;
        };
        if !matches!(method.vis, Visibility::Public(_)) || method.sig.receiver().is_none() {
            continue;
        }

        let mut args = Vec::new();
        for (index, input) in method.sig.inputs.iter().enumerate() {
            let FnArg::Typed(param) = input else {
                continue; // receiver
            };
            let name = match param.pat.as_ref() {
                Pat::Ident(ident) => ident.ident.to_string(),
                _ => format!("arg{index}"),
            };
            args.push(Argument {
                name,
                ty: canonical_type_text(&param.ty, crate_name),
            });
        }

        let returns = match &method.sig.output {
            ReturnType::Default => Vec::new(),
            ReturnType::Type(_, ty) => vec![canonical_type_text(ty, crate_name)],
        };

        debug!(
            service = %service,
            method = %method.sig.ident,
            args = args.len(),
            "extracted method"
        );
        records.push(MethodRecord {
            service: service.clone(),
            name: method.sig.ident.to_string(),
            args,
            returns,
        });
    }
}

/// Bare name of the impl's self type when it carries the marker suffix.
fn service_name(self_ty: &Type) -> Option<String> {
    let Type::Path(path) = self_ty else {
        return None;
    };
    let name = path.path.segments.last()?.ident.to_string();
    name.ends_with(SERVICE_SUFFIX).then_some(name)
}

/// Canonical text of a type: whitespace-free, leading references and
/// lifetimes stripped, and the library's own path prefix rewritten to the
/// short form.
pub(crate) fn canonical_type_text(ty: &Type, crate_name: &str) -> String {
    let mut text = ty.to_token_stream().to_string();

    // `& 'a mut T` → `T`; only the outermost reference carries flag semantics
    loop {
        let trimmed = text.trim_start();
        if let Some(rest) = trimmed.strip_prefix('&') {
            text = rest.to_string();
        } else if let Some(rest) = trimmed.strip_prefix('\'') {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            text = rest[end..].to_string();
        } else if let Some(rest) = trimmed.strip_prefix("mut ") {
            text = rest.to_string();
        } else {
            text = trimmed.to_string();
            break;
        }
    }

    text.retain(|c| !c.is_whitespace());
    let module = crate_name.replace('-', "_");
    text.replace(&format!("{module}::"), "").replace("crate::", "")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::library::SourcePackage;

    const SOURCE: &str = r#"
        pub struct IssuesService;

        impl IssuesService {
            pub fn list(&self, options: &ListOptions) -> Result<(Vec<Issue>, Response), Error> {
                todo!()
            }

            pub fn list_for_user(&self, options: &gitforge::ListOptions) -> Result<(Vec<Issue>, Response), Error> {
                todo!()
            }

            pub fn get(&self, number: i64) -> Result<(Issue, Response), Error> {
                todo!()
            }

            pub fn ping(&self) {}

            fn internal(&self, options: &ListOptions) -> bool {
                false
            }

            pub fn not_a_method(options: &ListOptions) -> bool {
                true
            }
        }

        pub struct Client;

        impl Client {
            pub fn issues(&self) -> IssuesService {
                IssuesService
            }
        }

        impl std::fmt::Debug for IssuesService {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("IssuesService")
            }
        }
    "#;

    fn records() -> Vec<MethodRecord> {
        let package = SourcePackage::from_source("gitforge", SOURCE).unwrap();
        extract_methods(&package)
    }

    #[test]
    fn test_extracts_only_public_service_methods() {
        let records = records();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        // private methods, associated functions, non-service impls and trait
        // impls are all skipped
        assert_eq!(names, vec!["list", "list_for_user", "get", "ping"]);
        assert!(records.iter().all(|r| r.service == "IssuesService"));
    }

    #[test]
    fn test_arg_and_return_counts_match_signature() {
        let records = records();
        let list = records.iter().find(|r| r.name == "list").unwrap();
        assert_eq!(list.args.len(), 1);
        assert_eq!(list.returns.len(), 1);

        let ping = records.iter().find(|r| r.name == "ping").unwrap();
        assert!(ping.args.is_empty());
        assert!(ping.returns.is_empty());
    }

    #[test]
    fn test_type_text_is_canonicalized() {
        let records = records();
        let list = records.iter().find(|r| r.name == "list").unwrap();
        assert_eq!(list.args[0].name, "options");
        assert_eq!(list.args[0].ty, "ListOptions");
        assert_eq!(list.returns[0], "Result<(Vec<Issue>,Response),Error>");

        // the library's own prefix is rewritten to the short form
        let for_user = records.iter().find(|r| r.name == "list_for_user").unwrap();
        assert_eq!(for_user.args[0].ty, "ListOptions");
    }

    #[test]
    fn test_nested_module_impls_are_visited() {
        let source = r#"
            pub mod issues {
                pub struct LabelsService;
                impl LabelsService {
                    pub fn list(&self, options: &ListOptions) -> Result<(Vec<Label>, Response), Error> {
                        todo!()
                    }
                }
            }
        "#;
        let package = SourcePackage::from_source("gitforge", source).unwrap();
        let records = extract_methods(&package);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].service, "LabelsService");
    }

    #[test]
    fn test_canonical_type_text_strips_refs_and_lifetimes() {
        let ty: Type = syn::parse_str("&'a mut gitforge::ListOptions").unwrap();
        assert_eq!(canonical_type_text(&ty, "gitforge"), "ListOptions");

        let ty: Type = syn::parse_str("Option<i64>").unwrap();
        assert_eq!(canonical_type_text(&ty, "gitforge"), "Option<i64>");
    }
}
