//! Identifier transforms shared by the classifier, flag mapper and emitter.

use crate::library::SERVICE_SUFFIX;

/// Convert a camel- or snake-cased identifier into lowercase, hyphen-separated
/// words.
///
/// A `-` is inserted at each lowercase→uppercase boundary and every `_` maps
/// to `-`; the result is fully lowercased. The transform is idempotent, which
/// keeps flag declaration and flag read-back in agreement.
///
/// ```rust,ignore
/// assert_eq!(dasherize("ListUserTeams"), "list-user-teams");
/// assert_eq!(dasherize("per_page"), "per-page");
/// ```
pub fn dasherize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c == '_' || c == '-' {
            out.push('-');
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

/// Dasherize, then rewrite into a valid Rust module/function identifier.
pub fn snake_ident(name: &str) -> String {
    dasherize(name).replace('-', "_")
}

/// Command-group name for a service: suffix stripped, dasherized.
pub fn command_ident(service: &str) -> String {
    dasherize(service.strip_suffix(SERVICE_SUFFIX).unwrap_or(service))
}

/// Client accessor method for a service (`IssuesService` → `issues`).
pub fn client_fn(service: &str) -> String {
    snake_ident(service.strip_suffix(SERVICE_SUFFIX).unwrap_or(service))
}

/// Output file name for one service's generated unit.
pub fn file_name(service: &str) -> String {
    format!("{}.rs", snake_ident(service))
}
