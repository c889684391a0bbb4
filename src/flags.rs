//! Type→flag mapping.
//!
//! Pure functions from a canonical argument type to a flag declaration and a
//! typed read-back accessor. Total over the closed recognized type set;
//! anything else produces a diagnostic and no flag.

use serde::Serialize;
use tracing::warn;

use crate::naming::dasherize;

/// Qualified path of the injected time-parsing function the timestamp rule
/// emits calls to. The mapper never parses time text itself.
pub const DEFAULT_TIME_FN: &str = "forgecli::timeparse::parse_time";

/// Flag value category at the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlagKind {
    Integer,
    Boolean,
    Str,
    StringSeq,
    /// String at the boundary, parsed by the injected time function
    Timestamp,
}

/// One declared flag of a generated subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct FlagSpec {
    /// External (dasherized) flag name
    pub name: String,
    pub kind: FlagKind,
    pub help: String,
    /// Optional single-character short form
    pub short: Option<char>,
    /// Optional visible alias (used for the two-character `ps` form)
    pub alias: Option<String>,
    /// Optional default value, rendered into the declaration
    pub default: Option<String>,
}

/// Canonical argument type, normalized to the closed recognized set.
///
/// `optional: true` corresponds to an `Option<T>` target and requires the
/// accessor to wrap the scalar read in `Some(..)` before assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentType {
    Int { optional: bool },
    Bool { optional: bool },
    Str { optional: bool },
    StrSeq { optional: bool },
    Time { optional: bool },
    /// The library's own timestamp type
    LibTimestamp { optional: bool },
    Unrecognized(String),
}

impl ArgumentType {
    /// Normalize canonical type text into the closed set.
    pub fn parse(text: &str) -> Self {
        let text = text.replace("chrono::", "");
        let (inner, optional) = match text
            .strip_prefix("Option<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Some(inner) => (inner, true),
            None => (text.as_str(), false),
        };
        match inner {
            "i64" | "i32" => ArgumentType::Int { optional },
            "bool" => ArgumentType::Bool { optional },
            "String" => ArgumentType::Str { optional },
            "Vec<String>" => ArgumentType::StrSeq { optional },
            "DateTime<Utc>" => ArgumentType::Time { optional },
            "Timestamp" => ArgumentType::LibTimestamp { optional },
            _ => ArgumentType::Unrecognized(text.to_string()),
        }
    }

    pub fn is_optional(&self) -> bool {
        match self {
            ArgumentType::Int { optional }
            | ArgumentType::Bool { optional }
            | ArgumentType::Str { optional }
            | ArgumentType::StrSeq { optional }
            | ArgumentType::Time { optional }
            | ArgumentType::LibTimestamp { optional } => *optional,
            ArgumentType::Unrecognized(_) => false,
        }
    }
}

/// Derive the flag declared for one argument, or `None` (with a diagnostic)
/// when the type falls outside the recognized set.
pub fn flag_for(arg_name: &str, ty: &ArgumentType) -> Option<FlagSpec> {
    let kind = match ty {
        ArgumentType::Int { .. } => FlagKind::Integer,
        ArgumentType::Bool { .. } => FlagKind::Boolean,
        ArgumentType::Str { .. } => FlagKind::Str,
        ArgumentType::StrSeq { .. } => FlagKind::StringSeq,
        ArgumentType::Time { .. } | ArgumentType::LibTimestamp { .. } => FlagKind::Timestamp,
        ArgumentType::Unrecognized(text) => {
            warn!(ty = %text, arg = %arg_name, "unhandled argument type, no flag generated");
            return None;
        }
    };
    let name = dasherize(arg_name);
    Some(FlagSpec {
        help: format!("value for {name}"),
        name,
        kind,
        short: None,
        alias: None,
        default: None,
    })
}

/// Render a flag declaration as clap `Arg` builder source text.
pub fn declaration_for(flag: &FlagSpec) -> String {
    let mut out = format!("Arg::new(\"{}\")", flag.name);
    if let Some(short) = flag.short {
        out.push_str(&format!(".short('{short}')"));
    }
    out.push_str(&format!(".long(\"{}\")", flag.name));
    if let Some(alias) = &flag.alias {
        out.push_str(&format!(".visible_alias(\"{alias}\")"));
    }
    match flag.kind {
        FlagKind::Integer => out.push_str(".value_parser(clap::value_parser!(i64))"),
        FlagKind::Boolean => out.push_str(".action(ArgAction::SetTrue)"),
        FlagKind::StringSeq => out.push_str(".action(ArgAction::Append)"),
        FlagKind::Str | FlagKind::Timestamp => {}
    }
    if let Some(default) = &flag.default {
        out.push_str(&format!(".default_value(\"{default}\")"));
    }
    out.push_str(&format!(".help(\"{}\")", flag.help));
    out
}

/// Render the expression that reads the flag's typed value back out of a
/// parsed `matches`.
///
/// Optional targets wrap the scalar read in `Some(..)`; the time kinds route
/// the raw string through `time_fn`, and the library timestamp additionally
/// converts the parsed value.
pub fn accessor_for(flag: &FlagSpec, ty: &ArgumentType, time_fn: &str) -> String {
    let name = &flag.name;
    let read = match flag.kind {
        FlagKind::Integer => {
            format!("matches.get_one::<i64>(\"{name}\").copied().unwrap_or_default()")
        }
        FlagKind::Boolean => format!("matches.get_flag(\"{name}\")"),
        FlagKind::Str => {
            format!("matches.get_one::<String>(\"{name}\").cloned().unwrap_or_default()")
        }
        FlagKind::StringSeq => format!(
            "matches.get_many::<String>(\"{name}\").map(|values| values.cloned().collect()).unwrap_or_default()"
        ),
        FlagKind::Timestamp => format!(
            "{time_fn}(matches.get_one::<String>(\"{name}\").map(String::as_str).unwrap_or_default())?"
        ),
    };
    let read = if matches!(ty, ArgumentType::LibTimestamp { .. }) {
        format!("Timestamp::from({read})")
    } else {
        read
    };
    if ty.is_optional() {
        format!("Some({read})")
    } else {
        read
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_parse_closed_set() {
        assert_eq!(ArgumentType::parse("i64"), ArgumentType::Int { optional: false });
        assert_eq!(
            ArgumentType::parse("Option<i64>"),
            ArgumentType::Int { optional: true }
        );
        assert_eq!(ArgumentType::parse("bool"), ArgumentType::Bool { optional: false });
        assert_eq!(
            ArgumentType::parse("Option<bool>"),
            ArgumentType::Bool { optional: true }
        );
        assert_eq!(ArgumentType::parse("String"), ArgumentType::Str { optional: false });
        assert_eq!(
            ArgumentType::parse("Option<Vec<String>>"),
            ArgumentType::StrSeq { optional: true }
        );
        assert_eq!(
            ArgumentType::parse("DateTime<Utc>"),
            ArgumentType::Time { optional: false }
        );
        assert_eq!(
            ArgumentType::parse("chrono::DateTime<chrono::Utc>"),
            ArgumentType::Time { optional: false }
        );
        assert_eq!(
            ArgumentType::parse("Timestamp"),
            ArgumentType::LibTimestamp { optional: false }
        );
        assert_eq!(
            ArgumentType::parse("NewIssue"),
            ArgumentType::Unrecognized("NewIssue".to_string())
        );
    }

    #[test]
    fn test_flag_for_recognized_types() {
        let flag = flag_for("per_page", &ArgumentType::Int { optional: true }).unwrap();
        assert_eq!(flag.name, "per-page");
        assert_eq!(flag.kind, FlagKind::Integer);

        let flag = flag_for("since", &ArgumentType::Time { optional: false }).unwrap();
        assert_eq!(flag.kind, FlagKind::Timestamp);
    }

    #[test]
    fn test_flag_for_unrecognized_type_is_none() {
        assert!(flag_for("issue", &ArgumentType::Unrecognized("NewIssue".into())).is_none());
    }

    #[test]
    fn test_declaration_shapes() {
        let mut flag = flag_for("page", &ArgumentType::Int { optional: false }).unwrap();
        flag.short = Some('p');
        flag.default = Some("0".to_string());
        let decl = declaration_for(&flag);
        assert!(decl.starts_with("Arg::new(\"page\")"));
        assert!(decl.contains(".short('p')"));
        assert!(decl.contains(".long(\"page\")"));
        assert!(decl.contains(".value_parser(clap::value_parser!(i64))"));
        assert!(decl.contains(".default_value(\"0\")"));

        let mut flag = flag_for("page_size", &ArgumentType::Int { optional: false }).unwrap();
        flag.alias = Some("ps".to_string());
        assert!(declaration_for(&flag).contains(".visible_alias(\"ps\")"));

        let flag = flag_for("all", &ArgumentType::Bool { optional: false }).unwrap();
        assert!(declaration_for(&flag).contains(".action(ArgAction::SetTrue)"));

        let flag = flag_for("labels", &ArgumentType::StrSeq { optional: false }).unwrap();
        assert!(declaration_for(&flag).contains(".action(ArgAction::Append)"));
    }

    /// For every member of the closed set, the accessor built from the flag
    /// declared for that type must be shaped to type-check against the
    /// original argument: `Some(..)` exactly when optional, the injected
    /// parse call exactly for the time kinds.
    #[test]
    fn test_accessor_round_trip() {
        let cases: Vec<(ArgumentType, &str)> = vec![
            (ArgumentType::Int { optional: false }, "get_one::<i64>"),
            (ArgumentType::Int { optional: true }, "get_one::<i64>"),
            (ArgumentType::Bool { optional: false }, "get_flag"),
            (ArgumentType::Bool { optional: true }, "get_flag"),
            (ArgumentType::Str { optional: false }, "get_one::<String>"),
            (ArgumentType::Str { optional: true }, "get_one::<String>"),
            (ArgumentType::StrSeq { optional: false }, "get_many::<String>"),
            (ArgumentType::StrSeq { optional: true }, "get_many::<String>"),
            (ArgumentType::Time { optional: false }, "parse_time"),
            (ArgumentType::Time { optional: true }, "parse_time"),
            (ArgumentType::LibTimestamp { optional: false }, "Timestamp::from"),
            (ArgumentType::LibTimestamp { optional: true }, "Timestamp::from"),
        ];
        for (ty, fragment) in cases {
            let flag = flag_for("value", &ty).unwrap();
            let accessor = accessor_for(&flag, &ty, DEFAULT_TIME_FN);
            assert!(
                accessor.contains(fragment),
                "{accessor} missing {fragment}"
            );
            assert_eq!(
                accessor.starts_with("Some("),
                ty.is_optional(),
                "boxing mismatch for {ty:?}: {accessor}"
            );
        }
    }

    #[test]
    fn test_timestamp_accessor_emits_injected_call() {
        let ty = ArgumentType::Time { optional: false };
        let flag = flag_for("since", &ty).unwrap();
        let accessor = accessor_for(&flag, &ty, DEFAULT_TIME_FN);
        assert!(accessor.starts_with(DEFAULT_TIME_FN));
        assert!(accessor.ends_with(")?"));
    }
}
