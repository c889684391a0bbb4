use askama::Template;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::classify::{ClassifiedMethod, MethodShape, ServiceGroup};
use crate::flags::{
    accessor_for, declaration_for, flag_for, ArgumentType, FlagSpec, DEFAULT_TIME_FN,
};
use crate::naming;

/// Failure to render or write one generated unit.
///
/// Fatal at the point it occurs; units written earlier remain on disk.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to render commands for {service}: {source}")]
    Render {
        service: String,
        #[source]
        source: askama::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One rendered subcommand block, ready to splice into the grouping template.
#[derive(Debug, Clone)]
pub struct MethodBlock {
    /// Dasherized subcommand name
    pub name: String,
    /// Identifier base for the generated `*_command`/`run_*` functions
    pub fn_base: String,
    /// Rendered block source
    pub body: String,
}

/// Template data for one service's generated unit.
#[derive(Template)]
#[template(path = "service.rs.txt")]
pub struct ServiceTemplateData {
    /// Service type name (`IssuesService`)
    pub service: String,
    /// Command-group name (`issues`)
    pub command: String,
    /// Client library crate name
    pub library: String,
    /// Whether any method renders the paginated-listing shape
    pub has_list: bool,
    /// Per-method blocks in classifier order
    pub methods: Vec<MethodBlock>,
}

/// Template data for a paginated-listing subcommand block.
#[derive(Template)]
#[template(path = "list_command.rs.txt")]
pub struct ListCommandTemplateData {
    pub service: String,
    pub method: String,
    pub name: String,
    pub fn_base: String,
    /// Client accessor for the owning service (`issues`)
    pub client_fn: String,
    /// Rendered flag declarations
    pub flags: Vec<String>,
    pub all_accessor: String,
    pub page_accessor: String,
    pub page_size_accessor: String,
}

/// Template data for a not-implemented placeholder block.
#[derive(Template)]
#[template(path = "not_implemented.rs.txt")]
pub struct NotImplementedTemplateData {
    pub service: String,
    pub method: String,
    pub name: String,
    pub fn_base: String,
}

/// One generated module in the registry.
#[derive(Debug, Clone)]
pub struct ModuleEntry {
    /// Module identifier (`issues_service`)
    pub ident: String,
    /// Command-group name (`issues`)
    pub command: String,
}

/// Template data for the generated `mod.rs` registry.
#[derive(Template)]
#[template(path = "mod.rs.txt")]
pub struct ModRsTemplateData {
    pub library: String,
    pub modules: Vec<ModuleEntry>,
}

/// The fixed flag contract of every paginated-listing subcommand, paired with
/// the argument types the accessors must read back into.
fn listing_flags() -> [(FlagSpec, ArgumentType); 3] {
    let all = ArgumentType::Bool { optional: false };
    let page = ArgumentType::Int { optional: false };
    let page_size = ArgumentType::Int { optional: false };
    [
        (
            listing_flag("all", &all, Some('a'), None, None, "fetch all pages"),
            all,
        ),
        (
            listing_flag("page", &page, Some('p'), None, Some("0"), "page to start from (0 = first)"),
            page,
        ),
        (
            listing_flag("page_size", &page_size, None, Some("ps"), Some("30"), "results per page"),
            page_size,
        ),
    ]
}

fn listing_flag(
    arg: &str,
    ty: &ArgumentType,
    short: Option<char>,
    alias: Option<&str>,
    default: Option<&str>,
    help: &str,
) -> FlagSpec {
    // the listing flags are drawn from the closed set, so mapping never fails
    let mut flag =
        flag_for(arg, ty).unwrap_or_else(|| unreachable!("listing flag {arg} is recognized"));
    flag.short = short;
    flag.alias = alias.map(str::to_string);
    flag.default = default.map(str::to_string);
    flag.help = help.to_string();
    flag
}

/// Render the subcommand block for one classified method.
pub fn render_method_block(method: &ClassifiedMethod) -> Result<MethodBlock, EmitError> {
    let service = method.record.service.clone();
    let fn_base = naming::snake_ident(&method.record.name);
    let rendered = match method.shape {
        MethodShape::PaginatedList => {
            let [(all, all_ty), (page, page_ty), (page_size, page_size_ty)] = listing_flags();
            ListCommandTemplateData {
                client_fn: naming::client_fn(&service),
                service: service.clone(),
                method: method.record.name.clone(),
                name: method.command_name.clone(),
                fn_base: fn_base.clone(),
                flags: vec![
                    declaration_for(&all),
                    declaration_for(&page),
                    declaration_for(&page_size),
                ],
                all_accessor: accessor_for(&all, &all_ty, DEFAULT_TIME_FN),
                page_accessor: accessor_for(&page, &page_ty, DEFAULT_TIME_FN),
                page_size_accessor: accessor_for(&page_size, &page_size_ty, DEFAULT_TIME_FN),
            }
            .render()
        }
        MethodShape::NotImplemented => NotImplementedTemplateData {
            service: service.clone(),
            method: method.record.name.clone(),
            name: method.command_name.clone(),
            fn_base: fn_base.clone(),
        }
        .render(),
    };
    let body = rendered.map_err(|source| EmitError::Render {
        service,
        source,
    })?;
    Ok(MethodBlock {
        name: method.command_name.clone(),
        fn_base,
        body,
    })
}

/// Build the grouping template data for one service.
pub fn service_template_data(
    group: &ServiceGroup,
    library: &str,
) -> Result<ServiceTemplateData, EmitError> {
    let mut methods = Vec::with_capacity(group.methods.len());
    for method in &group.methods {
        methods.push(render_method_block(method)?);
    }
    Ok(ServiceTemplateData {
        service: group.service.clone(),
        command: naming::command_ident(&group.service),
        library: library.to_string(),
        has_list: group
            .methods
            .iter()
            .any(|m| m.shape == MethodShape::PaginatedList),
        methods,
    })
}

/// Write one service's generated unit, overwriting any previous run's file.
pub fn write_service(dir: &Path, data: &ServiceTemplateData) -> Result<PathBuf, EmitError> {
    let rendered = data.render().map_err(|source| EmitError::Render {
        service: data.service.clone(),
        source,
    })?;
    let path = dir.join(naming::file_name(&data.service));
    fs::write(&path, rendered).map_err(|source| EmitError::Write {
        path: path.clone(),
        source,
    })?;
    println!("✅ Generated commands: {path:?}");
    Ok(path)
}

/// Write the `mod.rs` registry for all generated service modules.
pub fn write_mod_rs(
    dir: &Path,
    library: &str,
    modules: &[ModuleEntry],
) -> Result<PathBuf, EmitError> {
    let rendered = ModRsTemplateData {
        library: library.to_string(),
        modules: modules.to_vec(),
    }
    .render()
    .map_err(|source| EmitError::Render {
        service: "mod".to_string(),
        source,
    })?;
    let path = dir.join("mod.rs");
    fs::write(&path, rendered).map_err(|source| EmitError::Write {
        path: path.clone(),
        source,
    })?;
    println!("✅ Generated registry → {path:?}");
    Ok(path)
}
