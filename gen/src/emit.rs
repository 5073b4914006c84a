//! Rendering of the generated module text.

use crate::config::GeneratorConfig;
use crate::route::RouteTable;
use crate::scan::Descriptor;

/// Render the full module text: one banner line, one import per
/// descriptor in discovery order, then the default-exported route table
/// in insertion order.
///
/// The output is a pure function of its inputs; the same descriptors and
/// table always render byte-identical text.
pub fn render(config: &GeneratorConfig, descriptors: &[Descriptor], table: &RouteTable) -> String {
    let imports = descriptors
        .iter()
        .map(|d| {
            format!(
                "import {} from \"{}{}\"",
                d.ident, config.import_prefix, d.module_path
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let entries = table
        .iter()
        .map(|(route, ident)| format!("  \"{route}\": {ident},"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "// This file is generated by `{}`\n{imports}\n\nexport default {{\n{entries}\n}}\n",
        config.tool_name
    )
}
