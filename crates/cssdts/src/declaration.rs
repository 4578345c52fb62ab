//! Declaration-file rendering.

use crate::alerts::Alerts;
use crate::options::{ConfigOptions, ExportType, QuoteType};

/// Words that cannot be used as a `const` binding name.
const RESERVED_WORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Rendering knobs, borrowed from [`ConfigOptions`].
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub export_type: ExportType,
    pub export_type_name: &'a str,
    pub export_type_interface: &'a str,
    pub quote_type: QuoteType,
    pub banner: &'a str,
}

impl<'a> From<&'a ConfigOptions> for RenderOptions<'a> {
    fn from(options: &'a ConfigOptions) -> Self {
        Self {
            export_type: options.export_type,
            export_type_name: &options.export_type_name,
            export_type_interface: &options.export_type_interface,
            quote_type: options.quote_type,
            banner: &options.banner,
        }
    }
}

/// Render declaration text for a sorted identifier list.
///
/// Returns `None` when there is nothing to declare, which callers treat as
/// "no declaration file needed". In named mode identifiers that cannot be
/// bindings are dropped with a warning before that check.
pub fn render_declarations(
    class_names: &[String],
    options: RenderOptions<'_>,
    alerts: &Alerts,
) -> Option<String> {
    let body = match options.export_type {
        ExportType::Named => render_named(class_names, alerts)?,
        ExportType::Default => render_default(class_names, options)?,
    };

    if options.banner.is_empty() {
        Some(body)
    } else {
        Some(format!("{}\n{body}", options.banner))
    }
}

fn render_named(class_names: &[String], alerts: &Alerts) -> Option<String> {
    let lines: Vec<String> = class_names
        .iter()
        .filter(|name| is_valid_binding(name, alerts))
        .map(|name| format!("export declare const {name}: string;"))
        .collect();

    if lines.is_empty() {
        return None;
    }
    Some(lines.join("\n") + "\n")
}

fn render_default(class_names: &[String], options: RenderOptions<'_>) -> Option<String> {
    if class_names.is_empty() {
        return None;
    }

    let interface = options.export_type_interface;
    let mut out = format!("export type {interface} = {{\n");
    for name in class_names {
        out.push_str("  ");
        out.push_str(&options.quote_type.quote(name));
        out.push_str(": string;\n");
    }
    out.push_str("};\n\n");
    out.push_str(&format!(
        "export type {} = keyof {interface};\n\n",
        options.export_type_name
    ));
    out.push_str(&format!("declare const styles: {interface};\n\n"));
    out.push_str("export default styles;\n");
    Some(out)
}

fn is_valid_binding(name: &str, alerts: &Alerts) -> bool {
    if is_reserved_word(name) {
        alerts.warn(format!(
            "[SKIPPING] '{name}' is a reserved keyword (consider renaming or using --exportType default)."
        ));
        false
    } else if name.contains('-') {
        alerts.warn(format!(
            "[SKIPPING] '{name}' contains dashes (consider using 'camelCase' or 'dashes' for --nameFormat or using --exportType default)."
        ));
        false
    } else {
        true
    }
}
