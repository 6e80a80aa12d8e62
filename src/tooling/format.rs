//! Format trees, file contents and summaries as text.

use crate::config::RenderConfig;
use crate::tree::node::{FileNode, PathNode};
use crate::tree::walk::{find, ForestSummary};
use crate::viewer::VisibleRow;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// One line per visible row, indented by depth. Folders end with `/`;
/// collapsed folders are marked with a trailing `...`.
pub fn format_tree_text(rows: &[VisibleRow], forest: &[PathNode], render: &RenderConfig) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&" ".repeat(row.depth * render.indent));
        if row.is_folder {
            let label = format!("{}/", row.name);
            if render.color {
                out.push_str(&format!("{}", label.blue().bold()));
            } else {
                out.push_str(&label);
            }
            if !row.expanded {
                out.push_str(" ...");
            }
        } else {
            out.push_str(&row.name);
            if render.show_sizes {
                if let Some(file) = find(forest, &row.id).and_then(PathNode::as_file) {
                    out.push_str(&format!(" ({} B)", file.content.len()));
                }
            }
        }
        out.push('\n');
    }
    out
}

/// File content, terminated by a newline.
pub fn format_show_text(file: &FileNode) -> String {
    let mut out = file.content.clone();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Format a forest summary with an extension breakdown table.
pub fn format_stats_text(summary: &ForestSummary, digest: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Forest")));
    out.push_str(&format!("  Digest: {}...\n", &digest[..digest.len().min(12)]));
    out.push_str(&format!("  Folders: {}\n", summary.folders));
    out.push_str(&format!("  Files: {}\n", summary.files));
    out.push_str(&format!("  Total bytes: {}\n", summary.total_bytes));
    out.push_str(&format!("  Max depth: {}\n\n", summary.max_depth));

    if summary.extensions.is_empty() {
        out.push_str("No files.\n");
        return out;
    }
    out.push_str(&format!("{}\n\n", format_section_heading("Extensions")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Extension", "Files"]);
    for (extension, count) in &summary.extensions {
        let label = if extension.is_empty() {
            "(none)".to_string()
        } else {
            extension.clone()
        };
        table.add_row(vec![label, count.to_string()]);
    }
    out.push_str(&format!("{}\n", table));
    out
}
