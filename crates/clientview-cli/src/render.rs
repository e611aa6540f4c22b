//! Table rendering of the details view.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use clientview_core::{DetailsViewModel, DisclosureState, compute_state};
use clientview_model::SnapshotId;

pub fn timeline_table<S>(view: &DetailsViewModel<S>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Timestamp"),
        header_cell("Source flow"),
        header_cell("Changes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in view.timeline() {
        let marker = if entry.selected {
            format!("> {}", entry.index)
        } else {
            entry.index.to_string()
        };
        let mut index_cell = Cell::new(marker);
        if entry.selected {
            index_cell = index_cell.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            index_cell,
            Cell::new(entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC")),
            Cell::new(entry.id.as_ref().map_or("-", SnapshotId::as_str)),
            Cell::new(entry.changes.join("\n")),
        ]);
    }
    table
}

pub fn fields_table<S>(view: &DetailsViewModel<S>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    for row in view.field_rows() {
        let shown = row.display_value();
        let mut value = match shown.as_list() {
            Some(items) => items.join("\n"),
            None => shown.to_string(),
        };
        if let Some(counts) = row.disclosure {
            let hidden = counts.total - counts.visible();
            if hidden > 0 {
                value.push_str(&format!("\n(+{hidden} more)"));
            }
        }
        table.add_row(vec![Cell::new(row.label), Cell::new(value)]);
    }
    table
}

pub fn disclosure_table<S>(view: &DetailsViewModel<S>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("List"),
        header_cell("Total"),
        header_cell("Shown"),
        header_cell("Cap"),
        header_cell("Button"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for (list, counts) in view.disclosures() {
        let state = counts.state();
        table.add_row(vec![
            Cell::new(list),
            Cell::new(counts.total),
            Cell::new(counts.visible()),
            Cell::new(counts.initial_cap),
            state_cell(state),
        ]);
    }
    table
}

/// Full text of the `show` command.
pub fn render_show<S>(view: &DetailsViewModel<S>) -> String {
    let Some(index) = view.active_index() else {
        return "No versions to show.".to_string();
    };
    format!(
        "Timeline:\n{}\n\nVersion {index}:\n{}\n\nLists:\n{}",
        timeline_table(view),
        fields_table(view),
        disclosure_table(view)
    )
}

/// One line describing the state for a set of counts.
pub fn render_disclosure(total: usize, shown: usize, initial_cap: usize) -> String {
    let state = compute_state(total, shown, initial_cap);
    format!("total={total} shown={shown} cap={initial_cap} -> {state}")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn state_cell(state: DisclosureState) -> Cell {
    let color = match state {
        DisclosureState::ShowMore => Color::Yellow,
        DisclosureState::ShowLess => Color::Green,
        DisclosureState::NoButton => Color::DarkGrey,
    };
    Cell::new(state).fg(color)
}
