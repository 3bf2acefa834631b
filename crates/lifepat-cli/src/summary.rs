use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lifepat_codec::Preset;
use lifepat_core::PatternEditor;
use lifepat_import::{ImageImport, Polarity};

/// Summary of an editing session, printed with `--stats`.
pub fn stats_table(editor: &PatternEditor, source: &str, import: Option<&ImageImport>) -> Table {
    let store = editor.store();
    let history = editor.history();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Property"), header_cell("Value")]);
    apply_table_style(&mut table);

    table.add_row(vec![Cell::new("Source"), Cell::new(source)]);
    table.add_row(vec![Cell::new("Grid"), Cell::new(editor.dims())]);
    table.add_row(vec![
        Cell::new("Population"),
        Cell::new(store.population()).add_attribute(Attribute::Bold),
    ]);
    let bbox = match store.bounding_box() {
        Some(rect) => Cell::new(format!(
            "{}x{} at ({}, {})",
            rect.height(),
            rect.width(),
            rect.min_row,
            rect.min_col
        )),
        None => dim_cell("-"),
    };
    table.add_row(vec![Cell::new("Bounding box"), bbox]);
    table.add_row(vec![
        Cell::new("Undo steps"),
        Cell::new(format!("{} / {}", history.undo_depth(), history.capacity())),
    ]);
    table.add_row(vec![Cell::new("Redo steps"), Cell::new(history.redo_depth())]);

    if let Some(import) = import {
        table.add_row(vec![
            Cell::new("Image fit"),
            Cell::new(format!(
                "{}x{} at ({}, {})",
                import.fit.target_h, import.fit.target_w, import.fit.offset_y, import.fit.offset_x
            )),
        ]);
        table.add_row(vec![Cell::new("Mean intensity"), Cell::new(format!("{:.1}", import.mean))]);
        table.add_row(vec![Cell::new("Polarity"), polarity_cell(import.polarity)]);
    }
    table
}

pub fn print_stats(editor: &PatternEditor, source: &str, import: Option<&ImageImport>) {
    eprintln!("{}", stats_table(editor, source, import));
}

/// Catalog listing for `lifepat presets`.
pub fn presets_table(presets: &[Preset]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Slug"),
        header_cell("Category"),
        header_cell("Size"),
        header_cell("Cells"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for preset in presets {
        let (rows, cols) = preset_extent(preset.text);
        let cells = preset
            .text
            .chars()
            .filter(|ch| lifepat_codec::is_alive_glyph(*ch))
            .count();
        table.add_row(vec![
            Cell::new(preset.name).fg(Color::Cyan),
            dim_cell(preset.slug()),
            Cell::new(preset.category.label()),
            Cell::new(format!("{rows}x{cols}")),
            Cell::new(cells),
        ]);
    }
    table
}

fn preset_extent(text: &str) -> (usize, usize) {
    let rows = text.lines().count();
    let cols = text
        .lines()
        .map(|line| line.trim().chars().count())
        .max()
        .unwrap_or(0);
    (rows, cols)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn polarity_cell(polarity: Polarity) -> Cell {
    match polarity {
        Polarity::LightBackground => Cell::new("light background (dark is alive)"),
        Polarity::DarkBackground => Cell::new("dark background (light is alive)"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
