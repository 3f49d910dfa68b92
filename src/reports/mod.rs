use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fingerforge::consts::FINGER_COUNT;
use fingerforge::core_types::{CostMatrix, Finger};
use fingerforge::pitch::note_name;
use fingerforge::scorer::TransitionCost;

fn finger_label(idx: usize) -> String {
    Finger::from_index(idx)
        .map(|f| format!("{} ({})", idx, f))
        .unwrap_or_else(|| idx.to_string())
}

pub fn transitions(rows: &[TransitionCost]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("From"),
        Cell::new("To"),
        Cell::new("Fingers"),
        Cell::new("Cost").fg(Color::Cyan),
    ]);

    if let Some(col) = table.column_mut(4) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for t in rows {
        let cost_cell = Cell::new(format!("{:.3}", t.cost));
        let cost_cell = if t.cost > 0.0 {
            cost_cell.fg(Color::Red)
        } else {
            cost_cell.fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(t.index),
            Cell::new(format!("{} ({})", note_name(t.from_pitch), t.from_pitch)),
            Cell::new(format!("{} ({})", note_name(t.to_pitch), t.to_pitch)),
            Cell::new(format!(
                "{} -> {}",
                finger_label(t.from_finger),
                finger_label(t.to_finger)
            )),
            cost_cell,
        ]);
    }
    println!("\n{}", table);
}

pub fn matrix(name: &str, m: &CostMatrix) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new(name).add_attribute(Attribute::Bold)];
    header.extend((0..FINGER_COUNT).map(|j| Cell::new(format!("to {}", j))));
    table.add_row(header);

    for (i, row) in m.rows().iter().enumerate() {
        let mut cells = vec![Cell::new(format!("from {}", i))];
        cells.extend(row.iter().map(|c| Cell::new(format!("{:.2}", c))));
        table.add_row(cells);
    }
    for j in 1..=FINGER_COUNT {
        if let Some(col) = table.column_mut(j) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n{}", table);
}
