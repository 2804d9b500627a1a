use tabula_core::{Align, ColumnDirection, Grid, RowDirection};

fn print_grid(label: &str, grid: &Grid) {
    println!("=== {} ===", label);
    for row in grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let mark = if cell.is_header {
                    "#"
                } else if cell.is_stripe {
                    "~"
                } else {
                    " "
                };
                format!("[{}{:>4}]", mark, cell.text)
            })
            .collect();
        println!("{}", line.join(" "));
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load the shape the host editor saves
    let grid: Grid = serde_json::from_str(
        r#"{
            "columnCount": 2,
            "items": [
                {"text": "name"}, {"text": "age"},
                {"text": "ada"}, {"text": "36"},
                {"text": "grace"}, {"text": "45"}
            ]
        }"#,
    )?;
    let grid = grid.normalize()?;
    print_grid("loaded", &grid);

    // Structural edits, each returning a fresh normalized grid
    let grid = grid.add_column(1)?;
    print_grid("column added after 'age'", &grid);

    let grid = grid.set_column_align(1, Align::Right)?;
    let grid = grid.add_row(0)?;
    print_grid("row added below the first", &grid);

    let grid = grid.add_header()?.add_zebra_stripe();
    print_grid("header + zebra stripes", &grid);

    let grid = grid.move_row(1, RowDirection::Up)?;
    print_grid("row 1 moved up (wraps past the header)", &grid);

    let grid = grid.move_column(0, ColumnDirection::Left)?;
    print_grid("column 0 moved left (wraps to the end)", &grid);

    let grid = grid.delete_row(2)?;
    let grid = grid.delete_column(1)?;
    print_grid("trimmed back down", &grid);

    // And back out to the host's save payload
    println!("save payload: {}", serde_json::to_string_pretty(&grid)?);

    Ok(())
}
