use cipherforge::cipher::SubstitutionKey;
use cipherforge::language::LanguageProfile;
use cipherforge::optimizer::ShiftSearch;
use cipherforge::Solution;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

const PREVIEW_CHARS: usize = 60;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn preview(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    } else {
        flat
    }
}

pub fn print_solution(solution: &Solution) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Language").add_attribute(Attribute::Bold),
        Cell::new("Scorer"),
        Cell::new("Key"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new(solution.language).add_attribute(Attribute::Bold),
        Cell::new(solution.scorer_mode),
        Cell::new(solution.key),
        Cell::new(format!("{:.3}", solution.score)).fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(3) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("\n{}", table);
    println!("cipher: abcdefghijklmnopqrstuvwxyz");
    println!("plain:  {}", solution.key.to_permutation());
    println!("\n=== 🏆 PLAINTEXT ===");
    println!("{}", solution.plaintext);
}

pub fn print_shift_table(search: &ShiftSearch, top: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Shift"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Plaintext"),
    ]);
    for i in 0..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, trial) in search.ranked().into_iter().take(top).enumerate() {
        let row_color = if trial.key == search.best.key {
            Color::Green
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(trial.key).fg(row_color),
            Cell::new(format!("{:.3}", trial.score)).fg(Color::Cyan),
            Cell::new(preview(&trial.plaintext)).fg(row_color),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_profiles<'a>(profiles: impl Iterator<Item = &'a LanguageProfile>) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Language").add_attribute(Attribute::Bold),
        Cell::new("Frequency order"),
        Cell::new("Stopwords"),
        Cell::new("Dictionary"),
        Cell::new("Quadgrams"),
    ]);

    for profile in profiles {
        let order: String = profile
            .frequency_order()
            .iter()
            .map(|&i| (b'a' + i) as char)
            .collect();
        let dictionary = profile
            .dictionary()
            .map(|d| d.len().to_string())
            .unwrap_or_else(|| "-".to_string());
        let quadgrams = profile
            .quadgrams()
            .map(|q| q.known().to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(profile.language()).add_attribute(Attribute::Bold),
            Cell::new(order),
            Cell::new(profile.stopwords().len()),
            Cell::new(dictionary),
            Cell::new(quadgrams),
        ]);
    }
    println!("\n{}", table);
}
