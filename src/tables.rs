use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::race::competition::CompetitionOutcome;

/// Per-event competition summary.
#[must_use]
pub fn build_competition_table(outcome: &CompetitionOutcome) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec![
        "Event",
        "Start",
        "End",
        "Distance",
        "Harvested",
        "Consumed",
        "Final SoC",
    ]);
    for result in &outcome.results {
        table.add_row(vec![
            Cell::new(&result.name).add_attribute(Attribute::Bold),
            Cell::new(result.start.format("%H:%M")),
            Cell::new(result.end.format("%H:%M")).add_attribute(Attribute::Dim),
            Cell::new(result.totals.distance).set_alignment(CellAlignment::Right),
            Cell::new(result.totals.harvested_energy)
                .set_alignment(CellAlignment::Right)
                .fg(Color::Green),
            Cell::new(result.totals.consumed_energy).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}%", result.final_soc * 100.0))
                .set_alignment(CellAlignment::Right)
                .fg(if result.final_soc >= 0.5 {
                    Color::Green
                } else if result.final_soc >= 0.2 {
                    Color::DarkYellow
                } else {
                    Color::Red
                }),
        ]);
    }
    table
}
