use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use plainsight::error::PsResult;
use plainsight::eval::CrossValidation;
use plainsight::sampler::TraceEntry;
use std::path::Path;

const PREVIEW_CHARS: usize = 40;

pub fn print_cross_validation(cv: &CrossValidation, best: Option<usize>) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Run").add_attribute(Attribute::Bold),
        Cell::new("Final Score").fg(Color::Cyan),
        Cell::new("Snapshots"),
        Cell::new("Preview"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, (text, trace)) in cv
        .final_texts
        .iter()
        .zip(cv.score_traces.iter())
        .enumerate()
    {
        let score = trace
            .last()
            .map(|s| format!("{:.2}", s))
            .unwrap_or_else(|| "-".to_string());
        let preview: String = text.chars().take(PREVIEW_CHARS).collect();

        let mut row_cell = Cell::new(format!("#{}", i));
        if Some(i) == best {
            row_cell = row_cell.add_attribute(Attribute::Bold).fg(Color::Green);
        }
        table.add_row(vec![
            row_cell,
            Cell::new(score).fg(Color::Cyan),
            Cell::new(trace.len()),
            Cell::new(preview),
        ]);
    }

    println!("{table}");
}

pub fn print_rates(exact: f64, likelihood: f64, letterwise: f64, numeric: f64, trust: f64) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new(format!("Rate (trust {})", trust)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Exact match"), Cell::new(format!("{:.2}", exact))]);
    table.add_row(vec![
        Cell::new("Likelihood-close"),
        Cell::new(format!("{:.2}", likelihood)),
    ]);
    table.add_row(vec![
        Cell::new("Letterwise-close"),
        Cell::new(format!("{:.2}", letterwise)),
    ]);
    table.add_row(vec![
        Cell::new("Numeric solutions"),
        Cell::new(format!("{:.2}", numeric)),
    ]);
    println!("{table}");
}

/// Writes a sampler trace as CSV: iteration, score, decoded text.
pub fn write_trace_csv<P: AsRef<Path>>(path: P, trace: &[TraceEntry]) -> PsResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["iteration", "score", "text"])?;
    for entry in trace {
        writer.write_record([
            entry.iteration.to_string(),
            format!("{}", entry.score),
            entry.text.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
