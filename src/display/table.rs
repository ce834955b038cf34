use crate::display::display_options::RenderOptions;
use crate::error::AppError;
use crate::utils::error_helpers::convert_serialize_error;
use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets};
use serde::Serialize;

/// Tabular data: a heading plus rows whose first column is the object ID
#[derive(Debug, Clone, Default)]
pub struct TableData {
    pub heading: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new<I, S>(heading: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            heading: heading.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

/// Render a serializable value as pretty JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    let mut out = serde_json::to_string_pretty(value).map_err(convert_serialize_error)?;
    out.push('\n');
    Ok(out)
}

/// Render only the identifier column, one per line
pub fn render_ids(data: &TableData) -> String {
    data.rows
        .iter()
        .filter_map(|row| row.first())
        .map(|id| format!("{}\n", id))
        .collect()
}

/// Render an aligned text table, honoring `no_header`
pub fn render_table(data: &TableData, options: &RenderOptions) -> String {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Disabled);

    if !options.no_header {
        let cells: Vec<Cell> = data
            .heading
            .iter()
            .map(|h| Cell::new(h.to_uppercase()).add_attribute(Attribute::Bold))
            .collect();
        table.set_header(cells);
    }

    for row in &data.rows {
        table.add_row(row.clone());
    }

    let rendered = table.to_string();
    if rendered.trim().is_empty() {
        String::new()
    } else {
        format!("{}\n", rendered)
    }
}

/// Pick the output form for a listing: JSON of `value` bypasses the table
/// entirely, quiet prints IDs, anything else is a table.
pub fn render_output<T, F>(value: &T, to_table: F, options: &RenderOptions) -> Result<String, AppError>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> TableData,
{
    if options.json {
        return render_json(value);
    }

    let data = to_table(value);
    if options.quiet {
        return Ok(render_ids(&data));
    }
    Ok(render_table(&data, options))
}
