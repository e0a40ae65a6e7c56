use crate::domain::responses::RowSet;

/// Renders a row set the way query results print: a header line of
/// column names, then one tab-separated line per row. An empty result
/// renders nothing, header included.
pub fn render(rowset: &RowSet) -> String {
    if rowset.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&rowset.columns.join("\t"));
    out.push('\n');
    for row in &rowset.rows {
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    out
}

/// Prints the rendered table to standard output and returns the number
/// of rows shown.
pub fn print_rowset(rowset: &RowSet) -> usize {
    print!("{}", render(rowset));
    rowset.row_count()
}
