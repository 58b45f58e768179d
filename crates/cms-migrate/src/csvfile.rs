//! Minimal CSV reading with forgiving header lookup.
//!
//! Blog exports arrive with inconsistent header spellings ("Blog Text",
//! "blogText", "Blog text"), so column lookup normalizes names before
//! matching. The parser handles quoted fields with embedded commas,
//! quotes, and newlines, and tolerates CRLF line endings.

/// A parsed CSV file: one header row plus data rows.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parse CSV text. The first row is the header row.
    ///
    /// Parsing is total: unbalanced quotes terminate at end of input and
    /// blank lines are skipped, so any text yields a table.
    pub fn parse(input: &str) -> Self {
        let mut records = split_records(input);
        if records.is_empty() {
            return Self::default();
        }
        let headers = records.remove(0);
        Self {
            headers,
            rows: records,
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over data rows.
    pub fn rows(&self) -> impl Iterator<Item = CsvRow<'_>> {
        self.rows.iter().map(move |values| CsvRow {
            headers: &self.headers,
            values,
        })
    }
}

/// One data row, addressable by (normalized) column name.
#[derive(Debug, Clone, Copy)]
pub struct CsvRow<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> CsvRow<'a> {
    /// Look up a cell by column name, matching case- and
    /// whitespace-insensitively. Empty cells read as absent so callers can
    /// chain fallbacks.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let wanted = normalize(column);
        let index = self
            .headers
            .iter()
            .position(|header| normalize(header) == wanted)?;
        let value = self.values.get(index)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// Normalize a column name for lookup: lowercase, whitespace and
/// underscores removed.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn split_records(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                push_record(&mut records, std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        push_record(&mut records, record);
    }
    records
}

fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    // A blank line parses as a single empty field; skip it.
    if record.len() == 1 && record[0].is_empty() {
        return;
    }
    records.push(record);
}
