//! Record codec: splitting and joining delimited lines.
//!
//! One record is one line. Fields may be wrapped in double quotes;
//! inside a quoted field the delimiter loses its meaning and a doubled
//! quote stands for a literal one.

use crate::error::{CsvError, CsvResult};

/// Splits one delimited record into raw field lexemes.
///
/// `line_no` is the 1-based source line, used only for error reporting.
/// A quote still open at the end of the record is an error.
pub fn parse_record(line: &str, delimiter: char, line_no: usize) -> CsvResult<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

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
        } else if c == '"' && field.is_empty() {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }

    if in_quotes {
        return Err(CsvError::UnclosedQuote { line: line_no });
    }
    fields.push(field);
    Ok(fields)
}

/// Joins field lexemes into one delimited record.
///
/// A field containing the delimiter, a quote, or a line break is wrapped
/// in quotes, with embedded quotes doubled.
pub fn format_record<S: AsRef<str>>(fields: &[S], delimiter: char) -> String {
    let mut record = String::new();
    for (position, field) in fields.iter().enumerate() {
        if position > 0 {
            record.push(delimiter);
        }
        let field = field.as_ref();
        if field.contains(delimiter) || field.contains('"') || field.contains('\n') {
            record.push('"');
            record.push_str(&field.replace('"', "\"\""));
            record.push('"');
        } else {
            record.push_str(field);
        }
    }
    record
}
