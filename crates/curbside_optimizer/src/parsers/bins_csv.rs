use crate::problem::waste_bin::WasteCategory;

use super::{
    parser::ParseError,
    table::{column_index, field, parse_f64, split_row},
};

/// One Smart-Bin dataset row. Locations are not part of the dataset; the
/// loader scatters them over the service area.
#[derive(Debug, Clone, PartialEq)]
pub struct BinRecord {
    pub fill_level: f64,
    pub category: WasteCategory,
    pub container: String,
}

/// Fill level assumed when the `FL_B` field is blank.
pub const DEFAULT_FILL_LEVEL: f64 = 50.0;

/// Parses the Smart-Bin export: `FL_B` is the fill level before
/// collection on a 0-100 scale, `Recyclable fraction` the waste category
/// and `Container Type` the descriptive shape tag.
pub fn parse_bins(text: &str) -> Result<Vec<BinRecord>, ParseError> {
    let mut lines = text.lines().enumerate();
    let (_, header) = lines.next().ok_or(ParseError::EmptyFile)?;
    let header = split_row(header);

    let fill_column = column_index(&header, "FL_B")?;
    let container_column = column_index(&header, "Container Type")?;
    let category_column = column_index(&header, "Recyclable fraction")?;

    let mut records = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let line_number = index + 1;
        let row = split_row(line);

        let fill_field = field(&row, fill_column, line_number)?;
        let fill_level = if fill_field.is_empty() {
            DEFAULT_FILL_LEVEL
        } else {
            parse_f64(fill_field, line_number)?
        };

        records.push(BinRecord {
            fill_level,
            category: WasteCategory::from_label(field(&row, category_column, line_number)?),
            container: String::from(field(&row, container_column, line_number)?),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FILL_LEVEL, parse_bins};
    use crate::parsers::parser::ParseError;
    use crate::problem::waste_bin::WasteCategory;

    #[test]
    fn test_parse_bins() {
        let text = "Container Type,Recyclable fraction,FL_B\n\
                    Cubic,Recyclable,82.5\n\
                    Silvertop-a,Non Recyclable,40\n\
                    Rectangular,Mixed,\n";

        let records = parse_bins(text).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].fill_level, 82.5);
        assert_eq!(records[0].category, WasteCategory::Recyclable);
        assert_eq!(records[0].container, "Cubic");

        assert_eq!(records[1].category, WasteCategory::NonRecyclable);

        // Blank fill level falls back to the default.
        assert_eq!(records[2].fill_level, DEFAULT_FILL_LEVEL);
    }

    #[test]
    fn test_malformed_fill_level() {
        let text = "Container Type,Recyclable fraction,FL_B\nCubic,Mixed,n/a\n";

        let error = parse_bins(text).unwrap_err();
        assert!(matches!(error, ParseError::InvalidNumber { line: 2, .. }));
    }

    #[test]
    fn test_missing_header_column() {
        let text = "Container Type,FL_B\nCubic,50\n";

        let error = parse_bins(text).unwrap_err();
        assert!(matches!(
            error,
            ParseError::MissingColumn(column) if column == "Recyclable fraction"
        ));
    }
}
