use super::{
    parser::ParseError,
    table::{column_index, field, parse_f64, parse_u32, split_row},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRecord {
    pub zone_id: u32,
    pub name: String,
    pub centroid_x: f64,
    pub centroid_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyRecord {
    pub zone_a: u32,
    pub zone_b: u32,
}

/// Parses `zones.csv`: one record per zone with its display name and
/// centroid coordinates.
pub fn parse_zones(text: &str) -> Result<Vec<ZoneRecord>, ParseError> {
    let mut lines = text.lines().enumerate();
    let (_, header) = lines.next().ok_or(ParseError::EmptyFile)?;
    let header = split_row(header);

    let id_column = column_index(&header, "zone_id")?;
    let name_column = column_index(&header, "name")?;
    let x_column = column_index(&header, "centroid_x")?;
    let y_column = column_index(&header, "centroid_y")?;

    let mut records = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let line_number = index + 1;
        let row = split_row(line);

        records.push(ZoneRecord {
            zone_id: parse_u32(field(&row, id_column, line_number)?, line_number)?,
            name: String::from(field(&row, name_column, line_number)?),
            centroid_x: parse_f64(field(&row, x_column, line_number)?, line_number)?,
            centroid_y: parse_f64(field(&row, y_column, line_number)?, line_number)?,
        });
    }

    Ok(records)
}

/// Parses `zone_adjacency.csv`: undirected edges between zone identities.
pub fn parse_adjacency(text: &str) -> Result<Vec<AdjacencyRecord>, ParseError> {
    let mut lines = text.lines().enumerate();
    let (_, header) = lines.next().ok_or(ParseError::EmptyFile)?;
    let header = split_row(header);

    let a_column = column_index(&header, "zone1_id")?;
    let b_column = column_index(&header, "zone2_id")?;

    let mut records = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let line_number = index + 1;
        let row = split_row(line);

        records.push(AdjacencyRecord {
            zone_a: parse_u32(field(&row, a_column, line_number)?, line_number)?,
            zone_b: parse_u32(field(&row, b_column, line_number)?, line_number)?,
        });
    }

    Ok(records)
}
