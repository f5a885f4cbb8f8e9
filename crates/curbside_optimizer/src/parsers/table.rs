use super::parser::ParseError;

pub(crate) fn split_row(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

pub(crate) fn column_index(header: &[&str], name: &str) -> Result<usize, ParseError> {
    header
        .iter()
        .position(|&column| column == name)
        .ok_or_else(|| ParseError::MissingColumn(String::from(name)))
}

pub(crate) fn field<'a>(
    row: &'a [&str],
    index: usize,
    line: usize,
) -> Result<&'a str, ParseError> {
    row.get(index).copied().ok_or(ParseError::MissingFields {
        line,
        expected: index + 1,
        found: row.len(),
    })
}

pub(crate) fn parse_f64(value: &str, line: usize) -> Result<f64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: String::from(value),
    })
}

pub(crate) fn parse_u32(value: &str, line: usize) -> Result<u32, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: String::from(value),
    })
}
