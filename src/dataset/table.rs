use std::io::BufRead;
use crate::dataset::PlotError;
/// Whitespace-separated numeric text table with an optional header line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}
impl NumericTable {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self {
            header: Vec::new(),
            rows,
        }
    }
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, PlotError> {
        Self::parse_leading(reader, usize::MAX)
    }
    /// Like [`NumericTable::parse`] but only the first `columns` tokens of each
    /// line are read; anything after them is ignored.
    pub fn parse_leading<R: BufRead>(reader: R, columns: usize) -> Result<Self, PlotError> {
        let mut table = NumericTable::default();
        let mut seen_first = false;
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| PlotError::Io {
                path: "<stream>".into(),
                source,
            })?;
            let tokens: Vec<&str> = line.split_whitespace().take(columns).collect();
            if tokens.is_empty() {
                continue;
            }
            if !seen_first {
                seen_first = true;
                if tokens.iter().any(|t| t.parse::<f64>().is_err()) {
                    table.header = tokens.iter().map(|t| t.to_string()).collect();
                    continue;
                }
            }
            let row = tokens
                .iter()
                .map(|t| {
                    t.parse::<f64>().map_err(|_| PlotError::InvalidNumber {
                        line: line_no,
                        token: t.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            table.rows.push(row);
        }
        Ok(table)
    }
    pub fn parse_str(text: &str) -> Result<Self, PlotError> {
        Self::parse(text.as_bytes())
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn min_width(&self) -> usize {
        self.rows.iter().map(Vec::len).min().unwrap_or(0)
    }
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
    /// Values of column `idx` taken from the rows wide enough to carry it.
    pub fn column(&self, idx: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.get(idx).copied()).collect()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn header_is_detected_and_kept() {
        let table =
            NumericTable::parse_str("xaxis_fq\tfull_sig\n0.0\t1.5\n0.15\t2.5\n").unwrap();
        assert_eq!(table.header, vec!["xaxis_fq", "full_sig"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column(1), vec![1.5, 2.5]);
    }
    #[test]
    fn numeric_first_line_is_data() {
        let table = NumericTable::parse_str("0.25\n-0.5\n\n1e-3\n").unwrap();
        assert!(table.header.is_empty());
        assert_eq!(table.column(0), vec![0.25, -0.5, 1e-3]);
    }
    #[test]
    fn ragged_rows_are_kept() {
        let table = NumericTable::parse_str("a b c d\n1 2 3 4\n5 6\n").unwrap();
        assert_eq!(table.min_width(), 2);
        assert_eq!(table.max_width(), 4);
        assert_eq!(table.column(3), vec![4.0]);
    }
    #[test]
    fn leading_columns_ignore_trailing_tokens() {
        let table = NumericTable::parse_leading("0.5 junk\n-0.25\n1.0\tnote here\n".as_bytes(), 1)
            .unwrap();
        assert!(table.header.is_empty());
        assert_eq!(table.column(0), vec![0.5, -0.25, 1.0]);
        assert!(NumericTable::parse_str("1.0 2.0\n0.5 junk\n").is_err());
    }
    #[test]
    fn bad_token_reports_line_number() {
        let err = NumericTable::parse_str("h1 h2\n1 2\n3 oops\n").unwrap_err();
        match err {
            PlotError::InvalidNumber { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
