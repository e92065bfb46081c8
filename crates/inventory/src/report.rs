//! Fixed-format stock listing.

use stockroom_core::{ItemId, Quantity};

pub const REPORT_HEADER: &str = "--- Items Report ---";
pub const REPORT_FOOTER: &str = "--------------------";

/// Snapshot of stock rendered as a header, one `<item> -> <qty>` line per
/// item, and a footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockReport {
    rows: Vec<(ItemId, Quantity)>,
}

impl StockReport {
    pub fn new(rows: impl IntoIterator<Item = (ItemId, Quantity)>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    pub fn rows(&self) -> &[(ItemId, Quantity)] {
        &self.rows
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(REPORT_HEADER.to_string());
        lines.extend(self.rows.iter().map(|(item, qty)| format!("{item} -> {qty}")));
        lines.push(REPORT_FOOTER.to_string());
        lines
    }
}

impl core::fmt::Display for StockReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_header_and_footer() {
        let report = StockReport::new(Vec::new());
        assert_eq!(report.lines(), vec![REPORT_HEADER, REPORT_FOOTER]);
    }

    #[test]
    fn rows_render_between_header_and_footer() {
        let report = StockReport::new(vec![
            (ItemId::parse("apple").unwrap(), 7),
            (ItemId::parse("orange").unwrap(), 15),
        ]);

        assert_eq!(
            report.to_string(),
            "--- Items Report ---\napple -> 7\norange -> 15\n--------------------\n"
        );
    }
}
