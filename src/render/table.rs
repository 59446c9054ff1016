use std::fmt;

use super::rows::TableRow;
use crate::controller::{Inquiry, ListSnapshot};

/// Row shown in place of an empty table body
pub const NO_DATA: &str = "No data found!";
/// Shown for a missing nested field
pub const PLACEHOLDER: &str = "-";

pub const DEFAULT_MEMBER_IMAGE: &str = "/img/profile/defaultUser.svg";
pub const DEFAULT_PROPERTY_IMAGE: &str = "/img/property/default.png";

/// Resolves relative asset paths against the asset base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    base_url: String,
}

impl Assets {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, relative: &str) -> String {
        format!("{}/{}", self.base_url, relative.trim_start_matches('/'))
    }

    /// Resolved image URL, or the local default asset when there is none
    pub fn image_or(&self, relative: Option<&str>, fallback: &str) -> String {
        match relative.map(str::trim).filter(|path| !path.is_empty()) {
            Some(path) => self.url(path),
            None => fallback.to_string(),
        }
    }
}

/// Text rendering of one page of records plus its pagination footer
pub struct TableView<'a, R> {
    rows: &'a [R],
    inquiry: &'a Inquiry,
    total: u64,
    assets: &'a Assets,
}

impl<'a, R: TableRow> TableView<'a, R> {
    pub fn new(rows: &'a [R], inquiry: &'a Inquiry, total: u64, assets: &'a Assets) -> Self {
        Self {
            rows,
            inquiry,
            total,
            assets,
        }
    }

    pub fn from_snapshot(snapshot: &'a ListSnapshot<R>, assets: &'a Assets) -> Self {
        Self::new(&snapshot.list, &snapshot.inquiry, snapshot.total, assets)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<R: TableRow> fmt::Display for TableView<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<String> = R::HEADERS.iter().map(|h| h.to_string()).collect();
        let body: Vec<Vec<String>> = self.rows.iter().map(|row| row.cells(self.assets)).collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &body {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        writeln!(f, "{}", line(&headers))?;
        writeln!(
            f,
            "{}",
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-")
        )?;

        if body.is_empty() {
            writeln!(f, "{NO_DATA}")?;
        }
        for row in &body {
            writeln!(f, "{}", line(row))?;
        }

        write!(
            f,
            "page {} | {} rows per page | total {}",
            self.inquiry.page(),
            self.inquiry.limit(),
            self.total
        )
    }
}
