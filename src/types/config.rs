use serde::{Deserialize, Serialize};

use crate::error::{Result, RowmergeError};

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

/// Default number of rows per page
pub const DEFAULT_PAGE_LENGTH: usize = 10;

/// Page lengths offered by the host's length menu
pub const PAGE_LENGTH_MENU: [PageLength; 7] = [
    PageLength::Rows(10),
    PageLength::Rows(25),
    PageLength::Rows(50),
    PageLength::Rows(100),
    PageLength::Rows(250),
    PageLength::Rows(500),
    PageLength::All,
];

/// Sort direction for a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One column of a multi-key sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: usize,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }

    /// Parse `COL` or `COL:asc` / `COL:desc`.
    pub fn parse(s: &str) -> Result<Self> {
        let (col, dir) = match s.split_once(':') {
            Some((c, d)) => (c, Some(d)),
            None => (s, None),
        };
        let column = col
            .trim()
            .parse::<usize>()
            .map_err(|_| RowmergeError::Config(format!("invalid sort column: {col}")))?;
        let direction = match dir.map(|d| d.trim().to_ascii_lowercase()).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(RowmergeError::Config(format!(
                    "invalid sort direction: {other}"
                )))
            }
        };
        Ok(Self { column, direction })
    }
}

/// Rows per page, or every row on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PageLengthRepr", into = "PageLengthRepr")]
pub enum PageLength {
    Rows(usize),
    All,
}

impl Default for PageLength {
    fn default() -> Self {
        Self::Rows(DEFAULT_PAGE_LENGTH)
    }
}

impl PageLength {
    /// Parse a row count, `all`, or `-1`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s == "-1" {
            return Ok(Self::All);
        }
        s.parse::<usize>()
            .map(Self::Rows)
            .map_err(|_| RowmergeError::Config(format!("invalid page length: {s}")))
    }
}

/// Wire form: a row count, `-1`, or the string `"all"`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PageLengthRepr {
    Count(i64),
    Keyword(String),
}

impl TryFrom<PageLengthRepr> for PageLength {
    type Error = String;

    fn try_from(repr: PageLengthRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            PageLengthRepr::Count(-1) => Ok(Self::All),
            PageLengthRepr::Count(n) => usize::try_from(n)
                .map(Self::Rows)
                .map_err(|_| format!("invalid page length: {n}")),
            PageLengthRepr::Keyword(k) if k.eq_ignore_ascii_case("all") => Ok(Self::All),
            PageLengthRepr::Keyword(k) => Err(format!("invalid page length: {k}")),
        }
    }
}

impl From<PageLength> for PageLengthRepr {
    fn from(len: PageLength) -> Self {
        match len {
            PageLength::Rows(n) => Self::Count(i64::try_from(n).unwrap_or(i64::MAX)),
            PageLength::All => Self::Keyword("all".to_string()),
        }
    }
}

/// Merge and table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeConfig {
    /// Column within the frozen pane whose values are merged
    pub merge_column: usize,
    /// Number of leading columns materialized into the frozen pane
    pub frozen_columns: usize,
    /// Default row height in pixels
    pub row_height: f32,
    pub page_length: PageLength,
    /// Sort keys applied before paging; should lead with the merge column
    pub sort: Vec<SortKey>,
    /// Reject draws whose panes differ in row count
    pub check_pane_alignment: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            merge_column: 0,
            frozen_columns: 1,
            row_height: DEFAULT_ROW_HEIGHT,
            page_length: PageLength::default(),
            sort: vec![SortKey::asc(0), SortKey::asc(1)],
            check_pane_alignment: true,
        }
    }
}

impl MergeConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frozen_columns == 0 {
            return Err(RowmergeError::Config(
                "frozenColumns must be at least 1".to_string(),
            ));
        }
        if self.merge_column >= self.frozen_columns {
            return Err(RowmergeError::ColumnOutOfRange {
                column: self.merge_column,
                columns: self.frozen_columns,
            });
        }
        if self.page_length == PageLength::Rows(0) {
            return Err(RowmergeError::Config(
                "pageLength must be positive or \"all\"".to_string(),
            ));
        }
        if !self.row_height.is_finite() || self.row_height < 0.0 {
            return Err(RowmergeError::Config(format!(
                "invalid rowHeight: {}",
                self.row_height
            )));
        }
        Ok(())
    }
}
