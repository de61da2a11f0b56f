use crate::models::record::SoilRecord;
use csv::StringRecord;

/// Columns a dataset must carry (after header trimming) to be usable at all.
pub const REQUIRED_COLUMNS: [&str; 21] = [
    "Location",
    "Latitude",
    "Longitude",
    "Depth (m)",
    "Clay (%)",
    "Silt (%)",
    "Sand (%)",
    "Gravels (%)",
    "D10",
    "D30",
    "D60",
    "CU",
    "CC",
    "1D inverted resistivity",
    "Moisture content (%)",
    "pH",
    "Soil Type",
    "Fine Soil (%)",
    "USCS Group Symbol",
    "Description",
    "Photo Location",
];

/// Optional narrative columns read into [`SoilRecord`] when present.
pub const NARRATIVE_COLUMNS: [&str; 3] = ["Research Findings", "Trivia", "Disclaimer"];

/// Required columns absent from `headers`, in required-list order.
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h.as_ref() == **required))
        .map(|required| required.to_string())
        .collect()
}

/// The loaded survey table. Immutable once built.
///
/// Every header and raw row is retained alongside the typed records, so
/// columns outside the required set are still reachable.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
    records: Vec<SoilRecord>,
}

impl Dataset {
    pub(crate) fn new(headers: Vec<String>, rows: Vec<StringRecord>, records: Vec<SoilRecord>) -> Self {
        Dataset {
            headers,
            rows,
            records,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn records(&self) -> &[SoilRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw cell by row index and (trimmed) column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.rows.get(row)?.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_missing_columns_when_all_present() {
        let mut headers: Vec<&str> = REQUIRED_COLUMNS.to_vec();
        headers.push("Trivia");
        assert!(missing_columns(&headers).is_empty());
    }

    #[test]
    fn test_missing_columns_keep_required_order() {
        let headers: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| *c != "pH" && *c != "Location")
            .collect();
        assert_eq!(missing_columns(&headers), vec!["Location", "pH"]);
    }

    #[test]
    fn test_column_match_is_case_sensitive() {
        let headers: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .map(|c| if *c == "pH" { "PH".to_string() } else { c.to_string() })
            .collect();
        assert_eq!(missing_columns(&headers), vec!["pH"]);
    }
}
