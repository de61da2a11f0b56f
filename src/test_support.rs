//! CSV fixtures shared by unit tests.

use crate::models::REQUIRED_COLUMNS;
use csv::WriterBuilder;

pub(crate) fn fixture_headers() -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .chain(["Research Findings", "Trivia", "Disclaimer"])
        .map(str::to_string)
        .collect()
}

/// One row laid out to match `headers` (header names are matched trimmed).
pub(crate) fn row_fields(
    headers: &[String],
    location: &str,
    soil_type: &str,
    latitude: &str,
    longitude: &str,
    depth: &str,
) -> Vec<String> {
    headers
        .iter()
        .map(|h| match h.trim() {
            "Location" => location.to_string(),
            "Latitude" => latitude.to_string(),
            "Longitude" => longitude.to_string(),
            "Depth (m)" => depth.to_string(),
            "Soil Type" => soil_type.to_string(),
            "USCS Group Symbol" => "CL".to_string(),
            "Description" => format!("{soil_type} soil, described."),
            "Photo Location" => format!("https://example.com/{}.jpg", location.replace(' ', "_")),
            "Research Findings" => format!("<b>Findings</b> for {location}"),
            "Trivia" => format!("Trivia about {location}"),
            "Disclaimer" => "Values are indicative only.".to_string(),
            _ => "12.5".to_string(),
        })
        .collect()
}

pub(crate) fn csv_bytes(headers: &[String], rows: &[Vec<String>]) -> Vec<u8> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(Vec::new());
    wtr.write_record(headers).unwrap();
    for row in rows {
        wtr.write_record(row).unwrap();
    }
    wtr.into_inner().unwrap()
}

/// Five rows over three locations; "UTP Perak" and "Site B" both have a Clay row.
pub(crate) fn sample_csv() -> Vec<u8> {
    let headers = fixture_headers();
    let rows = vec![
        row_fields(&headers, "UTP Perak", "Clay", "4.38", "100.97", "1.0"),
        row_fields(&headers, "Site B", "Clay", "3.1", "101.5", "1.0"),
        row_fields(&headers, "UTP Perak", "Clay", "4.38", "100.97", "2.0"),
        row_fields(&headers, "Kuantan", "Sand", "3.8", "103.3", "1.0"),
        row_fields(&headers, "Site B", "Silt", "3.1", "101.5", "3.0"),
    ];
    csv_bytes(&headers, &rows)
}
