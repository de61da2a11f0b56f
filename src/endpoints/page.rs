//! Server-rendered dashboard page.
//!
//! Narrative cells (findings, trivia, description, disclaimer) are inserted
//! verbatim since the dataset stores them with inline markup. Every other
//! dataset value is escaped.

use super::layout::page_shell;
use crate::config::Config;
use crate::error::DatasetError;
use crate::models::texture::{
    TEXTURE_CLASSES, TEXTURE_IMPLICATIONS, TEXTURE_INTRO, TRIANGLE_IMAGE_URL, TRIANGLE_USAGE,
};
use crate::models::{Dataset, SoilRecord};
use crate::resolver::{LocationDetail, Resolution, Selection, location_options, soil_type_options};
use crate::utils::html::{html_escape, script_json};
use serde::Serialize;
use tracing::warn;

const TITLE: &str = "Data Visualization for Soil Classification in Peninsular Malaysia";

#[derive(Debug, Clone)]
pub struct PageSettings {
    pub default_location: String,
    pub map_center: (f64, f64),
    pub map_zoom: u8,
    pub extra_css: Option<String>,
}

impl PageSettings {
    pub fn from_config(config: &Config, extra_css: Option<String>) -> Self {
        PageSettings {
            default_location: config.default_location.clone(),
            map_center: config.map_center,
            map_zoom: config.map_zoom,
            extra_css,
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::from_config(&Config::default(), None)
    }
}

#[derive(Serialize)]
struct Marker {
    lat: f64,
    lon: f64,
    popup: String,
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        if selected { " selected" } else { "" },
        html_escape(label)
    )
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

pub fn popup_text(record: &SoilRecord) -> String {
    [
        ("Location", record.location.as_str()),
        ("Soil Type", record.soil_type.as_str()),
        ("Fine Soil (%)", record.fine_soil_pct.raw.as_str()),
        ("Sand (%)", record.sand_pct.raw.as_str()),
        ("USCS Group Symbol", record.uscs_symbol.as_str()),
    ]
    .iter()
    .map(|(label, value)| format!("{}: {}", label, html_escape(value)))
    .collect::<Vec<_>>()
    .join("<br>")
}

fn render_sidebar(
    settings: &PageSettings,
    dataset: &Dataset,
    selection: &Selection,
    resolution: Option<&Resolution>,
) -> String {
    let selected_location = selection.location();
    let location_opts: String = location_options(dataset, &settings.default_location)
        .iter()
        .map(|l| option(l, l, Some(l.as_str()) == selected_location))
        .collect();

    let mut html = format!(
        r#"<div class="filter-title">FILTER OPTIONS</div>
      <form method="get" action="/">
        <label for="location">Select Location(s)</label>
        <select id="location" name="location" onchange="this.form.submit()">{}</select>
        <button type="submit">Show</button>
      </form>"#,
        location_opts
    );

    if let Some(Resolution::Location(detail)) = resolution {
        let info = detail.info;
        html.push_str(&format!(
            "<h3>Soil Type: {}</h3><h3>Fine Soil (%): {}</h3><h3>Sand (%): {}</h3><h3>USCS Group Symbol: {}</h3>",
            html_escape(&info.soil_type),
            html_escape(&info.fine_soil_pct.raw),
            html_escape(&info.sand_pct.raw),
            html_escape(&info.uscs_symbol),
        ));
    }

    // The form re-submits the current location, so a blank pick keeps it.
    // Once a soil type is chosen there is no blank entry to fall back to.
    if *selection != Selection::Unselected {
        let selected_soil = selection.soil_type();
        let (blank, current) = match selected_location {
            Some(location) => (
                option("", "", true),
                format!(
                    r#"<input type="hidden" name="location" value="{}">"#,
                    html_escape(location)
                ),
            ),
            None => (String::new(), String::new()),
        };
        let soil_opts: String = std::iter::once(blank)
            .chain(
                soil_type_options(dataset)
                    .into_iter()
                    .map(|s| option(s, s, Some(s) == selected_soil)),
            )
            .collect();
        html.push_str(&format!(
            r#"<br>
      <form method="get" action="/">
        {}
        <label for="soil_type">Select Soil Type(s)</label>
        <select id="soil_type" name="soil_type" onchange="this.form.submit()">{}</select>
      </form>"#,
            current, soil_opts
        ));
    }

    if let Some(Resolution::SoilType(matches)) = resolution {
        html.push_str(&format!(
            "<h3>Locations with {}:</h3><ul>",
            html_escape(&matches.soil_type)
        ));
        for location in &matches.locations {
            let escaped = html_escape(location);
            html.push_str(&format!(
                r#"<li><form class="inline" method="get" action="/"><button name="location" value="{0}">{0}</button></form></li>"#,
                escaped
            ));
        }
        html.push_str("</ul>");
    }

    html
}

fn render_map(settings: &PageSettings, rows: &[&SoilRecord]) -> String {
    let markers: Vec<Marker> = rows
        .iter()
        .filter_map(|r| match r.coordinates() {
            Some((lat, lon)) => Some(Marker {
                lat,
                lon,
                popup: popup_text(r),
            }),
            None => {
                warn!(location = %r.location, "Row has no usable coordinates, skipping marker");
                None
            }
        })
        .collect();

    let (lat, lon) = settings.map_center;
    format!(
        r#"<div id="map"></div>
    <script>
      const map = L.map('map').setView([{lat}, {lon}], {zoom});
      L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
        maxZoom: 19,
        attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
      }}).addTo(map);

      const markers = {markers};
      markers.forEach(m => L.marker([m.lat, m.lon]).addTo(map).bindPopup(m.popup));
    </script>"#,
        lat = lat,
        lon = lon,
        zoom = settings.map_zoom,
        markers = script_json(&markers),
    )
}

fn render_location_detail(settings: &PageSettings, detail: &LocationDetail) -> String {
    let info = detail.info;
    let location = html_escape(&detail.location);
    let mut html = render_map(settings, &detail.rows);

    if let Some(findings) = non_empty(&info.research_findings) {
        html.push_str(&format!(
            r#"<div class="gap"></div><h3>Preface:</h3><div class="narrative">{}</div>"#,
            findings
        ));
    }

    if let Some(trivia) = non_empty(&info.trivia) {
        html.push_str(&format!(
            r#"<div class="gap"></div><h3>Location Information for {}</h3><div class="narrative">{}</div>"#,
            location, trivia
        ));
    }

    if !info.photo_location.trim().is_empty() {
        html.push_str(&format!(
            r#"<figure><img src="{}" alt="{}"><figcaption>{}</figcaption></figure>"#,
            html_escape(&info.photo_location),
            location,
            location
        ));
    }

    html.push_str(
        r#"<h2>Filtered Dataset with USCS Classification</h2><div class="gap"></div><table class="dataframe table-no-border"><tbody>"#,
    );
    for (label, value) in info.attributes() {
        html.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>",
            label,
            html_escape(value)
        ));
    }
    html.push_str("</tbody></table>");

    html.push_str(&format!(
        r#"<div class="gap"></div><h3>Soil Type for {} : {}</h3><div class="narrative">{}</div>"#,
        location,
        html_escape(&info.soil_type),
        info.description
    ));

    html
}

fn render_texture_explainer() -> String {
    let mut html = String::from(r#"<section class="texture">"#);
    html.push_str(r#"<div class="narrative"><b>Soil Texture Classification</b></div>"#);
    html.push_str(&format!(r#"<div class="narrative">{}</div>"#, TEXTURE_INTRO));

    for class in TEXTURE_CLASSES {
        html.push_str(&format!(
            r#"<div class="narrative"><b>{}</b>: {}</div>"#,
            class.name, class.definition
        ));
    }

    html.push_str(r#"<div class="narrative"><b>Using the Soil Texture Triangle</b><ul>"#);
    for note in TRIANGLE_USAGE {
        html.push_str(&format!("<li>{}</li>", note));
    }
    html.push_str("</ul></div>");

    html.push_str(r#"<div class="narrative"><b>Implications of Soil Texture</b><ul>"#);
    for (heading, text) in TEXTURE_IMPLICATIONS {
        html.push_str(&format!("<li><b>{}:</b> {}</li>", heading, text));
    }
    html.push_str("</ul></div>");

    html.push_str(&format!(
        r#"<div class="triangle"><h3>Soil Texture Triangle Image</h3><img src="{}" alt="USDA Soil Texture Triangle"></div>"#,
        TRIANGLE_IMAGE_URL
    ));
    html.push_str(r#"<div class="narrative">This image provides a quick reference to the USDA soil texture classification system.</div>"#);
    html.push_str("</section>");
    html
}

/// Full dashboard. `resolution` is `None` when the selection matched nothing,
/// which drops the detail sections but keeps the texture explainer.
pub fn render_dashboard(
    settings: &PageSettings,
    dataset: &Dataset,
    selection: &Selection,
    resolution: Option<&Resolution>,
) -> String {
    let sidebar = render_sidebar(settings, dataset, selection, resolution);

    let mut main = format!("<h1>{}</h1>", TITLE);
    let detail = match resolution {
        Some(Resolution::Location(detail)) => Some(detail),
        _ => None,
    };

    if let Some(detail) = detail {
        main.push_str(&render_location_detail(settings, detail));
    }

    main.push_str(&render_texture_explainer());

    if let Some(disclaimer) = detail.and_then(|d| non_empty(&d.info.disclaimer)) {
        main.push_str(&format!(
            r#"<div class="gap"></div><div class="narrative">DISCLAIMER NOTE: {}</div>"#,
            disclaimer
        ));
    }

    page_shell(TITLE, settings.extra_css.as_deref(), &sidebar, &main)
}

/// A dataset that failed to load leaves nothing else safe to render.
pub fn render_error_page(settings: &PageSettings, err: &DatasetError) -> String {
    let main = format!(
        r#"<div class="error"><h2>Dataset unavailable</h2><p>{}</p></div>"#,
        html_escape(&err.to_string())
    );
    page_shell(TITLE, settings.extra_css.as_deref(), "", &main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_dataset;
    use crate::resolver::resolve;
    use crate::test_support::{csv_bytes, fixture_headers, row_fields, sample_csv};

    fn render(dataset: &Dataset, selection: Selection) -> String {
        let resolution = resolve(dataset, &selection).ok();
        render_dashboard(&PageSettings::default(), dataset, &selection, resolution.as_ref())
    }

    #[test]
    fn test_location_page_has_every_detail_section() {
        let dataset = parse_dataset(&sample_csv()).unwrap();
        let html = render(&dataset, Selection::Location("UTP Perak".to_string()));

        assert!(html.contains(r#"<div id="map"></div>"#));
        assert_eq!(html.matches(r#""popup":"#).count(), 2);
        assert!(html.contains("Preface:"));
        assert!(html.contains("<b>Findings</b> for UTP Perak"));
        assert!(html.contains("Location Information for UTP Perak"));
        assert!(html.contains(r#"<img src="https://example.com/UTP_Perak.jpg""#));
        assert!(html.contains("<tr><th>pH</th><td>12.5</td></tr>"));
        assert!(html.contains("Soil Type for UTP Perak : Clay"));
        assert!(html.contains("DISCLAIMER NOTE: Values are indicative only."));
        assert!(html.contains(r#"<option value="UTP Perak" selected>"#));
        assert!(html.contains(r#"name="soil_type""#));
    }

    #[test]
    fn test_not_found_keeps_only_explainer() {
        let dataset = parse_dataset(&sample_csv()).unwrap();
        let html = render(&dataset, Selection::Location("Nowhere".to_string()));

        assert!(!html.contains(r#"id="map""#));
        assert!(!html.contains("Preface:"));
        assert!(!html.contains("DISCLAIMER NOTE"));
        assert!(html.contains("Soil Texture Classification"));
        for class in TEXTURE_CLASSES {
            assert!(html.contains(&format!("<b>{}</b>:", class.name)));
        }
    }

    #[test]
    fn test_soil_type_page_lists_locations_without_detail() {
        let dataset = parse_dataset(&sample_csv()).unwrap();
        let html = render(&dataset, Selection::SoilType("Clay".to_string()));

        assert!(html.contains("Locations with Clay:"));
        assert!(html.contains(r#"value="UTP Perak">UTP Perak</button>"#));
        assert!(html.contains(r#"value="Site B">Site B</button>"#));
        assert!(!html.contains(r#"value="Kuantan">Kuantan</button>"#));
        assert!(html.contains(r#"<option value="Clay" selected>"#));
        assert!(!html.contains(r#"id="map""#));
    }

    #[test]
    fn test_soil_type_form_carries_current_location() {
        let dataset = parse_dataset(&sample_csv()).unwrap();
        let html = render(&dataset, Selection::Location("UTP Perak".to_string()));
        assert!(html.contains(r#"<input type="hidden" name="location" value="UTP Perak">"#));
        assert!(html.contains(r#"<option value="" selected></option>"#));
    }

    #[test]
    fn test_soil_type_form_has_no_blank_once_chosen() {
        let dataset = parse_dataset(&sample_csv()).unwrap();
        let html = render(&dataset, Selection::SoilType("Clay".to_string()));
        assert!(!html.contains(r#"<option value="""#));
        assert!(!html.contains(r#"type="hidden""#));
    }

    #[test]
    fn test_unselected_page_offers_default_first() {
        let dataset = parse_dataset(&sample_csv()).unwrap();
        let html = render(&dataset, Selection::Unselected);

        let first = html.find("<option").unwrap();
        assert!(html[first..].starts_with(r#"<option value="UTP Perak">"#));
        assert!(!html.contains(r#"name="soil_type""#));
        assert!(html.contains("Soil Texture Classification"));
    }

    #[test]
    fn test_table_values_are_escaped_but_narrative_is_not() {
        let headers = fixture_headers();
        let row = row_fields(&headers, "<i>Bukit</i>", "Clay", "4.0", "101.0", "1.0");
        let dataset = parse_dataset(&csv_bytes(&headers, &[row])).unwrap();
        let html = render(&dataset, Selection::Location("<i>Bukit</i>".to_string()));

        assert!(html.contains("<td>&lt;i&gt;Bukit&lt;/i&gt;</td>"));
        assert!(html.contains("<b>Findings</b> for <i>Bukit</i>"));
        assert!(!html.contains("<option value=\"<i>"));
    }

    #[test]
    fn test_rows_without_coordinates_get_no_marker() {
        let headers = fixture_headers();
        let rows = vec![
            row_fields(&headers, "UTP Perak", "Clay", "4.38", "100.97", "1.0"),
            row_fields(&headers, "UTP Perak", "Clay", "", "", "2.0"),
        ];
        let dataset = parse_dataset(&csv_bytes(&headers, &rows)).unwrap();
        let html = render(&dataset, Selection::Location("UTP Perak".to_string()));
        assert_eq!(html.matches(r#""popup":"#).count(), 1);
    }

    #[test]
    fn test_popup_lists_marker_fields() {
        let dataset = parse_dataset(&sample_csv()).unwrap();
        assert_eq!(
            popup_text(&dataset.records()[0]),
            "Location: UTP Perak<br>Soil Type: Clay<br>Fine Soil (%): 12.5<br>Sand (%): 12.5<br>USCS Group Symbol: CL"
        );
    }

    #[test]
    fn test_error_page_names_missing_columns_only() {
        let err = DatasetError::Schema {
            missing: vec!["pH".to_string()],
        };
        let html = render_error_page(&PageSettings::default(), &err);
        assert!(html.contains("Missing columns in the dataset: pH"));
        assert!(!html.contains("Soil Texture Classification"));
        assert!(!html.contains("<select"));
    }
}
