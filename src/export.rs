use crate::models::{ListingStatus, Property};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Printable report
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "pdf" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => anyhow::bail!("unknown export format '{}'", other),
        }
    }
}

/// Which field groups go into an export
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportFields {
    /// Type, location, rooms and area
    pub basic_info: bool,
    pub price_details: bool,
    pub amenities: bool,
    /// Host name and phone
    pub contact_info: bool,
    pub images: bool,
}

impl Default for ExportFields {
    fn default() -> Self {
        Self {
            basic_info: true,
            price_details: true,
            amenities: true,
            contact_info: true,
            images: false,
        }
    }
}

/// Render listings in the requested format
pub fn export(
    properties: &[&Property],
    format: ExportFormat,
    fields: ExportFields,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    match format {
        ExportFormat::Text => to_text(properties, fields, generated_at),
        ExportFormat::Csv => to_csv(properties, fields),
        ExportFormat::Json => to_json(properties, fields, generated_at),
    }
}

fn to_text(
    properties: &[&Property],
    fields: ExportFields,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let mut out = String::from("My Favorite Properties - HomeFinder\n\n");
    writeln!(out, "Generated on: {}", generated_at.format("%Y-%m-%d"))?;
    writeln!(out, "Total Properties: {}\n", properties.len())?;

    for (i, p) in properties.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, p.title)?;
        if fields.basic_info {
            writeln!(out, "   Type: {}", p.property_type)?;
            writeln!(
                out,
                "   Location: {}, {}",
                p.location.neighborhood, p.location.city
            )?;
            writeln!(
                out,
                "   Bedrooms: {} | Bathrooms: {} | Area: {}m²",
                or_na(p.bedrooms),
                or_na(p.bathrooms),
                or_na(p.area)
            )?;
        }
        if fields.price_details {
            let basis = match p.status {
                ListingStatus::ForRent => "(monthly)",
                ListingStatus::ForSale => "(total)",
            };
            writeln!(out, "   Price: {} {}", format_price(p.price), basis)?;
            writeln!(out, "   Status: {}", p.status.label())?;
        }
        if fields.amenities && !p.amenities.is_empty() {
            writeln!(out, "   Amenities: {}", p.amenities.join(", "))?;
        }
        if fields.contact_info {
            if let Some(host) = &p.host {
                writeln!(out, "   Host: {} ({})", host.name, host.phone)?;
            }
        }
        if fields.images && !p.images.is_empty() {
            writeln!(out, "   Images: {}", p.images.join(", "))?;
        }
        out.push('\n');
    }

    Ok(out)
}

fn to_csv(properties: &[&Property], fields: ExportFields) -> Result<String> {
    let mut headers = vec!["Title", "Type", "City", "Neighborhood", "Price", "Status"];
    if fields.basic_info {
        headers.extend(["Bedrooms", "Bathrooms", "Area"]);
    }
    if fields.amenities {
        headers.push("Amenities");
    }
    if fields.contact_info {
        headers.extend(["Host Name", "Host Phone"]);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers).context("Failed to write CSV header")?;

    for p in properties {
        let mut row = vec![
            p.title.clone(),
            p.property_type.clone(),
            p.location.city.clone(),
            p.location.neighborhood.clone(),
            p.price.to_string(),
            p.status.to_string(),
        ];
        if fields.basic_info {
            row.push(or_blank(p.bedrooms));
            row.push(or_blank(p.bathrooms));
            row.push(or_blank(p.area));
        }
        if fields.amenities {
            row.push(p.amenities.join("; "));
        }
        if fields.contact_info {
            let (name, phone) = p
                .host
                .as_ref()
                .map(|h| (h.name.clone(), h.phone.clone()))
                .unwrap_or_default();
            row.push(name);
            row.push(phone);
        }
        writer
            .write_record(&row)
            .with_context(|| format!("Failed to write CSV row for {}", p.id))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}

fn to_json(
    properties: &[&Property],
    fields: ExportFields,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let items: Vec<Value> = properties
        .iter()
        .map(|p| {
            let mut data = Map::new();
            data.insert("id".into(), json!(p.id));
            data.insert("title".into(), json!(p.title));
            if fields.basic_info {
                data.insert("type".into(), json!(p.property_type));
                data.insert(
                    "location".into(),
                    json!({ "city": p.location.city, "neighborhood": p.location.neighborhood }),
                );
                data.insert("bedrooms".into(), json!(p.bedrooms));
                data.insert("bathrooms".into(), json!(p.bathrooms));
                data.insert("area".into(), json!(p.area));
            }
            if fields.price_details {
                data.insert("price".into(), json!(p.price));
                data.insert("status".into(), json!(p.status));
            }
            if fields.amenities {
                data.insert("amenities".into(), json!(p.amenities));
            }
            if fields.contact_info {
                data.insert("host".into(), json!(p.host));
            }
            if fields.images {
                data.insert("images".into(), json!(p.images));
            }
            Value::Object(data)
        })
        .collect();

    let document = json!({
        "properties": items,
        "exportedAt": generated_at.to_rfc3339(),
    });
    serde_json::to_string_pretty(&document).context("Failed to serialize export")
}

/// Whole dirhams with space-grouped thousands, e.g. "2 500 000 MAD"
pub fn format_price(price: f64) -> String {
    let whole = price.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{} MAD", grouped)
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn or_blank<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{p1, p2};
    use crate::models::Host;
    use chrono::TimeZone;

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn price_groups_thousands() {
        assert_eq!(format_price(2_500_000.0), "2 500 000 MAD");
        assert_eq!(format_price(8500.0), "8 500 MAD");
        assert_eq!(format_price(950.4), "950 MAD");
        assert_eq!(format_price(0.0), "0 MAD");
    }

    #[test]
    fn text_report_lists_each_property() {
        let mut riad = p2();
        riad.host = Some(Host {
            name: "Ahmed Benali".to_string(),
            phone: "+212 661-234567".to_string(),
        });
        let apartment = p1();
        let report = export(
            &[&riad, &apartment],
            ExportFormat::Text,
            ExportFields::default(),
            generated(),
        )
        .unwrap();

        assert!(report.starts_with("My Favorite Properties - HomeFinder\n"));
        assert!(report.contains("Generated on: 2024-03-01"));
        assert!(report.contains("Total Properties: 2"));
        assert!(report.contains("1. Riad Saada"));
        assert!(report.contains("   Location: Medina, Marrakech"));
        assert!(report.contains("Bedrooms: N/A | Bathrooms: N/A | Area: 180m²"));
        assert!(report.contains("   Price: 2 500 000 MAD (total)"));
        assert!(report.contains("   Price: 8 500 MAD (monthly)"));
        assert!(report.contains("   Status: For Rent"));
        assert!(report.contains("   Host: Ahmed Benali (+212 661-234567)"));
    }

    #[test]
    fn text_report_omits_unselected_groups() {
        let fields = ExportFields {
            basic_info: false,
            contact_info: false,
            images: true,
            ..ExportFields::default()
        };
        let apartment = p1();
        let report = export(&[&apartment], ExportFormat::Text, fields, generated()).unwrap();

        assert!(report.contains("1. "));
        assert!(!report.contains("   Type:"));
        assert!(!report.contains("   Host:"));
        assert!(report.contains("   Amenities: WiFi, Parking"));
        assert!(report.ends_with("\n\n"));
    }

    #[test]
    fn csv_quotes_titles_with_commas() {
        let mut apartment = p1();
        apartment.title = "Bright, quiet flat".to_string();
        let csv = export(&[&apartment], ExportFormat::Csv, ExportFields::default(), generated()).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Title,Type,City,Neighborhood,Price,Status,Bedrooms,Bathrooms,Area,Amenities,Host Name,Host Phone"
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"Bright, quiet flat\",Apartment,Casablanca,Anfa,8500,for-rent,,,95,WiFi; Parking,,"
        );
    }

    #[test]
    fn csv_drops_unselected_columns() {
        let fields = ExportFields {
            basic_info: false,
            amenities: false,
            contact_info: false,
            ..ExportFields::default()
        };
        let riad = p2();
        let csv = export(&[&riad], ExportFormat::Csv, fields, generated()).unwrap();
        assert_eq!(csv.lines().next().unwrap(), "Title,Type,City,Neighborhood,Price,Status");
    }

    #[test]
    fn json_export_includes_selected_groups() {
        let fields = ExportFields {
            contact_info: false,
            images: true,
            ..ExportFields::default()
        };
        let riad = p2();
        let raw = export(&[&riad], ExportFormat::Json, fields, generated()).unwrap();
        let doc: Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(doc["exportedAt"], "2024-03-01T09:30:00+00:00");
        let item = &doc["properties"][0];
        assert_eq!(item["title"], riad.title);
        assert_eq!(item["status"], "for-sale");
        assert_eq!(item["location"]["neighborhood"], "Medina");
        assert!(item["images"].is_array());
        assert!(item.get("host").is_none());
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }
}
