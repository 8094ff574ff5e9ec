//! Output formatting shared by `scan` and `batch`.

use cardex_core::ContactRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Column order for CSV output and the batch summary.
pub const CSV_COLUMNS: [&str; 10] = [
    "name", "role", "company", "emails", "phones", "pincodes", "address", "linkedin", "twitter",
    "facebook",
];

pub fn format_record(record: &ContactRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

/// Flatten a record into CSV cells; lists are joined with `"; "`.
pub fn csv_cells(record: &ContactRecord) -> [String; 10] {
    fn opt(v: &Option<String>) -> String {
        v.clone().unwrap_or_default()
    }
    fn list(v: &[String]) -> String {
        v.join("; ")
    }
    fn social(v: &Option<Vec<String>>) -> String {
        v.as_deref().map(list).unwrap_or_default()
    }

    [
        opt(&record.name),
        opt(&record.role),
        opt(&record.company),
        list(&record.emails),
        list(&record.phones),
        list(&record.pincodes),
        opt(&record.address),
        social(&record.linkedin),
        social(&record.twitter),
        social(&record.facebook),
    ]
}

fn format_csv(record: &ContactRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_COLUMNS)?;
    wtr.write_record(csv_cells(record))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ContactRecord) -> String {
    let mut output = String::new();
    let none = "-";

    output.push_str(&format!("Name:     {}\n", record.name.as_deref().unwrap_or(none)));
    output.push_str(&format!("Role:     {}\n", record.role.as_deref().unwrap_or(none)));
    output.push_str(&format!("Company:  {}\n", record.company.as_deref().unwrap_or(none)));
    output.push_str(&format!("Address:  {}\n", record.address.as_deref().unwrap_or(none)));

    let sections: [(&str, Option<&[String]>); 6] = [
        ("Emails", Some(record.emails.as_slice())),
        ("Phones", Some(record.phones.as_slice())),
        ("Pincodes", Some(record.pincodes.as_slice())),
        ("LinkedIn", record.linkedin.as_deref()),
        ("Twitter", record.twitter.as_deref()),
        ("Facebook", record.facebook.as_deref()),
    ];

    for (label, values) in sections {
        let Some(values) = values else { continue };
        if values.is_empty() {
            continue;
        }
        output.push_str(&format!("\n{}:\n", label));
        for value in values {
            output.push_str(&format!("  {}\n", value));
        }
    }

    output
}
