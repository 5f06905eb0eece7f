#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use mailverdict::{FormState, StatusCard, VerificationStatus};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
pub struct OutputRow {
    pub email: String,
    pub status: VerificationStatus,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "String::is_empty"))]
    pub error: String,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub card: Option<StatusCard>,
}

impl From<FormState> for OutputRow {
    fn from(state: FormState) -> Self {
        let card = state.card();
        Self {
            email: state.email,
            status: state.status,
            error: state.error_message,
            card,
        }
    }
}

pub fn write_reports(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

/// Rows that are neither deliverable nor empty input.
pub fn any_undeliverable(rows: &[OutputRow]) -> bool {
    rows.iter()
        .any(|row| row.status != VerificationStatus::NoInput && !row.status.is_deliverable())
}

fn write_human(rows: &[OutputRow]) -> Result<()> {
    for (idx, row) in rows.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("== {}", row.email);
        if !row.error.is_empty() {
            println!("! {}", row.error);
        }
        if let Some(card) = &row.card {
            print!("{card}");
        }
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in rows {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(CSV_HEADER)?;
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(CSV_HEADER)?;
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

#[cfg(feature = "with-csv")]
const CSV_HEADER: [&str; 7] = [
    "email", "status", "label", "reason", "domain", "provider", "error",
];

#[cfg(feature = "with-csv")]
fn csv_record(row: &OutputRow) -> Vec<String> {
    let (label, reason, domain, provider) = match &row.card {
        Some(card) => (
            card.presentation.label.to_string(),
            card.presentation.reason.to_string(),
            card.domain.name.clone(),
            card.provider
                .as_ref()
                .map(|p| p.domain.clone())
                .unwrap_or_default(),
        ),
        None => Default::default(),
    };
    vec![
        row.email.clone(),
        row.status.to_string(),
        label,
        reason,
        domain,
        provider,
        row.error.clone(),
    ]
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: VerificationStatus) -> OutputRow {
        OutputRow::from(FormState {
            email: "x@gmail.com".to_string(),
            status,
            is_checking: false,
            error_message: String::new(),
            domain: "gmail.com".to_string(),
        })
    }

    #[test]
    fn undeliverable_detection() {
        assert!(!any_undeliverable(&[row(VerificationStatus::Safe), row(VerificationStatus::Role)]));
        assert!(!any_undeliverable(&[row(VerificationStatus::NoInput)]));
        assert!(any_undeliverable(&[
            row(VerificationStatus::CatchAll),
            row(VerificationStatus::Disabled)
        ]));
    }

    #[test]
    fn no_input_row_has_no_card() {
        assert!(row(VerificationStatus::NoInput).card.is_none());
        assert!(row(VerificationStatus::Unknown).card.is_some());
    }

    #[cfg(feature = "with-csv")]
    #[test]
    fn csv_record_columns() {
        let record = csv_record(&row(VerificationStatus::InboxFull));
        assert_eq!(
            record,
            vec![
                "x@gmail.com",
                "inboxFull",
                "Undeliverable (Full)",
                "INBOX FULL",
                "gmail.com",
                "google.com",
                ""
            ]
        );
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn json_row_shape() {
        let value = serde_json::to_value(row(VerificationStatus::Role)).expect("json");
        assert_eq!(value["status"], "role");
        assert_eq!(value["card"]["presentation"]["reason"], "ACCEPT EMAIL");
        assert_eq!(value["card"]["account"]["role"], true);
        assert!(value.get("error").is_none());
    }
}
