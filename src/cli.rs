// src/cli.rs
//! Command-line front end over the same session the GUI drives.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::Serialize;

use crate::{
    config::{consts::*, options::{DataOptions, ExportFormat}},
    csv,
    dataset::{Dataset, FacilityTankRecord, Field, TANK_TABLE_FIELDS, field_or_default},
    file,
    filter::Category,
    group::FacilityGroup,
    maps,
    core::sanitize::or_na,
    session::Session,
};

#[derive(Parser, Debug)]
#[command(name = "ust-cli", version, about = "Look up Kentucky UST facilities, tanks and owners")]
pub struct Cli {
    /// Facility/tank table (JSON array)
    #[arg(long, global = true, env = ENV_DATA_FILE, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Owner table (JSON array)
    #[arg(long, global = true, env = ENV_OWNERS_FILE, default_value = DEFAULT_OWNERS_FILE)]
    pub owners: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Free-text search: exact id, or substring of name/address
    Search {
        #[arg(long, value_enum)]
        by: SearchBy,
        term: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the dropdown values for county or owner
    Values {
        #[arg(long, value_enum)]
        by: ListBy,
    },
    /// Rows whose county/owner equals one of the listed values
    Select {
        #[arg(long, value_enum)]
        by: ListBy,
        value: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Owner contact details (case-insensitive name match)
    Owner { name: String },
    /// Map link for a latitude/longitude pair
    Map {
        #[arg(allow_hyphen_values = true)]
        latitude: String,
        #[arg(allow_hyphen_values = true)]
        longitude: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SearchBy {
    Name,
    Id,
    Address,
}

impl From<SearchBy> for Category {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Name => Category::AiName,
            SearchBy::Id => Category::AiId,
            SearchBy::Address => Category::Address,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ListBy {
    County,
    Owner,
}

impl From<ListBy> for Category {
    fn from(by: ListBy) -> Self {
        match by {
            ListBy::County => Category::County,
            ListBy::Owner => Category::Owner,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutFormat {
    #[default]
    Text,
    Csv,
    Tsv,
    Json,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutFormat::Text)]
    pub format: OutFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    crate::log::init();
    execute(Cli::parse())
}

pub fn execute(cli: Cli) -> Result<()> {
    let opts = DataOptions { facilities: cli.data, owners: cli.owners };
    let dataset = Dataset::load(&opts).wrap_err("loading dataset")?;
    let mut session = Session::new(dataset);

    match cli.command {
        Command::Search { by, term, output } => {
            session.set_category(Some(by.into()));
            session.set_search_term(term);
            session.search();
            emit(&session.groups(), &output)
        }
        Command::Select { by, value, output } => {
            session.set_category(Some(by.into()));
            session.select_value(&value);
            emit(&session.groups(), &output)
        }
        Command::Values { by } => {
            session.set_category(Some(by.into()));
            let mut out = io::stdout().lock();
            for v in session.unique_values() {
                writeln!(out, "{v}")?;
            }
            Ok(())
        }
        Command::Owner { name } => {
            session.show_owner(Some(&name));
            let mut out = io::stdout().lock();
            match session.owner() {
                Some(owner) => {
                    for (label, value) in owner.detail_lines() {
                        writeln!(out, "{label}: {value}")?;
                    }
                }
                None => writeln!(out, "No owner record for {name:?}")?,
            }
            Ok(())
        }
        Command::Map { latitude, longitude } => {
            match session.open_map(Some(&latitude), Some(&longitude)) {
                Some(url) => {
                    println!("{url}");
                    Ok(())
                }
                None => Err(eyre!("{}", session.notice().unwrap_or(COORDS_UNAVAILABLE))),
            }
        }
    }
}

/* ---------- output ---------- */

#[derive(Serialize)]
struct GroupOut<'a> {
    ai_id: Option<&'a str>,
    tanks: &'a [&'a FacilityTankRecord],
}

fn emit(groups: &[FacilityGroup<'_>], output: &OutputArgs) -> Result<()> {
    if let (Some(path), Some(fmt)) = (&output.out, delimited(output.format)) {
        file::write_export_to(path, groups, fmt.delim())
            .map_err(|e| eyre!("{e}"))
            .wrap_err_with(|| format!("writing {}", path.display()))?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    let text = match output.format {
        OutFormat::Text => render_text(groups),
        OutFormat::Json => {
            let out: Vec<GroupOut<'_>> = groups
                .iter()
                .map(|g| GroupOut { ai_id: g.id(), tanks: &g.tanks })
                .collect();
            let mut s = serde_json::to_string_pretty(&out)?;
            s.push('\n');
            s
        }
        OutFormat::Csv | OutFormat::Tsv => {
            let fmt = delimited(output.format).unwrap_or(ExportFormat::Csv);
            csv::to_export_string(groups, fmt.delim())
        }
    };

    match &output.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                file::ensure_directory(parent).map_err(|e| eyre!("{e}"))?;
            }
            std::fs::write(path, text).wrap_err_with(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }
    Ok(())
}

fn delimited(fmt: OutFormat) -> Option<ExportFormat> {
    match fmt {
        OutFormat::Csv => Some(ExportFormat::Csv),
        OutFormat::Tsv => Some(ExportFormat::Tsv),
        _ => None,
    }
}

/// Same layout as the GUI block: header lines, then field rows × tank columns.
pub fn render_text(groups: &[FacilityGroup<'_>]) -> String {
    if groups.is_empty() {
        return format!("{PLACEHOLDER}\n");
    }

    let mut s = String::new();
    for g in groups {
        let f = g.facility;
        s.push_str(&format!("== {}\n", f.get(Field::AiName).unwrap_or_default()));
        s.push_str(&format!(
            "Address: {}, {}, {} {}\n",
            field_or_default(f, Field::Address1),
            field_or_default(f, Field::City),
            field_or_default(f, Field::State),
            field_or_default(f, Field::Zip),
        ));
        s.push_str(&format!("County: {}\n", field_or_default(f, Field::County)));
        match maps::facility_map_url(f) {
            Ok(url) => s.push_str(&format!("Map: {url}\n")),
            Err(e) => s.push_str(&format!("Map: {e}\n")),
        }

        let mut rows: Vec<(String, Vec<&str>)> = TANK_TABLE_FIELDS
            .iter()
            .map(|&field| {
                (field.label(), g.tanks.iter().map(|t| field_or_default(t, field)).collect())
            })
            .collect();
        rows.push((
            s!("Owner Name"),
            g.tanks.iter().map(|t| or_na(t.get(Field::OwnerName))).collect(),
        ));

        let label_w = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        for (label, cells) in rows {
            s.push_str(&format!("  {label:<label_w$}  {}\n", cells.join(" | ")));
        }
        s.push('\n');
    }
    s
}
