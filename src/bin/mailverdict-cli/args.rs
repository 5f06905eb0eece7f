use anyhow::Result;
use clap::{Parser, Subcommand};
use mailverdict::ProbeOptions;

#[derive(Parser)]
#[command(name = "mailverdict-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// graine du générateur pseudo-aléatoire (résultats reproductibles)
    #[arg(long)]
    pub seed: Option<u64>,

    /// supprime les latences simulées
    #[arg(long)]
    pub instant: bool,

    /// probabilité d'MX pour un domaine hors liste connue
    #[arg(long)]
    pub mx_probability: Option<f64>,

    /// probabilité de catch-all pour un domaine de la liste "catch-all probable"
    #[arg(long)]
    pub likely_catch_all_probability: Option<f64>,

    /// probabilité de catch-all pour un domaine quelconque
    #[arg(long)]
    pub catch_all_probability: Option<f64>,

    /// probabilité qu'une boîte générique (test, admin, ...) existe
    #[arg(long)]
    pub generic_mailbox_probability: Option<f64>,

    /// probabilité qu'une boîte non générique existe
    #[arg(long)]
    pub mailbox_probability: Option<f64>,

    /// logs détaillés sur stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// vérifie une adresse et affiche la carte de statut
    Verify { email: String },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn probe_options(&self) -> Result<ProbeOptions> {
        let mut options = if self.instant {
            ProbeOptions::instant()
        } else {
            ProbeOptions::default()
        };
        options.seed = self.seed;
        if let Some(p) = self.mx_probability {
            options.mx_probability = p;
        }
        if let Some(p) = self.likely_catch_all_probability {
            options.likely_catch_all_probability = p;
        }
        if let Some(p) = self.catch_all_probability {
            options.catch_all_probability = p;
        }
        if let Some(p) = self.generic_mailbox_probability {
            options.generic_mailbox_probability = p;
        }
        if let Some(p) = self.mailbox_probability {
            options.mailbox_probability = p;
        }
        options.validate()?;
        Ok(options)
    }
}
