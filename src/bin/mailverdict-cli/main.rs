mod args;
mod logging;
mod output;

use anyhow::{Context, Result};
use mailverdict::{FormController, Verifier};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use args::{Cli, Commands};
use output::OutputRow;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = cli.probe_options()?;
    info!(seed = ?options.seed, instant = cli.instant, "starting mailverdict");
    let form = FormController::new(Verifier::simulated(options)?);
    let mut rows: Vec<OutputRow> = Vec::new();

    if cli.stdin {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(email) = lines.next_line().await.context("read stdin")? {
            form.submit(&email).await;
            rows.push(form.state().into());
        }
    } else if let Some(Commands::Verify { email }) = &cli.cmd {
        form.submit(email).await;
        rows.push(form.state().into());
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    }

    output::write_reports(&rows, &cli)?;

    // codes de sortie : 0 OK, 2 non délivrable, 1 fatal
    if output::any_undeliverable(&rows) {
        std::process::exit(2);
    }
    Ok(())
}
