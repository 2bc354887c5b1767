// Vessel QnA Snapshot - Main Entry Point
// Fetches one qna-snapshot for a vessel and prints it

use clap::Parser;
use vessel_qna::{
    CONFIG_FILE, DEFAULT_IMO, DEFAULT_QUESTION_NO, QnaRequest, VesselInfoClient, VesselInfoConfig,
    load_api_token, v_summary, verbosity::set_verbosity_level,
};

#[derive(Parser, Debug)]
#[command(version, about = "Fetch a vessel QnA snapshot from the vessel-info API")]
struct Cli {
    /// Vessel IMO number
    #[arg(default_value = DEFAULT_IMO)]
    imo: String,

    /// Question number
    #[arg(default_value = DEFAULT_QUESTION_NO)]
    question_no: String,

    /// Configuration file
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Increase output detail (-v config, -vv request trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    set_verbosity_level(cli.verbose);

    let config = VesselInfoConfig::load(&cli.config)?;
    let token = load_api_token(&config.api)?;
    let client = VesselInfoClient::new(&token, config.api.base_url.as_str())?;

    let request = QnaRequest::new(cli.imo, cli.question_no);
    v_summary!("Getting QnA snapshot for IMO: {}, Question: {}", request.imo, request.question_no);
    // Failure is already reported on stdout; exit status stays 0
    let _ = client.fetch_qna_snapshot(&request.imo, &request.question_no).await;

    Ok(())
}
