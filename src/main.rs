use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use snp_lens::analysis::AnalysisResult;
use snp_lens::config::{AnalysisEnv, Config};
use snp_lens::parser::{InputFormat, Snp};

const EXIT_SUCCESS: i32 = 0;
const EXIT_SERVER: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_ANALYSIS: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the analysis endpoint over HTTP (default if no subcommand)
    Serve {
        /// Address to listen on (overrides server.bind from the config file)
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Analyze a raw genotype file locally and print the predictions
    Analyze {
        /// VCF, 23andMe or tab-separated file ("-" reads stdin)
        file: PathBuf,

        /// Input format
        #[arg(short, long, value_enum, default_value_t = InputFormat::Auto)]
        format: InputFormat,

        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,

        /// Also write the JSON result to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "snp-lens")]
#[command(about = "Placeholder SNP pathogenicity scoring service", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/snp-lens/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Request body accepted by the analysis endpoint
#[derive(Serialize)]
struct AnalysisRequest<'a> {
    snps: &'a [Snp],
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve { bind: None });

    // Logging is not up yet, so config errors go straight to stderr
    let config_path = cli.config.map(PathBuf::from);
    let config = match snp_lens::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = snp_lens::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    snp_lens::logging::init_tracing(cli.verbose, config.log_format);

    let env = AnalysisEnv::from_env(&config.api_key_env);
    debug!(
        api_key_env = %config.api_key_env,
        api_configured = env.api_key_configured(),
        "Environment loaded"
    );

    let code = match command {
        Commands::Serve { bind } => run_serve(&config, bind, env).await,
        Commands::Analyze {
            file,
            format,
            json,
            output,
        } => run_analyze(&file, format, json, output, cli.verbose, &env),
    };

    std::process::exit(code);
}

async fn run_serve(config: &Config, bind: Option<String>, env: AnalysisEnv) -> i32 {
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());
    let addr: SocketAddr = match bind.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(bind = %bind, error = %e, "Invalid bind address");
            return EXIT_CONFIG;
        }
    };

    if !env.api_key_configured() {
        info!(
            api_key_env = %config.api_key_env,
            "No API key configured; responses will report api_configured=false"
        );
    }

    match snp_lens::server::serve(addr, env, config.server.max_body_bytes).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Server failed");
            EXIT_SERVER
        }
    }
}

fn run_analyze(
    file: &Path,
    format: InputFormat,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
    env: &AnalysisEnv,
) -> i32 {
    let start_time = Instant::now();

    let input = match read_input(file) {
        Ok(input) => input,
        Err(e) => {
            error!(file = %file.display(), error = %e, "Failed to read input");
            return EXIT_IO;
        }
    };

    let parsed = snp_lens::parser::parse(&input, format);
    info!(
        format = %parsed.format,
        snps = parsed.snps.len(),
        errors = parsed.errors.len(),
        "Parsed input"
    );
    for parse_error in &parsed.errors {
        warn!("{}", parse_error);
    }

    if let Err(errors) = snp_lens::parser::validate_snps(&parsed.snps) {
        for validation_error in errors {
            warn!("{}", validation_error);
        }
    }

    let (snps, skipped) = snp_lens::parser::select_scoreable(parsed.snps);
    if !skipped.is_empty() {
        info!(skipped = skipped.len(), "Skipped records that cannot be scored");
        for reason in &skipped {
            debug!("{}", reason);
        }
    }

    if snps.is_empty() {
        error!("No scoreable SNPs found in input");
        return EXIT_IO;
    }

    let body = match serde_json::to_vec(&AnalysisRequest { snps: &snps }) {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Failed to encode request");
            return EXIT_ANALYSIS;
        }
    };

    let mut request = http::Request::new(body);
    *request.method_mut() = http::Method::POST;
    let response = snp_lens::handle(&request, env);

    if !response.status().is_success() {
        let message = serde_json::from_slice::<serde_json::Value>(response.body())
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| response.status().to_string());
        error!(status = response.status().as_u16(), "Analysis failed: {}", message);
        return EXIT_ANALYSIS;
    }

    let result: AnalysisResult = match serde_json::from_slice(response.body()) {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "Failed to decode analysis result");
            return EXIT_ANALYSIS;
        }
    };

    if let Some(path) = output {
        if let Err(e) = snp_lens::output::save_analysis(&path, &result) {
            error!(error = %format!("{:#}", e), "Failed to write output");
            return EXIT_IO;
        }
        info!(path = %path.display(), "Analysis saved");
    }

    if json {
        println!("{}", String::from_utf8_lossy(response.body()));
    } else {
        let use_colors = snp_lens::output::should_use_colors();
        if verbose {
            for variant in &result.results {
                println!(
                    "{}",
                    snp_lens::output::format_variant_detail(variant, use_colors)
                );
                println!();
            }
        } else {
            println!(
                "{}",
                snp_lens::output::format_results_table(&result, use_colors)
            );
            println!();
        }
        println!("{}", snp_lens::output::format_summary(&result));
    }

    debug!(elapsed = ?start_time.elapsed(), "Analysis finished");
    EXIT_SUCCESS
}

fn read_input(file: &Path) -> std::io::Result<String> {
    if file.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        std::fs::read_to_string(file)
    }
}
