use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use funurl::algo::modify::ModifyRequest;
use funurl::error::UrlError;
use funurl::logging;
use funurl::ops::{self, ComponentSelection};

const BANNER: &str = r"  __             _   _ ____  _
 / _|_   _ _ __ | | | |  _ \| |
| |_| | | | '_ \| | | | |_) | |
|  _| |_| | | | | |_| |  _ <| |___
|_|  \__,_|_| |_|\___/|_| \_\_____|
";

#[derive(Parser)]
#[command(
    name = "funurl",
    version,
    about = "A Swiss Army knife for URLs: parse, modify, encode, decode and dedupe"
)]
struct Cli {
    /// Suppress the startup banner
    #[arg(long, global = true, env = "FUNURL_SILENT")]
    silent: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and extract components from a URL
    Parse {
        /// URL to parse (read from stdin when omitted)
        url: Option<String>,
        /// Extract protocol/scheme
        #[arg(short = 'c', long)]
        protocol: bool,
        /// Extract subdomain
        #[arg(short, long)]
        subdomain: bool,
        /// Extract top-level domain
        #[arg(short, long)]
        tld: bool,
        /// Extract hostname
        #[arg(short = 'n', long)]
        hostname: bool,
        /// Extract port
        #[arg(short = 'o', long)]
        port: bool,
        /// Extract path
        #[arg(short, long)]
        path: bool,
        /// Extract query string
        #[arg(short, long)]
        query: bool,
        /// Extract fragment
        #[arg(short, long)]
        fragment: bool,
        /// Print every component as JSON
        #[arg(long, conflicts_with_all = ["protocol", "subdomain", "tld", "hostname", "port", "path", "query", "fragment"])]
        json: bool,
    },
    /// Modify components of a URL
    Modify {
        /// URL to modify (read from stdin when omitted)
        url: Option<String>,
        /// Change protocol/scheme
        #[arg(short = 'c', long)]
        protocol: Option<String>,
        /// Update path
        #[arg(short, long)]
        path: Option<String>,
        /// Change query string
        #[arg(short, long)]
        query: Option<String>,
        /// Update fragment
        #[arg(short, long)]
        fragment: Option<String>,
    },
    /// URL-encode a string
    Encode {
        /// String to encode (read from stdin when omitted)
        input: Option<String>,
        /// Encode as query component (uses + for spaces)
        #[arg(short = 'c', long)]
        query: bool,
        /// Apply the encoding twice
        #[arg(short, long)]
        double: bool,
    },
    /// URL-decode a string
    Decode {
        /// String to decode (read from stdin when omitted)
        input: Option<String>,
        /// Decode as query component (+ becomes space)
        #[arg(short = 'c', long)]
        query: bool,
        /// Apply the decoding twice
        #[arg(short, long)]
        double: bool,
    },
    /// Remove duplicate URLs based on structure
    Dedupe {
        /// URLs to deduplicate (read from stdin, one per line, when omitted)
        urls: Vec<String>,
    },
    /// Show the structure key used by dedupe
    Key {
        /// URL to inspect (read from stdin when omitted)
        url: Option<String>,
    },
}

/// Process-wide settings handed to every command.
struct RunContext {
    silent: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let ctx = RunContext { silent: cli.silent };
    if let Err(err) = run(&ctx, cli.command) {
        eprintln!("funurl error: {err:#}");
        std::process::exit(1);
    }
}

fn run(ctx: &RunContext, command: Commands) -> Result<()> {
    if !ctx.silent {
        eprint!("{BANNER}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Parse {
            url,
            protocol,
            subdomain,
            tld,
            hostname,
            port,
            path,
            query,
            fragment,
            json,
        } => {
            let sel = ComponentSelection {
                protocol,
                subdomain,
                tld,
                hostname,
                port,
                path,
                query,
                fragment,
            };
            cmd_parse(&mut out, &single_input(url)?, sel, json)
        }
        Commands::Modify {
            url,
            protocol,
            path,
            query,
            fragment,
        } => {
            let req = ModifyRequest {
                scheme: protocol,
                path,
                query,
                fragment,
            };
            cmd_modify(&mut out, &single_input(url)?, &req)
        }
        Commands::Encode {
            input,
            query,
            double,
        } => {
            let input = single_input(input)?;
            writeln!(out, "{}", ops::op_encode(&input, query, double))?;
            Ok(())
        }
        Commands::Decode {
            input,
            query,
            double,
        } => {
            let input = single_input(input)?;
            let decoded = ops::op_decode(&input, query, double)?;
            writeln!(out, "{decoded}")?;
            Ok(())
        }
        Commands::Dedupe { urls } => cmd_dedupe(&mut out, urls),
        Commands::Key { url } => {
            let report = ops::op_structure_key(&single_input(url)?)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            Ok(())
        }
    }
}

/// Positional argument, or else the first non-blank line of stdin.
fn single_input(arg: Option<String>) -> Result<String> {
    if let Some(value) = arg {
        return Ok(value);
    }
    ops::read_first_candidate(io::stdin().lock())
        .context("failed to read stdin")?
        .ok_or_else(|| UrlError::NoInput.into())
}

fn cmd_parse(out: &mut impl Write, url: &str, sel: ComponentSelection, json: bool) -> Result<()> {
    if json {
        let value = ops::op_parse_json(url)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    let components = ops::op_parse(url)?;
    if sel.is_empty() {
        writeln!(out, "{}", components.format_all())?;
        if !components.query_params.is_empty() {
            writeln!(out)?;
            for param in &components.query_params {
                writeln!(out, "  {} = {}", param.name, param.value)?;
            }
        }
        return Ok(());
    }

    for value in ops::op_select(&components, sel) {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

fn cmd_modify(out: &mut impl Write, url: &str, req: &ModifyRequest) -> Result<()> {
    if req.is_empty() {
        tracing::warn!("modify called without any of --protocol, --path, --query, --fragment");
    }
    let modified = ops::op_modify(url, req)?;
    writeln!(out, "{modified}")?;
    Ok(())
}

fn cmd_dedupe(out: &mut impl Write, urls: Vec<String>) -> Result<()> {
    let candidates = if urls.is_empty() {
        ops::read_candidates(io::stdin().lock()).context("failed to read stdin")?
    } else {
        urls
    };
    tracing::info!(candidates = candidates.len(), "deduplicating");

    let retained = ops::op_dedupe(candidates.as_slice());
    tracing::info!(
        retained = retained.len(),
        dropped = candidates.len() - retained.len(),
        "dedupe finished"
    );
    for url in retained {
        writeln!(out, "{url}")?;
    }
    Ok(())
}
