//! Print a mixing report from the command line
//! Usage: cargo run --bin mix_report -- ratio --resin-pct 30

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use resincalc::models::{DilutionInput, RatioInput};
use resincalc::tools::{dilution, ratio, reference, CalculationBlockedResponse};

#[derive(Debug, Parser)]
#[command(name = "mix_report")]
#[command(about = "Live resin cartridge ratio and dilution calculator")]
struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split a batch into distillate, live resin and terpene masses
    Ratio {
        #[arg(long, default_value_t = RatioInput::default().cart_count)]
        cart_count: u32,
        #[arg(long, default_value_t = RatioInput::default().grams_per_cart)]
        grams_per_cart: f64,
        #[arg(long, default_value_t = RatioInput::default().strain_count)]
        strain_count: u32,
        #[arg(long, default_value_t = RatioInput::default().distillate_pct)]
        distillate_pct: u32,
        #[arg(long, default_value_t = RatioInput::default().resin_pct)]
        resin_pct: u32,
        #[arg(long, default_value_t = RatioInput::default().terp_pct)]
        terp_pct: u32,
    },
    /// Estimate resin filler dilution and final terpene content
    Dilution {
        #[arg(long, default_value_t = DilutionInput::default().thc_pct)]
        thc_pct: f64,
        #[arg(long, default_value_t = DilutionInput::default().filler_pct)]
        filler_pct: f64,
        #[arg(long, default_value_t = DilutionInput::default().resin_used_pct)]
        resin_used_pct: u32,
        #[arg(long, default_value_t = DilutionInput::default().batch_mass)]
        batch_mass: f64,
        #[arg(long, default_value_t = DilutionInput::default().extra_terp_pct)]
        extra_terp_pct: u32,
    },
    /// Print the terpene reference table
    Terpenes,
    /// Print credits
    Credits,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "resincalc=debug" } else { "resincalc=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn print_blocked(blocked: &CalculationBlockedResponse) -> ! {
    eprintln!("{}", blocked.error);
    eprintln!("{}", blocked.correction);
    std::process::exit(1);
}

fn print_lines(report: &[String], warnings: &[String]) {
    for line in report {
        println!("{}", line);
    }
    for warning in warnings {
        println!("Warning: {}", warning);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Ratio {
            cart_count,
            grams_per_cart,
            strain_count,
            distillate_pct,
            resin_pct,
            terp_pct,
        } => {
            let input = RatioInput {
                cart_count,
                grams_per_cart,
                strain_count,
                distillate_pct,
                resin_pct,
                terp_pct,
            };
            match ratio::check_ratio(input) {
                Ok(r) => print_lines(&r.report, &r.warnings),
                Err(blocked) => print_blocked(&blocked),
            }
        }
        Command::Dilution {
            thc_pct,
            filler_pct,
            resin_used_pct,
            batch_mass,
            extra_terp_pct,
        } => {
            let input = DilutionInput {
                thc_pct,
                filler_pct,
                resin_used_pct,
                batch_mass,
                extra_terp_pct,
            };
            match dilution::calculate_dilution(input) {
                Ok(r) => print_lines(&r.report, &r.warnings),
                Err(blocked) => print_blocked(&blocked),
            }
        }
        Command::Terpenes => {
            let info = reference::terpene_info(None)
                .map_err(|missing| missing.error)?;
            println!("{}", info.guideline);
            println!();
            print!("{}", reference::terpene_markdown());
        }
        Command::Credits => {
            println!("{}", reference::CREDITS.trim());
        }
    }

    Ok(())
}
