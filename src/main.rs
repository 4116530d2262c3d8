use clap::Parser;
use raads14::Screener;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "RAADS-14 Screen questionnaire", long_about = None)]
struct Args {
    /// Do not clear the screen between questions
    #[arg(long)]
    no_clear: bool,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = Screener::raads14().and_then(|s| s.clear_screen(!args.no_clear).run());
    if let Err(e) = result {
        eprintln!("Error running screener: {}", e);
        std::process::exit(1);
    }
}
