use clap::Parser;
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "marksheet")]
#[command(about = "Interactive exam-marks calculator with PDF export", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Where to write the exported PDF (defaults to ./marks_report.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(marksheet::report::REPORT_FILE_NAME));

    if cli.verbose {
        eprintln!("Export path: {}", output.display());
    }

    let app = marksheet::tui::App::new(output, cli.verbose);

    match marksheet::tui::run_tui(app).await {
        Ok(Some(summary)) => {
            // Echo the last computed report now that the terminal is restored
            let use_colors = marksheet::report::should_use_colors();
            println!("{}", marksheet::report::format_report_table(&summary, use_colors));
            std::process::exit(EXIT_SUCCESS);
        }
        Ok(None) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Terminal error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}
