use clap::Parser;
use std::path::PathBuf;

use floorsketch::gui::App;

#[derive(Parser)]
#[command(name = "floorsketch")]
#[command(about = "Sketch floor plans: projects, rooms, and dragged-out walls")]
struct Cli {
    /// Plan file to open on launch (skips the landing screen)
    #[arg(value_name = "PLAN")]
    plan_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let plan_file = args.plan_file;
    iced::application(
        move || App::new(plan_file.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .window_size((1100.0, 720.0))
    .run()?;
    Ok(())
}
