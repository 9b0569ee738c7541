use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use ferryte::{Diagram, MovePlan};

#[derive(Parser, Debug)]
#[command(name = "ferryte", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply one transform and print its move plan as JSON.
    Plan(PlanArgs),
    /// Run the four showcase transforms and summarize their plans.
    Demo,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Comma-separated partition parts, e.g. `8,7,5,5,3,1`.
    #[arg(long)]
    partition: String,

    /// Transform to apply.
    #[arg(long, value_enum)]
    transform: TransformArg,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TransformArg {
    Conjugate,
    Sort,
    Convolve,
    Franklin,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Demo => cmd_demo(),
    }
}

fn parse_parts(spec: &str) -> anyhow::Result<Vec<u32>> {
    spec.split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .with_context(|| format!("invalid part '{}'", part.trim()))
        })
        .collect()
}

fn apply(diagram: &mut Diagram, transform: TransformArg) -> anyhow::Result<MovePlan> {
    let plan = match transform {
        TransformArg::Conjugate => ferryte::conjugate(diagram),
        TransformArg::Sort => ferryte::sort_parts(diagram),
        TransformArg::Convolve => ferryte::convolve(diagram)?,
        TransformArg::Franklin => ferryte::franklin_involute(diagram)?,
    };
    Ok(plan)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let parts = parse_parts(&args.partition)?;
    let mut diagram = Diagram::from_parts(parts)?;
    let plan = apply(&mut diagram, args.transform)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&plan)?
    } else {
        serde_json::to_string(&plan)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_demo() -> anyhow::Result<()> {
    let showcases: [(&str, TransformArg, &[u32]); 4] = [
        (
            "franklin involution",
            TransformArg::Franklin,
            &[12, 11, 10, 9, 5, 4],
        ),
        ("conjugation", TransformArg::Conjugate, &[7, 6, 5, 3, 1]),
        ("sorting parts", TransformArg::Sort, &[3, 11, 8, 12, 7, 14]),
        ("convolution", TransformArg::Convolve, &[8, 7, 5, 5, 3, 1]),
    ];

    for (label, transform, parts) in showcases {
        let mut diagram = Diagram::from_parts(parts.to_vec())?;
        let before = diagram.partition().parts().to_vec();
        let plan = apply(&mut diagram, transform)?;
        println!(
            "{label}: {before:?} -> {:?} ({} moves in {} stages)",
            diagram.partition().parts(),
            plan.move_count(),
            plan.stages.len(),
        );
    }
    Ok(())
}
