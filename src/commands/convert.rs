//! Convert command implementation

use console::{Style, Term};

use crate::cli::ConvertArgs;
use crate::convert::{ConvertSummary, convert_tree};
use crate::error::Result;
use crate::progress::{InteractiveProgressReporter, ProgressReporter, SilentProgressReporter};
use crate::walker::validate_extension;

/// Run convert command
///
/// `show_progress` is false when `--quiet` or `--verbose` was given; the bar
/// is also hidden whenever stderr is not a terminal.
pub fn run(args: ConvertArgs, show_progress: bool) -> Result<()> {
    validate_extension(&args.ext)?;

    let mut reporter: Box<dyn ProgressReporter> =
        if show_progress && !args.dry_run && Term::stderr().is_term() {
            Box::new(InteractiveProgressReporter::new())
        } else {
            Box::new(SilentProgressReporter)
        };

    let summary = convert_tree(
        &args.input,
        &args.output,
        &args.ext,
        args.dry_run,
        reporter.as_mut(),
    )?;

    print_summary(&summary, &args);
    Ok(())
}

fn print_summary(summary: &ConvertSummary, args: &ConvertArgs) {
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    if args.dry_run {
        for path in &summary.outputs {
            println!("[DRY RUN] Would write {}", path.display());
        }
    }

    let verb = if args.dry_run {
        "Would convert"
    } else {
        "Converted"
    };
    println!(
        "{} {} {} into {}",
        Style::new().green().bold().apply_to(verb),
        bold.apply_to(summary.converted),
        plural(summary.converted, "post", "posts"),
        args.output.display()
    );
    if summary.skipped > 0 {
        println!(
            "{}",
            dim.apply_to(format!(
                "Skipped {} {} without front matter",
                summary.skipped,
                plural(summary.skipped, "file", "files")
            ))
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
