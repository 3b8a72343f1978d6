//! Routes command implementation

use std::io::Write;
use std::path::Path;

use console::Style;
use tracing::{info, warn};

use crate::cli::RoutesArgs;
use crate::error::Result;
use crate::routes::RouteTable;
use crate::walker::validate_extension;

/// Run routes command
pub fn run(args: RoutesArgs) -> Result<()> {
    validate_extension(&args.ext)?;

    let table = RouteTable::collect(&args.input, &args.ext, &args.prefix)?;
    if table.is_empty() {
        warn!(input = %args.input.display(), ext = %args.ext, "no documents found");
    }

    if args.output == Path::new("-") {
        return print_table(&table, &mut std::io::stdout().lock());
    }

    table.write_to(&args.output)?;
    info!(routes = table.len(), path = %args.output.display(), "wrote route table");
    println!(
        "{} {} {} to {}",
        Style::new().green().bold().apply_to("Wrote"),
        Style::new().bold().apply_to(table.len()),
        if table.len() == 1 { "route" } else { "routes" },
        args.output.display()
    );

    Ok(())
}

fn print_table(table: &RouteTable, out: &mut impl Write) -> Result<()> {
    out.write_all(table.render().as_bytes())?;
    out.flush()?;
    Ok(())
}
