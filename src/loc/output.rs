use crate::model::WeeklyChurn;
use anyhow::Result;
use console::style;

/// Print the weekly table and the `(week,count)` coordinate lists.
///
/// The coordinate lists paste directly into a pgfplots
/// `plot coordinates {...}` block.
pub fn print_report(churn: &WeeklyChurn) -> Result<()> {
    let mut insertion_coords = Vec::with_capacity(churn.len());
    let mut deletion_coords = Vec::with_capacity(churn.len());

    for (week, loc) in churn {
        println!(
            "week: {} insertions: {:<6} deletions: {:<6}",
            week, loc.insertions, loc.deletions
        );
        insertion_coords.push(format!("({},{})", week, loc.insertions));
        deletion_coords.push(format!("({},{})", week, loc.deletions));
    }

    println!();
    println!("{}", style("insertions:").bold());
    println!("{}", insertion_coords.join(" "));
    println!();
    println!("{}", style("deletions:").bold());
    println!("{}", deletion_coords.join(" "));

    Ok(())
}
