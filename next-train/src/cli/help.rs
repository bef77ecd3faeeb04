//! Usage text.

use std::io::{self, Write};

/// Printed for `help`, for `help` typed at a prompt, and for unrecognised
/// argument shapes.
pub const USAGE: &str = "\
next-train - next MBTA subway departure

Run without arguments to use interactive mode.
At any numbered prompt, type q to quit or help to see this text.

Run with 3 arguments if you already know the route, stop and direction:

    next-train ROUTE STOP DIRECTION

Route and stop must match the names shown in the menus, with spaces
replaced by underscores. The lines are:
    Red Line
    Mattapan Trolley
    Orange Line
    Green Line B
    Green Line C
    Green Line D
    Green Line E
    Blue Line

Stops are named as they appear in the menus, e.g.:
    Alewife
    Davis
    Porter
    Harvard
    Central
    Kendall/MIT
    Charles/MGH
    Park Street
    ...

Direction is the MBTA direction id:
    0 = South/West/Outbound
    1 = North/East/Inbound
Trains leave a terminus in one direction only, so the direction given for
a terminus is ignored.

Example:
    next-train Red_Line Park_Street 0

Run with the single argument `test` to check every route, stop and
direction in turn.
";

/// Write [`USAGE`] surrounded by blank lines.
pub fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{USAGE}")?;
    writeln!(out)
}
