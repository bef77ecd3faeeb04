//! The three ways a run can go: interactive menus, a single lookup from
//! command-line names, or a sweep over the whole network.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::clock::Clock;
use crate::departure::departure_message;
use crate::domain::{BRANCH_TERMINI, Direction, Route, Stop, forced_direction};
use crate::mbta::Transport;
use crate::session::Session;

use super::AppError;
use super::prompt::Prompter;

/// Menu-driven lookups until the user quits.
pub async fn interactive<T, C, R, W>(
    session: &Session<T, C>,
    prompter: &mut Prompter<R, W>,
) -> Result<(), AppError>
where
    T: Transport,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let routes = session.routes();
    if routes.is_empty() {
        writeln!(prompter.output(), "No routes available.")?;
        return Ok(());
    }

    loop {
        let out = prompter.output();
        writeln!(out)?;
        writeln!(out, "Please select a route: ")?;
        for (i, route) in routes.iter().enumerate() {
            writeln!(out, "{}) {}", i + 1, route.name)?;
        }
        let Some(route_num) = prompter.select(1, routes.len(), None)? else {
            return Ok(());
        };
        let route = &routes[route_num - 1];

        let stops = session.stops(route).await?;
        if stops.is_empty() {
            writeln!(prompter.output(), "No stops listed for {}.", route.name)?;
            continue;
        }

        let out = prompter.output();
        writeln!(out)?;
        writeln!(out, "Please select a stop: ")?;
        for stop in stops.iter() {
            writeln!(out, "{}) {}", stop.position, stop.name)?;
        }
        let Some(stop_num) = prompter.select(1, stops.len(), None)? else {
            return Ok(());
        };
        let stop = &stops[stop_num - 1];

        let Some(direction) = choose_direction(route, stop, prompter)? else {
            return Ok(());
        };

        let next = session.next_departure(route, stop, direction).await?;
        let out = prompter.output();
        writeln!(out)?;
        writeln!(out, "{}", departure_message(next.as_ref()))?;
        writeln!(out)?;
        writeln!(out, "Would you like to check another time?")?;

        match prompter.select(0, 1, Some("Enter 0 to quit or 1 to continue..."))? {
            Some(1) => {}
            _ => return Ok(()),
        }
    }
}

/// The forced direction at a terminus, otherwise the user's pick.
fn choose_direction<R: BufRead, W: Write>(
    route: &Route,
    stop: &Stop,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<Direction>, AppError> {
    if let Some(direction) = forced_direction(route, stop) {
        return Ok(Some(direction));
    }

    let out = prompter.output();
    writeln!(out)?;
    writeln!(out, "Which direction are you riding?")?;
    for direction in Direction::ALL {
        writeln!(out, "{}) {}", direction.index() + 1, route.direction_label(direction))?;
    }

    let choice = prompter.select(1, 2, None)?;
    Ok(choice.and_then(|n| Direction::from_index(n - 1)))
}

/// One lookup by command-line names, e.g. `Red_Line Park_Street 0`.
pub async fn lookup<T: Transport, C: Clock>(
    session: &Session<T, C>,
    out: &mut impl Write,
    route_name: &str,
    stop_name: &str,
    direction: Direction,
) -> Result<(), AppError> {
    let route = session.find_route(route_name)?;
    let stops = session.stops(route).await?;
    let stop = Stop::find(&stops, stop_name)?;

    let next = session.next_departure(route, stop, direction).await?;
    writeln!(out, "{}", departure_message(next.as_ref()))?;
    Ok(())
}

/// Look up every route, stop and direction, branch termini first.
///
/// Each check passes the "wrong" direction where a terminus forces one,
/// so the output shows the override taking effect. Throttling keeps the
/// sweep inside the rate limit however long it runs.
pub async fn sweep<T: Transport, C: Clock>(
    session: &Session<T, C>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    for &(route_name, stop_name, direction) in BRANCH_TERMINI {
        let Ok(route) = session.find_route(route_name) else {
            warn!(route = route_name, "branch terminus route not listed, skipping");
            continue;
        };
        let stops = session.stops(route).await?;
        let Ok(stop) = Stop::find(&stops, stop_name) else {
            warn!(route = route_name, stop = stop_name, "branch terminus not listed, skipping");
            continue;
        };

        let wrong_way = Direction::ALL[1 - direction.index()];
        writeln!(out, "Checking {}, {}, terminus special case test", route.name, stop.name)?;
        let next = session.next_departure(route, stop, wrong_way).await?;
        writeln!(out, "{}", departure_message(next.as_ref()))?;
    }

    for route in session.routes() {
        let stops = session.stops(route).await?;
        for stop in stops.iter() {
            for direction in Direction::ALL {
                writeln!(
                    out,
                    "Checking {}, {}, {}",
                    route.name,
                    stop.name,
                    route.direction_label(direction)
                )?;
                let next = session.next_departure(route, stop, direction).await?;
                writeln!(out, "{}", departure_message(next.as_ref()))?;
            }
        }
    }

    writeln!(out, "test passed!")?;
    Ok(())
}
