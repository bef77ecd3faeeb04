//! Next-departure lookup.

use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;

use crate::clock::Clock;
use crate::domain::{Countdown, Direction, Route, Stop, forced_direction};
use crate::mbta::{ApiError, MbtaClient, Transport};

/// Printed when nothing is scheduled to leave.
pub const NO_DEPARTURES: &str = "No upcoming departures, seek alternate route.";

/// The user-facing line for a lookup result.
pub fn departure_message(next: Option<&Countdown>) -> String {
    match next {
        Some(countdown) => format!("The next train will depart in {countdown}."),
        None => NO_DEPARTURES.to_string(),
    }
}

/// First departure in `departures` that hasn't left yet at `now`.
///
/// `departures` should be earliest first.
pub fn first_upcoming(
    departures: &[DateTime<FixedOffset>],
    now: DateTime<Utc>,
) -> Option<Countdown> {
    departures.iter().find_map(|&d| Countdown::until(now, d))
}

/// Time until the next train leaves `stop` on `route` in `direction`.
///
/// A terminus overrides `direction`: trains only leave it one way. Returns
/// `None` when nothing upcoming is predicted.
pub async fn next_departure<T: Transport, C: Clock>(
    client: &MbtaClient<T, C>,
    route: &Route,
    stop: &Stop,
    direction: Direction,
) -> Result<Option<Countdown>, ApiError> {
    let direction = forced_direction(route, stop).unwrap_or(direction);
    let departures = client.get_departures(&stop.id, direction).await?;
    let next = first_upcoming(&departures, client.clock().now());

    debug!(
        route = %route.id,
        stop = %stop.id,
        %direction,
        predictions = departures.len(),
        ?next,
        "next departure"
    );

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::domain::{RouteId, StopId};
    use crate::mbta::MbtaConfig;
    use crate::mbta::mock::{MockResponse, MockTransport};
    use serde_json::json;

    fn boston(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn red_line() -> Route {
        Route {
            id: RouteId::new("Red"),
            name: "Red Line".to_string(),
            direction_names: ["South".to_string(), "North".to_string()],
            direction_destinations: ["Ashmont/Braintree".to_string(), "Alewife".to_string()],
        }
    }

    fn stop(name: &str, position: usize) -> Stop {
        Stop {
            id: StopId::new(format!("place-{position}")),
            name: name.to_string(),
            position,
            total: 22,
        }
    }

    fn client(transport: MockTransport) -> MbtaClient<MockTransport, ManualClock> {
        // 14:23:02 in Boston
        let clock = ManualClock::new("2021-06-01T18:23:02Z".parse().unwrap());
        MbtaClient::with_transport(transport, clock, MbtaConfig::default())
    }

    fn predictions(times: &[Option<&str>]) -> MockResponse {
        let data: Vec<_> = times
            .iter()
            .enumerate()
            .map(|(i, t)| json!({"id": format!("p{i}"), "attributes": {"departure_time": t}}))
            .collect();
        MockResponse::json(json!({ "data": data }))
    }

    fn direction_requested(transport: &MockTransport) -> String {
        transport.requests()[0]
            .query_pairs()
            .find(|(k, _)| k == "filter[direction_id]")
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn messages() {
        assert_eq!(
            departure_message(Some(&Countdown::from_seconds(43))),
            "The next train will depart in 0 minutes and 43 seconds."
        );
        assert_eq!(departure_message(None), "No upcoming departures, seek alternate route.");
    }

    #[test]
    fn skips_departed_trains() {
        let now: DateTime<Utc> = "2021-06-01T18:23:02Z".parse().unwrap();
        let departures = [
            boston("2021-06-01T14:20:00-04:00"),
            boston("2021-06-01T14:23:01-04:00"),
            boston("2021-06-01T14:25:00-04:00"),
            boston("2021-06-01T14:30:00-04:00"),
        ];
        assert_eq!(
            first_upcoming(&departures, now),
            Some(Countdown::from_seconds(118))
        );
    }

    #[test]
    fn nothing_upcoming() {
        let now: DateTime<Utc> = "2021-06-01T18:23:02Z".parse().unwrap();
        assert_eq!(first_upcoming(&[], now), None);
        assert_eq!(first_upcoming(&[boston("2021-06-01T14:00:00-04:00")], now), None);
    }

    #[tokio::test]
    async fn forty_three_seconds_at_park_street() {
        let transport = MockTransport::new().respond(
            "/predictions",
            predictions(&[Some("2021-06-01T14:23:45-04:00")]),
        );

        let next = next_departure(
            &client(transport.clone()),
            &red_line(),
            &stop("Park Street", 8),
            Direction::Zero,
        )
        .await
        .unwrap();

        assert_eq!(
            departure_message(next.as_ref()),
            "The next train will depart in 0 minutes and 43 seconds."
        );
        assert_eq!(direction_requested(&transport), "0");
    }

    #[tokio::test]
    async fn empty_predictions() {
        let transport = MockTransport::new().respond("/predictions", predictions(&[]));

        let next = next_departure(
            &client(transport),
            &red_line(),
            &stop("Park Street", 8),
            Direction::One,
        )
        .await
        .unwrap();

        assert_eq!(departure_message(next.as_ref()), NO_DEPARTURES);
    }

    #[tokio::test]
    async fn null_departure_times_ignored() {
        let transport = MockTransport::new().respond(
            "/predictions",
            predictions(&[None, Some("2021-06-01T14:24:02-04:00")]),
        );

        let next = next_departure(
            &client(transport),
            &red_line(),
            &stop("Park Street", 8),
            Direction::One,
        )
        .await
        .unwrap();

        assert_eq!(next, Some(Countdown::from_seconds(60)));
    }

    #[tokio::test]
    async fn terminus_overrides_requested_direction() {
        let transport = MockTransport::new().respond("/predictions", predictions(&[]));

        next_departure(
            &client(transport.clone()),
            &red_line(),
            &stop("Alewife", 1),
            Direction::One,
        )
        .await
        .unwrap();

        assert_eq!(direction_requested(&transport), "0");
    }

    #[tokio::test]
    async fn branch_terminus_overrides_requested_direction() {
        let transport = MockTransport::new().respond("/predictions", predictions(&[]));

        next_departure(
            &client(transport.clone()),
            &red_line(),
            &stop("Ashmont", 17),
            Direction::Zero,
        )
        .await
        .unwrap();

        assert_eq!(direction_requested(&transport), "1");
    }

    #[tokio::test]
    async fn api_failure_propagates() {
        let transport = MockTransport::new().respond(
            "/predictions",
            MockResponse::status(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
        );

        let result = next_departure(
            &client(transport),
            &red_line(),
            &stop("Park Street", 8),
            Direction::Zero,
        )
        .await;

        assert!(matches!(result, Err(ApiError::UnexpectedStatus { status: 500 })));
    }
}
