// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the sport and event catalogs.

use crate::{EventType, event_details, events, sport_details, sports};

#[test]
fn test_sport_catalog_lists_all_facilities() {
    let ids: Vec<&str> = sports().iter().map(|sport| sport.id.as_str()).collect();

    assert_eq!(
        ids,
        vec!["basketball", "tabletennis", "swimming", "football", "tennis"]
    );
}

#[test]
fn test_sport_lookup_returns_published_details() {
    let basketball = sport_details("basketball").expect("basketball is in the catalog");

    assert_eq!(basketball.name, "Basketball");
    assert_eq!(basketball.sport_type, "Indoor Sport");
    assert_eq!(basketball.hours, "6:00 AM - 10:00 PM");
    assert_eq!(basketball.member.hourly, 15);
    assert_eq!(basketball.guest.hourly, 25);
    assert_eq!(basketball.rules.len(), 4);
}

#[test]
fn test_unknown_sport_misses_softly() {
    assert!(sport_details("badminton").is_none());
}

#[test]
fn test_event_lookup_returns_published_details() {
    let tournament =
        event_details("basketball-tournament").expect("the tournament is in the catalog");

    assert_eq!(tournament.name, "Indoor Basketball Tournament");
    assert_eq!(tournament.event_type, EventType::Tournament);
    assert_eq!(tournament.date, "February 25, 2026");
    assert!(
        tournament
            .requirements
            .iter()
            .any(|req| req.contains("Team registration"))
    );
}

#[test]
fn test_unknown_event_misses_softly() {
    assert!(event_details("chess-night").is_none());
}

#[test]
fn test_event_catalog_covers_every_category() {
    let catalog = events();

    assert!(!catalog.is_empty());
    for event_type in [
        EventType::FitnessChallenge,
        EventType::Workshop,
        EventType::Tournament,
        EventType::SocialEvent,
    ] {
        assert!(
            catalog.iter().any(|event| event.event_type == event_type),
            "no event of type {event_type}"
        );
    }
}
