// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The club's published catalogs: bookable sports facilities and
//! registerable events.
//!
//! Catalog data is fixed domain content. Lookups by identifier miss
//! softly with `None`; callers surface "not found" instead of failing.

use crate::types::Rate;
use std::sync::LazyLock;

/// Category of a registerable club event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Multi-day or multi-week fitness programs.
    FitnessChallenge,
    /// Single-session educational events.
    Workshop,
    /// Competitive events with prizes.
    Tournament,
    /// Community and family events.
    SocialEvent,
}

impl EventType {
    /// Returns the display label for this event type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FitnessChallenge => "Fitness Challenge",
            Self::Workshop => "Workshop",
            Self::Tournament => "Tournament",
            Self::SocialEvent => "Social Event",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bookable sports facility with its published details and rates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportInfo {
    /// Catalog identifier (e.g. `basketball`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Facility classification (e.g. "Indoor Sport").
    pub sport_type: String,
    /// Marketing description.
    pub description: String,
    /// Published operating hours.
    pub hours: String,
    /// Capacity note.
    pub capacity: String,
    /// Typical session length note.
    pub session_length: String,
    /// Provided or recommended equipment.
    pub equipment: Vec<String>,
    /// House rules.
    pub rules: Vec<String>,
    /// Member-tier rate.
    pub member: Rate,
    /// Guest-tier rate.
    pub guest: Rate,
}

/// A registerable club event with its published details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInfo {
    /// Catalog identifier (e.g. `basketball-tournament`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Event category.
    pub event_type: EventType,
    /// Published date, as displayed.
    pub date: String,
    /// Published duration or time window, as displayed.
    pub duration: String,
    /// Marketing description.
    pub description: String,
    /// Participation requirements.
    pub requirements: Vec<String>,
    /// What participants receive.
    pub benefits: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[allow(clippy::too_many_lines)]
fn build_sports() -> Vec<SportInfo> {
    vec![
        SportInfo {
            id: String::from("basketball"),
            name: String::from("Basketball"),
            sport_type: String::from("Indoor Sport"),
            description: String::from(
                "Professional basketball court with modern facilities and expert coaching.",
            ),
            hours: String::from("6:00 AM - 10:00 PM"),
            capacity: String::from("10 players per court"),
            session_length: String::from("1-2 hours"),
            equipment: strings(&["Basketball", "Court shoes recommended", "Water bottle"]),
            rules: strings(&[
                "5 players per team on court",
                "4 quarters of 12 minutes each",
                "24-second shot clock",
                "Professional NBA rules apply",
            ]),
            member: Rate::new(15, 50),
            guest: Rate::new(25, 80),
        },
        SportInfo {
            id: String::from("tabletennis"),
            name: String::from("Table Tennis"),
            sport_type: String::from("Indoor Sport"),
            description: String::from(
                "Multiple professional table tennis tables with high-quality equipment.",
            ),
            hours: String::from("7:00 AM - 9:00 PM"),
            capacity: String::from("2-4 players per table"),
            session_length: String::from("30 minutes - 2 hours"),
            equipment: strings(&[
                "Paddles available",
                "Professional tables",
                "Tournament balls",
            ]),
            rules: strings(&[
                "Best of 5 or 7 sets",
                "11 points per set",
                "Must win by 2 points",
                "Service alternates every 2 points",
            ]),
            member: Rate::new(10, 30),
            guest: Rate::new(15, 45),
        },
        SportInfo {
            id: String::from("swimming"),
            name: String::from("Swimming"),
            sport_type: String::from("Water Sport"),
            description: String::from(
                "Olympic-size swimming pool with professional coaching and training programs.",
            ),
            hours: String::from("5:00 AM - 11:00 PM"),
            capacity: String::from("Multiple lanes available"),
            session_length: String::from("30 minutes - 2 hours"),
            equipment: strings(&[
                "Lane ropes",
                "Kickboards",
                "Pull buoys",
                "Swim caps required",
            ]),
            rules: strings(&[
                "Swim caps required",
                "No diving in shallow end",
                "Follow lane etiquette",
                "Shower before entering pool",
            ]),
            member: Rate::new(12, 40),
            guest: Rate::new(20, 60),
        },
        SportInfo {
            id: String::from("football"),
            name: String::from("Football"),
            sport_type: String::from("Outdoor Sport"),
            description: String::from(
                "Full-size football field with natural grass and professional standards.",
            ),
            hours: String::from("6:00 AM - 8:00 PM"),
            capacity: String::from("22 players (11 vs 11)"),
            session_length: String::from("1.5-2 hours"),
            equipment: strings(&[
                "Football provided",
                "Cleats recommended",
                "Shin guards required",
            ]),
            rules: strings(&[
                "90 minutes match duration",
                "11 players per team",
                "Offside rule applies",
                "FIFA standard rules",
            ]),
            member: Rate::new(30, 100),
            guest: Rate::new(50, 150),
        },
        SportInfo {
            id: String::from("tennis"),
            name: String::from("Tennis"),
            sport_type: String::from("Outdoor Sport"),
            description: String::from(
                "Professional tennis courts with both clay and hard surfaces.",
            ),
            hours: String::from("6:00 AM - 9:00 PM"),
            capacity: String::from("2-4 players per court"),
            session_length: String::from("1-2 hours"),
            equipment: strings(&[
                "Rackets available for rent",
                "Tennis balls provided",
                "Court shoes recommended",
            ]),
            rules: strings(&[
                "Best of 3 or 5 sets",
                "Deuce scoring system",
                "Service alternates each game",
                "ITF standard rules",
            ]),
            member: Rate::new(20, 70),
            guest: Rate::new(35, 120),
        },
    ]
}

#[allow(clippy::too_many_lines)]
fn build_events() -> Vec<EventInfo> {
    vec![
        EventInfo {
            id: String::from("new-year-challenge"),
            name: String::from("New Year Fitness Challenge"),
            event_type: EventType::FitnessChallenge,
            date: String::from("January 15, 2026"),
            duration: String::from("All Month"),
            description: String::from(
                "30-day fitness challenge to kickstart your year with healthy habits and achieve your fitness goals.",
            ),
            requirements: strings(&["Active membership", "Basic fitness level"]),
            benefits: strings(&[
                "Personalized workout plan",
                "Progress tracking",
                "Weekly check-ins",
                "Achievement certificate",
            ]),
        },
        EventInfo {
            id: String::from("nutrition-workshop"),
            name: String::from("Nutrition Workshop"),
            event_type: EventType::Workshop,
            date: String::from("January 28, 2026"),
            duration: String::from("2:00 PM - 4:00 PM"),
            description: String::from(
                "Learn about proper nutrition for athletes and fitness enthusiasts from certified nutritionists.",
            ),
            requirements: strings(&["Active membership"]),
            benefits: strings(&[
                "Nutrition guide",
                "Meal planning templates",
                "Q&A session",
                "Recipe booklet",
            ]),
        },
        EventInfo {
            id: String::from("couples-workout"),
            name: String::from("Valentine's Couples Workout"),
            event_type: EventType::SocialEvent,
            date: String::from("February 14, 2026"),
            duration: String::from("6:00 PM - 8:00 PM"),
            description: String::from(
                "Special couples workout session followed by healthy refreshments and prizes for participating couples.",
            ),
            requirements: strings(&["Couples registration", "Active membership for both"]),
            benefits: strings(&[
                "Partner workout routine",
                "Healthy refreshments",
                "Prizes and giveaways",
                "Photo session",
            ]),
        },
        EventInfo {
            id: String::from("basketball-tournament"),
            name: String::from("Indoor Basketball Tournament"),
            event_type: EventType::Tournament,
            date: String::from("February 25, 2026"),
            duration: String::from("9:00 AM - 6:00 PM"),
            description: String::from(
                "Annual indoor basketball tournament with prizes for winners and participation certificates for all.",
            ),
            requirements: strings(&["Team registration (5 players)", "Active membership"]),
            benefits: strings(&[
                "$500 prize pool",
                "Trophies for winners",
                "Participation certificates",
                "Tournament t-shirt",
            ]),
        },
        EventInfo {
            id: String::from("marathon-training"),
            name: String::from("Spring Marathon Training"),
            event_type: EventType::FitnessChallenge,
            date: String::from("March 15, 2026"),
            duration: String::from("12 Weeks"),
            description: String::from(
                "12-week marathon training program for beginners and experienced runners preparing for spring races.",
            ),
            requirements: strings(&[
                "Active membership",
                "Medical clearance for long-distance running",
            ]),
            benefits: strings(&[
                "Professional coaching",
                "Training schedule",
                "Nutrition guidance",
                "Race registration assistance",
            ]),
        },
        EventInfo {
            id: String::from("injury-prevention"),
            name: String::from("Injury Prevention Workshop"),
            event_type: EventType::Workshop,
            date: String::from("March 30, 2026"),
            duration: String::from("1:00 PM - 3:00 PM"),
            description: String::from(
                "Learn proper warm-up techniques, injury prevention strategies, and recovery methods from sports medicine experts.",
            ),
            requirements: strings(&["Active membership"]),
            benefits: strings(&[
                "Injury prevention guide",
                "Exercise demonstrations",
                "Recovery techniques",
                "Q&A with experts",
            ]),
        },
        EventInfo {
            id: String::from("tennis-championship"),
            name: String::from("Spring Tennis Championship"),
            event_type: EventType::Tournament,
            date: String::from("April 20, 2026"),
            duration: String::from("Weekend Event"),
            description: String::from(
                "Annual spring tennis championship with multiple categories for different skill levels and age groups.",
            ),
            requirements: strings(&[
                "Individual registration",
                "Active membership",
                "Skill level assessment",
            ]),
            benefits: strings(&[
                "Multiple categories",
                "Professional umpires",
                "Trophies and medals",
                "Tournament gear",
            ]),
        },
        EventInfo {
            id: String::from("family-fun-day"),
            name: String::from("Family Fun Day"),
            event_type: EventType::SocialEvent,
            date: String::from("April 28, 2026"),
            duration: String::from("10:00 AM - 4:00 PM"),
            description: String::from(
                "Special family event with activities for all ages, games, competitions, and healthy food options.",
            ),
            requirements: strings(&["Family registration", "At least one active member"]),
            benefits: strings(&[
                "Family activities",
                "Kids games",
                "Healthy food options",
                "Family photos",
            ]),
        },
        EventInfo {
            id: String::from("swimming-championships"),
            name: String::from("Swimming Championships"),
            event_type: EventType::Tournament,
            date: String::from("May 15, 2026"),
            duration: String::from("Full Weekend"),
            description: String::from(
                "Annual swimming championships featuring all strokes and distances for competitive swimmers.",
            ),
            requirements: strings(&[
                "Individual registration",
                "Swimming proficiency test",
                "Active membership",
            ]),
            benefits: strings(&[
                "All stroke categories",
                "Age group divisions",
                "Medals and trophies",
                "Championship records",
            ]),
        },
        EventInfo {
            id: String::from("swimming-clinic"),
            name: String::from("Swimming Technique Clinic"),
            event_type: EventType::Workshop,
            date: String::from("May 25, 2026"),
            duration: String::from("3:00 PM - 5:00 PM"),
            description: String::from(
                "Improve your swimming technique with professional coaches focusing on all four competitive strokes.",
            ),
            requirements: strings(&["Basic swimming ability", "Active membership"]),
            benefits: strings(&[
                "Technique analysis",
                "Personalized feedback",
                "Stroke improvement tips",
                "Video analysis",
            ]),
        },
        EventInfo {
            id: String::from("football-league"),
            name: String::from("Summer Football League"),
            event_type: EventType::Tournament,
            date: String::from("June 10, 2026"),
            duration: String::from("8 Weeks"),
            description: String::from(
                "8-week summer football league with teams competing for the championship trophy and prizes.",
            ),
            requirements: strings(&[
                "Team registration (11 players)",
                "Active membership for all players",
            ]),
            benefits: strings(&[
                "8-week season",
                "Professional referees",
                "Championship trophy",
                "League statistics",
            ]),
        },
        EventInfo {
            id: String::from("solstice-celebration"),
            name: String::from("Summer Solstice Celebration"),
            event_type: EventType::SocialEvent,
            date: String::from("June 21, 2026"),
            duration: String::from("4:00 PM - 10:00 PM"),
            description: String::from(
                "Celebrate the longest day of the year with outdoor activities, BBQ, and evening entertainment.",
            ),
            requirements: strings(&["Active membership", "RSVP required"]),
            benefits: strings(&[
                "Outdoor activities",
                "BBQ dinner",
                "Live entertainment",
                "Sunset celebration",
            ]),
        },
        EventInfo {
            id: String::from("awards-ceremony"),
            name: String::from("Annual Sports Awards Ceremony"),
            event_type: EventType::SocialEvent,
            date: String::from("March 15, 2026"),
            duration: String::from("7:00 PM - 10:00 PM"),
            description: String::from(
                "Celebrate our members' achievements and recognize outstanding performances in various sports categories.",
            ),
            requirements: strings(&["RSVP required", "Formal attire"]),
            benefits: strings(&[
                "Awards presentation",
                "Dinner included",
                "Entertainment",
                "Networking opportunity",
            ]),
        },
        EventInfo {
            id: String::from("wellness-fair"),
            name: String::from("Health & Wellness Fair"),
            event_type: EventType::Workshop,
            date: String::from("March 22, 2026"),
            duration: String::from("9:00 AM - 3:00 PM"),
            description: String::from(
                "Free health screenings, wellness consultations, and fitness assessments for all members.",
            ),
            requirements: strings(&["Active membership", "Pre-registration recommended"]),
            benefits: strings(&[
                "Free health screenings",
                "Fitness assessments",
                "Wellness consultations",
                "Health resources",
            ]),
        },
        EventInfo {
            id: String::from("equipment-expo"),
            name: String::from("Fitness Equipment Expo"),
            event_type: EventType::Workshop,
            date: String::from("April 5, 2026"),
            duration: String::from("10:00 AM - 6:00 PM"),
            description: String::from(
                "Try the latest fitness equipment and technology from leading manufacturers and fitness brands.",
            ),
            requirements: strings(&["Active membership"]),
            benefits: strings(&[
                "Equipment trials",
                "Expert demonstrations",
                "Special discounts",
                "Technology showcase",
            ]),
        },
    ]
}

static SPORTS: LazyLock<Vec<SportInfo>> = LazyLock::new(build_sports);
static EVENTS: LazyLock<Vec<EventInfo>> = LazyLock::new(build_events);

/// Returns the club's bookable sports facilities.
#[must_use]
pub fn sports() -> &'static [SportInfo] {
    &SPORTS
}

/// Looks up a sports facility by catalog identifier.
///
/// Unknown identifiers miss softly with `None`.
#[must_use]
pub fn sport_details(id: &str) -> Option<&'static SportInfo> {
    SPORTS.iter().find(|sport| sport.id == id)
}

/// Returns the club's registerable events.
#[must_use]
pub fn events() -> &'static [EventInfo] {
    &EVENTS
}

/// Looks up a club event by catalog identifier.
///
/// Unknown identifiers miss softly with `None`.
#[must_use]
pub fn event_details(id: &str) -> Option<&'static EventInfo> {
    EVENTS.iter().find(|event| event.id == id)
}
