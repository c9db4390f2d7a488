//! Fixture corpus tests for tvmark-core.
//!
//! `fixtures/single_episode.json` holds real-world release names with the
//! title, season and episode they must resolve to.

use serde::Deserialize;
use tvmark_core::{normalize, parse, EpisodeParser, MarkerKind};

const SINGLE_EPISODE: &str = include_str!("fixtures/single_episode.json");

/// A single test case from the fixture file.
#[derive(Debug, Deserialize)]
struct TestCase {
    input: String,
    title: String,
    season: u32,
    episode: u32,
}

fn fixtures() -> Vec<TestCase> {
    serde_json::from_str(SINGLE_EPISODE).expect("fixture file is valid JSON")
}

#[test]
fn single_episode_corpus() {
    let parser = EpisodeParser::new().unwrap();
    let cases = fixtures();
    assert!(cases.len() > 100, "fixture corpus looks truncated");

    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| {
            let result = parser.parse(&case.input);
            (!result.is_match(&case.title, case.season, case.episode)).then(|| {
                format!(
                    "{:?}: expected ({:?}, {}, {}), got {}",
                    case.input, case.title, case.season, case.episode, result
                )
            })
        })
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} fixtures failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn documented_scenarios() {
    let cases = [
        ("Sonny.With.a.Chance.S02E15", "Sonny With a Chance", 2, 15),
        ("Two.and.a.Half.Me.1013.720p.HDTV.X264-DIMENSION", "Two and a Half Me", 10, 13),
        ("Chuck.4x05.HDTV.XviD-LOL", "Chuck", 4, 5),
        ("S01E04", "", 1, 4),
        (
            "Ken.Burns.The.Civil.War.5of9.The.Universe.Of.Battle.1990.DVDRip.x264-HANDJOB",
            "Ken Burns The Civil War",
            1,
            5,
        ),
        ("[Impatience] Locodol - 0x01 [720p][34073169].mkv", "Locodol", 0, 1),
    ];

    for (input, title, season, episode) in cases {
        let result = parse(input);
        assert_eq!(result.title, title, "title for {input}");
        assert_eq!(result.season, Some(season), "season for {input}");
        assert_eq!(result.episode, Some(episode), "episode for {input}");
    }
}

#[test]
fn marker_classes_across_corpus() {
    let cases = [
        (
            "Glee.S04E09.Swan.Song.1080p.WEB-DL.DD5.1.H.264-ECI",
            MarkerKind::SeasonEpisode,
        ),
        (
            "Series - Season 1 - Episode 01 (Resolution).avi",
            MarkerKind::SeasonEpisodeWords,
        ),
        (
            "Homeland - 2x4 - New Car Smell [HDTV-1080p].mkv",
            MarkerKind::Cross,
        ),
        (
            "Castle (2009) - [06x16] - Room 147.mp4",
            MarkerKind::Delimited,
        ),
        ("castle.2009.416.hdtv-lol", MarkerKind::Absolute),
        (
            "O.J.Simpson.Made.in.America.Part.Two.720p.HDTV.x264-2HD",
            MarkerKind::Part,
        ),
        (
            "11-02 The Retraction Reaction (HD).m4v",
            MarkerKind::DashedPair,
        ),
    ];

    for (input, expected) in cases {
        let kind = parse(input).marker.map(|m| m.kind);
        assert_eq!(kind, Some(expected), "marker class for {input}");
    }
}

#[test]
fn parsing_is_deterministic() {
    for case in fixtures() {
        assert_eq!(parse(&case.input), parse(&case.input), "{}", case.input);
    }
}

#[test]
fn renormalization_is_a_no_op() {
    for case in fixtures() {
        let once = normalize(&case.input);
        assert_eq!(normalize(&once), once, "{}", case.input);
    }
}

#[test]
fn title_comparison_ignores_case() {
    for case in fixtures() {
        let result = parse(&case.input);
        assert!(result.is_match(&case.title.to_uppercase(), case.season, case.episode));
        assert!(result.is_match(&case.title.to_lowercase(), case.season, case.episode));
    }
}

#[test]
fn separators_in_title_do_not_move_the_marker() {
    let names = [
        ("Sonny.With.a.Chance", ".S02E15.HDTV"),
        ("The.Girls.Next.Door", ".S03E06.DVDRip.XviD-WiDE"),
        ("Top.Gear", ".19x06.720p_HDTV_x264-FoV"),
        ("Two.and.a.Half.Me", ".113.720p.HDTV.X264-DIMENSION"),
    ];

    for (title, rest) in names {
        let baseline = parse(&format!("{title}{rest}"));
        for sep in ["_", " "] {
            let variant = parse(&format!("{}{rest}", title.replace('.', sep)));
            assert_eq!(
                (variant.season, variant.episode, &variant.title),
                (baseline.season, baseline.episode, &baseline.title),
                "separator {sep:?} changed the result for {title}"
            );
        }
    }
}

#[test]
fn episode_digits_do_not_change_season() {
    for episode in ["01", "09", "15", "23", "115"] {
        let result = parse(&format!("The.Office.S03E{episode}.DVDRip.XviD-OSiTV"));
        assert_eq!(result.season, Some(3));
        assert_eq!(result.episode, episode.parse().ok());
    }
    for season in ["1", "4", "10", "2009"] {
        let result = parse(&format!("Chuck.{season}x05.HDTV.XviD-LOL"));
        assert_eq!(result.season, season.parse().ok());
        assert_eq!(result.episode, Some(5));
    }
}

#[test]
fn bare_absolute_code_without_context_is_unsupported() {
    assert!(!parse("103").is_matched());
    assert!(!parse("103.hdtv-lol").is_matched());
}

#[test]
fn shared_parser_across_threads() {
    let parser = std::sync::Arc::new(EpisodeParser::new().unwrap());
    let handles: Vec<_> = fixtures()
        .chunks(20)
        .map(|chunk| {
            let parser = std::sync::Arc::clone(&parser);
            let chunk: Vec<(String, String, u32, u32)> = chunk
                .iter()
                .map(|c| (c.input.clone(), c.title.clone(), c.season, c.episode))
                .collect();
            std::thread::spawn(move || {
                chunk
                    .iter()
                    .all(|(input, title, s, e)| parser.parse(input).is_match(title, *s, *e))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
