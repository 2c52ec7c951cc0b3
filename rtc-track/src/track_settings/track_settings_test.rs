use super::*;
use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

fn hash_of(settings: &TrackSettings) -> u64 {
    let mut hasher = DefaultHasher::new();
    settings.hash(&mut hasher);
    hasher.finish()
}

fn sample() -> TrackSettings {
    TrackSettings::new(true, Dimensions::H720_169, VideoQuality::Medium, 30)
}

#[test]
fn test_track_settings_default() {
    let settings = TrackSettings::default();
    assert!(!settings.enabled());
    assert_eq!(settings.dimensions(), Dimensions::ZERO);
    assert_eq!(settings.quality(), VideoQuality::Low);
    assert_eq!(settings.preferred_fps(), 0);
}

#[test]
fn test_track_settings_copy_with_nothing_is_equal() {
    for settings in [TrackSettings::default(), sample()] {
        let copy = settings.copy_with(None, None, None, None);
        assert_eq!(copy, settings);
        assert_eq!(hash_of(&copy), hash_of(&settings));
    }
}

#[test]
fn test_track_settings_copy_with_enabled() {
    let disabled = TrackSettings::default().copy_with(
        None,
        Some(Dimensions::H360_169),
        Some(VideoQuality::High),
        Some(15),
    );
    let enabled = disabled.copy_with(Some(true), None, None, None);

    assert!(!disabled.enabled(), "receiver must not be mutated");
    assert!(enabled.enabled());
    assert_eq!(enabled.dimensions(), disabled.dimensions());
    assert_eq!(enabled.quality(), disabled.quality());
    assert_eq!(enabled.preferred_fps(), disabled.preferred_fps());
    assert_ne!(enabled, disabled);
    assert_ne!(hash_of(&enabled), hash_of(&disabled));
}

#[test]
fn test_track_settings_structural_equality() {
    let a = sample();
    let b = TrackSettings::new(true, Dimensions::new(1280, 720), VideoQuality::Medium, 30);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let changed = vec![
        ("enabled", a.with_enabled(false)),
        ("dimensions", a.with_dimensions(Dimensions::H540_169)),
        ("quality", a.with_quality(VideoQuality::High)),
        ("preferred_fps", a.with_preferred_fps(60)),
    ];
    for (field, other) in changed {
        assert_ne!(a, other, "changing {field} must break equality");
    }
}

#[test]
fn test_track_settings_dedup_in_set() {
    let mut seen = HashSet::new();
    assert!(seen.insert(sample()));
    assert!(!seen.insert(sample().copy_with(None, None, None, None)));
    assert!(seen.insert(sample().with_preferred_fps(0)));
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_track_settings_unchanged_transition_is_detected() {
    // The adaptation loop keeps the previous value and only signals on change.
    let mut previous = TrackSettings::default();
    let mut signals = 0;

    let updates = [
        previous.with_enabled(true),
        previous.with_enabled(true),
        previous
            .with_enabled(true)
            .with_dimensions(Dimensions::H720_169),
        previous
            .with_enabled(true)
            .with_dimensions(Dimensions::H720_169),
    ];
    for next in updates {
        if next != previous {
            signals += 1;
            previous = next;
        }
    }

    assert_eq!(signals, 2);
}
