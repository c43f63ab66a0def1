//! Proptest strategies shared by the unit tests.

use proptest::prelude::*;

use crate::Version;

fn numeric() -> impl Strategy<Value = String> {
    "0|[1-9][0-9]{0,8}"
}

fn joined(ids: Vec<String>, sigil: char) -> String {
    if ids.is_empty() {
        String::new()
    } else {
        format!("{sigil}{}", ids.join("."))
    }
}

/// Any string the parser accepts (without the optional `v`).
pub(crate) fn version_string() -> impl Strategy<Value = String> {
    (
        numeric(),
        numeric(),
        numeric(),
        prop::collection::vec(
            "0|[1-9][0-9]{0,3}|[0-9]{0,2}[A-Za-z-][0-9A-Za-z-]{0,4}",
            0..4,
        ),
        prop::collection::vec("[0-9A-Za-z-]{1,6}", 0..3),
    )
        .prop_map(|(major, minor, patch, prerelease, build)| {
            format!(
                "{major}.{minor}.{patch}{}{}",
                joined(prerelease, '-'),
                joined(build, '+')
            )
        })
}

/// Versions drawn from a small pool so that ties and shared prefixes are common.
pub(crate) fn version() -> impl Strategy<Value = Version> {
    let identifier = prop_oneof![
        Just("0"),
        Just("1"),
        Just("2"),
        Just("11"),
        Just("alpha"),
        Just("beta"),
        Just("rc"),
        Just("x-y"),
    ];
    (
        0..3u64,
        0..3u64,
        0..3u64,
        prop::collection::vec(identifier, 0..4),
        prop::collection::vec(prop_oneof![Just("a"), Just("b")], 0..2),
    )
        .prop_map(|(major, minor, patch, prerelease, build)| {
            Version::new(major, minor, patch)
                .with_prerelease(prerelease.join("."))
                .with_build(build.join("."))
        })
}
