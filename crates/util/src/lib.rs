//! Core type aliases, traits, and constants for the advance calculator.
//!
//! This crate provides the foundational numeric types and tunable parameters
//! shared by the density and engine crates.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Probability mass. Double precision so catalog decimals survive untouched.
pub type Probability = f64;
/// Outcome index of a distribution: the number of RNG advances consumed.
pub type Advance = usize;
/// Discrete time steps, used for window lengths, cycle lengths, and offsets.
pub type Steps = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RANGE SUMMARY
// Which outcomes are possible, and which are worth printing.
// ============================================================================
/// Mass at or below this is treated as impossible.
pub const EPS: Probability = 1e-12;
/// Minimum displayed odds, in percent.
pub const DISPLAY_THRESHOLD: Probability = 1.0;
/// Slack when comparing percentages against the display threshold.
pub const DISPLAY_TOLERANCE: Probability = 1e-9;
/// Allowed drift of a distribution's total mass away from 1.
pub const MASS_TOLERANCE: Probability = 1e-9;

// ============================================================================
// COOLDOWNS
// Each entity draws one cooldown uniformly; its timed behavior repeats on that cycle.
// ============================================================================
/// Default (cooldown length, prior weight) catalog.
pub const COOLDOWNS: [(Steps, Probability); 4] = [
    (16, 0.25), //
    (32, 0.25),
    (48, 0.25),
    (64, 0.25),
];
/// Offset of the secondary event for short-break entities.
pub const SHORT_BREAK: Steps = 1;
/// Offset of the secondary event for long-break entities.
pub const LONG_BREAK: Steps = 8;
/// Advances consumed per hit by entities that never break.
pub const NO_BREAK_FACTOR: Advance = 2;
/// Advances consumed per hit by entities that break.
pub const BREAK_FACTOR: Advance = 1;

// ============================================================================
// LOGGING
// ============================================================================
/// Initialize terminal logging on stderr so stdout stays paste-ready.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term: Box<dyn simplelog::SharedLogger> = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term])?;
    Ok(())
}

/// Whether two probabilities agree within [`MASS_TOLERANCE`].
pub fn approx(a: Probability, b: Probability) -> bool {
    (a - b).abs() <= MASS_TOLERANCE
}
