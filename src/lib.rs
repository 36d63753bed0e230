pub mod cards;
pub mod gameplay;
pub mod strategy;

/// point total of a hand. unbounded above 21, a bust is just a big Score.
pub type Score = u32;
/// wagers and winnings. signed so losses can be subtracted when betting lands.
pub type Chips = i64;

/// Initialize terminal logging. INFO to the terminal, colored when supported.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
