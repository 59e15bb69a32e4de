//! Fixed prophecy texts, one per score tier.

use crate::ProphecyTier;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static PROPHECIES: Lazy<HashMap<ProphecyTier, &'static str>> = Lazy::new(build_prophecy_table);

fn build_prophecy_table() -> HashMap<ProphecyTier, &'static str> {
    let mut table = HashMap::new();
    table.insert(
        ProphecyTier::Low,
        "A solid path lies ahead. Trust your instincts and remain vigilant.",
    );
    table.insert(
        ProphecyTier::Medium,
        "Your destiny is guided by your own inner strength. Opportunities await.",
    );
    table.insert(
        ProphecyTier::High,
        "The stars align perfectly for you! Great fortune and success await.",
    );
    table.insert(
        ProphecyTier::Critical,
        "A rare cosmic event grants you unparalleled luck. Seize the day!",
    );
    table
}

/// Look up the prophecy text for a tier
pub fn message_for(tier: ProphecyTier) -> &'static str {
    // Every tier is inserted above.
    PROPHECIES.get(&tier).copied().unwrap_or_default()
}
