//! Rendering of a finished reading.

use crate::config::DisplayConfig;
use crate::{PredictionSession, ProphecyTier, Result};
use serde::Serialize;
use std::io::Write;

/// Machine-readable form of one reading
#[derive(Clone, Debug, Serialize)]
pub struct DestinyReport {
    pub name: String,
    pub favorite_color: String,
    pub final_score: f64,
    pub lucky_year: i64,
    pub tier: ProphecyTier,
    pub prophecy: String,
}

impl From<&PredictionSession> for DestinyReport {
    fn from(session: &PredictionSession) -> Self {
        Self {
            name: session.inputs.name.clone(),
            favorite_color: session.inputs.favorite_color.clone(),
            final_score: session.reading.final_score,
            lucky_year: session.reading.lucky_year,
            tier: session.reading.tier,
            prophecy: session.reading.message().to_string(),
        }
    }
}

/// Render the prophecy banner, starting with a blank line
pub fn render(session: &PredictionSession, display: &DisplayConfig) -> String {
    let rule = display.rule();
    let mut out = String::new();

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "*** DESTINY PROPHECY FOR {} ***\n",
        session.inputs.name.to_uppercase()
    ));
    out.push_str(&rule);
    out.push('\n');

    out.push_str(&format!(
        "Your calculated Destiny Score is {} points.\n",
        format_score(session.reading.final_score)
    ));
    out.push_str(&format!(
        "Your luckiest year will be {}.\n",
        session.reading.lucky_year
    ));
    out.push_str(&format!(
        "Your soul color is {}.\n",
        session.inputs.favorite_color
    ));

    out.push_str(&format!("\nProphecy: {}\n", session.reading.message()));
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Two decimal places; NaN prints as lowercase `nan` like `inf` does.
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", score)
    }
}

pub fn print_report<W: Write>(
    out: &mut W,
    session: &PredictionSession,
    display: &DisplayConfig,
) -> Result<()> {
    out.write_all(render(session, display).as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn to_json(session: &PredictionSession) -> Result<String> {
    Ok(serde_json::to_string_pretty(&DestinyReport::from(session))?)
}
