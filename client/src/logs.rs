//! Labelled, colored log lines for the interactive flows.
//!
//! All session, remote, and orchestrator failures are advisory: they are
//! printed here and never propagated to the caller as faults.

use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

#[derive(strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    fn color(&self) -> Color {
        match self {
            Self::Info => Color::TrueColor {
                r: 0,
                g: 95,
                b: 255,
            },
            Self::Success => Color::TrueColor {
                r: 255,
                g: 215,
                b: 87,
            },
            Self::Warning => Color::TrueColor {
                r: 180,
                g: 105,
                b: 0,
            },
            Self::Error => Color::TrueColor {
                r: 255,
                g: 0,
                b: 45,
            },
        }
    }
}

fn log(severity: Severity, label: impl Display, msg: impl Display) {
    println!(
        "[{}] {} {}",
        severity.to_string().color(severity.color()),
        label,
        msg.to_string().bright_black()
    );
}

pub fn log_info(label: impl Display, msg: impl Display) {
    log(Severity::Info, label, msg)
}

pub fn log_success(label: impl Display, msg: impl Display) {
    log(Severity::Success, label, msg)
}

pub fn log_warning(label: impl Display, msg: impl Display) {
    log(Severity::Warning, label, msg)
}

pub fn log_error(label: impl Display, msg: impl Display) {
    log(Severity::Error, label, msg)
}
