//! Catalog command: surface the fixed challenge and priority enumerations.

use std::fmt::Write;

use crate::domain::{Challenge, Priority};

/// Render the selection catalog as display text.
pub fn execute() -> String {
    let mut out = String::new();

    out.push_str("Défis disponibles :\n");
    for challenge in Challenge::ALL {
        let _ = writeln!(out, "  {:<16} {}", challenge.slug(), challenge.label());
    }

    out.push_str("\nPriorités disponibles :\n");
    for priority in Priority::ALL {
        let _ = writeln!(out, "  {:<16} {}", priority.slug(), priority.label());
    }

    out
}
