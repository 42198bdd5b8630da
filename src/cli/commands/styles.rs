//! List styles command handler

use crate::models::{DurationBucket, Style};

pub fn cmd_styles() {
    println!("Styles");
    println!("{:-<50}", "");
    for style in Style::ALL {
        let marker = if style == Style::FALLBACK {
            " (fallback)"
        } else {
            ""
        };
        println!("  {:<14} {}{}", style.as_str(), style.label(), marker);
    }

    println!();
    println!("Durations");
    println!("{:-<50}", "");
    for duration in DurationBucket::ALL {
        println!(
            "  {:<14} {} | {} scenes of {}",
            duration.as_str(),
            duration.label(),
            duration.scene_count(),
            duration.scene_duration()
        );
    }
}
