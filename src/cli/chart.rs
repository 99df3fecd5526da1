use colored::Colorize;

use crate::expenses::Category;

const BAR_WIDTH: usize = 40;

fn scaled(total: f64, max: f64) -> usize {
    (((total / max) * BAR_WIDTH as f64).round() as usize).max(1)
}

/// Horizontal bar per category, red where the overspend flag is set.
pub fn bars(totals: &[(Category, f64)], flags: &[(Category, bool)]) {
    let max = totals.iter().map(|&(_, total)| total).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return;
    }
    for &(category, total) in totals {
        let bar = "█".repeat(scaled(total, max));
        let flagged = flags
            .iter()
            .find(|(flag_category, _)| *flag_category == category)
            .map(|&(_, flagged)| flagged)
            .unwrap_or(false);
        let bar = if flagged {
            bar.bright_red()
        } else {
            bar.bright_blue()
        };
        println!("{:<14} {} ${:.2}", category.to_string(), bar, total);
    }
}

/// Month-over-month trend rendered as one scaled bar row per month.
pub fn trend(totals: &[(String, f64)]) {
    let max = totals.iter().map(|(_, total)| *total).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return;
    }
    for (month, total) in totals {
        let bar = "▪".repeat(scaled(*total, max));
        println!("{:<8} {} ${:.2}", month, bar.bright_cyan(), total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_is_proportional_and_never_empty() {
        assert_eq!(scaled(100.0, 100.0), BAR_WIDTH);
        assert_eq!(scaled(50.0, 100.0), BAR_WIDTH / 2);
        assert_eq!(scaled(0.01, 100.0), 1);
    }
}
