//! Formatting utilities used for CLI and export outputs.

/// `5.00 min/km`, or `--` when the run has no stored pace.
pub fn format_pace(pace: Option<f64>) -> String {
    match pace {
        Some(p) => format!("{:.2} min/km", p),
        None => "--".to_string(),
    }
}

pub fn format_km(distance: f64) -> String {
    format!("{:.2} km", distance)
}

/// Label for a canonical distance in the best-efforts table.
pub fn describe_distance(distance: f64) -> String {
    if distance == 21.1 {
        "Half marathon".into()
    } else if distance == 42.2 {
        "Marathon".into()
    } else {
        format!("{:.0}K", distance)
    }
}
