/// Human label for an order's remaining time, as shown in the schedule.
///
/// `"45 min"` under an hour, `"2.5 hours"` under a day, `"1.2 days"` beyond.
pub fn time_left_label(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "no estimate".to_string();
    }
    if minutes < 60.0 {
        format!("{} min", plain(minutes))
    } else if minutes < 1440.0 {
        format!("{:.1} hours", minutes / 60.0)
    } else {
        format!("{:.1} days", minutes / 1440.0)
    }
}

fn plain(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}
