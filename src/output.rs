use crate::processing::hampel::HampelReport;

/// One sample per line, using the shortest representation that round-trips
pub fn render_plain(samples: &[f64]) -> String {
    let mut rendered = String::with_capacity(samples.len() * 8);
    for sample in samples {
        rendered.push_str(&sample.to_string());
        rendered.push('\n');
    }
    rendered
}

/// Pretty-printed JSON of the full report
pub fn render_json(report: &HampelReport) -> Result<String, serde_json::Error> {
    let mut rendered = serde_json::to_string_pretty(report)?;
    rendered.push('\n');
    Ok(rendered)
}
