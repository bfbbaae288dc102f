//! Rendered HTML pages. Embedded for portability; no template engine.

use chrono::{Datelike, Local, Timelike};

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; background: #f5f5f5; }\n\
.card { background: white; border-radius: 8px; padding: 1.5em; margin: 1em auto; max-width: 480px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }\n\
h1 { color: #333; }\n\
label { display: block; margin-top: 0.75em; color: #555; }\n\
input { width: 100%; padding: 0.4em; margin-top: 0.2em; box-sizing: border-box; }\n\
button { margin-top: 1.2em; padding: 0.6em 1.4em; background: #2563eb; color: white; border: none; border-radius: 4px; cursor: pointer; }\n\
.error { color: #b91c1c; background: #fee2e2; padding: 0.6em; border-radius: 4px; margin-top: 1em; }\n\
.metric { font-size: 2.5em; font-weight: bold; color: #2563eb; }\n\
.metric.heavy { color: #b91c1c; }";

/// Input form. Timestamp fields are pre-filled from the current local time.
pub fn render_index(error: Option<&str>) -> String {
    let now = Local::now();
    let error_banner = match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, message),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html><head><title>Traffic Volume Prediction</title>
<style>{style}</style></head><body>
<div class="card">
<h1>Traffic Volume Prediction</h1>
{error_banner}
<form action="/predict" method="post">
  <label>Holiday <input type="text" name="holiday" value="none"></label>
  <label>Weather <input type="text" name="weather" value="clear"></label>
  <label>Temperature (K) <input type="text" name="temp"></label>
  <label>Rain (mm/h) <input type="text" name="rain" value="0"></label>
  <label>Snow (mm/h) <input type="text" name="snow" value="0"></label>
  <label>Year <input type="text" name="year" value="{year}"></label>
  <label>Month <input type="text" name="month" value="{month}"></label>
  <label>Day <input type="text" name="day" value="{day}"></label>
  <label>Hour <input type="text" name="hour" value="{hour}"></label>
  <label>Minutes <input type="text" name="minutes" value="{minutes}"></label>
  <label>Seconds <input type="text" name="seconds" value="{seconds}"></label>
  <button type="submit">Predict</button>
</form>
</div>
</body></html>"#,
        style = PAGE_STYLE,
        error_banner = error_banner,
        year = now.year(),
        month = now.month(),
        day = now.day(),
        hour = now.hour(),
        minutes = now.minute(),
        seconds = now.second(),
    )
}

/// Result page for predictions above the congestion threshold.
pub fn render_congested(volume: i64) -> String {
    render_result(
        "Heavy Traffic Expected",
        "High chance of congestion. Consider an alternate route or time.",
        volume,
        true,
    )
}

/// Result page for predictions at or below the congestion threshold.
pub fn render_clear(volume: i64) -> String {
    render_result(
        "Traffic Looks Clear",
        "Low chance of congestion at the selected time.",
        volume,
        false,
    )
}

fn render_result(title: &str, note: &str, volume: i64, heavy: bool) -> String {
    let metric_class = if heavy { "metric heavy" } else { "metric" };
    format!(
        r#"<!DOCTYPE html>
<html><head><title>{title}</title>
<style>{style}</style></head><body>
<div class="card">
<h1>{title}</h1>
<div class="{metric_class}">{volume}</div>
<p>Predicted vehicles per hour.</p>
<p>{note}</p>
<p><a href="/">Try another prediction</a></p>
</div>
</body></html>"#,
        title = title,
        style = PAGE_STYLE,
        metric_class = metric_class,
        volume = volume,
        note = note,
    )
}
