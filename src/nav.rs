//! Full-page navigation targets.
//!
//! Pure URL builders for the calendar and day views, plus the
//! `Navigator` seam through which the shell performs the actual page
//! load. No state and no error handling beyond defaults.

use chrono::NaiveDate;

/// Performs a full page load. Implemented by the embedding shell.
pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Calendar view of one month.
pub fn calendar_url(year: i32, month: u32) -> String {
    format!("/rendezvous/calendrier/?year={year}&month={month}")
}

/// Calendar view with the doctor filter applied, keeping every other
/// parameter of the current query string. An existing `medecin` value is
/// replaced in place; otherwise the filter is appended.
pub fn calendar_url_filtered(current_query: &str, medecin_id: &str) -> String {
    let mut url = reqwest::Url::parse("http://clinic.invalid/rendezvous/calendrier/")
        .expect("static URL is valid");
    if !current_query.is_empty() {
        url.set_query(Some(current_query));
    }

    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            if key == "medecin" {
                replaced = true;
                (key.into_owned(), medecin_id.to_string())
            } else {
                (key.into_owned(), value.into_owned())
            }
        })
        .collect();
    if !replaced {
        pairs.push(("medecin".to_string(), medecin_id.to_string()));
    }

    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    format!(
        "/rendezvous/calendrier/?{}",
        url.query().unwrap_or_default()
    )
}

/// Day view of the given date.
pub fn day_url(date: NaiveDate) -> String {
    format!("/rendezvous/jour/?date={}", date.format("%Y-%m-%d"))
}

/// Day view of today, per the local clock.
pub fn today_url() -> String {
    day_url(chrono::Local::now().date_naive())
}

/// Navigate to another calendar month.
pub fn change_month(nav: &impl Navigator, year: i32, month: u32) {
    nav.navigate(&calendar_url(year, month));
}

/// Re-filter the calendar by doctor.
pub fn filter_by_medecin(nav: &impl Navigator, current_query: &str, medecin_id: &str) {
    nav.navigate(&calendar_url_filtered(current_query, medecin_id));
}

/// Navigate to the day view of a date.
pub fn change_day(nav: &impl Navigator, date: NaiveDate) {
    nav.navigate(&day_url(date));
}

/// Navigate to today's day view.
pub fn go_to_today(nav: &impl Navigator) {
    nav.navigate(&today_url());
}
