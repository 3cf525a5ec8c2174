use hamk_core::{
    entities::NearbyOrganization,
    usecases::{ResultSource, ResultsArea},
};
use maud::{html, Markup};

pub const NO_RESULTS: &str = "No NGOs found near your location.";
pub const LIVE_RESULTS: &str = "Showing NGOs near you";
pub const SAMPLE_RESULTS: &str = "Showing sample NGOs (no live results nearby)";

fn results_hint(source: ResultSource) -> &'static str {
    match source {
        ResultSource::Live => LIVE_RESULTS,
        ResultSource::Sample => SAMPLE_RESULTS,
    }
}

fn distance_label(nearby: &NearbyOrganization) -> String {
    format!("{:.1} km away", nearby.distance.to_kilometers())
}

fn tel_link(phone: &str) -> String {
    let number: String = phone.split_whitespace().collect();
    format!("tel:{number}")
}

fn hint(msg: &str) -> Markup {
    html! {
        div class="results-hint" { (msg) }
    }
}

/// The complete content of the results area.
pub fn results_area(area: &ResultsArea) -> Markup {
    match area {
        ResultsArea::Idle => html! {},
        ResultsArea::Pending(msg) => hint(msg),
        ResultsArea::Hint(msg) => hint(msg),
        ResultsArea::Results {
            source,
            organizations,
        } => result_list(*source, organizations),
    }
}

pub fn result_list(source: ResultSource, organizations: &[NearbyOrganization]) -> Markup {
    if organizations.is_empty() {
        return hint(NO_RESULTS);
    }
    html! {
        (hint(results_hint(source)))
        ul class="ngo-list" {
            @for nearby in organizations {
                (result_item(nearby))
            }
        }
    }
}

fn result_item(nearby: &NearbyOrganization) -> Markup {
    let org = &nearby.organization;
    html! {
        li class="ngo-item" {
            h4 { (org.name) }
            div class="ngo-meta" {
                (org.locality()) " • " (distance_label(nearby))
            }
            div class="ngo-actions" {
                @if let Some(url) = org.url.as_deref().filter(|u| !u.is_empty()) {
                    a class="link" href=(url) target="_blank" rel="noopener" { "Visit" }
                }
                @if let Some(phone) = org.phone.as_deref().filter(|p| !p.is_empty()) {
                    a class="link" href=(tel_link(phone)) { "Call" }
                }
            }
        }
    }
}

/// The results area for the terminal.
pub fn results_area_text(area: &ResultsArea) -> String {
    match area {
        ResultsArea::Idle => String::new(),
        ResultsArea::Pending(msg) => format!("{msg}\n"),
        ResultsArea::Hint(msg) => format!("{msg}\n"),
        ResultsArea::Results {
            source,
            organizations,
        } => result_list_text(*source, organizations),
    }
}

pub fn result_list_text(source: ResultSource, organizations: &[NearbyOrganization]) -> String {
    if organizations.is_empty() {
        return format!("{NO_RESULTS}\n");
    }
    let mut out = format!("{}\n", results_hint(source));
    for (i, nearby) in organizations.iter().enumerate() {
        out.push_str(&item_text(i + 1, nearby));
    }
    out
}

fn item_text(number: usize, nearby: &NearbyOrganization) -> String {
    let org = &nearby.organization;
    let mut lines = vec![
        format!("\n{number:>2}. {}", org.name),
        format!("    {} • {}", org.locality(), distance_label(nearby)),
    ];
    if let Some(url) = org.url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(format!("    Visit: {url}"));
    }
    if let Some(phone) = org.phone.as_deref().filter(|p| !p.is_empty()) {
        lines.push(format!("    Call:  {}", tel_link(phone)));
    }
    lines.join("\n") + "\n"
}
