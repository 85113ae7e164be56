use crate::{Category, Comp, CompStatus};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub submitting: bool,
    pub submit_enabled: bool,
    pub error: Option<String>,
    pub image_name: Option<String>,
    pub category: Category,
    pub notes: String,
    pub result: Option<ResultView>,
    pub dirty: bool,
}

/// Display form of a successful estimate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultView {
    pub title: String,
    pub low: f64,
    pub high: f64,
    pub confidence: String,
    pub rationale: Vec<String>,
    pub notes: Vec<String>,
    pub keywords: Vec<String>,
    pub comps: Vec<CompRowView>,
    pub image_url: Option<String>,
    pub duration_ms: u64,
}

/// One rendered row of the comps table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompRowView {
    pub title: String,
    pub price_label: String,
    pub status_label: &'static str,
    /// Sold/ended date; empty for active listings.
    pub date_label: String,
    pub thumbnail: Option<String>,
    pub url: String,
}

/// The comps table: a pure function of the input list.
///
/// Empty input renders nothing; otherwise one row per comp in input order.
/// The newer `thumbnail`/`ended_at` fields win over the legacy
/// `thumb`/`sold_date` aliases when both are present.
pub fn comp_rows(comps: &[Comp]) -> Vec<CompRowView> {
    comps
        .iter()
        .map(|comp| {
            let thumbnail = comp.thumbnail.clone().or_else(|| comp.thumb.clone());
            let date = comp
                .ended_at
                .clone()
                .or_else(|| comp.sold_date.clone())
                .unwrap_or_default();
            CompRowView {
                title: comp.title.clone(),
                price_label: format_price(comp.price, comp.currency.as_deref()),
                status_label: match comp.status {
                    CompStatus::Sold => "Sold",
                    CompStatus::Active => "Active",
                },
                date_label: match comp.status {
                    CompStatus::Sold => date,
                    CompStatus::Active => String::new(),
                },
                thumbnail,
                url: comp.url.clone(),
            }
        })
        .collect()
}

/// Two decimal places, currency code prefix when known, `$` otherwise.
fn format_price(price: f64, currency: Option<&str>) -> String {
    match currency {
        Some(code) => format!("{code} {price:.2}"),
        None => format!("${price:.2}"),
    }
}
