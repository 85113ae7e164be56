use std::fmt;

/// Item category the user attributes to the photographed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    NotSure,
    Furniture,
    Art,
    Jewelry,
    Collectible,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::NotSure,
        Category::Furniture,
        Category::Art,
        Category::Jewelry,
        Category::Collectible,
    ];

    /// Wire value sent as the multipart `category` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::NotSure => "not_sure",
            Category::Furniture => "furniture",
            Category::Art => "art",
            Category::Jewelry => "jewelry",
            Category::Collectible => "collectible",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing status of a comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompStatus {
    #[default]
    Active,
    Sold,
}

/// A comparable listing used as pricing evidence.
///
/// Carries both field-naming schemes the backend has emitted historically:
/// `thumbnail`/`ended_at` and the legacy `thumb`/`sold_date` aliases. The
/// view model resolves the fallback; the raw record keeps both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comp {
    pub title: String,
    pub price: f64,
    pub url: String,
    pub currency: Option<String>,
    pub thumbnail: Option<String>,
    pub thumb: Option<String>,
    pub status: CompStatus,
    pub ended_at: Option<String>,
    pub sold_date: Option<String>,
}

/// Estimated low/high price band with a qualitative confidence label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
    pub confidence: String,
}

/// A successful pricing result as displayed by the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Estimate {
    pub normalized_title: String,
    pub value_range: ValueRange,
    pub pricing_rationale: Vec<String>,
    pub top_comps_used: Vec<usize>,
    pub notes: Vec<String>,
    pub suggested_keywords: Vec<String>,
    pub comps: Vec<Comp>,
    pub image_url: Option<String>,
    pub duration_ms: u64,
}
