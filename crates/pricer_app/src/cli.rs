use clap::{Parser, Subcommand, ValueEnum};
use pricer_core::Category;

#[derive(Parser, Debug)]
#[command(name = "antique-pricer", version, about = "Photo-based antique price estimates")]
pub struct Cli {
    /// Estimate service base URL; overrides ANTIQUE_PRICER_API_URL.
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a photo and print the price estimate with comparable listings.
    Estimate {
        /// Path to the item photo (jpg, png, webp, or gif; max 10MB).
        image: String,
        #[arg(long, value_enum, default_value_t = CategoryArg::NotSure)]
        category: CategoryArg,
        /// Free-text notes (dimensions, maker's mark, condition).
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Check whether the estimate service is reachable and healthy.
    Health,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CategoryArg {
    NotSure,
    Furniture,
    Art,
    Jewelry,
    Collectible,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::NotSure => Category::NotSure,
            CategoryArg::Furniture => Category::Furniture,
            CategoryArg::Art => Category::Art,
            CategoryArg::Jewelry => Category::Jewelry,
            CategoryArg::Collectible => Category::Collectible,
        }
    }
}
