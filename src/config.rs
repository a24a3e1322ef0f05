use crate::export::{ExportFields, ExportFormat};
use crate::favorites::FavoritesSort;
use crate::query::{FilterSpec, PriceRange, QueryState, SortKey, StatusFilter, DEFAULT_PAGE_SIZE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "homefinder", version)]
#[command(about = "Browse, filter and shortlist property listings", long_about = None)]
pub struct Cli {
    /// Listing data: a JSON file path, an http(s) URL, or "mock"
    #[arg(long, env = "HOMEFINDER_SOURCE", default_value = "mock", global = true)]
    pub source: String,

    /// Log filter, e.g. "info" or "homefinder=debug" (RUST_LOG wins when set)
    #[arg(long, env = "HOMEFINDER_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter, sort and page through listings
    Search(SearchArgs),
    /// Show the cities, types and amenities available for filtering
    Facets,
    /// Manage the favorites list
    Favorites {
        #[command(flatten)]
        store: StoreArgs,

        #[command(subcommand)]
        command: FavoritesCommand,
    },
    /// Add, edit or remove listings in a JSON data file
    Listings {
        #[command(subcommand)]
        command: ListingsCommand,
    },
    /// Export favorites as a report, CSV or JSON
    Export(ExportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Where favorites are persisted
    #[arg(long = "store", env = "HOMEFINDER_FAVORITES", default_value = "favorites.json")]
    pub path: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Free text matched against title, city, neighborhood and type
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// all, for-sale or for-rent
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    /// Accepted property type (repeatable)
    #[arg(long = "type")]
    pub property_types: Vec<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub neighborhood: Option<String>,

    /// Required amenity (repeatable)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    /// relevance, price-asc, price-desc, newest, oldest, area-desc, area-asc
    #[arg(long, default_value = "relevance")]
    pub sort: SortKey,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, allow_negative_numbers = true)]
    pub page_size: i64,

    /// Cumulative page count; page N shows the first N pages
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Print the result as JSON instead of a listing table
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn to_query_state(&self) -> QueryState {
        let defaults = PriceRange::default();
        let filter = FilterSpec {
            price_range: PriceRange::new(
                self.min_price.unwrap_or(defaults.min),
                self.max_price.unwrap_or(defaults.max),
            ),
            property_types: self.property_types.clone(),
            city: self.city.clone(),
            neighborhood: self.neighborhood.clone(),
            amenities: self.amenities.clone(),
            status: self.status,
            search_query: self.query.clone(),
        };

        QueryState {
            filter,
            sort: self.sort,
            page_size: self.page_size,
            page: self.page,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    Add { id: String },
    Remove { id: String },
    Toggle { id: String },
    /// Show saved listings
    List {
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        /// date-added, date-added-old, price-low, price-high, property-type, location
        #[arg(long, default_value = "date-added")]
        sort: FavoritesSort,
    },
    Clear,
    /// Compare two or three saved listings side by side
    Compare {
        #[arg(required = true, num_args = 2..=3)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ListingsCommand {
    Show { id: String },
    /// Add a listing from a JSON file holding one listing without an id
    Add { file: PathBuf },
    /// Apply a partial update from a JSON file
    Update { id: String, file: PathBuf },
    Delete { id: String },
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// text, csv or json
    #[arg(long, default_value = "text")]
    pub format: ExportFormat,

    #[arg(long)]
    pub no_basic_info: bool,

    #[arg(long)]
    pub no_price_details: bool,

    #[arg(long)]
    pub no_amenities: bool,

    #[arg(long)]
    pub no_contact_info: bool,

    /// Include image URLs
    #[arg(long)]
    pub images: bool,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    pub fn fields(&self) -> ExportFields {
        ExportFields {
            basic_info: !self.no_basic_info,
            price_details: !self.no_price_details,
            amenities: !self.no_amenities,
            contact_info: !self.no_contact_info,
            images: self.images,
        }
    }
}
