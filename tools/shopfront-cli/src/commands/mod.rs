//! CLI command implementations.

pub mod blog;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod currency;
pub mod wishlist;

use clap::{Args, Subcommand};
use shopfront_commerce::search::SortOption;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products, with optional filters.
    List(ListArgs),
    /// Show one product by id or slug.
    Show {
        /// Product id or slug.
        product: String,
    },
    /// Show facet counts for the sidebar.
    Facets,
}

/// Filter, sort and page options for a product listing.
#[derive(Args, Default)]
pub struct ListArgs {
    /// Free-text search over name, description, category and tags.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Category filter (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Color filter (repeatable).
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Size filter (repeatable).
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Tag filter (repeatable).
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Price bucket id (e.g., "25-50", "over-200").
    #[arg(long)]
    pub price: Option<String>,

    /// Only products in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order: default, price-asc, price-desc, newest, rating, reviews.
    #[arg(short, long, default_value_t = SortOption::Default)]
    pub sort: SortOption,

    /// Page number (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart and its totals.
    Show,
    /// Add a product to the cart.
    Add {
        /// Product id or slug.
        product: String,

        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Selected size.
        #[arg(long)]
        size: Option<String>,

        /// Selected color.
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove a line from the cart.
    Remove {
        /// Line id (as shown by `cart show`).
        line: String,
    },
    /// Set a line's quantity; 0 or less removes it.
    Set {
        /// Line id (as shown by `cart show`).
        line: String,

        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommand>,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// Show the wishlist.
    Show,
    /// Add a product.
    Add {
        /// Product id or slug.
        product: String,
    },
    /// Remove a product.
    Remove {
        /// Product id or slug.
        product: String,
    },
    /// Add if absent, remove if present.
    Toggle {
        /// Product id or slug.
        product: String,
    },
    /// Move a product to the cart.
    Move {
        /// Product id or slug.
        product: String,
    },
    /// Empty the wishlist.
    Clear,
}

/// Arguments for the currency command.
#[derive(Args)]
pub struct CurrencyArgs {
    #[command(subcommand)]
    pub command: Option<CurrencyCommand>,
}

#[derive(Subcommand)]
pub enum CurrencyCommand {
    /// Show the selected currency.
    Show,
    /// List supported currencies.
    List,
    /// Select a display currency.
    Set {
        /// Currency code (e.g., EUR). Unknown codes select USD.
        code: String,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Contact email.
    #[arg(long)]
    pub email: String,

    /// Contact phone.
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// Street address.
    #[arg(long)]
    pub address1: String,

    /// Apartment, suite, etc.
    #[arg(long)]
    pub address2: Option<String>,

    #[arg(long)]
    pub city: String,

    /// State or province code.
    #[arg(long)]
    pub state: Option<String>,

    /// Postal code.
    #[arg(long)]
    pub zip: String,

    /// Country code.
    #[arg(long, default_value = "US")]
    pub country: String,

    /// Keep the cart after placing the order.
    #[arg(long)]
    pub keep_cart: bool,
}

/// Arguments for the blog command.
#[derive(Args)]
pub struct BlogArgs {
    #[command(subcommand)]
    pub command: Option<BlogCommand>,
}

#[derive(Subcommand)]
pub enum BlogCommand {
    /// List posts, newest first.
    List {
        /// Only posts with this tag.
        #[arg(short, long)]
        tag: Option<String>,

        /// Maximum number of posts.
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a post.
    Show {
        /// Post slug.
        slug: String,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
