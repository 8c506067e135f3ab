//! Terminal front end: lists the catalog and the cart and forwards each
//! command to the session, printing the resulting notification.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use storefront::{
    KeyValueStore, NotificationLevel, NotificationSink, Product, ProductDraft, ProductId,
    Storefront, StorefrontConfig,
};
use storefront_events::TracingNotifications;
use storefront_infra::FileStore;
use storefront_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Product catalog and shopping cart")]
struct Cli {
    /// Directory holding the stored catalog and cart (overrides STOREFRONT_DATA_DIR).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log output format on stderr: json or compact.
    #[arg(long, global = true, default_value = "compact")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the catalog.
    Products,
    /// Add a product to the catalog.
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value = "")]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List the cart.
    Cart,
    /// Add the catalog product with this id to the cart.
    CartAdd { id: ProductId },
    /// Remove the product with this id from the cart.
    CartRemove { id: ProductId },
}

/// Prints notifications for the user and mirrors them into the log.
struct ConsoleNotifications;

impl NotificationSink for ConsoleNotifications {
    fn notify(&self, level: NotificationLevel, message: &str) {
        TracingNotifications.notify(level, message);
        println!("[{level}] {message}");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    storefront_observability::logging::init(cli.log_format);

    let mut config = StorefrontConfig::from_env().context("failed to read configuration")?;
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir;
    }

    let store = match &config.data_dir {
        Some(dir) => FileStore::open(dir),
        None => FileStore::open_default(),
    }
    .context("failed to open the storefront data directory")?;
    tracing::debug!(dir = %store.dir().display(), "opened store");

    let mut shop = Storefront::open(&config, store, ConsoleNotifications)
        .context("failed to load catalog and cart")?;

    // Rejections were already reported through the notification sink.
    let reported = |err: storefront::StorefrontError| -> anyhow::Result<()> {
        match err {
            storefront::StorefrontError::Domain(e) => {
                tracing::debug!(error = %e, "action rejected");
                Ok(())
            }
            other => Err(other.into()),
        }
    };

    match cli.command {
        Command::Products => print_products(&shop),
        Command::Add {
            title,
            image,
            price,
            description,
        } => {
            let draft = ProductDraft::new(title, image, price).with_description(description);
            match shop.add_product(draft) {
                Ok(outcome) => println!("{}", format_product(&outcome.product)),
                Err(err) => reported(err)?,
            }
        }
        Command::Cart => {
            if shop.cart().is_empty() {
                println!("No items in the cart.");
            } else {
                for item in shop.cart() {
                    println!("{:>15}  {} - {}", item.id, item.title, item.price);
                }
            }
        }
        Command::CartAdd { id } => {
            shop.add_to_cart_by_id(id).or_else(reported)?;
        }
        Command::CartRemove { id } => {
            shop.remove_from_cart(id).map(|_| ()).or_else(reported)?;
        }
    }

    Ok(())
}

fn print_products<S, N>(shop: &Storefront<S, N>)
where
    S: KeyValueStore,
    N: NotificationSink,
{
    for product in shop.products() {
        println!(
            "{}  [{}]",
            format_product(product),
            shop.cart_button_label(product.id)
        );
    }
    println!("Cart: {}", shop.cart_count());
}

fn format_product(product: &Product) -> String {
    format!(
        "{:>15}  {} ({}) {}",
        product.id, product.title, product.price, product.image
    )
}
