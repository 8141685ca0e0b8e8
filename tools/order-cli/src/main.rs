//! `starshop-order`: submit a storefront order with a payment screenshot.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use starshop_common::config::SessionConfig;
use starshop_common::session::Notice;
use starshop_order::{place_order, OrderArgs, Outcome};

#[derive(Parser)]
#[command(name = "starshop-order", about = "Submit a storefront order")]
struct Cli {
    /// Backend base URL; orders go to `<base>/api/order`.
    #[arg(long, env = "STARSHOP_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Link shown for custom (zero-priced) orders.
    #[arg(long, env = "STARSHOP_CONTACT_URL")]
    contact_url: Option<String>,

    /// Decimal price. Zero means a custom order.
    #[arg(long)]
    price: String,

    /// Unit count, for packs sold by quantity.
    #[arg(long)]
    quantity: Option<String>,

    /// Item name, for items sold by label.
    #[arg(long)]
    description: Option<String>,

    /// Your username (with or without `@`).
    #[arg(long, default_value = "")]
    sender: String,

    #[arg(long)]
    sender_id: Option<String>,

    /// Recipient as `@username` or numeric id.
    #[arg(long, default_value = "")]
    recipient: String,

    /// Payment screenshot to attach.
    #[arg(long)]
    screenshot: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = SessionConfig::default().with_base_url(&cli.base_url);
    if let Some(url) = &cli.contact_url {
        config = config.with_contact_url(url);
    }

    let args = OrderArgs {
        price: cli.price,
        quantity: cli.quantity,
        description: cli.description,
        sender: cli.sender,
        sender_id: cli.sender_id,
        recipient: cli.recipient,
        screenshot: cli.screenshot,
    };

    match place_order(config, args).await? {
        Outcome::Placed => println!("{}", Notice::OrderPlaced),
        Outcome::Contact(url) => println!("Custom orders are arranged personally: {url}"),
    }
    Ok(())
}
