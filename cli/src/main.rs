//! Tienda Online command-line tool
//!
//! Runs the backend or acts as the storefront client against it.
//!
//! ```sh
//! # Backend with default config (~/.config/tienda-online/config.toml)
//! tienda serve
//! tienda serve --port 8080 --check
//!
//! # Storefront
//! tienda products
//! tienda signup ana secreto
//! tienda login ana secreto
//! tienda add PROD001 2
//! tienda checkout "Calle Falsa 123"
//!
//! # Admin
//! tienda login admin admin123
//! tienda admin dashboard
//! tienda admin deliver 3
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info, warn};

use tienda::client::{
    default_state_path, Cart, FileStore, HttpApi, OrderLists, Storefront, DEFAULT_API_URL,
};
use tienda::config::{default_config_path, AppConfig};
use tienda::interfaces::http::modules::orders::OrderDto;
use tienda::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "tienda",
    version,
    about = "Tienda Online: storefront backend and command-line shop"
)]
struct Cli {
    /// Base URL of the backend API.
    #[arg(long, global = true, env = "TIENDA_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// File holding the logged-in user and the cart.
    #[arg(long, global = true, env = "TIENDA_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Do not seed an empty backend before running the command.
    #[arg(long, global = true)]
    no_bootstrap: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the REST backend.
    Serve(ServeArgs),
    #[command(flatten)]
    Shop(ShopCommand),
}

#[derive(Subcommand, Debug)]
enum ShopCommand {
    /// List the catalog.
    Products,
    /// Create a customer account.
    Signup { username: String, password: String },
    /// Log in; the session is kept in the state file.
    Login { username: String, password: String },
    Logout,
    /// Show the logged-in user.
    Whoami,
    /// Show the cart.
    Cart,
    /// Add a product to the cart.
    Add {
        code: String,
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Overwrite a cart line's quantity (0 or less removes it).
    SetQty {
        code: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart.
    Remove { code: String },
    /// Place an order with the cart contents.
    Checkout { address: String },
    /// Administrator views and actions.
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    /// Products plus pending and delivered orders.
    Dashboard,
    AddProduct {
        code: String,
        description: String,
        price: Decimal,
    },
    RemoveProduct { code: String },
    /// Mark a pending order as delivered.
    Deliver { id: i32 },
    /// Cancel (delete) a pending order.
    Cancel { id: i32 },
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TIENDA_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip first-run seeding.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Shop(command) => {
            init_client_tracing();
            shop(command, &cli.api_url, cli.state_file, cli.no_bootstrap).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn init_client_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

// ── Backend ────────────────────────────────────────────────────────

async fn serve(args: ServeArgs) -> CliResult {
    let config_path = args.config.unwrap_or_else(default_config_path);
    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    if args.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!("   Seeding     : {}", if config.seed.enabled { "on" } else { "off" });
        return Ok(());
    }
    if args.no_seed {
        config.seed.enabled = false;
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !args.no_migrate,
    })
    .await?;
    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");
    handle.wait().await;
    Ok(())
}

// ── Storefront ─────────────────────────────────────────────────────

async fn shop(command: ShopCommand, api_url: &str, state_file: Option<PathBuf>, no_bootstrap: bool) -> CliResult {
    let store = FileStore::new(state_file.unwrap_or_else(default_state_path));
    let shop = Storefront::new(HttpApi::new(api_url)?, store);

    if !no_bootstrap {
        if let Err(e) = shop.bootstrap().await {
            warn!("Could not seed the backend: {}", e);
        }
    }

    match command {
        ShopCommand::Products => {
            let products = shop.products().await?;
            println!("{:<10} {:<30} {:>10}", "CODE", "DESCRIPTION", "PRICE");
            for p in products {
                println!("{:<10} {:<30} {:>10}", p.code, p.description, format!("${:.2}", p.price));
            }
        }
        ShopCommand::Signup { username, password } => {
            let id = shop.signup(&username, &password).await?;
            println!("Account '{}' created (id {}). You can now log in.", username, id);
        }
        ShopCommand::Login { username, password } => {
            let user = shop.login(&username, &password).await?;
            let role = if user.is_admin { " (admin)" } else { "" };
            println!("Welcome, {}{}", user.username, role);
        }
        ShopCommand::Logout => {
            shop.logout()?;
            println!("Logged out");
        }
        ShopCommand::Whoami => match shop.current_user()? {
            Some(user) => println!("{} (id {}, admin: {})", user.username, user.id, user.is_admin),
            None => println!("Not logged in"),
        },
        ShopCommand::Cart => print_cart(&shop.cart()?),
        ShopCommand::Add { code, quantity } => print_cart(&shop.add_to_cart(&code, quantity).await?),
        ShopCommand::SetQty { code, quantity } => print_cart(&shop.update_quantity(&code, quantity)?),
        ShopCommand::Remove { code } => print_cart(&shop.remove_from_cart(&code)?),
        ShopCommand::Checkout { address } => {
            let id = shop.checkout(&address).await?;
            println!("Order #{} placed. Thank you for your purchase!", id);
        }
        ShopCommand::Admin(admin) => match admin {
            AdminCommand::Dashboard => {
                let dashboard = shop.admin_dashboard().await?;
                println!("Products: {}", dashboard.products.len());
                for p in &dashboard.products {
                    println!("  {:<10} {:<30} ${:.2}", p.code, p.description, p.price);
                }
                print_orders(&dashboard.orders);
            }
            AdminCommand::AddProduct { code, description, price } => {
                let id = shop.add_product(&code, &description, price).await?;
                println!("Product '{}' created (id {})", code.trim(), id);
            }
            AdminCommand::RemoveProduct { code } => {
                let removed = shop.remove_product(&code).await?;
                println!("Producto eliminado ({} rows)", removed);
            }
            AdminCommand::Deliver { id } => {
                let lists = shop.deliver_order(id).await?;
                println!("Pedido Entregado");
                print_orders(&lists);
            }
            AdminCommand::Cancel { id } => {
                let lists = shop.cancel_order(id).await?;
                println!("Pedido eliminado");
                print_orders(&lists);
            }
        },
    }
    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }
    for line in cart.lines() {
        println!(
            "{:<10} {:<30} {:>4} x ${:.2} = {}",
            line.code,
            line.description,
            line.quantity,
            line.price,
            money(line.subtotal())
        );
    }
    println!("Total: {}", money(cart.total()));
}

fn money(amount: Option<Decimal>) -> String {
    match amount {
        Some(amount) => format!("${:.2}", amount),
        None => "(too large)".to_string(),
    }
}

fn print_orders(lists: &OrderLists) {
    print_order_section("Pending orders", &lists.pending);
    print_order_section("Delivered orders", &lists.delivered);
}

fn print_order_section(title: &str, orders: &[OrderDto]) {
    println!("{} ({})", title, orders.len());
    for o in orders {
        println!(
            "  #{:<4} user {:<4} ${:<9.2} {} | {} | {}",
            o.id,
            o.user_id,
            o.total,
            o.date.format("%Y-%m-%d %H:%M"),
            o.address,
            o.items
        );
    }
}
