use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use munchings_menu_service::Category;
use munchings_reservation_service::{ReservationSort, ReservationStatus};

mod app;

#[derive(Parser)]
#[command(version, about = "Restaurant menu, ordering and reservations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the menu, optionally a single category
    Menu {
        #[arg(long)]
        category: Option<Category>,
    },
    /// Order dishes for a table by name
    Order {
        #[arg(long)]
        table: String,
        #[arg(long = "item", required = true)]
        items: Vec<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Request a table booking
    Book {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, value_parser = app::book::parse_time)]
        time: NaiveTime,
        #[arg(long, default_value_t = 2)]
        guests: u32,
        #[arg(long)]
        requests: Option<String>,
    },
    /// Sign in as the configured admin and show the dashboard
    Dashboard {
        /// Move every reservation and order one step forward
        #[arg(long)]
        advance: bool,
        /// Only list reservations with this status
        #[arg(long)]
        status: Option<ReservationStatus>,
        /// Order reservations by `date` or `created`, latest first
        #[arg(long, default_value = "created")]
        sort: ReservationSort,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Menu { category } => app::menu::main(category).await,
        Commands::Order { table, items, note } => app::order::main(table, items, note).await,
        Commands::Book {
            name,
            email,
            phone,
            date,
            time,
            guests,
            requests,
        } => {
            let form = munchings_reservation_service::BookingForm {
                name,
                email,
                phone,
                date: Some(date),
                time: Some(time),
                guests,
                special_requests: requests.unwrap_or_default(),
            };
            app::book::main(form).await
        }
        Commands::Dashboard {
            advance,
            status,
            sort,
        } => app::dashboard::main(advance, status, sort).await,
    }
}
