#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_client::{
    coord_to_string, init_logging, parse_cell, CliUi, ClientConfig, GameClient, PlacementSession,
    Selection, ShipsEncoding, StompTransport, MAX_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use tokio::net::TcpStream;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Place a Battleship fleet and submit it to the game server", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Board width and height, 1 to 26.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=MAX_BOARD_SIZE as i64))]
    size: u8,
    /// Send ships as `{x:1, y:2}` text instead of JSON records.
    #[arg(long)]
    legacy_ships: bool,
    /// Send the placement frame to this TCP peer instead of stdout.
    #[arg(long)]
    connect: Option<String>,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Seconds to wait for a frame write.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = ClientConfig {
        board_width: usize::from(cli.size),
        board_height: usize::from(cli.size),
        ships_encoding: if cli.legacy_ships {
            ShipsEncoding::LegacyText
        } else {
            ShipsEncoding::Structured
        },
        send_timeout: Duration::from_secs(cli.timeout),
        ..ClientConfig::default()
    };
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut session = PlacementSession::from_config(CliUi::new(), &config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter cells as A5 or \"col row\". Press enter to place the current ship randomly.");
    while !session.is_complete() {
        session
            .ui()
            .print_board(session.board_width(), session.board_height());
        print!("{}: ", session.status());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Err(anyhow::anyhow!("input closed before all ships were placed"));
        };
        let line = line?;
        if line.trim().is_empty() {
            match session.auto_place_active(&mut rng) {
                Ok(Some(kind)) => println!("Placed the {} randomly.", kind),
                Ok(None) => println!("No room left for a random placement."),
                Err(e) => println!("Random placement stopped: {}", e),
            }
            continue;
        }
        let Some(cell) = parse_cell(&line, session.board_width(), session.board_height()) else {
            println!("Invalid coordinate");
            continue;
        };
        if let Ok(Selection::Placed { ship, remaining: 0 }) = session.on_cell_selected(cell) {
            println!(
                "The {} is in position (last cell {}).",
                ship,
                coord_to_string(cell.col, cell.row)
            );
        }
    }
    session
        .ui()
        .print_board(session.board_width(), session.board_height());
    println!("{}", session.status());

    let payload = loop {
        let username = prompt(&mut lines, "Username")?;
        let victory_message = prompt(&mut lines, "Victory message")?;
        match session.submit(&username, &victory_message) {
            Ok(payload) => break payload,
            Err(_) => continue,
        }
    };

    let mut client = match &cli.connect {
        Some(addr) => {
            println!("Connecting to {}...", addr);
            let stream = TcpStream::connect(addr).await?;
            GameClient::new(Box::new(StompTransport::with_config(stream, &config)))
        }
        None => GameClient::new(Box::new(StompTransport::with_config(
            tokio::io::stdout(),
            &config,
        ))),
    };
    client.send_placement(payload).await?;
    println!();
    Ok(())
}

#[cfg(feature = "std")]
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> anyhow::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Err(anyhow::anyhow!("input closed")),
    }
}
