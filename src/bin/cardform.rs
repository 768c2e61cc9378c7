//! CLI front end for the card form.
//!
//! # Usage
//!
//! ```bash
//! # Luhn check
//! cardform check 4532015112830366
//!
//! # Format as the card-number field would
//! cardform format 4532015112830366
//!
//! # Fill in and submit the form
//! CARD_FORM_SERVER_URL=http://localhost:8080 cardform submit \
//!     --card-number "4532 0151 1283 0366" --cvv 123 --name "Ada Lovelace" \
//!     --month 12 --year 2030
//! ```

use card_form::{
    format_input, is_valid, logger, ClientConfig, FormController, FormEvent, HttpClient,
    NormalizedCardNumber,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Credit card form: validate, format and submit")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a card number with the Luhn algorithm
    Check {
        /// Card number (spaces allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Format a card number in groups of four
    Format {
        /// Raw input
        raw: String,
    },

    /// Validate the form and submit it to the server
    Submit {
        /// Card number
        #[arg(long)]
        card_number: String,

        /// CVV (3 digits)
        #[arg(long)]
        cvv: String,

        /// Cardholder name
        #[arg(long)]
        name: String,

        /// Expiration month (1-12)
        #[arg(long)]
        month: String,

        /// Expiration year (4 digits)
        #[arg(long)]
        year: String,

        /// Server base URL (defaults to CARD_FORM_SERVER_URL)
        #[arg(long)]
        server_url: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let code = match cli.command {
        Commands::Check {
            card_number,
            output,
        } => cmd_check(&card_number, output),
        Commands::Format { raw } => cmd_format(&raw),
        Commands::Submit {
            card_number,
            cvv,
            name,
            month,
            year,
            server_url,
        } => {
            let events = [
                FormEvent::CardNumber(card_number),
                FormEvent::Cvv(cvv),
                FormEvent::CardHolderName(name),
                FormEvent::ExpirationMonth(month),
                FormEvent::ExpirationYear(year),
            ];
            cmd_submit(events, server_url.as_deref()).await
        }
    };

    std::process::exit(code);
}

fn cmd_check(card_number: &str, output: OutputFormat) -> i32 {
    let valid = is_valid(card_number);

    match output {
        OutputFormat::Text => {
            println!("Luhn check: {}", if valid { "PASS" } else { "FAIL" });
        }
        OutputFormat::Json => {
            let masked = NormalizedCardNumber::parse(card_number)
                .map(|number| number.masked())
                .ok();
            let body = serde_json::json!({
                "valid": valid,
                "masked": masked,
            });
            println!("{body}");
        }
    }

    if valid {
        0
    } else {
        1
    }
}

fn cmd_format(raw: &str) -> i32 {
    println!("{}", format_input(raw));
    0
}

async fn cmd_submit(events: [FormEvent; 5], server_url: Option<&str>) -> i32 {
    let config = match server_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };

    let client = HttpClient::new(config);
    let mut form = FormController::new();
    for event in events {
        form.apply(event);
    }

    match form.submit(&client).await {
        Ok(message) => {
            println!("{}", message);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
