//! Payments CLI
//!
//! Builds payments locally with the same validation the server applies and
//! prints the result.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use payments_hex::PaymentService;
use payments_types::{
    CreateCardPaymentRequest, CreatePixPaymentRequest, Currency, Money, Payment,
    PaymentResponse, SystemClock, UuidGenerator, ValidationErrors, ValidationResult,
};

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Validate and build payment records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a credit card payment
    Card {
        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
        /// Currency (BRL, USD)
        #[arg(long, default_value = "BRL")]
        currency: Currency,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "")]
        card_number: String,
        #[arg(long, default_value = "")]
        holder: String,
        /// Expiration month (YYYY-MM or YYYY-MM-DD)
        #[arg(long, value_parser = parse_expiration)]
        expiration: Option<NaiveDate>,
        #[arg(long, default_value = "")]
        cvv: String,
    },
    /// Build a Pix payment (BRL)
    Pix {
        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        pix_key: Option<String>,
        #[arg(long)]
        pix_description: Option<String>,
    },
    /// Show how an amount is displayed
    Money {
        /// Currency (BRL, USD)
        #[arg(long, default_value = "BRL")]
        currency: Currency,
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
}

fn parse_expiration(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d"))
        .map_err(|_| anyhow::anyhow!("Invalid expiration: {}. Expected YYYY-MM or YYYY-MM-DD", s))
}

fn print_errors(errors: &ValidationErrors) -> ! {
    for message in errors.messages() {
        eprintln!("✗ {}", message);
    }
    std::process::exit(1);
}

fn print_payment(result: ValidationResult<Payment>) -> Result<()> {
    match result {
        Ok(payment) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&PaymentResponse::from(&payment))?
            );
            Ok(())
        }
        Err(errors) => print_errors(&errors),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let service: PaymentService<SystemClock, UuidGenerator> = PaymentService::default();

    match cli.command {
        Commands::Card {
            amount,
            currency,
            description,
            card_number,
            holder,
            expiration,
            cvv,
        } => print_payment(service.create_card_payment(CreateCardPaymentRequest {
            amount,
            currency,
            description,
            card_number,
            card_holder_name: holder,
            expiration_date: expiration,
            cvv,
        })),

        Commands::Pix {
            amount,
            description,
            pix_key,
            pix_description,
        } => print_payment(service.create_pix_payment(CreatePixPaymentRequest {
            amount,
            description,
            pix_key,
            pix_description,
        })),

        Commands::Money { currency, amount } => match Money::create(currency, amount) {
            Ok(money) => {
                println!("{}", money);
                Ok(())
            }
            Err(errors) => print_errors(&errors),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expiration_formats() {
        assert_eq!(
            parse_expiration("2027-04").unwrap(),
            NaiveDate::from_ymd_opt(2027, 4, 1).unwrap()
        );
        assert_eq!(
            parse_expiration("2027-04-17").unwrap(),
            NaiveDate::from_ymd_opt(2027, 4, 17).unwrap()
        );
        assert!(parse_expiration("04/27").is_err());
    }

    #[test]
    fn test_cli_parses_card_command() {
        let cli = Cli::try_parse_from([
            "payments",
            "card",
            "--amount",
            "100",
            "--card-number",
            "4111 1111 1111 1111",
            "--holder",
            "John Doe",
            "--expiration",
            "2030-01",
            "--cvv",
            "123",
        ])
        .unwrap();

        let Commands::Card {
            currency,
            expiration,
            ..
        } = cli.command
        else {
            panic!("expected card command");
        };
        assert_eq!(currency, Currency::BRL);
        assert_eq!(expiration, NaiveDate::from_ymd_opt(2030, 1, 1));
    }
}
