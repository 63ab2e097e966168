//! # Recibo CLI
//!
//! Command-line interface for compiling and printing receipts.
//!
//! ## Usage
//!
//! ```bash
//! # List built-in sample templates
//! recibo samples
//!
//! # Show a sample as JSON
//! recibo samples kitchen
//!
//! # Compile a template to ESC/POS bytes
//! recibo compile order.json --out order.bin
//!
//! # Print to a network printer
//! recibo print kitchen --printer 192.168.1.50
//!
//! # Print on 58mm paper through a bound Bluetooth printer
//! recibo --paper 58mm print order.json --printer /dev/rfcomm0
//!
//! # Run the HTTP API
//! recibo serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use recibo::{
    PrinterConfig, PrinterManager, ReciboError, ReceiptCompiler, TextEncoding, samples,
    server::{self, ServerConfig},
};
use serde_json::Value;

/// Recibo - ESC/POS receipt compiler and printer utility
#[derive(Parser, Debug)]
#[command(name = "recibo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Paper width preset
    #[arg(long, global = true, default_value = "80mm", value_parser = ["80mm", "58mm"])]
    paper: String,

    /// Override the number of text columns
    #[arg(long, global = true)]
    columns: Option<usize>,

    /// Text encoding sent to the printer
    #[arg(long, global = true, default_value = "utf8", value_parser = ["utf8", "cp437"])]
    encoding: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a template to printer bytes
    Compile {
        /// JSON file or sample name
        template: String,

        /// Write bytes to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Compile a template and print it
    Print {
        /// JSON file or sample name
        template: String,

        /// IP address, MAC address or device path
        #[arg(long)]
        printer: String,
    },

    /// Print plain text followed by a cut
    Text {
        text: String,

        /// IP address, MAC address or device path
        #[arg(long)]
        printer: String,
    },

    /// Check whether a printer is reachable
    Status {
        /// IP address, MAC address or device path
        #[arg(long)]
        printer: String,
    },

    /// List sample templates, or show one
    Samples { name: Option<String> },

    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,
    },
}

impl Cli {
    fn printer_config(&self) -> PrinterConfig {
        let mut config = PrinterConfig::for_paper(&self.paper).unwrap_or_default();
        if let Some(columns) = self.columns {
            config = config.with_columns(columns);
        }
        if let Some(encoding) = TextEncoding::parse(&self.encoding) {
            config = config.with_encoding(encoding);
        }
        config
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recibo=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ReciboError> {
    let cli = Cli::parse();
    let config = cli.printer_config();

    match cli.command {
        Commands::Compile { template, out } => {
            let data = ReceiptCompiler::new(config).compile(&load_template(&template)?)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &data)?;
                    println!("Wrote {} bytes to {}", data.len(), path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&data)?;
                    stdout.flush()?;
                }
            }
        }

        Commands::Print { template, printer } => {
            let template = load_template(&template)?;
            let manager = PrinterManager::new(config);
            // Compile before connecting so a bad template never opens the device.
            manager.compiler().compile(&template)?;
            manager.connect(&printer).await?;
            let result = manager.print_receipt(&template, &printer).await;
            manager.disconnect(&printer).await?;
            result?;
            println!("Printed successfully!");
        }

        Commands::Text { text, printer } => {
            let manager = PrinterManager::new(config);
            manager.connect(&printer).await?;
            let result = manager.print_text(&text, &printer).await;
            manager.disconnect(&printer).await?;
            result?;
            println!("Printed successfully!");
        }

        Commands::Status { printer } => {
            let manager = PrinterManager::new(config);
            if let Err(e) = manager.connect(&printer).await {
                eprintln!("Could not connect: {}", e);
            }
            let status = manager.status(&printer).await;
            manager.disconnect(&printer).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }

        Commands::Samples { name: None } => {
            println!("Available samples:");
            for name in samples::list_samples() {
                println!("  {}", name);
            }
        }

        Commands::Samples { name: Some(name) } => match samples::by_name(&name) {
            Some(sample) => println!("{}", serde_json::to_string_pretty(&sample)?),
            None => {
                eprintln!("Unknown sample: {}", name);
                eprintln!("Run 'recibo samples' to see available samples.");
                std::process::exit(1);
            }
        },

        Commands::Serve { listen } => {
            server::serve(ServerConfig {
                listen_addr: listen,
                printer: config,
            })
            .await?;
        }
    }

    Ok(())
}

/// Load a template from a sample name or a JSON file.
fn load_template(source: &str) -> Result<Value, ReciboError> {
    if let Some(sample) = samples::by_name(source) {
        return Ok(sample);
    }
    let json = std::fs::read_to_string(Path::new(source))?;
    Ok(serde_json::from_str(&json)?)
}
