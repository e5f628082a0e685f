use clap::Parser;
use eatwell::utils::{logger, validation::Validate};
use eatwell::{
    CartLedger, Category, CliConfig, ConfigProvider, FileMenuSource, MenuCatalog, TomlConfig,
};
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // A config file, when given, supplies the menu path and can raise verbosity.
    if let Some(config_path) = config.config.clone() {
        match TomlConfig::from_file(&config_path) {
            Ok(file_config) => {
                config.menu_path = file_config.menu_path().to_string();
                config.verbose = config.verbose || file_config.verbose();
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file {}: {}", config_path, e);
                std::process::exit(1);
            }
        }
    }

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting eatwell CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = FileMenuSource::new(config.menu_path.clone());
    let catalog = match MenuCatalog::from_source(&source) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to load menu from {}: {}", config.menu_path, e);
            eprintln!("❌ Failed to load menu from {}: {}", config.menu_path, e);
            std::process::exit(1);
        }
    };
    tracing::info!("✅ Loaded {} dishes from {}", catalog.len(), config.menu_path);

    println!("## 🍽 **EAT WELL APP**");
    println!();
    println!("𓌉◯𓇋 **MENU**");
    for category in Category::ALL {
        println!();
        println!("{}:", category.label().to_uppercase());
        for name in catalog.list_by_category(category) {
            println!("- {}", name);
        }
    }
    println!();
    print_help();

    run_session(&catalog)?;

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  menu <category>   list dishes (appetizers, main course, desserts)");
    println!("  info <dish>       show nutrition and price details");
    println!("  add <dish>        add a dish to the cart");
    println!("  cart              show the current cart");
    println!("  clear             empty the cart");
    println!("  quit              exit");
}

fn run_session(catalog: &MenuCatalog) -> io::Result<()> {
    let mut ledger = CartLedger::new(catalog);
    let stdin = io::stdin();

    print!("> ");
    io::stdout().flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        let (command, argument) = match trimmed.split_once(' ') {
            Some((command, rest)) => (command, Some(rest.trim())),
            None => (trimmed, None),
        };

        match command {
            "" => {}
            "menu" => match argument.and_then(Category::parse) {
                Some(category) => {
                    println!("{}:", category.label().to_uppercase());
                    for name in catalog.list_by_category(category) {
                        println!("- {}", name);
                    }
                }
                None => println!("Unknown category. Try: appetizers, main course, desserts"),
            },
            "info" => println!("{}", catalog.format_details(argument.unwrap_or(""))),
            "add" => println!("{}", ledger.add_to_cart(argument)),
            "cart" => println!("{}", ledger.summary()),
            "clear" => println!("{}", ledger.clear_cart()),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (try 'help')", other),
        }

        print!("> ");
        io::stdout().flush()?;
    }

    tracing::info!("Session ended");
    Ok(())
}
