use clap::Parser;
use decor_core::app::Workshop;
use decor_core::domain::{DecorError, Health, Magnitude, Menu, Price, Recipe};
use decor_core::impls::WriterHerald;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod args;
use args::{Cli, Commands, Kind};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: could not install log subscriber: {e}");
    }
}

fn run(cli: Cli) -> Result<(), DecorError> {
    match cli.command {
        Commands::Coffee { toppings } => {
            let shop = Workshop::coffee_shop()?;
            order(&shop, recipe("SimpleCoffee", toppings), cli.json)
        }
        Commands::Character { base, ranks, cry } => {
            let barracks = Workshop::barracks()?;
            let recipe = recipe(&base, ranks);
            order(&barracks, recipe.clone(), cli.json)?;
            if cry {
                barracks.rally(&recipe, &WriterHerald::new(std::io::stdout()))?;
            }
            Ok(())
        }
        Commands::Menu {
            path,
            base,
            ornaments,
            kind,
        } => {
            let recipe = recipe(&base, ornaments);
            match kind {
                Kind::Price => {
                    let menu = Menu::<Price>::load(&path)?;
                    order(&Workshop::from_menu(&menu)?, recipe, cli.json)
                }
                Kind::Health => {
                    let menu = Menu::<Health>::load(&path)?;
                    order(&Workshop::from_menu(&menu)?, recipe, cli.json)
                }
            }
        }
        Commands::List => {
            let shop = Workshop::coffee_shop()?;
            let barracks = Workshop::barracks()?;
            println!(
                "coffee:    {} + [{}]",
                shop.base_names().join(", "),
                shop.ornament_names().join(", ")
            );
            println!(
                "character: {} + [{}]",
                barracks.base_names().join(", "),
                barracks.ornament_names().join(", ")
            );
            Ok(())
        }
    }
}

fn recipe(base: &str, ornaments: Vec<String>) -> Recipe {
    ornaments
        .into_iter()
        .fold(Recipe::new(base), |recipe, name| recipe.with(name))
}

fn order<V: Magnitude>(
    workshop: &Workshop<V>,
    recipe: Recipe,
    json: bool,
) -> Result<(), DecorError> {
    let receipt = workshop.order(recipe)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        println!("{}: {}", receipt.description, receipt.value);
    }
    Ok(())
}
