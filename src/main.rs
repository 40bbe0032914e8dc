mod cli;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use cli::{Cli, Commands, OutputArgs, SHELL_HELP, ShellCommand};
use travel_recommendation::loader::loader_from_config;
use travel_recommendation::{Presenter, ResultsArea, SearchPage, TravelRecConfig, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut config = TravelRecConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    match cli.verbose {
        0 => {}
        1 => config.logging.level = "debug".to_string(),
        _ => config.logging.level = "trace".to_string(),
    }
    telemetry::init(&config.logging)?;

    match command {
        Commands::Search { keyword, output } => {
            let page = build_page(&mut config, &output)?;
            page.set_input(keyword).await;
            let state = page.on_search().await;
            debug!("Search finished: {:?}", state);
            print_results(&page.results().await, output.html);
        }
        Commands::Shell { output } => {
            let page = build_page(&mut config, &output)?;
            run_shell(&page, output.html).await?;
        }
    }

    Ok(())
}

fn build_page(config: &mut TravelRecConfig, output: &OutputArgs) -> Result<SearchPage> {
    if let Some(dataset) = &output.dataset {
        config.dataset.source = dataset.clone();
    }
    info!("Using dataset from: {}", config.dataset.source);

    let loader = loader_from_config(config).context("Failed to set up dataset loader")?;
    Ok(SearchPage::new(loader, Presenter::from_config(config)))
}

async fn run_shell(page: &SearchPage, html: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match ShellCommand::parse(&line) {
            ShellCommand::Search(keyword) => {
                if let Some(keyword) = keyword {
                    page.set_input(keyword).await;
                }
                page.on_search().await;
                print_results(&page.results().await, html);
            }
            ShellCommand::Type(text) => page.set_input(text).await,
            ShellCommand::Clear => page.on_clear(true).await,
            ShellCommand::ClearResults => page.on_clear(false).await,
            ShellCommand::ImageError(number) => {
                if page.on_image_error(number - 1).await {
                    print_results(&page.results().await, html);
                }
            }
            ShellCommand::Show => print_results(&page.results().await, html),
            ShellCommand::Help => println!("{SHELL_HELP}"),
            ShellCommand::Quit => break,
            ShellCommand::Invalid(reason) => eprintln!("{reason}"),
        }
    }

    Ok(())
}

fn print_results(results: &ResultsArea, html: bool) {
    if html {
        println!("{}", results.to_html());
    } else {
        print!("{results}");
    }
}
