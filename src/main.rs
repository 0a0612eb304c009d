use clap::Parser;
use infraquery::cli::{
    ask, groups, handle_completions, handle_config_init, Cli, Commands, ConfigCommands,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => infraquery::cli::serve::run_serve(args).await,
        Commands::Ask(args) => ask::handle_ask(&args).await.map(|output| {
            println!("{}", output);
        }),
        Commands::Groups(args) => groups::handle_groups(&args).await.map(|output| {
            println!("{}", output);
        }),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
