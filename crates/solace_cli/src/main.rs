use clap::{Parser, Subcommand};
use solace_core::SolaceConfig;
use solace_engine::ResponsePipeline;
use solace_gateway::GatewayServer;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "solace.toml")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP gateway
    Serve,
    /// Chat interactively on the terminal
    Chat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = SolaceConfig::load_or_default(&args.config);
    info!(snapshot = %config.engine.snapshot_path, "initializing Solace");
    let pipeline = Arc::new(ResponsePipeline::load_or_bootstrap(config.engine.clone()));
    info!(turns = pipeline.turn_count().await, "engine ready");

    match args.command.unwrap_or(Command::Chat) {
        Command::Serve => {
            let server = GatewayServer::new(pipeline, &config.gateway.host, config.gateway.port);
            server.start().await?;
        }
        Command::Chat => chat_loop(pipeline).await?,
    }

    Ok(())
}

async fn chat_loop(pipeline: Arc<ResponsePipeline>) -> anyhow::Result<()> {
    println!("Solace is listening. Type 'quit' to exit.");
    print!("> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let trimmed = input.trim();

        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        if trimmed.is_empty() {
            print!("> ");
            io::stdout().flush()?;
            continue;
        }

        let reply = pipeline.process(trimmed).await;
        println!("\nSolace: {}\n", reply.text);

        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}
