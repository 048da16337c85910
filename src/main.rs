//! Binary entry point for the model registrar

use model_registrar::cli::{Args, Runner};

#[tokio::main]
async fn main() {
    // Credentials for the tracking server may live in a local .env file
    dotenvy::dotenv().ok();

    let args = Args::parse_args().from_env();

    let runner = match Runner::new(args) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runner.run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
