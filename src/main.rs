use rand::SeedableRng;
use rand::rngs::StdRng;

use fixturegen::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let seed = match parse_args(std::env::args().collect()) {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("fixturegen: {}", e);
            std::process::exit(1);
        }
    };

    CliApp::new("fixturegen").run(run_fixture_generator(seed)).await
}

/// Parse and validate command-line arguments: an optional u64 RNG seed
fn parse_args(args: Vec<String>) -> Result<Option<u64>, AppError> {
    match args.len() {
        1 => Ok(None),
        2 => args[1].parse().map(Some).map_err(|_| {
            AppError::InvalidArguments(format!("seed must be an unsigned integer, got {:?}", args[1]))
        }),
        _ => Err(AppError::InvalidArguments(
            "Usage: fixturegen [seed]".to_string(),
        )),
    }
}

/// Main application logic - generates clustered points and writes the
/// fixture file to the current working directory
async fn run_fixture_generator(seed: Option<u64>) -> Result<(), AppError> {
    let config = GeneratorConfig::default();

    // Seeded runs reproduce byte-identical fixtures; otherwise each run
    // draws fresh data from OS entropy
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let points = generate_points(&mut rng, &config)?;
    write_fixture_file(FIXTURE_FILE, &points).await?;

    Ok(())
}
