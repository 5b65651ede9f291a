use avatar_gen::{
    app::Application,
    config::{AppConfig, Format},
    telemetry::{build_telemetry, register_telemetry},
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config setup
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();

    // Logs go to stderr, stdout carries the report
    let telemetry = build_telemetry(
        env!("CARGO_CRATE_NAME").into(),
        config.log_level.clone(),
        std::io::stderr,
    );
    register_telemetry(telemetry);

    let app = Application::build(&config)?;
    let reports = app.run(config.names.clone()).await?;

    match config.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        Format::Text => {
            for report in &reports {
                match (&report.path, &report.error) {
                    (Some(path), _) => println!("{}\t{}", report.name, path.display()),
                    (None, Some(error)) => eprintln!("{}\terror: {}", report.name, error),
                    (None, None) => {}
                }
            }
        }
    }

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} avatars failed", failed, reports.len());
    }

    Ok(())
}
