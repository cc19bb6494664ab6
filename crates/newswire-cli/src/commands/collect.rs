use anyhow::Result;

use newswire_core::collector::Collector;
use newswire_core::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    println!("Collecting from {} sources...\n", config.sources.urls.len());

    let collector = Collector::new(config)?;
    let report = collector.run_pass().await;

    println!(
        "\nPass complete: {} headlines fetched, {} posted, {} skipped, {} failed.",
        report.fetched, report.posted, report.skipped, report.failed
    );
    if report.sources_failed > 0 {
        println!("{} sources could not be fetched.", report.sources_failed);
    }

    Ok(())
}
