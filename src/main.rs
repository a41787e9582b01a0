//! Terminal host for the portfolio showcase.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use portfolio_showcase::adapters::{StaticShowcaseSource, SupabaseShowcaseSource, TerminalSink};
use portfolio_showcase::application::{LoadShowcaseHandler, ShowcasePage, TypewriterWidget, WelcomeScreen};
use portfolio_showcase::config::AppConfig;
use portfolio_showcase::domain::foundation::DomainError;
use portfolio_showcase::domain::showcase::ShowcaseTab;
use portfolio_showcase::domain::typewriter::presets;
use portfolio_showcase::domain::welcome::SplashTimeline;
use portfolio_showcase::ports::ShowcaseSource;
use portfolio_showcase::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("portfolio-showcase: {}", e);
            return ExitCode::FAILURE;
        }
    };

    telemetry::init_tracing(&config.app);
    info!(environment = ?config.app.environment, "Starting portfolio showcase");

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code, error = %e, "Portfolio showcase failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), DomainError> {
    let welcome_sink = Arc::new(TerminalSink::stdout().with_prefix("  "));
    let splash = WelcomeScreen::new(SplashTimeline::default(), welcome_sink.clone())
        .show()
        .await?;
    finish_line(&welcome_sink);
    info!(icons = splash.icons_shown, "Welcome splash finished");

    let source = content_source(&config).await?;
    let handler = LoadShowcaseHandler::new(source, config.showcase.layout_rules());
    let page = handler.handle(config.showcase.viewport_width_px).await?;
    print_summary(&page);

    let hero_sink = Arc::new(TerminalSink::stdout().with_prefix("I'm a "));
    let hero = TypewriterWidget::mount(&presets::HERO, hero_sink.clone())?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }

    hero.unmount().await;
    finish_line(&hero_sink);
    info!("Portfolio showcase stopped");
    Ok(())
}

async fn content_source(config: &AppConfig) -> Result<Arc<dyn ShowcaseSource>, DomainError> {
    match &config.showcase.catalog_file {
        Some(path) => Ok(Arc::new(StaticShowcaseSource::from_yaml_file(path).await?)),
        None => Ok(Arc::new(SupabaseShowcaseSource::new(
            config.supabase.source_config(),
        )?)),
    }
}

fn print_summary(page: &ShowcasePage) {
    println!();
    for tab in ShowcaseTab::ALL {
        let marker = if page.current_tab() == tab { '*' } else { ' ' };
        let count = match tab {
            ShowcaseTab::Projects => page.projects().len(),
            ShowcaseTab::Certificates => page.certificates().len(),
            ShowcaseTab::TechStack => page.tech_stack().len(),
        };
        println!("{} {} ({})", marker, tab.label(), count);
    }
    println!();

    for project in page.projects().visible() {
        println!("  - {}", project.title);
    }
    if let Some(label) = page.projects().toggle_label() {
        println!("  [{}: {} more]", label, page.projects().hidden_count());
    }
    println!();
}

fn finish_line<W: std::io::Write + Send>(sink: &TerminalSink<W>) {
    if let Err(e) = sink.finish_line() {
        tracing::debug!(error = %e, "Failed to end terminal line");
    }
}
