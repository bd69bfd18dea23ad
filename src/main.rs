use clap::Parser;
use docvault_lib::bootstrap::{
    init_tracing_subscriber, load_or_default, wire_dependencies, AppRuntime,
};
use docvault_lib::cli::{self, Cli};
use dv_core::notice::NoticeTone;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let data_dir = match dv_infra::app_data_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    };

    if let Err(err) = init_tracing_subscriber(Some(&data_dir.join("logs"))) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let config = match load_or_default(&cli.config, data_dir.clone()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load config");
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    };

    let runtime = match wire_dependencies(&config, data_dir).await {
        Ok(wired) => AppRuntime::new(wired),
        Err(err) => {
            tracing::error!(error = %err, "Failed to wire dependencies");
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    };

    let result = cli::run(cli.command, &runtime).await;

    // The notice board is the user-facing outcome; errors already shown
    // there are not repeated.
    let notice = runtime.last_notice();
    if let Some(notice) = &notice {
        match notice.tone {
            NoticeTone::Affirmative => println!("{}", notice.message),
            NoticeTone::Negative => eprintln!("{}", notice.message),
        }
    }
    if let Err(err) = result {
        let already_shown = notice.is_some_and(|n| n.is_negative());
        if !already_shown {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(1);
    }
}
