use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use tata_playlist_core::config::Config;
use tata_playlist_core::output::{Generator, OutputKind, WrittenFile};
use tata_playlist_core::{Catalogue, Result};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

const RULE_WIDTH: usize = 60;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let console = Console { quiet: cli.quiet };

    let result = match cli.command {
        None | Some(Commands::Generate) => {
            handle_generate(&config_path, cli.output_dir.as_deref(), &console)
        }
        Some(Commands::Check) => handle_check(),
        Some(Commands::Config { action }) => handle_config(action, &config_path),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(
            match verbose {
                true => LevelFilter::DEBUG,
                _ => LevelFilter::WARN,
            }
            .into(),
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "tata-playlist", &mut io::stdout());
}

/// Progress output on stdout, silenced by --quiet
struct Console {
    quiet: bool,
}

impl Console {
    fn line(&self, text: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", text.as_ref());
        }
    }

    fn blank(&self) {
        self.line("");
    }

    fn rule(&self) {
        self.line("=".repeat(RULE_WIDTH));
    }

    fn heading(&self, title: &str) {
        self.rule();
        self.line(title.cyan().bold().to_string());
        self.rule();
    }

    fn saved(&self, file: &WrittenFile, output_dir: &Path) {
        self.line(format!(
            "{} {}",
            "✓ Saved:".green(),
            display_path(&file.path, output_dir)
        ));
    }
}

/// File name alone when writing into the current directory
fn display_path(path: &Path, output_dir: &Path) -> String {
    match (output_dir == Path::new("."), path.file_name()) {
        (true, Some(name)) => name.to_string_lossy().into_owned(),
        _ => path.display().to_string(),
    }
}

fn handle_generate(config_path: &Path, output_dir: Option<&Path>, console: &Console) -> Result<()> {
    let config = Config::load(config_path)?;
    let output_dir: PathBuf = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output.dir.clone());

    let catalogue = Catalogue::builtin();
    let generator = Generator::new(&catalogue, config.settings(), &output_dir);
    generator.check();

    console.heading("Tata Sky/Play IPTV Playlist Generator");
    console.blank();

    for kind in OutputKind::ALL {
        console.line(format!("Generating {}...", kind.stage()));
        let written = generator.write(kind)?;
        console.saved(&written, generator.output_dir());
        console.blank();
    }

    console.heading("Generation Complete!");
    console.line(format!("Total Channels: {}", catalogue.len()));
    console.line(format!("HD Channels: {}", catalogue.hd_count()));
    console.line(format!("SD Channels: {}", catalogue.sd_count()));
    console.line(format!("Categories: {}", catalogue.category_count()));
    console.blank();

    console.line("Generated files:");
    for kind in OutputKind::ALL {
        console.line(format!("  - {} ({})", kind.file_name(), kind.description()));
    }
    console.blank();

    console.line(format!(
        "{} This is a template playlist. You need to add actual stream URLs",
        "Note:".yellow()
    ));
    console.line("      for each channel. See README.md for more information.");
    console.rule();

    Ok(())
}

fn handle_check() -> Result<()> {
    let catalogue = Catalogue::builtin();
    let warnings = catalogue.lint();

    if warnings.is_empty() {
        println!(
            "{} {} channels, no issues found",
            "OK:".green(),
            catalogue.len()
        );
        return Ok(());
    }

    println!();
    for warning in &warnings {
        println!("{} {}", "[WARN]".yellow().bold(), warning);
    }
    println!();
    println!(
        "{} warning(s) across {} channels. Entries are still emitted as-is.",
        warnings.len(),
        catalogue.len()
    );

    Ok(())
}

fn handle_config(action: ConfigAction, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(config_path)?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load(config_path)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(config_path)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
