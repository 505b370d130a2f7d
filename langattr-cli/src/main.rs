use clap::{Parser, Subcommand};
use langattr::{DefaultLanguageSources, clean_lang_attr, detect_default_language, is_valid_lang};
use langattr_cli::{
    Settings, audit_files, expand_audit_inputs,
    validation::{ValidationContext, validate_context},
    view::{render_audit, render_languages, render_parts},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "langattr", author, version, about, long_about = None)]
struct Args {
    /// Language configuration file (toml, json, yaml or yml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize lang attribute values into canonical BCP-47 casing.
    Normalize {
        /// Raw lang attribute values
        #[arg(required = true, allow_hyphen_values = true)]
        tags: Vec<String>,
    },

    /// Check tags against the BCP-47 grammar (exit code 1 if any is invalid).
    Validate {
        /// Tags to validate
        #[arg(required = true, allow_hyphen_values = true)]
        tags: Vec<String>,
    },

    /// Show the language, script and region of a tag.
    Parts {
        /// Tag to decompose
        #[arg(allow_hyphen_values = true)]
        tag: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Infer the text direction (ltr, rtl or auto) of tags.
    Direction {
        /// Tags to inspect
        #[arg(required = true, allow_hyphen_values = true)]
        tags: Vec<String>,
    },

    /// Show the display label of tags.
    Name {
        /// Tags to look up
        #[arg(required = true, allow_hyphen_values = true)]
        tags: Vec<String>,
    },

    /// List known languages.
    Languages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect the default document language from candidate sources.
    Detect {
        /// lang attribute of the document root
        #[arg(long)]
        document: Option<String>,

        /// Editor default language (overrides the config file's default)
        #[arg(long)]
        setting: Option<String>,

        /// Browser or user agent languages, highest priority first
        #[arg(long)]
        browser: Vec<String>,

        /// Also consult LC_ALL, LC_MESSAGES and LANG
        #[arg(long)]
        env: bool,
    },

    /// Audit lang and dir attributes in HTML files, directories or globs.
    Audit {
        /// Input files, directories or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = match Settings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let code = run(args.commands, &settings);
    std::process::exit(code);
}

fn run(commands: Commands, settings: &Settings) -> i32 {
    match commands {
        Commands::Normalize { tags } => {
            for tag in tags {
                println!("{}", clean_lang_attr(Some(&tag)));
            }
            0
        }
        Commands::Validate { tags } => {
            let mut all_valid = true;
            for tag in &tags {
                let valid = is_valid_lang(Some(tag));
                all_valid &= valid;
                println!("{}: {}", tag, if valid { "valid" } else { "invalid" });
            }
            if all_valid { 0 } else { 1 }
        }
        Commands::Parts { tag, json } => {
            println!("{}", render_parts(&tag, json));
            0
        }
        Commands::Direction { tags } => {
            for tag in tags {
                println!("{}", settings.registry.text_direction(&tag));
            }
            0
        }
        Commands::Name { tags } => {
            for tag in tags {
                println!("{}", settings.registry.display_label(&tag));
            }
            0
        }
        Commands::Languages { json } => {
            println!("{}", render_languages(&settings.registry, json));
            0
        }
        Commands::Detect {
            document,
            setting,
            browser,
            env,
        } => {
            let mut sources = DefaultLanguageSources::new()
                .with_document(document)
                .with_configured(setting.or_else(|| settings.default_language.clone()));
            for lang in browser {
                sources = sources.with_user_agent(lang);
            }
            if env {
                sources = sources.with_environment();
            }
            println!("{}", detect_default_language(&sources));
            0
        }
        Commands::Audit { inputs, json } => {
            let paths = match expand_audit_inputs(&inputs) {
                Ok(paths) => paths,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 2;
                }
            };

            let context = paths.iter().fold(ValidationContext::new(), |ctx, path| {
                ctx.with_input_file(path.display().to_string())
            });
            if let Err(e) = validate_context(&context) {
                eprintln!("Error: {}", e);
                return 2;
            }

            let audits = audit_files(&paths, &settings.registry);
            println!("{}", render_audit(&audits, json));
            if audits.iter().all(|a| a.is_clean()) { 0 } else { 1 }
        }
    }
}
