use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use signup::prelude::*;
use signup::pricing::{addon_price_label, plan_price_label};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "signup", about = "Drive the subscription signup wizard from the terminal")]
struct Cli {
    /// Catalog YAML file. The builtin catalog is used when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replays a YAML or JSON list of wizard actions and prints the final state.
    Run {
        /// Script path, or `-` for stdin.
        #[arg(long)]
        script: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Lists plans and add-ons with their price labels.
    Catalog {
        #[arg(long)]
        yearly: bool,
    },
    /// Checks contact details against the first-step rules.
    Validate {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Run { script, format } => run_script(catalog, &script, format),
        Commands::Catalog { yearly } => {
            print_catalog(&catalog, BillingCadence::from_toggle(yearly));
            Ok(())
        }
        Commands::Validate { name, email, phone } => validate(&name, &email, &phone),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => signup::load_from_path(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn read_script(path: &Path) -> Result<Vec<WizardAction>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?
    };
    // YAML is a superset of JSON, so one parser covers both
    let actions = serde_yaml::from_str(&text).context("parsing wizard actions")?;
    Ok(actions)
}

fn run_script(catalog: Catalog, script: &Path, format: OutputFormat) -> Result<()> {
    let actions = read_script(script)?;
    tracing::info!("Replaying {} actions", actions.len());

    let mut wizard = SignupWizard::new(catalog)?;
    for action in actions {
        wizard.dispatch(action);
    }

    let mut index = 1;
    while let Some(transition) = wizard
        .update()
        .with_context(|| format!("action #{index} failed"))?
    {
        tracing::info!("#{index}: {:?}", transition);
        index += 1;
    }

    match format {
        OutputFormat::Json => {
            let snapshot = serde_json::json!({
                "state": wizard.state(),
                "view": render_view(&wizard),
            });
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        OutputFormat::Text => print_state(&wizard),
    }
    Ok(())
}

fn print_state(wizard: &SignupWizard) {
    let state = wizard.state();
    match state.current_step.number() {
        Some(n) => println!("Step {}/4: {}", n, state.current_step.title()),
        None => println!("{}", state.current_step.title()),
    }

    if let Some(user) = &state.user {
        println!("Customer: {} <{}> {}", user.name, user.email, user.phone);
    }
    for field in [ContactField::Name, ContactField::Email, ContactField::Phone] {
        if let Some(message) = state.field_errors.get(field) {
            println!("  ❌ {:?}: {}", field, message);
        }
    }

    let summary = match &state.summary {
        Some(summary) => summary.clone(),
        None => render_summary(state),
    };
    println!("\n{}", summary);

    if let Some(id) = state.confirmation_id {
        println!("\n✅ Confirmed, reference {}", id);
    }
}

fn print_catalog(catalog: &Catalog, cadence: BillingCadence) {
    println!("Plans ({}):", cadence.label());
    for plan in &catalog.plans {
        println!("  {:<24} {:<16} {:>8}", plan.id, plan.name, plan_price_label(plan, cadence));
    }
    println!("Add-ons ({}):", cadence.label());
    for addon in &catalog.addons {
        println!(
            "  {:<24} {:<24} {:>8}",
            addon.id,
            addon.name,
            addon_price_label(addon, cadence)
        );
    }
}

fn validate(name: &str, email: &str, phone: &str) -> Result<()> {
    let result = validate_contact_info(name, email, phone);
    if let Some(contact) = result.contact {
        println!("✅ {} <{}> {}", contact.name, contact.email, contact.phone);
        return Ok(());
    }

    for field in [ContactField::Name, ContactField::Email, ContactField::Phone] {
        if let Some(message) = result.errors.get(field) {
            println!("  ❌ {:?}: {}", field, message);
        }
    }
    bail!("contact details are invalid")
}
