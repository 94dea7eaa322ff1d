//! CLI subcommands — create, delete, list, verify, completions.

use crate::core::error::TenantError;
use crate::core::layout::Layout;
use crate::core::prompt::{AssumeYes, Confirm, LineConfirm};
use crate::core::store::TenantStore;
use crate::core::tiers::TierTable;
use crate::core::types::{DeleteOutcome, ManifestPlan, PlanAction, TierName};
use clap::{CommandFactory, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tenantctl",
    version,
    about = "Multi-tenant provisioning tool — render tenant manifests for GitOps"
)]
pub struct Cli {
    /// Directory containing the gitops/ tree
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create new tenant
    Create {
        /// Tenant name
        #[arg(long)]
        name: String,

        /// Resource tier
        #[arg(long, value_enum, default_value_t = TierName::Standard)]
        tier: TierName,

        /// Show which files would change without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete tenant
    Delete {
        /// Tenant name
        #[arg(long)]
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List all tenants
    List {
        /// Print tenants as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect manifests edited or removed outside this tool
    Verify {
        /// Only check this tenant
        #[arg(long)]
        name: Option<String>,

        /// Exit non-zero on any drift (for CI/cron)
        #[arg(long)]
        tripwire: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Log filter for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr tracing subscriber.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print top-level help (no subcommand given).
pub fn print_help() -> Result<(), String> {
    Cli::command()
        .print_help()
        .map_err(|e| format!("cannot print help: {}", e))?;
    println!();
    Ok(())
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands, layout: &Layout) -> Result<(), String> {
    let tiers = TierTable::builtin();
    let store = TenantStore::new(layout.clone(), &tiers);
    match cmd {
        Commands::Create {
            name,
            tier,
            dry_run: false,
        } => cmd_create(&store, &name, tier),
        Commands::Create {
            name,
            tier,
            dry_run: true,
        } => cmd_plan(&store, &name, tier, &mut std::io::stdout()),
        Commands::Delete { name, yes: true } => cmd_delete(&store, &name, &mut AssumeYes),
        Commands::Delete { name, yes: false } => {
            cmd_delete(&store, &name, &mut LineConfirm::stdio())
        }
        Commands::List { json } => cmd_list(&store, json, &mut std::io::stdout()),
        Commands::Verify { name, tripwire } => cmd_verify(&store, name.as_deref(), tripwire),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "tenantctl",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn cmd_create(store: &TenantStore<'_>, name: &str, tier: TierName) -> Result<(), String> {
    let layout = store.layout();
    println!("🚀 Provisioning tenant: {} (tier: {})", name, tier);

    let report = store.create(name, tier).map_err(|e| e.to_string())?;
    let profile = &report.profile;

    println!(
        "  ✅ Created Kubernetes manifests in {}/",
        layout.tenant_dir(name).display()
    );
    println!(
        "  ✅ Created ArgoCD application: {}",
        layout.application_path(name).display()
    );

    println!();
    println!("📝 Tenant Created Successfully!");
    println!("   Name: {}", name);
    println!("   Tier: {}", profile.name);
    println!("   Replicas: {}", profile.replicas);
    println!(
        "   Resources: {} RAM, {} CPU",
        profile.memory_limit, profile.cpu_limit
    );
    println!();
    println!("🔄 Next steps:");
    println!("   1. Review files: ls -la {}/", layout.tenant_dir(name).display());
    println!("   2. Commit: git add gitops/");
    println!("   3. Push: git push");
    println!("   4. ArgoCD will auto-deploy!");
    Ok(())
}

fn cmd_plan(
    store: &TenantStore<'_>,
    name: &str,
    tier: TierName,
    out: &mut impl Write,
) -> Result<(), String> {
    let plan = store.plan_create(name, tier).map_err(|e| e.to_string())?;
    print_plan(&plan, out).map_err(|e| format!("cannot write plan: {}", e))
}

/// Display a plan, one line per file with its action.
fn print_plan(plan: &ManifestPlan, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "Planning: tenant {} (tier: {}, {} files)",
        plan.tenant,
        plan.tier,
        plan.writes.len()
    )?;
    writeln!(out)?;
    for write in &plan.writes {
        let symbol = match write.action {
            PlanAction::Create => "+",
            PlanAction::Update => "~",
            PlanAction::NoOp => " ",
        };
        writeln!(
            out,
            "  {} {:<6} {} ({})",
            symbol,
            write.action,
            write.path.display(),
            write.kind
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Plan: {} to add, {} to change, {} unchanged.",
        plan.to_create, plan.to_update, plan.unchanged
    )
}

fn cmd_delete(
    store: &TenantStore<'_>,
    name: &str,
    confirm: &mut dyn Confirm,
) -> Result<(), String> {
    println!("🗑️  Deleting tenant: {}", name);

    match store.delete(name, confirm) {
        Err(TenantError::NotFound(_)) => {
            println!("  ❌ Tenant '{}' not found", name);
            Ok(())
        }
        Err(e) => Err(e.to_string()),
        Ok(DeleteOutcome::Cancelled) => {
            println!("  ❌ Cancelled");
            Ok(())
        }
        Ok(DeleteOutcome::Deleted {
            removed_dir,
            removed_application,
        }) => {
            if removed_dir {
                println!("  ✅ Deleted tenant directory");
            }
            if removed_application {
                println!("  ✅ Deleted ArgoCD application");
            }
            println!();
            println!("📝 Next steps:");
            println!("   1. Commit: git add -A");
            println!("   2. Commit: git commit -m 'Remove tenant {}'", name);
            println!("   3. Push: git push");
            Ok(())
        }
    }
}

fn cmd_list(store: &TenantStore<'_>, json: bool, out: &mut impl Write) -> Result<(), String> {
    let tenants = store.list().map_err(|e| e.to_string())?;
    let write_err = |e: std::io::Error| format!("cannot write listing: {}", e);

    if json {
        let text = serde_json::to_string_pretty(&tenants)
            .map_err(|e| format!("JSON serialize error: {}", e))?;
        writeln!(out, "{}", text).map_err(write_err)?;
        return Ok(());
    }

    writeln!(out, "📋 Provisioned Tenants:").map_err(write_err)?;
    writeln!(out).map_err(write_err)?;
    if !store.layout().tenants_dir().exists() {
        writeln!(out, "  No tenants found").map_err(write_err)?;
        return Ok(());
    }
    for tenant in &tenants {
        writeln!(out, "  • {}", tenant.name).map_err(write_err)?;
        writeln!(out, "    Tier: {}", tenant.tier).map_err(write_err)?;
    }
    Ok(())
}

fn cmd_verify(
    store: &TenantStore<'_>,
    name: Option<&str>,
    tripwire_mode: bool,
) -> Result<(), String> {
    let findings = store.verify(name).map_err(|e| e.to_string())?;

    if findings.is_empty() {
        println!("No drift detected.");
        return Ok(());
    }

    for f in &findings {
        println!("  DRIFTED: {} {} ({})", f.tenant, f.kind, f.detail);
        println!("    Expected: {}", f.expected_hash);
        println!("    Actual:   {}", f.actual_hash);
    }
    println!();
    println!("Drift detected: {} file(s)", findings.len());
    if tripwire_mode {
        return Err(format!("{} drift finding(s)", findings.len()));
    }
    Ok(())
}
