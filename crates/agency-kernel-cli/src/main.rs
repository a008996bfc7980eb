use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use agency_kernel_core::{
    campaigns_for_client, channel_shares, check_consistency, default_channels, period_metrics,
    top_performers, CampaignDraft, CampaignType, ClientDraft, Dataset, Period, RecordStore,
    Searchable, Summarize, QUICK_REPORTS,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;

mod settings;

use settings::Settings;

const CLI_CONTRACT_VERSION: &str = "cli.v1";
const LOG_ENV: &str = "AGENCY_LOG";

#[derive(Debug, Parser)]
#[command(name = "agency")]
#[command(about = "Agency dashboard lists and metrics")]
struct Cli {
    /// YAML settings file; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Clients {
        #[command(subcommand)]
        command: ListCommand,
    },
    Campaigns {
        #[command(subcommand)]
        command: ListCommand,
    },
    Reports {
        #[command(subcommand)]
        command: ListCommand,
    },
    Analytics(AnalyticsArgs),
    Overview,
    Check,
    Draft {
        #[command(subcommand)]
        command: DraftCommand,
    },
    Settings,
}

#[derive(Debug, Subcommand)]
enum ListCommand {
    List(ListArgs),
    Summary,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(long, default_value = "")]
    query: String,
}

#[derive(Debug, Args)]
struct AnalyticsArgs {
    #[arg(long, value_enum)]
    period: Option<PeriodArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PeriodArg {
    Week,
    Month,
    Quarter,
}

impl From<PeriodArg> for Period {
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::Week => Self::Week,
            PeriodArg::Month => Self::Month,
            PeriodArg::Quarter => Self::Quarter,
        }
    }
}

#[derive(Debug, Subcommand)]
enum DraftCommand {
    Client(ClientDraftArgs),
    Campaign(CampaignDraftArgs),
}

#[derive(Debug, Args)]
struct ClientDraftArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    website: String,
    #[arg(long, default_value = "")]
    notes: String,
}

#[derive(Debug, Args)]
struct CampaignDraftArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    client: String,
    #[arg(long = "type", value_enum, default_value_t = CampaignTypeArg::Social)]
    campaign_type: CampaignTypeArg,
    #[arg(long)]
    budget: Option<String>,
    #[arg(long, default_value = "")]
    start_date: String,
    #[arg(long, default_value = "")]
    end_date: String,
    #[arg(long, default_value = "")]
    description: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CampaignTypeArg {
    Social,
    Email,
    Ppc,
    Seo,
}

impl From<CampaignTypeArg> for CampaignType {
    fn from(value: CampaignTypeArg) -> Self {
        match value {
            CampaignTypeArg::Social => Self::Social,
            CampaignTypeArg::Email => Self::Email,
            CampaignTypeArg::Ppc => Self::Ppc,
            CampaignTypeArg::Seo => Self::Seo,
        }
    }
}

/// Copy shown when a list screen has no rows.
#[derive(Debug, Serialize)]
struct EmptyState {
    title: String,
    hint: &'static str,
}

fn with_contract_version(value: Value) -> Value {
    match value {
        Value::Object(mut object) => {
            object.insert(
                "contract_version".to_string(),
                Value::String(CLI_CONTRACT_VERSION.to_string()),
            );
            Value::Object(object)
        }
        other => serde_json::json!({
            "contract_version": CLI_CONTRACT_VERSION,
            "payload": other
        }),
    }
}

fn emit_json(value: Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&with_contract_version(value))?);
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
    init_tracing();
    let Cli { config, command } = Cli::parse();
    let settings = Settings::load(config.as_deref())?;

    match command {
        Command::Clients { command } => {
            let dataset = load_dataset()?;
            run_list(command, &dataset.clients, "clients", "Add your first client to get started")
        }
        Command::Campaigns { command } => {
            let dataset = load_dataset()?;
            run_list(
                command,
                &dataset.campaigns,
                "campaigns",
                "Create your first campaign to get started",
            )
        }
        Command::Reports { command } => run_reports(command, &load_dataset()?),
        Command::Analytics(args) => {
            run_analytics(args.period.map_or(settings.default_period, Period::from))
        }
        Command::Overview => emit_json(
            serde_json::to_value(load_dataset()?.overview())
                .context("failed to serialize overview")?,
        ),
        Command::Check => run_check(&load_dataset()?),
        Command::Draft { command } => run_draft(command),
        Command::Settings => run_settings(config.as_deref(), &settings),
    }
}

fn load_dataset() -> Result<Dataset> {
    Dataset::demo().context("failed to load demo dataset")
}

fn empty_state(kind: &str, query: &str, create_hint: &'static str) -> EmptyState {
    EmptyState {
        title: format!("No {kind} found"),
        hint: if query.is_empty() { create_hint } else { "Try adjusting your search" },
    }
}

fn run_list<R>(
    command: ListCommand,
    store: &RecordStore<R>,
    kind: &str,
    create_hint: &'static str,
) -> Result<()>
where
    R: Searchable + Summarize + Serialize,
    R::Summary: Serialize,
{
    match command {
        ListCommand::List(args) => {
            let records = store
                .search(&args.query)
                .with_context(|| format!("failed to search {kind}"))?;
            tracing::debug!(kind, query = %args.query, hits = records.len(), "list filtered");
            let empty = records.is_empty().then(|| empty_state(kind, &args.query, create_hint));
            emit_json(serde_json::json!({
                "kind": kind,
                "query": args.query,
                "total": store.len(),
                "records": records,
                "empty_state": empty,
            }))
        }
        ListCommand::Summary => emit_json(serde_json::json!({
            "kind": kind,
            "summary": serde_json::to_value(store.summarize())
                .with_context(|| format!("failed to serialize {kind} summary"))?,
        })),
    }
}

fn run_reports(command: ListCommand, dataset: &Dataset) -> Result<()> {
    match command {
        ListCommand::Summary => emit_json(serde_json::json!({
            "kind": "reports",
            "summary": serde_json::to_value(dataset.reports.summarize())
                .context("failed to serialize reports summary")?,
            "quick_reports": QUICK_REPORTS,
        })),
        list @ ListCommand::List(_) => run_list(
            list,
            &dataset.reports,
            "reports",
            "Generate your first report to get started",
        ),
    }
}

fn run_analytics(period: Period) -> Result<()> {
    emit_json(serde_json::json!({
        "period": period,
        "period_label": period.label(),
        "metrics": period_metrics(period),
        "channels": channel_shares(&default_channels()),
        "top_performers": top_performers(),
    }))
}

fn run_check(dataset: &Dataset) -> Result<()> {
    let report = check_consistency(dataset.clients.as_slice(), dataset.campaigns.as_slice());
    let campaigns_by_client = dataset
        .clients
        .iter()
        .map(|client| {
            let ids = campaigns_for_client(client, dataset.campaigns.as_slice())
                .into_iter()
                .map(|campaign| campaign.id.clone())
                .collect::<Vec<_>>();
            (client.id.to_string(), ids)
        })
        .collect::<BTreeMap<_, _>>();
    if !report.is_clean() {
        tracing::warn!(
            unresolved = report.unresolved_client_refs.len(),
            schedule = report.schedule_issues.len(),
            "dataset has consistency findings"
        );
    }

    emit_json(serde_json::json!({
        "clean": report.is_clean(),
        "unresolved_client_refs": report.unresolved_client_refs,
        "schedule_issues": report.schedule_issues,
        "campaigns_by_client": campaigns_by_client,
    }))
}

fn run_draft(command: DraftCommand) -> Result<()> {
    let (kind, draft) = match command {
        DraftCommand::Client(args) => {
            let draft = ClientDraft {
                name: args.name,
                company: args.company,
                email: args.email,
                phone: args.phone,
                website: args.website,
                notes: args.notes,
            };
            let value = serde_json::to_value(&draft).context("failed to serialize draft")?;
            draft.save().context("client draft rejected")?;
            ("client", value)
        }
        DraftCommand::Campaign(args) => {
            let draft = CampaignDraft {
                name: args.name,
                client: args.client,
                campaign_type: args.campaign_type.into(),
                budget: args.budget,
                start_date: args.start_date,
                end_date: args.end_date,
                description: args.description,
            };
            let value = serde_json::to_value(&draft).context("failed to serialize draft")?;
            draft.save().context("campaign draft rejected")?;
            ("campaign", value)
        }
    };

    emit_json(serde_json::json!({
        "kind": kind,
        "draft": draft,
        "saved": false,
    }))
}

fn run_settings(config: Option<&Path>, settings: &Settings) -> Result<()> {
    let source =
        config.map_or_else(|| "defaults".to_string(), |path| path.display().to_string());
    emit_json(serde_json::json!({
        "source": source,
        "settings": settings,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_version_is_added_to_objects_and_wraps_scalars() {
        let object = with_contract_version(serde_json::json!({ "kind": "clients" }));
        assert_eq!(object["contract_version"], CLI_CONTRACT_VERSION);
        assert_eq!(object["kind"], "clients");

        let wrapped = with_contract_version(serde_json::json!([1, 2]));
        assert_eq!(wrapped["payload"], serde_json::json!([1, 2]));
    }

    #[test]
    fn empty_state_hint_depends_on_query() {
        let searched =
            empty_state("campaigns", "zzz", "Create your first campaign to get started");
        assert_eq!(searched.title, "No campaigns found");
        assert_eq!(searched.hint, "Try adjusting your search");

        let blank = empty_state("campaigns", "", "Create your first campaign to get started");
        assert_eq!(blank.hint, "Create your first campaign to get started");
    }

    #[test]
    fn cli_parses_global_config_after_subcommand() {
        let args = ["agency", "analytics", "--period", "week", "--config", "x.yaml"];
        let cli = Cli::try_parse_from(args)
            .unwrap_or_else(|err| panic!("arguments should parse: {err}"));
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
        assert!(matches!(
            cli.command,
            Command::Analytics(AnalyticsArgs { period: Some(PeriodArg::Week) })
        ));
    }
}
