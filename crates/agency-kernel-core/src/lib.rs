//! Entity list aggregation kernel for the agency dashboard.
//!
//! Records are immutable values held in a [`RecordStore`]. Screens call the filter
//! engine ([`filter`]) with the live search text and the aggregator ([`Summarize`]) for
//! their metric tiles. Both are pure and recompute on every call.

pub mod analytics;
pub mod dataset;
pub mod drafts;
pub mod filter;
pub mod linkage;
pub mod money;
pub mod record;
pub mod store;
pub mod summary;

pub use analytics::{
    channel_shares, default_channels, period_metrics, top_performers, ChannelRevenue,
    ChannelShare, Period, PeriodMetrics, TopPerformer,
};
pub use dataset::{Dataset, QuickReport, QUICK_REPORTS};
pub use drafts::{CampaignDraft, ClientDraft};
pub use filter::{filter, matches, TextField};
pub use linkage::{
    campaigns_for_client, check_consistency, unresolved_campaigns, ConsistencyReport,
    ScheduleIssue, UnresolvedReference,
};
pub use money::{
    format_percent, format_thousands, share_of_count, share_of_total, Currency, Magnitude,
};
pub use record::{
    CampaignLiteral, CampaignRecord, CampaignStatus, CampaignType, ClientLiteral, ClientRecord,
    ClientStatus, Record, RecordId, ReportLiteral, ReportRecord, ReportSize, ReportStatus,
    ReportType, Searchable,
};
pub use store::RecordStore;
pub use summary::{
    count_by, sum_currency, sum_magnitude, CampaignSummary, ClientSummary, DashboardOverview,
    ReportSummary, Summarize,
};

#[derive(Debug, Clone, thiserror::Error, Eq, PartialEq)]
pub enum KernelError {
    #[error("malformed currency in record {record_id} field `{field}`: {value:?}")]
    MalformedCurrency { record_id: String, field: &'static str, value: String },
    #[error("malformed magnitude in record {record_id} field `{field}`: {value:?}")]
    MalformedMagnitude { record_id: String, field: &'static str, value: String },
    #[error("filter requires at least one text field")]
    EmptyFieldList,
    #[error("duplicate record id: {0}")]
    DuplicateId(String),
    #[error("validation error: {0}")]
    Validation(String),
}
