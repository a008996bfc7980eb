use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::filter::TextField;
use crate::money::{Currency, Magnitude};
use crate::KernelError;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Anything a [`crate::RecordStore`] can hold.
pub trait Record {
    fn id(&self) -> &RecordId;
}

/// Record kinds with a screen search box.
pub trait Searchable: Record + Sized + 'static {
    /// Fields the search box matches against, in screen order.
    const SEARCH_FIELDS: &'static [TextField<Self>];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
}

impl ClientStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    #[default]
    Social,
    Email,
    Ppc,
    Seo,
}

impl CampaignType {
    pub const ALL: [Self; 4] = [Self::Social, Self::Email, Self::Ppc, Self::Seo];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Email => "email",
            Self::Ppc => "ppc",
            Self::Seo => "seo",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Social => "Social Media",
            Self::Email => "Email Marketing",
            Self::Ppc => "Pay-Per-Click",
            Self::Seo => "SEO",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "social" => Some(Self::Social),
            "email" => Some(Self::Email),
            "ppc" => Some(Self::Ppc),
            "seo" => Some(Self::Seo),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    Draft,
}

impl CampaignStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Draft => "draft",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
            Self::Draft => "Draft",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "completed" => Some(Self::Completed),
            "draft" => Some(Self::Draft),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Monthly,
    Campaign,
    Client,
    Performance,
}

impl ReportType {
    pub const ALL: [Self; 4] = [Self::Monthly, Self::Campaign, Self::Client, Self::Performance];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Campaign => "campaign",
            Self::Client => "client",
            Self::Performance => "performance",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Campaign => "Campaign",
            Self::Client => "Client",
            Self::Performance => "Performance",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "monthly" => Some(Self::Monthly),
            "campaign" => Some(Self::Campaign),
            "client" => Some(Self::Client),
            "performance" => Some(Self::Performance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ready,
    Generating,
    Scheduled,
}

impl ReportStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Generating => "generating",
            Self::Scheduled => "scheduled",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Generating => "Generating",
            Self::Scheduled => "Scheduled",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ready" => Some(Self::Ready),
            "generating" => Some(Self::Generating),
            "scheduled" => Some(Self::Scheduled),
            _ => None,
        }
    }

    /// Only ready reports can be opened, downloaded, or shared.
    #[must_use]
    pub fn is_openable(self) -> bool {
        self == Self::Ready
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ClientRecord {
    pub id: RecordId,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub status: ClientStatus,
    pub project_count: u32,
    pub revenue: Currency,
}

impl Record for ClientRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for ClientRecord {
    const SEARCH_FIELDS: &'static [TextField<Self>] = &[client_name, client_company];
}

fn client_name(client: &ClientRecord) -> &str {
    &client.name
}

fn client_company(client: &ClientRecord) -> &str {
    &client.company
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct CampaignRecord {
    pub id: RecordId,
    pub name: String,
    /// Client display name; not checked against any client store.
    pub client: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub status: CampaignStatus,
    pub budget: Currency,
    pub spent: Currency,
    pub impressions: Magnitude,
    pub clicks: Magnitude,
    pub start_date: String,
    pub end_date: String,
}

impl Record for CampaignRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for CampaignRecord {
    const SEARCH_FIELDS: &'static [TextField<Self>] = &[campaign_name, campaign_client];
}

fn campaign_name(campaign: &CampaignRecord) -> &str {
    &campaign.name
}

fn campaign_client(campaign: &CampaignRecord) -> &str {
    &campaign.client
}

/// Size column of a report row.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "label")]
pub enum ReportSize {
    Bytes(String),
    Pending(String),
}

impl ReportSize {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Bytes(label) | Self::Pending(label) => label,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ReportRecord {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub date: String,
    pub status: ReportStatus,
    pub size: ReportSize,
}

impl Record for ReportRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for ReportRecord {
    const SEARCH_FIELDS: &'static [TextField<Self>] = &[report_title];
}

fn report_title(report: &ReportRecord) -> &str {
    &report.title
}

/// Client row as written on the screen, with revenue still in display form.
#[derive(Debug, Clone, Copy)]
pub struct ClientLiteral<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub company: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub status: ClientStatus,
    pub project_count: u32,
    pub revenue: &'a str,
}

impl TryFrom<ClientLiteral<'_>> for ClientRecord {
    type Error = KernelError;

    fn try_from(literal: ClientLiteral<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::from(literal.id),
            name: literal.name.to_string(),
            company: literal.company.to_string(),
            email: literal.email.to_string(),
            phone: literal.phone.to_string(),
            status: literal.status,
            project_count: literal.project_count,
            revenue: currency_field(literal.id, "revenue", literal.revenue)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CampaignLiteral<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub client: &'a str,
    pub campaign_type: CampaignType,
    pub status: CampaignStatus,
    pub budget: &'a str,
    pub spent: &'a str,
    pub impressions: &'a str,
    pub clicks: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
}

impl TryFrom<CampaignLiteral<'_>> for CampaignRecord {
    type Error = KernelError;

    fn try_from(literal: CampaignLiteral<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::from(literal.id),
            name: literal.name.to_string(),
            client: literal.client.to_string(),
            campaign_type: literal.campaign_type,
            status: literal.status,
            budget: currency_field(literal.id, "budget", literal.budget)?,
            spent: currency_field(literal.id, "spent", literal.spent)?,
            impressions: magnitude_field(literal.id, "impressions", literal.impressions)?,
            clicks: magnitude_field(literal.id, "clicks", literal.clicks)?,
            start_date: literal.start_date.to_string(),
            end_date: literal.end_date.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReportLiteral<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub report_type: ReportType,
    pub date: &'a str,
    pub status: ReportStatus,
    pub size: &'a str,
}

impl From<ReportLiteral<'_>> for ReportRecord {
    fn from(literal: ReportLiteral<'_>) -> Self {
        // Unfinished reports carry status text in the size column instead of a size.
        let size = if literal.status.is_openable() {
            ReportSize::Bytes(literal.size.to_string())
        } else {
            ReportSize::Pending(literal.size.to_string())
        };
        Self {
            id: RecordId::from(literal.id),
            title: literal.title.to_string(),
            report_type: literal.report_type,
            date: literal.date.to_string(),
            status: literal.status,
            size,
        }
    }
}

fn currency_field(id: &str, field: &'static str, value: &str) -> Result<Currency, KernelError> {
    Currency::parse(value).ok_or_else(|| {
        tracing::warn!(record_id = id, field, value, "rejecting malformed currency literal");
        KernelError::MalformedCurrency {
            record_id: id.to_string(),
            field,
            value: value.to_string(),
        }
    })
}

fn magnitude_field(id: &str, field: &'static str, value: &str) -> Result<Magnitude, KernelError> {
    Magnitude::parse(value).ok_or_else(|| {
        tracing::warn!(record_id = id, field, value, "rejecting malformed magnitude literal");
        KernelError::MalformedMagnitude {
            record_id: id.to_string(),
            field,
            value: value.to_string(),
        }
    })
}
