//! Client/campaign association and data consistency checks.
//!
//! Campaigns reference their client by company display name. Mismatches are tolerated
//! by every screen and only surfaced here as findings.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use crate::record::{CampaignRecord, ClientRecord, RecordId};

#[must_use]
pub fn campaigns_for_client<'a>(
    client: &ClientRecord,
    campaigns: &'a [CampaignRecord],
) -> Vec<&'a CampaignRecord> {
    campaigns.iter().filter(|campaign| campaign.client == client.company).collect()
}

/// Campaigns whose client name matches no client's company.
#[must_use]
pub fn unresolved_campaigns<'a>(
    clients: &[ClientRecord],
    campaigns: &'a [CampaignRecord],
) -> Vec<&'a CampaignRecord> {
    campaigns
        .iter()
        .filter(|campaign| !clients.iter().any(|client| client.company == campaign.client))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct UnresolvedReference {
    pub campaign_id: RecordId,
    pub client: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScheduleIssue {
    InvalidDate { campaign_id: RecordId, field: String, value: String },
    EndsBeforeStart { campaign_id: RecordId, start_date: String, end_date: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct ConsistencyReport {
    pub unresolved_client_refs: Vec<UnresolvedReference>,
    pub schedule_issues: Vec<ScheduleIssue>,
}

impl ConsistencyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unresolved_client_refs.is_empty() && self.schedule_issues.is_empty()
    }
}

#[must_use]
pub fn check_consistency(
    clients: &[ClientRecord],
    campaigns: &[CampaignRecord],
) -> ConsistencyReport {
    let unresolved_client_refs = unresolved_campaigns(clients, campaigns)
        .into_iter()
        .map(|campaign| UnresolvedReference {
            campaign_id: campaign.id.clone(),
            client: campaign.client.clone(),
        })
        .collect();
    let schedule_issues = campaigns.iter().filter_map(schedule_issue).collect();

    let report = ConsistencyReport { unresolved_client_refs, schedule_issues };
    if !report.is_clean() {
        tracing::debug!(
            unresolved = report.unresolved_client_refs.len(),
            schedule = report.schedule_issues.len(),
            "consistency findings"
        );
    }
    report
}

fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).ok()
}

fn schedule_issue(campaign: &CampaignRecord) -> Option<ScheduleIssue> {
    let invalid = |field: &str, value: &str| ScheduleIssue::InvalidDate {
        campaign_id: campaign.id.clone(),
        field: field.to_string(),
        value: value.to_string(),
    };

    let Some(start) = parse_date(&campaign.start_date) else {
        return Some(invalid("start_date", &campaign.start_date));
    };
    let Some(end) = parse_date(&campaign.end_date) else {
        return Some(invalid("end_date", &campaign.end_date));
    };

    (end < start).then(|| ScheduleIssue::EndsBeforeStart {
        campaign_id: campaign.id.clone(),
        start_date: campaign.start_date.clone(),
        end_date: campaign.end_date.clone(),
    })
}
