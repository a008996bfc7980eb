use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::{format_percent, share_of_count, share_of_total, Currency, Magnitude};
use crate::record::{
    CampaignRecord, CampaignStatus, CampaignType, ClientRecord, ClientStatus, ReportRecord,
    ReportStatus, ReportType,
};

/// Record kinds with a fixed-shape metric summary.
pub trait Summarize: Sized {
    type Summary;

    fn summarize(records: &[Self]) -> Self::Summary;
}

#[must_use]
pub fn count_by<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> usize {
    records.iter().filter(|record| predicate(*record)).count()
}

#[must_use]
pub fn sum_currency<R>(records: &[R], field: impl Fn(&R) -> Currency) -> Currency {
    records.iter().fold(Currency::ZERO, |total, record| total.saturating_add(field(record)))
}

#[must_use]
pub fn sum_magnitude<R>(records: &[R], field: impl Fn(&R) -> Magnitude) -> Magnitude {
    records.iter().fold(Magnitude::ZERO, |total, record| total.saturating_add(field(record)))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientSummary {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
    pub total_projects: u64,
    pub total_revenue: Currency,
}

impl Summarize for ClientRecord {
    type Summary = ClientSummary;

    fn summarize(records: &[Self]) -> ClientSummary {
        ClientSummary {
            total: records.len(),
            active: count_by(records, |c| c.status == ClientStatus::Active),
            pending: count_by(records, |c| c.status == ClientStatus::Pending),
            inactive: count_by(records, |c| c.status == ClientStatus::Inactive),
            total_projects: records.iter().map(|c| u64::from(c.project_count)).sum(),
            total_revenue: sum_currency(records, |c| c.revenue),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignSummary {
    pub total: usize,
    pub active: usize,
    pub paused: usize,
    pub completed: usize,
    pub draft: usize,
    pub by_type: BTreeMap<CampaignType, usize>,
    pub total_budget: Currency,
    pub total_spent: Currency,
    /// Spent in thousands for the metric tile, e.g. `$9.9K`.
    pub total_spent_display: String,
    /// Spent as a percentage of budget; `None` when the budget total is zero.
    pub budget_utilization: Option<f64>,
    pub budget_utilization_display: Option<String>,
    pub total_impressions: Magnitude,
    pub total_clicks: Magnitude,
    pub click_through_rate: Option<f64>,
    pub click_through_rate_display: Option<String>,
}

impl Summarize for CampaignRecord {
    type Summary = CampaignSummary;

    fn summarize(records: &[Self]) -> CampaignSummary {
        let by_type = CampaignType::ALL
            .into_iter()
            .map(|kind| (kind, count_by(records, |c| c.campaign_type == kind)))
            .collect();
        let total_budget = sum_currency(records, |c| c.budget);
        let total_spent = sum_currency(records, |c| c.spent);
        let total_impressions = sum_magnitude(records, |c| c.impressions);
        let total_clicks = sum_magnitude(records, |c| c.clicks);

        let budget_utilization = share_of_total(total_spent.dollars(), total_budget.dollars());
        let click_through_rate = share_of_count(total_clicks, total_impressions);

        CampaignSummary {
            total: records.len(),
            active: count_by(records, |c| c.status == CampaignStatus::Active),
            paused: count_by(records, |c| c.status == CampaignStatus::Paused),
            completed: count_by(records, |c| c.status == CampaignStatus::Completed),
            draft: count_by(records, |c| c.status == CampaignStatus::Draft),
            by_type,
            total_budget,
            total_spent,
            total_spent_display: total_spent.compact(),
            budget_utilization,
            budget_utilization_display: budget_utilization.map(|value| format_percent(value, 1)),
            total_impressions,
            total_clicks,
            click_through_rate,
            click_through_rate_display: click_through_rate.map(|value| format_percent(value, 2)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub ready: usize,
    pub generating: usize,
    pub scheduled: usize,
    pub by_type: BTreeMap<ReportType, usize>,
}

impl Summarize for ReportRecord {
    type Summary = ReportSummary;

    fn summarize(records: &[Self]) -> ReportSummary {
        ReportSummary {
            total: records.len(),
            ready: count_by(records, |r| r.status == ReportStatus::Ready),
            generating: count_by(records, |r| r.status == ReportStatus::Generating),
            scheduled: count_by(records, |r| r.status == ReportStatus::Scheduled),
            by_type: ReportType::ALL
                .into_iter()
                .map(|kind| (kind, count_by(records, |r| r.report_type == kind)))
                .collect(),
        }
    }
}

/// Home screen key metrics, derived from all three record kinds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardOverview {
    pub active_clients: usize,
    pub running_campaigns: usize,
    pub ready_reports: usize,
    pub total_revenue: Currency,
    pub total_spent_display: String,
    pub budget_utilization_display: Option<String>,
}

impl DashboardOverview {
    #[must_use]
    pub fn from_records(
        clients: &[ClientRecord],
        campaigns: &[CampaignRecord],
        reports: &[ReportRecord],
    ) -> Self {
        let client_summary = ClientRecord::summarize(clients);
        let campaign_summary = CampaignRecord::summarize(campaigns);
        Self {
            active_clients: client_summary.active,
            running_campaigns: campaign_summary.active,
            ready_reports: count_by(reports, |r| r.status == ReportStatus::Ready),
            total_revenue: client_summary.total_revenue,
            total_spent_display: campaign_summary.total_spent_display,
            budget_utilization_display: campaign_summary.budget_utilization_display,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::record::{RecordId, ReportSize};

    fn client(id: &str, status: ClientStatus, revenue: i64) -> ClientRecord {
        ClientRecord {
            id: RecordId::from(id),
            name: format!("Client {id}"),
            company: format!("Company {id}"),
            email: format!("client{id}@example.com"),
            phone: "+1 (555) 000-0000".to_string(),
            status,
            project_count: 2,
            revenue: Currency(revenue),
        }
    }

    fn campaign(id: &str, status: CampaignStatus, budget: i64, spent: i64) -> CampaignRecord {
        CampaignRecord {
            id: RecordId::from(id),
            name: format!("Campaign {id}"),
            client: "TechCorp Inc.".to_string(),
            campaign_type: CampaignType::Email,
            status,
            budget: Currency(budget),
            spent: Currency(spent),
            impressions: Magnitude(10_000),
            clicks: Magnitude(250),
            start_date: "2024-11-01".to_string(),
            end_date: "2024-11-30".to_string(),
        }
    }

    #[test]
    fn client_summary_counts_and_sums_revenue() {
        let clients = vec![
            client("1", ClientStatus::Active, 15_000),
            client("2", ClientStatus::Pending, 3_200),
            client("3", ClientStatus::Active, 8_500),
        ];
        let summary = ClientRecord::summarize(&clients);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.inactive, 0);
        assert_eq!(summary.total_revenue, Currency(26_700));
        assert_eq!(summary.total_projects, 6);
    }

    #[test]
    fn count_by_matches_active_records() {
        let clients = vec![
            client("1", ClientStatus::Active, 1),
            client("2", ClientStatus::Active, 1),
            client("3", ClientStatus::Inactive, 1),
            client("4", ClientStatus::Active, 1),
        ];
        assert_eq!(count_by(&clients, |c| c.status == ClientStatus::Active), 3);
    }

    #[test]
    fn sum_currency_adds_whole_dollars() {
        let campaigns = vec![
            campaign("1", CampaignStatus::Active, 5_000, 0),
            campaign("2", CampaignStatus::Active, 3_200, 0),
        ];
        assert_eq!(sum_currency(&campaigns, |c| c.budget), Currency(8_200));
    }

    #[test]
    fn campaign_summary_derives_ratios() {
        let campaigns = vec![
            campaign("1", CampaignStatus::Active, 5_000, 3_200),
            campaign("2", CampaignStatus::Paused, 3_500, 2_100),
        ];
        let summary = CampaignRecord::summarize(&campaigns);
        assert_eq!(summary.total_spent, Currency(5_300));
        assert_eq!(summary.total_spent_display, "$5.3K");
        assert_eq!(summary.budget_utilization_display.as_deref(), Some("62.4%"));
        assert_eq!(summary.click_through_rate_display.as_deref(), Some("2.50%"));
        assert_eq!(summary.by_type.get(&CampaignType::Email), Some(&2));
        assert_eq!(summary.by_type.get(&CampaignType::Seo), Some(&0));
    }

    #[test]
    fn click_through_rate_uses_full_count_range() {
        let mut big = campaign("1", CampaignStatus::Active, 100, 10);
        big.impressions = Magnitude(u64::MAX);
        big.clicks = Magnitude(u64::MAX / 4);
        let summary = CampaignRecord::summarize(&[big]);
        assert_eq!(summary.click_through_rate_display.as_deref(), Some("25.00%"));
    }

    #[test]
    fn empty_inputs_summarize_to_zero() {
        let clients = ClientRecord::summarize(&[]);
        assert_eq!(clients.total, 0);
        assert_eq!(clients.total_revenue, Currency::ZERO);

        let campaigns = CampaignRecord::summarize(&[]);
        assert_eq!(campaigns.total, 0);
        assert_eq!(campaigns.total_spent, Currency::ZERO);
        assert_eq!(campaigns.total_spent_display, "$0.0K");
        assert_eq!(campaigns.budget_utilization, None);
        assert_eq!(campaigns.click_through_rate, None);

        let reports = ReportRecord::summarize(&[]);
        assert_eq!(reports.total, 0);
        assert!(reports.by_type.values().all(|count| *count == 0));
    }

    #[test]
    fn report_summary_counts_status_and_type() {
        let report = |id: &str, report_type, status| ReportRecord {
            id: RecordId::from(id),
            title: format!("Report {id}"),
            report_type,
            date: "2024-12-01".to_string(),
            status,
            size: ReportSize::Bytes("1.0 MB".to_string()),
        };
        let reports = vec![
            report("1", ReportType::Monthly, ReportStatus::Ready),
            report("2", ReportType::Monthly, ReportStatus::Scheduled),
            report("3", ReportType::Client, ReportStatus::Generating),
        ];
        let summary = ReportRecord::summarize(&reports);
        assert_eq!((summary.ready, summary.generating, summary.scheduled), (1, 1, 1));
        assert_eq!(summary.by_type.get(&ReportType::Monthly), Some(&2));
        assert_eq!(summary.by_type.get(&ReportType::Performance), Some(&0));
    }

    #[test]
    fn summary_serializes_type_counts_by_name() {
        let summary = CampaignRecord::summarize(&[campaign("1", CampaignStatus::Draft, 100, 0)]);
        let value = serde_json::to_value(&summary)
            .unwrap_or_else(|err| panic!("summary should serialize: {err}"));
        assert_eq!(value["by_type"]["email"], 1);
        assert_eq!(value["total_budget"], "$100");
        assert_eq!(value["draft"], 1);
    }

    proptest! {
        #[test]
        fn property_client_total_and_revenue_match_inputs(
            revenues in prop::collection::vec(0_i64..1_000_000, 0..20)
        ) {
            let clients = revenues
                .iter()
                .enumerate()
                .map(|(index, revenue)| {
                    let status =
                        if index % 3 == 0 { ClientStatus::Pending } else { ClientStatus::Active };
                    client(&index.to_string(), status, *revenue)
                })
                .collect::<Vec<_>>();
            let summary = ClientRecord::summarize(&clients);
            prop_assert_eq!(summary.total, clients.len());
            prop_assert_eq!(summary.active + summary.pending + summary.inactive, summary.total);
            prop_assert_eq!(summary.total_revenue, Currency(revenues.iter().sum()));
        }
    }
}
