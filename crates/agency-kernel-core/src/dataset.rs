//! The built-in demo records shown by every screen.

use serde::Serialize;

use crate::record::{
    CampaignLiteral, CampaignRecord, CampaignStatus, CampaignType, ClientLiteral, ClientRecord,
    ClientStatus, ReportLiteral, ReportRecord, ReportStatus, ReportType,
};
use crate::store::RecordStore;
use crate::summary::DashboardOverview;
use crate::KernelError;

const CLIENTS: [ClientLiteral<'static>; 4] = [
    ClientLiteral {
        id: "1",
        name: "John Smith",
        company: "TechCorp Inc.",
        email: "john@techcorp.com",
        phone: "+1 (555) 123-4567",
        status: ClientStatus::Active,
        project_count: 3,
        revenue: "$15,000",
    },
    ClientLiteral {
        id: "2",
        name: "Sarah Johnson",
        company: "StartupXYZ",
        email: "sarah@startupxyz.com",
        phone: "+1 (555) 987-6543",
        status: ClientStatus::Active,
        project_count: 2,
        revenue: "$8,500",
    },
    ClientLiteral {
        id: "3",
        name: "Mike Davis",
        company: "Local Business Co.",
        email: "mike@localbiz.com",
        phone: "+1 (555) 456-7890",
        status: ClientStatus::Pending,
        project_count: 1,
        revenue: "$3,200",
    },
    ClientLiteral {
        id: "4",
        name: "Emily Chen",
        company: "E-commerce Plus",
        email: "emily@ecomplus.com",
        phone: "+1 (555) 321-0987",
        status: ClientStatus::Active,
        project_count: 4,
        revenue: "$22,000",
    },
];

const CAMPAIGNS: [CampaignLiteral<'static>; 4] = [
    CampaignLiteral {
        id: "1",
        name: "Holiday Social Media Boost",
        client: "TechCorp Inc.",
        campaign_type: CampaignType::Social,
        status: CampaignStatus::Active,
        budget: "$5,000",
        spent: "$3,200",
        impressions: "125K",
        clicks: "2.4K",
        start_date: "2024-12-01",
        end_date: "2024-12-31",
    },
    CampaignLiteral {
        id: "2",
        name: "Email Newsletter Campaign",
        client: "StartupXYZ",
        campaign_type: CampaignType::Email,
        status: CampaignStatus::Active,
        budget: "$2,000",
        spent: "$1,800",
        impressions: "45K",
        clicks: "1.2K",
        start_date: "2024-11-15",
        end_date: "2024-12-15",
    },
    CampaignLiteral {
        id: "3",
        name: "Google Ads - Local Services",
        client: "Local Business Co.",
        campaign_type: CampaignType::Ppc,
        status: CampaignStatus::Paused,
        budget: "$3,500",
        spent: "$2,100",
        impressions: "89K",
        clicks: "3.1K",
        start_date: "2024-11-01",
        end_date: "2024-12-01",
    },
    CampaignLiteral {
        id: "4",
        name: "SEO Content Strategy",
        client: "E-commerce Plus",
        campaign_type: CampaignType::Seo,
        status: CampaignStatus::Active,
        budget: "$4,000",
        spent: "$2,800",
        impressions: "200K",
        clicks: "5.2K",
        start_date: "2024-10-01",
        end_date: "2024-01-01",
    },
];

const REPORTS: [ReportLiteral<'static>; 5] = [
    ReportLiteral {
        id: "1",
        title: "December Monthly Report",
        report_type: ReportType::Monthly,
        date: "2024-12-01",
        status: ReportStatus::Ready,
        size: "2.4 MB",
    },
    ReportLiteral {
        id: "2",
        title: "Holiday Campaign Analysis",
        report_type: ReportType::Campaign,
        date: "2024-12-15",
        status: ReportStatus::Ready,
        size: "1.8 MB",
    },
    ReportLiteral {
        id: "3",
        title: "TechCorp Client Report",
        report_type: ReportType::Client,
        date: "2024-12-10",
        status: ReportStatus::Ready,
        size: "3.2 MB",
    },
    ReportLiteral {
        id: "4",
        title: "Q4 Performance Summary",
        report_type: ReportType::Performance,
        date: "2024-12-20",
        status: ReportStatus::Generating,
        size: "Generating...",
    },
    ReportLiteral {
        id: "5",
        title: "January Monthly Report",
        report_type: ReportType::Monthly,
        date: "2025-01-01",
        status: ReportStatus::Scheduled,
        size: "Scheduled",
    },
];

/// A one-tap report template from the reports screen.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct QuickReport {
    pub title: &'static str,
    pub description: &'static str,
}

pub const QUICK_REPORTS: [QuickReport; 4] = [
    QuickReport {
        title: "Weekly Summary",
        description: "Quick overview of this week's performance",
    },
    QuickReport {
        title: "Client Performance",
        description: "Individual client performance metrics",
    },
    QuickReport {
        title: "Campaign ROI",
        description: "Return on investment for all campaigns",
    },
    QuickReport {
        title: "Traffic Analysis",
        description: "Website and social media traffic breakdown",
    },
];

/// One store per record kind.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub clients: RecordStore<ClientRecord>,
    pub campaigns: RecordStore<CampaignRecord>,
    pub reports: RecordStore<ReportRecord>,
}

impl Dataset {
    /// Parse the built-in demo literals.
    ///
    /// # Errors
    /// Returns the first literal conversion or store construction failure.
    pub fn demo() -> Result<Self, KernelError> {
        let clients =
            CLIENTS.into_iter().map(ClientRecord::try_from).collect::<Result<Vec<_>, _>>()?;
        let campaigns =
            CAMPAIGNS.into_iter().map(CampaignRecord::try_from).collect::<Result<Vec<_>, _>>()?;
        let reports = REPORTS.into_iter().map(ReportRecord::from).collect::<Vec<_>>();

        let dataset = Self {
            clients: RecordStore::new(clients)?,
            campaigns: RecordStore::new(campaigns)?,
            reports: RecordStore::new(reports)?,
        };
        tracing::debug!(
            clients = dataset.clients.len(),
            campaigns = dataset.campaigns.len(),
            reports = dataset.reports.len(),
            "demo dataset loaded"
        );
        Ok(dataset)
    }

    #[must_use]
    pub fn overview(&self) -> DashboardOverview {
        DashboardOverview::from_records(
            self.clients.as_slice(),
            self.campaigns.as_slice(),
            self.reports.as_slice(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkage::{check_consistency, ScheduleIssue};
    use crate::money::Currency;
    use crate::record::{RecordId, Searchable};

    fn demo() -> Dataset {
        Dataset::demo().unwrap_or_else(|err| panic!("demo dataset should load: {err}"))
    }

    #[test]
    fn campaign_tiles_match_demo_figures() {
        let summary = demo().campaigns.summarize();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.active, 3);
        assert_eq!(summary.paused, 1);
        assert_eq!(summary.total_budget, Currency(14_500));
        assert_eq!(summary.total_spent, Currency(9_900));
        assert_eq!(summary.total_spent_display, "$9.9K");
    }

    #[test]
    fn client_summary_matches_demo_figures() {
        let summary = demo().clients.summarize();
        assert_eq!((summary.total, summary.active, summary.pending), (4, 3, 1));
        assert_eq!(summary.total_revenue, Currency(48_700));
        assert_eq!(summary.total_projects, 10);
    }

    fn hits<'a, R: Searchable>(store: &'a RecordStore<R>, query: &str) -> Vec<&'a R> {
        store.search(query).unwrap_or_else(|err| panic!("search should succeed: {err}"))
    }

    #[test]
    fn search_boxes_filter_demo_records() {
        let dataset = demo();
        let clients = hits(&dataset.clients, "tech");
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, RecordId::from("1"));

        let campaigns = hits(&dataset.campaigns, "STARTUP");
        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].name, "Email Newsletter Campaign");

        assert_eq!(hits(&dataset.reports, "monthly report").len(), 2);
        assert!(hits(&dataset.reports, "quarterly").is_empty());
    }

    #[test]
    fn overview_counts_across_kinds() {
        let overview = demo().overview();
        assert_eq!(overview.active_clients, 3);
        assert_eq!(overview.running_campaigns, 3);
        assert_eq!(overview.ready_reports, 3);
        assert_eq!(overview.total_revenue, Currency(48_700));
        assert_eq!(overview.budget_utilization_display.as_deref(), Some("68.3%"));
    }

    #[test]
    fn demo_consistency_flags_only_seo_schedule() {
        let dataset = demo();
        let report = check_consistency(dataset.clients.as_slice(), dataset.campaigns.as_slice());
        assert!(report.unresolved_client_refs.is_empty());
        assert_eq!(report.schedule_issues.len(), 1);
        assert!(matches!(
            &report.schedule_issues[0],
            ScheduleIssue::EndsBeforeStart { campaign_id, .. } if campaign_id.as_str() == "4"
        ));
    }
}
