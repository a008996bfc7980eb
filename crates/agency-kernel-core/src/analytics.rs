//! Analytics screen data.
//!
//! The per-period metric table is fixed presentation data and is returned as-is. Channel
//! shares are computed from channel revenue.

use serde::{Deserialize, Serialize};

use crate::money::{format_percent, share_of_total, Currency, Magnitude};

#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Week,
    #[default]
    Month,
    Quarter,
}

impl Period {
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Quarter];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::Quarter => "This Quarter",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "quarter" => Some(Self::Quarter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PeriodMetrics {
    pub period: Period,
    pub revenue: Currency,
    pub leads: u32,
    pub conversion_rate: &'static str,
    pub impressions: Magnitude,
    pub clicks: Magnitude,
    pub click_through_rate: &'static str,
    pub cost_per_click: &'static str,
    pub return_on_ad_spend: &'static str,
}

#[must_use]
pub fn period_metrics(period: Period) -> PeriodMetrics {
    match period {
        Period::Week => PeriodMetrics {
            period,
            revenue: Currency(12_500),
            leads: 45,
            conversion_rate: "8.2%",
            impressions: Magnitude(125_000),
            clicks: Magnitude(3_200),
            click_through_rate: "2.56%",
            cost_per_click: "$3.90",
            return_on_ad_spend: "4.2x",
        },
        Period::Month => PeriodMetrics {
            period,
            revenue: Currency(48_700),
            leads: 186,
            conversion_rate: "7.8%",
            impressions: Magnitude(520_000),
            clicks: Magnitude(12_800),
            click_through_rate: "2.46%",
            cost_per_click: "$3.80",
            return_on_ad_spend: "4.5x",
        },
        Period::Quarter => PeriodMetrics {
            period,
            revenue: Currency(142_300),
            leads: 542,
            conversion_rate: "8.1%",
            impressions: Magnitude(1_500_000),
            clicks: Magnitude(38_200),
            click_through_rate: "2.55%",
            cost_per_click: "$3.73",
            return_on_ad_spend: "4.7x",
        },
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelRevenue {
    pub channel: String,
    pub revenue: Currency,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelShare {
    pub channel: String,
    pub revenue: Currency,
    pub share: Option<f64>,
    pub share_display: Option<String>,
}

#[must_use]
pub fn default_channels() -> Vec<ChannelRevenue> {
    [
        ("Social Media", 18_500),
        ("Search Engine", 15_200),
        ("Email Marketing", 9_800),
        ("Direct Traffic", 5_200),
    ]
    .into_iter()
    .map(|(channel, revenue)| ChannelRevenue {
        channel: channel.to_string(),
        revenue: Currency(revenue),
    })
    .collect()
}

/// Each channel's percentage of the combined revenue, rounded to whole percent for
/// display. Rounded shares need not add up to 100.
#[must_use]
pub fn channel_shares(channels: &[ChannelRevenue]) -> Vec<ChannelShare> {
    let total = channels.iter().fold(Currency::ZERO, |sum, c| sum.saturating_add(c.revenue));
    channels
        .iter()
        .map(|channel| {
            let share = share_of_total(channel.revenue.dollars(), total.dollars());
            ChannelShare {
                channel: channel.channel.clone(),
                revenue: channel.revenue,
                share,
                share_display: share.map(|value| format_percent(value, 0)),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TopPerformer {
    pub campaign: &'static str,
    pub change_percent: i32,
    pub change_display: String,
}

/// Campaign performance changes, best first.
#[must_use]
pub fn top_performers() -> Vec<TopPerformer> {
    let mut performers = [
        ("Holiday Social Media Boost", 24),
        ("SEO Content Strategy", 18),
        ("Email Newsletter Campaign", 12),
        ("Google Ads - Local Services", -5),
    ]
    .into_iter()
    .map(|(campaign, change_percent)| TopPerformer {
        campaign,
        change_percent,
        change_display: format!("{change_percent:+}%"),
    })
    .collect::<Vec<_>>();
    performers.sort_by(|a, b| b.change_percent.cmp(&a.change_percent));
    performers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_shares_match_screen_percentages() {
        let shares = channel_shares(&default_channels());
        let displays = shares.iter().filter_map(|s| s.share_display.as_deref()).collect::<Vec<_>>();
        assert_eq!(displays, vec!["38%", "31%", "20%", "11%"]);
    }

    #[test]
    fn channel_revenue_total_matches_month_revenue() {
        let total = default_channels()
            .iter()
            .fold(Currency::ZERO, |sum, c| sum.saturating_add(c.revenue));
        assert_eq!(total, period_metrics(Period::Month).revenue);
    }

    #[test]
    fn zero_revenue_channels_have_no_share() {
        let shares = channel_shares(&[ChannelRevenue {
            channel: "Referral".to_string(),
            revenue: Currency::ZERO,
        }]);
        assert_eq!(shares[0].share, None);
        assert!(channel_shares(&[]).is_empty());
    }

    #[test]
    fn period_table_is_keyed_by_period() {
        for period in Period::ALL {
            assert_eq!(period_metrics(period).period, period);
            assert_eq!(Period::parse(period.as_str()), Some(period));
        }
        assert_eq!(Period::default(), Period::Month);
        assert_eq!(period_metrics(Period::Quarter).impressions.to_string(), "1.5M");
        assert_eq!(period_metrics(Period::Week).clicks.to_string(), "3.2K");
    }

    #[test]
    fn top_performers_are_sorted_with_signed_display() {
        let performers = top_performers();
        assert_eq!(performers[0].change_display, "+24%");
        assert_eq!(performers[3].change_display, "-5%");
        assert!(performers.windows(2).all(|pair| pair[0].change_percent >= pair[1].change_percent));
    }
}
