use agency_kernel_core::{
    filter, CampaignRecord, CampaignStatus, CampaignType, Currency, Magnitude, RecordId,
    Searchable, Summarize,
};
use criterion::{criterion_group, criterion_main, Criterion};

const CLIENTS: [&str; 4] = ["TechCorp Inc.", "StartupXYZ", "Local Business Co.", "E-commerce Plus"];

fn mk_campaign(index: usize) -> CampaignRecord {
    let campaign_type = CampaignType::ALL[index % CampaignType::ALL.len()];
    let status = if index % 5 == 0 { CampaignStatus::Paused } else { CampaignStatus::Active };
    let step = i64::try_from(index % 50).unwrap_or_default();
    CampaignRecord {
        id: RecordId(index.to_string()),
        name: format!("{} push #{index}", campaign_type.label()),
        client: CLIENTS[index % CLIENTS.len()].to_string(),
        campaign_type,
        status,
        budget: Currency(5_000 + step * 100),
        spent: Currency(2_000 + step * 40),
        impressions: Magnitude(125_000),
        clicks: Magnitude(2_400),
        start_date: "2024-12-01".to_string(),
        end_date: "2024-12-31".to_string(),
    }
}

fn bench_filter(c: &mut Criterion) {
    let records = (0..1_000).map(mk_campaign).collect::<Vec<_>>();

    c.bench_function("filter_campaigns_1000_records", |b| {
        b.iter(|| {
            let kept = filter(&records, "techcorp", CampaignRecord::SEARCH_FIELDS);
            if let Err(err) = kept {
                panic!("filter benchmark failed: {err}");
            }
        });
    });
}

fn bench_summarize(c: &mut Criterion) {
    let records = (0..1_000).map(mk_campaign).collect::<Vec<_>>();

    c.bench_function("summarize_campaigns_1000_records", |b| {
        b.iter(|| CampaignRecord::summarize(&records));
    });
}

criterion_group!(kernel_benches, bench_filter, bench_summarize);
criterion_main!(kernel_benches);
