//! Batch ranking of candidates against one job description

use crate::analyzer::{AnalysisResult, CandidateAnalyzer};
use crate::config::RankingConfig;
use log::warn;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_CONCURRENCY: usize = 4;

/// A candidate as supplied by storage: opaque id, email, and where the
/// resume lives. Same email means same candidate for deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: String,
    pub email: String,
    #[serde(rename = "resumeUrl")]
    pub resume_location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub candidate: CandidateRecord,
    pub analysis: AnalysisResult,
}

/// Batch result. `processed_count` of zero with a non-empty input signals
/// a systemic failure rather than "no good candidates".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingOutcome {
    pub processed_count: usize,
    pub skipped_count: usize,
    #[serde(rename = "rankedEntries")]
    pub entries: Vec<RankedEntry>,
}

/// Runs the analyzer over a candidate collection on a bounded set of
/// workers. Per-candidate analyses are mutually independent; the analyzer
/// and its models are shared read-only.
pub struct Ranker<A: CandidateAnalyzer + 'static> {
    analyzer: Arc<A>,
    top_n: usize,
    concurrency: usize,
}

impl<A: CandidateAnalyzer + 'static> Ranker<A> {
    pub fn new(analyzer: Arc<A>) -> Self {
        Self {
            analyzer,
            top_n: DEFAULT_TOP_N,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn from_config(analyzer: Arc<A>, ranking: &RankingConfig) -> Self {
        Self::new(analyzer)
            .with_top_n(ranking.top_n)
            .with_concurrency(ranking.concurrency)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Analyze every candidate, skip the ones that fail, deduplicate by
    /// email keeping the best-scoring submission, and return the top-N by
    /// descending hybrid score. Ties keep first-seen input order.
    pub async fn rank(&self, jd_text: &str, candidates: Vec<CandidateRecord>) -> RankingOutcome {
        let total = candidates.len();
        let jd: Arc<str> = Arc::from(jd_text);
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut join_set = JoinSet::new();

        for (index, candidate) in candidates.into_iter().enumerate() {
            let analyzer = Arc::clone(&self.analyzer);
            let jd = Arc::clone(&jd);
            let semaphore = Arc::clone(&semaphore);
            join_set.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("ranking semaphore closed");
                let outcome = analyzer.analyze(&candidate.resume_location, &jd).await;
                (index, candidate, outcome)
            });
        }

        let mut scored: Vec<(usize, CandidateRecord, AnalysisResult)> = Vec::new();
        let mut skipped = 0usize;

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, candidate, Ok(analysis))) => {
                    scored.push((index, candidate, analysis));
                }
                Ok((_, candidate, Err(e))) => {
                    warn!("Skipping candidate {} ({}): {}", candidate.id, candidate.email, e);
                    skipped += 1;
                }
                Err(e) => {
                    warn!("Skipping candidate: analysis task failed: {}", e);
                    skipped += 1;
                }
            }
        }
        let processed = total - skipped;

        // Input order first, so dedup ties keep the first-seen entry.
        scored.sort_by_key(|(index, _, _)| *index);

        let mut best_by_email: HashMap<String, usize> = HashMap::new();
        let mut deduped: Vec<(usize, CandidateRecord, AnalysisResult)> = Vec::new();
        for entry in scored {
            match best_by_email.get(&entry.1.email) {
                Some(&slot) if deduped[slot].2.hybrid_score >= entry.2.hybrid_score => {}
                Some(&slot) => deduped[slot] = entry,
                None => {
                    best_by_email.insert(entry.1.email.clone(), deduped.len());
                    deduped.push(entry);
                }
            }
        }

        deduped.sort_by(|(ia, _, ra), (ib, _, rb)| {
            rb.hybrid_score
                .partial_cmp(&ra.hybrid_score)
                .unwrap_or(Ordering::Equal)
                .then(ia.cmp(ib))
        });
        deduped.truncate(self.top_n);

        RankingOutcome {
            processed_count: processed,
            skipped_count: skipped,
            entries: deduped
                .into_iter()
                .map(|(_, candidate, analysis)| RankedEntry { candidate, analysis })
                .collect(),
        }
    }
}
