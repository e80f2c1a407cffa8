//! One-time population of the backing store from bundled JSON fixtures.
//!
//! Seeding runs as an explicit initialization phase before the listener
//! binds. Its outcome is returned to the caller and reported by /healthz
//! instead of being swallowed: a failed seed leaves the service running
//! with whatever data exists, which may be none.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, warn};

use crate::models::candidate::CandidateDoc;
use crate::models::job::JobDoc;

/// Bundled fixture contents, parsed but not yet normalized.
#[derive(Debug)]
pub struct FixtureSet {
    pub jobs: Vec<JobDoc>,
    pub candidates: Vec<CandidateDoc>,
}

/// Reads and parses both fixture files from `dir`.
pub fn load_fixtures(dir: &Path) -> Result<FixtureSet> {
    let jobs = read_fixture(&dir.join("jobs.json"))?;
    let candidates = read_fixture(&dir.join("candidates.json"))?;
    Ok(FixtureSet { jobs, candidates })
}

fn read_fixture<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading fixture {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing fixture {}", path.display()))
}

/// How a seeding pass ended. Serialized into the /healthz payload.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// Fixtures were inserted into an empty store.
    Seeded { jobs: i64, candidates: i64 },
    /// Both collections already held data; nothing was inserted.
    AlreadyPopulated { jobs: i64, candidates: i64 },
    /// The pass could not complete; the service keeps serving regardless.
    Failed { detail: String },
    /// A previous caller already ran the pass in this process.
    AlreadyRan,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    #[serde(flatten)]
    pub outcome: SeedOutcome,
    pub finished_at: DateTime<Utc>,
}

impl SeedReport {
    pub fn now(outcome: SeedOutcome) -> Self {
        Self {
            outcome,
            finished_at: Utc::now(),
        }
    }
}

/// One-shot seeding coordinator. The flag moves once and never back, so
/// the check-and-seed sequence executes at most once per process no matter
/// how many callers race it.
pub struct Seeder {
    started: AtomicBool,
}

impl Seeder {
    pub fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
        }
    }

    /// Populates empty collections from fixtures, at most once per process.
    /// Never fails the caller: errors are folded into the report so the
    /// service continues with whatever data exists.
    pub async fn ensure_seeded(&self, pool: &PgPool, fixtures_dir: &Path) -> SeedReport {
        if self
            .started
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return SeedReport::now(SeedOutcome::AlreadyRan);
        }

        let outcome = match seed_if_empty(pool, fixtures_dir).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Seeding failed: {e:#}");
                SeedOutcome::Failed {
                    detail: format!("{e:#}"),
                }
            }
        };
        SeedReport::now(outcome)
    }
}

impl Default for Seeder {
    fn default() -> Self {
        Self::new()
    }
}

async fn seed_if_empty(pool: &PgPool, fixtures_dir: &Path) -> Result<SeedOutcome> {
    let jobs_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(pool)
        .await?;
    let candidates_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(pool)
        .await?;

    if jobs_count > 0 && candidates_count > 0 {
        info!("Store already populated ({jobs_count} jobs, {candidates_count} candidates)");
        return Ok(SeedOutcome::AlreadyPopulated {
            jobs: jobs_count,
            candidates: candidates_count,
        });
    }

    let fixtures = load_fixtures(fixtures_dir)?;

    let mut tx = pool.begin().await?;
    let (jobs, candidates) = insert_fixtures(&mut tx, fixtures).await?;
    tx.commit().await?;

    info!("Database seeded ({jobs} jobs, {candidates} candidates)");
    Ok(SeedOutcome::Seeded { jobs, candidates })
}

/// Inserts both fixture collections. Conflicting ids are skipped rather
/// than duplicated, so even a cross-process double-run cannot duplicate
/// records.
async fn insert_fixtures(
    tx: &mut Transaction<'_, Postgres>,
    fixtures: FixtureSet,
) -> Result<(i64, i64)> {
    let mut jobs_inserted = 0i64;
    for job in &fixtures.jobs {
        let doc = serde_json::to_value(job)?;
        let result =
            sqlx::query("INSERT INTO jobs (id, doc) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
                .bind(&job.id)
                .bind(doc)
                .execute(&mut **tx)
                .await?;
        jobs_inserted += result.rows_affected() as i64;
    }

    let mut candidates_inserted = 0i64;
    for (ordinal, candidate) in fixtures.candidates.into_iter().enumerate() {
        let (applied, doc) = candidate.normalize();
        let result = sqlx::query(
            "INSERT INTO candidates (id, doc, applied_jobs) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(ordinal as i32)
        .bind(doc)
        .bind(&applied)
        .execute(&mut **tx)
        .await?;
        candidates_inserted += result.rows_affected() as i64;
    }

    Ok((jobs_inserted, candidates_inserted))
}

/// Operator path: wipes both collections and reloads the fixtures.
/// Unlike `ensure_seeded`, failures here are hard errors.
pub async fn force_reseed(pool: &PgPool, fixtures_dir: &Path) -> Result<(i64, i64)> {
    let fixtures = load_fixtures(fixtures_dir)?;

    let mut tx = pool.begin().await?;
    sqlx::query("TRUNCATE jobs, candidates")
        .execute(&mut *tx)
        .await?;
    let counts = insert_fixtures(&mut tx, fixtures).await?;
    tx.commit().await?;

    Ok(counts)
}
