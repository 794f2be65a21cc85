//! Test Data Builders
//!
//! Builder patterns for constructing drafts with sensible defaults, so
//! tests only spell out the fields they care about.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use core_kernel::{CoverId, CoverPeriod, Money};
use domain_claims::{ClaimDraft, ClaimType};
use domain_cover::{CoverDraft, CoverType};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for cover drafts
///
/// Defaults to a 90-day Tanker cover starting next week, which passes every
/// validation rule.
pub struct CoverDraftBuilder {
    cover_type: CoverType,
    start_date: NaiveDate,
    days: i64,
}

impl Default for CoverDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverDraftBuilder {
    pub fn new() -> Self {
        Self {
            cover_type: CoverType::Tanker,
            start_date: TemporalFixtures::upcoming_start(),
            days: 90,
        }
    }

    pub fn cover_type(mut self, cover_type: CoverType) -> Self {
        self.cover_type = cover_type;
        self
    }

    pub fn starting(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn lasting_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    pub fn build(self) -> CoverDraft {
        CoverDraft {
            cover_type: self.cover_type,
            period: CoverPeriod::new(self.start_date, self.start_date + Duration::days(self.days)),
        }
    }
}

/// Builder for claim drafts
///
/// Defaults to a modest collision claim; callers point it at a cover and
/// usually only adjust the date or cost.
pub struct ClaimDraftBuilder {
    cover_id: CoverId,
    created: DateTime<Utc>,
    claim_type: ClaimType,
    damage_cost: Money,
}

impl ClaimDraftBuilder {
    /// Starts a claim against the given cover, dated at its start
    pub fn against(cover: &domain_cover::Cover) -> Self {
        Self {
            cover_id: cover.id,
            created: TemporalFixtures::noon(cover.period.start_date),
            claim_type: ClaimType::Collision,
            damage_cost: MoneyFixtures::modest_damage(),
        }
    }

    pub fn cover_id(mut self, cover_id: CoverId) -> Self {
        self.cover_id = cover_id;
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn claim_type(mut self, claim_type: ClaimType) -> Self {
        self.claim_type = claim_type;
        self
    }

    pub fn damage_cost(mut self, damage_cost: Money) -> Self {
        self.damage_cost = damage_cost;
        self
    }

    pub fn build(self) -> ClaimDraft {
        ClaimDraft {
            cover_id: self.cover_id,
            created: self.created,
            claim_type: self.claim_type,
            damage_cost: self.damage_cost,
        }
    }
}
