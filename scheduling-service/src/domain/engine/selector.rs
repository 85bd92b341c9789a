//! Picks the assignee from a non-empty candidate set by ascending
//! `(primary, secondary, tiebreak)` rank.

use serde::{Deserialize, Serialize};
use shared::TaskKind;
use utoipa::ToSchema;
use uuid::Uuid;

use super::availability::ResolvedMember;
use super::ledger::FairnessLedger;

/// Fixed `{primary, secondary, tiebreak}` record with lexicographic
/// comparison, rather than a dict-keyed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub struct RankKey {
    pub primary: i64,
    pub secondary: i64,
    pub tiebreak: u64,
}

/// One candidate's rank, recorded for the Audit Log regardless of
/// whether it was chosen.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandidateRank {
    pub member_id: Uuid,
    pub rank: RankKey,
}

pub struct SelectionResult {
    pub chosen: Option<Uuid>,
    pub candidates: Vec<CandidateRank>,
    pub reason: String,
}

/// Deterministic 64-bit FNV-1a-style hash of `(member_id, key, kind,
/// seed)`. Hand-written instead of `std::hash::DefaultHasher` because the
/// default hasher's output is not guaranteed stable across compiler
/// versions, and generations must stay byte-identical across runs on
/// potentially different toolchains.
pub fn tie_hash(member_id: Uuid, key: &str, kind: TaskKind, seed: u64) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    let mut hash = FNV_OFFSET ^ seed;
    let mut feed = |bytes: &[u8]| {
        for &byte in bytes {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    };

    feed(member_id.as_bytes());
    feed(key.as_bytes());
    feed(format!("{:?}", kind).as_bytes());
    hash
}

/// Level 1 uses `total` unchanged; higher levels multiply `total` by
/// `aggressiveness` when constructing the secondary score, so a
/// heavily-loaded member is demoted more strongly on primary ties.
fn secondary_score(total: i64, aggressiveness: u8) -> i64 {
    total * aggressiveness.max(1) as i64
}

pub fn select(
    candidates: &[ResolvedMember],
    ledger: &FairnessLedger,
    kind: TaskKind,
    key_iso: &str,
    seed: u64,
    aggressiveness: u8,
) -> SelectionResult {
    let mut ranked: Vec<CandidateRank> = candidates
        .iter()
        .map(|candidate| {
            let primary = ledger.count(candidate.id, kind);
            let total = ledger.total(candidate.id);
            let secondary = secondary_score(total, aggressiveness);
            let tiebreak = tie_hash(candidate.id, key_iso, kind, seed);
            CandidateRank {
                member_id: candidate.id,
                rank: RankKey {
                    primary,
                    secondary,
                    tiebreak,
                },
            }
        })
        .collect();

    ranked.sort_by_key(|c| c.rank);

    let (chosen, reason) = match ranked.as_slice() {
        [] => (None, "no eligible candidates".to_string()),
        [only] => (Some(only.member_id), "only eligible candidate".to_string()),
        [head, runner_up, ..] => {
            let reason = if head.rank.primary < runner_up.rank.primary {
                "lowest primary"
            } else if head.rank.secondary < runner_up.rank.secondary {
                "tied on primary, lowest total"
            } else if head.rank.tiebreak != runner_up.rank.tiebreak {
                "tied on primary+total, lowest hash"
            } else {
                "tied on primary+total+hash"
            };
            (Some(head.member_id), reason.to_string())
        }
    };

    SelectionResult {
        chosen,
        candidates: ranked,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{MemberRole, OfficeDays};

    fn member() -> ResolvedMember {
        ResolvedMember {
            id: Uuid::new_v4(),
            display_name: "Test".into(),
            office_days: OfficeDays::mon_to_fri(),
            role: MemberRole::Member,
            active: true,
        }
    }

    #[test]
    fn tie_hash_is_deterministic() {
        let id = Uuid::new_v4();
        let a = tie_hash(id, "2025-01-06", TaskKind::AtmMorning, 12345);
        let b = tie_hash(id, "2025-01-06", TaskKind::AtmMorning, 12345);
        assert_eq!(a, b);
    }

    #[test]
    fn tie_hash_varies_with_seed() {
        let id = Uuid::new_v4();
        let a = tie_hash(id, "2025-01-06", TaskKind::AtmMorning, 12345);
        let b = tie_hash(id, "2025-01-06", TaskKind::AtmMorning, 99999);
        assert_ne!(a, b);
    }

    #[test]
    fn lowest_primary_wins() {
        let low = member();
        let high = member();
        let window = (
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        );
        let mut ledger = FairnessLedger::new(window.0, window.1);
        ledger.increment(high.id, TaskKind::AtmMorning);
        ledger.increment(high.id, TaskKind::AtmMorning);

        let result = select(
            &[low.clone(), high.clone()],
            &ledger,
            TaskKind::AtmMorning,
            "2025-01-06",
            12345,
            1,
        );
        assert_eq!(result.chosen, Some(low.id));
        assert_eq!(result.reason, "lowest primary");
    }

    #[test]
    fn aggressiveness_scales_secondary_on_tie() {
        let a = member();
        let b = member();
        let window = (
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        );
        let mut ledger = FairnessLedger::new(window.0, window.1);
        // Equal primary for AtmMorning, but `a` has a higher other-kind
        // total, so higher aggressiveness should demote `a` more.
        ledger.increment(a.id, TaskKind::SysaidMaker);

        let result = select(&[a.clone(), b.clone()], &ledger, TaskKind::AtmMorning, "k", 1, 5);
        assert_eq!(result.chosen, Some(b.id));
    }
}
