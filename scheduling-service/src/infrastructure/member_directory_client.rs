//! HTTP client for the member directory service: one call for a team's
//! resolved members, then one unavailability lookup per member fanned
//! out with `try_join_all`.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::future::try_join_all;
use serde::Deserialize;
use shared::{ApiResponse, DomainError, DomainResult, MemberRole, OfficeDays};
use uuid::Uuid;

use crate::domain::engine::{ResolvedMember, UnavailabilityWindow};

#[derive(Debug, Deserialize)]
struct MemberResponse {
    id: Uuid,
    office_days: OfficeDays,
    role: MemberRole,
    active: bool,
    #[serde(default)]
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct UnavailablePeriodResponse {
    member_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

/// Fetches the read view the eligibility filter needs for one generation:
/// active members of a team plus their unavailability overlapping the
/// requested range.
#[async_trait]
pub trait MemberDirectoryClient: Send + Sync {
    async fn resolve_team(
        &self,
        team_id: Uuid,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<(Vec<ResolvedMember>, Vec<UnavailabilityWindow>)>;

    /// Looks up one member by id, used by the swap validator to resolve a
    /// proposed replacement.
    async fn find_member(&self, member_id: Uuid) -> DomainResult<Option<ResolvedMember>>;

    /// Unavailability for one member over a range, used by the swap
    /// validator to check the proposed replacement's availability.
    async fn unavailability_for(
        &self,
        member_id: Uuid,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<Vec<UnavailabilityWindow>>;
}

pub struct ReqwestMemberDirectoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestMemberDirectoryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_unavailability(
        &self,
        member_id: Uuid,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<Vec<UnavailabilityWindow>> {
        let url = format!(
            "{}/api/v1/members/{}/unavailability?range_start={}&range_end={}",
            self.base_url, member_id, range_start, range_end
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalServiceError(format!(
                "data-service returned {} fetching unavailability for {}: {}",
                status, member_id, body
            )));
        }

        let periods = response
            .json::<Vec<UnavailablePeriodResponse>>()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        Ok(periods
            .into_iter()
            .map(|p| UnavailabilityWindow {
                member_id: p.member_id,
                start_date: p.start_date,
                end_date: p.end_date,
            })
            .collect())
    }
}

#[async_trait]
impl MemberDirectoryClient for ReqwestMemberDirectoryClient {
    async fn resolve_team(
        &self,
        team_id: Uuid,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<(Vec<ResolvedMember>, Vec<UnavailabilityWindow>)> {
        let url = format!("{}/api/v1/teams/{}/resolved-members", self.base_url, team_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalServiceError(format!(
                "data-service returned {} resolving team {}: {}",
                status, team_id, body
            )));
        }

        let api_response = response
            .json::<ApiResponse<Vec<MemberResponse>>>()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        let members: Vec<ResolvedMember> = api_response
            .data
            .into_iter()
            .filter(|m| m.active)
            .map(|m| ResolvedMember {
                id: m.id,
                display_name: m.display_name,
                office_days: m.office_days,
                role: m.role,
                active: m.active,
            })
            .collect();

        let unavailability = try_join_all(
            members
                .iter()
                .map(|m| self.fetch_unavailability(m.id, range_start, range_end)),
        )
        .await?
        .into_iter()
        .flatten()
        .collect();

        Ok((members, unavailability))
    }

    async fn find_member(&self, member_id: Uuid) -> DomainResult<Option<ResolvedMember>> {
        let url = format!("{}/api/v1/members/{}", self.base_url, member_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalServiceError(format!(
                "data-service returned {} fetching member {}: {}",
                status, member_id, body
            )));
        }

        let api_response = response
            .json::<ApiResponse<MemberResponse>>()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        let m = api_response.data;
        Ok(Some(ResolvedMember {
            id: m.id,
            display_name: m.display_name,
            office_days: m.office_days,
            role: m.role,
            active: m.active,
        }))
    }

    async fn unavailability_for(
        &self,
        member_id: Uuid,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<Vec<UnavailabilityWindow>> {
        self.fetch_unavailability(member_id, range_start, range_end).await
    }
}
