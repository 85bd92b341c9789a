use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use data_service::api::AppState;
use data_service::api::requests::{
    CreateMemberRequest, CreateTeamRequest, CreateUnavailablePeriodRequest, UpdateMemberRequest,
    UpdateTeamRequest,
};
use data_service::domain::entities::{Member, Team, TeamMembership, UnavailablePeriod};
use data_service::domain::repositories::{
    MemberRepository, MembershipRepository, TeamRepository, UnavailabilityRepository,
};
use data_service::infrastructure::redis::RedisPool;
use data_service::infrastructure::MemberDirectoryService;
use shared::{DomainError, DomainResult, MemberRole, OfficeDays, PaginationParams};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

#[derive(Default)]
pub struct MockMemberRepository {
    members: RwLock<HashMap<Uuid, Member>>,
}

impl MockMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(member_list: Vec<Member>) -> Self {
        let repo = Self::new();
        {
            let mut members = repo.members.write().unwrap();
            for m in member_list {
                members.insert(m.id, m);
            }
        }
        repo
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn create(&self, request: CreateMemberRequest) -> DomainResult<Member> {
        let now = Utc::now();
        let member = Member {
            id: Uuid::new_v4(),
            display_name: request.display_name,
            office_days: request.office_days,
            email: request.email,
            role: request.role.unwrap_or(MemberRole::Member),
            active: true,
            created_at: now,
            updated_at: now,
        };
        self.members.write().unwrap().insert(member.id, member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Member>> {
        Ok(self.members.read().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Member>> {
        Ok(self
            .members
            .read()
            .unwrap()
            .values()
            .find(|m| m.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> DomainResult<Vec<Member>> {
        let members = self.members.read().unwrap();
        Ok(ids.into_iter().filter_map(|id| members.get(&id).cloned()).collect())
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Member>, u64)> {
        let members = self.members.read().unwrap();
        let mut all: Vec<Member> = members.values().cloned().collect();
        all.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        let total = all.len() as u64;
        let offset = (params.page - 1) * params.page_size;
        let paginated: Vec<Member> = all
            .into_iter()
            .skip(offset as usize)
            .take(params.page_size as usize)
            .collect();
        Ok((paginated, total))
    }

    async fn update(&self, id: Uuid, request: UpdateMemberRequest) -> DomainResult<Member> {
        let mut members = self.members.write().unwrap();
        let member = members
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Member with id {} not found", id)))?;

        if let Some(display_name) = request.display_name {
            member.display_name = display_name;
        }
        if let Some(office_days) = request.office_days {
            member.office_days = office_days;
        }
        if let Some(email) = request.email {
            member.email = Some(email);
        }
        if let Some(role) = request.role {
            member.role = role;
        }
        if let Some(active) = request.active {
            member.active = active;
        }
        member.updated_at = Utc::now();

        Ok(member.clone())
    }

    async fn deactivate(&self, id: Uuid) -> DomainResult<()> {
        let mut members = self.members.write().unwrap();
        let member = members
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Member with id {} not found", id)))?;
        member.active = false;
        member.updated_at = Utc::now();
        Ok(())
    }

    async fn find_by_team_id(&self, _team_id: Uuid) -> DomainResult<Vec<Member>> {
        let members = self.members.read().unwrap();
        Ok(members.values().filter(|m| m.active).cloned().collect())
    }
}

/// Mock Team Repository for testing
#[derive(Default)]
pub struct MockTeamRepository {
    teams: RwLock<HashMap<Uuid, Team>>,
}

impl MockTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_teams(team_list: Vec<Team>) -> Self {
        let repo = Self::new();
        {
            let mut teams = repo.teams.write().unwrap();
            for t in team_list {
                teams.insert(t.id, t);
            }
        }
        repo
    }
}

#[async_trait]
impl TeamRepository for MockTeamRepository {
    async fn create(&self, request: CreateTeamRequest) -> DomainResult<Team> {
        let now = Utc::now();
        let team = Team {
            id: Uuid::new_v4(),
            name: request.name,
            parent_id: request.parent_id,
            created_at: now,
            updated_at: now,
        };
        self.teams.write().unwrap().insert(team.id, team.clone());
        Ok(team)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Team>> {
        Ok(self.teams.read().unwrap().get(&id).cloned())
    }

    async fn list(&self, params: PaginationParams) -> DomainResult<(Vec<Team>, u64)> {
        let teams = self.teams.read().unwrap();
        let mut all: Vec<Team> = teams.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        let total = all.len() as u64;
        let offset = (params.page - 1) * params.page_size;
        let paginated: Vec<Team> = all
            .into_iter()
            .skip(offset as usize)
            .take(params.page_size as usize)
            .collect();
        Ok((paginated, total))
    }

    async fn list_by_parent_id(&self, parent_id: Uuid) -> DomainResult<Vec<Team>> {
        let teams = self.teams.read().unwrap();
        Ok(teams
            .values()
            .filter(|t| t.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, request: UpdateTeamRequest) -> DomainResult<Team> {
        let mut teams = self.teams.write().unwrap();
        let team = teams
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Team with id {} not found", id)))?;

        if let Some(name) = request.name {
            team.name = name;
        }
        if let Some(parent_id) = request.parent_id {
            team.parent_id = Some(parent_id);
        }
        team.updated_at = Utc::now();

        Ok(team.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.teams
            .write()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Team with id {} not found", id)))?;
        Ok(())
    }

    async fn get_descendant_ids(&self, team_id: Uuid) -> DomainResult<Vec<Uuid>> {
        let teams = self.teams.read().unwrap();
        let mut descendants = Vec::new();
        let mut frontier = vec![team_id];
        while let Some(current) = frontier.pop() {
            for team in teams.values() {
                if team.parent_id == Some(current) {
                    descendants.push(team.id);
                    frontier.push(team.id);
                }
            }
        }
        Ok(descendants)
    }
}

/// Mock Membership Repository for testing
#[derive(Default)]
pub struct MockMembershipRepository {
    memberships: RwLock<Vec<TeamMembership>>,
}

impl MockMembershipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipRepository for MockMembershipRepository {
    async fn add_member(&self, member_id: Uuid, team_id: Uuid) -> DomainResult<TeamMembership> {
        let membership = TeamMembership {
            id: Uuid::new_v4(),
            member_id,
            team_id,
            created_at: Utc::now(),
        };
        self.memberships.write().unwrap().push(membership.clone());
        Ok(membership)
    }

    async fn remove_member(&self, member_id: Uuid, team_id: Uuid) -> DomainResult<()> {
        let mut memberships = self.memberships.write().unwrap();
        let initial_len = memberships.len();
        memberships.retain(|m| !(m.member_id == member_id && m.team_id == team_id));
        if memberships.len() == initial_len {
            Err(DomainError::NotFound("Membership not found".to_string()))
        } else {
            Ok(())
        }
    }

    async fn find_by_team_id(&self, team_id: Uuid) -> DomainResult<Vec<TeamMembership>> {
        Ok(self
            .memberships
            .read()
            .unwrap()
            .iter()
            .filter(|m| m.team_id == team_id)
            .cloned()
            .collect())
    }
}

/// Mock Unavailability Repository for testing
#[derive(Default)]
pub struct MockUnavailabilityRepository {
    periods: RwLock<HashMap<Uuid, UnavailablePeriod>>,
}

impl MockUnavailabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UnavailabilityRepository for MockUnavailabilityRepository {
    async fn create(
        &self,
        request: CreateUnavailablePeriodRequest,
    ) -> DomainResult<UnavailablePeriod> {
        if request.end_date < request.start_date {
            return Err(DomainError::InvalidInput(
                "end_date must not precede start_date".to_string(),
            ));
        }
        let period = UnavailablePeriod {
            id: Uuid::new_v4(),
            member_id: request.member_id,
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason,
            created_at: Utc::now(),
        };
        self.periods.write().unwrap().insert(period.id, period.clone());
        Ok(period)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.periods
            .write()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| DomainError::NotFound(format!("Unavailability window {} not found", id)))?;
        Ok(())
    }

    async fn find_overlapping(
        &self,
        member_id: Uuid,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<Vec<UnavailablePeriod>> {
        Ok(self
            .periods
            .read()
            .unwrap()
            .values()
            .filter(|p| p.member_id == member_id && p.start_date <= range_end && p.end_date >= range_start)
            .cloned()
            .collect())
    }

    async fn find_overlapping_for_members(
        &self,
        member_ids: Vec<Uuid>,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> DomainResult<Vec<UnavailablePeriod>> {
        Ok(self
            .periods
            .read()
            .unwrap()
            .values()
            .filter(|p| {
                member_ids.contains(&p.member_id) && p.start_date <= range_end && p.end_date >= range_start
            })
            .cloned()
            .collect())
    }
}

/// Mock Redis Pool for testing (no-op implementation)
pub async fn create_mock_redis_pool() -> RedisPool {
    let client = redis::Client::open("redis://localhost:6379").unwrap();
    redis::aio::ConnectionManager::new(client).await.unwrap()
}

/// Create test app state with mock repositories
pub fn create_test_app_state(
    member_repo: Arc<dyn MemberRepository>,
    team_repo: Arc<dyn TeamRepository>,
    membership_repo: Arc<dyn MembershipRepository>,
    unavailability_repo: Arc<dyn UnavailabilityRepository>,
    redis_pool: RedisPool,
) -> AppState {
    let member_directory = Arc::new(MemberDirectoryService::new(
        team_repo.clone(),
        member_repo.clone(),
        membership_repo.clone(),
    ));

    AppState::new(
        member_repo,
        team_repo,
        membership_repo,
        unavailability_repo,
        member_directory,
        redis_pool,
    )
}

/// Create a sample member for testing
pub fn create_sample_member(id: Uuid, display_name: &str, email: &str) -> Member {
    let now = Utc::now();
    Member {
        id,
        display_name: display_name.to_string(),
        office_days: OfficeDays::mon_to_fri(),
        email: Some(email.to_string()),
        role: MemberRole::Member,
        active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Create a sample team for testing
pub fn create_sample_team(id: Uuid, name: &str, parent_id: Option<Uuid>) -> Team {
    let now = Utc::now();
    Team {
        id,
        name: name.to_string(),
        parent_id,
        created_at: now,
        updated_at: now,
    }
}
