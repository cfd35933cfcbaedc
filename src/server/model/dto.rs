//! Conversions from database models into API DTOs.

use entity::sea_orm_active_enums as db_enums;

use crate::{
    model::{
        audit::{AuditDto, AuditStatus, FindingDto, FindingSeverity},
        item::{FrequencyUnit, ItemDto},
        project::ProjectDto,
        team::TeamDto,
        user::UserDto,
    },
    server::{
        model::db::{AuditModel, FindingModel, ItemModel, ProjectModel, TeamModel, UserModel},
        util::schedule::Schedule,
    },
};

impl From<db_enums::AuditStatus> for AuditStatus {
    fn from(status: db_enums::AuditStatus) -> Self {
        match status {
            db_enums::AuditStatus::Pass => Self::Pass,
            db_enums::AuditStatus::Fail => Self::Fail,
        }
    }
}

impl From<AuditStatus> for db_enums::AuditStatus {
    fn from(status: AuditStatus) -> Self {
        match status {
            AuditStatus::Pass => Self::Pass,
            AuditStatus::Fail => Self::Fail,
        }
    }
}

impl From<db_enums::FindingSeverity> for FindingSeverity {
    fn from(severity: db_enums::FindingSeverity) -> Self {
        match severity {
            db_enums::FindingSeverity::Info => Self::Info,
            db_enums::FindingSeverity::Low => Self::Low,
            db_enums::FindingSeverity::Medium => Self::Medium,
            db_enums::FindingSeverity::High => Self::High,
        }
    }
}

impl From<FindingSeverity> for db_enums::FindingSeverity {
    fn from(severity: FindingSeverity) -> Self {
        match severity {
            FindingSeverity::Info => Self::Info,
            FindingSeverity::Low => Self::Low,
            FindingSeverity::Medium => Self::Medium,
            FindingSeverity::High => Self::High,
        }
    }
}

impl From<db_enums::FrequencyUnit> for FrequencyUnit {
    fn from(unit: db_enums::FrequencyUnit) -> Self {
        match unit {
            db_enums::FrequencyUnit::Day => Self::Day,
            db_enums::FrequencyUnit::Week => Self::Week,
            db_enums::FrequencyUnit::Month => Self::Month,
            db_enums::FrequencyUnit::Year => Self::Year,
        }
    }
}

impl From<FrequencyUnit> for db_enums::FrequencyUnit {
    fn from(unit: FrequencyUnit) -> Self {
        match unit {
            FrequencyUnit::Day => Self::Day,
            FrequencyUnit::Week => Self::Week,
            FrequencyUnit::Month => Self::Month,
            FrequencyUnit::Year => Self::Year,
        }
    }
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
            team_id: user.team_id,
            created_at: user.created_at,
        }
    }
}

impl From<TeamModel> for TeamDto {
    fn from(team: TeamModel) -> Self {
        Self {
            id: team.id,
            name: team.name,
            created_at: team.created_at,
        }
    }
}

impl From<ProjectModel> for ProjectDto {
    fn from(project: ProjectModel) -> Self {
        Self {
            id: project.id,
            team_id: project.team_id,
            name: project.name,
            created_at: project.created_at,
        }
    }
}

impl From<ItemModel> for ItemDto {
    fn from(item: ItemModel) -> Self {
        let schedule = Schedule::from_columns(item.frequency_value, item.frequency_unit);

        Self {
            id: item.id,
            project_id: item.project_id,
            name: item.name,
            description: item.description,
            frequency: schedule.to_frequency(),
            created_at: item.created_at,
        }
    }
}

impl From<AuditModel> for AuditDto {
    fn from(audit: AuditModel) -> Self {
        Self {
            id: audit.id,
            item_id: audit.item_id,
            user_id: audit.user_id,
            status: audit.status.into(),
            notes: audit.notes,
            created_at: audit.created_at,
        }
    }
}

impl From<FindingModel> for FindingDto {
    fn from(finding: FindingModel) -> Self {
        Self {
            id: finding.id,
            audit_id: finding.audit_id,
            severity: finding.severity.into(),
            notes: finding.notes,
            created_at: finding.created_at,
        }
    }
}
