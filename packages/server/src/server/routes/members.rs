//! Member endpoints.
//!
//! v1 responses expose the row model itself (kept for contract
//! compatibility - every column shows up on the wire); v2 responses are
//! narrow transfer objects.

use axum::extract::{Extension, Path};
use axum::Json;

use crate::common::{Address, MemberId, ServiceError};
use crate::domains::member::actions;
use crate::domains::member::data::{
    CreateMemberRequest, CreateMemberResponse, CreateMemberV1Request, MemberListResponse,
    MemberSummary, UpdateMemberRequest, UpdateMemberResponse,
};
use crate::domains::member::models::member::Member;
use crate::server::app::AppState;

fn require_name(name: &str) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::Validation(
            "name must not be blank".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/v1/members - full member records.
pub async fn members_v1(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Member>>, ServiceError> {
    let members = actions::find_members(&state.db_pool).await?;
    Ok(Json(members))
}

/// GET /api/v2/members - `{count, data: [{name}]}`.
pub async fn members_v2(
    Extension(state): Extension<AppState>,
) -> Result<Json<MemberListResponse>, ServiceError> {
    let members = actions::find_members(&state.db_pool).await?;

    let data: Vec<MemberSummary> = members.into_iter().map(MemberSummary::from).collect();
    Ok(Json(MemberListResponse {
        count: data.len(),
        data,
    }))
}

/// POST /api/v1/members - member-shaped payload in, `{id}` out.
pub async fn create_member_v1(
    Extension(state): Extension<AppState>,
    Json(request): Json<CreateMemberV1Request>,
) -> Result<Json<CreateMemberResponse>, ServiceError> {
    require_name(&request.name)?;

    let id = actions::register_member(request.name, request.address, &state.db_pool).await?;
    Ok(Json(CreateMemberResponse { id }))
}

/// POST /api/v2/members - `{name}` in, `{id}` out.
pub async fn create_member_v2(
    Extension(state): Extension<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<Json<CreateMemberResponse>, ServiceError> {
    require_name(&request.name)?;

    let id = actions::register_member(request.name, Address::default(), &state.db_pool).await?;
    Ok(Json(CreateMemberResponse { id }))
}

/// PUT /api/v2/members/{id} - rename, `{id, name}` out, 404 on unknown id.
pub async fn update_member_v2(
    Extension(state): Extension<AppState>,
    Path(id): Path<MemberId>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<Json<UpdateMemberResponse>, ServiceError> {
    require_name(&request.name)?;

    actions::update_member_name(id, request.name, &state.db_pool).await?;

    let member = actions::find_member(id, &state.db_pool).await?;
    Ok(Json(UpdateMemberResponse {
        id: member.id,
        name: member.name,
    }))
}
