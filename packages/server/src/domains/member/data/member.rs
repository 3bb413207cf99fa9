//! Member transfer objects - the API contract, decoupled from the row model.

use serde::{Deserialize, Serialize};

use crate::common::{Address, MemberId};
use crate::domains::member::models::member::Member;

/// Narrow member representation for the v2 list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MemberSummary {
    pub name: String,
}

impl From<Member> for MemberSummary {
    fn from(member: Member) -> Self {
        Self { name: member.name }
    }
}

/// Envelope for the v2 member list: `{count, data}`.
#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub count: usize,
    pub data: Vec<MemberSummary>,
}

/// v1 create request - a member-shaped payload.
///
/// Accepting the entity shape at the boundary is kept only for contract
/// compatibility; new clients use [`CreateMemberRequest`].
#[derive(Debug, Deserialize)]
pub struct CreateMemberV1Request {
    pub name: String,
    #[serde(default)]
    pub address: Address,
}

/// v2 create request - only what the operation needs.
#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateMemberResponse {
    pub id: MemberId,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateMemberResponse {
    pub id: MemberId,
    pub name: String,
}
