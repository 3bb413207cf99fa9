mod member;

pub use member::{
    CreateMemberRequest, CreateMemberResponse, CreateMemberV1Request, MemberListResponse,
    MemberSummary, UpdateMemberRequest, UpdateMemberResponse,
};
