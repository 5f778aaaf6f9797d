//! Use case implementations.

mod submit_membership_use_case;

pub use submit_membership_use_case::SubmitMembershipUseCase;
